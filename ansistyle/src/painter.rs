//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


use crate::approximation::{ColorApproximation, HexColorTarget};
use crate::codes::Attributes;
use crate::color::{BackgroundColor, Color};
use crate::config::{OutputTarget, StyleConfig};
use crate::entry::Entry;
use crate::generator::{ConsoleStringGenerator, StringGenerator};
use crate::hsl::Hsl;
use crate::parser::{ConsoleEntryParser, EntryParser};
use crate::style::Style;
use crate::xcode::{XcodeColorsEntryParser, XcodeColorsStringGenerator};
use tracing::{instrument, trace};

/// Applies, removes and strips styling on strings.
///
/// A `Painter` captures a [`StyleConfig`] and routes every operation through the
/// parse, merge and generate pipeline of the dialect its output target selects: the
/// console pair for [`OutputTarget::Console`] and [`OutputTarget::Unknown`], the
/// XcodeColors pair for [`OutputTarget::XcodeColors`].
///
/// Styling an already styled string keeps what it has. The input is parsed back into
/// segments, the new attributes are layered on, and the result is regenerated:
///
/// ```
/// use tinct_ansistyle::{NamedColor, Painter, Style};
///
/// let painter = Painter::default();
/// let red = painter.apply_color("Hello", NamedColor::Red);
/// assert_eq!(red, "\x1b[31mHello\x1b[0m");
/// assert_eq!(painter.apply_style(&red, Style::Bold), "\x1b[31;1mHello\x1b[0m");
/// assert_eq!(painter.strip(&red), "Hello");
/// ```
///
/// Every operation is total. Unparseable color input leaves the string unchanged, and
/// on a disabled painter all styling and removal operations return their input as is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Painter {
    config: StyleConfig,
}

impl Painter {
    /// Creates a painter for `config`.
    pub fn new(config: StyleConfig) -> Painter {
        Painter { config }
    }

    /// Creates a painter for the configuration detected from the environment.
    pub fn detect() -> Painter {
        Painter::new(StyleConfig::detect())
    }

    /// The captured configuration.
    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Parses `text` with the parser of the configured dialect.
    pub fn parse(&self, text: &str) -> Entry {
        match self.config.target {
            OutputTarget::XcodeColors => XcodeColorsEntryParser.parse(text),
            OutputTarget::Console | OutputTarget::Unknown => ConsoleEntryParser.parse(text),
        }
    }

    /// Parses `text`, or returns `None` if it holds an escape the configured dialect
    /// cannot read.
    pub fn parse_complete(&self, text: &str) -> Option<Entry> {
        let entry = match self.config.target {
            OutputTarget::XcodeColors => XcodeColorsEntryParser.parse_complete(text),
            OutputTarget::Console | OutputTarget::Unknown => ConsoleEntryParser.parse_complete(text),
        };
        if entry.is_none() {
            trace!("unreadable escape, leaving text unchanged");
        }
        entry
    }

    /// Renders `entry` with the generator of the configured dialect.
    pub fn generate(&self, entry: &Entry) -> String {
        match self.config.target {
            OutputTarget::XcodeColors => XcodeColorsStringGenerator::new(self.config).generate(entry),
            OutputTarget::Console | OutputTarget::Unknown => {
                ConsoleStringGenerator::new(self.config).generate(entry)
            }
        }
    }

    /// Layers `attributes` onto `text`.
    ///
    /// When `text` is a single segment its colors are replaced; when it is made of
    /// several segments each keeps its own colors. Styles are always added. Text holding
    /// an escape that cannot be read is returned unchanged.
    #[instrument(level = "trace", skip_all, fields(len = text.len()))]
    pub fn apply(&self, text: &str, attributes: &Attributes) -> String {
        if !self.config.enabled || attributes.is_empty() {
            return text.to_string();
        }
        match self.parse_complete(text) {
            Some(entry) => self.generate(&entry.merge(attributes)),
            None => text.to_string(),
        }
    }

    /// Sets the foreground color.
    pub fn apply_color(&self, text: &str, color: impl Into<Color>) -> String {
        self.apply(text, &Attributes::from_color(color))
    }

    /// Sets the background color.
    pub fn apply_background_color(&self, text: &str, color: impl Into<BackgroundColor>) -> String {
        self.apply(text, &Attributes::from_background_color(color))
    }

    /// Adds a style.
    pub fn apply_style(&self, text: &str, style: Style) -> String {
        self.apply(text, &Attributes::from_style(style))
    }

    /// Adds several styles, in order.
    pub fn apply_styles(&self, text: &str, styles: impl IntoIterator<Item = Style>) -> String {
        self.apply(text, &Attributes::from_styles(styles))
    }

    /// Sets the foreground color from a hex string such as `#afafd7` or `fed`.
    pub fn hex(&self, text: &str, color: &str, target: HexColorTarget) -> String {
        match ColorApproximation::parse_hex(color) {
            Some(approximation) => self.apply_color(text, approximation.convert(target)),
            None => text.to_string(),
        }
    }

    /// Sets the background color from a hex string.
    pub fn on_hex(&self, text: &str, color: &str, target: HexColorTarget) -> String {
        match ColorApproximation::parse_hex(color) {
            Some(approximation) => {
                self.apply_background_color(text, approximation.convert_background(target))
            }
            None => text.to_string(),
        }
    }

    /// Sets the foreground color from an integer in `0x000000..=0xFFFFFF`.
    pub fn hex_value(&self, text: &str, color: u32, target: HexColorTarget) -> String {
        match ColorApproximation::parse_hex_int(color) {
            Some(approximation) => self.apply_color(text, approximation.convert(target)),
            None => text.to_string(),
        }
    }

    /// Sets the background color from an integer in `0x000000..=0xFFFFFF`.
    pub fn on_hex_value(&self, text: &str, color: u32, target: HexColorTarget) -> String {
        match ColorApproximation::parse_hex_int(color) {
            Some(approximation) => {
                self.apply_background_color(text, approximation.convert_background(target))
            }
            None => text.to_string(),
        }
    }

    /// Sets the foreground color from HSL.
    pub fn hsl(&self, text: &str, color: impl Into<Hsl>, target: HexColorTarget) -> String {
        let approximation = ColorApproximation::from_rgb(color.into().to_rgb());
        self.apply_color(text, approximation.convert(target))
    }

    /// Sets the background color from HSL.
    pub fn on_hsl(&self, text: &str, color: impl Into<Hsl>, target: HexColorTarget) -> String {
        let approximation = ColorApproximation::from_rgb(color.into().to_rgb());
        self.apply_background_color(text, approximation.convert_background(target))
    }

    /// Clears the foreground color of every segment.
    pub fn remove_color(&self, text: &str) -> String {
        self.rewrite(text, Entry::without_color)
    }

    /// Clears the background color of every segment.
    pub fn remove_background_color(&self, text: &str) -> String {
        self.rewrite(text, Entry::without_background_color)
    }

    /// Removes every occurrence of `style` from every segment.
    pub fn remove_style(&self, text: &str, style: Style) -> String {
        self.rewrite(text, |entry| entry.without_style(style))
    }

    /// Removes all styles from every segment, keeping colors.
    pub fn remove_all_styles(&self, text: &str) -> String {
        self.rewrite(text, Entry::without_styles)
    }

    /// Returns the visible text with all styling removed.
    ///
    /// Unlike the other operations this also works on a disabled painter. Text holding an
    /// escape that cannot be read is returned unchanged.
    pub fn strip(&self, text: &str) -> String {
        match self.parse_complete(text) {
            Some(entry) => entry.plain_text(),
            None => text.to_string(),
        }
    }

    #[instrument(level = "trace", skip_all, fields(len = text.len()))]
    fn rewrite(&self, text: &str, f: impl FnOnce(Entry) -> Entry) -> String {
        if !self.config.enabled {
            return text.to_string();
        }
        match self.parse_complete(text) {
            Some(entry) => self.generate(&f(entry)),
            None => text.to_string(),
        }
    }
}
