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
use crate::color::{BackgroundColor, Color, Rgb};
use crate::entry::{Entry, Segment};
use crate::hsl::Hsl;
use crate::painter::Painter;
use crate::style::Style;

/// Accumulates styling for a piece of text and renders it once.
///
/// Each call returns the updated builder, so chains never touch escape sequences until
/// [`build`](StyledStringBuilder::build). A later color replaces an earlier one; styles
/// accumulate.
///
/// # Examples
///
/// ```
/// use tinct_ansistyle::{NamedColor, Painter, Style, StyledStringBuilder};
///
/// let text = StyledStringBuilder::new("Hello")
///     .color(NamedColor::Red)
///     .style(Style::Bold)
///     .build(&Painter::default());
/// assert_eq!(text, "\x1b[31;1mHello\x1b[0m");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyledStringBuilder {
    text: String,
    color: Option<Color>,
    background_color: Option<BackgroundColor>,
    styles: Vec<Style>,
}

impl StyledStringBuilder {
    /// Starts a builder over `text` with no styling.
    pub fn new(text: impl Into<String>) -> StyledStringBuilder {
        StyledStringBuilder {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set the foreground color
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the background color
    pub fn background_color(mut self, color: impl Into<BackgroundColor>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Add a style
    pub fn style(mut self, style: Style) -> Self {
        self.styles.push(style);
        self
    }

    /// Add several styles
    pub fn styles(mut self, styles: impl IntoIterator<Item = Style>) -> Self {
        self.styles.extend(styles);
        self
    }

    /// Set a 256-color palette foreground
    pub fn bit8(self, index: u8) -> Self {
        self.color(Color::Bit8(index))
    }

    /// Set a true color foreground
    pub fn bit24(self, rgb: impl Into<Rgb>) -> Self {
        self.color(Color::Bit24(rgb.into()))
    }

    /// Set a 256-color palette background
    pub fn on_bit8(self, index: u8) -> Self {
        self.background_color(BackgroundColor::Bit8(index))
    }

    /// Set a true color background
    pub fn on_bit24(self, rgb: impl Into<Rgb>) -> Self {
        self.background_color(BackgroundColor::Bit24(rgb.into()))
    }

    /// Sets the foreground from a hex string. An unparseable string leaves the builder
    /// unchanged.
    pub fn hex(self, color: &str, target: HexColorTarget) -> Self {
        match ColorApproximation::parse_hex(color) {
            Some(approximation) => self.color(approximation.convert(target)),
            None => self,
        }
    }

    /// Sets the background from a hex string. An unparseable string leaves the builder
    /// unchanged.
    pub fn on_hex(self, color: &str, target: HexColorTarget) -> Self {
        match ColorApproximation::parse_hex(color) {
            Some(approximation) => self.background_color(approximation.convert_background(target)),
            None => self,
        }
    }

    /// Set the foreground from HSL
    pub fn hsl(self, color: impl Into<Hsl>, target: HexColorTarget) -> Self {
        let approximation = ColorApproximation::from_rgb(color.into().to_rgb());
        self.color(approximation.convert(target))
    }

    /// Set the background from HSL
    pub fn on_hsl(self, color: impl Into<Hsl>, target: HexColorTarget) -> Self {
        let approximation = ColorApproximation::from_rgb(color.into().to_rgb());
        self.background_color(approximation.convert_background(target))
    }

    /// Applies a whole attribute set: colors replace only when present, styles are
    /// appended.
    pub fn apply_all(mut self, attributes: Attributes) -> Self {
        self.color = attributes.color.or(self.color);
        self.background_color = attributes.background_color.or(self.background_color);
        self.styles.extend(attributes.styles);
        self
    }

    /// The unstyled text.
    pub fn plain_text(&self) -> &str {
        &self.text
    }

    /// Renders through `painter`'s generator. A disabled painter yields the plain text.
    pub fn build(&self, painter: &Painter) -> String {
        if !painter.config().enabled {
            return self.text.clone();
        }
        let segment = Segment {
            text: self.text.clone(),
            color: self.color,
            background_color: self.background_color,
            styles: self.styles.clone(),
        };
        painter.generate(&Entry::single(segment))
    }
}

impl From<&str> for StyledStringBuilder {
    fn from(text: &str) -> Self {
        StyledStringBuilder::new(text)
    }
}

impl From<String> for StyledStringBuilder {
    fn from(text: String) -> Self {
        StyledStringBuilder::new(text)
    }
}

impl std::fmt::Display for StyledStringBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.build(&Painter::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{NamedBackgroundColor, NamedColor};
    use crate::config::StyleConfig;

    #[test]
    fn test_build_accumulates() {
        let text = StyledStringBuilder::new("Hello Rainbow")
            .color(NamedColor::Red)
            .background_color(NamedBackgroundColor::Yellow)
            .style(Style::Bold)
            .style(Style::Underline)
            .build(&Painter::default());
        assert_eq!(text, "\x1b[31;43;1;4mHello Rainbow\x1b[0m");
    }

    #[test]
    fn test_later_color_wins() {
        let builder = StyledStringBuilder::new("x")
            .color(NamedColor::Red)
            .color(NamedColor::Blue)
            .on_bit8(200)
            .on_bit24(Rgb::new(1, 2, 3));
        assert_eq!(builder.to_string(), "\x1b[34;48;2;1;2;3mx\x1b[0m");
    }

    #[test]
    fn test_extended_colors() {
        assert_eq!(
            StyledStringBuilder::new("x").bit8(214).to_string(),
            "\x1b[38;5;214mx\x1b[0m"
        );
        assert_eq!(
            StyledStringBuilder::new("x").bit24(Rgb::new(9, 8, 7)).to_string(),
            "\x1b[38;2;9;8;7mx\x1b[0m"
        );
        assert_eq!(
            StyledStringBuilder::new("x")
                .hex("#afafd7", HexColorTarget::Bit8Approximated)
                .on_hex("000", HexColorTarget::Bit24)
                .to_string(),
            "\x1b[38;5;189;48;2;0;0;0mx\x1b[0m"
        );
        assert_eq!(
            StyledStringBuilder::new("x")
                .hsl(Hsl::new(0.0, 100.0, 50.0), HexColorTarget::Bit24)
                .on_hsl(Hsl::new(0.0, 0.0, 100.0), HexColorTarget::Bit8Approximated)
                .to_string(),
            "\x1b[38;2;255;0;0;48;5;231mx\x1b[0m"
        );
    }

    #[test]
    fn test_bad_hex_is_ignored() {
        let builder = StyledStringBuilder::new("x").color(NamedColor::Green);
        assert_eq!(
            builder.clone().hex("nothex", HexColorTarget::Bit24),
            builder
        );
        assert_eq!(
            builder.clone().on_hex("#1234", HexColorTarget::Bit24),
            builder
        );
    }

    #[test]
    fn test_apply_all() {
        let builder = StyledStringBuilder::new("x")
            .color(NamedColor::Red)
            .style(Style::Bold)
            .apply_all(Attributes {
                color: None,
                background_color: Some(BackgroundColor::Bit8(1)),
                styles: vec![Style::Italic],
            });
        assert_eq!(builder.to_string(), "\x1b[31;48;5;1;1;3mx\x1b[0m");
    }

    #[test]
    fn test_plain_text_and_disabled() {
        let builder = StyledStringBuilder::from("Hello").styles([Style::Dim, Style::Blink]);
        assert_eq!(builder.plain_text(), "Hello");
        assert_eq!(builder.build(&Painter::new(StyleConfig::disabled())), "Hello");
        assert_eq!(StyledStringBuilder::new("Hello").to_string(), "Hello");
    }

    #[test]
    fn test_xcode_colors_build() {
        let painter = Painter::new(StyleConfig::xcode_colors());
        let text = StyledStringBuilder::new("Hello")
            .color(NamedColor::Red)
            .style(Style::Bold)
            .build(&painter);
        assert_eq!(text, "\x1b[fg255,0,0;Hello\x1b[;");
    }
}
