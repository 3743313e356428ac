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


//! The XcodeColors dialect: `ESC[fgR,G,B;` and `ESC[bgR,G,B;` prefixes closed by `ESC[;`.
//!
//! Only colors survive in this dialect. Styles have no encoding and are dropped by the
//! generator.

use crate::codes::Attributes;
use crate::color::{BackgroundColor, Color, NamedColor, Rgb};
use crate::config::StyleConfig;
use crate::consts::{CSI, ESC, XCODE_RESET, XCODE_TERMINATOR};
use crate::entry::{Entry, Segment};
use crate::generator::StringGenerator;
use crate::parser::EntryParser;
use std::fmt::Write;
use tracing::trace;

const FOREGROUND_PREFIX: &str = "fg";
const BACKGROUND_PREFIX: &str = "bg";

/// Channel levels of the 6x6x6 cube in the xterm 256-color palette.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// RGB value of a named color in the XcodeColors palette. [`NamedColor::Default`] has no
/// value.
pub fn named_rgb(color: NamedColor) -> Option<Rgb> {
    let rgb = match color {
        NamedColor::Black => Rgb::new(0, 0, 0),
        NamedColor::Red => Rgb::new(255, 0, 0),
        NamedColor::Green => Rgb::new(0, 204, 0),
        NamedColor::Yellow => Rgb::new(255, 255, 0),
        NamedColor::Blue => Rgb::new(0, 0, 255),
        NamedColor::Magenta => Rgb::new(255, 0, 255),
        NamedColor::Cyan => Rgb::new(0, 255, 255),
        NamedColor::White => Rgb::new(204, 204, 204),
        NamedColor::Default => return None,
        NamedColor::LightBlack => Rgb::new(128, 128, 128),
        NamedColor::LightRed => Rgb::new(255, 102, 102),
        NamedColor::LightGreen => Rgb::new(102, 255, 102),
        NamedColor::LightYellow => Rgb::new(255, 255, 102),
        NamedColor::LightBlue => Rgb::new(102, 102, 255),
        NamedColor::LightMagenta => Rgb::new(255, 102, 255),
        NamedColor::LightCyan => Rgb::new(102, 255, 255),
        NamedColor::LightWhite => Rgb::new(255, 255, 255),
    };
    Some(rgb)
}

/// The named color whose palette entry is exactly `rgb`, if any.
pub fn named_from_rgb(rgb: Rgb) -> Option<NamedColor> {
    NamedColor::ALL
        .into_iter()
        .find(|color| named_rgb(*color) == Some(rgb))
}

/// Expands a 256-color palette index to RGB.
///
/// | Index     | Source                                   |
/// |-----------|------------------------------------------|
/// | `0-7`     | standard named colors                    |
/// | `8-15`    | light named colors                       |
/// | `16-231`  | 6x6x6 cube over `0, 95, 135, 175, 215, 255` |
/// | `232-255` | gray ramp `8 + 10 * (index - 232)`       |
pub fn bit8_rgb(index: u8) -> Rgb {
    match index {
        0..=7 => named_rgb(NamedColor::ALL[index as usize]).unwrap_or_default(),
        8..=15 => named_rgb(NamedColor::ALL[index as usize + 1]).unwrap_or_default(),
        16..=231 => {
            let cell = index - 16;
            Rgb::new(
                CUBE_LEVELS[(cell / 36) as usize],
                CUBE_LEVELS[(cell / 6 % 6) as usize],
                CUBE_LEVELS[(cell % 6) as usize],
            )
        }
        _ => {
            let gray = 8 + 10 * (index - 232);
            Rgb::new(gray, gray, gray)
        }
    }
}

/// RGB value a foreground color is emitted as, or `None` if it has no XcodeColors form.
pub fn color_rgb(color: &Color) -> Option<Rgb> {
    match color {
        Color::Named(named) => named_rgb(*named),
        Color::Bit8(index) => Some(bit8_rgb(*index)),
        Color::Bit24(rgb) => Some(*rgb),
    }
}

/// RGB value a background color is emitted as, or `None` if it has no XcodeColors form.
pub fn background_color_rgb(color: &BackgroundColor) -> Option<Rgb> {
    color_rgb(&color.to_foreground())
}

/// Generates XcodeColors output.
#[derive(Clone, Copy, Debug)]
pub struct XcodeColorsStringGenerator {
    config: StyleConfig,
}

impl XcodeColorsStringGenerator {
    /// Creates a generator for `config`.
    pub fn new(config: StyleConfig) -> XcodeColorsStringGenerator {
        XcodeColorsStringGenerator { config }
    }

    fn write_code<W: std::fmt::Write>(prefix: &str, rgb: Rgb, writer: &mut W) -> std::fmt::Result {
        write!(
            writer,
            "{}{}{},{},{}{}",
            CSI, prefix, rgb.red, rgb.green, rgb.blue, XCODE_TERMINATOR
        )
    }

    fn write_segment<W: std::fmt::Write>(segment: &Segment, writer: &mut W) -> std::fmt::Result {
        let color = segment.color.as_ref().and_then(color_rgb);
        let background_color = segment.background_color.as_ref().and_then(background_color_rgb);
        if color.is_none() && background_color.is_none() {
            return writer.write_str(&segment.text);
        }
        if let Some(rgb) = color {
            Self::write_code(FOREGROUND_PREFIX, rgb, writer)?;
        }
        if let Some(rgb) = background_color {
            Self::write_code(BACKGROUND_PREFIX, rgb, writer)?;
        }
        writer.write_str(&segment.text)?;
        writer.write_str(XCODE_RESET)
    }
}

impl Default for XcodeColorsStringGenerator {
    fn default() -> Self {
        XcodeColorsStringGenerator::new(StyleConfig::xcode_colors())
    }
}

impl StringGenerator for XcodeColorsStringGenerator {
    fn write_str<W: std::fmt::Write>(&self, entry: &Entry, writer: &mut W) -> std::fmt::Result {
        let styling = self.config.is_styling();
        for segment in entry {
            if styling {
                Self::write_segment(segment, writer)?;
            } else {
                writer.write_str(&segment.text)?;
            }
        }
        Ok(())
    }
}

/// Parses XcodeColors output back into an [`Entry`].
///
/// Color triples that match a named palette entry come back as that named color; any
/// other triple comes back as [`Color::Bit24`]. A run that is not `fg` or `bg` followed
/// by three comma separated bytes, or that is missing its `;`, stops the parse.
#[derive(Clone, Copy, Debug, Default)]
pub struct XcodeColorsEntryParser;

impl XcodeColorsEntryParser {
    /// Reads one `ESC [ <code> ;` run, returning the code body and the remaining input.
    fn read_code(input: &str) -> Option<(&str, &str)> {
        let body = input.strip_prefix(CSI)?;
        let end = body.find([XCODE_TERMINATOR, ESC])?;
        let rest = body[end..].strip_prefix(XCODE_TERMINATOR)?;
        Some((&body[..end], rest))
    }

    fn read_rgb(triple: &str) -> Option<Rgb> {
        let mut channels = triple.split(',').map(|c| c.parse::<u8>().ok());
        let rgb = Rgb::new(channels.next()??, channels.next()??, channels.next()??);
        match channels.next() {
            None => Some(rgb),
            Some(_) => None,
        }
    }

    fn to_color(rgb: Rgb) -> Color {
        match named_from_rgb(rgb) {
            Some(named) => Color::Named(named),
            None => Color::Bit24(rgb),
        }
    }
}

impl EntryParser for XcodeColorsEntryParser {
    fn parse_prefix(&self, text: &str) -> (Entry, usize) {
        let mut entry = Entry::empty();
        let mut pending = Attributes::default();
        let mut rest = text;

        while !rest.is_empty() {
            if !rest.starts_with(ESC) {
                let end = rest.find(ESC).unwrap_or(rest.len());
                let (run, remaining) = rest.split_at(end);
                entry.push(Segment::with_attributes(run, std::mem::take(&mut pending)));
                rest = remaining;
                continue;
            }

            let Some((code, remaining)) = Self::read_code(rest) else {
                trace!(
                    offset = text.len() - rest.len(),
                    "malformed XcodeColors run, stopping parse"
                );
                break;
            };
            if code.is_empty() {
                pending = Attributes::default();
            } else if let Some(rgb) = code.strip_prefix(FOREGROUND_PREFIX).and_then(Self::read_rgb) {
                pending.color = Some(Self::to_color(rgb));
            } else if let Some(rgb) = code.strip_prefix(BACKGROUND_PREFIX).and_then(Self::read_rgb) {
                pending.background_color = Some(Self::to_color(rgb).to_background());
            } else {
                trace!(code, "unknown XcodeColors code, stopping parse");
                break;
            }
            rest = remaining;
        }

        let consumed = text.len() - rest.len();
        (entry, consumed)
    }
}
