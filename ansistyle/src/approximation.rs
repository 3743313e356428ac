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


//! Hex color parsing and 256-color cube approximation.

use crate::color::{BackgroundColor, Color, Rgb};
use crate::result::{StyleError, StyleResult};
use std::str::FromStr;
use tracing::trace;

/// How a hex or HSL color is encoded once it has been resolved to RGB.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HexColorTarget {
    /// Approximate to the nearest entry of the 6x6x6 color cube (`38;5;n`).
    #[default]
    Bit8Approximated,
    /// Emit the exact RGB triple (`38;2;r;g;b`).
    Bit24,
}

/// An RGB value on its way to becoming a [`Color`] or [`BackgroundColor`].
///
/// The `parse_*` constructors never fail loudly: an input that does not describe a
/// color yields `None` and a `trace!` event, and callers treat that as "no effect".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorApproximation {
    rgb: Rgb,
}

impl ColorApproximation {
    /// Wraps an already known RGB value.
    pub const fn from_rgb(rgb: Rgb) -> ColorApproximation {
        ColorApproximation { rgb }
    }

    /// Parses `#rgb`, `rgb`, `#rrggbb` or `rrggbb` (case insensitive).
    pub fn parse_hex(value: &str) -> Option<ColorApproximation> {
        match value.parse::<Rgb>() {
            Ok(rgb) => Some(ColorApproximation::from_rgb(rgb)),
            Err(error) => {
                trace!("ignoring hex color: {}", error);
                None
            }
        }
    }

    /// Accepts integers in `0x000000..=0xFFFFFF`.
    pub fn parse_hex_int(value: u32) -> Option<ColorApproximation> {
        match Rgb::try_from(value) {
            Ok(rgb) => Some(ColorApproximation::from_rgb(rgb)),
            Err(error) => {
                trace!("ignoring hex color: {}", error);
                None
            }
        }
    }

    /// The resolved RGB value.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Index of the 6x6x6 cube cell containing this color.
    ///
    /// Each channel is bucketed as `6 * c / 256`, giving
    /// `16 + 36 * r + 6 * g + b`. The grayscale ramp (`232-255`) is never selected.
    pub fn to_bit8(&self) -> u8 {
        let bucket = |channel: u8| 6 * channel as u16 / 256;
        (16 + 36 * bucket(self.rgb.red) + 6 * bucket(self.rgb.green) + bucket(self.rgb.blue))
            as u8
    }

    /// The exact RGB value.
    pub fn to_bit24(&self) -> Rgb {
        self.rgb
    }

    /// Converts into a foreground color encoded as `target`.
    pub fn convert(&self, target: HexColorTarget) -> Color {
        match target {
            HexColorTarget::Bit8Approximated => Color::Bit8(self.to_bit8()),
            HexColorTarget::Bit24 => Color::Bit24(self.to_bit24()),
        }
    }

    /// Converts into a background color encoded as `target`.
    pub fn convert_background(&self, target: HexColorTarget) -> BackgroundColor {
        match target {
            HexColorTarget::Bit8Approximated => BackgroundColor::Bit8(self.to_bit8()),
            HexColorTarget::Bit24 => BackgroundColor::Bit24(self.to_bit24()),
        }
    }
}

impl From<Rgb> for ColorApproximation {
    fn from(rgb: Rgb) -> Self {
        ColorApproximation::from_rgb(rgb)
    }
}

impl FromStr for Rgb {
    type Err = StyleError;

    fn from_str(value: &str) -> StyleResult<Rgb> {
        let invalid = |reason| StyleError::InvalidHexColor {
            value: value.to_string(),
            reason,
        };
        let digits = value.strip_prefix('#').unwrap_or(value);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid("non-hex digit"));
        }
        if digits.len() != 3 && digits.len() != 6 {
            return Err(invalid("expected 3 or 6 hex digits"));
        }
        let number = u32::from_str_radix(digits, 16).map_err(|_| invalid("non-hex digit"))?;
        match digits.len() {
            3 => {
                let nibble = |shift: u32| {
                    let n = ((number >> shift) & 0xF) as u8;
                    (n << 4) | n
                };
                Ok(Rgb::new(nibble(8), nibble(4), nibble(0)))
            }
            _ => Rgb::try_from(number),
        }
    }
}

impl TryFrom<u32> for Rgb {
    type Error = StyleError;

    fn try_from(value: u32) -> StyleResult<Rgb> {
        if value > 0xFF_FFFF {
            return Err(StyleError::HexColorOutOfRange(value));
        }
        Ok(Rgb::new(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ))
    }
}
