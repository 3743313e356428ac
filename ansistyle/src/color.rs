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


use crate::consts::{SET_8BIT, SET_24BIT, SET_BACKGROUND, SET_FOREGROUND};

/// A 24-bit color with 8-bit channels.
///
/// `Rgb` is the payload of [`Color::Bit24`] and [`BackgroundColor::Bit24`] and the
/// common currency of hex parsing and HSL conversion. It [can be parsed](std::str::FromStr)
/// from a hex string like `#fed` or `#de382b` and formats back as `#rrggbb` through
/// [`LowerHex`](std::fmt::LowerHex).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Rgb {
    /// Creates a color from its three channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Rgb {
        Rgb { red, green, blue }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Rgb::new(red, green, blue)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(rgb: Rgb) -> Self {
        (rgb.red, rgb.green, rgb.blue)
    }
}

impl std::fmt::LowerHex for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// One of the sixteen standard terminal foreground colors, or the terminal default.
///
/// # ANSI Codes
///
/// | Variant                        | Code    |
/// |--------------------------------|---------|
/// | `Black` … `White`              | `30-37` |
/// | `Default`                      | `39`    |
/// | `LightBlack` … `LightWhite`    | `90-97` |
///
/// The variant order is shared with [`NamedBackgroundColor`]: the color at index `i` of
/// [`NamedColor::ALL`] corresponds to the background color at index `i` of
/// [`NamedBackgroundColor::ALL`], which is what [`NamedColor::to_background`] relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NamedColor {
    /// Black (`30`).
    Black,
    /// Red (`31`).
    Red,
    /// Green (`32`).
    Green,
    /// Yellow (`33`).
    Yellow,
    /// Blue (`34`).
    Blue,
    /// Magenta (`35`).
    Magenta,
    /// Cyan (`36`).
    Cyan,
    /// White (`37`).
    White,
    /// Terminal default foreground (`39`).
    Default,
    /// Light black, usually rendered as dark gray (`90`).
    LightBlack,
    /// Light red (`91`).
    LightRed,
    /// Light green (`92`).
    LightGreen,
    /// Light yellow (`93`).
    LightYellow,
    /// Light blue (`94`).
    LightBlue,
    /// Light magenta (`95`).
    LightMagenta,
    /// Light cyan (`96`).
    LightCyan,
    /// Light white, usually rendered as light gray (`97`).
    LightWhite,
}

impl NamedColor {
    /// Every named color, in declaration order.
    pub const ALL: [NamedColor; 17] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
        NamedColor::Default,
        NamedColor::LightBlack,
        NamedColor::LightRed,
        NamedColor::LightGreen,
        NamedColor::LightYellow,
        NamedColor::LightBlue,
        NamedColor::LightMagenta,
        NamedColor::LightCyan,
        NamedColor::LightWhite,
    ];

    /// Position of this color in [`NamedColor::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns `true` for the eight bright (`90-97`) colors.
    pub fn is_light(&self) -> bool {
        self.index() > NamedColor::Default.index()
    }

    /// Returns the SGR parameter for this color.
    pub fn to_u8(&self) -> u8 {
        match self {
            NamedColor::Default => 39,
            color if color.is_light() => 90 + (color.index() - NamedColor::LightBlack.index()) as u8,
            color => 30 + color.index() as u8,
        }
    }

    /// Returns the named color for an SGR parameter, or `None` if the code is not a
    /// foreground color.
    pub fn from_u8(value: u8) -> Option<NamedColor> {
        NamedColor::ALL.into_iter().find(|color| color.to_u8() == value)
    }

    /// The background color at the same position.
    pub fn to_background(&self) -> NamedBackgroundColor {
        NamedBackgroundColor::ALL[self.index()]
    }
}

/// One of the sixteen standard terminal background colors, or the terminal default.
///
/// # ANSI Codes
///
/// | Variant                        | Code      |
/// |--------------------------------|-----------|
/// | `Black` … `White`              | `40-47`   |
/// | `Default`                      | `49`      |
/// | `LightBlack` … `LightWhite`    | `100-107` |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NamedBackgroundColor {
    /// Black (`40`).
    Black,
    /// Red (`41`).
    Red,
    /// Green (`42`).
    Green,
    /// Yellow (`43`).
    Yellow,
    /// Blue (`44`).
    Blue,
    /// Magenta (`45`).
    Magenta,
    /// Cyan (`46`).
    Cyan,
    /// White (`47`).
    White,
    /// Terminal default background (`49`).
    Default,
    /// Light black (`100`).
    LightBlack,
    /// Light red (`101`).
    LightRed,
    /// Light green (`102`).
    LightGreen,
    /// Light yellow (`103`).
    LightYellow,
    /// Light blue (`104`).
    LightBlue,
    /// Light magenta (`105`).
    LightMagenta,
    /// Light cyan (`106`).
    LightCyan,
    /// Light white (`107`).
    LightWhite,
}

impl NamedBackgroundColor {
    /// Every named background color, in declaration order.
    pub const ALL: [NamedBackgroundColor; 17] = [
        NamedBackgroundColor::Black,
        NamedBackgroundColor::Red,
        NamedBackgroundColor::Green,
        NamedBackgroundColor::Yellow,
        NamedBackgroundColor::Blue,
        NamedBackgroundColor::Magenta,
        NamedBackgroundColor::Cyan,
        NamedBackgroundColor::White,
        NamedBackgroundColor::Default,
        NamedBackgroundColor::LightBlack,
        NamedBackgroundColor::LightRed,
        NamedBackgroundColor::LightGreen,
        NamedBackgroundColor::LightYellow,
        NamedBackgroundColor::LightBlue,
        NamedBackgroundColor::LightMagenta,
        NamedBackgroundColor::LightCyan,
        NamedBackgroundColor::LightWhite,
    ];

    /// Position of this color in [`NamedBackgroundColor::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns `true` for the eight bright (`100-107`) colors.
    pub fn is_light(&self) -> bool {
        self.index() > NamedBackgroundColor::Default.index()
    }

    /// Returns the SGR parameter for this background color.
    pub fn to_u8(&self) -> u8 {
        match self {
            NamedBackgroundColor::Default => 49,
            color if color.is_light() => {
                100 + (color.index() - NamedBackgroundColor::LightBlack.index()) as u8
            }
            color => 40 + color.index() as u8,
        }
    }

    /// Returns the named background color for an SGR parameter, or `None` if the code is
    /// not a background color.
    pub fn from_u8(value: u8) -> Option<NamedBackgroundColor> {
        NamedBackgroundColor::ALL
            .into_iter()
            .find(|color| color.to_u8() == value)
    }

    /// The foreground color at the same position.
    pub fn to_foreground(&self) -> NamedColor {
        NamedColor::ALL[self.index()]
    }
}

/// A foreground color.
///
/// Three representations are supported, each with its own wire encoding:
///
/// | Variant          | Codes              |
/// |------------------|--------------------|
/// | `Named(color)`   | `30-37`, `39`, `90-97` |
/// | `Bit8(n)`        | `38;5;n`           |
/// | `Bit24(rgb)`     | `38;2;r;g;b`       |
///
/// Equality compares the variant and its payload: `Bit8(9)` is not equal to
/// `Named(NamedColor::LightRed)` even though most terminals render them identically.
///
/// # Examples
///
/// ```
/// use tinct_ansistyle::{Color, NamedColor, Rgb};
///
/// assert_eq!(Color::Named(NamedColor::Red).codes(), vec![31]);
/// assert_eq!(Color::Bit8(214).codes(), vec![38, 5, 214]);
/// assert_eq!(Color::Bit24(Rgb::new(10, 20, 30)).codes(), vec![38, 2, 10, 20, 30]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the named terminal colors.
    Named(NamedColor),
    /// An index into the 256-color palette.
    Bit8(u8),
    /// A 24-bit true color.
    Bit24(Rgb),
}

impl Color {
    /// Appends the SGR parameters for this color to `codes`.
    pub fn write_codes(&self, codes: &mut Vec<u8>) {
        match self {
            Color::Named(color) => codes.push(color.to_u8()),
            Color::Bit8(index) => codes.extend([SET_FOREGROUND, SET_8BIT, *index]),
            Color::Bit24(rgb) => {
                codes.extend([SET_FOREGROUND, SET_24BIT, rgb.red, rgb.green, rgb.blue])
            }
        }
    }

    /// Returns the SGR parameters for this color.
    pub fn codes(&self) -> Vec<u8> {
        let mut codes = Vec::with_capacity(5);
        self.write_codes(&mut codes);
        codes
    }

    /// The background color with the same payload.
    pub fn to_background(&self) -> BackgroundColor {
        match self {
            Color::Named(color) => BackgroundColor::Named(color.to_background()),
            Color::Bit8(index) => BackgroundColor::Bit8(*index),
            Color::Bit24(rgb) => BackgroundColor::Bit24(*rgb),
        }
    }
}

impl From<NamedColor> for Color {
    fn from(color: NamedColor) -> Self {
        Color::Named(color)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Bit24(rgb)
    }
}

impl From<BackgroundColor> for Color {
    fn from(color: BackgroundColor) -> Self {
        color.to_foreground()
    }
}

/// A background color.
///
/// Mirrors [`Color`] with the background encodings:
///
/// | Variant          | Codes                    |
/// |------------------|--------------------------|
/// | `Named(color)`   | `40-47`, `49`, `100-107` |
/// | `Bit8(n)`        | `48;5;n`                 |
/// | `Bit24(rgb)`     | `48;2;r;g;b`             |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackgroundColor {
    /// One of the named terminal background colors.
    Named(NamedBackgroundColor),
    /// An index into the 256-color palette.
    Bit8(u8),
    /// A 24-bit true color.
    Bit24(Rgb),
}

impl BackgroundColor {
    /// Appends the SGR parameters for this background color to `codes`.
    pub fn write_codes(&self, codes: &mut Vec<u8>) {
        match self {
            BackgroundColor::Named(color) => codes.push(color.to_u8()),
            BackgroundColor::Bit8(index) => codes.extend([SET_BACKGROUND, SET_8BIT, *index]),
            BackgroundColor::Bit24(rgb) => {
                codes.extend([SET_BACKGROUND, SET_24BIT, rgb.red, rgb.green, rgb.blue])
            }
        }
    }

    /// Returns the SGR parameters for this background color.
    pub fn codes(&self) -> Vec<u8> {
        let mut codes = Vec::with_capacity(5);
        self.write_codes(&mut codes);
        codes
    }

    /// The foreground color with the same payload.
    pub fn to_foreground(&self) -> Color {
        match self {
            BackgroundColor::Named(color) => Color::Named(color.to_foreground()),
            BackgroundColor::Bit8(index) => Color::Bit8(*index),
            BackgroundColor::Bit24(rgb) => Color::Bit24(*rgb),
        }
    }
}

impl From<NamedBackgroundColor> for BackgroundColor {
    fn from(color: NamedBackgroundColor) -> Self {
        BackgroundColor::Named(color)
    }
}

impl From<Rgb> for BackgroundColor {
    fn from(rgb: Rgb) -> Self {
        BackgroundColor::Bit24(rgb)
    }
}

impl From<Color> for BackgroundColor {
    fn from(color: Color) -> Self {
        color.to_background()
    }
}
