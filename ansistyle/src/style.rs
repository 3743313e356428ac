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


/// A text style attribute expressible as a single SGR parameter.
///
/// Styles accumulate on a segment in the order they were applied and are emitted after
/// the color codes of the segment, so `"Hello"` made red and then bold renders as
/// `\x1b[31;1mHello\x1b[0m`.
///
/// # ANSI Codes
///
/// | Style           | Code |
/// |-----------------|------|
/// | `Default`       | `0`  |
/// | `Bold`          | `1`  |
/// | `Dim`           | `2`  |
/// | `Italic`        | `3`  |
/// | `Underline`     | `4`  |
/// | `Blink`         | `5`  |
/// | `Swap`          | `7`  |
/// | `Strikethrough` | `9`  |
///
/// `Default` is the reset code. A segment whose only style is `Default` is considered
/// plain and is rendered without any escape sequence.
///
/// # Conversion
///
/// ```
/// use tinct_ansistyle::Style;
///
/// assert_eq!(Style::Underline.to_u8(), 4);
/// assert_eq!(Style::from_u8(7), Some(Style::Swap));
/// assert_eq!(Style::from_u8(6), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Style {
    /// Reset / no style (`0`).
    #[default]
    Default,
    /// Increased intensity (`1`).
    Bold,
    /// Decreased intensity (`2`). Not widely supported.
    Dim,
    /// Italic (`3`). Depends on the terminal font.
    Italic,
    /// Single underline (`4`).
    Underline,
    /// Slow blink (`5`). Not widely supported.
    Blink,
    /// Foreground and background swapped (`7`).
    Swap,
    /// Crossed-out text (`9`).
    Strikethrough,
}

impl Style {
    /// Every style, in code order.
    pub const ALL: [Style; 8] = [
        Style::Default,
        Style::Bold,
        Style::Dim,
        Style::Italic,
        Style::Underline,
        Style::Blink,
        Style::Swap,
        Style::Strikethrough,
    ];

    /// Returns the SGR parameter for this style.
    pub fn to_u8(&self) -> u8 {
        match self {
            Style::Default => 0,
            Style::Bold => 1,
            Style::Dim => 2,
            Style::Italic => 3,
            Style::Underline => 4,
            Style::Blink => 5,
            Style::Swap => 7,
            Style::Strikethrough => 9,
        }
    }

    /// Returns the style for an SGR parameter, or `None` if the code is not a style.
    pub fn from_u8(value: u8) -> Option<Style> {
        match value {
            0 => Some(Style::Default),
            1 => Some(Style::Bold),
            2 => Some(Style::Dim),
            3 => Some(Style::Italic),
            4 => Some(Style::Underline),
            5 => Some(Style::Blink),
            7 => Some(Style::Swap),
            9 => Some(Style::Strikethrough),
            _ => None,
        }
    }
}
