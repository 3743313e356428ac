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


use crate::color::{BackgroundColor, Color, NamedBackgroundColor, NamedColor, Rgb};
use crate::consts::{SET_8BIT, SET_24BIT, SET_BACKGROUND, SET_FOREGROUND};
use crate::style::Style;

/// A set of display attributes: the decoded form of one SGR parameter list, and the
/// "new attributes" side of a merge.
///
/// All fields are optional in the sense that `None` (or an empty `styles`) means
/// "not specified", which is distinct from an explicit `Named(Default)` color.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Attributes {
    /// Foreground color
    pub color: Option<Color>,
    /// Background color
    pub background_color: Option<BackgroundColor>,
    /// Text styles, in the order they were requested
    pub styles: Vec<Style>,
}

impl Attributes {
    /// Attributes carrying only a foreground color.
    pub fn from_color(color: impl Into<Color>) -> Attributes {
        Attributes {
            color: Some(color.into()),
            ..Default::default()
        }
    }

    /// Attributes carrying only a background color.
    pub fn from_background_color(color: impl Into<BackgroundColor>) -> Attributes {
        Attributes {
            background_color: Some(color.into()),
            ..Default::default()
        }
    }

    /// Attributes carrying a single style.
    pub fn from_style(style: Style) -> Attributes {
        Attributes::from_styles([style])
    }

    /// Attributes carrying a list of styles.
    pub fn from_styles(styles: impl IntoIterator<Item = Style>) -> Attributes {
        Attributes {
            styles: styles.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Returns `true` when nothing is specified.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.background_color.is_none() && self.styles.is_empty()
    }
}

/// Decodes SGR parameter lists into [`Attributes`].
///
/// # Decoding rules
///
/// - `30-37`, `39`, `90-97` set the foreground; `40-47`, `49`, `100-107` set the
///   background. A later color replaces an earlier one.
/// - `0, 1, 2, 3, 4, 5, 7, 9` append a [`Style`]. Duplicates are kept.
/// - `38;5;n` / `48;5;n` select a 256-color index and `38;2;r;g;b` / `48;2;r;g;b` an
///   RGB value. When the parameters after `38` or `48` are not a complete extended
///   color, only the `38` or `48` itself is skipped and the remaining parameters are
///   decoded as ordinary codes, so `38;2;4;5` yields dim, underline and blink.
/// - Anything else is ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleCodesParser;

impl ConsoleCodesParser {
    /// Decodes `params` into attributes.
    pub fn parse(&self, params: &[u8]) -> Attributes {
        let mut attributes = Attributes::default();
        let mut i = 0;

        while i < params.len() {
            match params[i] {
                SET_FOREGROUND => {
                    if let Some((color, consumed)) = Self::extended(&params[i + 1..]) {
                        attributes.color = Some(color);
                        i += consumed;
                    }
                }
                SET_BACKGROUND => {
                    if let Some((color, consumed)) = Self::extended(&params[i + 1..]) {
                        attributes.background_color = Some(color.to_background());
                        i += consumed;
                    }
                }
                code => {
                    if let Some(color) = NamedColor::from_u8(code) {
                        attributes.color = Some(Color::Named(color));
                    } else if let Some(color) = NamedBackgroundColor::from_u8(code) {
                        attributes.background_color = Some(BackgroundColor::Named(color));
                    } else if let Some(style) = Style::from_u8(code) {
                        attributes.styles.push(style);
                    }
                }
            }
            i += 1;
        }

        attributes
    }

    /// Decodes the parameters following a `38` or `48`, returning the color and the
    /// number of parameters it occupied.
    fn extended(rest: &[u8]) -> Option<(Color, usize)> {
        match rest {
            [SET_8BIT, index, ..] => Some((Color::Bit8(*index), 2)),
            [SET_24BIT, red, green, blue, ..] => {
                Some((Color::Bit24(Rgb::new(*red, *green, *blue)), 4))
            }
            _ => None,
        }
    }
}
