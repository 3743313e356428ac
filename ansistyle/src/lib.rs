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


//! Round-trip ANSI styling.
//!
//! Styled strings are parsed back into [`Entry`] segments, new attributes are merged onto
//! them, and the result is regenerated, so styling composes: coloring an already bold
//! string keeps it bold. [`Painter`] is the entry point; [`StyledStringBuilder`] defers
//! all rendering to a single final step.

mod approximation;
mod builder;
mod codes;
mod color;
mod config;
mod consts;
mod entry;
mod generator;
mod hsl;
mod merge;
mod painter;
mod parser;
mod result;
mod style;
pub mod xcode;

pub use self::approximation::{ColorApproximation, HexColorTarget};
pub use self::builder::StyledStringBuilder;
pub use self::codes::{Attributes, ConsoleCodesParser};
pub use self::color::{BackgroundColor, Color, NamedBackgroundColor, NamedColor, Rgb};
pub use self::config::{OutputTarget, StyleConfig};
pub use self::entry::{Entry, Segment};
pub use self::generator::{ConsoleStringGenerator, StringGenerator};
pub use self::hsl::Hsl;
pub use self::painter::Painter;
pub use self::parser::{ConsoleEntryParser, EntryParser};
pub use self::result::{StyleError, StyleResult};
pub use self::style::Style;
pub use self::xcode::{XcodeColorsEntryParser, XcodeColorsStringGenerator};
