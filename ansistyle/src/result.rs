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


//! Error types for the ansistyle crate.
//!
//! Styling itself never fails: malformed colors and unparseable escape runs resolve to
//! "no effect". The variants below only surface at the edges where a caller explicitly
//! asks for a fallible conversion or hands over a sink that can fail.

use thiserror::Error;

/// Result type alias for operations that may fail with a [`StyleError`].
pub type StyleResult<T> = Result<T, StyleError>;

/// Errors that can occur at the fallible edges of the styling engine.
#[derive(Debug, Error)]
pub enum StyleError {
    /// I/O error from the writer a styled string was rendered into.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Formatting error from the `fmt::Write` sink a styled string was rendered into.
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// A hex color string was not `#`-optional followed by 3 or 6 hex digits.
    #[error("Invalid hex color '{value}': {reason}")]
    InvalidHexColor {
        /// The rejected input
        value: String,
        /// Description of what's wrong with it
        reason: &'static str,
    },

    /// An integer hex color carried bits above `0xFFFFFF` (e.g. an alpha channel).
    #[error("Hex color 0x{0:X} exceeds 0xFFFFFF")]
    HexColorOutOfRange(u32),
}

impl StyleError {
    /// Check if the error came from parsing a color value
    pub fn is_color_error(&self) -> bool {
        matches!(
            self,
            StyleError::InvalidHexColor { .. } | StyleError::HexColorOutOfRange(_)
        )
    }
}
