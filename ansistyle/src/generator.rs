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


use crate::config::StyleConfig;
use crate::consts::{CSI, SEGMENT_OVERHEAD, SGR_RESET, SGR_SEPARATOR, SGR_TERMINATOR};
use crate::entry::{Entry, Segment};
use crate::result::StyleResult;
use bytes::BufMut;
use std::fmt::Write;

/// Renders an [`Entry`] back into a styled string.
///
/// Implementors provide [`write_str`](StringGenerator::write_str); the remaining sinks
/// are derived from it.
pub trait StringGenerator {
    /// Writes the rendered entry into a formatter sink.
    fn write_str<W: std::fmt::Write>(&self, entry: &Entry, writer: &mut W) -> std::fmt::Result;

    /// Renders the entry into a new `String`.
    fn generate(&self, entry: &Entry) -> String {
        let capacity = entry
            .segments()
            .iter()
            .map(|segment| segment.text.len() + SEGMENT_OVERHEAD)
            .sum();
        let mut output = String::with_capacity(capacity);
        // A String sink never reports an error.
        let _ = self.write_str(entry, &mut output);
        output
    }

    /// Writes the rendered entry into an I/O sink, returning the number of bytes written.
    ///
    /// A failure inside [`write_str`](StringGenerator::write_str) surfaces as
    /// [`StyleError::Fmt`](crate::StyleError::Fmt), a failing sink as
    /// [`StyleError::Io`](crate::StyleError::Io).
    fn write<W: std::io::Write>(&self, entry: &Entry, writer: &mut W) -> StyleResult<usize> {
        let mut output = String::new();
        self.write_str(entry, &mut output)?;
        writer.write_all(output.as_bytes())?;
        Ok(output.len())
    }

    /// Encodes the rendered entry into a byte buffer, returning the number of bytes
    /// written.
    fn encode<T: BufMut>(&self, entry: &Entry, dst: &mut T) -> StyleResult<usize> {
        self.write(entry, &mut dst.writer())
    }
}

/// Generates `ESC [ <codes> m <text> ESC [ 0 m` runs for terminal output.
///
/// Each styled segment is wrapped in its own run, with codes in a fixed order: foreground
/// color, background color, then styles in the order they were applied. Plain segments
/// are written as bare text. An empty styled segment still gets its full run so that it
/// survives a re-parse.
///
/// When the configuration disables styling, or the output target is unknown, only the
/// visible text is written.
///
/// # Examples
///
/// ```rust
/// use tinct_ansistyle::{
///     Attributes, ConsoleStringGenerator, Entry, NamedColor, Segment, StringGenerator,
///     StyleConfig,
/// };
///
/// let generator = ConsoleStringGenerator::new(StyleConfig::console());
/// let entry = Entry::single(Segment::with_attributes(
///     "Hello",
///     Attributes::from_color(NamedColor::Red),
/// ));
/// assert_eq!(generator.generate(&entry), "\x1b[31mHello\x1b[0m");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleStringGenerator {
    config: StyleConfig,
}

impl ConsoleStringGenerator {
    /// Creates a generator for `config`.
    pub fn new(config: StyleConfig) -> ConsoleStringGenerator {
        ConsoleStringGenerator { config }
    }

    /// The configuration this generator renders for.
    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Collects the SGR parameters for a segment.
    pub fn codes(segment: &Segment) -> Vec<u8> {
        let mut codes = Vec::with_capacity(5 + segment.styles.len());
        if let Some(color) = &segment.color {
            color.write_codes(&mut codes);
        }
        if let Some(background_color) = &segment.background_color {
            background_color.write_codes(&mut codes);
        }
        codes.extend(segment.styles.iter().map(|style| style.to_u8()));
        codes
    }

    fn write_segment<W: std::fmt::Write>(segment: &Segment, writer: &mut W) -> std::fmt::Result {
        if segment.is_plain() {
            return writer.write_str(&segment.text);
        }
        writer.write_str(CSI)?;
        for (i, code) in Self::codes(segment).iter().enumerate() {
            if i > 0 {
                writer.write_char(SGR_SEPARATOR)?;
            }
            write!(writer, "{}", code)?;
        }
        writer.write_char(SGR_TERMINATOR)?;
        writer.write_str(&segment.text)?;
        writer.write_str(SGR_RESET)
    }
}

impl StringGenerator for ConsoleStringGenerator {
    fn write_str<W: std::fmt::Write>(&self, entry: &Entry, writer: &mut W) -> std::fmt::Result {
        if !self.config.is_styling() {
            for segment in entry {
                writer.write_str(&segment.text)?;
            }
            return Ok(());
        }
        for segment in entry {
            Self::write_segment(segment, writer)?;
        }
        Ok(())
    }
}
