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


use crate::codes::ConsoleCodesParser;
use crate::consts::{CSI, ESC, RESET_CODE, SGR_SEPARATOR, SGR_TERMINATOR};
use crate::entry::{Entry, Segment};
use tracing::trace;

/// Splits a styled string into an [`Entry`].
///
/// Parsing is total: input that cannot be understood ends the parse, and whatever was
/// recognized up to that point is returned.
pub trait EntryParser {
    /// Parses `text`, returning the segments read and the number of bytes consumed.
    ///
    /// The count falls short of `text.len()` when the parse stopped at an escape it
    /// could not read.
    fn parse_prefix(&self, text: &str) -> (Entry, usize);

    /// Parses `text` into its segments, dropping anything after an unreadable escape.
    fn parse(&self, text: &str) -> Entry {
        self.parse_prefix(text).0
    }

    /// Parses `text` into its segments, or returns `None` if any part of it could not
    /// be read.
    fn parse_complete(&self, text: &str) -> Option<Entry> {
        let (entry, consumed) = self.parse_prefix(text);
        (consumed == text.len()).then_some(entry)
    }
}

/// Scanner states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Collecting visible text up to the next `ESC`.
    ScanningText,
    /// Expecting an `ESC [ <codes> m` run.
    ReadingCodes,
}

/// Parses strings produced by the console generator, or any text using the same
/// `ESC [ <codes> m` subset.
///
/// # Segmentation rules
///
/// - Text before the first escape run is a plain segment.
/// - An escape run sets the attributes of the text that follows it, up to the next run.
/// - Two runs with no text between them produce an empty segment carrying the first
///   run's attributes.
/// - A reset run (`ESC[0m`, `ESC[m`, or only zeros and empty parameters) directly after
///   a segment closes that segment and produces nothing. A run whose parameters are all
///   out of range (`ESC[300m`) is not a reset; it styles nothing.
/// - A run left pending at the end of the input produces nothing.
/// - A malformed run (a bare `ESC`, a non-`[` introducer, a character other than a
///   digit or `;` before the `m`, or no `m` at all) stops the parse.
///
/// # Examples
///
/// ```rust
/// use tinct_ansistyle::{ConsoleEntryParser, EntryParser};
///
/// let entry = ConsoleEntryParser.parse("Hi \x1b[31mHello\x1b[0m!");
/// assert_eq!(entry.segment_count(), 3);
/// assert_eq!(entry.plain_text(), "Hi Hello!");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleEntryParser;

impl ConsoleEntryParser {
    /// Reads one `ESC [ <codes> m` run from the front of `input`, returning the raw
    /// parameter list and the remaining input.
    fn read_run(input: &str) -> Option<(&str, &str)> {
        let body = input.strip_prefix(CSI)?;
        let end = body.find(|c: char| !(c.is_ascii_digit() || c == SGR_SEPARATOR))?;
        let rest = body[end..].strip_prefix(SGR_TERMINATOR)?;
        Some((&body[..end], rest))
    }

    /// Decodes a raw parameter list. Parameters that are not a valid `u8` are dropped.
    fn decode(body: &str) -> Vec<u8> {
        body.split(SGR_SEPARATOR)
            .filter_map(|token| token.parse::<u8>().ok())
            .collect()
    }

    fn is_reset(body: &str) -> bool {
        body.split(SGR_SEPARATOR)
            .all(|token| token.is_empty() || token.parse::<u8>() == Ok(RESET_CODE))
    }
}

impl EntryParser for ConsoleEntryParser {
    fn parse_prefix(&self, text: &str) -> (Entry, usize) {
        let codes_parser = ConsoleCodesParser;
        let mut entry = Entry::empty();
        let mut pending: Option<Vec<u8>> = None;
        let mut closable = false;
        let mut rest = text;
        let mut state = State::ScanningText;

        while !rest.is_empty() {
            if rest.starts_with(ESC) {
                state = State::ReadingCodes;
            }
            match state {
                State::ReadingCodes => {
                    let Some((body, remaining)) = Self::read_run(rest) else {
                        trace!(
                            offset = text.len() - rest.len(),
                            "malformed escape run, stopping parse"
                        );
                        break;
                    };
                    rest = remaining;
                    if let Some(previous) = pending.take() {
                        entry.push(Segment::with_attributes("", codes_parser.parse(&previous)));
                        closable = true;
                    }
                    if !(closable && Self::is_reset(body)) {
                        pending = Some(Self::decode(body));
                    }
                    closable = false;
                    state = State::ScanningText;
                }
                State::ScanningText => {
                    let end = rest.find(ESC).unwrap_or(rest.len());
                    let (run, remaining) = rest.split_at(end);
                    let segment = match pending.take() {
                        Some(codes) => Segment::with_attributes(run, codes_parser.parse(&codes)),
                        None => Segment::new(run),
                    };
                    entry.push(segment);
                    closable = true;
                    rest = remaining;
                }
            }
        }

        let consumed = text.len() - rest.len();
        (entry, consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BackgroundColor, Color, NamedBackgroundColor, NamedColor};
    use crate::style::Style;
    use tracing_test::traced_test;

    fn parse(text: &str) -> Entry {
        ConsoleEntryParser.parse(text)
    }

    #[test]
    fn test_parse_plain_text() {
        let entry = parse("Hello");
        assert_eq!(entry.segments(), &[Segment::new("Hello")]);
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_parse_single_styled_segment() {
        let entry = parse("\x1b[31;43mHello Rainbow\x1b[0m");
        assert_eq!(entry.segment_count(), 1);
        assert_eq!(entry[0].text, "Hello Rainbow");
        assert_eq!(entry[0].color, Some(Color::Named(NamedColor::Red)));
        assert_eq!(
            entry[0].background_color,
            Some(BackgroundColor::Named(NamedBackgroundColor::Yellow))
        );
        assert!(entry[0].styles.is_empty());
    }

    #[test]
    fn test_parse_mixed_segments() {
        let entry = parse("Hi \x1b[31mHello \x1b[32mRainbow\x1b[0mend");
        let texts: Vec<&str> = entry.segments().iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Hi ", "Hello ", "Rainbow", "end"]);
        assert!(entry[0].is_plain());
        assert_eq!(entry[1].color, Some(Color::Named(NamedColor::Red)));
        assert_eq!(entry[2].color, Some(Color::Named(NamedColor::Green)));
        assert!(entry[3].is_plain());
    }

    #[test]
    fn test_parse_nested_runs() {
        let entry = parse("\x1b[31m\x1b[4;31;93mHello World\x1b[0m\x1b[0m");
        assert_eq!(entry.segment_count(), 2);
        assert_eq!(entry[0].text, "");
        assert_eq!(entry[0].color, Some(Color::Named(NamedColor::Red)));
        assert_eq!(entry[1].text, "Hello World");
        assert_eq!(entry[1].color, Some(Color::Named(NamedColor::LightYellow)));
        assert_eq!(entry[1].styles, vec![Style::Underline]);
    }

    #[test]
    fn test_parse_consecutive_resets() {
        let entry = parse("\x1b[0m\x1b[0m");
        assert_eq!(entry.segment_count(), 1);
        assert_eq!(entry[0].text, "");
        assert_eq!(entry[0].styles, vec![Style::Default]);
        assert!(entry[0].is_plain());
    }

    #[test]
    fn test_parse_empty_styled_segment() {
        let entry = parse("\x1b[31m\x1b[0m");
        assert_eq!(entry.segment_count(), 1);
        assert_eq!(entry[0].text, "");
        assert_eq!(entry[0].color, Some(Color::Named(NamedColor::Red)));
    }

    #[test]
    fn test_parse_extended_colors() {
        let entry = parse("\x1b[38;5;214;40;4mHello\x1b[0m\x1b[38;2;1;2;3mWorld\x1b[0m");
        assert_eq!(entry.segment_count(), 2);
        assert_eq!(entry[0].color, Some(Color::Bit8(214)));
        assert_eq!(entry[0].styles, vec![Style::Underline]);
        assert_eq!(
            entry[1].color,
            Some(Color::Bit24(crate::color::Rgb::new(1, 2, 3)))
        );
    }

    #[test]
    fn test_parse_bare_reset_run() {
        let entry = parse("\x1b[1mBold\x1b[mplain");
        assert_eq!(entry.segment_count(), 2);
        assert_eq!(entry[0].styles, vec![Style::Bold]);
        assert_eq!(entry[1], Segment::new("plain"));
    }

    #[test]
    fn test_parse_drops_out_of_range_codes() {
        let entry = parse("\x1b[300;1mText\x1b[0m");
        assert_eq!(entry[0].styles, vec![Style::Bold]);
    }

    #[test]
    #[traced_test]
    fn test_parse_stops_at_trailing_escape() {
        let entry = parse("\x1b[0mHello\x1b");
        assert_eq!(entry.segment_count(), 1);
        assert_eq!(entry[0].text, "Hello");
        assert_eq!(entry[0].styles, vec![Style::Default]);
        assert!(logs_contain("malformed escape run"));
    }

    #[test]
    fn test_parse_stops_at_foreign_sequence() {
        assert!(parse("\x1b[fg0,0,0;Hello\x1b[;").is_empty());
        let entry = parse("ok\x1b[2Jcleared");
        assert_eq!(entry.segments(), &[Segment::new("ok")]);
    }

    #[test]
    fn test_parse_complete_rejects_unreadable_escape() {
        let text = "progress 50%\x1b[2K done";
        let (entry, consumed) = ConsoleEntryParser.parse_prefix(text);
        assert_eq!(entry.plain_text(), "progress 50%");
        assert_eq!(consumed, "progress 50%".len());
        assert!(ConsoleEntryParser.parse_complete(text).is_none());

        let entry = ConsoleEntryParser.parse_complete("a\x1b[1mb\x1b[0m").unwrap();
        assert_eq!(entry.plain_text(), "ab");
        assert!(ConsoleEntryParser.parse_complete("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_out_of_range_run_is_not_a_reset() {
        let entry = parse("\x1b[1mBold\x1b[300mnext");
        assert_eq!(entry.segment_count(), 2);
        assert_eq!(entry[1].text, "next");
        assert!(entry[1].is_plain());

        let entry = parse("\x1b[1mBold\x1b[300m\x1b[4mnext\x1b[0m");
        assert_eq!(entry.segment_count(), 3);
        assert_eq!(entry[1].text, "");
        assert!(entry[1].is_plain());
        assert_eq!(entry[2].styles, vec![Style::Underline]);
    }

    #[test]
    fn test_parse_zero_runs_are_resets() {
        let entry = parse("\x1b[1mBold\x1b[0;00;mplain");
        assert_eq!(entry.segment_count(), 2);
        assert_eq!(entry[1], Segment::new("plain"));
    }

    #[test]
    fn test_parse_preserves_visible_text() {
        let text = "a\x1b[1mb\x1b[0mc\x1b[31;44md\x1b[0m";
        assert_eq!(parse(text).plain_text(), "abcd");
    }
}
