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


use crate::codes::Attributes;
use crate::color::{BackgroundColor, Color};
use crate::style::Style;

/// A run of text sharing one set of display attributes.
///
/// A segment is *plain* when it carries no color, no background color and no style
/// other than [`Style::Default`]. Plain segments render as their bare text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Visible text of the run
    pub text: String,
    /// Foreground color
    pub color: Option<Color>,
    /// Background color
    pub background_color: Option<BackgroundColor>,
    /// Text styles, in application order
    pub styles: Vec<Style>,
}

impl Segment {
    /// Creates a plain segment.
    pub fn new(text: impl Into<String>) -> Segment {
        Segment {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Creates a segment carrying `attributes`.
    pub fn with_attributes(text: impl Into<String>, attributes: Attributes) -> Segment {
        Segment {
            text: text.into(),
            color: attributes.color,
            background_color: attributes.background_color,
            styles: attributes.styles,
        }
    }

    /// Returns `true` when the segment carries no visible styling.
    pub fn is_plain(&self) -> bool {
        self.color.is_none()
            && self.background_color.is_none()
            && self.styles.iter().all(|style| *style == Style::Default)
    }

    /// A copy of this segment's attributes.
    pub fn attributes(&self) -> Attributes {
        Attributes {
            color: self.color,
            background_color: self.background_color,
            styles: self.styles.clone(),
        }
    }
}

impl From<&str> for Segment {
    fn from(text: &str) -> Self {
        Segment::new(text)
    }
}

impl From<String> for Segment {
    fn from(text: String) -> Self {
        Segment::new(text)
    }
}

/// An ordered list of [`Segment`]s: the structured form of a styled string.
///
/// Concatenating the texts of all segments yields the visible text of the string the
/// entry was parsed from. Entries are produced by an [`EntryParser`](crate::EntryParser),
/// reshaped by the merge operations, and consumed by a
/// [`StringGenerator`](crate::StringGenerator).
///
/// # Examples
///
/// ```rust
/// use tinct_ansistyle::{Entry, Segment};
///
/// let entry: Entry = ["Hello ", "World"].into_iter().map(Segment::new).collect();
/// assert_eq!(entry.segment_count(), 2);
/// assert_eq!(entry.plain_text(), "Hello World");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Entry {
    segments: Vec<Segment>,
}

impl Entry {
    /// Creates an entry from a list of segments.
    pub fn new(segments: Vec<Segment>) -> Entry {
        Entry { segments }
    }

    /// Creates an entry with no segments.
    pub fn empty() -> Entry {
        Entry {
            segments: Vec::new(),
        }
    }

    /// Creates an entry with exactly one segment.
    pub fn single(segment: Segment) -> Entry {
        Entry {
            segments: vec![segment],
        }
    }

    /// The segments, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Mutable access to the segments.
    pub fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    /// Returns the number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the entry has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns `true` if every segment is plain.
    pub fn is_plain(&self) -> bool {
        self.segments.iter().all(Segment::is_plain)
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// The visible text: all segment texts concatenated.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Consumes the entry, returning its segments.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

impl From<Vec<Segment>> for Entry {
    fn from(segments: Vec<Segment>) -> Self {
        Entry::new(segments)
    }
}

impl FromIterator<Segment> for Entry {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Entry::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Entry {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Entry {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl std::ops::Index<usize> for Entry {
    type Output = Segment;

    fn index(&self, index: usize) -> &Self::Output {
        &self.segments[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;

    #[test]
    fn test_segment_is_plain() {
        assert!(Segment::new("text").is_plain());
        assert!(
            Segment {
                styles: vec![Style::Default, Style::Default],
                ..Segment::new("text")
            }
            .is_plain()
        );
        assert!(
            !Segment {
                styles: vec![Style::Default, Style::Bold],
                ..Segment::new("text")
            }
            .is_plain()
        );
        assert!(
            !Segment::with_attributes("text", Attributes::from_color(NamedColor::Default))
                .is_plain()
        );
    }

    #[test]
    fn test_segment_attributes() {
        let attributes = Attributes {
            color: Some(Color::Bit8(3)),
            background_color: None,
            styles: vec![Style::Italic],
        };
        let segment = Segment::with_attributes("abc", attributes.clone());
        assert_eq!(segment.text, "abc");
        assert_eq!(segment.attributes(), attributes);
    }

    #[test]
    fn test_entry_basics() {
        let mut entry = Entry::empty();
        assert!(entry.is_empty());
        assert!(entry.is_plain());
        assert_eq!(entry.plain_text(), "");

        entry.push(Segment::new("Hello "));
        entry.push(Segment::with_attributes(
            "World",
            Attributes::from_style(Style::Bold),
        ));
        assert_eq!(entry.segment_count(), 2);
        assert!(!entry.is_plain());
        assert_eq!(entry.plain_text(), "Hello World");
        assert_eq!(entry[1].styles, vec![Style::Bold]);
        assert_eq!((&entry).into_iter().count(), 2);
        assert_eq!(entry.into_segments().len(), 2);
    }

    #[test]
    fn test_entry_single() {
        let entry = Entry::single(Segment::new("only"));
        assert_eq!(entry.segments(), &[Segment::new("only")]);
    }
}
