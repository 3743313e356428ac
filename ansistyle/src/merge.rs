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


//! Layering new attributes onto parsed segments, and removing attributes from them.

use crate::codes::Attributes;
use crate::entry::{Entry, Segment};
use crate::style::Style;

impl Segment {
    /// Layers `attributes` onto this segment.
    ///
    /// Styles are appended. A color (or background color) in `attributes` replaces the
    /// segment's own only when the segment has none or `overwrite_color` is set. A plain
    /// segment drops its placeholder [`Style::Default`] entries first, so an unstyled run
    /// never leaks a `0` into the regenerated codes.
    pub fn update(mut self, attributes: &Attributes, overwrite_color: bool) -> Segment {
        if self.is_plain() {
            self.styles.clear();
        }
        if overwrite_color || self.color.is_none() {
            self.color = attributes.color.or(self.color);
        }
        if overwrite_color || self.background_color.is_none() {
            self.background_color = attributes.background_color.or(self.background_color);
        }
        self.styles.extend_from_slice(&attributes.styles);
        self
    }

    /// Clears the foreground color.
    pub fn without_color(mut self) -> Segment {
        self.color = None;
        self
    }

    /// Clears the background color.
    pub fn without_background_color(mut self) -> Segment {
        self.background_color = None;
        self
    }

    /// Removes every occurrence of `style`.
    pub fn without_style(mut self, style: Style) -> Segment {
        self.styles.retain(|s| *s != style);
        self
    }

    /// Removes all styles.
    pub fn without_styles(mut self) -> Segment {
        self.styles.clear();
        self
    }
}

impl Entry {
    /// Layers `attributes` onto every segment.
    ///
    /// A single-segment entry is being restyled as a whole, so its colors are replaced.
    /// In a multi-segment entry each segment keeps the colors it already has and only
    /// uncolored segments pick up the new ones; styles are appended everywhere.
    pub fn merge(self, attributes: &Attributes) -> Entry {
        let overwrite_color = self.segment_count() == 1;
        self.into_iter()
            .map(|segment| segment.update(attributes, overwrite_color))
            .collect()
    }

    /// Clears the foreground color of every segment.
    pub fn without_color(self) -> Entry {
        self.into_iter().map(Segment::without_color).collect()
    }

    /// Clears the background color of every segment.
    pub fn without_background_color(self) -> Entry {
        self.into_iter().map(Segment::without_background_color).collect()
    }

    /// Removes every occurrence of `style` from every segment.
    pub fn without_style(self, style: Style) -> Entry {
        self.into_iter().map(|s| s.without_style(style)).collect()
    }

    /// Removes all styles from every segment.
    pub fn without_styles(self) -> Entry {
        self.into_iter().map(Segment::without_styles).collect()
    }

    /// Clears every attribute, leaving only plain text segments.
    pub fn without_attributes(self) -> Entry {
        self.into_iter()
            .map(|segment| Segment::new(segment.text))
            .collect()
    }
}
