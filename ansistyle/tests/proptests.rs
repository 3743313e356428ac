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


//! Property tests for the parse / merge / generate pipeline.

use proptest::{num, prelude::*};
use tinct_ansistyle::{
    Attributes, BackgroundColor, Color, ColorApproximation, ConsoleEntryParser,
    ConsoleStringGenerator, Entry, EntryParser, Hsl, NamedBackgroundColor, NamedColor, Painter,
    Rgb, Segment, Style, StringGenerator, StyleConfig,
};

const PLAIN_TEXT: &str = r"[^\x1b]{1,16}";
const STYLED_TEXT: &str = r"[^\x1b]{0,16}";

fn rgb() -> impl Strategy<Value = Rgb> {
    (num::u8::ANY, num::u8::ANY, num::u8::ANY).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

fn color() -> impl Strategy<Value = Color> {
    prop_oneof![
        proptest::sample::select(NamedColor::ALL.to_vec()).prop_map(Color::Named),
        num::u8::ANY.prop_map(Color::Bit8),
        rgb().prop_map(Color::Bit24),
    ]
}

fn background_color() -> impl Strategy<Value = BackgroundColor> {
    prop_oneof![
        proptest::sample::select(NamedBackgroundColor::ALL.to_vec())
            .prop_map(BackgroundColor::Named),
        num::u8::ANY.prop_map(BackgroundColor::Bit8),
        rgb().prop_map(BackgroundColor::Bit24),
    ]
}

fn attributes() -> impl Strategy<Value = Attributes> {
    (
        proptest::option::of(color()),
        proptest::option::of(background_color()),
        proptest::collection::vec(proptest::sample::select(Style::ALL.to_vec()), 0..4),
    )
        .prop_map(|(color, background_color, styles)| Attributes {
            color,
            background_color,
            styles,
        })
}

fn segment() -> impl Strategy<Value = Segment> {
    prop_oneof![
        PLAIN_TEXT.prop_map(Segment::new),
        (STYLED_TEXT, attributes())
            .prop_map(|(text, attributes)| Segment::with_attributes(text, attributes))
            .prop_filter("styled segments carry a visible attribute", |s| !s.is_plain()),
    ]
}

fn entry() -> impl Strategy<Value = Entry> {
    proptest::collection::vec(segment(), 0..6)
        .prop_filter("adjacent plain segments read back as one", |segments| {
            segments
                .windows(2)
                .all(|pair| !(pair[0].is_plain() && pair[1].is_plain()))
        })
        .prop_map(Entry::new)
}

/// Text interleaved with SGR runs, foreign CSI sequences and stray escapes.
fn escaped_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            r"\PC{0,8}",
            Just("\x1b".to_string()),
            Just("\x1b[".to_string()),
            Just("\x1b[2J".to_string()),
            Just("\x1b[31m".to_string()),
            Just("\x1b[0m".to_string()),
        ],
        0..8,
    )
    .prop_map(|fragments| fragments.concat())
}

fn generate(entry: &Entry) -> String {
    ConsoleStringGenerator::new(StyleConfig::console()).generate(entry)
}

proptest! {
    #[test]
    fn generated_entries_parse_back(entry in entry()) {
        let parsed = ConsoleEntryParser.parse(&generate(&entry));
        prop_assert_eq!(parsed, entry);
    }

    #[test]
    fn plain_text_is_untouched(text in PLAIN_TEXT) {
        let entry = ConsoleEntryParser.parse(&text);
        prop_assert_eq!(entry.segment_count(), 1);
        prop_assert!(entry.is_plain());
        prop_assert_eq!(generate(&entry), text);
    }

    #[test]
    fn strip_recovers_visible_text(entry in entry()) {
        let painter = Painter::default();
        let stripped = painter.strip(&generate(&entry));
        prop_assert_eq!(&stripped, &entry.plain_text());
        prop_assert_eq!(painter.strip(&stripped), stripped);
    }

    #[test]
    fn removal_is_idempotent(entry in entry()) {
        let painter = Painter::default();
        let styled = generate(&entry);

        let once = painter.remove_color(&styled);
        prop_assert_eq!(painter.remove_color(&once), once);
        let once = painter.remove_background_color(&styled);
        prop_assert_eq!(painter.remove_background_color(&once), once);
        let once = painter.remove_all_styles(&styled);
        prop_assert_eq!(painter.remove_all_styles(&once), once);
    }

    #[test]
    fn styling_preserves_visible_text(entry in entry(), attributes in attributes()) {
        let painter = Painter::default();
        let styled = painter.apply(&generate(&entry), &attributes);
        prop_assert_eq!(painter.strip(&styled), entry.plain_text());
    }

    #[test]
    fn unreadable_escapes_never_lose_text(text in escaped_text(), attributes in attributes()) {
        let painter = Painter::default();
        let styled = painter.apply(&text, &attributes);
        match painter.parse_complete(&text) {
            Some(entry) => prop_assert_eq!(painter.strip(&styled), entry.plain_text()),
            None => {
                prop_assert_eq!(&styled, &text);
                prop_assert_eq!(painter.strip(&text), text.clone());
                prop_assert_eq!(painter.remove_color(&text), text);
            }
        }
    }

    #[test]
    fn disabled_painter_is_identity(text in r"\PC{0,32}", attributes in attributes()) {
        let painter = Painter::new(StyleConfig::disabled());
        prop_assert_eq!(painter.apply(&text, &attributes), text);
    }

    #[test]
    fn bit8_approximation_stays_in_cube(rgb in rgb()) {
        let index = ColorApproximation::from_rgb(rgb).to_bit8();
        prop_assert!((16..=231).contains(&index));
    }

    #[test]
    fn hsl_is_normalized(
        hue in -1000.0f64..1000.0,
        saturation in -50.0f64..150.0,
        lightness in -50.0f64..150.0,
    ) {
        let hsl = Hsl::new(hue, saturation, lightness);
        prop_assert!((0.0..360.0).contains(&hsl.hue()));
        prop_assert!((0.0..=100.0).contains(&hsl.saturation()));
        prop_assert!((0.0..=100.0).contains(&hsl.lightness()));
    }
}
