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


//! Benchmarks for the styling pipeline

use bytes::BytesMut;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tinct_ansistyle::{
    ColorApproximation, ConsoleEntryParser, ConsoleStringGenerator, EntryParser, HexColorTarget,
    Hsl, NamedBackgroundColor, NamedColor, Painter, StringGenerator, Style, StyleConfig,
    StyledStringBuilder,
};

fn styled_input(size: usize) -> String {
    let painter = Painter::default();
    let words = ["Hello ", "Rainbow ", "World "];
    let mut output = String::new();
    for i in 0..size {
        let word = words[i % words.len()];
        let styled = match i % 3 {
            0 => painter.apply_color(word, NamedColor::Red),
            1 => painter.apply_style(word, Style::Bold),
            _ => word.to_string(),
        };
        output.push_str(&styled);
    }
    output
}

// Benchmark applying a color to plain text
fn bench_apply_plain_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_plain_text");
    let painter = Painter::default();

    for size in [10, 100, 1000, 10000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let text = "A".repeat(size);
            b.iter(|| black_box(painter.apply_color(black_box(&text), NamedColor::Green)));
        });
    }
    group.finish();
}

// Benchmark re-styling an already segmented string
fn bench_apply_styled_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_styled_text");
    let painter = Painter::default();

    for segments in [1, 10, 100, 1000].iter() {
        let input = styled_input(*segments);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(segments), &input, |b, input| {
            b.iter(|| {
                black_box(painter.apply_background_color(black_box(input), NamedBackgroundColor::Blue))
            });
        });
    }
    group.finish();
}

// Benchmark parsing alone
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for segments in [1, 10, 100, 1000].iter() {
        let input = styled_input(*segments);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(segments), &input, |b, input| {
            b.iter(|| black_box(ConsoleEntryParser.parse(black_box(input))));
        });
    }
    group.finish();
}

// Benchmark generation into a String and into a byte buffer
fn bench_generate(c: &mut Criterion) {
    let generator = ConsoleStringGenerator::new(StyleConfig::console());
    let entry = ConsoleEntryParser.parse(&styled_input(100));

    c.bench_function("generate_string", |b| {
        b.iter(|| black_box(generator.generate(black_box(&entry))));
    });
    c.bench_function("generate_encode", |b| {
        b.iter(|| {
            let mut buffer = BytesMut::new();
            generator.encode(black_box(&entry), &mut buffer).unwrap();
            black_box(buffer);
        });
    });
}

// Benchmark stripping
fn bench_strip(c: &mut Criterion) {
    let painter = Painter::default();
    let input = styled_input(1000);
    c.bench_function("strip", |b| {
        b.iter(|| black_box(painter.strip(black_box(&input))));
    });
}

// Benchmark deferred building against chained painting
fn bench_builder_vs_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder_vs_chain");
    let painter = Painter::default();

    group.bench_function("chain", |b| {
        b.iter(|| {
            let text = painter.apply_color(black_box("Hello Rainbow"), NamedColor::Red);
            let text = painter.apply_background_color(&text, NamedBackgroundColor::Yellow);
            let text = painter.apply_style(&text, Style::Bold);
            black_box(painter.apply_style(&text, Style::Underline))
        });
    });
    group.bench_function("builder", |b| {
        b.iter(|| {
            let text = StyledStringBuilder::new(black_box("Hello Rainbow"))
                .color(NamedColor::Red)
                .background_color(NamedBackgroundColor::Yellow)
                .style(Style::Bold)
                .style(Style::Underline)
                .build(&painter);
            black_box(text)
        });
    });
    group.finish();
}

// Benchmark color conversions
fn bench_color_conversion(c: &mut Criterion) {
    c.bench_function("hex_to_bit8", |b| {
        b.iter(|| {
            ColorApproximation::parse_hex(black_box("#afafd7"))
                .map(|c| c.convert(HexColorTarget::Bit8Approximated))
        });
    });
    c.bench_function("hsl_to_rgb", |b| {
        b.iter(|| Hsl::new(black_box(270.0), black_box(50.0), black_box(50.0)).to_rgb());
    });
}

criterion_group!(
    benches,
    bench_apply_plain_text,
    bench_apply_styled_text,
    bench_parse,
    bench_generate,
    bench_strip,
    bench_builder_vs_chain,
    bench_color_conversion,
);
criterion_main!(benches);
