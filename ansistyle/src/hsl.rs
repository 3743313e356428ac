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


use crate::color::Rgb;

/// A color in hue / saturation / lightness form.
///
/// Values are normalized on construction: the hue wraps into `[0, 360)` degrees and
/// saturation and lightness clamp into `[0, 100]` percent, so `Hsl::new(380.0, 50.0, 50.0)`
/// and `Hsl::new(20.0, 50.0, 50.0)` describe the same color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsl {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

impl Hsl {
    /// Creates a normalized HSL color.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Hsl {
        let hue = hue % 360.0;
        let hue = if hue < 0.0 { hue + 360.0 } else { hue };
        // A tiny negative remainder can round up to a full turn.
        let hue = if hue >= 360.0 { 0.0 } else { hue };
        Hsl {
            hue,
            saturation: saturation.clamp(0.0, 100.0),
            lightness: lightness.clamp(0.0, 100.0),
        }
    }

    /// Hue in degrees, `[0, 360)`.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Saturation in percent, `[0, 100]`.
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Lightness in percent, `[0, 100]`.
    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// Converts to RGB, rounding each channel half away from zero.
    pub fn to_rgb(&self) -> Rgb {
        let h = self.hue / 360.0;
        let s = self.saturation / 100.0;
        let l = self.lightness / 100.0;

        if s == 0.0 {
            let gray = to_channel(l);
            return Rgb::new(gray, gray, gray);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb::new(
            to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to_channel(hue_to_rgb(p, q, h)),
            to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }
}

impl From<(f64, f64, f64)> for Hsl {
    fn from((hue, saturation, lightness): (f64, f64, f64)) -> Self {
        Hsl::new(hue, saturation, lightness)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
