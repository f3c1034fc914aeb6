//! Color ramps for heatmap cells.
//!
//! A ramp is a handful of evenly spaced sRGB stops, interpolated linearly.
//! Position 0 is the busiest bucket (darkest), position 1 the quietest.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Background for cells without activity.
pub const EMPTY_CELL_COLOR: &str = "#f8f8f8";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

// Dark plum to pale pink.
const MAIN_STOPS: [[u8; 3]; 5] = [
    [122, 1, 119],
    [197, 27, 138],
    [247, 104, 161],
    [251, 180, 185],
    [254, 235, 226],
];

// Deep blue to pale blue.
const ALT_STOPS: [[u8; 3]; 5] = [
    [8, 69, 148],
    [33, 113, 181],
    [66, 146, 198],
    [158, 202, 225],
    [222, 235, 247],
];

/// The two heatmap ramps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ramp {
    #[default]
    Main,
    Alt,
}

impl Ramp {
    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            Ramp::Main => &MAIN_STOPS,
            Ramp::Alt => &ALT_STOPS,
        }
    }

    /// Sample the ramp at `t`, clamped to `[0, 1]`. NaN samples the start.
    pub fn sample(self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let stops = self.stops();
        let scaled = t * (stops.len() - 1) as f64;
        let lo = (scaled as usize).min(stops.len() - 2);
        let frac = scaled - lo as f64;
        let (a, b) = (stops[lo], stops[lo + 1]);
        let mix = |i: usize| (a[i] as f64 + (b[i] as f64 - a[i] as f64) * frac).round() as u8;
        Rgb([mix(0), mix(1), mix(2)])
    }
}

impl fmt::Display for Ramp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Ramp::Main => "main",
            Ramp::Alt => "alt",
        })
    }
}

impl FromStr for Ramp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" => Ok(Ramp::Main),
            "alt" => Ok(Ramp::Alt),
            other => Err(format!("Unknown ramp '{other}' (expected main or alt)")),
        }
    }
}
