//! Logo letters and the width measurement that feeds the static layout.
//!
//! Measurement happens once, after the host has mounted the page. A
//! [`TextMeasurer`] reports the rendered width of a single character, or
//! `None` when it could not measure; the layout then substitutes a fallback
//! width instead of retrying.

#[cfg(test)]
#[path = "glyph_test.rs"]
mod glyph_test;

use serde::{Deserialize, Serialize};

/// One letter of the logotype with its display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    /// CSS color string.
    pub color: &'static str,
}

/// The six letters of the logo, left to right.
pub const LETTERS: [Glyph; 6] = [
    Glyph { ch: 'G', color: "#4285F4" },
    Glyph { ch: 'o', color: "#EA4335" },
    Glyph { ch: 'o', color: "#FBBC05" },
    Glyph { ch: 'g', color: "#4285F4" },
    Glyph { ch: 'l', color: "#34A853" },
    Glyph { ch: 'e', color: "#EA4335" },
];

/// Font used for both measuring and drawing letters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size_px: f64,
    pub weight: u16,
}

impl FontSpec {
    /// CSS `font` shorthand, e.g. `500 92px Inter`.
    #[must_use]
    pub fn css_shorthand(&self) -> String {
        format!("{} {}px {}", self.weight, self.size_px, self.family)
    }
}

/// A letter paired with its measured width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredGlyph {
    pub ch: char,
    /// Rendered width in CSS pixels; `None` if measurement failed.
    pub width: Option<f64>,
}

impl MeasuredGlyph {
    /// Width for positioning, substituting `fallback` when unmeasured.
    #[must_use]
    pub fn width_or(&self, fallback: f64) -> f64 {
        self.width.unwrap_or(fallback)
    }
}

/// Reports the rendered width of a single character.
pub trait TextMeasurer {
    /// Width of `ch` drawn in `font`, or `None` if it cannot be measured.
    fn measure(&mut self, ch: char, font: &FontSpec) -> Option<f64>;
}

/// Measure every glyph in order.
///
/// Negative or non-finite readings are treated as failed measurements.
pub fn measure_glyphs<M: TextMeasurer + ?Sized>(glyphs: &[Glyph], font: &FontSpec, measurer: &mut M) -> Vec<MeasuredGlyph> {
    glyphs
        .iter()
        .map(|g| {
            let width = measurer
                .measure(g.ch, font)
                .filter(|w| w.is_finite() && *w >= 0.0);
            MeasuredGlyph { ch: g.ch, width }
        })
        .collect()
}
