//! Tunable layout and physics parameters.
//!
//! Both structs deserialize with `#[serde(default)]`, so a host can override a
//! single field from JSON and inherit every other value from the defaults in
//! [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BASELINE_FRACTION, BODY_CHAMFER_PX, BODY_HEIGHT_MARGIN_PX, BODY_WIDTH_MARGIN_PX, DENSITY_PER_PX2, DRAG_STIFFNESS,
    FALLBACK_GLYPH_WIDTH_PX, FLOOR_SINK_PX, FONT_FAMILY, FONT_SIZE_PX, FONT_WEIGHT, FRICTION, GRAVITY_Y,
    LETTER_PADDING_PX, RESTITUTION, STEP_SECONDS, WALL_THICKNESS_PX,
};
use crate::glyph::FontSpec;

/// Everything the engine needs to lay out and simulate the logo.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    pub layout: LayoutConfig,
    pub physics: PhysicsConfig,
}

/// Static layout parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub font: FontSpec,
    /// Gap between adjacent letters.
    pub padding: f64,
    /// Width used for a letter that could not be measured.
    pub fallback_width: f64,
    /// Letter row height as a fraction of the container height.
    pub baseline_fraction: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font: FontSpec::default(),
            padding: LETTER_PADDING_PX,
            fallback_width: FALLBACK_GLYPH_WIDTH_PX,
            baseline_fraction: BASELINE_FRACTION,
        }
    }
}

/// Simulation parameters. Lengths are CSS pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward gravity in engine units (1.0 = 1000 px/s²).
    pub gravity_y: f64,
    pub step_seconds: f64,
    pub body_width_margin: f64,
    pub body_height_margin: f64,
    pub chamfer_radius: f64,
    pub restitution: f64,
    pub friction: f64,
    /// Mass per square pixel.
    pub density: f64,
    pub wall_thickness: f64,
    pub floor_sink: f64,
    pub drag_stiffness: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity_y: GRAVITY_Y,
            step_seconds: STEP_SECONDS,
            body_width_margin: BODY_WIDTH_MARGIN_PX,
            body_height_margin: BODY_HEIGHT_MARGIN_PX,
            chamfer_radius: BODY_CHAMFER_PX,
            restitution: RESTITUTION,
            friction: FRICTION,
            density: DENSITY_PER_PX2,
            wall_thickness: WALL_THICKNESS_PX,
            floor_sink: FLOOR_SINK_PX,
            drag_stiffness: DRAG_STIFFNESS,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self { family: FONT_FAMILY.to_owned(), size_px: FONT_SIZE_PX, weight: FONT_WEIGHT }
    }
}
