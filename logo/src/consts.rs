//! Shared numeric constants for the logo crate.
//!
//! These are the defaults behind [`crate::config::LogoConfig`]; tune them there
//! rather than reaching for the constants directly.

// ── Typography ──────────────────────────────────────────────────

/// Font stack used both for measuring and for drawing the letters.
pub const FONT_FAMILY: &str = "Product Sans, Inter, system-ui, Arial, sans-serif";

/// Letter font size in CSS pixels.
pub const FONT_SIZE_PX: f64 = 92.0;

/// Letter font weight.
pub const FONT_WEIGHT: u16 = 500;

// ── Static layout ───────────────────────────────────────────────

/// Horizontal gap between adjacent letters, in CSS pixels.
pub const LETTER_PADDING_PX: f64 = 6.0;

/// Width assumed for a letter whose measurement is missing.
pub const FALLBACK_GLYPH_WIDTH_PX: f64 = 60.0;

/// Vertical position of the letter row as a fraction of container height.
pub const BASELINE_FRACTION: f64 = 0.35;

// ── Physics ─────────────────────────────────────────────────────

/// Downward gravity in engine units (one unit = 1000 px/s²).
pub const GRAVITY_Y: f64 = 1.1;

/// Acceleration in px/s² represented by one unit of gravity.
pub const GRAVITY_UNIT_PX_PER_S2: f64 = 1000.0;

/// CSS pixels per physics meter. Keeps rapier's tolerances in a sane range.
pub const PIXELS_PER_METER: f64 = 100.0;

/// Fixed simulation step in seconds.
pub const STEP_SECONDS: f64 = 1.0 / 60.0;

/// Extra width added to each letter body beyond its measured glyph width.
pub const BODY_WIDTH_MARGIN_PX: f64 = 6.0;

/// Extra height added to each letter body beyond the font size.
pub const BODY_HEIGHT_MARGIN_PX: f64 = 14.0;

/// Corner radius of letter bodies.
pub const BODY_CHAMFER_PX: f64 = 10.0;

/// Bounciness of letters and floor.
pub const RESTITUTION: f64 = 0.2;

/// Surface friction of letters and floor.
pub const FRICTION: f64 = 0.8;

/// Mass per square pixel of letter bodies.
pub const DENSITY_PER_PX2: f64 = 0.0025;

/// Thickness of the floor and side walls.
pub const WALL_THICKNESS_PX: f64 = 100.0;

/// How far the floor's top edge sits below the container's bottom edge.
/// Negative values raise it into view.
pub const FLOOR_SINK_PX: f64 = -2.0;

/// Fraction of the anchor-to-pointer gap closed per step while dragging.
pub const DRAG_STIFFNESS: f64 = 0.2;
