//! Static layout: where the letters sit before physics takes over.
//!
//! All coordinates are CSS pixels relative to the logo container's top-left
//! corner, y pointing down. A [`Pose`] is a letter's center plus its rotation.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::config::LayoutConfig;
use crate::glyph::MeasuredGlyph;

/// A point in container space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Center position and rotation of one letter.
///
/// `angle` is in radians, positive clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

impl Pose {
    #[must_use]
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Self { x, y, angle }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Size of the logo container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are finite and strictly positive.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Nearest point inside the container.
    #[must_use]
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(point.x.clamp(0.0, self.width.max(0.0)), point.y.clamp(0.0, self.height.max(0.0)))
    }
}

/// Width of the whole letter run used for centering.
///
/// Unmeasured letters contribute only their padding here, while
/// [`static_poses`] still places them using the fallback width.
#[must_use]
pub fn total_width(measured: &[MeasuredGlyph], padding: f64) -> f64 {
    measured.iter().map(|g| g.width.unwrap_or(0.0) + padding).sum()
}

/// Center poses for a horizontally centered, contiguous letter run.
///
/// Returns an empty list when `measured` does not cover exactly
/// `glyph_count` letters, meaning measurement has not happened yet.
#[must_use]
pub fn static_poses(measured: &[MeasuredGlyph], glyph_count: usize, viewport: Viewport, layout: &LayoutConfig) -> Vec<Pose> {
    if measured.len() != glyph_count {
        return Vec::new();
    }

    let total = total_width(measured, layout.padding);
    let y = viewport.height * layout.baseline_fraction;
    let mut cursor = (viewport.width - total) / 2.0;

    measured
        .iter()
        .map(|g| {
            let w = g.width_or(layout.fallback_width);
            let pose = Pose::new(cursor + w / 2.0, y, 0.0);
            cursor += w + layout.padding;
            pose
        })
        .collect()
}

/// The pose at `idx`, or the origin when none is available yet.
#[must_use]
pub fn pose_or_default(poses: &[Pose], idx: usize) -> Pose {
    poses.get(idx).copied().unwrap_or_default()
}

/// Exactly `glyph_count` poses, padding missing entries with the origin.
#[must_use]
pub fn render_poses(poses: &[Pose], glyph_count: usize) -> Vec<Pose> {
    (0..glyph_count).map(|idx| pose_or_default(poses, idx)).collect()
}
