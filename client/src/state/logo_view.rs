#[cfg(test)]
#[path = "logo_view_test.rs"]
mod logo_view_test;

use logo::glyph::{FontSpec, Glyph, LETTERS};
use logo::layout::{Pose, render_poses};

/// What the logo section draws: one pose per letter plus trigger and cursor state.
///
/// Written by the engine subscription, read by the view.
#[derive(Clone, Debug, PartialEq)]
pub struct LogoViewState {
    pub poses: Vec<Pose>,
    /// Physics running; hides the activation trigger.
    pub active: bool,
    /// CSS cursor requested by the engine, if any.
    pub cursor: Option<String>,
}

impl Default for LogoViewState {
    fn default() -> Self {
        Self { poses: render_poses(&[], LETTERS.len()), active: false, cursor: None }
    }
}

impl LogoViewState {
    /// Replace the poses, keeping exactly one per letter.
    pub fn set_poses(&mut self, poses: &[Pose]) {
        self.poses = render_poses(poses, LETTERS.len());
    }

    #[must_use]
    pub fn pose(&self, index: usize) -> Pose {
        self.poses.get(index).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn cursor_css(&self) -> &str {
        self.cursor.as_deref().unwrap_or("default")
    }
}

/// CSS transform that centers a letter on its pose.
#[must_use]
pub fn letter_transform(pose: &Pose) -> String {
    format!("translate(-50%, -50%) translate({}px, {}px) rotate({}rad)", pose.x, pose.y, pose.angle)
}

/// Inline style for one absolutely positioned letter.
#[must_use]
pub fn letter_style(glyph: &Glyph, font: &FontSpec, pose: &Pose) -> String {
    format!(
        "transform: {}; color: {}; font: {}; line-height: 1",
        letter_transform(pose),
        glyph.color,
        font.css_shorthand()
    )
}
