//! Pointer input: buttons and the drag constraint that pulls letters around.
//!
//! The constraint is a small state machine. It is idle until a primary-button
//! press lands on a letter body, then tracks the pointer until release. While
//! grabbed, the session asks the physics world to pull the grabbed anchor
//! toward the pointer on every step.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::layout::Point;
use crate::physics::BodyId;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// An active grab: which body, where on it, and where the pointer is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grab {
    pub body: BodyId,
    /// Grab point in the body's local frame, CSS pixels.
    pub local_anchor: Point,
    /// Current pointer position in container space.
    pub target: Point,
}

/// Pointer-to-body drag constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerConstraint {
    stiffness: f64,
    grab: Option<Grab>,
}

impl PointerConstraint {
    #[must_use]
    pub fn new(stiffness: f64) -> Self {
        Self { stiffness, grab: None }
    }

    #[must_use]
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    #[must_use]
    pub fn grab(&self) -> Option<&Grab> {
        self.grab.as_ref()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    /// Start dragging `body` from `local_anchor`, with the pointer at `target`.
    pub fn attach(&mut self, body: BodyId, local_anchor: Point, target: Point) {
        self.grab = Some(Grab { body, local_anchor, target });
    }

    /// Move the pointer. Returns `false` when nothing is grabbed.
    pub fn move_to(&mut self, target: Point) -> bool {
        match self.grab.as_mut() {
            Some(grab) => {
                grab.target = target;
                true
            }
            None => false,
        }
    }

    /// Let go of whatever is grabbed, returning it.
    pub fn release(&mut self) -> Option<Grab> {
        self.grab.take()
    }
}
