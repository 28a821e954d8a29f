//! A live physics session: the world, its letter bodies and the pointer pull.
//!
//! A [`Session`] is created when the logo activates and disposed when it
//! resets. Disposal takes the [`LoopStopped`] record of the engine's frame
//! count. It is bookkeeping, not a guard: the host cancels its real
//! animation-frame callback only after disposal returns. No frame can read a
//! cleared world because everything runs on one thread and the engine drops
//! its session in the same call that disposes it, so a late frame finds no
//! active session and does nothing.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::{LayoutConfig, PhysicsConfig};
use crate::error::LogoError;
use crate::glyph::MeasuredGlyph;
use crate::input::PointerConstraint;
use crate::layout::{Point, Pose, Viewport, static_poses};
use crate::physics::{BodyId, BoxDesc, Material, PhysicsWorld};

/// The per-frame stepping loop, from the engine's point of view.
///
/// The host owns the actual animation-frame callback; this value only counts
/// the frames the engine has stepped while it expects them.
#[derive(Debug)]
pub struct FrameLoop {
    frames: u64,
}

/// Frame count of a stopped [`FrameLoop`], handed to [`Session::dispose`].
#[derive(Debug)]
pub struct LoopStopped {
    pub frames: u64,
}

impl FrameLoop {
    #[must_use]
    pub fn start() -> Self {
        Self { frames: 0 }
    }

    /// Count one delivered frame.
    pub fn tick(&mut self) {
        self.frames += 1;
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub fn stop(self) -> LoopStopped {
        LoopStopped { frames: self.frames }
    }
}

/// The immovable bodies that keep letters on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundaries {
    pub floor: BodyId,
    pub left_wall: BodyId,
    pub right_wall: BodyId,
}

/// Owned simulation state for one activation.
pub struct Session {
    world: PhysicsWorld,
    boundaries: Boundaries,
    letters: Vec<BodyId>,
    pointer: PointerConstraint,
    viewport: Viewport,
}

impl Session {
    /// Build the world for `measured` letters inside `viewport`.
    ///
    /// Each letter body starts exactly where the static layout draws it, so
    /// activation produces no visual jump.
    ///
    /// # Errors
    ///
    /// [`LogoError::NoGlyphs`] for an empty letter list and
    /// [`LogoError::InvalidViewport`] for a container without a usable size.
    pub fn build(
        measured: &[MeasuredGlyph],
        viewport: Viewport,
        layout: &LayoutConfig,
        physics: &PhysicsConfig,
    ) -> Result<Self, LogoError> {
        if measured.is_empty() {
            return Err(LogoError::NoGlyphs);
        }
        if !viewport.is_usable() {
            return Err(LogoError::InvalidViewport { width: viewport.width, height: viewport.height });
        }

        let mut world = PhysicsWorld::new(physics.gravity_y, physics.step_seconds);
        let boundaries = add_boundaries(&mut world, viewport, physics);

        let material = Material { restitution: physics.restitution, friction: physics.friction, density: physics.density };
        let height = layout.font.size_px + physics.body_height_margin;
        let letters = measured
            .iter()
            .zip(static_poses(measured, measured.len(), viewport, layout))
            .map(|(glyph, pose)| {
                world.add_dynamic_box(&BoxDesc {
                    center: pose.center(),
                    width: glyph.width_or(layout.fallback_width) + physics.body_width_margin,
                    height,
                    corner_radius: physics.chamfer_radius,
                    material,
                })
            })
            .collect::<Vec<_>>();

        log::debug!("physics session built: {} letters in {}x{}", letters.len(), viewport.width, viewport.height);

        Ok(Self { world, boundaries, letters, pointer: PointerConstraint::new(physics.drag_stiffness), viewport })
    }

    #[must_use]
    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    #[must_use]
    pub fn boundaries(&self) -> Boundaries {
        self.boundaries
    }

    /// Letter bodies in glyph order.
    #[must_use]
    pub fn letters(&self) -> &[BodyId] {
        &self.letters
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn pointer(&self) -> &PointerConstraint {
        &self.pointer
    }

    /// Current letter poses in glyph order.
    #[must_use]
    pub fn poses(&self) -> Vec<Pose> {
        self.letters
            .iter()
            .map(|id| self.world.pose(*id).unwrap_or_default())
            .collect()
    }

    /// Advance one step and read back every letter's pose.
    pub fn step(&mut self) -> Vec<Pose> {
        if let Some(grab) = self.pointer.grab().copied() {
            self.world.apply_drag(&grab, self.pointer.stiffness());
        }
        self.world.step();
        self.poses()
    }

    /// Grab the topmost letter under `point`. Returns whether one was grabbed.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        let Some(body) = self.world.body_at(point, &self.letters) else {
            return false;
        };
        let Some(local) = self.world.local_point(body, point) else {
            return false;
        };
        self.pointer.attach(body, local, self.viewport.clamp(point));
        true
    }

    /// Move the drag target, kept inside the container so a captured pointer
    /// cannot drag a letter past the walls. Returns whether a letter is being
    /// dragged.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        self.pointer.move_to(self.viewport.clamp(point))
    }

    /// Release the dragged letter. Returns whether one was released.
    pub fn pointer_up(&mut self) -> bool {
        self.pointer.release().is_some()
    }

    /// Clear every body and the pointer constraint, then drop the world.
    ///
    /// Returns how many bodies were removed.
    pub fn dispose(mut self, stopped: LoopStopped) -> usize {
        self.pointer.release();
        let removed = self.world.clear();
        log::debug!("physics session disposed after {} frames, {removed} bodies removed", stopped.frames);
        removed
    }
}

fn add_boundaries(world: &mut PhysicsWorld, viewport: Viewport, physics: &PhysicsConfig) -> Boundaries {
    let t = physics.wall_thickness;
    let (w, h) = (viewport.width, viewport.height);
    let floor_material = Material { restitution: physics.restitution, friction: physics.friction, ..Material::default() };

    let floor = world.add_fixed_box(&BoxDesc {
        center: Point::new(w / 2.0, h + physics.floor_sink + t / 2.0),
        width: w,
        height: t,
        corner_radius: 0.0,
        material: floor_material,
    });
    let left_wall = world.add_fixed_box(&BoxDesc {
        center: Point::new(-t / 2.0, h / 2.0),
        width: t,
        height: h,
        corner_radius: 0.0,
        material: Material::default(),
    });
    let right_wall = world.add_fixed_box(&BoxDesc {
        center: Point::new(w + t / 2.0, h / 2.0),
        width: t,
        height: h,
        corner_radius: 0.0,
        material: Material::default(),
    });

    Boundaries { floor, left_wall, right_wall }
}
