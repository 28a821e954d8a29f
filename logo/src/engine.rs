use web_sys::HtmlElement;

use crate::broadcast::{PoseBroadcast, SubscriptionId};
use crate::config::LogoConfig;
use crate::error::LogoError;
use crate::glyph::{Glyph, LETTERS, MeasuredGlyph, TextMeasurer, measure_glyphs};
use crate::input::Button;
use crate::layout::{Point, Pose, Viewport, render_poses, static_poses};
use crate::measure::DomMeasurer;
use crate::session::{FrameLoop, LoopStopped, Session};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Side effects the host must perform after an engine call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Begin requesting animation frames and call `on_frame` on each.
    StartFrameLoop,
    /// Stop requesting animation frames.
    CancelFrameLoop,
    /// Yield once, then call `complete_reset`.
    ScheduleReset,
    SetCursor(String),
}

/// Where the logo is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Static layout with the activation trigger showing.
    Idle,
    /// Physics running.
    Active,
    /// World torn down after a resize; waiting for the host to yield once.
    Resetting,
}

enum Sim {
    Idle,
    Active { session: Session, frame_loop: FrameLoop },
    Resetting,
}

/// Core engine state: all logic that does not touch the DOM.
///
/// Tested natively; `Engine` adds the container element on top.
pub struct EngineCore {
    config: LogoConfig,
    glyphs: Vec<Glyph>,
    measured: Vec<MeasuredGlyph>,
    viewport: Viewport,
    sim: Sim,
    live_poses: Vec<Pose>,
    broadcast: PoseBroadcast,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(&LETTERS, LogoConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(glyphs: &[Glyph], config: LogoConfig) -> Self {
        Self {
            config,
            glyphs: glyphs.to_vec(),
            measured: Vec::new(),
            viewport: Viewport::default(),
            sim: Sim::Idle,
            live_poses: Vec::new(),
            broadcast: PoseBroadcast::new(),
        }
    }

    // --- Data inputs ---

    /// Record letter widths. Takes effect on the static layout immediately.
    pub fn set_measurements(&mut self, measured: Vec<MeasuredGlyph>) {
        self.measured = measured;
        if self.phase() == Phase::Idle {
            self.publish_static();
        }
    }

    /// Measure every letter with `measurer`.
    pub fn measure<M: TextMeasurer + ?Sized>(&mut self, measurer: &mut M) {
        let measured = measure_glyphs(&self.glyphs, &self.config.layout.font, measurer);
        self.set_measurements(measured);
    }

    /// Update the container size without any lifecycle transition.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    // --- Subscriptions ---

    pub fn subscribe(&mut self, callback: impl FnMut(&[Pose]) + 'static) -> SubscriptionId {
        self.broadcast.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.broadcast.unsubscribe(id)
    }

    // --- Queries ---

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.sim {
            Sim::Idle => Phase::Idle,
            Sim::Active { .. } => Phase::Active,
            Sim::Resetting => Phase::Resetting,
        }
    }

    #[must_use]
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    #[must_use]
    pub fn measured(&self) -> &[MeasuredGlyph] {
        &self.measured
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The running session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match &self.sim {
            Sim::Active { session, .. } => Some(session),
            _ => None,
        }
    }

    /// Static layout for the current measurements and viewport.
    ///
    /// Empty until measurements exist.
    #[must_use]
    pub fn static_poses(&self) -> Vec<Pose> {
        static_poses(&self.measured, self.glyphs.len(), self.viewport, &self.config.layout)
    }

    /// One pose per glyph for drawing: live poses while active, the static
    /// layout otherwise, the origin where neither is available.
    #[must_use]
    pub fn poses(&self) -> Vec<Pose> {
        let source = match self.sim {
            Sim::Active { .. } => self.live_poses.clone(),
            Sim::Resetting => Vec::new(),
            Sim::Idle => self.static_poses(),
        };
        render_poses(&source, self.glyphs.len())
    }

    // --- Lifecycle ---

    /// Switch from the static layout to live physics.
    ///
    /// Ignored (empty action list) outside [`Phase::Idle`].
    ///
    /// # Errors
    ///
    /// Propagates [`LogoError`] when the world cannot be built; the engine
    /// stays idle.
    pub fn activate(&mut self) -> Result<Vec<Action>, LogoError> {
        if !matches!(self.sim, Sim::Idle) {
            return Ok(Vec::new());
        }

        let measured = self.measured_or_fallback();
        let session = Session::build(&measured, self.viewport, &self.config.layout, &self.config.physics)?;
        self.live_poses = session.poses();
        self.sim = Sim::Active { session, frame_loop: FrameLoop::start() };
        log::debug!("logo activated");

        self.broadcast.publish(&self.live_poses);
        Ok(vec![Action::StartFrameLoop, Action::SetCursor("grab".to_owned())])
    }

    /// Step the simulation and publish poses. Returns `false` when not active,
    /// telling the host not to request another frame.
    pub fn on_frame(&mut self) -> bool {
        let Sim::Active { session, frame_loop } = &mut self.sim else {
            return false;
        };
        frame_loop.tick();
        self.live_poses = session.step();
        self.broadcast.publish(&self.live_poses);
        true
    }

    /// React to a container resize.
    ///
    /// While active this tears the world down and schedules a reset to the
    /// static layout; otherwise it only records the new size.
    pub fn on_resize(&mut self, viewport: Viewport) -> Vec<Action> {
        self.viewport = viewport;
        match self.stop_simulation() {
            Some(removed) => {
                self.sim = Sim::Resetting;
                log::debug!("logo reset pending after resize, {removed} bodies cleared");
                vec![Action::CancelFrameLoop, Action::ScheduleReset]
            }
            None => {
                if self.phase() == Phase::Idle {
                    self.publish_static();
                }
                Vec::new()
            }
        }
    }

    /// Finish a resize reset after the host has yielded. Returns whether a
    /// reset was pending.
    pub fn complete_reset(&mut self) -> bool {
        if !matches!(self.sim, Sim::Resetting) {
            return false;
        }
        self.sim = Sim::Idle;
        self.live_poses.clear();
        log::debug!("logo back to static layout");
        self.publish_static();
        true
    }

    /// Unconditional cleanup for unmount: stops the loop, clears the world,
    /// drops subscribers.
    pub fn teardown(&mut self) -> Vec<Action> {
        let was_running = self.stop_simulation().is_some();
        self.sim = Sim::Idle;
        self.live_poses.clear();
        self.broadcast.clear();
        if was_running { vec![Action::CancelFrameLoop] } else { Vec::new() }
    }

    // --- Pointer input ---

    pub fn on_pointer_down(&mut self, point: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        if let Sim::Active { session, .. } = &mut self.sim
            && session.pointer_down(point)
        {
            return vec![Action::SetCursor("grabbing".to_owned())];
        }
        Vec::new()
    }

    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        if let Sim::Active { session, .. } = &mut self.sim {
            session.pointer_move(point);
        }
        Vec::new()
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if let Sim::Active { session, .. } = &mut self.sim
            && session.pointer_up()
        {
            return vec![Action::SetCursor("grab".to_owned())];
        }
        Vec::new()
    }

    // --- Internals ---

    /// Leave the active state and dispose its session. Returns the number of
    /// bodies removed, or `None` if nothing was running. The host cancels its
    /// frame request afterwards; any frame in between sees no session.
    fn stop_simulation(&mut self) -> Option<usize> {
        if !matches!(self.sim, Sim::Active { .. }) {
            return None;
        }
        let Sim::Active { session, frame_loop } = std::mem::replace(&mut self.sim, Sim::Idle) else {
            return None;
        };
        let stopped: LoopStopped = frame_loop.stop();
        Some(session.dispose(stopped))
    }

    fn measured_or_fallback(&self) -> Vec<MeasuredGlyph> {
        if self.measured.len() == self.glyphs.len() {
            return self.measured.clone();
        }
        self.glyphs
            .iter()
            .map(|g| MeasuredGlyph { ch: g.ch, width: None })
            .collect()
    }

    fn publish_static(&mut self) {
        let poses = self.poses();
        self.broadcast.publish(&poses);
    }
}

/// The browser-facing engine. Wraps `EngineCore` and owns the logo container element.
pub struct Engine {
    container: HtmlElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to the given container element.
    #[must_use]
    pub fn new(container: HtmlElement, config: LogoConfig) -> Self {
        Self { container, core: EngineCore::new(&LETTERS, config) }
    }

    /// Read the container's current size from its bounding box.
    #[must_use]
    pub fn container_viewport(&self) -> Viewport {
        let rect = self.container.get_bounding_client_rect();
        Viewport::new(rect.width(), rect.height())
    }

    /// Measure the letters with an off-screen DOM probe. Call once after mount.
    pub fn measure_letters(&mut self) {
        let mut measurer = DomMeasurer::new();
        self.core.measure(&mut measurer);
    }

    /// Pull the container size into the engine without any transition.
    pub fn sync_viewport(&mut self) {
        let viewport = self.container_viewport();
        self.core.set_viewport(viewport);
    }

    // --- Delegated lifecycle ---

    /// Activate physics at the container's current size.
    ///
    /// # Errors
    ///
    /// See [`EngineCore::activate`].
    pub fn activate(&mut self) -> Result<Vec<Action>, LogoError> {
        self.sync_viewport();
        self.core.activate()
    }

    pub fn on_frame(&mut self) -> bool {
        self.core.on_frame()
    }

    pub fn on_resize(&mut self) -> Vec<Action> {
        let viewport = self.container_viewport();
        self.core.on_resize(viewport)
    }

    pub fn complete_reset(&mut self) -> bool {
        self.core.complete_reset()
    }

    pub fn teardown(&mut self) -> Vec<Action> {
        self.core.teardown()
    }

    // --- Delegated input ---

    pub fn on_pointer_down(&mut self, point: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(point, button)
    }

    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        self.core.on_pointer_move(point)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&[Pose]) + 'static) -> SubscriptionId {
        self.core.subscribe(callback)
    }
}
