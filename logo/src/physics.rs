//! Thin 2D rigid-body world over `rapier2d`.
//!
//! The rest of the crate only needs a small contract from a physics engine:
//! a world with gravity, fixed and dynamic (optionally rounded) boxes with
//! material properties, removal, a pointer pull, a fixed step, and pose
//! readback. [`PhysicsWorld`] exposes exactly that, in CSS pixels.
//!
//! Internally everything is scaled by [`PIXELS_PER_METER`] so rapier's
//! contact tolerances operate on meter-sized letters rather than 60-unit ones.

#[cfg(test)]
#[path = "physics_test.rs"]
mod physics_test;

use rapier2d::parry::query::PointQuery;
use rapier2d::prelude::*;

use crate::consts::{GRAVITY_UNIT_PX_PER_S2, PIXELS_PER_METER};
use crate::input::Grab;
use crate::layout::{Point, Pose};

/// Opaque handle to a body in a [`PhysicsWorld`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(RigidBodyHandle);

/// Surface and mass properties of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub restitution: f64,
    pub friction: f64,
    /// Mass per square pixel. Ignored for fixed bodies.
    pub density: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self { restitution: 0.0, friction: 0.1, density: 0.001 }
    }
}

/// An axis-aligned box to insert into the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxDesc {
    pub center: Point,
    pub width: f64,
    pub height: f64,
    /// Corner rounding radius; zero for sharp corners.
    pub corner_radius: f64,
    pub material: Material,
}

fn to_m(px: f64) -> Real {
    (px / PIXELS_PER_METER) as Real
}

fn to_px(m: Real) -> f64 {
    f64::from(m) * PIXELS_PER_METER
}

fn point_m(p: Point) -> rapier2d::math::Point<Real> {
    point![to_m(p.x), to_m(p.y)]
}

/// A simulated world: bodies, colliders, joints and the solver state.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl PhysicsWorld {
    /// Create an empty world.
    ///
    /// `gravity_y` is in engine units (see [`GRAVITY_UNIT_PX_PER_S2`]),
    /// positive pointing down the screen.
    #[must_use]
    pub fn new(gravity_y: f64, step_seconds: f64) -> Self {
        let params = IntegrationParameters { dt: step_seconds as Real, ..IntegrationParameters::default() };
        Self {
            gravity: vector![0.0, to_m(gravity_y * GRAVITY_UNIT_PX_PER_S2)],
            params,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    /// Gravity in px/s².
    #[must_use]
    pub fn gravity_px(&self) -> Point {
        Point::new(to_px(self.gravity.x), to_px(self.gravity.y))
    }

    /// Insert an immovable box.
    pub fn add_fixed_box(&mut self, desc: &BoxDesc) -> BodyId {
        let body = RigidBodyBuilder::fixed()
            .translation(vector![to_m(desc.center.x), to_m(desc.center.y)])
            .build();
        self.insert(body, desc)
    }

    /// Insert a movable box.
    pub fn add_dynamic_box(&mut self, desc: &BoxDesc) -> BodyId {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![to_m(desc.center.x), to_m(desc.center.y)])
            .build();
        self.insert(body, desc)
    }

    fn insert(&mut self, body: RigidBody, desc: &BoxDesc) -> BodyId {
        let half_w = desc.width.max(0.0) / 2.0;
        let half_h = desc.height.max(0.0) / 2.0;
        let radius = desc.corner_radius.clamp(0.0, half_w.min(half_h));

        let builder = if radius > 0.0 {
            ColliderBuilder::round_cuboid(to_m(half_w - radius), to_m(half_h - radius), to_m(radius))
        } else {
            ColliderBuilder::cuboid(to_m(half_w), to_m(half_h))
        };
        let density_per_m2 = desc.material.density * PIXELS_PER_METER * PIXELS_PER_METER;
        let collider = builder
            .restitution(desc.material.restitution as Real)
            .friction(desc.material.friction as Real)
            .density(density_per_m2 as Real)
            .build();

        let handle = self.bodies.insert(body);
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        BodyId(handle)
    }

    /// Remove a body together with its colliders and joints.
    pub fn remove(&mut self, id: BodyId) -> bool {
        self.bodies
            .remove(
                id.0,
                &mut self.islands,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    /// Remove every body, collider and joint. Returns how many bodies were removed.
    pub fn clear(&mut self) -> usize {
        let handles = self.bodies.iter().map(|(h, _)| h).collect::<Vec<_>>();
        handles
            .into_iter()
            .filter(|h| self.remove(BodyId(*h)))
            .count()
    }

    #[must_use]
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    #[must_use]
    pub fn contains(&self, id: BodyId) -> bool {
        self.bodies.contains(id.0)
    }

    /// Current center and rotation of a body.
    #[must_use]
    pub fn pose(&self, id: BodyId) -> Option<Pose> {
        let body = self.bodies.get(id.0)?;
        let t = body.translation();
        Some(Pose::new(to_px(t.x), to_px(t.y), f64::from(body.rotation().angle())))
    }

    /// The last of `candidates` whose shape contains `point`.
    ///
    /// Later candidates are drawn on top, so they win ties.
    #[must_use]
    pub fn body_at(&self, point: Point, candidates: &[BodyId]) -> Option<BodyId> {
        let p = point_m(point);
        candidates.iter().rev().copied().find(|id| {
            self.bodies.get(id.0).is_some_and(|body| {
                body.colliders().iter().any(|h| {
                    self.colliders
                        .get(*h)
                        .is_some_and(|c| c.shape().contains_point(c.position(), &p))
                })
            })
        })
    }

    /// Express a container-space point in a body's local frame.
    #[must_use]
    pub fn local_point(&self, id: BodyId, point: Point) -> Option<Point> {
        let body = self.bodies.get(id.0)?;
        let local = body.position().inverse_transform_point(&point_m(point));
        Some(Point::new(to_px(local.x), to_px(local.y)))
    }

    /// Pull the grabbed anchor toward the pointer.
    ///
    /// The impulse is sized so the anchor would close `stiffness` of the gap
    /// during the next step, replacing whatever velocity it had at that point.
    pub fn apply_drag(&mut self, grab: &Grab, stiffness: f64) {
        let dt = self.params.dt;
        let Some(body) = self.bodies.get_mut(grab.body.0) else {
            return;
        };
        let anchor = body.position().transform_point(&point_m(grab.local_anchor));
        let target = point_m(grab.target);
        let desired = (target - anchor) * (stiffness as Real / dt);
        let current = body.velocity_at_point(&anchor);
        let impulse = (desired - current) * body.mass();
        body.apply_impulse_at_point(impulse, anchor, true);
    }

    /// Advance the simulation by one fixed step.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }
}

#[cfg(test)]
impl PhysicsWorld {
    /// Material of a body's first collider, density in mass per square pixel.
    pub(crate) fn material(&self, id: BodyId) -> Option<Material> {
        let body = self.bodies.get(id.0)?;
        let collider = self.colliders.get(*body.colliders().first()?)?;
        Some(Material {
            restitution: f64::from(collider.restitution()),
            friction: f64::from(collider.friction()),
            density: f64::from(collider.density()) / (PIXELS_PER_METER * PIXELS_PER_METER),
        })
    }

    /// Body mass, in the same units as `density × px²`.
    pub(crate) fn mass(&self, id: BodyId) -> Option<f64> {
        self.bodies.get(id.0).map(|body| f64::from(body.mass()))
    }
}
