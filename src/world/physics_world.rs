use log::{debug, warn};

use crate::{
    common::{PhysicsError, Result, SolverConfig},
    constraints::{ConstraintId, ContactConstraint},
    math::vec2::Vec2,
    objects::rigid_body::{BodyHandle, RigidBody},
    solver::{EventSink, Solver, StepReport},
};

use super::scene::SceneConfig;

/// Owns the body arena and the contact list, and advances them together.
pub struct PhysicsWorld {
    pub bodies: Vec<RigidBody>,
    // Solved in insertion order every sweep
    pub contacts: Vec<ContactConstraint>,
    pub gravity: Vec2,
    pub config: SolverConfig,
}

impl PhysicsWorld {
    /// Creates a new, empty physics world with default settings.
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            contacts: Vec::new(),
            gravity: Vec2::ZERO,
            config: SolverConfig::default(),
        }
    }

    /// Creates an empty world with the given solver settings.
    pub fn with_config(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, ..Self::new() })
    }

    /// The scene the engine was first written against: two unit masses with
    /// a single contact along +y and 0.1 of overlap.
    pub fn two_body_contact() -> Result<Self> {
        let mut world = Self::new();
        let a = world.add_body(RigidBody::new(Vec2::new(0.0, 0.0), 1.0)?);
        let b = world.add_body(RigidBody::new(Vec2::new(0.0, -1.0), 1.0)?);
        world.add_contact(a, b, Vec2::UP, 0.1)?;
        Ok(world)
    }

    /// Builds a world from a parsed scene description.
    pub fn from_scene(scene: &SceneConfig) -> Result<Self> {
        let mut world = Self::with_config(scene.solver)?;
        world.gravity = scene.gravity.into();
        validate_gravity(world.gravity)?;

        for body in &scene.bodies {
            let rb = RigidBody::new(body.position.into(), body.mass)?.with_velocity(body.velocity.into());
            world.add_body(rb);
        }
        for contact in &scene.contacts {
            world.add_contact(
                BodyHandle(contact.body_a),
                BodyHandle(contact.body_b),
                contact.normal.into(),
                contact.penetration,
            )?;
        }

        debug!(
            "loaded scene: {} bodies, {} contacts",
            world.bodies.len(),
            world.contacts.len()
        );
        Ok(world)
    }

    /// Adds a rigid body to the world and returns its handle.
    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        let handle = BodyHandle(self.bodies.len());
        self.bodies.push(body);
        handle
    }

    /// Adds a contact between two existing bodies.
    pub fn add_contact(
        &mut self,
        body_a: BodyHandle,
        body_b: BodyHandle,
        normal: Vec2,
        penetration: f64,
    ) -> Result<ConstraintId> {
        let id = ConstraintId(self.contacts.len());
        for handle in [body_a, body_b] {
            if handle.index() >= self.bodies.len() {
                return Err(PhysicsError::DanglingBody {
                    constraint: id.index(),
                    body: handle.index(),
                });
            }
        }
        let contact = ContactConstraint::new(body_a, body_b, normal, penetration)?;

        if self.bodies[body_a.index()].is_static() && self.bodies[body_b.index()].is_static() {
            warn!(
                "contact {} joins two static bodies ({}, {}); it will never apply an impulse",
                id.index(),
                body_a.index(),
                body_b.index()
            );
        }

        self.contacts.push(contact);
        Ok(id)
    }

    pub fn body(&self, handle: BodyHandle) -> Result<&RigidBody> {
        self.bodies
            .get(handle.index())
            .ok_or(PhysicsError::BodyNotFound(handle.index()))
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        self.bodies
            .get_mut(handle.index())
            .ok_or(PhysicsError::BodyNotFound(handle.index()))
    }

    pub fn contact(&self, id: ConstraintId) -> Result<&ContactConstraint> {
        self.contacts
            .get(id.index())
            .ok_or(PhysicsError::ContactNotFound(id.index()))
    }

    /// Adds a force to a body for the next step only.
    pub fn apply_force(&mut self, handle: BodyHandle, force: Vec2) -> Result<()> {
        self.body_mut(handle)?.apply_force(force);
        Ok(())
    }

    /// Advances the simulation by `dt` with the configured iteration count.
    pub fn step(&mut self, dt: f64) -> Result<StepReport> {
        self.step_with_iterations(dt, self.config.iterations)
    }

    /// Advances the simulation by `dt` and collects every impulse event.
    pub fn step_with_iterations(&mut self, dt: f64, iterations: usize) -> Result<StepReport> {
        let mut report = StepReport {
            events: Vec::with_capacity(iterations * self.contacts.len()),
        };
        self.step_with_sink(dt, iterations, &mut report.events)?;
        Ok(report)
    }

    /// Advances the simulation by `dt`, streaming impulse events into `sink`.
    pub fn step_with_sink(&mut self, dt: f64, iterations: usize, sink: &mut dyn EventSink) -> Result<()> {
        let solver = Solver::new(&self.config);
        // Nothing may be touched before this, gravity included
        solver.validate(&self.bodies, &self.contacts, dt)?;
        validate_gravity(self.gravity)?;

        // Gravity acts on dynamic bodies only
        if self.gravity != Vec2::ZERO {
            for body in self.bodies.iter_mut().filter(|b| !b.is_static()) {
                let gravity_force = self.gravity * body.mass;
                body.apply_force(gravity_force);
            }
        }

        solver.step(&mut self.bodies, &mut self.contacts, dt, iterations, sink)
    }
}

fn validate_gravity(gravity: Vec2) -> Result<()> {
    if !gravity.is_finite() {
        return Err(PhysicsError::InvalidGravity {
            x: gravity.x,
            y: gravity.y,
        });
    }
    Ok(())
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
