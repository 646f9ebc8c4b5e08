use crate::common::{PhysicsError, Result};
use crate::integration::integrator;
use crate::math::vec2::Vec2;

/// Handle into the world's body arena. Issued in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub usize);

impl BodyHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Point-mass body. Rotation is not modelled.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    // Primary state
    pub position: Vec2,
    pub velocity: Vec2,

    // Cleared after every step
    pub force: Vec2,

    pub mass: f64,     // 0.0 for static
    pub inv_mass: f64, // 1.0 / mass (0.0 for static)
}

impl RigidBody {
    /// Creates a body at `position` with the given mass.
    /// A mass of exactly 0.0 creates a static body; negative or non-finite
    /// masses are rejected.
    pub fn new(position: Vec2, mass: f64) -> Result<Self> {
        if !mass.is_finite() || mass < 0.0 {
            return Err(PhysicsError::InvalidMass(mass));
        }
        if !position.is_finite() {
            return Err(PhysicsError::InvalidPosition {
                x: position.x,
                y: position.y,
            });
        }

        let inv_mass = if mass > 0.0 { 1.0 / mass } else { 0.0 };

        Ok(Self {
            position,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            mass,
            inv_mass,
        })
    }

    /// Creates a static (infinite mass) body.
    pub fn new_static(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            mass: 0.0,
            inv_mass: 0.0,
        }
    }

    /// Sets the initial velocity.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    /// Applies a force at the center of mass.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Instantaneous velocity change scaled by inverse mass.
    /// Static bodies are unaffected.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse * self.inv_mass;
    }

    /// Advances the body by `dt` with semi-implicit Euler.
    pub fn integrate(&mut self, dt: f64) {
        integrator::integrate(self, dt);
    }

    /// Should be called once per step, after integration.
    pub fn reset_force(&mut self) {
        self.force = Vec2::ZERO;
    }
}
