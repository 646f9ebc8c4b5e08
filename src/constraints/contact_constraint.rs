use super::{Constraint, ConstraintId};
use crate::common::{PhysicsError, Result};
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::{BodyHandle, RigidBody};
use crate::solver::events::ImpulseEvent;

/// Maximum allowed deviation of the contact normal from unit length.
pub const NORMAL_TOLERANCE: f64 = 1e-6;

/// Unilateral non-penetration contact between two bodies.
///
/// The normal points from body A toward body B. Penetration is captured when
/// the contact is created and stays fixed. The accumulated impulse can only
/// push the bodies apart, never pull them together.
///
/// Fields are fixed once [`ContactConstraint::new`] has validated them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactConstraint {
    body_a: BodyHandle,
    body_b: BodyHandle,
    normal: Vec2,
    penetration: f64,
    lambda_accum: f64,
}

impl ContactConstraint {
    pub fn new(body_a: BodyHandle, body_b: BodyHandle, normal: Vec2, penetration: f64) -> Result<Self> {
        if body_a == body_b {
            return Err(PhysicsError::SelfContact(body_a.index()));
        }
        if !normal.is_finite() || (normal.magnitude() - 1.0).abs() > NORMAL_TOLERANCE {
            return Err(PhysicsError::NonUnitNormal {
                x: normal.x,
                y: normal.y,
            });
        }
        if !penetration.is_finite() || penetration < 0.0 {
            return Err(PhysicsError::InvalidPenetration(penetration));
        }
        Ok(Self {
            body_a,
            body_b,
            normal,
            penetration,
            lambda_accum: 0.0,
        })
    }

    /// Handle of the first rigid body.
    pub fn body_a(&self) -> BodyHandle {
        self.body_a
    }

    /// Handle of the second rigid body.
    pub fn body_b(&self) -> BodyHandle {
        self.body_b
    }

    /// Unit normal from A toward B.
    pub fn normal(&self) -> Vec2 {
        self.normal
    }

    /// Overlap depth, positive when overlapping.
    pub fn penetration(&self) -> f64 {
        self.penetration
    }

    /// Total normal impulse applied since the last accumulator reset.
    pub fn lambda_accum(&self) -> f64 {
        self.lambda_accum
    }
}

impl Constraint for ContactConstraint {
    fn bodies(&self) -> (BodyHandle, BodyHandle) {
        (self.body_a, self.body_b)
    }

    /// One projected Gauss-Seidel iteration with a Baumgarte bias.
    fn solve_velocity(&mut self, id: ConstraintId, bodies: &mut [RigidBody], beta: f64) -> Result<ImpulseEvent> {
        let (body_a, body_b) = super::get_mutable_body_pair(bodies, id, self.body_a, self.body_b)?;

        // 1. Relative velocity along the normal
        let vel_along_normal = (body_b.velocity - body_a.velocity).dot(self.normal);

        // 2. Positional error bias
        let baumgarte = beta * self.penetration;

        // 3. Both static: nothing can move
        let eff_mass = body_a.inv_mass + body_b.inv_mass;
        if eff_mass == 0.0 {
            return Ok(ImpulseEvent::inactive(id));
        }

        // 4. Raw impulse magnitude
        let mut lambda = -(vel_along_normal + baumgarte) / eff_mass;

        // 5. Clamp the running total, apply only the delta
        let lambda_old = self.lambda_accum;
        self.lambda_accum = (self.lambda_accum + lambda).max(0.0);
        lambda = self.lambda_accum - lambda_old;

        // 6. Equal and opposite
        let impulse = self.normal * lambda;
        body_a.apply_impulse(-impulse);
        body_b.apply_impulse(impulse);

        Ok(ImpulseEvent {
            constraint: id,
            lambda,
            impulse,
        })
    }

    fn reset_accumulator(&mut self) {
        self.lambda_accum = 0.0;
    }
}
