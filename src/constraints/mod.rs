use crate::common::{PhysicsError, Result};
use crate::objects::rigid_body::{BodyHandle, RigidBody};
use crate::solver::events::ImpulseEvent;
use serde::{Deserialize, Serialize};

pub mod contact_constraint;

pub use contact_constraint::ContactConstraint;

/// Identifies a constraint by its position in the world's constraint list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConstraintId(pub usize);

impl ConstraintId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A velocity-level constraint between two bodies, solved by the sequential
/// impulse solver.
pub trait Constraint {
    /// The two bodies this constraint couples, A first.
    fn bodies(&self) -> (BodyHandle, BodyHandle);

    /// Applies one corrective impulse to the bodies it references.
    /// `beta` is the Baumgarte fraction of positional error to feed back.
    fn solve_velocity(&mut self, id: ConstraintId, bodies: &mut [RigidBody], beta: f64) -> Result<ImpulseEvent>;

    /// Clears any impulse accumulated by previous solves.
    fn reset_accumulator(&mut self);
}

/// Checks that both handles of a constraint point into `bodies`.
pub(crate) fn check_body_pair(bodies_len: usize, id: ConstraintId, idx_a: BodyHandle, idx_b: BodyHandle) -> Result<()> {
    for handle in [idx_a, idx_b] {
        if handle.index() >= bodies_len {
            return Err(PhysicsError::DanglingBody {
                constraint: id.index(),
                body: handle.index(),
            });
        }
    }
    if idx_a == idx_b {
        return Err(PhysicsError::SelfContact(idx_a.index()));
    }
    Ok(())
}

/// Gets mutable references to two distinct bodies in a slice.
pub(crate) fn get_mutable_body_pair(
    bodies: &mut [RigidBody],
    id: ConstraintId,
    idx_a: BodyHandle,
    idx_b: BodyHandle,
) -> Result<(&mut RigidBody, &mut RigidBody)> {
    check_body_pair(bodies.len(), id, idx_a, idx_b)?;
    let (a, b) = (idx_a.index(), idx_b.index());

    // split_at_mut needs the lower index first
    if a < b {
        let (slice_a, slice_b) = bodies.split_at_mut(b);
        Ok((&mut slice_a[a], &mut slice_b[0]))
    } else {
        let (slice_b, slice_a) = bodies.split_at_mut(a);
        Ok((&mut slice_a[0], &mut slice_b[b]))
    }
}
