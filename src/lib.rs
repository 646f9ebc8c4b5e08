//! 2D rigid-body contact solver.
//!
//! Bodies are point masses with semi-implicit Euler integration. Contacts are
//! unilateral and given explicitly (there is no collision detection). Each step
//! resolves them with sequential impulses (projected Gauss-Seidel) plus a
//! Baumgarte bias on the penetration depth.
//!
//! [`PhysicsWorld`] owns the bodies, contacts, gravity and [`SolverConfig`]:
//!
//! ```
//! use contact_engine::{PhysicsWorld, RigidBody, Vec2};
//!
//! # fn main() -> contact_engine::Result<()> {
//! let mut world = PhysicsWorld::new();
//! world.gravity = Vec2::new(0.0, -9.81);
//! let ground = world.add_body(RigidBody::new_static(Vec2::ZERO));
//! let ball = world.add_body(RigidBody::new(Vec2::new(0.0, 0.5), 1.0)?);
//! let contact = world.add_contact(ground, ball, Vec2::UP, 0.05)?;
//!
//! let report = world.step(1.0 / 60.0)?;
//! assert!(report.total_impulse(contact) > 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! [`Solver`] also runs on plain slices. [`NullSink`] drops the per-solve
//! [`ImpulseEvent`]s; a `Vec<ImpulseEvent>` collects them.
//!
//! ```
//! use contact_engine::{BodyHandle, ContactConstraint, NullSink, RigidBody, Solver, Vec2};
//!
//! # fn main() -> contact_engine::Result<()> {
//! let mut bodies = vec![
//!     RigidBody::new_static(Vec2::ZERO),
//!     RigidBody::new(Vec2::new(0.0, 1.0), 1.0)?.with_velocity(Vec2::new(0.0, -1.0)),
//! ];
//! let mut contacts = vec![ContactConstraint::new(BodyHandle(0), BodyHandle(1), Vec2::UP, 0.1)?];
//!
//! Solver::default().step(&mut bodies, &mut contacts, 1.0 / 60.0, 8, &mut NullSink)?;
//! assert!(contacts[0].lambda_accum() > 0.0);
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod constraints;
pub mod integration;
pub mod math;
pub mod objects;
pub mod solver;
pub mod world;

// Re-export key types for easier use
pub use common::{AccumulatorPolicy, PhysicsError, Result, SolverConfig};
pub use constraints::{Constraint, ConstraintId, ContactConstraint};
pub use math::vec2::Vec2;
pub use objects::rigid_body::{BodyHandle, RigidBody};
pub use solver::{EventSink, ImpulseEvent, NullSink, Solver, StepReport};
pub use world::{PhysicsWorld, SceneConfig};
