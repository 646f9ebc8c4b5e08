//! Sequential impulse (projected Gauss-Seidel) stepping.

use log::{debug, trace};

use crate::common::config::validate_baumgarte;
use crate::common::{AccumulatorPolicy, PhysicsError, Result, SolverConfig};
use crate::constraints::{check_body_pair, Constraint, ConstraintId};
use crate::objects::rigid_body::RigidBody;

pub mod events;

pub use events::{EventSink, ImpulseEvent, NullSink, StepReport};

/// Rejects zero, negative and non-finite time steps.
pub fn validate_time_step(dt: f64) -> Result<()> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(PhysicsError::InvalidTimeStep(dt));
    }
    Ok(())
}

/// Runs one simulation step over a body set and a constraint list.
///
/// Holds no state between steps beyond its configuration; everything that
/// evolves lives in the bodies and constraints passed to [`Solver::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solver {
    pub baumgarte: f64,
    pub accumulator: AccumulatorPolicy,
}

impl Solver {
    pub fn new(config: &SolverConfig) -> Self {
        Self {
            baumgarte: config.baumgarte,
            accumulator: config.accumulator,
        }
    }

    /// Checks everything [`Solver::step`] would reject, without mutating.
    pub fn validate<C: Constraint>(&self, bodies: &[RigidBody], constraints: &[C], dt: f64) -> Result<()> {
        validate_time_step(dt)?;
        validate_baumgarte(self.baumgarte)?;
        for (i, constraint) in constraints.iter().enumerate() {
            let (a, b) = constraint.bodies();
            check_body_pair(bodies.len(), ConstraintId(i), a, b)?;
        }
        Ok(())
    }

    /// Advances `bodies` by `dt` and resolves `constraints` with `iterations`
    /// sweeps in slice order.
    ///
    /// Input is validated before anything is mutated. Emits exactly
    /// `iterations * constraints.len()` events into `sink`.
    pub fn step<C: Constraint>(
        &self,
        bodies: &mut [RigidBody],
        constraints: &mut [C],
        dt: f64,
        iterations: usize,
        sink: &mut dyn EventSink,
    ) -> Result<()> {
        self.validate(bodies, constraints, dt)?;

        debug!(
            "step dt={} iterations={} bodies={} constraints={}",
            dt,
            iterations,
            bodies.len(),
            constraints.len()
        );

        if self.accumulator == AccumulatorPolicy::ResetEachStep {
            for constraint in constraints.iter_mut() {
                constraint.reset_accumulator();
            }
        }

        // 1. Integrate motion
        for body in bodies.iter_mut() {
            body.integrate(dt);
        }

        // 2. Gauss-Seidel sweeps, order is load-bearing
        for iteration in 0..iterations {
            for (i, constraint) in constraints.iter_mut().enumerate() {
                let event = constraint.solve_velocity(ConstraintId(i), bodies, self.baumgarte)?;
                trace!(
                    "[PGS] iter={} constraint={} lambda={:.4} impulse=({:.4}, {:.4})",
                    iteration,
                    i,
                    event.lambda,
                    event.impulse.x,
                    event.impulse.y
                );
                sink.record(event);
            }
        }

        // 3. Forces do not persist across steps
        for body in bodies.iter_mut() {
            body.reset_force();
        }

        Ok(())
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(&SolverConfig::default())
    }
}
