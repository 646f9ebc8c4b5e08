//! Solver tunables.

use serde::{Deserialize, Serialize};

use super::error::{PhysicsError, Result};

/// Fraction of penetration fed back into each velocity solve.
pub const DEFAULT_BAUMGARTE: f64 = 0.2;
/// Gauss-Seidel sweeps per step.
pub const DEFAULT_ITERATIONS: usize = 8;

/// What happens to each contact's accumulated impulse between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccumulatorPolicy {
    /// Zero every accumulator before the sweeps of a step. The clamp then
    /// only bounds the impulse delivered within that step.
    #[default]
    ResetEachStep,
    /// Keep accumulators for the life of the contact. The clamp bounds the
    /// impulse total over all steps so far.
    Retain,
}

/// Configuration for the sequential impulse solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub iterations: usize,
    pub baumgarte: f64,
    pub accumulator: AccumulatorPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            baumgarte: DEFAULT_BAUMGARTE,
            accumulator: AccumulatorPolicy::default(),
        }
    }
}

impl SolverConfig {
    /// Rejects settings the solver cannot run with.
    pub fn validate(&self) -> Result<()> {
        validate_baumgarte(self.baumgarte)
    }
}

/// Rejects negative and non-finite Baumgarte factors.
pub fn validate_baumgarte(beta: f64) -> Result<()> {
    if !beta.is_finite() || beta < 0.0 {
        return Err(PhysicsError::InvalidBaumgarte(beta));
    }
    Ok(())
}
