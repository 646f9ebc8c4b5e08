pub mod config;
pub mod error;

pub use config::{AccumulatorPolicy, SolverConfig};
pub use error::{PhysicsError, Result};
