//! Error types for the contact engine.

use thiserror::Error;

/// Errors reported by body/contact construction, stepping and scene loading.
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// Mass was negative, NaN or infinite. Zero is the static sentinel.
    #[error("invalid mass {0}: expected a finite value >= 0")]
    InvalidMass(f64),

    /// A body was created at a non-finite position.
    #[error("invalid body position ({x}, {y})")]
    InvalidPosition {
        /// X component.
        x: f64,
        /// Y component.
        y: f64,
    },

    /// Contact normal was not unit length.
    #[error("contact normal ({x}, {y}) is not unit length")]
    NonUnitNormal {
        /// X component.
        x: f64,
        /// Y component.
        y: f64,
    },

    /// Penetration depth was negative or non-finite.
    #[error("invalid penetration depth {0}: expected a finite value >= 0")]
    InvalidPenetration(f64),

    /// Step was requested with a zero, negative or non-finite time step.
    #[error("invalid time step {0}: expected a finite value > 0")]
    InvalidTimeStep(f64),

    /// Baumgarte factor was negative or non-finite.
    #[error("invalid baumgarte factor {0}: expected a finite value >= 0")]
    InvalidBaumgarte(f64),

    /// World gravity had a NaN or infinite component.
    #[error("invalid gravity ({x}, {y})")]
    InvalidGravity {
        /// X component.
        x: f64,
        /// Y component.
        y: f64,
    },

    /// A contact referenced the same body on both sides.
    #[error("contact connects body {0} to itself")]
    SelfContact(usize),

    /// A contact references a body that is not in the body set.
    #[error("constraint {constraint} references missing body {body}")]
    DanglingBody {
        /// Index of the offending constraint.
        constraint: usize,
        /// Body index it points to.
        body: usize,
    },

    /// Lookup of a body handle that was never issued.
    #[error("body {0} not found")]
    BodyNotFound(usize),

    /// Contact id lookup failed.
    #[error("contact {0} not found")]
    ContactNotFound(usize),

    /// Scene description could not be parsed.
    #[error("scene parse error: {0}")]
    Scene(#[from] serde_yaml::Error),

    /// Scene description could not be read.
    #[error("scene read error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, PhysicsError>;
