use thiserror::Error;

/// Errors raised when building or driving a [`World`](crate::World).
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    /// A configuration value is out of range or not finite.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    /// `dt` must be finite and non-negative.
    #[error("invalid timestep: {0}")]
    InvalidTimestep(f64),
    /// Spawn point with a NaN or infinite coordinate.
    #[error("invalid position: ({x}, {y})")]
    InvalidPosition { x: f64, y: f64 },
}
