use thiserror::Error;

/// Rejected world configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("world bounds must be positive and finite (got {width}x{height})")]
    InvalidBounds { width: f64, height: f64 },
    #[error("damping must be within [0, 1] (got {0})")]
    InvalidDamping(f64),
    #[error("gravity must be finite")]
    NonFiniteGravity,
    #[error("{0} must be at least 1")]
    ZeroIterations(&'static str),
    #[error("grid cell size must be positive and give at most 2^20 cells (got {0})")]
    InvalidCellSize(f64),
}
