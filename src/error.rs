//! Error types for skirt construction and versor math.

use core::fmt;

/// Errors that can occur while building a simulation or a rotation.
#[derive(Debug, Clone, PartialEq)]
pub enum SkirtError {
    /// Versor axis must be nonzero and finite.
    InvalidAxis,
    /// Position and velocity steps must be positive.
    InvalidStep,
    /// Damping must be positive and stay below 1 on every simulated row.
    InvalidDamping,
    /// Stiffness must be non-negative.
    InvalidStiffness,
    /// Girth must be positive.
    InvalidGirth,
    /// A configuration value is NaN or infinite.
    NonFiniteParameter { name: &'static str },
}

impl fmt::Display for SkirtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkirtError::InvalidAxis => write!(f, "versor axis must be nonzero and finite"),
            SkirtError::InvalidStep => write!(f, "integration steps must be positive"),
            SkirtError::InvalidDamping => {
                write!(f, "damping must be positive and below 1 on every simulated row")
            }
            SkirtError::InvalidStiffness => write!(f, "stiffness must be non-negative"),
            SkirtError::InvalidGirth => write!(f, "girth must be positive"),
            SkirtError::NonFiniteParameter { name } => {
                write!(f, "configuration value `{}` is not finite", name)
            }
        }
    }
}
