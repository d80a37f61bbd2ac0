//! Physical constants for the skirt simulation.

use crate::error::SkirtError;
use crate::float::Float;
use crate::mesh::{FIRST_FREE_ROW, Y_RES};

/// Physical constants for a [`Skirt`](crate::skirt::Skirt).
///
/// Defaults reproduce the reference hula skirt. Mesh resolution is fixed at
/// compile time (see [`mesh`](crate::mesh)) and is not part of the config.
///
/// # Builder Pattern
/// ```
/// use hula::config::SkirtConfig;
///
/// let config: SkirtConfig<f32> = SkirtConfig::new()
///     .with_gravity(-0.2)
///     .with_damping(0.02)
///     .with_girth(0.8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SkirtConfig<F: Float> {
    /// Vertical velocity increment per unit velocity step. Default: `0.015 * -9.8`.
    pub gravity: F,
    /// Spring stiffness at the hem. Default: 1.5.
    pub stiffness: F,
    /// Stiffness added per row above the hem. Default: 2.0.
    pub stiffness_gradient: F,
    /// Velocity damping at the hem. Default: 0.01.
    pub damping: F,
    /// Damping added per row above the hem. Default: 0.005.
    pub damping_gradient: F,
    /// Step applied to velocity when advancing positions. Default: 0.15.
    pub position_step: F,
    /// Step applied to forces when advancing velocities. Default: 0.1.
    pub velocity_step: F,
    /// Scale of the x axis of every generated ring. Default: 0.6.
    pub girth: F,
    /// Gap between waist row 0 and row 1, in rest lengths. Default: 5.
    pub waistband_depth: F,
    /// Magnitude of the swing impulse handed to the first free row. Default: 0.1.
    pub coupling_gain: F,
}

impl<F: Float> SkirtConfig<F> {
    /// Create a config with the reference values.
    pub fn new() -> Self {
        SkirtConfig {
            gravity: F::from_f32(0.015 * -9.8),
            stiffness: F::from_f32(1.5),
            stiffness_gradient: F::two(),
            damping: F::from_f32(0.01),
            damping_gradient: F::from_f32(0.005),
            position_step: F::from_f32(0.15),
            velocity_step: F::from_f32(0.1),
            girth: F::from_f32(0.6),
            waistband_depth: F::from_f32(5.0),
            coupling_gain: F::from_f32(0.1),
        }
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_stiffness_gradient(mut self, gradient: F) -> Self {
        self.stiffness_gradient = gradient;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_damping_gradient(mut self, gradient: F) -> Self {
        self.damping_gradient = gradient;
        self
    }

    pub fn with_position_step(mut self, step: F) -> Self {
        self.position_step = step;
        self
    }

    pub fn with_velocity_step(mut self, step: F) -> Self {
        self.velocity_step = step;
        self
    }

    pub fn with_girth(mut self, girth: F) -> Self {
        self.girth = girth;
        self
    }

    pub fn with_waistband_depth(mut self, depth: F) -> Self {
        self.waistband_depth = depth;
        self
    }

    pub fn with_coupling_gain(mut self, gain: F) -> Self {
        self.coupling_gain = gain;
        self
    }

    /// Check that the constants describe a stable, dissipative system.
    pub fn validate(&self) -> Result<(), SkirtError> {
        let fields = [
            ("gravity", self.gravity),
            ("stiffness", self.stiffness),
            ("stiffness_gradient", self.stiffness_gradient),
            ("damping", self.damping),
            ("damping_gradient", self.damping_gradient),
            ("position_step", self.position_step),
            ("velocity_step", self.velocity_step),
            ("girth", self.girth),
            ("waistband_depth", self.waistband_depth),
            ("coupling_gain", self.coupling_gain),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SkirtError::NonFiniteParameter { name });
            }
        }

        if self.position_step <= F::zero() || self.velocity_step <= F::zero() {
            return Err(SkirtError::InvalidStep);
        }
        if self.girth <= F::zero() {
            return Err(SkirtError::InvalidGirth);
        }
        if self.stiffness < F::zero() || self.stiffness_gradient < F::zero() {
            return Err(SkirtError::InvalidStiffness);
        }
        // kd peaks at the first free row; 1 - kd must stay a contraction.
        let waist_damping = self.damping + self.damping_gradient * F::from_usize(Y_RES - FIRST_FREE_ROW);
        if self.damping <= F::zero() || self.damping_gradient < F::zero() || waist_damping >= F::one() {
            return Err(SkirtError::InvalidDamping);
        }
        Ok(())
    }
}

impl<F: Float> Default for SkirtConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SkirtConfig::<f32>::new().validate(), Ok(()));
        assert_eq!(SkirtConfig::<f64>::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_steps() {
        let config = SkirtConfig::<f32>::new().with_position_step(0.0);
        assert_eq!(config.validate(), Err(SkirtError::InvalidStep));
    }

    #[test]
    fn rejects_amplifying_damping() {
        let config = SkirtConfig::<f32>::new().with_damping_gradient(0.07);
        assert_eq!(config.validate(), Err(SkirtError::InvalidDamping));
        let config = SkirtConfig::<f32>::new().with_damping(0.0);
        assert_eq!(config.validate(), Err(SkirtError::InvalidDamping));
    }

    #[test]
    fn rejects_nan() {
        let config = SkirtConfig::<f64>::new().with_gravity(f64::NAN);
        assert_eq!(
            config.validate(),
            Err(SkirtError::NonFiniteParameter { name: "gravity" })
        );
    }
}
