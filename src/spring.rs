//! Hooke springs between mesh vertices.
//!
//! Every spring in the mesh shares one rest length, whatever its true
//! geometric rest distance. Force is split across axes with a squared-cosine
//! weight whose sign follows the coordinate difference, not the sign of the
//! Hooke scalar.

use crate::config::SkirtConfig;
use crate::float::Float;
use crate::mesh::Y_RES;
use crate::vec::Vec3;

/// Stiffness and damping of one mesh row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowCoefficients<F: Float> {
    /// Spring constant `ks`.
    pub stiffness: F,
    /// Fraction of velocity removed per tick, `kd`.
    pub damping: F,
}

impl<F: Float> RowCoefficients<F> {
    /// Coefficients for `row`: both grow linearly toward the waist.
    pub fn for_row(row: usize, config: &SkirtConfig<F>) -> Self {
        let rows_above_hem = F::from_usize(Y_RES - row);
        RowCoefficients {
            stiffness: config.stiffness + config.stiffness_gradient * rows_above_hem,
            damping: config.damping + config.damping_gradient * rows_above_hem,
        }
    }
}

/// Force on the vertex at `p` from a spring to `neighbor`.
///
/// The Hooke scalar `stiffness * (|p - neighbor| - rest_length)` is given to
/// each axis in proportion to `(Δa / |Δ|)²`, signed toward the neighbor.
pub fn force<F: Float>(p: Vec3<F>, neighbor: Vec3<F>, stiffness: F, rest_length: F) -> Vec3<F> {
    let delta = p - neighbor;
    let length = delta.length();
    let hooke = stiffness * (length - rest_length);
    Vec3::new(
        axis_share(delta.x, length) * hooke,
        axis_share(delta.y, length) * hooke,
        axis_share(delta.z, length) * hooke,
    )
}

/// Signed squared-cosine share of one axis. Positive when the neighbor lies
/// further along the axis than the vertex.
fn axis_share<F: Float>(delta: F, length: F) -> F {
    let cos = delta / length;
    let weight = cos * cos;
    if delta < F::zero() { weight } else { -weight }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficients_grow_toward_waist() {
        let config = SkirtConfig::<f32>::new();
        let hem = RowCoefficients::for_row(Y_RES - 1, &config);
        let top = RowCoefficients::for_row(2, &config);
        assert!((hem.stiffness - 3.5).abs() < 1e-6);
        assert!((hem.damping - 0.015).abs() < 1e-6);
        assert!((top.stiffness - 33.5).abs() < 1e-5);
        assert!((top.damping - 0.09).abs() < 1e-6);
    }

    #[test]
    fn stretched_spring_pulls_toward_neighbor() {
        let f = force(Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0), 1.0, 1.0);
        assert!((f.x - 1.0).abs() < 1e-6);
        assert_eq!((f.y, f.z), (0.0, 0.0));
    }

    #[test]
    fn compressed_spring_pushes_away() {
        let f = force(Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(0.0, -0.5, 0.0), 2.0, 1.0);
        assert!((f.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn diagonal_weights_are_squared_cosines() {
        // 3-4-5 triangle stretched by 1: shares are 9/25 and 16/25.
        let f = force(Vec3::new(0.0f64, 0.0, 0.0), Vec3::new(3.0, -4.0, 0.0), 1.0, 4.0);
        assert!((f.x - 9.0 / 25.0).abs() < 1e-12);
        assert!((f.y + 16.0 / 25.0).abs() < 1e-12);
        // Not a vector projection: the result is shorter than the Hooke scalar.
        assert!(f.length() < 1.0);
    }
}
