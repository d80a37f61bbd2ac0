//! Kinematic hula-hoop swing of the waist.
//!
//! Each tick the rest pose of the waist ring is rotated by one or two versors
//! whose angles follow `amplitude * cos(-theta)` and `amplitude * sin(-theta)`.
//! Rows 0 and 1 are written directly. The swing reaches the soft body through
//! a single velocity impulse on the first free row, aimed from the lowest
//! waist vertex to the highest.

use crate::config::SkirtConfig;
use crate::float::Float;
use crate::grid::Grid;
use crate::mesh::{waistband_point, FIRST_FREE_ROW, WAISTBAND_ROW, WAIST_ROW};
use crate::quaternion::Quaternion;
use crate::vec::Vec3;

pub const AMPLITUDE_MIN: f32 = 0.0;
pub const AMPLITUDE_MAX: f32 = 30.0;
pub const AMPLITUDE_STEP: f32 = 2.0;
pub const FREQUENCY_MIN: f32 = 0.0;
pub const FREQUENCY_MAX: f32 = 0.1;
pub const FREQUENCY_STEP: f32 = 0.02;

/// Which axes the waist swings about.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RotationMode {
    /// x axis only.
    Planar,
    /// x axis, then z axis.
    #[default]
    Compound,
}

/// Swing parameters and phase.
#[derive(Clone, Debug, PartialEq)]
pub struct Oscillation<F: Float> {
    amplitude: F,
    frequency: F,
    theta: F,
    mode: RotationMode,
}

impl<F: Float> Oscillation<F> {
    /// At rest: zero amplitude, zero frequency, compound mode.
    pub fn new() -> Self {
        Oscillation {
            amplitude: F::from_f32(AMPLITUDE_MIN),
            frequency: F::from_f32(FREQUENCY_MIN),
            theta: F::zero(),
            mode: RotationMode::Compound,
        }
    }

    /// Swing amplitude in degrees.
    pub fn amplitude(&self) -> F { self.amplitude }
    /// Phase advance per tick, in radians.
    pub fn frequency(&self) -> F { self.frequency }
    /// Accumulated phase. Never wrapped.
    pub fn theta(&self) -> F { self.theta }
    pub fn mode(&self) -> RotationMode { self.mode }

    pub fn increase_amplitude(&mut self) {
        self.set_amplitude(self.amplitude + F::from_f32(AMPLITUDE_STEP));
    }

    pub fn decrease_amplitude(&mut self) {
        self.set_amplitude(self.amplitude - F::from_f32(AMPLITUDE_STEP));
    }

    pub fn increase_frequency(&mut self) {
        self.set_frequency(self.frequency + F::from_f32(FREQUENCY_STEP));
    }

    pub fn decrease_frequency(&mut self) {
        self.set_frequency(self.frequency - F::from_f32(FREQUENCY_STEP));
    }

    fn set_amplitude(&mut self, amplitude: F) {
        self.amplitude = amplitude.clamp(F::from_f32(AMPLITUDE_MIN), F::from_f32(AMPLITUDE_MAX));
    }

    fn set_frequency(&mut self, frequency: F) {
        self.frequency = frequency.clamp(F::from_f32(FREQUENCY_MIN), F::from_f32(FREQUENCY_MAX));
    }

    pub fn set_mode(&mut self, mode: RotationMode) {
        self.mode = mode;
    }

    /// Versors for the current phase: about x, then about z.
    pub fn versors(&self) -> (Quaternion<F>, Quaternion<F>) {
        let phase = -self.theta;
        let about_x = Quaternion::from_unit_axis(self.amplitude * phase.cos(), Vec3::unit_x());
        let about_z = Quaternion::from_unit_axis(self.amplitude * phase.sin(), Vec3::unit_z());
        (about_x, about_z)
    }

    /// Pose of one waist vertex for the current phase.
    pub fn pose(&self, rest: Vec3<F>) -> Vec3<F> {
        let (about_x, about_z) = self.versors();
        let swung = about_x.rotate(rest);
        match self.mode {
            RotationMode::Planar => swung,
            RotationMode::Compound => about_z.rotate(swung),
        }
    }

    /// Advance the phase, place rows 0 and 1, and push the first free row.
    ///
    /// Returns `true` if any waist vertex moved this tick.
    pub fn drive(
        &mut self,
        positions: &mut Grid<Vec3<F>>,
        velocities: &mut Grid<Vec3<F>>,
        initial_pos: &[Vec3<F>],
        rest_length: F,
        config: &SkirtConfig<F>,
    ) -> bool {
        self.theta = self.theta + self.frequency;
        let (about_x, about_z) = self.versors();

        let mut moved = false;
        for (i, rest) in initial_pos.iter().enumerate() {
            let mut p = about_x.rotate(*rest);
            if self.mode == RotationMode::Compound {
                p = about_z.rotate(p);
            }
            if positions.get(i, WAIST_ROW) != p {
                moved = true;
            }
            positions.set(i, WAIST_ROW, p);
            positions.set(i, WAISTBAND_ROW, waistband_point(p, rest_length, config.waistband_depth));
        }

        if moved {
            if let Some(impulse) = swing_impulse(positions.row(WAIST_ROW), config.coupling_gain) {
                let dv = impulse.scale(config.velocity_step);
                for v in velocities.row_mut(FIRST_FREE_ROW) {
                    *v += dv;
                }
            }
        }
        moved
    }
}

impl<F: Float> Default for Oscillation<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Impulse along the line from the lowest waist vertex to the highest, with
/// length `gain`. Ties go to the lowest column. `None` when the two coincide.
pub fn swing_impulse<F: Float>(waist: &[Vec3<F>], gain: F) -> Option<Vec3<F>> {
    let first = waist.first()?;
    let (mut lowest, mut highest) = (*first, *first);
    for p in &waist[1..] {
        if p.y < lowest.y {
            lowest = *p;
        }
        if p.y > highest.y {
            highest = *p;
        }
    }
    let axis = highest - lowest;
    let length = axis.length();
    if length == F::zero() {
        return None;
    }
    Some(axis.scale(gain / length))
}
