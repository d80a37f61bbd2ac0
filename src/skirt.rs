//! The skirt simulation: owns all mesh state and runs the tick pipeline.

use alloc::vec::Vec as AllocVec;

use crate::config::SkirtConfig;
use crate::error::SkirtError;
use crate::float::Float;
use crate::grid::Grid;
use crate::integrator;
use crate::mesh::{RestState, FIRST_FREE_ROW};
use crate::normals;
use crate::observer::TickObserver;
use crate::oscillation::{Oscillation, RotationMode};
use crate::strip::Strip;
use crate::vec::Vec3;

/// A hula skirt: a ring mesh swung at the waist and hanging under gravity.
///
/// Rows 0 and 1 follow the oscillation exactly. Every other row is a
/// spring-mass body integrated once per [`tick`](Skirt::tick). Controls take
/// effect at the start of the next tick.
///
/// ```
/// use hula::{NoOpTickObserver, Skirt, SkirtConfig};
///
/// let mut skirt: Skirt<f32> = Skirt::new(SkirtConfig::new()).unwrap();
/// skirt.increase_amplitude();
/// skirt.increase_frequency();
/// for _ in 0..10 {
///     skirt.tick(&mut NoOpTickObserver);
/// }
/// assert!(skirt.last_tick_oscillated());
/// ```
#[derive(Clone, Debug)]
pub struct Skirt<F: Float> {
    config: SkirtConfig<F>,
    rest_length: F,
    height: F,
    initial_pos: AllocVec<Vec3<F>>,
    positions: Grid<Vec3<F>>,
    velocities: Grid<Vec3<F>>,
    normals: Grid<Vec3<F>>,
    oscillation: Oscillation<F>,
    ticks: u64,
    oscillating: bool,
}

impl<F: Float> Skirt<F> {
    /// Generate the mesh at rest. Fails if `config` does not validate.
    pub fn new(config: SkirtConfig<F>) -> Result<Self, SkirtError> {
        config.validate()?;
        let RestState { rest_length, height, initial_pos, positions, normals } =
            RestState::generate(&config);
        let velocities = Grid::filled(positions.cols(), positions.rows(), Vec3::zero());
        Ok(Skirt {
            config,
            rest_length,
            height,
            initial_pos,
            positions,
            velocities,
            normals,
            oscillation: Oscillation::new(),
            ticks: 0,
            oscillating: false,
        })
    }

    /// Advance one step: swing the waist, integrate the free rows, rebuild normals.
    pub fn tick<O: TickObserver>(&mut self, observer: &mut O) {
        self.oscillating = self.oscillation.drive(
            &mut self.positions,
            &mut self.velocities,
            &self.initial_pos,
            self.rest_length,
            &self.config,
        );
        observer.on_drive(self.oscillating);

        integrator::update_velocities(&self.positions, &mut self.velocities, self.rest_length, &self.config);
        integrator::update_positions(&mut self.positions, &self.velocities, &self.config);
        observer.on_integrate();

        normals::accumulate(&self.positions, &mut self.normals);
        observer.on_normals();

        self.ticks += 1;
        observer.on_tick_complete(self.ticks);
    }

    pub fn increase_amplitude(&mut self) {
        self.oscillation.increase_amplitude();
        self.log_controls();
    }

    pub fn decrease_amplitude(&mut self) {
        self.oscillation.decrease_amplitude();
        self.log_controls();
    }

    pub fn increase_frequency(&mut self) {
        self.oscillation.increase_frequency();
        self.log_controls();
    }

    pub fn decrease_frequency(&mut self) {
        self.oscillation.decrease_frequency();
        self.log_controls();
    }

    /// Swing about the x axis only.
    pub fn set_planar_mode(&mut self) {
        self.oscillation.set_mode(RotationMode::Planar);
        self.log_controls();
    }

    /// Swing about the x axis, then the z axis.
    pub fn set_compound_mode(&mut self) {
        self.oscillation.set_mode(RotationMode::Compound);
        self.log_controls();
    }

    /// Add `dv` to the velocity of every free vertex.
    pub fn apply_impulse(&mut self, dv: Vec3<F>) {
        for v in self.velocities.rows_from_mut(FIRST_FREE_ROW) {
            *v += dv;
        }
    }

    /// Sum of squared speeds over the free rows.
    pub fn kinetic_energy(&self) -> F {
        self.velocities
            .rows_from(FIRST_FREE_ROW)
            .iter()
            .fold(F::zero(), |acc, v| acc + v.length_sq())
    }

    /// Triangle strip for the band between `row` and `row + 1`.
    ///
    /// `None` for the hem and any row past it, which have no band below.
    pub fn strip(&self, row: usize) -> Option<Strip<'_, F>> {
        if row + 1 >= self.positions.rows() {
            return None;
        }
        Some(Strip::new(&self.positions, &self.normals, row))
    }

    pub fn positions(&self) -> &Grid<Vec3<F>> { &self.positions }
    pub fn velocities(&self) -> &Grid<Vec3<F>> { &self.velocities }
    /// Accumulated vertex normals. Not unit length.
    pub fn normals(&self) -> &Grid<Vec3<F>> { &self.normals }
    /// Rest pose of the waist ring.
    pub fn initial_positions(&self) -> &[Vec3<F>] { &self.initial_pos }
    pub fn rest_length(&self) -> F { self.rest_length }
    /// Nominal mesh height, for camera placement.
    pub fn height(&self) -> F { self.height }
    pub fn config(&self) -> &SkirtConfig<F> { &self.config }
    pub fn amplitude(&self) -> F { self.oscillation.amplitude() }
    pub fn frequency(&self) -> F { self.oscillation.frequency() }
    pub fn theta(&self) -> F { self.oscillation.theta() }
    pub fn mode(&self) -> RotationMode { self.oscillation.mode() }
    pub fn oscillation(&self) -> &Oscillation<F> { &self.oscillation }
    pub fn ticks(&self) -> u64 { self.ticks }
    /// Whether the waist moved on the most recent tick.
    pub fn last_tick_oscillated(&self) -> bool { self.oscillating }

    #[cfg(feature = "log")]
    fn log_controls(&self) {
        log::debug!(
            "controls: amplitude={} frequency={} mode={:?}",
            self.oscillation.amplitude(),
            self.oscillation.frequency(),
            self.oscillation.mode()
        );
    }

    #[cfg(not(feature = "log"))]
    fn log_controls(&self) {}
}
