//! Tick observer trait for monitoring simulation progress.

/// Trait for observing simulation ticks.
///
/// Implement this trait to watch the tick pipeline (e.g., for debugging,
/// visualization, or profiling). All methods have default no-op
/// implementations.
pub trait TickObserver {
    /// Called after the waist rows are placed. `oscillating` is false when the
    /// waist did not move and no impulse reached the free rows.
    fn on_drive(&mut self, _oscillating: bool) {}

    /// Called after velocities and positions of the free rows are updated.
    fn on_integrate(&mut self) {}

    /// Called after vertex normals are recomputed.
    fn on_normals(&mut self) {}

    /// Called when a tick is fully complete. `tick` counts from 1.
    fn on_tick_complete(&mut self, _tick: u64) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpTickObserver;

impl TickObserver for NoOpTickObserver {}

/// Forwards every hook to the `log` facade.
#[cfg(feature = "log")]
pub struct LogTickObserver;

#[cfg(feature = "log")]
impl TickObserver for LogTickObserver {
    fn on_drive(&mut self, oscillating: bool) {
        log::trace!("waist placed, oscillating={}", oscillating);
    }

    fn on_integrate(&mut self) {
        log::trace!("free rows integrated");
    }

    fn on_normals(&mut self) {
        log::trace!("normals recomputed");
    }

    fn on_tick_complete(&mut self, tick: u64) {
        log::debug!("tick {} complete", tick);
    }
}
