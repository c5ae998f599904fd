//! Per-tick metrics for the simulation engine.
//!
//! [`StepMetrics`] captures timing and event counts for a single tick,
//! enabling telemetry and rollout profiling without a logging dependency
//! in the hot path.

/// Timing and event counts collected during a single tick.
///
/// The resolver populates these after each `step()` call; consumers read
/// them from the returned [`StepOutcome`](crate::StepOutcome).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Drones that crashed this tick, for any reason.
    pub crashes: u32,
    /// Subset of crashes caused by drone-drone collision (Phase C).
    pub collisions: u32,
    /// Subset of crashes caused by a drained battery.
    pub battery_failures: u32,
    /// Packets picked up from the ground (rewarded pickups only).
    pub pickups: u32,
    /// Packages delivered onto dropzones.
    pub deliveries: u32,
    /// Drones that spent this tick on a charging station.
    pub charging: u32,
    /// Ground objects respawned at the end of the tick.
    pub ground_respawns: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.crashes, 0);
        assert_eq!(m.collisions, 0);
        assert_eq!(m.battery_failures, 0);
        assert_eq!(m.pickups, 0);
        assert_eq!(m.deliveries, 0);
        assert_eq!(m.charging, 0);
        assert_eq!(m.ground_respawns, 0);
    }
}
