//! Simulation statistics collection trait

/// Trait for collecting per-tick simulation statistics
///
/// Lets the engine record what happened without depending on any
/// particular sink (HUD, logs, benchmarks).
pub trait SimStats {
    /// Record that a cell was moved (swapped) during a tick
    fn record_cell_moved(&mut self);

    /// Record a spontaneous phase change (condensation, decay, ...)
    fn record_state_change(&mut self);

    /// Record a contact reaction (burning, dissolving, freezing, ...)
    fn record_reaction(&mut self);
}

/// A no-op implementation for when stats collection is not needed
#[derive(Default)]
pub struct NoopStats;

impl SimStats for NoopStats {
    fn record_cell_moved(&mut self) {}
    fn record_state_change(&mut self) {}
    fn record_reaction(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_stats_ignores_everything() {
        let mut stats = NoopStats::default();
        for _ in 0..100 {
            stats.record_cell_moved();
            stats.record_state_change();
            stats.record_reaction();
        }
    }

    /// A counting implementation for exercising the trait
    #[derive(Default)]
    struct CountingStats {
        moved: u32,
        state_changes: u32,
        reactions: u32,
    }

    impl SimStats for CountingStats {
        fn record_cell_moved(&mut self) {
            self.moved += 1;
        }

        fn record_state_change(&mut self) {
            self.state_changes += 1;
        }

        fn record_reaction(&mut self) {
            self.reactions += 1;
        }
    }

    #[test]
    fn test_counting_stats_implementation() {
        let mut stats = CountingStats::default();
        stats.record_cell_moved();
        stats.record_cell_moved();
        stats.record_state_change();
        stats.record_reaction();
        assert_eq!(stats.moved, 2);
        assert_eq!(stats.state_changes, 1);
        assert_eq!(stats.reactions, 1);
    }
}
