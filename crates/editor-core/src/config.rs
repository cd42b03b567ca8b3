/// Tunables for a [`crate::piece_table::table::PieceTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceTableConfig {
    /// Number of snapshots kept in the history log, the live state included.
    pub max_history: usize,
    /// Capacity reserved for the add buffer up front and kept after a reset.
    pub baseline_capacity: usize,
}

impl Default for PieceTableConfig {
    fn default() -> Self {
        Self {
            max_history: crate::piece_table::MAX_HISTORY,
            baseline_capacity: crate::piece_table::BASELINE_CAPACITY,
        }
    }
}

impl PieceTableConfig {
    /// Sets the history cap. A log always holds the live state, so the cap is
    /// clamped to at least one entry.
    #[must_use]
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history.max(1);
        self
    }

    #[must_use]
    pub fn with_baseline_capacity(mut self, baseline_capacity: usize) -> Self {
        self.baseline_capacity = baseline_capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::PieceTableConfig;

    #[test]
    fn defaults_match_module_constants() {
        let config = PieceTableConfig::default();

        assert_eq!(config.max_history, crate::piece_table::MAX_HISTORY);
        assert_eq!(
            config.baseline_capacity,
            crate::piece_table::BASELINE_CAPACITY
        );
    }

    #[test]
    fn history_cap_never_drops_below_one() {
        assert_eq!(PieceTableConfig::default().with_max_history(0).max_history, 1);
        assert_eq!(PieceTableConfig::default().with_max_history(7).max_history, 7);
    }
}
