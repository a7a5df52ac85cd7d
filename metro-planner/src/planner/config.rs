//! Planner configuration.

/// How the shortest-path engine picks the next station to settle.
///
/// Both strategies settle stations in the same order (lowest time first,
/// lowest id on ties), so they always produce identical results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    /// Scan every unsettled station each round. O(V²), fine for small networks.
    #[default]
    LinearScan,
    /// Keep candidates in a binary heap. O((V+E) log V).
    BinaryHeap,
}

/// Configuration parameters for route planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Next-station selection strategy for the shortest-path engine.
    pub selection: Selection,

    /// Travel card discount, in percent off the tier fare.
    /// The discounted fare is rounded up to a whole unit.
    pub card_discount_percent: u32,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(selection: Selection, card_discount_percent: u32) -> Self {
        Self {
            selection,
            card_discount_percent: card_discount_percent.min(100),
        }
    }

    /// Returns the fraction of the fare a card holder pays, as a percentage.
    pub fn card_payable_percent(&self) -> u32 {
        100 - self.card_discount_percent.min(100)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            selection: Selection::LinearScan,
            card_discount_percent: 10,
        }
    }
}
