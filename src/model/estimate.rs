use serde::{Deserialize, Serialize};

/// Cost split across the fixed delivery categories.
///
/// Invariant: the five values sum to the estimate's `total_cost` exactly.
/// The contingency share absorbs the rounding remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub development: u64,
    pub design: u64,
    pub testing: u64,
    pub project_management: u64,
    pub contingency: u64,
}

impl CostBreakdown {
    pub fn sum(&self) -> u64 {
        self.development + self.design + self.testing + self.project_management + self.contingency
    }

    /// Category name / amount pairs in display order.
    pub fn entries(&self) -> [(&'static str, u64); 5] {
        [
            ("Development", self.development),
            ("Design", self.design),
            ("Testing", self.testing),
            ("Project Management", self.project_management),
            ("Contingency", self.contingency),
        ]
    }
}

/// One committed estimate, produced by a single engine run over a frozen
/// [`ProjectInput`](super::ProjectInput). Never mutated; a new submission
/// replaces the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub total_cost: u64,
    pub breakdown: CostBreakdown,

    /// Risk in [0, 100].
    pub risk_score: u8,

    pub timeline_weeks: u32,

    /// Recommended roles in display order, no duplicates.
    pub team: Vec<String>,

    /// Display-only, derived as `100 - risk_score`. Nothing downstream
    /// computes from it.
    pub confidence: u8,

    /// Human-readable observations, stable order for identical input.
    #[serde(default)]
    pub insights: Vec<String>,
}
