//! KPI aggregation over per-district risk levels

use serde::{Deserialize, Serialize};

use crate::heat_index::round_half_up;
use crate::models::district::DistrictRiskSnapshot;
use crate::models::risk::RiskLevel;

/// Number of districts at each level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LevelCounts {
    pub low: usize,
    pub moderate: usize,
    pub high: usize,
    pub extreme: usize,
}

impl LevelCounts {
    fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Moderate => self.moderate += 1,
            RiskLevel::High => self.high += 1,
            RiskLevel::Extreme => self.extreme += 1,
        }
    }
}

/// Dashboard KPI figures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskSummary {
    pub total: usize,
    /// Districts at High or Extreme
    pub critical_count: usize,
    /// Mean ordinal rounded half-up; Low when there is no input
    pub overall_level: RiskLevel,
    /// Unrounded mean ordinal (0.0 for no input)
    pub mean_ordinal: f64,
    pub counts: LevelCounts,
}

impl RiskSummary {
    pub fn from_levels<I>(levels: I) -> Self
    where
        I: IntoIterator<Item = RiskLevel>,
    {
        let mut counts = LevelCounts::default();
        let mut total = 0usize;
        let mut ordinal_sum = 0u64;

        for level in levels {
            counts.record(level);
            total += 1;
            ordinal_sum += u64::from(level.ordinal());
        }

        let mean_ordinal = if total == 0 {
            0.0
        } else {
            ordinal_sum as f64 / total as f64
        };
        let rounded = round_half_up(mean_ordinal).clamp(0.0, 3.0) as u8;

        Self {
            total,
            critical_count: counts.high + counts.extreme,
            overall_level: RiskLevel::from_ordinal(rounded),
            mean_ordinal,
            counts,
        }
    }
}

/// Summarize a list of levels (one per district)
pub fn summarize(levels: &[RiskLevel]) -> RiskSummary {
    RiskSummary::from_levels(levels.iter().copied())
}

/// The `n` riskiest snapshots: highest level first, then highest heat index.
/// Ties keep their input order.
pub fn top_n_by_risk(snapshots: &[DistrictRiskSnapshot], n: usize) -> Vec<DistrictRiskSnapshot> {
    let mut ranked: Vec<&DistrictRiskSnapshot> = snapshots.iter().collect();
    ranked.sort_by(|a, b| {
        b.risk_level
            .cmp(&a.risk_level)
            .then_with(|| b.heat_index_c.total_cmp(&a.heat_index_c))
    });
    ranked.into_iter().take(n).cloned().collect()
}
