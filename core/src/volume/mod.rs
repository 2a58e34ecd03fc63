//! Volume aggregator
//!
//! Turns a flow of work items (or a directly entered message count) into
//! the monthly message volume the pricing engine consumes. The step order
//! is load-bearing for rounding fidelity:
//!
//! 1. Sum already-rounded per-item figures into the per-run total
//! 2. Sum the coverage-eligible subset
//! 3. Derive the covered fraction (an empty flow counts as fully covered)
//! 4. Ceil the monthly baseline
//! 5. Apply the license discount to the raw monthly product, then ceil
//! 6. Apply the safety buffer, then ceil

use crate::models::pricing::LicenseCoverage;
use crate::models::work_item::WorkItem;
use crate::numeric::ceil_count;
use crate::rates::{is_coverage_eligible, node_messages};
use serde::{Deserialize, Serialize};

/// Aggregated monthly volume, with the intermediates needed for reporting
///
/// Produced by [`MonthlyVolume::from_work_items`] or
/// [`MonthlyVolume::from_messages`]; pure value, no side effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyVolume {
    /// Sum of per-item message figures for one run (3-decimal figures)
    pub per_run_total: f64,

    /// Same sum restricted to coverage-eligible items
    pub per_run_covered: f64,

    /// Fraction of per-run messages that license seats may offset, in [0, 1]
    pub covered_fraction: f64,

    /// Monthly messages before any discount
    pub monthly_baseline: u64,

    /// Monthly messages after the license discount (= baseline when the
    /// discount is inactive)
    pub monthly_billed: u64,

    /// Final volume fed into pricing: billed messages plus safety buffer
    pub effective_volume: u64,

    /// Baseline messages plus safety buffer, for the undiscounted
    /// comparison quote
    pub baseline_effective_volume: u64,
}

impl MonthlyVolume {
    /// Aggregate a flow of work items
    ///
    /// # Arguments
    /// * `items` - Ordered work items (order does not affect totals)
    /// * `expected_runs` - Expected flow runs per month
    /// * `buffer_percent` - Safety margin in percent (>= 0)
    /// * `coverage` - License coverage; ignored unless active
    ///
    /// # Example
    /// ```
    /// use message_pricing_core_rs::{LicenseCoverage, MonthlyVolume, WorkItem, WorkItemType};
    ///
    /// let items = vec![WorkItem::new("", WorkItemType::Classic, 100, 0)];
    /// let volume =
    ///     MonthlyVolume::from_work_items(&items, 5, 0.0, &LicenseCoverage::default());
    ///
    /// assert_eq!(volume.per_run_total, 100.0);
    /// assert_eq!(volume.monthly_baseline, 500);
    /// assert_eq!(volume.effective_volume, 500);
    /// ```
    pub fn from_work_items(
        items: &[WorkItem],
        expected_runs: u64,
        buffer_percent: f64,
        coverage: &LicenseCoverage,
    ) -> Self {
        let per_run_total: f64 = items.iter().map(node_messages).sum();
        let per_run_covered: f64 = items
            .iter()
            .filter(|item| is_coverage_eligible(item.kind()))
            .map(node_messages)
            .sum();

        // An empty flow counts as fully covered. Deliberate default, not a
        // data error.
        let covered_fraction = if per_run_total > 0.0 {
            (per_run_covered / per_run_total).min(1.0)
        } else {
            1.0
        };

        let raw_monthly = per_run_total * expected_runs as f64;
        let monthly_baseline = ceil_count(raw_monthly);

        let monthly_billed = if coverage.is_active() {
            ceil_count(raw_monthly * (1.0 - coverage.ratio() * covered_fraction))
        } else {
            monthly_baseline
        };

        Self::finish(
            per_run_total,
            per_run_covered,
            covered_fraction,
            monthly_baseline,
            monthly_billed,
            buffer_percent,
        )
    }

    /// Aggregate a directly entered monthly message count
    ///
    /// The calculator path with no flow behind it: the baseline is the
    /// entered count and the whole volume counts as coverage-eligible.
    pub fn from_messages(messages: u64, buffer_percent: f64, coverage: &LicenseCoverage) -> Self {
        let monthly_billed = if coverage.is_active() {
            ceil_count(messages as f64 * (1.0 - coverage.ratio()))
        } else {
            messages
        };

        Self::finish(0.0, 0.0, 1.0, messages, monthly_billed, buffer_percent)
    }

    fn finish(
        per_run_total: f64,
        per_run_covered: f64,
        covered_fraction: f64,
        monthly_baseline: u64,
        monthly_billed: u64,
        buffer_percent: f64,
    ) -> Self {
        let buffer = 1.0 + buffer_percent.max(0.0) / 100.0;
        Self {
            per_run_total,
            per_run_covered,
            covered_fraction,
            monthly_baseline,
            monthly_billed,
            effective_volume: ceil_count(monthly_billed as f64 * buffer),
            baseline_effective_volume: ceil_count(monthly_baseline as f64 * buffer),
        }
    }
}
