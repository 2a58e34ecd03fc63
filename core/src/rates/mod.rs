//! Message rate model
//!
//! Fixed lookup from work-item type to per-unit message rate, plus the
//! coverage-eligibility partition used by license discounting.
//!
//! Rates (per quantity unit):
//!
//! | type              | rate                  |
//! |-------------------|-----------------------|
//! | Classic           | 1                     |
//! | Generative        | 2                     |
//! | Tenant-graph      | 10                    |
//! | Agent flow        | 5 + 0.13 x actions    |
//! | AI tool (Basic)   | 0.1                   |
//! | AI tool (Standard)| 1.5                   |
//! | AI tool (Premium) | 10                    |
//! | Web-grounded      | 0                     |

use crate::models::work_item::{WorkItem, WorkItemType};
use crate::numeric::round3;

/// Per-unit message rate for a work-item type
///
/// `action_count` only affects the `Flow` rate and is ignored for every
/// other type.
///
/// # Example
/// ```
/// use message_pricing_core_rs::{rates, WorkItemType};
///
/// assert_eq!(rates::rate_for(WorkItemType::Classic, 0), 1.0);
/// assert_eq!(rates::rate_for(WorkItemType::Flow, 3), 5.39);
/// ```
pub fn rate_for(kind: WorkItemType, action_count: u64) -> f64 {
    match kind {
        WorkItemType::Classic => 1.0,
        WorkItemType::Generative => 2.0,
        WorkItemType::TenantGraph => 10.0,
        WorkItemType::Flow => 5.0 + 0.13 * action_count as f64,
        WorkItemType::ToolBasic => 0.1,
        WorkItemType::ToolStandard => 1.5,
        WorkItemType::ToolPremium => 10.0,
        WorkItemType::WebGrounded => 0.0,
    }
}

/// Whether messages of this type may be offset by license seats
///
/// Fixed partition: dialog-style types are eligible, flows and tool calls
/// are not.
pub fn is_coverage_eligible(kind: WorkItemType) -> bool {
    matches!(
        kind,
        WorkItemType::Classic
            | WorkItemType::Generative
            | WorkItemType::TenantGraph
            | WorkItemType::WebGrounded
    )
}

/// Per-run message cost of one work item
///
/// Rounded to 3 decimal places per item *before* any summation. This is a
/// deliberate per-item quantization; summing unrounded products yields
/// different totals.
pub fn node_messages(item: &WorkItem) -> f64 {
    round3(rate_for(item.kind(), item.action_count()) * item.quantity() as f64)
}
