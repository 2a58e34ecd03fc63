//! Session state
//!
//! The single value holding every user-adjustable input: pricing
//! parameters, license coverage, the ordered work-item list, and the
//! expected run count. Each user action produces a new state through the
//! documented operations; recomputation is a pure projection of the
//! current value and two recomputations with unchanged inputs yield
//! identical output.
//!
//! Nothing is persisted beyond the session except through the state codec
//! (see `crate::codec`), which is the sole durable representation.

use crate::engine::{price, price_with_coverage, CoverageQuote, Quote};
use crate::models::pricing::{LicenseCoverage, PricingParameters};
use crate::models::work_item::WorkItem;
use crate::volume::MonthlyVolume;
use serde::{Deserialize, Serialize};

/// Complete session value
///
/// # Example
/// ```
/// use message_pricing_core_rs::{SessionState, WorkItem, WorkItemType};
///
/// let mut session = SessionState::default();
/// session.add_item(WorkItem::new("Greeting", WorkItemType::Classic, 100, 0));
/// session.expected_runs = 5;
///
/// assert_eq!(session.volume().monthly_baseline, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Monthly message count entered directly in the calculator; kept in
    /// sync with the flow via [`SessionState::sync_messages_from_flow`]
    pub messages: u64,

    /// Plan parameters
    pub pricing: PricingParameters,

    /// License coverage discount
    pub coverage: LicenseCoverage,

    /// Free-text name of the agent/flow being modeled
    pub agent_name: String,

    /// Expected flow runs per month
    pub expected_runs: u64,

    /// Ordered work items; order is user-controlled
    work_items: Vec<WorkItem>,
}

impl SessionState {
    /// Get the ordered work-item list
    pub fn work_items(&self) -> &[WorkItem] {
        &self.work_items
    }

    // ========================================================================
    // Work-item list operations
    //
    // All index-based operations are guarded no-ops when the index is out
    // of range; the list is only ever mutated through these.
    // ========================================================================

    /// Append a work item
    pub fn add_item(&mut self, item: WorkItem) {
        self.work_items.push(item);
    }

    /// Replace the item at `index` wholesale
    ///
    /// Edits never mutate in place; the replacement carries its own fresh
    /// identifier.
    pub fn replace_item(&mut self, index: usize, item: WorkItem) {
        if let Some(slot) = self.work_items.get_mut(index) {
            *slot = item;
        }
    }

    /// Remove the item at `index`
    pub fn remove_item(&mut self, index: usize) {
        if index < self.work_items.len() {
            self.work_items.remove(index);
        }
    }

    /// Insert a fresh-id copy of the item at `index` directly after it
    pub fn duplicate_item(&mut self, index: usize) {
        if let Some(item) = self.work_items.get(index) {
            let copy = item.duplicate();
            self.work_items.insert(index + 1, copy);
        }
    }

    /// Swap the item at `index` with its predecessor
    pub fn move_item_up(&mut self, index: usize) {
        if index > 0 && index < self.work_items.len() {
            self.work_items.swap(index - 1, index);
        }
    }

    /// Swap the item at `index` with its successor
    pub fn move_item_down(&mut self, index: usize) {
        if index + 1 < self.work_items.len() {
            self.work_items.swap(index, index + 1);
        }
    }

    // ========================================================================
    // Pure projections
    // ========================================================================

    /// Aggregate the current monthly volume
    ///
    /// With work items present the flow drives the volume; otherwise the
    /// directly entered message count does.
    pub fn volume(&self) -> MonthlyVolume {
        if self.work_items.is_empty() {
            MonthlyVolume::from_messages(
                self.messages,
                self.pricing.buffer_percent,
                &self.coverage,
            )
        } else {
            MonthlyVolume::from_work_items(
                &self.work_items,
                self.expected_runs,
                self.pricing.buffer_percent,
                &self.coverage,
            )
        }
    }

    /// Price the current volume
    pub fn quote(&self) -> Quote {
        price(self.volume().effective_volume, &self.pricing)
    }

    /// Price the current volume with and without the license discount
    pub fn coverage_quote(&self) -> CoverageQuote {
        price_with_coverage(&self.volume(), &self.pricing)
    }

    /// Push the flow-derived monthly baseline into the calculator's
    /// message count (the "use in calculator" action)
    pub fn sync_messages_from_flow(&mut self) {
        self.messages = self.volume().monthly_baseline;
    }

    /// Encode this session into a shareable URL-safe token
    pub fn share_token(&self) -> String {
        crate::codec::encode(self)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            messages: 1000,
            pricing: PricingParameters::default(),
            coverage: LicenseCoverage::default(),
            agent_name: String::new(),
            expected_runs: 0,
            work_items: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::work_item::WorkItemType;

    fn item(name: &str) -> WorkItem {
        WorkItem::new(name, WorkItemType::Classic, 1, 0)
    }

    #[test]
    fn test_out_of_range_operations_are_noops() {
        let mut session = SessionState::default();
        session.add_item(item("a"));

        session.remove_item(5);
        session.duplicate_item(5);
        session.move_item_up(0);
        session.move_item_down(0);
        session.replace_item(5, item("b"));

        assert_eq!(session.work_items().len(), 1);
        assert_eq!(session.work_items()[0].name(), "a");
    }

    #[test]
    fn test_duplicate_inserts_after_source() {
        let mut session = SessionState::default();
        session.add_item(item("a"));
        session.add_item(item("b"));

        session.duplicate_item(0);

        let names: Vec<&str> = session.work_items().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["a", "a", "b"]);
        assert_ne!(session.work_items()[0].id(), session.work_items()[1].id());
    }

    #[test]
    fn test_move_operations_reorder() {
        let mut session = SessionState::default();
        session.add_item(item("a"));
        session.add_item(item("b"));
        session.add_item(item("c"));

        session.move_item_up(2);
        let names: Vec<&str> = session.work_items().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["a", "c", "b"]);

        session.move_item_down(0);
        let names: Vec<&str> = session.work_items().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sync_messages_from_flow() {
        let mut session = SessionState::default();
        session.add_item(WorkItem::new("", WorkItemType::Generative, 3, 0));
        session.expected_runs = 10;

        session.sync_messages_from_flow();
        assert_eq!(session.messages, 60);
    }
}
