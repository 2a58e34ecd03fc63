//! Work item model
//!
//! A work item ("node" in the flow builder) is one recurring unit of
//! automated work. Each item has:
//! - A type from a closed enumeration, which determines its per-unit
//!   message rate (see `crate::rates`)
//! - A quantity (>= 1)
//! - An action count, meaningful only for the `Flow` type
//!
//! Items are fully replaced on edit (no partial mutation) and duplicated
//! with a fresh identifier. Identifiers are session-local and excluded
//! from value equality.

use serde::{Deserialize, Serialize};

/// Work item type
///
/// Closed enumeration. Every variant has a fixed per-unit message rate,
/// a human-readable label, and a single-character wire code used by the
/// state codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkItemType {
    /// Classic scripted dialog step
    Classic,
    /// Generative answer step
    Generative,
    /// Tenant-graph grounded step
    TenantGraph,
    /// Agent flow; rate scales with the number of actions
    Flow,
    /// AI tool call, basic tier
    ToolBasic,
    /// AI tool call, standard tier
    ToolStandard,
    /// AI tool call, premium tier
    ToolPremium,
    /// Web-grounded answer step (not billed)
    WebGrounded,
}

impl WorkItemType {
    /// All variants, in display order.
    pub const ALL: [WorkItemType; 8] = [
        WorkItemType::Classic,
        WorkItemType::Generative,
        WorkItemType::TenantGraph,
        WorkItemType::Flow,
        WorkItemType::ToolBasic,
        WorkItemType::ToolStandard,
        WorkItemType::ToolPremium,
        WorkItemType::WebGrounded,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            WorkItemType::Classic => "Classic",
            WorkItemType::Generative => "Generative",
            WorkItemType::TenantGraph => "Tenant-graph",
            WorkItemType::Flow => "Agent flow",
            WorkItemType::ToolBasic => "AI tool (Basic)",
            WorkItemType::ToolStandard => "AI tool (Standard)",
            WorkItemType::ToolPremium => "AI tool (Premium)",
            WorkItemType::WebGrounded => "Web-grounded",
        }
    }

    /// Single-character code used in the shareable-link payload
    pub fn code(&self) -> char {
        match self {
            WorkItemType::Classic => 'c',
            WorkItemType::Generative => 'g',
            WorkItemType::TenantGraph => 't',
            WorkItemType::Flow => 'f',
            WorkItemType::ToolBasic => 'b',
            WorkItemType::ToolStandard => 's',
            WorkItemType::ToolPremium => 'p',
            WorkItemType::WebGrounded => 'w',
        }
    }

    /// Parse a wire code
    ///
    /// Unknown codes fall back to `Classic`. The codec must never fail on
    /// an unrecognized type; the fallback is the explicit default branch
    /// rather than an error.
    ///
    /// # Example
    /// ```
    /// use message_pricing_core_rs::WorkItemType;
    ///
    /// assert_eq!(WorkItemType::from_code('g'), WorkItemType::Generative);
    /// assert_eq!(WorkItemType::from_code('?'), WorkItemType::Classic);
    /// ```
    pub fn from_code(code: char) -> Self {
        match code {
            'c' => WorkItemType::Classic,
            'g' => WorkItemType::Generative,
            't' => WorkItemType::TenantGraph,
            'f' => WorkItemType::Flow,
            'b' => WorkItemType::ToolBasic,
            's' => WorkItemType::ToolStandard,
            'p' => WorkItemType::ToolPremium,
            'w' => WorkItemType::WebGrounded,
            _ => WorkItemType::Classic,
        }
    }
}

impl Default for WorkItemType {
    fn default() -> Self {
        WorkItemType::Classic
    }
}

/// One recurring unit of automated work
///
/// # Example
/// ```
/// use message_pricing_core_rs::{WorkItem, WorkItemType};
///
/// let item = WorkItem::new("Greeting", WorkItemType::Classic, 100, 0);
/// assert_eq!(item.quantity(), 100);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    /// Unique item identifier (UUID), assigned on creation, never reused
    id: String,

    /// Free-text label, may be empty
    name: String,

    /// Item type; determines the per-unit message rate
    kind: WorkItemType,

    /// Number of units per run (>= 1)
    quantity: u64,

    /// Number of actions; meaningful only for `Flow`, ignored otherwise
    action_count: u64,
}

impl WorkItem {
    /// Create a new work item
    ///
    /// `quantity` is clamped to at least 1; `action_count` is already
    /// non-negative by type. A fresh identifier is assigned.
    pub fn new(name: impl Into<String>, kind: WorkItemType, quantity: u64, action_count: u64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            kind,
            quantity: quantity.max(1),
            action_count,
        }
    }

    /// Copy this item under a fresh identifier
    ///
    /// Used by the duplicate operation: same field values, new identity.
    pub fn duplicate(&self) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: self.name.clone(),
            kind: self.kind,
            quantity: self.quantity,
            action_count: self.action_count,
        }
    }

    /// Get item identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get item label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get item type
    pub fn kind(&self) -> WorkItemType {
        self.kind
    }

    /// Get quantity (always >= 1)
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Get action count (only meaningful for `Flow`)
    pub fn action_count(&self) -> u64 {
        self.action_count
    }
}

// Identifiers are session-local; two items with the same visible fields are
// the same value. This is what makes the codec round-trip law exact even
// though identifiers are not part of the payload.
impl PartialEq for WorkItem {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.kind == other.kind
            && self.quantity == other.quantity
            && self.action_count == other.action_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_clamped_to_one() {
        let item = WorkItem::new("", WorkItemType::Classic, 0, 0);
        assert_eq!(item.quantity(), 1);
    }

    #[test]
    fn test_duplicate_gets_fresh_id() {
        let item = WorkItem::new("step", WorkItemType::Flow, 2, 5);
        let copy = item.duplicate();

        assert_ne!(item.id(), copy.id());
        assert_eq!(item, copy); // value equality ignores the identifier
    }

    #[test]
    fn test_code_round_trip_all_types() {
        for kind in WorkItemType::ALL {
            assert_eq!(WorkItemType::from_code(kind.code()), kind);
        }
    }

    #[test]
    fn test_unknown_code_falls_back_to_classic() {
        assert_eq!(WorkItemType::from_code('x'), WorkItemType::Classic);
        assert_eq!(WorkItemType::from_code('Z'), WorkItemType::Classic);
    }
}
