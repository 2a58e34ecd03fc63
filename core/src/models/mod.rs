//! Domain models
//!
//! Value objects for the cost model:
//! - `work_item`: one recurring unit of automated work ("node")
//! - `pricing`: plan parameters and license coverage
//! - `session`: the complete user-adjustable session value

pub mod pricing;
pub mod session;
pub mod work_item;

// Re-export main types for convenience
pub use pricing::{LicenseCoverage, PricingParameters};
pub use session::SessionState;
pub use work_item::{WorkItem, WorkItemType};
