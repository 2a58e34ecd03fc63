//! Message Pricing Core - Cost Model Engine
//!
//! Deterministic cost model for a messaging/agent billing calculator: given a
//! projected monthly message volume and a small set of pricing plans
//! (pay-as-you-go, fixed packs, and a hybrid of the two), computes the cost of
//! each plan and ranks them. A flow of typed work items can be aggregated into
//! that volume, optionally discounted by a per-seat license allowance, and the
//! whole session round-trips through a compact URL-safe token.
//!
//! # Architecture
//!
//! - **models**: Domain value objects (WorkItem, PricingParameters, SessionState)
//! - **rates**: Fixed per-type message rate table and coverage eligibility
//! - **volume**: Per-run and monthly volume aggregation
//! - **engine**: Plan pricing, ranking, and break-even
//! - **codec**: Versioned URL-safe session payload
//! - **report**: Delimiter-separated export rendering
//!
//! # Critical Invariants
//!
//! 1. Per-item message figures are rounded to 3 decimal places *before* summation
//! 2. Fractional volumes are rounded up at every aggregation boundary
//! 3. All inputs are clamped to their domain on construction; every pricing
//!    formula is total and only the codec has an error path

// Module declarations
pub mod codec;
pub mod engine;
pub mod models;
pub mod numeric;
pub mod rates;
pub mod report;
pub mod volume;

// Re-exports for convenience
pub use codec::{decode, decode_or_default, encode, CodecError};
pub use engine::{
    price, price_with_coverage, CoverageQuote, PlanKind, PlanQuote, Quote, RemainderStrategy,
};
pub use models::{
    pricing::{LicenseCoverage, PricingParameters},
    session::SessionState,
    work_item::{WorkItem, WorkItemType},
};
pub use volume::MonthlyVolume;
