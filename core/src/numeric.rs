//! Shared numeric helpers
//!
//! Every rounding decision in the cost model goes through this module so the
//! aggregator, the pricing engine, and the export path agree on every figure.
//!
//! Two rules apply throughout:
//! - Per-item message figures are rounded to 3 decimal places *before* they
//!   are summed (see [`round3`]).
//! - Wherever a fractional volume feeds a pricing formula it is rounded up,
//!   never down (see [`ceil_count`]).

/// Round to 3 decimal places, half away from zero.
///
/// Applied to each work item's per-run message figure before summation.
/// Rounding per item rather than only the aggregate is deliberate; summing
/// unrounded figures produces different totals.
///
/// # Example
/// ```
/// use message_pricing_core_rs::numeric::round3;
///
/// assert_eq!(round3(5.3904), 5.39);
/// assert_eq!(round3(0.1 * 3.0), 0.3);
/// ```
pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Round a fractional volume up into a whole message count.
///
/// Non-finite and negative inputs collapse to 0, keeping the conversion
/// total over anything the clamped input domain can produce.
///
/// # Example
/// ```
/// use message_pricing_core_rs::numeric::ceil_count;
///
/// assert_eq!(ceil_count(1099.2), 1100);
/// assert_eq!(ceil_count(500.0), 500);
/// assert_eq!(ceil_count(-3.0), 0);
/// ```
pub fn ceil_count(x: f64) -> u64 {
    if !x.is_finite() || x <= 0.0 {
        0
    } else {
        x.ceil() as u64
    }
}

/// Clamp a parsed numeric input to the non-negative domain.
///
/// Invalid numeric input is never surfaced as an error; it is silently
/// clamped to the domain floor before use.
pub fn clamp_non_negative(x: f64) -> f64 {
    if x.is_finite() && x > 0.0 {
        x
    } else {
        0.0
    }
}
