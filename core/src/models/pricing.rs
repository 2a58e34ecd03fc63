//! Pricing parameters and license coverage
//!
//! Value objects consumed by the pricing engine and the volume aggregator.
//! All numeric inputs are clamped to their domain on construction; invalid
//! input is never surfaced as an error.

use crate::numeric::clamp_non_negative;
use serde::{Deserialize, Serialize};

/// Plan parameters for one pricing computation
///
/// Fully specifies the three plans: pay-as-you-go rate, pack price and
/// size, VAT, and the safety buffer applied to raw volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingParameters {
    /// Pay-as-you-go rate, currency per message (>= 0)
    pub payg_rate: f64,

    /// Price of one message pack (>= 0)
    pub pack_price: f64,

    /// Messages per pack (>= 1, division by pack size must never see zero)
    pub pack_size: u64,

    /// Whether VAT is applied to plan costs
    pub vat_enabled: bool,

    /// VAT rate in percent (>= 0)
    pub vat_rate_percent: f64,

    /// Safety margin added to raw volume, in percent (>= 0)
    pub buffer_percent: f64,
}

impl PricingParameters {
    /// Create clamped parameters
    ///
    /// Negative or non-finite rates clamp to 0; `pack_size` is floored
    /// at 1.
    ///
    /// # Example
    /// ```
    /// use message_pricing_core_rs::PricingParameters;
    ///
    /// let params = PricingParameters::new(-0.05, 40.0, 0, false, 20.0, 10.0);
    /// assert_eq!(params.payg_rate, 0.0);
    /// assert_eq!(params.pack_size, 1);
    /// ```
    pub fn new(
        payg_rate: f64,
        pack_price: f64,
        pack_size: u64,
        vat_enabled: bool,
        vat_rate_percent: f64,
        buffer_percent: f64,
    ) -> Self {
        Self {
            payg_rate: clamp_non_negative(payg_rate),
            pack_price: clamp_non_negative(pack_price),
            pack_size: pack_size.max(1),
            vat_enabled,
            vat_rate_percent: clamp_non_negative(vat_rate_percent),
            buffer_percent: clamp_non_negative(buffer_percent),
        }
    }

    /// Multiplier applied to every plan cost (1 when VAT is disabled)
    pub fn vat_multiplier(&self) -> f64 {
        if self.vat_enabled {
            1.0 + self.vat_rate_percent / 100.0
        } else {
            1.0
        }
    }
}

impl Default for PricingParameters {
    fn default() -> Self {
        Self {
            payg_rate: 0.05,
            pack_price: 40.0,
            pack_size: 1000,
            vat_enabled: false,
            vat_rate_percent: 20.0,
            buffer_percent: 10.0,
        }
    }
}

/// License coverage: a flat per-seat allowance that offsets a fraction of
/// billed messages
///
/// The effective coverage ratio is `min(1, licensed_users / total_users)`
/// when `total_users > 0`, else 0. Coverage only participates in billing
/// when enabled and both counts are positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseCoverage {
    /// Total seats in the tenant (>= 0)
    pub total_users: u64,

    /// Licensed seats (>= 0)
    pub licensed_users: u64,

    /// Whether the discount participates in billing
    pub enabled: bool,
}

impl LicenseCoverage {
    pub fn new(total_users: u64, licensed_users: u64, enabled: bool) -> Self {
        Self {
            total_users,
            licensed_users,
            enabled,
        }
    }

    /// Effective coverage ratio in [0, 1]
    ///
    /// # Example
    /// ```
    /// use message_pricing_core_rs::LicenseCoverage;
    ///
    /// assert_eq!(LicenseCoverage::new(10, 5, true).ratio(), 0.5);
    /// assert_eq!(LicenseCoverage::new(10, 25, true).ratio(), 1.0);
    /// assert_eq!(LicenseCoverage::new(0, 5, true).ratio(), 0.0);
    /// ```
    pub fn ratio(&self) -> f64 {
        if self.total_users > 0 {
            (self.licensed_users as f64 / self.total_users as f64).min(1.0)
        } else {
            0.0
        }
    }

    /// Whether the discount applies at all
    pub fn is_active(&self) -> bool {
        self.enabled && self.total_users > 0 && self.licensed_users > 0
    }
}

impl Default for LicenseCoverage {
    fn default() -> Self {
        Self {
            total_users: 0,
            licensed_users: 0,
            enabled: false,
        }
    }
}
