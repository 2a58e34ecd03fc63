//! Pricing engine
//!
//! Prices an effective monthly message volume under three plans and ranks
//! them:
//!
//! - **PAYG**: every message at the pay-as-you-go rate
//! - **Packs**: whole packs covering the full volume (unused messages are
//!   reported as waste, not charged)
//! - **Hybrid**: whole packs for the bulk, then the cheaper of paying the
//!   remainder at the PAYG rate or buying one more pack; a tie goes to
//!   PAYG
//!
//! The engine performs no validation: inputs are pre-clamped by the model
//! constructors and every function here is total over that domain. At zero
//! volume every plan costs 0 and every per-message rate is 0; no division
//! by zero occurs.

use crate::models::pricing::PricingParameters;
use crate::numeric::ceil_count;
use crate::volume::MonthlyVolume;
use serde::{Deserialize, Serialize};

/// Pricing plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanKind {
    /// Pay-as-you-go
    PayAsYouGo,
    /// Whole message packs
    Packs,
    /// Packs plus PAYG (or one extra pack) for the overspill
    Hybrid,
}

impl PlanKind {
    /// Human-readable plan label
    pub fn label(&self) -> &'static str {
        match self {
            PlanKind::PayAsYouGo => "PAYG",
            PlanKind::Packs => "Message Packs",
            PlanKind::Hybrid => "Hybrid (Packs + PAYG)",
        }
    }

    /// Parse a plan label
    ///
    /// Unknown labels fall back to the first variant rather than failing.
    pub fn from_label(label: &str) -> Self {
        match label {
            "PAYG" => PlanKind::PayAsYouGo,
            "Message Packs" => PlanKind::Packs,
            "Hybrid (Packs + PAYG)" => PlanKind::Hybrid,
            _ => PlanKind::PayAsYouGo,
        }
    }
}

impl Default for PlanKind {
    fn default() -> Self {
        PlanKind::PayAsYouGo
    }
}

/// How the hybrid plan covers messages beyond its whole packs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemainderStrategy {
    /// Volume divides exactly into packs; nothing left over
    None,
    /// Remainder billed at the pay-as-you-go rate
    PayAsYouGo,
    /// One extra pack bought to cover the remainder
    ExtraPack,
}

/// Cost of one plan for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanQuote {
    /// Which plan this prices
    pub plan: PlanKind,

    /// Monthly cost, VAT included when enabled
    pub cost: f64,

    /// Effective cost per message (0 at zero volume)
    pub per_message: f64,

    /// Whole packs bought under this plan
    pub packs_bought: u64,

    /// Messages billed at the PAYG rate (hybrid remainder only)
    pub payg_messages: u64,

    /// Messages bought but unused this month (reported, not charged)
    pub waste: u64,

    /// Hybrid remainder choice; `None` for the other plans
    pub remainder_strategy: RemainderStrategy,
}

/// Ranked pricing result for one effective volume
///
/// Only [`price`] constructs one, so the plan list always holds exactly
/// three entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// The volume that was priced
    pub effective_volume: u64,

    /// Always the three plans, ascending by cost (ties keep PAYG, Packs,
    /// Hybrid order)
    plans: Vec<PlanQuote>,

    /// Cheapest plan
    pub recommended: PlanKind,

    /// Monthly saving of the cheapest plan over the next cheapest
    pub saving_vs_next: f64,

    /// Messages at which one pack stops being cheaper than PAYG;
    /// `None` when the PAYG rate is 0 (no finite crossover). VAT cancels
    /// in the ratio, so this is VAT-independent.
    pub break_even: Option<u64>,
}

impl Quote {
    /// All three plans, ascending by cost
    pub fn plans(&self) -> &[PlanQuote] {
        &self.plans
    }

    /// Cheapest plan's quote
    pub fn best(&self) -> &PlanQuote {
        &self.plans[0]
    }

    /// Quote for a specific plan
    pub fn plan(&self, kind: PlanKind) -> &PlanQuote {
        self.plans
            .iter()
            .find(|quote| quote.plan == kind)
            .unwrap_or(&self.plans[0])
    }
}

/// Undiscounted and license-discounted quotes side by side
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageQuote {
    /// Quote at the baseline (undiscounted) effective volume
    pub baseline: Quote,

    /// Quote at the coverage-discounted effective volume
    pub covered: Quote,

    /// Monthly saving the license discount produces (never negative)
    pub saving: f64,
}

/// Price an effective volume under all three plans
///
/// # Example
/// ```
/// use message_pricing_core_rs::{price, PlanKind, PricingParameters};
///
/// // 1,000 messages + 10% buffer at £0.05/msg, £40 packs of 1,000
/// let params = PricingParameters::new(0.05, 40.0, 1000, false, 20.0, 10.0);
/// let quote = price(1100, &params);
///
/// assert_eq!(quote.recommended, PlanKind::Hybrid);
/// assert!((quote.best().cost - 45.0).abs() < 1e-9);
/// assert_eq!(quote.break_even, Some(800));
/// ```
pub fn price(effective_volume: u64, params: &PricingParameters) -> Quote {
    let eff = effective_volume as f64;
    let vat = params.vat_multiplier();
    let pack_size = params.pack_size.max(1);

    let per_message = |cost: f64| if effective_volume == 0 { 0.0 } else { cost / eff };

    // PAYG
    let payg_cost = eff * params.payg_rate * vat;
    let payg = PlanQuote {
        plan: PlanKind::PayAsYouGo,
        cost: payg_cost,
        per_message: per_message(payg_cost),
        packs_bought: 0,
        payg_messages: effective_volume,
        waste: 0,
        remainder_strategy: RemainderStrategy::None,
    };

    // Packs
    let packs_needed = effective_volume.div_ceil(pack_size);
    let packs_cost = packs_needed as f64 * params.pack_price * vat;
    let packs = PlanQuote {
        plan: PlanKind::Packs,
        cost: packs_cost,
        per_message: per_message(packs_cost),
        packs_bought: packs_needed,
        payg_messages: 0,
        waste: packs_needed * pack_size - effective_volume,
        remainder_strategy: RemainderStrategy::None,
    };

    // Hybrid
    let packs_floor = effective_volume / pack_size;
    let remainder = effective_volume - packs_floor * pack_size;
    let floor_cost = packs_floor as f64 * params.pack_price * vat;
    let hybrid = if remainder == 0 {
        PlanQuote {
            plan: PlanKind::Hybrid,
            cost: floor_cost,
            per_message: per_message(floor_cost),
            packs_bought: packs_floor,
            payg_messages: 0,
            waste: 0,
            remainder_strategy: RemainderStrategy::None,
        }
    } else {
        let remainder_cost = remainder as f64 * params.payg_rate * vat;
        let one_pack_cost = params.pack_price * vat;
        // Tie goes to PAYG (<=); do not tighten to <
        if remainder_cost <= one_pack_cost {
            let cost = floor_cost + remainder_cost;
            PlanQuote {
                plan: PlanKind::Hybrid,
                cost,
                per_message: per_message(cost),
                packs_bought: packs_floor,
                payg_messages: remainder,
                waste: 0,
                remainder_strategy: RemainderStrategy::PayAsYouGo,
            }
        } else {
            let cost = floor_cost + one_pack_cost;
            PlanQuote {
                plan: PlanKind::Hybrid,
                cost,
                per_message: per_message(cost),
                packs_bought: packs_floor + 1,
                payg_messages: 0,
                waste: pack_size - remainder,
                remainder_strategy: RemainderStrategy::ExtraPack,
            }
        }
    };

    let mut plans = vec![payg, packs, hybrid];
    // Stable sort: ties keep declaration order
    plans.sort_by(|a, b| a.cost.total_cmp(&b.cost));

    let recommended = plans[0].plan;
    let saving_vs_next = plans[1].cost - plans[0].cost;

    let break_even = if params.payg_rate > 0.0 {
        Some(ceil_count(params.pack_price / params.payg_rate))
    } else {
        None
    };

    Quote {
        effective_volume,
        plans,
        recommended,
        saving_vs_next,
        break_even,
    }
}

/// Price a volume twice: at its baseline and at its coverage-discounted
/// effective count
///
/// The reported saving is the drop in the cheapest plan's cost, floored
/// at 0.
pub fn price_with_coverage(volume: &MonthlyVolume, params: &PricingParameters) -> CoverageQuote {
    let baseline = price(volume.baseline_effective_volume, params);
    let covered = price(volume.effective_volume, params);
    let saving = (baseline.best().cost - covered.best().cost).max(0.0);

    CoverageQuote {
        baseline,
        covered,
        saving,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> PricingParameters {
        PricingParameters::new(0.05, 40.0, 1000, false, 20.0, 10.0)
    }

    #[test]
    fn test_zero_volume_all_plans_free() {
        let quote = price(0, &params());

        for plan in quote.plans() {
            assert_eq!(plan.cost, 0.0);
            assert_eq!(plan.per_message, 0.0);
            assert_eq!(plan.waste, 0);
        }
        assert_eq!(quote.saving_vs_next, 0.0);
    }

    #[test]
    fn test_exact_pack_multiple_hybrid_matches_packs() {
        let quote = price(2000, &params());

        let packs = quote.plan(PlanKind::Packs);
        let hybrid = quote.plan(PlanKind::Hybrid);
        assert_eq!(packs.cost, hybrid.cost);
        assert_eq!(hybrid.waste, 0);
        assert_eq!(hybrid.remainder_strategy, RemainderStrategy::None);
    }

    #[test]
    fn test_tie_between_remainder_and_pack_goes_to_payg() {
        // remainder 800 * 0.05 = 40 exactly equals one pack
        let p = PricingParameters::new(0.05, 40.0, 1000, false, 0.0, 0.0);
        let quote = price(1800, &p);

        let hybrid = quote.plan(PlanKind::Hybrid);
        assert_eq!(hybrid.remainder_strategy, RemainderStrategy::PayAsYouGo);
        assert_eq!(hybrid.payg_messages, 800);
        assert_eq!(hybrid.waste, 0);
    }

    #[test]
    fn test_extra_pack_branch_reports_waste() {
        // remainder 900 * 0.05 = 45 > one pack at 40
        let p = PricingParameters::new(0.05, 40.0, 1000, false, 0.0, 0.0);
        let quote = price(1900, &p);

        let hybrid = quote.plan(PlanKind::Hybrid);
        assert_eq!(hybrid.remainder_strategy, RemainderStrategy::ExtraPack);
        assert_eq!(hybrid.packs_bought, 2);
        assert_eq!(hybrid.waste, 100);
        assert!((hybrid.cost - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_vat_applies_to_every_plan() {
        let p = PricingParameters::new(0.05, 40.0, 1000, true, 20.0, 0.0);
        let quote = price(1000, &p);

        assert!((quote.plan(PlanKind::PayAsYouGo).cost - 60.0).abs() < 1e-9);
        assert!((quote.plan(PlanKind::Packs).cost - 48.0).abs() < 1e-9);
    }

    #[test]
    fn test_break_even_is_vat_independent() {
        let mut p = params();
        let without = price(100, &p).break_even;
        p.vat_enabled = true;
        let with = price(100, &p).break_even;

        assert_eq!(without, Some(800));
        assert_eq!(with, Some(800));
    }

    #[test]
    fn test_zero_payg_rate_has_no_break_even() {
        let p = PricingParameters::new(0.0, 40.0, 1000, false, 0.0, 0.0);
        let quote = price(5000, &p);

        assert_eq!(quote.break_even, None);
        assert_eq!(quote.plan(PlanKind::PayAsYouGo).cost, 0.0);
    }

    #[test]
    fn test_plan_label_round_trip_and_fallback() {
        for kind in [PlanKind::PayAsYouGo, PlanKind::Packs, PlanKind::Hybrid] {
            assert_eq!(PlanKind::from_label(kind.label()), kind);
        }
        assert_eq!(PlanKind::from_label("Enterprise"), PlanKind::PayAsYouGo);
    }
}
