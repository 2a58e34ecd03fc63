//! Pricing engine integration tests
//!
//! Walks the reference scenarios end to end: plan formulas, the hybrid
//! remainder tie-break, ranking and saving, break-even, and the
//! zero-volume guards.

use message_pricing_core_rs::{price, PlanKind, PricingParameters, RemainderStrategy};

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Reference scenario: 1,000 messages, 10% buffer, £0.05 PAYG,
/// £40 packs of 1,000, VAT off
fn scenario_params() -> PricingParameters {
    PricingParameters::new(0.05, 40.0, 1000, false, 20.0, 10.0)
}

// ============================================================================
// Reference scenario
// ============================================================================

#[test]
fn test_scenario_payg_cost() {
    let quote = price(1100, &scenario_params());
    approx(quote.plan(PlanKind::PayAsYouGo).cost, 55.0);
}

#[test]
fn test_scenario_packs_cost_and_waste() {
    let quote = price(1100, &scenario_params());

    let packs = quote.plan(PlanKind::Packs);
    approx(packs.cost, 80.0);
    assert_eq!(packs.packs_bought, 2);
    assert_eq!(packs.waste, 900);
}

#[test]
fn test_scenario_hybrid_pays_remainder_via_payg() {
    let quote = price(1100, &scenario_params());

    let hybrid = quote.plan(PlanKind::Hybrid);
    approx(hybrid.cost, 45.0);
    assert_eq!(hybrid.packs_bought, 1);
    assert_eq!(hybrid.payg_messages, 100);
    assert_eq!(hybrid.remainder_strategy, RemainderStrategy::PayAsYouGo);
    assert_eq!(hybrid.waste, 0);
}

#[test]
fn test_scenario_recommends_hybrid_with_saving() {
    let quote = price(1100, &scenario_params());

    assert_eq!(quote.recommended, PlanKind::Hybrid);
    // Next cheapest is PAYG at 55.00
    assert_eq!(quote.plans()[1].plan, PlanKind::PayAsYouGo);
    approx(quote.saving_vs_next, 10.0);
}

#[test]
fn test_scenario_break_even() {
    let quote = price(1100, &scenario_params());
    assert_eq!(quote.break_even, Some(800));
}

// ============================================================================
// Boundaries
// ============================================================================

#[test]
fn test_zero_volume_is_free_everywhere() {
    let quote = price(0, &scenario_params());

    assert_eq!(quote.effective_volume, 0);
    for plan in quote.plans() {
        assert_eq!(plan.cost, 0.0);
        assert_eq!(plan.per_message, 0.0);
    }
}

#[test]
fn test_exact_multiple_hybrid_equals_packs_with_no_waste() {
    let quote = price(3000, &scenario_params());

    let packs = quote.plan(PlanKind::Packs);
    let hybrid = quote.plan(PlanKind::Hybrid);
    assert_eq!(hybrid.cost, packs.cost);
    assert_eq!(hybrid.waste, 0);
    assert_eq!(packs.waste, 0);
    assert_eq!(hybrid.remainder_strategy, RemainderStrategy::None);
}

#[test]
fn test_volume_below_one_pack() {
    // 10 messages: one pack (£40) vs PAYG (£0.50); hybrid has no whole
    // packs and pays everything via PAYG
    let quote = price(10, &scenario_params());

    let hybrid = quote.plan(PlanKind::Hybrid);
    assert_eq!(hybrid.packs_bought, 0);
    assert_eq!(hybrid.payg_messages, 10);
    approx(hybrid.cost, 0.5);
    assert_eq!(quote.recommended, PlanKind::PayAsYouGo);
}

#[test]
fn test_zero_payg_rate_scenario() {
    let params = PricingParameters::new(0.0, 40.0, 1000, false, 20.0, 0.0);
    let quote = price(250_000, &params);

    assert_eq!(quote.plan(PlanKind::PayAsYouGo).cost, 0.0);
    assert_eq!(quote.break_even, None);
    assert_eq!(quote.recommended, PlanKind::PayAsYouGo);
}

// ============================================================================
// Branch inequality and ranking invariants
// ============================================================================

#[test]
fn test_payg_remainder_branch_never_beats_packs() {
    // Whenever the hybrid takes the PAYG remainder, its cost is at most
    // the all-packs cost: same whole packs, remainder cheaper than the
    // extra pack the packs plan buys.
    for volume in [1, 70, 999, 1001, 1500, 2499, 9999] {
        let quote = price(volume, &scenario_params());
        let hybrid = quote.plan(PlanKind::Hybrid);
        if hybrid.remainder_strategy == RemainderStrategy::PayAsYouGo {
            assert!(
                hybrid.cost <= quote.plan(PlanKind::Packs).cost + 1e-9,
                "volume {volume}: hybrid {} > packs {}",
                hybrid.cost,
                quote.plan(PlanKind::Packs).cost
            );
        }
    }
}

#[test]
fn test_plans_sorted_ascending_by_cost() {
    for volume in [0, 1, 500, 1100, 2000, 123_456] {
        let quote = price(volume, &scenario_params());
        let plans = quote.plans();
        assert_eq!(plans.len(), 3);
        assert!(plans[0].cost <= plans[1].cost);
        assert!(plans[1].cost <= plans[2].cost);
        assert_eq!(quote.recommended, plans[0].plan);
        assert_eq!(quote.best(), &plans[0]);
    }
}

#[test]
fn test_pricing_is_idempotent() {
    let params = scenario_params();
    let first = price(1100, &params);
    let second = price(1100, &params);
    assert_eq!(first, second);
}

#[test]
fn test_all_costs_non_negative() {
    let cases = [
        PricingParameters::new(0.0, 0.0, 1, false, 0.0, 0.0),
        PricingParameters::new(0.001, 9999.0, 7, true, 20.0, 0.0),
        PricingParameters::new(12.5, 0.0, 100, true, 5.0, 0.0),
    ];
    for params in &cases {
        for volume in [0, 1, 99, 100, 101, 10_000] {
            let quote = price(volume, params);
            for plan in quote.plans() {
                assert!(plan.cost >= 0.0);
                assert!(plan.per_message >= 0.0);
            }
        }
    }
}
