//! Export rendering
//!
//! Flattened text renderings for the clipboard/export collaborator: the
//! per-plan cost table and the per-item billing breakdown, tab-separated,
//! with every figure produced by the same numeric helpers the aggregator
//! uses. Currency is fixed to the en-GB pound format (symbol, two
//! decimals, thousands grouping).

use crate::engine::{PlanKind, PlanQuote, Quote, RemainderStrategy};
use crate::models::pricing::PricingParameters;
use crate::models::work_item::WorkItem;
use crate::rates::{node_messages, rate_for};

/// Group an integer with comma thousands separators
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format an amount in the fixed en-GB pound format
///
/// # Example
/// ```
/// use message_pricing_core_rs::report::format_gbp;
///
/// assert_eq!(format_gbp(1234.5), "£1,234.50");
/// assert_eq!(format_gbp(0.05), "£0.05");
/// ```
pub fn format_gbp(amount: f64) -> String {
    let negative = amount < 0.0;
    let pence_total = (amount.abs() * 100.0).round() as u64;
    let pounds = pence_total / 100;
    let pence = pence_total % 100;
    format!(
        "{}£{}.{:02}",
        if negative { "-" } else { "" },
        group_thousands(pounds),
        pence
    )
}

/// One-line human-readable breakdown of a plan quote
///
/// Mirrors what the calculator card shows: how the volume is covered,
/// followed by the unused-message note where packs are involved.
pub fn plan_breakdown(
    quote: &PlanQuote,
    params: &PricingParameters,
    effective_volume: u64,
) -> String {
    let vat_suffix = if params.vat_enabled { " + VAT" } else { "" };
    let waste_note = if quote.waste > 0 {
        format!("{} unused msgs this month", group_thousands(quote.waste))
    } else {
        "no unused messages".to_string()
    };

    match quote.plan {
        PlanKind::PayAsYouGo => format!(
            "{} msgs × {} each{}",
            group_thousands(effective_volume),
            format_gbp(params.payg_rate),
            vat_suffix
        ),
        PlanKind::Packs => format!(
            "{} × {} pack{} ({} msgs each){} · {}",
            quote.packs_bought,
            format_gbp(params.pack_price),
            if quote.packs_bought == 1 { "" } else { "s" },
            group_thousands(params.pack_size),
            vat_suffix,
            waste_note
        ),
        PlanKind::Hybrid => {
            let remainder_note = match quote.remainder_strategy {
                RemainderStrategy::None => String::new(),
                RemainderStrategy::PayAsYouGo => format!(
                    " + {} msgs via PAYG",
                    group_thousands(quote.payg_messages)
                ),
                RemainderStrategy::ExtraPack => " (overspill covered by extra pack)".to_string(),
            };
            format!(
                "{} × {} pack{}{}{} · {}",
                quote.packs_bought,
                format_gbp(params.pack_price),
                if quote.packs_bought == 1 { "" } else { "s" },
                remainder_note,
                vat_suffix,
                waste_note
            )
        }
    }
}

/// Tab-separated plan cost table, cheapest plan first
pub fn plan_table(quote: &Quote, params: &PricingParameters) -> String {
    let mut table = String::from("Plan\tMonthly cost\tPer message\tDetails\n");
    for plan in quote.plans() {
        table.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            plan.plan.label(),
            format_gbp(plan.cost),
            format_gbp(plan.per_message),
            plan_breakdown(plan, params, quote.effective_volume),
        ));
    }
    table
}

/// Tab-separated per-item billing breakdown
///
/// Message figures come from the same per-item rounding the aggregator
/// applies, so the export always matches the priced totals.
pub fn work_item_table(items: &[WorkItem]) -> String {
    let mut table = String::from("#\tName\tType\tQty\tActions\tRate\tMsgs/run\n");
    for (position, item) in items.iter().enumerate() {
        table.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            position + 1,
            if item.name().is_empty() {
                item.kind().label()
            } else {
                item.name()
            },
            item.kind().label(),
            item.quantity(),
            item.action_count(),
            rate_for(item.kind(), item.action_count()),
            node_messages(item),
        ));
    }
    table
}
