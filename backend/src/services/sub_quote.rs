//! Sub-quote gate for the full inquiry flow
//!
//! Reconciles the inquiry's need flags against its existing sub-quotes,
//! decides whether full-flow pricing may run, and folds resolved estimates
//! back into the cost breakdown.

use rust_decimal::Decimal;

use shared::{CostBreakdown, FlowMode, PriceInquiry, SubQuote, SubQuoteKind, SubQuoteState};

use crate::error::{AppError, AppResult};

/// Create any missing required sub-quotes, one per needed kind, never
/// duplicating a kind. Returns the kinds created this pass.
pub fn ensure_sub_quotes(inquiry: &mut PriceInquiry) -> Vec<SubQuoteKind> {
    if inquiry.flow_mode != FlowMode::Full {
        return Vec::new();
    }

    let mut created = Vec::new();
    for kind in SubQuoteKind::ALL {
        if !inquiry.needs.requires(kind) {
            continue;
        }
        if inquiry.sub_quote(kind).is_some() {
            continue;
        }
        inquiry.sub_quotes.push(SubQuote::new(kind, true));
        created.push(kind);
    }
    created
}

/// Full flow is ready only when every required sub-quote is resolved with a
/// positive cost. An inquiry with zero required sub-quotes is NOT ready:
/// absence of mandatory quotes is not readiness, the quotes must be
/// collected explicitly.
pub fn all_required_ready(inquiry: &PriceInquiry) -> bool {
    if inquiry.flow_mode != FlowMode::Full {
        return true;
    }

    let mut required = inquiry.sub_quotes.iter().filter(|sq| sq.required).peekable();
    if required.peek().is_none() {
        return false;
    }
    required.all(SubQuote::is_satisfied)
}

/// Fold resolved sub-quote estimates into the cost breakdown. Design-kind
/// estimates fund the design, cliche and die cost fields together; the
/// three are not tracked separately at this stage. Print and staple
/// estimates are collected for the record but carry no cost field of
/// their own.
pub fn apply_sub_quote_costs(inquiry: &PriceInquiry, costs: &mut CostBreakdown) {
    if inquiry.flow_mode != FlowMode::Full {
        return;
    }

    let design = sum_kind(inquiry, SubQuoteKind::Design);
    costs.design_cost = design;
    costs.cliche_cost = design;
    costs.die_cost = design;
    costs.punch_cost_total = sum_kind(inquiry, SubQuoteKind::Punch);
    costs.pallet_wrap_cost_total = sum_kind(inquiry, SubQuoteKind::Pallet);
    costs.shipping_cost = sum_kind(inquiry, SubQuoteKind::Shipping);
}

fn sum_kind(inquiry: &PriceInquiry, kind: SubQuoteKind) -> Decimal {
    inquiry
        .sub_quotes
        .iter()
        .filter(|sq| sq.kind == kind)
        .map(|sq| sq.estimated_cost)
        .sum()
}

/// Record a supplier's answer on one sub-quote, moving it to received.
pub fn record_estimate(
    inquiry: &mut PriceInquiry,
    kind: SubQuoteKind,
    estimated_cost: Decimal,
) -> AppResult<()> {
    if estimated_cost <= Decimal::ZERO {
        return Err(AppError::MissingInput("estimated_cost"));
    }

    let sub_quote = inquiry
        .sub_quote_mut(kind)
        .ok_or(AppError::MissingInput("sub_quote"))?;
    sub_quote.estimated_cost = estimated_cost;
    sub_quote.state = SubQuoteState::Received;
    Ok(())
}
