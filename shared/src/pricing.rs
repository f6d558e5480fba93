//! Price aggregation: cost components to cash/credit unit and total prices

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CostBreakdown, PaymentType};
use crate::units::with_percent_markup;

/// Derived prices for one inquiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub base_cost_per_carton: Decimal,
    pub sale_price_cash: Decimal,
    pub sale_price_credit: Decimal,
    /// Cash or credit unit price (by payment type) with tax applied
    pub unit_price_with_tax: Decimal,
    pub total_price_with_tax: Decimal,
}

/// Fold every cost component into per-unit prices.
///
/// Returns `None` for a non-positive quantity; callers validate quantity
/// before pricing.
pub fn price_summary(
    costs: &CostBreakdown,
    quantity: i64,
    payment_type: PaymentType,
    margin_cash_percent: Decimal,
    margin_credit_percent: Decimal,
    tax_percent: Decimal,
) -> Option<PriceSummary> {
    if quantity <= 0 {
        return None;
    }

    let base_cost_per_carton = costs.total() / Decimal::from(quantity);
    let sale_price_cash = with_percent_markup(base_cost_per_carton, margin_cash_percent);
    let sale_price_credit = with_percent_markup(base_cost_per_carton, margin_credit_percent);

    let unit_price = match payment_type {
        PaymentType::Cash => sale_price_cash,
        PaymentType::Credit => sale_price_credit,
    };
    let unit_price_with_tax = with_percent_markup(unit_price, tax_percent);
    let total_price_with_tax = unit_price_with_tax * Decimal::from(quantity);

    Some(PriceSummary {
        base_cost_per_carton,
        sale_price_cash,
        sale_price_credit,
        unit_price_with_tax,
        total_price_with_tax,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn costs(material: &str) -> CostBreakdown {
        CostBreakdown {
            material_cost_total: dec(material),
            ..CostBreakdown::default()
        }
    }

    #[test]
    fn base_cost_divides_total_by_quantity() {
        let summary = price_summary(
            &costs("100000"),
            1000,
            PaymentType::Cash,
            dec("10"),
            dec("15"),
            dec("9"),
        )
        .unwrap();
        assert_eq!(summary.base_cost_per_carton, dec("100"));
        assert_eq!(summary.sale_price_cash, dec("110.00"));
        assert_eq!(summary.sale_price_credit, dec("115.00"));
        assert_eq!(summary.unit_price_with_tax, dec("119.9000"));
        assert_eq!(summary.total_price_with_tax, dec("119900.0000"));
    }

    #[test]
    fn credit_payment_prices_off_credit_margin() {
        let cash = price_summary(
            &costs("100000"),
            1000,
            PaymentType::Cash,
            dec("10"),
            dec("15"),
            dec("9"),
        )
        .unwrap();
        let credit = price_summary(
            &costs("100000"),
            1000,
            PaymentType::Credit,
            dec("10"),
            dec("15"),
            dec("9"),
        )
        .unwrap();
        assert_eq!(cash.sale_price_credit, credit.sale_price_credit);
        assert!(credit.unit_price_with_tax > cash.unit_price_with_tax);
    }

    #[test]
    fn all_cost_components_feed_the_base() {
        let full = CostBreakdown {
            material_cost_total: dec("50"),
            overhead_cost_total: dec("5"),
            die_cost: dec("10"),
            cliche_cost: dec("10"),
            design_cost: dec("10"),
            punch_cost_total: dec("5"),
            pallet_wrap_cost_total: dec("5"),
            shipping_cost: dec("5"),
        };
        let summary = price_summary(
            &full,
            100,
            PaymentType::Cash,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        )
        .unwrap();
        assert_eq!(summary.base_cost_per_carton, dec("1"));
    }

    #[test]
    fn zero_quantity_yields_none() {
        assert!(price_summary(
            &costs("100"),
            0,
            PaymentType::Cash,
            dec("10"),
            dec("15"),
            dec("9"),
        )
        .is_none());
    }

    #[test]
    fn higher_cash_margin_raises_cash_price() {
        let low = price_summary(
            &costs("100000"),
            1000,
            PaymentType::Cash,
            dec("10"),
            dec("15"),
            dec("9"),
        )
        .unwrap();
        let high = price_summary(
            &costs("100000"),
            1000,
            PaymentType::Cash,
            dec("12"),
            dec("15"),
            dec("9"),
        )
        .unwrap();
        assert!(high.sale_price_cash > low.sale_price_cash);
        assert!(high.unit_price_with_tax > low.unit_price_with_tax);
        assert_eq!(high.sale_price_credit, low.sale_price_credit);
    }
}
