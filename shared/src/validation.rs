//! Pure validation helpers shared by the backend services and the preview
//! layer. Services translate these into their own error taxonomy.

use rust_decimal::Decimal;

use crate::models::{CartonType, CustomerProduct};

/// Order quantity must be strictly positive
pub fn validate_quantity(quantity: i64) -> Result<(), &'static str> {
    if quantity <= 0 {
        return Err("Quantity must be greater than zero");
    }
    Ok(())
}

/// Normal cartons need all three outer dimensions, sheets need length and
/// width. Die-based types take their footprint from the die or blank, so
/// product dimensions are not required for them.
pub fn validate_product_dimensions(product: &CustomerProduct) -> Result<(), &'static str> {
    match product.carton_type {
        CartonType::Normal => {
            if product.length_cm <= Decimal::ZERO
                || product.width_cm <= Decimal::ZERO
                || product.height_cm <= Decimal::ZERO
            {
                return Err("Length, width and height must be entered for a normal carton");
            }
            Ok(())
        }
        CartonType::Sheet => {
            if product.length_cm <= Decimal::ZERO || product.width_cm <= Decimal::ZERO {
                return Err("Length and width must be entered for a sheet");
            }
            Ok(())
        }
        CartonType::Diecut | CartonType::Laminated => Ok(()),
    }
}

/// Margin and tax percentages cannot be negative
pub fn validate_percent(value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO {
        return Err("Percentage cannot be negative");
    }
    Ok(())
}

/// Unit prices (paper, lamination) cannot be negative
pub fn validate_unit_price(value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO {
        return Err("Unit price cannot be negative");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn product(carton_type: CartonType) -> CustomerProduct {
        CustomerProduct::new(
            Uuid::new_v4(),
            "customer".to_string(),
            "product".to_string(),
            carton_type,
        )
    }

    #[test]
    fn quantity_must_be_positive() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-5).is_err());
    }

    #[test]
    fn normal_carton_needs_all_three_dimensions() {
        let mut p = product(CartonType::Normal);
        assert!(validate_product_dimensions(&p).is_err());

        p.length_cm = dec("30");
        p.width_cm = dec("20");
        assert!(validate_product_dimensions(&p).is_err());

        p.height_cm = dec("15");
        assert!(validate_product_dimensions(&p).is_ok());
    }

    #[test]
    fn sheet_needs_length_and_width_only() {
        let mut p = product(CartonType::Sheet);
        p.length_cm = dec("100");
        assert!(validate_product_dimensions(&p).is_err());

        p.width_cm = dec("70");
        assert!(validate_product_dimensions(&p).is_ok(), "height not required");
    }

    #[test]
    fn die_based_types_skip_product_dimensions() {
        assert!(validate_product_dimensions(&product(CartonType::Diecut)).is_ok());
        assert!(validate_product_dimensions(&product(CartonType::Laminated)).is_ok());
    }

    #[test]
    fn percents_and_prices_reject_negatives() {
        assert!(validate_percent(dec("10")).is_ok());
        assert!(validate_percent(Decimal::ZERO).is_ok());
        assert!(validate_percent(dec("-1")).is_err());
        assert!(validate_unit_price(dec("50")).is_ok());
        assert!(validate_unit_price(dec("-50")).is_err());
    }
}
