//! Unit conversions and small numeric helpers

use rust_decimal::Decimal;

pub fn cm_to_mm(cm: Decimal) -> Decimal {
    cm * Decimal::TEN
}

pub fn mm_to_cm(mm: Decimal) -> Decimal {
    mm / Decimal::TEN
}

/// Area of an l x w rectangle given in millimeters, in square meters
pub fn mm_rect_area_m2(length_mm: Decimal, width_mm: Decimal) -> Decimal {
    (length_mm / Decimal::from(1000)) * (width_mm / Decimal::from(1000))
}

/// base * (1 + percent/100)
pub fn with_percent_markup(base: Decimal, percent: Decimal) -> Decimal {
    base * (Decimal::ONE + percent / Decimal::ONE_HUNDRED)
}

/// Integer ceiling division; callers guarantee b > 0
pub fn ceil_div(a: i64, b: i64) -> i64 {
    (a + b - 1) / b
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn centimeter_millimeter_round_trip() {
        assert_eq!(cm_to_mm(dec("12.5")), dec("125"));
        assert_eq!(mm_to_cm(dec("125")), dec("12.5"));
    }

    #[test]
    fn rect_area_in_square_meters() {
        assert_eq!(mm_rect_area_m2(dec("500"), dec("400")), dec("0.2"));
        assert_eq!(mm_rect_area_m2(dec("1000"), dec("1000")), Decimal::ONE);
    }

    #[test]
    fn percent_markup() {
        assert_eq!(with_percent_markup(dec("100"), dec("10")), dec("110.0"));
        assert_eq!(with_percent_markup(dec("200"), Decimal::ZERO), dec("200"));
    }

    #[test]
    fn ceiling_division() {
        assert_eq!(ceil_div(1000, 2), 500);
        assert_eq!(ceil_div(1001, 2), 501);
        assert_eq!(ceil_div(1, 3), 1);
        assert_eq!(ceil_div(0, 3), 0);
    }
}
