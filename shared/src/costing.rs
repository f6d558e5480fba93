//! Material and overhead costing per carton type

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{CartonType, Die};
use crate::unfold::FlatDimensions;
use crate::units::{ceil_div, mm_rect_area_m2};

/// Material plus the type-dependent overhead markup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCost {
    pub material: Decimal,
    pub overhead: Decimal,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CostingError {
    /// Diecut/laminated costing always consumes a real die record; a manually
    /// entered blank footprint is enough for unfolding but not for costing
    #[error("a die with blade-to-blade dimensions is required for diecut/laminated costing")]
    MissingDieDimensions,
}

/// Compute material and overhead for one order.
///
/// Normal cartons and sheets are costed per flat area; diecut and laminated
/// cartons are costed per die sheet, with the die's one-time cost folded into
/// the material. Overhead is 10% of material for normal/sheet and 15% for
/// die-based work.
pub fn material_and_overhead(
    carton_type: CartonType,
    flat: &FlatDimensions,
    quantity: i64,
    paper_price_per_m2: Decimal,
    lamination_price_per_m2: Decimal,
    die: Option<&Die>,
) -> Result<MaterialCost, CostingError> {
    match carton_type {
        CartonType::Normal | CartonType::Sheet => {
            let unit_area_m2 = mm_rect_area_m2(flat.length_mm, flat.width_mm);
            let total_area_m2 = unit_area_m2 * Decimal::from(quantity);
            let material = total_area_m2 * paper_price_per_m2;
            Ok(MaterialCost {
                material,
                overhead: material * Decimal::new(10, 2),
            })
        }

        CartonType::Diecut => {
            let (total_area_m2, die_cost) = die_sheet_area_m2(die, quantity)?;
            let material = total_area_m2 * paper_price_per_m2 + die_cost;
            Ok(MaterialCost {
                material,
                overhead: material * Decimal::new(15, 2),
            })
        }

        CartonType::Laminated => {
            let (total_area_m2, die_cost) = die_sheet_area_m2(die, quantity)?;
            let paper = total_area_m2 * paper_price_per_m2;
            let lamination = total_area_m2 * lamination_price_per_m2;
            let material = paper + lamination + die_cost;
            Ok(MaterialCost {
                material,
                overhead: material * Decimal::new(15, 2),
            })
        }
    }
}

/// Total sheet area for a die-cut order plus the die's one-time cost.
/// sheets needed = ceil(quantity / cavities per sheet).
fn die_sheet_area_m2(die: Option<&Die>, quantity: i64) -> Result<(Decimal, Decimal), CostingError> {
    let die = die
        .filter(|d| d.has_blade_dimensions())
        .ok_or(CostingError::MissingDieDimensions)?;

    let sheets_needed = ceil_div(quantity, die.effective_cavities());
    let sheet_area_m2 = mm_rect_area_m2(die.blade_length_mm, die.blade_width_mm);
    Ok((sheet_area_m2 * Decimal::from(sheets_needed), die.die_cost))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn die_500x400(cavities: i64, die_cost: &str) -> Die {
        let mut die = Die::new("blank".to_string(), dec("500"), dec("400"));
        die.cavities_per_sheet = cavities;
        die.die_cost = dec(die_cost);
        die
    }

    #[test]
    fn normal_carton_costed_per_flat_area() {
        // 1.08 m x 0.37 m = 0.3996 m2 per unit, 1000 units, paper at 50
        let flat = FlatDimensions::new(dec("1080"), dec("370"));
        let cost = material_and_overhead(
            CartonType::Normal,
            &flat,
            1000,
            dec("50"),
            Decimal::ZERO,
            None,
        )
        .unwrap();
        assert_eq!(cost.material, dec("19980.0000"));
        assert_eq!(cost.overhead, cost.material * dec("0.10"));
    }

    #[test]
    fn sheet_uses_same_formula_as_normal() {
        let flat = FlatDimensions::new(dec("1040"), dec("740"));
        let normal =
            material_and_overhead(CartonType::Normal, &flat, 500, dec("40"), Decimal::ZERO, None)
                .unwrap();
        let sheet =
            material_and_overhead(CartonType::Sheet, &flat, 500, dec("40"), Decimal::ZERO, None)
                .unwrap();
        assert_eq!(normal, sheet);
    }

    #[test]
    fn diecut_costed_per_die_sheet() {
        // blade 500x400 mm, 2 cavities, 1000 units:
        // 500 sheets of 0.2 m2 = 100 m2
        let flat = FlatDimensions::new(dec("540"), dec("440"));
        let die = die_500x400(2, "3000");
        let cost = material_and_overhead(
            CartonType::Diecut,
            &flat,
            1000,
            dec("50"),
            Decimal::ZERO,
            Some(&die),
        )
        .unwrap();
        assert_eq!(cost.material, dec("100") * dec("50") + dec("3000"));
        assert_eq!(cost.overhead, cost.material * dec("0.15"));
    }

    #[test]
    fn diecut_partial_last_sheet_rounds_up() {
        let flat = FlatDimensions::new(dec("540"), dec("440"));
        let die = die_500x400(3, "0");
        let cost = material_and_overhead(
            CartonType::Diecut,
            &flat,
            1000,
            dec("10"),
            Decimal::ZERO,
            Some(&die),
        )
        .unwrap();
        // ceil(1000 / 3) = 334 sheets of 0.2 m2
        assert_eq!(cost.material, dec("334") * dec("0.2") * dec("10"));
    }

    #[test]
    fn laminated_adds_lamination_per_area() {
        let flat = FlatDimensions::new(dec("540"), dec("440"));
        let die = die_500x400(2, "3000");
        let cost = material_and_overhead(
            CartonType::Laminated,
            &flat,
            1000,
            dec("50"),
            dec("12"),
            Some(&die),
        )
        .unwrap();
        let total_area = dec("100");
        assert_eq!(
            cost.material,
            total_area * dec("50") + total_area * dec("12") + dec("3000")
        );
        assert_eq!(cost.overhead, cost.material * dec("0.15"));
    }

    #[test]
    fn diecut_without_die_fails() {
        let flat = FlatDimensions::new(dec("540"), dec("440"));
        let err = material_and_overhead(
            CartonType::Diecut,
            &flat,
            1000,
            dec("50"),
            Decimal::ZERO,
            None,
        )
        .unwrap_err();
        assert_eq!(err, CostingError::MissingDieDimensions);
    }

    #[test]
    fn diecut_with_unmeasured_die_fails() {
        let flat = FlatDimensions::new(dec("540"), dec("440"));
        let die = Die::new("unmeasured".to_string(), Decimal::ZERO, Decimal::ZERO);
        let err = material_and_overhead(
            CartonType::Laminated,
            &flat,
            1000,
            dec("50"),
            dec("12"),
            Some(&die),
        )
        .unwrap_err();
        assert_eq!(err, CostingError::MissingDieDimensions);
    }

    #[test]
    fn zero_cavities_treated_as_one() {
        let flat = FlatDimensions::new(dec("540"), dec("440"));
        let die = die_500x400(0, "0");
        let cost = material_and_overhead(
            CartonType::Diecut,
            &flat,
            10,
            dec("10"),
            Decimal::ZERO,
            Some(&die),
        )
        .unwrap();
        // one blank per sheet: 10 sheets of 0.2 m2
        assert_eq!(cost.material, dec("2") * dec("10"));
    }
}
