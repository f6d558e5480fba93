//! Flat footprint derivation: how much sheet one unit occupies before folding

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{CartonType, CustomerProduct, Die, FlowMode};
use crate::units::cm_to_mm;

/// Margin kept on each side of the blank, millimeters
pub const SIDE_MARGIN_MM: i64 = 20;
/// Glue strip added along the unfolded perimeter of a normal carton
pub const GLUE_ALLOWANCE_MM: i64 = 40;
/// Clearance added to each top/bottom flap beyond half the carton width
pub const FLAP_CLEARANCE_MM: i64 = 10;

/// Flat (unfolded) footprint of one unit on the sheet, millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatDimensions {
    pub length_mm: Decimal,
    pub width_mm: Decimal,
}

impl FlatDimensions {
    pub const ZERO: FlatDimensions = FlatDimensions {
        length_mm: Decimal::ZERO,
        width_mm: Decimal::ZERO,
    };

    pub fn new(length_mm: Decimal, width_mm: Decimal) -> Self {
        Self { length_mm, width_mm }
    }

    /// Insufficient input data was mapped to an all-zero footprint
    pub fn is_zero(&self) -> bool {
        self.length_mm == Decimal::ZERO && self.width_mm == Decimal::ZERO
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UnfoldError {
    /// Full-flow diecut/laminated work without a finalized die or blank
    #[error("a die with blade-to-blade dimensions or a blank footprint must be finalized first")]
    MissingDieDimensions,
}

/// Derive the flat footprint for one unit.
///
/// Diecut and laminated blanks come from the die, then from manually entered
/// blank dimensions, and only in quick mode from the product's outer
/// length x width. Normal cartons unfold to the wrap-around perimeter plus
/// glue strip, with the top and bottom flaps folded out of the width. Sheets
/// are their own footprint. Incomplete product dimensions yield a zero
/// footprint rather than an error; the caller validates before costing.
pub fn flat_dimensions(
    carton_type: CartonType,
    flow_mode: FlowMode,
    product: &CustomerProduct,
    die: Option<&Die>,
    blank_mm: Option<(Decimal, Decimal)>,
) -> Result<FlatDimensions, UnfoldError> {
    let both_margins = Decimal::from(2 * SIDE_MARGIN_MM);

    match carton_type {
        CartonType::Diecut | CartonType::Laminated => {
            let base = die
                .filter(|d| d.has_blade_dimensions())
                .map(|d| (d.blade_length_mm, d.blade_width_mm))
                .or(blank_mm);

            let (base_length, base_width) = match base {
                Some(dims) => dims,
                None => {
                    if flow_mode == FlowMode::Full {
                        return Err(UnfoldError::MissingDieDimensions);
                    }
                    if product.length_cm <= Decimal::ZERO || product.width_cm <= Decimal::ZERO {
                        return Ok(FlatDimensions::ZERO);
                    }
                    (cm_to_mm(product.length_cm), cm_to_mm(product.width_cm))
                }
            };

            Ok(FlatDimensions::new(
                base_length + both_margins,
                base_width + both_margins,
            ))
        }

        CartonType::Normal => {
            let length = cm_to_mm(product.length_cm);
            let width = cm_to_mm(product.width_cm);
            let height = cm_to_mm(product.height_cm);

            if length <= Decimal::ZERO || width <= Decimal::ZERO || height <= Decimal::ZERO {
                return Ok(FlatDimensions::ZERO);
            }

            let flat_length = Decimal::TWO * (length + width)
                + Decimal::from(GLUE_ALLOWANCE_MM)
                + both_margins;

            // top and bottom flaps each fold out half the width plus clearance
            let flap = width / Decimal::TWO + Decimal::from(FLAP_CLEARANCE_MM);
            let flat_width = height + flap + flap + both_margins;

            Ok(FlatDimensions::new(flat_length, flat_width))
        }

        CartonType::Sheet => {
            let length = cm_to_mm(product.length_cm);
            let width = cm_to_mm(product.width_cm);

            if length <= Decimal::ZERO || width <= Decimal::ZERO {
                return Ok(FlatDimensions::ZERO);
            }

            Ok(FlatDimensions::new(
                length + both_margins,
                width + both_margins,
            ))
        }
    }
}
