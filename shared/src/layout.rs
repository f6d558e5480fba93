//! Width suggestion optimizer: tile the flat footprint across the catalog of
//! industrial sheet widths and rank cross-wise waste.
//!
//! This is a 1-D cutting-stock heuristic. Each candidate width is evaluated
//! independently; there is no joint multi-width search and no 2-D nesting.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::SheetSuggestion;
use crate::unfold::FlatDimensions;
use crate::units::{ceil_div, mm_to_cm};

/// Standard raw-sheet widths suppliers can provide, centimeters
pub const INDUSTRIAL_WIDTHS_CM: [i64; 12] = [80, 90, 95, 100, 105, 110, 115, 120, 125, 130, 135, 140];

/// Margin kept on each side of the sheet, centimeters
pub const SHEET_SIDE_MARGIN_CM: i64 = 2;

/// All feasible width suggestions plus the width the engine would pick
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutPlan {
    /// One entry per feasible catalog width, in catalog order
    pub suggestions: Vec<SheetSuggestion>,
    /// Width with the lowest waste percent; ties go to the narrower width
    pub recommended_width_cm: Option<Decimal>,
}

/// Evaluate every industrial width for the given footprint and quantity.
///
/// Widths whose usable span cannot fit a single unit are skipped. A zero
/// footprint or non-positive quantity yields an empty plan.
pub fn suggest_widths(flat: &FlatDimensions, quantity: i64) -> LayoutPlan {
    let flat_width_cm = mm_to_cm(flat.width_mm);
    let flat_length_cm = mm_to_cm(flat.length_mm);

    if flat_width_cm <= Decimal::ZERO || flat_length_cm <= Decimal::ZERO || quantity <= 0 {
        return LayoutPlan::default();
    }

    let both_margins = Decimal::from(2 * SHEET_SIDE_MARGIN_CM);
    let mut suggestions = Vec::new();

    for width in INDUSTRIAL_WIDTHS_CM {
        let width_cm = Decimal::from(width);
        let usable_width = width_cm - both_margins;
        if usable_width <= Decimal::ZERO {
            continue;
        }

        let cartons_per_row = (usable_width / flat_width_cm)
            .floor()
            .to_i64()
            .unwrap_or(0);
        if cartons_per_row <= 0 {
            continue;
        }

        let used_width = Decimal::from(cartons_per_row) * flat_width_cm;
        let waste_cm = usable_width - used_width;
        let waste_percent = waste_cm / width_cm * Decimal::ONE_HUNDRED;

        let row_count = ceil_div(quantity, cartons_per_row);
        let total_length_cm = Decimal::from(row_count) * flat_length_cm;

        suggestions.push(SheetSuggestion {
            industrial_width_cm: width_cm,
            cartons_per_row,
            waste_cm,
            waste_percent,
            total_length_cm,
        });
    }

    let mut recommended: Option<&SheetSuggestion> = None;
    for suggestion in &suggestions {
        if recommended.map_or(true, |best| suggestion.waste_percent < best.waste_percent) {
            recommended = Some(suggestion);
        }
    }

    LayoutPlan {
        recommended_width_cm: recommended.map(|s| s.industrial_width_cm),
        suggestions,
    }
}
