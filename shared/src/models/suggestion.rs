//! Sheet layout suggestions per industrial width

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One evaluated industrial width: how many cartons fit per row and what the
/// cross-wise waste looks like. Children of a single inquiry, rebuilt
/// wholesale on every computation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetSuggestion {
    pub industrial_width_cm: Decimal,
    pub cartons_per_row: i64,
    pub waste_cm: Decimal,
    pub waste_percent: Decimal,
    /// Total running length of sheet needed for the full quantity
    pub total_length_cm: Decimal,
}
