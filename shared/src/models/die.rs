//! Diecut / lamination die records

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A physical cutting die, shared across inquiries and products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Die {
    pub id: Uuid,
    pub name: String,
    pub code: Option<String>,
    /// Die maker / print house
    pub maker_id: Option<Uuid>,
    /// Product this die was originally built for
    pub product_id: Option<Uuid>,

    /// Blade-to-blade outline of one blank, millimeters
    pub blade_length_mm: Decimal,
    pub blade_width_mm: Decimal,

    /// Number of blanks cut per sheet pass; stored values below 1 are
    /// treated as a single cavity
    pub cavities_per_sheet: i64,

    pub has_lamination: bool,
    /// One-time cost of building the die
    pub die_cost: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Die {
    pub fn new(name: String, blade_length_mm: Decimal, blade_width_mm: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            code: None,
            maker_id: None,
            product_id: None,
            blade_length_mm,
            blade_width_mm,
            cavities_per_sheet: 1,
            has_lamination: false,
            die_cost: Decimal::ZERO,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Whether both blade dimensions have been measured
    pub fn has_blade_dimensions(&self) -> bool {
        self.blade_length_mm > Decimal::ZERO && self.blade_width_mm > Decimal::ZERO
    }

    /// Cavity count clamped to at least one
    pub fn effective_cavities(&self) -> i64 {
        self.cavities_per_sheet.max(1)
    }
}
