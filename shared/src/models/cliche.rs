//! Print cliches attached to a customer product

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which face of the carton the cliche prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintSide {
    Front,
    Back,
    Both,
}

/// One print cliche (plate) owned by a customer product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cliche {
    pub id: Uuid,
    /// e.g. "logo cliche", "face A cliche"
    pub name: String,
    /// e.g. "red + black"
    pub color: Option<String>,
    pub side: Option<PrintSide>,
    /// One-time cost of making the cliche
    pub cliche_cost: Decimal,
    /// Running print cost per 1000 units
    pub print_cost_per_1000: Decimal,
    /// Used for laminated print runs
    pub is_laminate: bool,
    pub active: bool,
}

impl Cliche {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            color: None,
            side: None,
            cliche_cost: Decimal::ZERO,
            print_cost_per_1000: Decimal::ZERO,
            is_laminate: false,
            active: true,
        }
    }
}
