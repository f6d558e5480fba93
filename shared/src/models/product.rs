//! Customer-specific carton and sheet product definitions

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Cliche;

/// Carton construction type, selects the unfolding and costing formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartonType {
    Normal,
    Diecut,
    Laminated,
    Sheet,
}

impl CartonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CartonType::Normal => "normal",
            CartonType::Diecut => "diecut",
            CartonType::Laminated => "laminated",
            CartonType::Sheet => "sheet",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(CartonType::Normal),
            "diecut" => Some(CartonType::Diecut),
            "laminated" => Some(CartonType::Laminated),
            "sheet" => Some(CartonType::Sheet),
            _ => None,
        }
    }

    /// Diecut and laminated cartons are cut from a die-defined blank
    pub fn uses_die(&self) -> bool {
        matches!(self, CartonType::Diecut | CartonType::Laminated)
    }
}

impl std::fmt::Display for CartonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartonType::Normal => write!(f, "Normal Carton"),
            CartonType::Diecut => write!(f, "Diecut Carton"),
            CartonType::Laminated => write!(f, "Laminated Carton"),
            CartonType::Sheet => write!(f, "Sheet"),
        }
    }
}

/// Corrugated board layer count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LayerCount {
    #[serde(rename = "3")]
    Three,
    #[default]
    #[serde(rename = "5")]
    Five,
}

/// Suggested flute profile for the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FluteStep {
    B,
    C,
    E,
    BC,
    BE,
}

/// How the carton body is pieced together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceType {
    OnePiece,
    HalfCarton,
    FourPiece,
}

/// Flap/door construction of the carton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorType {
    OpenUneven,
    Closed,
    Double,
}

/// Number of doors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoorCount {
    #[serde(rename = "1")]
    Single,
    #[serde(rename = "2")]
    Double,
}

/// Customer-specific product record (carton or sheet)
///
/// Owned by the record layer; the pricing engine receives it as a read-only
/// borrow, except for `has_been_produced` which the accept transition flips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProduct {
    pub id: Uuid,
    pub customer_id: Uuid,
    /// Customer display name, used for the derived display name
    pub customer_name: String,
    /// Internal product name, e.g. "5-layer diecut carton, 1.5L bottles"
    pub name: String,
    /// Internal tracking code, e.g. "CM-000123"
    pub code: Option<String>,
    pub carton_type: CartonType,

    /// Outer dimensions in centimeters; zero means not yet entered
    pub length_cm: Decimal,
    pub width_cm: Decimal,
    pub height_cm: Decimal,

    pub layer_count: LayerCount,
    pub flute_step: Option<FluteStep>,
    pub piece_type: Option<PieceType>,
    pub door_type: Option<DoorType>,
    pub door_count: Option<DoorCount>,

    pub has_print: bool,
    pub is_dimension_by_sample: bool,
    pub has_sample: bool,

    // Service defaults copied into new inquiries
    pub needs_new_cliche: bool,
    pub needs_staple: bool,
    pub needs_handle_hole: bool,
    pub needs_punch: bool,
    pub needs_pallet_wrap: bool,

    /// Flipped automatically after the first accepted order
    pub has_been_produced: bool,
    /// Usual order quantity for this customer, pre-filled on new inquiries
    pub default_quantity: i64,

    /// Sellable item representing this carton on sales orders
    pub sale_item_id: Option<Uuid>,
    pub die_id: Option<Uuid>,
    pub cliches: Vec<Cliche>,

    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CustomerProduct {
    pub fn new(customer_id: Uuid, customer_name: String, name: String, carton_type: CartonType) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            customer_name,
            name,
            code: None,
            carton_type,
            length_cm: Decimal::ZERO,
            width_cm: Decimal::ZERO,
            height_cm: Decimal::ZERO,
            layer_count: LayerCount::default(),
            flute_step: None,
            piece_type: None,
            door_type: None,
            door_count: None,
            has_print: false,
            is_dimension_by_sample: false,
            has_sample: false,
            needs_new_cliche: false,
            needs_staple: false,
            needs_handle_hole: false,
            needs_punch: false,
            needs_pallet_wrap: false,
            has_been_produced: false,
            default_quantity: 1000,
            sale_item_id: None,
            die_id: None,
            cliches: Vec::new(),
            note: None,
            created_at: Utc::now(),
        }
    }

    /// "customer - name [code]", skipping absent parts
    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();
        if !self.customer_name.is_empty() {
            parts.push(self.customer_name.clone());
        }
        if !self.name.is_empty() {
            parts.push(self.name.clone());
        }
        if let Some(code) = &self.code {
            parts.push(format!("[{}]", code));
        }
        if parts.is_empty() {
            self.name.clone()
        } else {
            parts.join(" - ")
        }
    }

    /// Cliches still in rotation for this product
    pub fn active_cliches(&self) -> impl Iterator<Item = &Cliche> {
        self.cliches.iter().filter(|c| c.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> CustomerProduct {
        CustomerProduct::new(
            Uuid::new_v4(),
            "Zamzam".to_string(),
            "1.5L bottle carton".to_string(),
            CartonType::Normal,
        )
    }

    #[test]
    fn display_name_joins_parts() {
        let mut p = product();
        p.code = Some("CM-000123".to_string());
        assert_eq!(p.display_name(), "Zamzam - 1.5L bottle carton - [CM-000123]");
    }

    #[test]
    fn display_name_skips_missing_code() {
        let p = product();
        assert_eq!(p.display_name(), "Zamzam - 1.5L bottle carton");
    }

    #[test]
    fn carton_type_round_trip() {
        for ct in [
            CartonType::Normal,
            CartonType::Diecut,
            CartonType::Laminated,
            CartonType::Sheet,
        ] {
            assert_eq!(CartonType::from_str(ct.as_str()), Some(ct));
        }
        assert_eq!(CartonType::from_str("corrugated"), None);
    }

    #[test]
    fn die_usage_by_type() {
        assert!(CartonType::Diecut.uses_die());
        assert!(CartonType::Laminated.uses_die());
        assert!(!CartonType::Normal.uses_die());
        assert!(!CartonType::Sheet.uses_die());
    }
}
