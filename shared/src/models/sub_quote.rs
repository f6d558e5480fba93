//! Dependent sub-estimates gathered for the full inquiry flow

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Service a sub-quote covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubQuoteKind {
    Design,
    Print,
    Staple,
    Punch,
    Pallet,
    Shipping,
}

impl SubQuoteKind {
    /// All kinds, in the order they are reconciled against the need flags
    pub const ALL: [SubQuoteKind; 6] = [
        SubQuoteKind::Design,
        SubQuoteKind::Print,
        SubQuoteKind::Staple,
        SubQuoteKind::Punch,
        SubQuoteKind::Pallet,
        SubQuoteKind::Shipping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubQuoteKind::Design => "design",
            SubQuoteKind::Print => "print",
            SubQuoteKind::Staple => "staple",
            SubQuoteKind::Punch => "punch",
            SubQuoteKind::Pallet => "pallet",
            SubQuoteKind::Shipping => "shipping",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "design" => Some(SubQuoteKind::Design),
            "print" => Some(SubQuoteKind::Print),
            "staple" => Some(SubQuoteKind::Staple),
            "punch" => Some(SubQuoteKind::Punch),
            "pallet" => Some(SubQuoteKind::Pallet),
            "shipping" => Some(SubQuoteKind::Shipping),
            _ => None,
        }
    }
}

impl std::fmt::Display for SubQuoteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a single sub-quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubQuoteState {
    #[default]
    Draft,
    Sent,
    Received,
    Approved,
}

impl SubQuoteState {
    /// A supplier answer is on file
    pub fn is_resolved(&self) -> bool {
        matches!(self, SubQuoteState::Received | SubQuoteState::Approved)
    }
}

/// One dependent estimate (design / print / staple / punch / pallet / shipping)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubQuote {
    pub id: Uuid,
    pub kind: SubQuoteKind,
    pub required: bool,
    /// Supplier the estimate was requested from
    pub supplier_id: Option<Uuid>,
    pub estimated_cost: Decimal,
    pub state: SubQuoteState,
    pub note: Option<String>,
}

impl SubQuote {
    pub fn new(kind: SubQuoteKind, required: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            required,
            supplier_id: None,
            estimated_cost: Decimal::ZERO,
            state: SubQuoteState::default(),
            note: None,
        }
    }

    /// Resolved with a positive cost, i.e. usable for the readiness gate
    pub fn is_satisfied(&self) -> bool {
        self.state.is_resolved() && self.estimated_cost > Decimal::ZERO
    }
}
