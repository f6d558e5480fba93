//! Shared types and pure calculations for the carton pricing platform
//!
//! This crate contains the domain models and the pure pricing engine shared
//! between the backend services and the client-side preview (via WASM).

pub mod costing;
pub mod layout;
pub mod models;
pub mod pricing;
pub mod unfold;
pub mod units;
pub mod validation;

pub use costing::*;
pub use layout::*;
pub use models::*;
pub use pricing::*;
pub use unfold::*;
pub use validation::*;
