//! Carton Pricing Platform - Backend
//!
//! Library embedding the quoting workflow for customer-specific corrugated
//! cartons and sheets: flat footprint derivation, industrial width
//! suggestions, per-type costing, price aggregation, and the sub-quote-gated
//! inquiry state machine. Persistence, forms and fulfillment live in the
//! surrounding application, which talks to this crate synchronously.

pub mod config;
pub mod error;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult, ErrorDetail};
