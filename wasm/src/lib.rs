//! WebAssembly module for the carton pricing platform
//!
//! Provides client-side computation for in-form previews:
//! - Flat footprint per carton type
//! - Industrial width suggestions
//! - Quick unit-price estimates
//!
//! The heavy lifting stays in `shared`; this crate only adapts it to
//! JavaScript-friendly signatures.

use rust_decimal::Decimal;
use uuid::Uuid;
use wasm_bindgen::prelude::*;

use shared::{
    flat_dimensions, suggest_widths, units::with_percent_markup, CartonType, CustomerProduct,
    FlatDimensions, FlowMode,
};

fn dec(value: f64) -> Decimal {
    Decimal::try_from(value).unwrap_or(Decimal::ZERO)
}

fn product_with_dimensions(
    carton_type: CartonType,
    length_cm: f64,
    width_cm: f64,
    height_cm: f64,
) -> CustomerProduct {
    let mut product = CustomerProduct::new(
        Uuid::new_v4(),
        String::new(),
        "preview".to_string(),
        carton_type,
    );
    product.length_cm = dec(length_cm);
    product.width_cm = dec(width_cm);
    product.height_cm = dec(height_cm);
    product
}

/// Preview the flat footprint from the product's outer dimensions (cm).
/// Returns a JSON object with `length_mm` and `width_mm`; zero values mean
/// the inputs were insufficient. Unknown carton types yield `{}`.
#[wasm_bindgen]
pub fn flat_dimensions_preview(
    carton_type: &str,
    length_cm: f64,
    width_cm: f64,
    height_cm: f64,
) -> String {
    let Some(carton_type) = CartonType::from_str(carton_type) else {
        return "{}".to_string();
    };
    let product = product_with_dimensions(carton_type, length_cm, width_cm, height_cm);

    // quick mode never fails; missing data comes back as a zero footprint
    let flat = flat_dimensions(carton_type, FlowMode::Quick, &product, None, None)
        .unwrap_or(FlatDimensions::ZERO);
    serde_json::to_string(&flat).unwrap_or_else(|_| "{}".to_string())
}

/// Preview the flat footprint of a die/blank outline (mm)
#[wasm_bindgen]
pub fn blank_flat_dimensions_preview(blank_length_mm: f64, blank_width_mm: f64) -> String {
    let product = product_with_dimensions(CartonType::Diecut, 0.0, 0.0, 0.0);
    let blank = (dec(blank_length_mm), dec(blank_width_mm));
    let blank = (blank.0 > Decimal::ZERO && blank.1 > Decimal::ZERO).then_some(blank);

    let flat = flat_dimensions(CartonType::Diecut, FlowMode::Quick, &product, None, blank)
        .unwrap_or(FlatDimensions::ZERO);
    serde_json::to_string(&flat).unwrap_or_else(|_| "{}".to_string())
}

/// Evaluate the industrial width catalog for a flat footprint (mm) and
/// quantity. Returns the layout plan as JSON.
#[wasm_bindgen]
pub fn suggest_widths_preview(flat_length_mm: f64, flat_width_mm: f64, quantity: u32) -> String {
    let footprint = FlatDimensions::new(dec(flat_length_mm), dec(flat_width_mm));
    let plan = suggest_widths(&footprint, i64::from(quantity));
    serde_json::to_string(&plan).unwrap_or_else(|_| "{}".to_string())
}

/// Quick unit-price estimate: base cost with margin and tax applied
#[wasm_bindgen]
pub fn quick_unit_price(base_cost: f64, margin_percent: f64, tax_percent: f64) -> f64 {
    let with_margin = with_percent_markup(dec(base_cost), dec(margin_percent));
    let with_tax = with_percent_markup(with_margin, dec(tax_percent));
    with_tax.to_string().parse().unwrap_or(0.0)
}
