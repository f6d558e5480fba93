//! Price inquiry workflow: compute, send, accept, reject
//!
//! The service is the only writer of an inquiry's state field. Every
//! transition validates against the state table first, runs the pure engine
//! on locals, and only commits to the record once nothing can fail anymore.
//! Notifications go out after the commit and never roll it back.

use shared::{
    flat_dimensions, material_and_overhead, price_summary, suggest_widths,
    validate_percent, validate_product_dimensions, validate_quantity, validate_unit_price,
    CustomerProduct, Die, FlowMode, InquiryAction, InquiryState, PriceInquiry,
};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::services::sub_quote;
use crate::services::{NotificationSink, SalesOrderLine, SalesOrderSink};

/// Inquiry workflow service wired to the sales-order and notification sinks
pub struct InquiryService<S, N>
where
    S: SalesOrderSink,
    N: NotificationSink,
{
    config: Config,
    sales: S,
    notifier: N,
}

impl<S, N> InquiryService<S, N>
where
    S: SalesOrderSink,
    N: NotificationSink,
{
    pub fn new(config: Config, sales: S, notifier: N) -> Self {
        Self {
            config,
            sales,
            notifier,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sales(&self) -> &S {
        &self.sales
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Draft a new inquiry for a product, seeding margins, tax and the paper
    /// price from the business configuration.
    pub fn draft_inquiry(&self, product: &CustomerProduct) -> PriceInquiry {
        let mut inquiry = PriceInquiry::for_product(product);
        inquiry.margin_cash_percent = self.config.pricing.margin_cash_percent;
        inquiry.margin_credit_percent = self.config.pricing.margin_credit_percent;
        inquiry.tax_percent = self.config.pricing.tax_percent;
        inquiry.paper_price_per_m2 = self.config.pricing.default_paper_price_per_m2;
        inquiry
    }

    /// Run the full computation pipeline: sub-quote gate, unfolding, width
    /// suggestions, costing and price aggregation.
    ///
    /// `die` is the record resolved from the inquiry's die override or the
    /// product's die, if any. On success the previous suggestion set is
    /// replaced wholesale and the state moves to calculated. On failure the
    /// inquiry is untouched, except that newly created sub-quotes and the
    /// waiting_quotes state persist.
    pub fn compute(
        &mut self,
        inquiry: &mut PriceInquiry,
        product: &CustomerProduct,
        die: Option<&Die>,
    ) -> AppResult<()> {
        guard(inquiry, InquiryAction::Compute)?;
        check_basic_inputs(inquiry, product)?;

        if inquiry.flow_mode == FlowMode::Full {
            let created = sub_quote::ensure_sub_quotes(inquiry);
            if !created.is_empty() {
                inquiry.state = InquiryState::WaitingQuotes;
                tracing::info!(
                    inquiry_id = %inquiry.id,
                    ?created,
                    "created required sub-quotes, waiting for answers"
                );
                self.notify(
                    inquiry,
                    "استعلام‌های جزئی (طراحی/چاپ/منگنه/پالت/حمل) برای این استعلام ایجاد شد.",
                    Some("هزینه‌های استعلام‌های جزئی را تکمیل کنید."),
                );
            }

            if inquiry.carton_type.uses_die() {
                let has_die_dims = die.map_or(false, Die::has_blade_dimensions);
                if !has_die_dims && inquiry.manual_blank_mm().is_none() {
                    return Err(AppError::MissingDieDimensions);
                }
            }

            if !sub_quote::all_required_ready(inquiry) {
                return Err(AppError::IncompleteSubQuotes);
            }
        }

        // Everything below works on locals; the record is committed in one
        // block once no step can fail anymore.
        let mut costs = inquiry.costs.clone();
        sub_quote::apply_sub_quote_costs(inquiry, &mut costs);

        let flat = flat_dimensions(
            inquiry.carton_type,
            inquiry.flow_mode,
            product,
            die,
            inquiry.manual_blank_mm(),
        )?;

        let plan = suggest_widths(&flat, inquiry.quantity);

        let material = material_and_overhead(
            inquiry.carton_type,
            &flat,
            inquiry.quantity,
            inquiry.paper_price_per_m2,
            inquiry.lamination_price_per_m2,
            die,
        )?;
        costs.material_cost_total = material.material;
        costs.overhead_cost_total = material.overhead;

        let summary = price_summary(
            &costs,
            inquiry.quantity,
            inquiry.payment_type,
            inquiry.margin_cash_percent,
            inquiry.margin_credit_percent,
            inquiry.tax_percent,
        )
        .ok_or(AppError::MissingInput("quantity"))?;

        inquiry.flat_length_mm = flat.length_mm;
        inquiry.flat_width_mm = flat.width_mm;
        inquiry.suggestions = plan.suggestions;
        if inquiry.industrial_width_cm.is_none() {
            inquiry.industrial_width_cm = plan.recommended_width_cm;
        }
        inquiry.costs = costs;
        inquiry.base_cost_per_carton = summary.base_cost_per_carton;
        inquiry.sale_price_cash = summary.sale_price_cash;
        inquiry.sale_price_credit = summary.sale_price_credit;
        inquiry.unit_price_with_tax = summary.unit_price_with_tax;
        inquiry.total_price_with_tax = summary.total_price_with_tax;
        inquiry.state = InquiryState::Calculated;

        tracing::info!(
            inquiry_id = %inquiry.id,
            unit_price = %inquiry.unit_price_with_tax,
            "inquiry computed"
        );
        self.notify(
            inquiry,
            "محاسبه استعلام قیمت انجام شد.",
            Some("نتیجه استعلام را بررسی کنید."),
        );
        Ok(())
    }

    /// Mark the quotation as sent to the customer. No recomputation.
    pub fn mark_sent(&mut self, inquiry: &mut PriceInquiry) -> AppResult<()> {
        guard(inquiry, InquiryAction::Send)?;

        inquiry.state = InquiryState::Sent;
        tracing::info!(inquiry_id = %inquiry.id, "inquiry sent to customer");
        self.notify(
            inquiry,
            "استعلام قیمت برای مشتری ارسال شد.",
            Some("پیگیری پاسخ مشتری برای استعلام قیمت."),
        );
        Ok(())
    }

    /// Customer accepted: create the sales order (exactly once), mark the
    /// product as produced, and close the inquiry.
    pub fn accept(
        &mut self,
        inquiry: &mut PriceInquiry,
        product: &mut CustomerProduct,
    ) -> AppResult<()> {
        guard(inquiry, InquiryAction::Accept)?;
        if product.id != inquiry.product_id {
            return Err(AppError::MissingInput("product"));
        }

        if inquiry.sale_order_id.is_none() {
            let item_id = product.sale_item_id.ok_or(AppError::MissingSellableItem)?;
            let line = SalesOrderLine {
                item_id,
                quantity: inquiry.quantity,
                unit_price: inquiry.unit_price_with_tax,
                description: product.display_name(),
            };
            let order_id = self
                .sales
                .create_order(inquiry.customer_id, vec![line])
                .map_err(AppError::ExternalService)?;
            inquiry.sale_order_id = Some(order_id);
        }

        if !product.has_been_produced {
            product.has_been_produced = true;
        }
        inquiry.state = InquiryState::Accepted;

        tracing::info!(
            inquiry_id = %inquiry.id,
            sale_order_id = ?inquiry.sale_order_id,
            "inquiry accepted"
        );
        self.notify(
            inquiry,
            "استعلام قیمت توسط مشتری تأیید شد و سفارش فروش ایجاد گردید.",
            Some("پیگیری اجرای سفارش فروش مربوط به این استعلام."),
        );
        Ok(())
    }

    /// Customer rejected the quotation.
    pub fn reject(&mut self, inquiry: &mut PriceInquiry, reason: Option<String>) -> AppResult<()> {
        guard(inquiry, InquiryAction::Reject)?;

        inquiry.rejection_reason = reason;
        inquiry.state = InquiryState::Rejected;

        tracing::info!(inquiry_id = %inquiry.id, "inquiry rejected");
        self.notify(
            inquiry,
            "استعلام قیمت رد شد.",
            Some("بررسی علت رد و برنامه‌ریزی تماس بعدی با مشتری."),
        );
        Ok(())
    }

    fn notify(&mut self, inquiry: &PriceInquiry, message: &str, reminder_summary: Option<&str>) {
        if let Err(err) = self.notifier.notify(inquiry.id, message, reminder_summary) {
            tracing::warn!(
                inquiry_id = %inquiry.id,
                error = %err,
                "notification sink failed, ignoring"
            );
        }
    }
}

/// Reject the action unless the state table permits it
fn guard(inquiry: &PriceInquiry, action: InquiryAction) -> AppResult<()> {
    if inquiry.state.permits(action) {
        Ok(())
    } else {
        Err(AppError::InvalidStateTransition(format!(
            "{:?} is not allowed from state {}",
            action, inquiry.state
        )))
    }
}

/// The inputs every computation needs, regardless of flow mode
fn check_basic_inputs(inquiry: &PriceInquiry, product: &CustomerProduct) -> AppResult<()> {
    if product.id != inquiry.product_id {
        return Err(AppError::MissingInput("product"));
    }
    if product.customer_id != inquiry.customer_id {
        return Err(AppError::MissingInput("customer"));
    }
    validate_quantity(inquiry.quantity).map_err(|_| AppError::MissingInput("quantity"))?;
    validate_product_dimensions(product).map_err(|_| AppError::MissingDimensions)?;
    validate_percent(inquiry.margin_cash_percent)
        .map_err(|_| AppError::MissingInput("margin_cash_percent"))?;
    validate_percent(inquiry.margin_credit_percent)
        .map_err(|_| AppError::MissingInput("margin_credit_percent"))?;
    validate_percent(inquiry.tax_percent).map_err(|_| AppError::MissingInput("tax_percent"))?;
    validate_unit_price(inquiry.paper_price_per_m2)
        .map_err(|_| AppError::MissingInput("paper_price_per_m2"))?;
    validate_unit_price(inquiry.lamination_price_per_m2)
        .map_err(|_| AppError::MissingInput("lamination_price_per_m2"))?;
    Ok(())
}
