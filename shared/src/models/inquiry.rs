//! Price inquiry aggregate and its workflow state machine

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CartonType, CustomerProduct, SheetSuggestion, SubQuote, SubQuoteKind};

/// Quick = direct formula, Full = gated by sub-quotes and die finalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FlowMode {
    #[default]
    Quick,
    Full,
}

impl FlowMode {
    /// Guess the flow from the product: simple or already-produced work with
    /// no extra services goes through the quick path, everything else is full.
    pub fn guess(product: &CustomerProduct, needs: &ServiceNeeds) -> Self {
        let simple_type = matches!(product.carton_type, CartonType::Normal | CartonType::Sheet);
        if (simple_type || product.has_been_produced) && !needs.any() {
            FlowMode::Quick
        } else {
            FlowMode::Full
        }
    }
}

/// Payment terms the quoted price is based on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    #[default]
    Cash,
    Credit,
}

/// Workflow state of a price inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InquiryState {
    #[default]
    Draft,
    WaitingQuotes,
    Calculated,
    Sent,
    Accepted,
    Rejected,
}

/// User-triggered transitions on an inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryAction {
    Compute,
    Send,
    Accept,
    Reject,
}

impl InquiryState {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryState::Draft => "draft",
            InquiryState::WaitingQuotes => "waiting_quotes",
            InquiryState::Calculated => "calculated",
            InquiryState::Sent => "sent",
            InquiryState::Accepted => "accepted",
            InquiryState::Rejected => "rejected",
        }
    }

    /// Accepted and rejected inquiries never transition again
    pub fn is_terminal(&self) -> bool {
        matches!(self, InquiryState::Accepted | InquiryState::Rejected)
    }

    /// Still on somebody's work queue
    pub fn is_pending(&self) -> bool {
        !self.is_terminal()
    }

    /// The legal (state, action) pairs. Everything not listed here is an
    /// invalid transition, including every action from a terminal state.
    pub fn permits(&self, action: InquiryAction) -> bool {
        use InquiryAction::*;
        use InquiryState::*;
        matches!(
            (self, action),
            (Draft | WaitingQuotes | Calculated, Compute)
                | (Calculated, Send)
                | (Sent, Accept)
                | (Sent, Reject)
        )
    }
}

impl std::fmt::Display for InquiryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which dependent estimates this inquiry needs before full-flow pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ServiceNeeds {
    pub design: bool,
    pub print: bool,
    pub staple: bool,
    pub punch: bool,
    pub pallet: bool,
    pub shipping: bool,
}

impl ServiceNeeds {
    /// The declarative kind -> need mapping the gate iterates once
    pub fn requires(&self, kind: SubQuoteKind) -> bool {
        match kind {
            SubQuoteKind::Design => self.design,
            SubQuoteKind::Print => self.print,
            SubQuoteKind::Staple => self.staple,
            SubQuoteKind::Punch => self.punch,
            SubQuoteKind::Pallet => self.pallet,
            SubQuoteKind::Shipping => self.shipping,
        }
    }

    pub fn any(&self) -> bool {
        SubQuoteKind::ALL.iter().any(|&k| self.requires(k))
    }

    /// Service needs derived from the product's defaults. Shipping is never
    /// assumed; the operator opts in per inquiry.
    pub fn defaults_for(product: &CustomerProduct) -> Self {
        Self {
            design: product.has_print && product.needs_new_cliche,
            print: product.has_print,
            staple: product.needs_staple,
            punch: product.needs_punch,
            pallet: product.needs_pallet_wrap,
            shipping: false,
        }
    }
}

/// All cost components that feed the per-carton base cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CostBreakdown {
    pub material_cost_total: Decimal,
    pub overhead_cost_total: Decimal,
    pub die_cost: Decimal,
    pub cliche_cost: Decimal,
    pub design_cost: Decimal,
    pub punch_cost_total: Decimal,
    pub pallet_wrap_cost_total: Decimal,
    pub shipping_cost: Decimal,
}

impl CostBreakdown {
    pub fn total(&self) -> Decimal {
        self.material_cost_total
            + self.overhead_cost_total
            + self.die_cost
            + self.cliche_cost
            + self.design_cost
            + self.punch_cost_total
            + self.pallet_wrap_cost_total
            + self.shipping_cost
    }
}

/// Central pricing aggregate: one quotation request for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceInquiry {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub product_id: Uuid,
    /// Copied from the product when the inquiry is drafted
    pub carton_type: CartonType,
    pub quantity: i64,
    pub flow_mode: FlowMode,

    /// Die override for this inquiry; falls back to the product's die
    pub die_id: Option<Uuid>,
    /// Blank footprint entered by hand after design, millimeters; zero
    /// means not entered
    pub blank_length_mm: Decimal,
    pub blank_width_mm: Decimal,

    pub needs: ServiceNeeds,
    pub sub_quotes: Vec<SubQuote>,

    /// Derived flat footprint of one unit, millimeters; rebuilt per compute
    pub flat_length_mm: Decimal,
    pub flat_width_mm: Decimal,

    /// Industrial width chosen by the operator or recommended by the engine
    pub industrial_width_cm: Option<Decimal>,
    pub suggestions: Vec<SheetSuggestion>,

    /// Combined paper price per square meter
    pub paper_price_per_m2: Decimal,
    /// Only used for laminated cartons
    pub lamination_price_per_m2: Decimal,

    pub costs: CostBreakdown,
    pub base_cost_per_carton: Decimal,

    pub payment_type: PaymentType,
    pub margin_cash_percent: Decimal,
    pub margin_credit_percent: Decimal,
    pub tax_percent: Decimal,

    pub sale_price_cash: Decimal,
    pub sale_price_credit: Decimal,
    pub unit_price_with_tax: Decimal,
    pub total_price_with_tax: Decimal,

    pub state: InquiryState,
    pub sale_order_id: Option<Uuid>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PriceInquiry {
    /// Draft inquiry pre-filled from the product: quantity, need flags and
    /// flow mode follow the product's defaults. Margins and tax are zero
    /// here; the caller seeds them from its configuration.
    pub fn for_product(product: &CustomerProduct) -> Self {
        let needs = ServiceNeeds::defaults_for(product);
        let quantity = if product.default_quantity > 0 {
            product.default_quantity
        } else {
            1000
        };
        Self {
            id: Uuid::new_v4(),
            customer_id: product.customer_id,
            product_id: product.id,
            carton_type: product.carton_type,
            quantity,
            flow_mode: FlowMode::guess(product, &needs),
            die_id: None,
            blank_length_mm: Decimal::ZERO,
            blank_width_mm: Decimal::ZERO,
            needs,
            sub_quotes: Vec::new(),
            flat_length_mm: Decimal::ZERO,
            flat_width_mm: Decimal::ZERO,
            industrial_width_cm: None,
            suggestions: Vec::new(),
            paper_price_per_m2: Decimal::ZERO,
            lamination_price_per_m2: Decimal::ZERO,
            costs: CostBreakdown::default(),
            base_cost_per_carton: Decimal::ZERO,
            payment_type: PaymentType::default(),
            margin_cash_percent: Decimal::ZERO,
            margin_credit_percent: Decimal::ZERO,
            tax_percent: Decimal::ZERO,
            sale_price_cash: Decimal::ZERO,
            sale_price_credit: Decimal::ZERO,
            unit_price_with_tax: Decimal::ZERO,
            total_price_with_tax: Decimal::ZERO,
            state: InquiryState::default(),
            sale_order_id: None,
            rejection_reason: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// Blank footprint entered by hand, if both sides are positive
    pub fn manual_blank_mm(&self) -> Option<(Decimal, Decimal)> {
        if self.blank_length_mm > Decimal::ZERO && self.blank_width_mm > Decimal::ZERO {
            Some((self.blank_length_mm, self.blank_width_mm))
        } else {
            None
        }
    }

    pub fn sub_quote(&self, kind: SubQuoteKind) -> Option<&SubQuote> {
        self.sub_quotes.iter().find(|sq| sq.kind == kind)
    }

    pub fn sub_quote_mut(&mut self, kind: SubQuoteKind) -> Option<&mut SubQuote> {
        self.sub_quotes.iter_mut().find(|sq| sq.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(carton_type: CartonType) -> CustomerProduct {
        CustomerProduct::new(
            Uuid::new_v4(),
            "Golrang".to_string(),
            "detergent carton".to_string(),
            carton_type,
        )
    }

    #[test]
    fn transition_table_permits_expected_pairs() {
        use InquiryAction::*;
        use InquiryState::*;

        assert!(Draft.permits(Compute));
        assert!(WaitingQuotes.permits(Compute));
        assert!(Calculated.permits(Compute));
        assert!(Calculated.permits(Send));
        assert!(Sent.permits(Accept));
        assert!(Sent.permits(Reject));

        assert!(!Draft.permits(Accept));
        assert!(!Draft.permits(Send));
        assert!(!Sent.permits(Compute));
        for action in [Compute, Send, Accept, Reject] {
            assert!(!Accepted.permits(action));
            assert!(!Rejected.permits(action));
        }
    }

    #[test]
    fn pending_states() {
        assert!(InquiryState::Draft.is_pending());
        assert!(InquiryState::Sent.is_pending());
        assert!(!InquiryState::Accepted.is_pending());
        assert!(!InquiryState::Rejected.is_pending());
    }

    #[test]
    fn flow_mode_guess_simple_product() {
        let p = product(CartonType::Sheet);
        let needs = ServiceNeeds::defaults_for(&p);
        assert_eq!(FlowMode::guess(&p, &needs), FlowMode::Quick);
    }

    #[test]
    fn flow_mode_guess_diecut_is_full() {
        let p = product(CartonType::Diecut);
        let needs = ServiceNeeds::defaults_for(&p);
        assert_eq!(FlowMode::guess(&p, &needs), FlowMode::Full);
    }

    #[test]
    fn flow_mode_guess_produced_diecut_without_services_is_quick() {
        let mut p = product(CartonType::Diecut);
        p.has_been_produced = true;
        let needs = ServiceNeeds::defaults_for(&p);
        assert_eq!(FlowMode::guess(&p, &needs), FlowMode::Quick);
    }

    #[test]
    fn flow_mode_guess_services_force_full() {
        let mut p = product(CartonType::Normal);
        p.has_print = true;
        let needs = ServiceNeeds::defaults_for(&p);
        assert!(needs.print);
        assert_eq!(FlowMode::guess(&p, &needs), FlowMode::Full);
    }

    #[test]
    fn needs_defaults_follow_product_flags() {
        let mut p = product(CartonType::Normal);
        p.has_print = true;
        p.needs_new_cliche = true;
        p.needs_staple = true;
        let needs = ServiceNeeds::defaults_for(&p);
        assert!(needs.design);
        assert!(needs.print);
        assert!(needs.staple);
        assert!(!needs.punch);
        assert!(!needs.shipping, "shipping is opt-in per inquiry");
    }

    #[test]
    fn draft_inquiry_takes_product_defaults() {
        let mut p = product(CartonType::Normal);
        p.default_quantity = 5000;
        let inquiry = PriceInquiry::for_product(&p);
        assert_eq!(inquiry.quantity, 5000);
        assert_eq!(inquiry.carton_type, CartonType::Normal);
        assert_eq!(inquiry.state, InquiryState::Draft);
        assert!(inquiry.sub_quotes.is_empty());
    }

    #[test]
    fn manual_blank_requires_both_sides() {
        let p = product(CartonType::Diecut);
        let mut inquiry = PriceInquiry::for_product(&p);
        assert_eq!(inquiry.manual_blank_mm(), None);
        inquiry.blank_length_mm = Decimal::from(520);
        assert_eq!(inquiry.manual_blank_mm(), None);
        inquiry.blank_width_mm = Decimal::from(420);
        assert_eq!(
            inquiry.manual_blank_mm(),
            Some((Decimal::from(520), Decimal::from(420)))
        );
    }

    #[test]
    fn cost_breakdown_total_sums_all_components() {
        let costs = CostBreakdown {
            material_cost_total: Decimal::from(100),
            overhead_cost_total: Decimal::from(10),
            die_cost: Decimal::from(5),
            cliche_cost: Decimal::from(5),
            design_cost: Decimal::from(5),
            punch_cost_total: Decimal::from(3),
            pallet_wrap_cost_total: Decimal::from(2),
            shipping_cost: Decimal::from(20),
        };
        assert_eq!(costs.total(), Decimal::from(150));
    }
}
