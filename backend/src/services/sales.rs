//! Sales order creation at the accept boundary
//!
//! Order fulfillment is outside this crate; the accept transition only needs
//! a sink that turns one accepted inquiry into one sales order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line of the sales order created from an accepted inquiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrderLine {
    pub item_id: Uuid,
    pub quantity: i64,
    /// Tax-inclusive unit price from the inquiry
    pub unit_price: Decimal,
    pub description: String,
}

/// Creates sales orders in the surrounding application.
/// Called at most once per inquiry; failures abort the accept transition.
pub trait SalesOrderSink {
    fn create_order(
        &mut self,
        customer_id: Uuid,
        lines: Vec<SalesOrderLine>,
    ) -> Result<Uuid, String>;
}

/// One recorded order
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSalesOrder {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub lines: Vec<SalesOrderLine>,
}

/// In-memory sink recording every created order
#[derive(Debug, Default)]
pub struct InMemorySalesOrders {
    pub orders: Vec<RecordedSalesOrder>,
}

impl SalesOrderSink for InMemorySalesOrders {
    fn create_order(
        &mut self,
        customer_id: Uuid,
        lines: Vec<SalesOrderLine>,
    ) -> Result<Uuid, String> {
        let id = Uuid::new_v4();
        self.orders.push(RecordedSalesOrder {
            id,
            customer_id,
            lines,
        });
        Ok(id)
    }
}

/// Always fails; exercises the abort path of the accept transition
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSalesOrders;

impl SalesOrderSink for FailingSalesOrders {
    fn create_order(&mut self, _: Uuid, _: Vec<SalesOrderLine>) -> Result<Uuid, String> {
        Err("sales order backend unavailable".to_string())
    }
}
