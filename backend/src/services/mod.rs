//! Business logic services for carton pricing

pub mod inquiry;
pub mod notification;
pub mod sales;
pub mod sub_quote;

pub use inquiry::InquiryService;
pub use notification::{
    FailingNotifier, LoggingNotifier, NotificationSink, RecordingNotifier, SentNotification,
};
pub use sales::{
    FailingSalesOrders, InMemorySalesOrders, RecordedSalesOrder, SalesOrderLine, SalesOrderSink,
};
