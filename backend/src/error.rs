//! Error handling for the carton pricing backend
//!
//! Every variant is a user-facing, synchronous, non-retryable validation
//! failure. The UI layer surfaces the message verbatim; Farsi operator
//! messages ride alongside the English ones.

use serde::Serialize;
use thiserror::Error;

use shared::{CostingError, UnfoldError};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Customer, product or quantity absent or invalid
    #[error("missing or invalid input: {0}")]
    MissingInput(&'static str),

    /// Product physical dimensions absent for normal/sheet types
    #[error("product dimensions are incomplete")]
    MissingDimensions,

    /// Diecut/laminated work without a die or blank footprint
    #[error("a die with blade-to-blade dimensions or a blank footprint is required")]
    MissingDieDimensions,

    /// Full-flow computation attempted before all required sub-quotes resolved
    #[error("required sub-quotes are not yet resolved")]
    IncompleteSubQuotes,

    /// Accept attempted without a sellable item configured on the product
    #[error("no sellable item is linked to the customer product")]
    MissingSellableItem,

    /// Action attempted from a state that does not permit it
    #[error("invalid state transition: {0}")]
    InvalidStateTransition(String),

    /// Sales-order sink failure; aborts the accept transition
    #[error("external service error: {0}")]
    ExternalService(String),
}

/// Stable error payload the UI layer renders
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message_en: String,
    pub message_fa: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

impl AppError {
    pub fn detail(&self) -> ErrorDetail {
        match self {
            AppError::MissingInput(field) => ErrorDetail {
                code: "MISSING_INPUT",
                message_en: format!("Missing or invalid input: {}", field),
                message_fa: match *field {
                    "customer" => "لطفاً مشتری را انتخاب کنید.".to_string(),
                    "product" => "لطفاً محصول اختصاصی مشتری را انتخاب کنید.".to_string(),
                    "quantity" => "تیراژ باید بزرگ‌تر از صفر باشد.".to_string(),
                    other => format!("ورودی نامعتبر: {}", other),
                },
                field: Some(*field),
            },
            AppError::MissingDimensions => ErrorDetail {
                code: "MISSING_DIMENSIONS",
                message_en: "The product's length/width/height dimensions are incomplete. \
                             Enter the dimensions on the product form first."
                    .to_string(),
                message_fa: "برای محصول اختصاصی مشتری، ابعاد طول/عرض/ارتفاع تکمیل نشده است.\n\
                             لطفاً در فرم محصول، ابعاد را وارد کنید."
                    .to_string(),
                field: None,
            },
            AppError::MissingDieDimensions => ErrorDetail {
                code: "MISSING_DIE_DIMENSIONS",
                message_en: "Diecut/laminated cartons need a finalized die with blade-to-blade \
                             dimensions, or a manually entered blank footprint."
                    .to_string(),
                message_fa: "برای کارتن‌های دایکاتی/لمینتی باید ابتدا قالب با ابعاد تیغه به تیغه \
                             یا ابعاد بلنک (طول/عرض) تعریف شود."
                    .to_string(),
                field: None,
            },
            AppError::IncompleteSubQuotes => ErrorDetail {
                code: "INCOMPLETE_SUB_QUOTES",
                message_en: "Not all required sub-quotes (design/print/staple/pallet/shipping) \
                             have been answered. Complete and confirm their costs first."
                    .to_string(),
                message_fa: "تمامی استعلام‌های جزئی لازم (طراحی/چاپ/منگنه/پالت/حمل) هنوز پاسخ کامل ندارند.\n\
                             لطفاً هزینه‌ها را در فرم استعلام‌های جزئی تکمیل و تأیید کنید."
                    .to_string(),
                field: None,
            },
            AppError::MissingSellableItem => ErrorDetail {
                code: "MISSING_SELLABLE_ITEM",
                message_en: "No sellable item is configured for this customer product. \
                             Set the sale item on the product form first."
                    .to_string(),
                message_fa: "برای محصول اختصاصی مشتری، محصول فروش تعریف نشده است.\n\
                             لطفاً در فرم محصول اختصاصی، محصول فروش را مشخص کنید."
                    .to_string(),
                field: None,
            },
            AppError::InvalidStateTransition(msg) => ErrorDetail {
                code: "INVALID_STATE_TRANSITION",
                message_en: msg.clone(),
                message_fa: format!("تغییر وضعیت مجاز نیست: {}", msg),
                field: None,
            },
            AppError::ExternalService(msg) => ErrorDetail {
                code: "EXTERNAL_SERVICE_ERROR",
                message_en: format!("External service error: {}", msg),
                message_fa: format!("خطای سرویس خارجی: {}", msg),
                field: None,
            },
        }
    }
}

impl From<UnfoldError> for AppError {
    fn from(err: UnfoldError) -> Self {
        match err {
            UnfoldError::MissingDieDimensions => AppError::MissingDieDimensions,
        }
    }
}

impl From<CostingError> for AppError {
    fn from(err: CostingError) -> Self {
        match err {
            CostingError::MissingDieDimensions => AppError::MissingDieDimensions,
        }
    }
}

/// Result type alias for services
pub type AppResult<T> = Result<T, AppError>;
