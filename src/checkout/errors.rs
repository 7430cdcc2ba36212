use tonic::Status;

use crate::clients::BackendError;
use crate::domain::money::MoneyError;

// ============================================================================
// Checkout Failure Taxonomy
// ============================================================================
//
// Every failure is classified by the stage it aborted in:
//
// - pre-charge stages (cart, pricing, conversion, quote) abort before any
//   money moves and surface as Internal;
// - a payment failure surfaces as Internal, nothing was charged;
// - a shipment failure occurs after a successful charge and surfaces as
//   Unavailable so operators can tell "paid but not shipped" apart and
//   reconcile manually — there is no automatic compensation;
// - money arithmetic and quantity violations are defects, surfaced as
//   Internal and never retried.
//
// Cart-clear and email failures never become a CheckoutError; they are
// logged at the call site and swallowed.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("cart failure: {0}")]
    Cart(BackendError),

    #[error("failed to prepare order items: {0}")]
    Pricing(BackendError),

    #[error("failed to convert currency: {0}")]
    CurrencyConversion(BackendError),

    #[error("shipping quote failure: {0}")]
    ShippingQuote(BackendError),

    #[error("failed to charge card: {0}")]
    Payment(BackendError),

    /// The charge already went through; the order is paid but not shipped.
    #[error("shipping error: {0}")]
    Shipment(BackendError),

    #[error("invalid quantity {quantity} for product {product_id:?}")]
    InvalidQuantity { product_id: String, quantity: i32 },

    #[error("order total computation failed: {0}")]
    Money(#[from] MoneyError),
}

impl CheckoutError {
    /// Stage label for logs and traces.
    pub fn stage(&self) -> &'static str {
        match self {
            CheckoutError::Cart(_) => "cart",
            CheckoutError::Pricing(_) => "pricing",
            CheckoutError::CurrencyConversion(_) => "currency_conversion",
            CheckoutError::ShippingQuote(_) => "shipping_quote",
            CheckoutError::Payment(_) => "payment",
            CheckoutError::Shipment(_) => "shipment",
            CheckoutError::InvalidQuantity { .. } => "pricing",
            CheckoutError::Money(_) => "total",
        }
    }
}

impl From<CheckoutError> for Status {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::Shipment(_) => Status::unavailable(err.to_string()),
            _ => Status::internal(err.to_string()),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
