// ============================================================================
// Wire Protocol - Checkout and Backend Messages
// ============================================================================
//
// prost message types for the checkout surface and the six consumed backend
// capabilities (cart, product catalog, currency, shipping, payment, email).
// Field numbers match the public hipstershop demo protocol, so the generated
// clients interoperate with the real backend deployments.
//
// Service client/server glue is generated by build.rs (tonic_build::manual)
// and included at the bottom of this module.
//
// ============================================================================

pub mod health;

#[derive(Clone, PartialEq, prost::Message)]
pub struct Money {
    /// Three-letter currency code defined in ISO 4217.
    #[prost(string, tag = "1")]
    pub currency_code: String,
    /// Whole units of the amount.
    #[prost(int64, tag = "2")]
    pub units: i64,
    /// Number of nano (10^-9) units of the amount. Must be in the range
    /// -999_999_999..=999_999_999 and share the sign of `units` when both
    /// are non-zero.
    #[prost(int32, tag = "3")]
    pub nanos: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CartItem {
    #[prost(string, tag = "1")]
    pub product_id: String,
    #[prost(int32, tag = "2")]
    pub quantity: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Address {
    #[prost(string, tag = "1")]
    pub street_address: String,
    #[prost(string, tag = "2")]
    pub city: String,
    #[prost(string, tag = "3")]
    pub state: String,
    #[prost(string, tag = "4")]
    pub country: String,
    #[prost(int32, tag = "5")]
    pub zip_code: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreditCardInfo {
    #[prost(string, tag = "1")]
    pub credit_card_number: String,
    #[prost(int32, tag = "2")]
    pub credit_card_cvv: i32,
    #[prost(int32, tag = "3")]
    pub credit_card_expiration_year: i32,
    #[prost(int32, tag = "4")]
    pub credit_card_expiration_month: i32,
}

/// A cart item enriched with its per-unit price in the user's currency.
#[derive(Clone, PartialEq, prost::Message)]
pub struct OrderItem {
    #[prost(message, optional, tag = "1")]
    pub item: Option<CartItem>,
    #[prost(message, optional, tag = "2")]
    pub cost: Option<Money>,
}

/// Terminal artifact of a successfully placed order.
#[derive(Clone, PartialEq, prost::Message)]
pub struct OrderResult {
    #[prost(string, tag = "1")]
    pub order_id: String,
    #[prost(string, tag = "2")]
    pub shipping_tracking_id: String,
    #[prost(message, optional, tag = "3")]
    pub shipping_cost: Option<Money>,
    #[prost(message, optional, tag = "4")]
    pub shipping_address: Option<Address>,
    #[prost(message, repeated, tag = "5")]
    pub items: Vec<OrderItem>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PlaceOrderRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub user_currency: String,
    #[prost(message, optional, tag = "3")]
    pub address: Option<Address>,
    #[prost(string, tag = "5")]
    pub email: String,
    #[prost(message, optional, tag = "6")]
    pub credit_card: Option<CreditCardInfo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PlaceOrderResponse {
    #[prost(message, optional, tag = "1")]
    pub order: Option<OrderResult>,
}

// ============================================================================
// Backend Requests/Responses
// ============================================================================

#[derive(Clone, PartialEq, prost::Message)]
pub struct Empty {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetCartRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Cart {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(message, repeated, tag = "2")]
    pub items: Vec<CartItem>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct EmptyCartRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetProductRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

/// Catalog entry. The checkout path consumes only `price_usd`; the rest is
/// carried so the message stays wire-compatible with the catalog backend.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Product {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(string, tag = "4")]
    pub picture: String,
    #[prost(message, optional, tag = "5")]
    pub price_usd: Option<Money>,
    #[prost(string, repeated, tag = "6")]
    pub categories: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CurrencyConversionRequest {
    #[prost(message, optional, tag = "1")]
    pub from: Option<Money>,
    /// The 3-letter currency code to convert to.
    #[prost(string, tag = "2")]
    pub to_code: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetQuoteRequest {
    #[prost(message, optional, tag = "1")]
    pub address: Option<Address>,
    #[prost(message, repeated, tag = "2")]
    pub items: Vec<CartItem>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetQuoteResponse {
    #[prost(message, optional, tag = "1")]
    pub cost_usd: Option<Money>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShipOrderRequest {
    #[prost(message, optional, tag = "1")]
    pub address: Option<Address>,
    #[prost(message, repeated, tag = "2")]
    pub items: Vec<CartItem>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShipOrderResponse {
    #[prost(string, tag = "1")]
    pub tracking_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ChargeRequest {
    #[prost(message, optional, tag = "1")]
    pub amount: Option<Money>,
    #[prost(message, optional, tag = "2")]
    pub credit_card: Option<CreditCardInfo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ChargeResponse {
    #[prost(string, tag = "1")]
    pub transaction_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SendOrderConfirmationRequest {
    #[prost(string, tag = "1")]
    pub email: String,
    #[prost(message, optional, tag = "2")]
    pub order: Option<OrderResult>,
}

// ============================================================================
// Generated service traits + clients/servers
// ============================================================================

include!(concat!(env!("OUT_DIR"), "/hipstershop.CheckoutService.rs"));
include!(concat!(env!("OUT_DIR"), "/hipstershop.CartService.rs"));
include!(concat!(env!("OUT_DIR"), "/hipstershop.ProductCatalogService.rs"));
include!(concat!(env!("OUT_DIR"), "/hipstershop.CurrencyService.rs"));
include!(concat!(env!("OUT_DIR"), "/hipstershop.ShippingService.rs"));
include!(concat!(env!("OUT_DIR"), "/hipstershop.PaymentService.rs"));
include!(concat!(env!("OUT_DIR"), "/hipstershop.EmailService.rs"));
