use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{BackendMode, Config};
use crate::proto::{Address, CartItem, CreditCardInfo, Money, OrderResult};

// ============================================================================
// Backend Capability Clients
// ============================================================================
//
// One narrow trait per backend capability. The orchestrator receives these
// at construction and never manages connections itself; the gRPC
// implementations own a per-destination channel that is reused across
// invocations, and disabled capabilities are answered by stub
// implementations selected once from the configuration.
//
// ============================================================================

pub mod grpc;
pub mod stub;

/// Failure of a backend call, carrying the capability name and the
/// underlying status so operators can attribute the failure from logs.
#[derive(Debug, thiserror::Error)]
#[error("{service} call failed: {status}")]
pub struct BackendError {
    pub service: &'static str,
    pub status: tonic::Status,
}

impl BackendError {
    pub fn new(service: &'static str, status: tonic::Status) -> Self {
        Self { service, status }
    }
}

#[async_trait]
pub trait CartClient: Send + Sync {
    async fn get_cart(&self, user_id: &str) -> Result<Vec<CartItem>, BackendError>;
    async fn empty_cart(&self, user_id: &str) -> Result<(), BackendError>;
}

#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Per-unit price of the product, in the canonical catalog currency.
    async fn product_price(&self, product_id: &str) -> Result<Money, BackendError>;
}

#[async_trait]
pub trait CurrencyClient: Send + Sync {
    async fn convert(&self, from: Money, to_code: &str) -> Result<Money, BackendError>;
}

#[async_trait]
pub trait ShippingClient: Send + Sync {
    async fn get_quote(
        &self,
        address: &Address,
        items: &[CartItem],
    ) -> Result<Money, BackendError>;

    async fn ship_order(
        &self,
        address: &Address,
        items: &[CartItem],
    ) -> Result<String, BackendError>;
}

#[async_trait]
pub trait PaymentClient: Send + Sync {
    /// Charges the card and returns the transaction id.
    async fn charge(
        &self,
        amount: Money,
        card: CreditCardInfo,
    ) -> Result<String, BackendError>;
}

#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_confirmation(
        &self,
        email: &str,
        order: &OrderResult,
    ) -> Result<(), BackendError>;
}

/// The full set of backend capabilities the orchestrator depends on.
#[derive(Clone)]
pub struct Backends {
    pub cart: Arc<dyn CartClient>,
    pub catalog: Arc<dyn CatalogClient>,
    pub currency: Arc<dyn CurrencyClient>,
    pub shipping: Arc<dyn ShippingClient>,
    pub payment: Arc<dyn PaymentClient>,
    pub email: Arc<dyn EmailClient>,
}

/// Builds every capability client from the configuration, choosing the live
/// gRPC implementation or the canned stub per capability in one place.
pub fn from_config(cfg: &Config) -> anyhow::Result<Backends> {
    let shipping: Arc<dyn ShippingClient> = match &cfg.shipping {
        BackendMode::Live(addr) => Arc::new(grpc::GrpcShippingClient::new(addr, cfg)?),
        BackendMode::Stubbed => {
            tracing::info!("shipping capability disabled, answering with canned responses");
            Arc::new(stub::StubShippingClient)
        }
    };

    let payment: Arc<dyn PaymentClient> = match &cfg.payment {
        BackendMode::Live(addr) => Arc::new(grpc::GrpcPaymentClient::new(addr, cfg)?),
        BackendMode::Stubbed => {
            tracing::info!("payment capability disabled, answering with canned responses");
            Arc::new(stub::StubPaymentClient)
        }
    };

    let email: Arc<dyn EmailClient> = match &cfg.email {
        BackendMode::Live(addr) => Arc::new(grpc::GrpcEmailClient::new(addr, cfg)?),
        BackendMode::Stubbed => {
            tracing::info!("email capability disabled, skipping confirmations");
            Arc::new(stub::StubEmailClient)
        }
    };

    Ok(Backends {
        cart: Arc::new(grpc::GrpcCartClient::new(&cfg.cart_addr, cfg)?),
        catalog: Arc::new(grpc::GrpcCatalogClient::new(&cfg.product_catalog_addr, cfg)?),
        currency: Arc::new(grpc::GrpcCurrencyClient::new(&cfg.currency_addr, cfg)?),
        shipping,
        payment,
        email,
    })
}
