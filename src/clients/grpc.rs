use anyhow::{Context, Result};
use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};
use tonic::Status;

use super::{
    BackendError, CartClient, CatalogClient, CurrencyClient, EmailClient, PaymentClient,
    ShippingClient,
};
use crate::config::Config;
use crate::proto::cart_service_client::CartServiceClient;
use crate::proto::currency_service_client::CurrencyServiceClient;
use crate::proto::email_service_client::EmailServiceClient;
use crate::proto::payment_service_client::PaymentServiceClient;
use crate::proto::product_catalog_service_client::ProductCatalogServiceClient;
use crate::proto::shipping_service_client::ShippingServiceClient;
use crate::proto::{
    Address, CartItem, ChargeRequest, CreditCardInfo, CurrencyConversionRequest,
    EmptyCartRequest, GetCartRequest, GetProductRequest, GetQuoteRequest, Money,
    OrderResult, SendOrderConfirmationRequest, ShipOrderRequest,
};

// ============================================================================
// gRPC Client Implementations
// ============================================================================
//
// Each client owns one lazily connected channel to its destination, created
// at startup and reused across invocations. The connect and per-call
// budgets come from the configuration; a call that exceeds its budget fails
// the enclosing stage instead of blocking it.
//
// ============================================================================

fn channel(addr: &str, cfg: &Config) -> Result<Channel> {
    // Deployment addresses are host:port; tonic endpoints need a scheme.
    let uri = if addr.contains("://") {
        addr.to_string()
    } else {
        format!("http://{addr}")
    };

    let endpoint = Endpoint::from_shared(uri)
        .with_context(|| format!("invalid backend address {addr:?}"))?
        .connect_timeout(cfg.connect_timeout)
        .timeout(cfg.rpc_timeout);

    Ok(endpoint.connect_lazy())
}

pub struct GrpcCartClient {
    inner: CartServiceClient<Channel>,
}

impl GrpcCartClient {
    pub fn new(addr: &str, cfg: &Config) -> Result<Self> {
        Ok(Self {
            inner: CartServiceClient::new(channel(addr, cfg)?),
        })
    }
}

#[async_trait]
impl CartClient for GrpcCartClient {
    async fn get_cart(&self, user_id: &str) -> Result<Vec<CartItem>, BackendError> {
        let cart = self
            .inner
            .clone()
            .get_cart(GetCartRequest {
                user_id: user_id.to_string(),
            })
            .await
            .map_err(|status| BackendError::new("cart", status))?;
        Ok(cart.into_inner().items)
    }

    async fn empty_cart(&self, user_id: &str) -> Result<(), BackendError> {
        self.inner
            .clone()
            .empty_cart(EmptyCartRequest {
                user_id: user_id.to_string(),
            })
            .await
            .map_err(|status| BackendError::new("cart", status))?;
        Ok(())
    }
}

pub struct GrpcCatalogClient {
    inner: ProductCatalogServiceClient<Channel>,
}

impl GrpcCatalogClient {
    pub fn new(addr: &str, cfg: &Config) -> Result<Self> {
        Ok(Self {
            inner: ProductCatalogServiceClient::new(channel(addr, cfg)?),
        })
    }
}

#[async_trait]
impl CatalogClient for GrpcCatalogClient {
    async fn product_price(&self, product_id: &str) -> Result<Money, BackendError> {
        let product = self
            .inner
            .clone()
            .get_product(GetProductRequest {
                id: product_id.to_string(),
            })
            .await
            .map_err(|status| BackendError::new("product catalog", status))?
            .into_inner();

        product.price_usd.ok_or_else(|| {
            BackendError::new(
                "product catalog",
                Status::internal(format!("product {product_id:?} has no price")),
            )
        })
    }
}

pub struct GrpcCurrencyClient {
    inner: CurrencyServiceClient<Channel>,
}

impl GrpcCurrencyClient {
    pub fn new(addr: &str, cfg: &Config) -> Result<Self> {
        Ok(Self {
            inner: CurrencyServiceClient::new(channel(addr, cfg)?),
        })
    }
}

#[async_trait]
impl CurrencyClient for GrpcCurrencyClient {
    async fn convert(&self, from: Money, to_code: &str) -> Result<Money, BackendError> {
        let converted = self
            .inner
            .clone()
            .convert(CurrencyConversionRequest {
                from: Some(from),
                to_code: to_code.to_string(),
            })
            .await
            .map_err(|status| BackendError::new("currency", status))?;
        Ok(converted.into_inner())
    }
}

pub struct GrpcShippingClient {
    inner: ShippingServiceClient<Channel>,
}

impl GrpcShippingClient {
    pub fn new(addr: &str, cfg: &Config) -> Result<Self> {
        Ok(Self {
            inner: ShippingServiceClient::new(channel(addr, cfg)?),
        })
    }
}

#[async_trait]
impl ShippingClient for GrpcShippingClient {
    async fn get_quote(
        &self,
        address: &Address,
        items: &[CartItem],
    ) -> Result<Money, BackendError> {
        let quote = self
            .inner
            .clone()
            .get_quote(GetQuoteRequest {
                address: Some(address.clone()),
                items: items.to_vec(),
            })
            .await
            .map_err(|status| BackendError::new("shipping", status))?
            .into_inner();

        quote.cost_usd.ok_or_else(|| {
            BackendError::new("shipping", Status::internal("quote carries no cost"))
        })
    }

    async fn ship_order(
        &self,
        address: &Address,
        items: &[CartItem],
    ) -> Result<String, BackendError> {
        let shipped = self
            .inner
            .clone()
            .ship_order(ShipOrderRequest {
                address: Some(address.clone()),
                items: items.to_vec(),
            })
            .await
            .map_err(|status| BackendError::new("shipping", status))?;
        Ok(shipped.into_inner().tracking_id)
    }
}

pub struct GrpcPaymentClient {
    inner: PaymentServiceClient<Channel>,
}

impl GrpcPaymentClient {
    pub fn new(addr: &str, cfg: &Config) -> Result<Self> {
        Ok(Self {
            inner: PaymentServiceClient::new(channel(addr, cfg)?),
        })
    }
}

#[async_trait]
impl PaymentClient for GrpcPaymentClient {
    async fn charge(
        &self,
        amount: Money,
        card: CreditCardInfo,
    ) -> Result<String, BackendError> {
        let charged = self
            .inner
            .clone()
            .charge(ChargeRequest {
                amount: Some(amount),
                credit_card: Some(card),
            })
            .await
            .map_err(|status| BackendError::new("payment", status))?;
        Ok(charged.into_inner().transaction_id)
    }
}

pub struct GrpcEmailClient {
    inner: EmailServiceClient<Channel>,
}

impl GrpcEmailClient {
    pub fn new(addr: &str, cfg: &Config) -> Result<Self> {
        Ok(Self {
            inner: EmailServiceClient::new(channel(addr, cfg)?),
        })
    }
}

#[async_trait]
impl EmailClient for GrpcEmailClient {
    async fn send_confirmation(
        &self,
        email: &str,
        order: &OrderResult,
    ) -> Result<(), BackendError> {
        self.inner
            .clone()
            .send_order_confirmation(SendOrderConfirmationRequest {
                email: email.to_string(),
                order: Some(order.clone()),
            })
            .await
            .map_err(|status| BackendError::new("email", status))?;
        Ok(())
    }
}
