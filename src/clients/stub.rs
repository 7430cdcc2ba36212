use async_trait::async_trait;

use super::{BackendError, EmailClient, PaymentClient, ShippingClient};
use crate::proto::{Address, CartItem, CreditCardInfo, Money, OrderResult};

// ============================================================================
// Stub Clients for Disabled Capabilities
// ============================================================================
//
// A deployment/testing affordance: a capability configured as disabled is
// answered with a fixed canned response instead of a network call. The
// canned values match the ones the backend deployment contract documents
// for disabled services.
//
// ============================================================================

pub const STUB_TRACKING_ID: &str = "Mock_Tracking_ID";
pub const STUB_TRANSACTION_ID: &str = "Mock_Transaction_ID";

/// 5.00 in the canonical quote currency.
fn stub_quote() -> Money {
    Money {
        currency_code: "USD".to_string(),
        units: 5,
        nanos: 0,
    }
}

pub struct StubShippingClient;

#[async_trait]
impl ShippingClient for StubShippingClient {
    async fn get_quote(
        &self,
        _address: &Address,
        _items: &[CartItem],
    ) -> Result<Money, BackendError> {
        tracing::debug!("shipping stubbed, returning constant 5.00 USD quote");
        Ok(stub_quote())
    }

    async fn ship_order(
        &self,
        _address: &Address,
        _items: &[CartItem],
    ) -> Result<String, BackendError> {
        tracing::debug!(tracking_id = STUB_TRACKING_ID, "shipping stubbed");
        Ok(STUB_TRACKING_ID.to_string())
    }
}

pub struct StubPaymentClient;

#[async_trait]
impl PaymentClient for StubPaymentClient {
    async fn charge(
        &self,
        _amount: Money,
        _card: CreditCardInfo,
    ) -> Result<String, BackendError> {
        tracing::debug!(transaction_id = STUB_TRANSACTION_ID, "payment stubbed");
        Ok(STUB_TRANSACTION_ID.to_string())
    }
}

pub struct StubEmailClient;

#[async_trait]
impl EmailClient for StubEmailClient {
    async fn send_confirmation(
        &self,
        _email: &str,
        _order: &OrderResult,
    ) -> Result<(), BackendError> {
        tracing::debug!("email stubbed, skipping confirmation");
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address {
            street_address: "1600 Amphitheatre Pkwy".to_string(),
            city: "Mountain View".to_string(),
            state: "CA".to_string(),
            country: "USA".to_string(),
            zip_code: 94043,
        }
    }

    #[tokio::test]
    async fn test_stub_shipping_quote_is_five_usd() {
        let quote = StubShippingClient
            .get_quote(&address(), &[])
            .await
            .unwrap();
        assert_eq!(quote.currency_code, "USD");
        assert_eq!(quote.units, 5);
        assert_eq!(quote.nanos, 0);
    }

    #[tokio::test]
    async fn test_stub_shipping_tracking_id() {
        let tracking = StubShippingClient
            .ship_order(&address(), &[])
            .await
            .unwrap();
        assert_eq!(tracking, STUB_TRACKING_ID);
    }

    #[tokio::test]
    async fn test_stub_payment_transaction_id() {
        let tx = StubPaymentClient
            .charge(
                Money {
                    currency_code: "USD".to_string(),
                    units: 10,
                    nanos: 0,
                },
                CreditCardInfo::default(),
            )
            .await
            .unwrap();
        assert_eq!(tx, STUB_TRANSACTION_ID);
    }

    #[tokio::test]
    async fn test_stub_email_is_a_no_op() {
        let result = StubEmailClient
            .send_confirmation("someone@example.com", &OrderResult::default())
            .await;
        assert!(result.is_ok());
    }
}
