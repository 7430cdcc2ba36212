use std::sync::Arc;

use tonic::Status;
use uuid::Uuid;

use super::errors::CheckoutError;
use crate::clients::{BackendError, Backends};
use crate::domain::money;
use crate::proto::{Address, CartItem, CreditCardInfo, Money, OrderItem, OrderResult};

// ============================================================================
// Order Orchestrator
// ============================================================================
//
// One invocation = one logically sequential saga over the injected backend
// capabilities:
//
//   fresh order id
//   -> get cart -> price items -> quote shipping -> convert quote   (prepare)
//   -> exact total -> charge                                (point of no return)
//   -> ship -> empty cart (best-effort) -> email (best-effort)
//
// The orchestrator is stateless between invocations; everything it touches
// is request-local, so concurrent invocations share nothing in-process.
//
// ============================================================================

pub struct Orchestrator {
    backends: Backends,
}

/// A cart item joined with its per-unit price in the user's currency.
struct PricedItem {
    item: CartItem,
    cost: Money,
}

struct OrderPrep {
    cart_items: Vec<CartItem>,
    priced_items: Vec<PricedItem>,
    shipping_cost_localized: Money,
}

impl Orchestrator {
    pub fn new(backends: Backends) -> Self {
        Self { backends }
    }

    pub async fn place_order(
        &self,
        user_id: &str,
        user_currency: &str,
        address: Address,
        email: &str,
        credit_card: CreditCardInfo,
    ) -> Result<OrderResult, CheckoutError> {
        let order_id = Uuid::new_v4();
        tracing::info!(user_id, user_currency, order_id = %order_id, "placing order");

        let prep = self.prepare(user_id, user_currency, &address).await?;
        let total = order_total(user_currency, &prep)?;
        tracing::debug!(
            units = total.units,
            nanos = total.nanos,
            currency = %total.currency_code,
            "computed order total"
        );

        self.charge(total, credit_card).await?;

        let tracking_id = self
            .backends
            .shipping
            .ship_order(&address, &prep.cart_items)
            .await
            .map_err(CheckoutError::Shipment)?;

        // The order is placed and shipped; an un-emptied cart is a UX
        // defect, not a failure of the operation.
        if let Err(err) = self.backends.cart.empty_cart(user_id).await {
            tracing::warn!(user_id, error = %err, "failed to empty cart after checkout");
        }

        let order = OrderResult {
            order_id: order_id.to_string(),
            shipping_tracking_id: tracking_id,
            shipping_cost: Some(prep.shipping_cost_localized),
            shipping_address: Some(address),
            items: prep
                .priced_items
                .into_iter()
                .map(|priced| OrderItem {
                    item: Some(priced.item),
                    cost: Some(priced.cost),
                })
                .collect(),
        };

        match self.backends.email.send_confirmation(email, &order).await {
            Ok(()) => tracing::info!(email, "order confirmation email sent"),
            Err(err) => {
                tracing::warn!(email, error = %err, "failed to send order confirmation")
            }
        }

        Ok(order)
    }

    /// Everything that must succeed before any money is charged. An empty
    /// cart is not rejected; it proceeds with zero items.
    async fn prepare(
        &self,
        user_id: &str,
        user_currency: &str,
        address: &Address,
    ) -> Result<OrderPrep, CheckoutError> {
        let cart_items = self
            .backends
            .cart
            .get_cart(user_id)
            .await
            .map_err(CheckoutError::Cart)?;

        let priced_items = self.price_items(&cart_items, user_currency).await?;

        let quote = self
            .backends
            .shipping
            .get_quote(address, &cart_items)
            .await
            .map_err(CheckoutError::ShippingQuote)?;

        let shipping_cost_localized = self
            .backends
            .currency
            .convert(quote, user_currency)
            .await
            .map_err(CheckoutError::CurrencyConversion)?;

        Ok(OrderPrep {
            cart_items,
            priced_items,
            shipping_cost_localized,
        })
    }

    // Items are priced one after another; later stages consume only the
    // completed set.
    async fn price_items(
        &self,
        items: &[CartItem],
        user_currency: &str,
    ) -> Result<Vec<PricedItem>, CheckoutError> {
        let mut priced = Vec::with_capacity(items.len());
        for item in items {
            let catalog_price = self
                .backends
                .catalog
                .product_price(&item.product_id)
                .await
                .map_err(CheckoutError::Pricing)?;

            let cost = self
                .backends
                .currency
                .convert(catalog_price, user_currency)
                .await
                .map_err(CheckoutError::CurrencyConversion)?;

            priced.push(PricedItem {
                item: item.clone(),
                cost,
            });
        }
        Ok(priced)
    }

    /// The single point of no return. The charge runs on its own task so
    /// that a caller disconnect cannot abandon a dispatched charge before
    /// its outcome has been observed and logged.
    async fn charge(
        &self,
        amount: Money,
        credit_card: CreditCardInfo,
    ) -> Result<(), CheckoutError> {
        let payment = Arc::clone(&self.backends.payment);
        let dispatched = tokio::spawn(async move {
            let outcome = payment.charge(amount, credit_card).await;
            match &outcome {
                Ok(transaction_id) => {
                    tracing::info!(%transaction_id, "payment went through")
                }
                Err(err) => tracing::error!(error = %err, "payment charge failed"),
            }
            outcome
        });

        match dispatched.await {
            Ok(outcome) => {
                outcome.map_err(CheckoutError::Payment)?;
                Ok(())
            }
            Err(join_err) => Err(CheckoutError::Payment(BackendError::new(
                "payment",
                Status::internal(format!("charge task failed: {join_err}")),
            ))),
        }
    }
}

/// Exact grand total: zero in the user's currency, plus the localized
/// shipping cost, plus cost x quantity per item in cart order. All operands
/// are already denominated in the user's currency; a mismatch here is a
/// defect, not a runtime state.
fn order_total(user_currency: &str, prep: &OrderPrep) -> Result<Money, CheckoutError> {
    let mut total = money::sum(
        &money::zero(user_currency),
        &prep.shipping_cost_localized,
    )?;

    for priced in &prep.priced_items {
        let quantity = u32::try_from(priced.item.quantity)
            .ok()
            .filter(|quantity| *quantity > 0)
            .ok_or_else(|| CheckoutError::InvalidQuantity {
                product_id: priced.item.product_id.clone(),
                quantity: priced.item.quantity,
            })?;

        let line_total = money::multiply_slow(&priced.cost, quantity)?;
        total = money::sum(&total, &line_total)?;
    }

    Ok(total)
}

// ============================================================================
// Scenario Tests
// ============================================================================
