use std::time::Duration;

use anyhow::{Context, Result};

// ============================================================================
// Service Configuration
// ============================================================================
//
// Resolved once at startup from the environment. Whether a stub-bable
// capability (shipping, payment, email) is live or stubbed is decided here,
// as one BackendMode value per capability; call sites never consult the
// environment themselves.
//
// Variables:
// - PORT                          listen port (default 5050)
// - CART_SERVICE_ADDR             required
// - PRODUCT_CATALOG_SERVICE_ADDR  required
// - CURRENCY_SERVICE_ADDR         required
// - SHIPPING_SERVICE_ADDR         required unless SHIPPING_SVC_DISABLED
// - PAYMENT_SERVICE_ADDR          required unless PAYMENT_SVC_DISABLED
// - EMAIL_SERVICE_ADDR            required unless EMAIL_SVC_DISABLED
// - RPC_TIMEOUT_MS                per-call budget (default 10000)
// - RPC_CONNECT_TIMEOUT_MS        per-connect budget (default 3000)
//
// ============================================================================

pub const DEFAULT_PORT: u16 = 5050;
const DEFAULT_RPC_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 3_000;

/// Whether a backend capability is reached over the wire or answered with a
/// canned response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendMode {
    Live(String),
    Stubbed,
}

impl BackendMode {
    pub fn is_stubbed(&self) -> bool {
        matches!(self, BackendMode::Stubbed)
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_port: u16,
    pub cart_addr: String,
    pub product_catalog_addr: String,
    pub currency_addr: String,
    pub shipping: BackendMode,
    pub payment: BackendMode,
    pub email: BackendMode,
    /// Budget for a single backend call.
    pub rpc_timeout: Duration,
    /// Budget for establishing a backend connection.
    pub connect_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration through an injected lookup so tests can
    /// supply variables without touching process-global state.
    pub fn resolve<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_port = match non_empty(&lookup, "PORT") {
            Some(v) => v
                .parse()
                .with_context(|| format!("invalid PORT value {v:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            listen_port,
            cart_addr: required(&lookup, "CART_SERVICE_ADDR")?,
            product_catalog_addr: required(&lookup, "PRODUCT_CATALOG_SERVICE_ADDR")?,
            currency_addr: required(&lookup, "CURRENCY_SERVICE_ADDR")?,
            shipping: capability_mode(
                &lookup,
                "SHIPPING_SVC_DISABLED",
                "SHIPPING_SERVICE_ADDR",
            )?,
            payment: capability_mode(
                &lookup,
                "PAYMENT_SVC_DISABLED",
                "PAYMENT_SERVICE_ADDR",
            )?,
            email: capability_mode(&lookup, "EMAIL_SVC_DISABLED", "EMAIL_SERVICE_ADDR")?,
            rpc_timeout: duration_ms(&lookup, "RPC_TIMEOUT_MS", DEFAULT_RPC_TIMEOUT_MS)?,
            connect_timeout: duration_ms(
                &lookup,
                "RPC_CONNECT_TIMEOUT_MS",
                DEFAULT_CONNECT_TIMEOUT_MS,
            )?,
        })
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.is_empty())
}

fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, key).with_context(|| format!("environment variable {key} is not set"))
}

fn capability_mode<F>(lookup: &F, disabled_key: &str, addr_key: &str) -> Result<BackendMode>
where
    F: Fn(&str) -> Option<String>,
{
    if non_empty(lookup, disabled_key).is_some() {
        Ok(BackendMode::Stubbed)
    } else {
        Ok(BackendMode::Live(required(lookup, addr_key)?))
    }
}

fn duration_ms<F>(lookup: &F, key: &str, default_ms: u64) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let ms = match non_empty(lookup, key) {
        Some(v) => v
            .parse()
            .with_context(|| format!("invalid {key} value {v:?}"))?,
        None => default_ms,
    };
    Ok(Duration::from_millis(ms))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn base_pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            ("CART_SERVICE_ADDR", "cart:7070"),
            ("PRODUCT_CATALOG_SERVICE_ADDR", "catalog:3550"),
            ("CURRENCY_SERVICE_ADDR", "currency:7000"),
            ("SHIPPING_SERVICE_ADDR", "shipping:50051"),
            ("PAYMENT_SERVICE_ADDR", "payment:50051"),
            ("EMAIL_SERVICE_ADDR", "email:8080"),
        ]
    }

    #[test]
    fn test_resolves_all_live_with_defaults() {
        let cfg = Config::resolve(env(&base_pairs())).unwrap();
        assert_eq!(cfg.listen_port, DEFAULT_PORT);
        assert_eq!(cfg.cart_addr, "cart:7070");
        assert_eq!(cfg.shipping, BackendMode::Live("shipping:50051".to_string()));
        assert_eq!(cfg.payment, BackendMode::Live("payment:50051".to_string()));
        assert_eq!(cfg.email, BackendMode::Live("email:8080".to_string()));
        assert_eq!(cfg.rpc_timeout, Duration::from_millis(10_000));
        assert_eq!(cfg.connect_timeout, Duration::from_millis(3_000));
    }

    #[test]
    fn test_disabled_capability_needs_no_address() {
        let mut pairs = base_pairs();
        pairs.retain(|(k, _)| *k != "SHIPPING_SERVICE_ADDR");
        pairs.push(("SHIPPING_SVC_DISABLED", "1"));

        let cfg = Config::resolve(env(&pairs)).unwrap();
        assert!(cfg.shipping.is_stubbed());
        assert!(!cfg.payment.is_stubbed());
    }

    #[test]
    fn test_missing_required_address_is_an_error() {
        let mut pairs = base_pairs();
        pairs.retain(|(k, _)| *k != "CART_SERVICE_ADDR");

        let err = Config::resolve(env(&pairs)).unwrap_err();
        assert!(err.to_string().contains("CART_SERVICE_ADDR"));
    }

    #[test]
    fn test_empty_value_counts_as_unset() {
        let mut pairs = base_pairs();
        pairs.push(("PAYMENT_SVC_DISABLED", ""));

        let cfg = Config::resolve(env(&pairs)).unwrap();
        assert!(!cfg.payment.is_stubbed());
    }

    #[test]
    fn test_port_and_timeout_overrides() {
        let mut pairs = base_pairs();
        pairs.push(("PORT", "6060"));
        pairs.push(("RPC_TIMEOUT_MS", "250"));

        let cfg = Config::resolve(env(&pairs)).unwrap();
        assert_eq!(cfg.listen_port, 6060);
        assert_eq!(cfg.rpc_timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let mut pairs = base_pairs();
        pairs.push(("PORT", "not-a-port"));

        assert!(Config::resolve(env(&pairs)).is_err());
    }
}
