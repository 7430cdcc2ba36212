use std::net::SocketAddr;
use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::checkout::Orchestrator;
use crate::proto::checkout_service_server::{CheckoutService, CheckoutServiceServer};
use crate::proto::health::health_server::HealthServer;
use crate::proto::{Address, CreditCardInfo, PlaceOrderRequest, PlaceOrderResponse};

// ============================================================================
// gRPC Surface
// ============================================================================

pub mod health;

pub struct CheckoutGrpc {
    orchestrator: Arc<Orchestrator>,
}

impl CheckoutGrpc {
    pub fn new(orchestrator: Arc<Orchestrator>) -> Self {
        Self { orchestrator }
    }

    fn validate(req: &PlaceOrderRequest) -> Result<(Address, CreditCardInfo), Status> {
        let address = req
            .address
            .clone()
            .ok_or_else(|| Status::invalid_argument("shipping address is required"))?;
        let credit_card = req
            .credit_card
            .clone()
            .ok_or_else(|| Status::invalid_argument("credit card info is required"))?;
        Ok((address, credit_card))
    }
}

#[tonic::async_trait]
impl CheckoutService for CheckoutGrpc {
    async fn place_order(
        &self,
        request: Request<PlaceOrderRequest>,
    ) -> Result<Response<PlaceOrderResponse>, Status> {
        let req = request.into_inner();
        let (address, credit_card) = Self::validate(&req)?;

        let order = self
            .orchestrator
            .place_order(
                &req.user_id,
                &req.user_currency,
                address,
                &req.email,
                credit_card,
            )
            .await
            .map_err(|err| {
                tracing::error!(
                    user_id = %req.user_id,
                    stage = err.stage(),
                    error = %err,
                    "order failed"
                );
                Status::from(err)
            })?;

        Ok(Response::new(PlaceOrderResponse { order: Some(order) }))
    }
}

/// Binds the checkout and health services and serves until shutdown.
pub async fn serve(orchestrator: Arc<Orchestrator>, port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "checkout gRPC server listening");

    tonic::transport::Server::builder()
        .add_service(CheckoutServiceServer::new(CheckoutGrpc::new(orchestrator)))
        .add_service(HealthServer::new(health::HealthService))
        .serve(addr)
        .await?;

    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
