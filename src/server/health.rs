use tonic::{Request, Response, Status};

use crate::proto::health::health_server::Health;
use crate::proto::health::{HealthCheckRequest, HealthCheckResponse, ServingStatus};

// ============================================================================
// grpc.health.v1 Implementation
// ============================================================================
//
// Binary serving/not-serving report. The Watch variant is unsupported and
// reports Unimplemented immediately instead of holding the stream open.
//
// ============================================================================

pub struct HealthService;

#[tonic::async_trait]
impl Health for HealthService {
    type WatchStream = futures_util::stream::Empty<Result<HealthCheckResponse, Status>>;

    async fn check(
        &self,
        _request: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        Ok(Response::new(HealthCheckResponse {
            status: ServingStatus::Serving as i32,
        }))
    }

    async fn watch(
        &self,
        _request: Request<HealthCheckRequest>,
    ) -> Result<Response<Self::WatchStream>, Status> {
        Err(Status::unimplemented("health check via Watch not implemented"))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[tokio::test]
    async fn test_check_reports_serving() {
        let response = HealthService
            .check(Request::new(HealthCheckRequest::default()))
            .await
            .unwrap();
        assert_eq!(response.into_inner().status, ServingStatus::Serving as i32);
    }

    #[tokio::test]
    async fn test_watch_is_unimplemented() {
        let status = HealthService
            .watch(Request::new(HealthCheckRequest::default()))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::Unimplemented);
    }
}
