use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::{bearer_token, BearerAuth};
use crate::errors::api::ApiError;
use crate::services::AccessGuard;
use crate::stores::PatientStore;
use crate::types::dto::patients::MetricsResponse;

/// Service metrics API
pub struct MetricsApi {
    guard: Arc<AccessGuard>,
    patient_store: Arc<PatientStore>,
}

impl MetricsApi {
    /// Create a new MetricsApi with the given guard and patient store
    pub fn new(guard: Arc<AccessGuard>, patient_store: Arc<PatientStore>) -> Self {
        Self {
            guard,
            patient_store,
        }
    }
}

/// API tags for metrics endpoints
#[derive(Tags)]
enum MetricsTags {
    /// Operational endpoints
    Metrics,
}

#[OpenApi]
impl MetricsApi {
    /// Service status and patient count
    #[oai(path = "/metrics", method = "get", tag = "MetricsTags::Metrics")]
    async fn metrics(&self, auth: Option<BearerAuth>) -> Result<Json<MetricsResponse>, ApiError> {
        self.guard.authorize(&bearer_token(auth))?;

        let total_patients = self
            .patient_store
            .count()
            .await
            .map_err(|e| ApiError::internal_error(format!("Failed to count patients: {}", e)))?;

        Ok(Json(MetricsResponse {
            api_status: "healthy".to_string(),
            total_patients,
        }))
    }
}
