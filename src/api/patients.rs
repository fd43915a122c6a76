use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::{bearer_token, BearerAuth};
use crate::errors::api::ApiError;
use crate::errors::store::StoreError;
use crate::services::AccessGuard;
use crate::stores::{PatientStore, ReportStore};
use crate::types::dto::patients::{PatientResponse, ReportResponse};

/// Patient directory and report lookup API
///
/// Every operation passes the access guard before touching a store.
pub struct PatientsApi {
    guard: Arc<AccessGuard>,
    patient_store: Arc<PatientStore>,
    report_store: Arc<ReportStore>,
}

impl PatientsApi {
    /// Create a new PatientsApi with the given guard and stores
    pub fn new(
        guard: Arc<AccessGuard>,
        patient_store: Arc<PatientStore>,
        report_store: Arc<ReportStore>,
    ) -> Self {
        Self {
            guard,
            patient_store,
            report_store,
        }
    }
}

/// API tags for patient endpoints
#[derive(Tags)]
enum PatientTags {
    /// Patient data endpoints
    Patients,
}

#[OpenApi]
impl PatientsApi {
    /// List every patient in storage order
    #[oai(path = "/patients", method = "get", tag = "PatientTags::Patients")]
    async fn list_patients(
        &self,
        auth: Option<BearerAuth>,
    ) -> Result<Json<Vec<PatientResponse>>, ApiError> {
        self.guard.authorize(&bearer_token(auth))?;

        let patients = self
            .patient_store
            .list_all()
            .await
            .map_err(|e| ApiError::internal_error(format!("Failed to list patients: {}", e)))?;

        Ok(Json(
            patients.into_iter().map(PatientResponse::from).collect(),
        ))
    }

    /// Fetch a single patient by id
    #[oai(path = "/patients/:id", method = "get", tag = "PatientTags::Patients")]
    async fn get_patient(
        &self,
        auth: Option<BearerAuth>,
        id: Path<i32>,
    ) -> Result<Json<PatientResponse>, ApiError> {
        self.guard.authorize(&bearer_token(auth))?;

        let patient = self
            .patient_store
            .find_by_id(id.0)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => ApiError::not_found("Patient not found"),
                other => ApiError::internal_error(format!("Failed to fetch patient: {}", other)),
            })?;

        Ok(Json(PatientResponse::from(patient)))
    }

    /// Fetch the free-text report for a patient
    #[oai(path = "/patients/:id/report", method = "get", tag = "PatientTags::Patients")]
    async fn get_patient_report(
        &self,
        auth: Option<BearerAuth>,
        id: Path<i32>,
    ) -> Result<Json<ReportResponse>, ApiError> {
        self.guard.authorize(&bearer_token(auth))?;

        let report = self
            .report_store
            .find_by_patient_id(id.0)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => ApiError::not_found("Report not found"),
                other => ApiError::internal_error(format!("Failed to fetch report: {}", other)),
            })?;

        Ok(Json(ReportResponse {
            summary: report.summary,
        }))
    }
}
