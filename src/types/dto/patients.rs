use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::patient;

/// Patient record as returned by the API
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct PatientResponse {
    /// Storage-assigned patient id
    pub id: i32,

    /// Full name
    pub name: String,

    /// Age in years
    pub age: i32,

    /// Primary diagnosis
    pub diagnosis: String,
}

impl From<patient::Model> for PatientResponse {
    fn from(model: patient::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            age: model.age,
            diagnosis: model.diagnosis,
        }
    }
}

/// Response model for a patient report
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ReportResponse {
    /// Free-text summary for the patient
    pub summary: String,
}

/// Response model for the metrics endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct MetricsResponse {
    /// Service status indicator
    pub api_status: String,

    /// Number of patients in the relational store
    pub total_patients: u64,
}
