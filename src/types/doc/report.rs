use serde::{Deserialize, Serialize};

/// Report document stored in the `reports` collection
///
/// `patient_id` references a patient by convention only; the document store
/// enforces no relationship with the relational side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    pub patient_id: i32,
    pub summary: String,
}
