use mongodb::bson::doc;
use mongodb::Collection;

use crate::errors::store::StoreError;
use crate::types::doc::report::ReportDocument;

/// Lookup over the reports collection in the document store
///
/// Reports are keyed by patient id equality only; whether the patient row
/// itself exists is never checked.
pub struct ReportStore {
    reports: Collection<ReportDocument>,
}

impl ReportStore {
    /// Create a new ReportStore over the given typed collection
    pub fn new(reports: Collection<ReportDocument>) -> Self {
        Self { reports }
    }

    /// Return the report whose patient_id matches the given id
    ///
    /// # Returns
    /// * `Ok(ReportDocument)` - The matching report
    /// * `Err(StoreError::NotFound)` - No report for this patient id
    pub async fn find_by_patient_id(&self, patient_id: i32) -> Result<ReportDocument, StoreError> {
        self.reports
            .find_one(doc! { "patient_id": patient_id }, None)
            .await?
            .ok_or(StoreError::NotFound)
    }

    /// Insert a report document (ETL path)
    pub async fn insert(&self, patient_id: i32, summary: String) -> Result<(), StoreError> {
        self.reports
            .insert_one(ReportDocument { patient_id, summary }, None)
            .await?;

        Ok(())
    }
}
