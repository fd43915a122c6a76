use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use crate::errors::store::StoreError;
use crate::types::db::patient::{self, Entity as Patient};

/// Read-only directory over the relational patients table
///
/// The API never mutates patients; the single insert path exists for the
/// ETL binary.
pub struct PatientStore {
    db: DatabaseConnection,
}

impl PatientStore {
    /// Create a new PatientStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Return every patient in storage order
    pub async fn list_all(&self) -> Result<Vec<patient::Model>, StoreError> {
        Ok(Patient::find().all(&self.db).await?)
    }

    /// Return the patient matching the given id
    ///
    /// # Returns
    /// * `Ok(Model)` - The matching patient
    /// * `Err(StoreError::NotFound)` - No patient with this id
    pub async fn find_by_id(&self, id: i32) -> Result<patient::Model, StoreError> {
        Patient::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::NotFound)
    }

    /// Number of patients in the store
    pub async fn count(&self) -> Result<u64, StoreError> {
        Ok(Patient::find().count(&self.db).await?)
    }

    /// Insert a new patient and return its storage-assigned id
    pub async fn insert(
        &self,
        name: String,
        age: i32,
        diagnosis: String,
    ) -> Result<i32, StoreError> {
        let row = patient::ActiveModel {
            name: Set(name),
            age: Set(age),
            diagnosis: Set(diagnosis),
            ..Default::default()
        };

        let inserted = row.insert(&self.db).await?;
        Ok(inserted.id)
    }
}
