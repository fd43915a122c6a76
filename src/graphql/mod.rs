// GraphQL surface - read-only mirror of the REST patient list

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema, SimpleObject};
use std::sync::Arc;

use crate::stores::PatientStore;
use crate::types::db::patient;

/// Patient record as exposed over GraphQL
#[derive(SimpleObject)]
pub struct PatientType {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub diagnosis: String,
}

impl From<patient::Model> for PatientType {
    fn from(model: patient::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            age: model.age,
            diagnosis: model.diagnosis,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All patients, in storage order
    ///
    /// This path carries no bearer check, mirroring the original service
    /// surface; the REST equivalent is guarded.
    async fn patients(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<PatientType>> {
        let store = ctx.data::<Arc<PatientStore>>()?;

        let patients = store.list_all().await?;
        Ok(patients.into_iter().map(PatientType::from).collect())
    }
}

pub type PatientsSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the GraphQL schema with the patient store injected as context data
pub fn build_schema(patient_store: Arc<PatientStore>) -> PatientsSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(patient_store)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Database;

    use crate::config::database::ensure_schema;

    async fn setup_schema() -> (Arc<PatientStore>, PatientsSchema) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");
        ensure_schema(&db).await.expect("Failed to create schema");

        let store = Arc::new(PatientStore::new(db));
        let schema = build_schema(store.clone());
        (store, schema)
    }

    #[tokio::test]
    async fn test_patients_query_returns_rows_without_auth() {
        let (store, schema) = setup_schema().await;

        store
            .insert("Alice Morgan".to_string(), 34, "Hypertension".to_string())
            .await
            .unwrap();

        let response = schema
            .execute("{ patients { id name age diagnosis } }")
            .await;

        assert!(response.errors.is_empty());

        let data = response.data.into_json().unwrap();
        let patients = data["patients"].as_array().unwrap();
        assert_eq!(patients.len(), 1);
        assert_eq!(patients[0]["name"], "Alice Morgan");
        assert_eq!(patients[0]["age"], 34);
    }

    #[tokio::test]
    async fn test_patients_query_returns_empty_list() {
        let (_store, schema) = setup_schema().await;

        let response = schema.execute("{ patients { id } }").await;

        assert!(response.errors.is_empty());
        let data = response.data.into_json().unwrap();
        assert_eq!(data["patients"].as_array().unwrap().len(), 0);
    }
}
