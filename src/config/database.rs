use mongodb::{Client, Collection};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

use crate::config::Settings;
use crate::types::db::patient;
use crate::types::doc::report::ReportDocument;

/// Connect to the relational store and make sure the patients table exists
pub async fn init_relational(settings: &Settings) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(&settings.database_url).await?;

    tracing::debug!("Connected to relational store: {}", settings.database_url);

    ensure_schema(&db).await?;

    Ok(db)
}

/// Create the patients table if it does not exist yet
///
/// Idempotent startup plumbing, not a migration system; there is no schema
/// versioning.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(patient::Entity);
    table.if_not_exists();

    db.execute(backend.build(&table)).await?;

    Ok(())
}

/// Connect to the document store and return the typed reports collection
pub async fn init_document_store(
    settings: &Settings,
) -> Result<Collection<ReportDocument>, mongodb::error::Error> {
    let client = Client::with_uri_str(&settings.mongo_url).await?;

    tracing::debug!("Connected to document store: {}", settings.mongo_url);

    Ok(client
        .database(&settings.mongo_database)
        .collection::<ReportDocument>("reports"))
}
