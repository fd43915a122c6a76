use sea_orm::DbErr;

/// Errors surfaced by the store layer, translated to HTTP at the API layer
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record matched the query
    #[error("record not found")]
    NotFound,

    /// Relational store failure
    #[error("database error: {0}")]
    Database(#[from] DbErr),

    /// Document store failure
    #[error("document store error: {0}")]
    DocumentStore(#[from] mongodb::error::Error),
}
