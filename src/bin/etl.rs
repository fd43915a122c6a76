// Flat-file ingestion: loads patients from a CSV into the relational store
// and writes one derived summary document per patient into the document store.

use serde::Deserialize;

use careview_backend::config::{self, logging, Settings};
use careview_backend::stores::{PatientStore, ReportStore};

#[derive(Debug, Deserialize)]
struct PatientRow {
    name: String,
    age: i32,
    diagnosis: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    logging::init_logging()?;

    let settings = Settings::from_env()?;

    let csv_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_patients.csv".to_string());

    let db = config::database::init_relational(&settings).await?;
    let reports = config::database::init_document_store(&settings).await?;

    let patient_store = PatientStore::new(db);
    let report_store = ReportStore::new(reports);

    let mut reader = csv::Reader::from_path(&csv_path)?;
    let mut loaded = 0usize;

    for row in reader.deserialize() {
        let row: PatientRow = row?;

        let patient_id = patient_store
            .insert(row.name.clone(), row.age, row.diagnosis.clone())
            .await?;

        let summary = format!("Patient {} has {}", row.name, row.diagnosis);
        report_store.insert(patient_id, summary).await?;

        loaded += 1;
    }

    tracing::info!("ETL finished: {} patients loaded from {}", loaded, csv_path);

    Ok(())
}
