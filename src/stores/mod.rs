// Stores layer - data access over the credential, relational and document backends

pub mod credential_store;
pub mod patient_store;
pub mod report_store;

pub use credential_store::CredentialStore;
pub use patient_store::PatientStore;
pub use report_store::ReportStore;
