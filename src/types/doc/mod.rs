// Document-store models

pub mod report;
