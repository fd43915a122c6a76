// Relational entities (sea-orm)

pub mod patient;
