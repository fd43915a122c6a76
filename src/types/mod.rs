// Type definitions - database entities, document models, DTOs and internals

pub mod db;
pub mod doc;
pub mod dto;
pub mod internal;
