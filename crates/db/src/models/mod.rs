//! Database row structs and insert DTOs.

pub mod application;
