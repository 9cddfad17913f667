//! Domain logic for the college admissions service.
//!
//! Record validation, the duplicate guard, the grouping/sorting views and
//! the storage seam. No HTTP and no database driver code lives here.

pub mod aggregation;
pub mod application;
pub mod backup;
pub mod error;
pub mod guard;
pub mod store;
pub mod submission;
pub mod views;
