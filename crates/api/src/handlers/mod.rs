pub mod applicants;
pub mod applications;
pub mod backup;
pub mod colleges;
