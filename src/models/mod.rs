pub mod admissions;
pub mod doctors;
pub mod patients;
pub mod stays;
