pub mod absence;
pub mod analytics;
pub mod auth;
pub mod catalog;
pub mod clinic;
pub mod patient;
pub mod patient_arrival;
pub mod treatment;
pub mod types;
pub mod user;
