//! Typed entry points for each family of API endpoints.
//!
//! CRUD resources are exposed as [`crate::resource::Resource`] handles; the
//! remaining endpoints are plain async functions taking the [`crate::client::ApiClient`].

pub mod absence;
pub mod analytics;
pub mod auth;
pub mod catalog;
pub mod clinic;
pub mod patient;
pub mod patient_arrival;
pub mod treatment;
pub mod user;

pub use crate::errors::{ApiError, ApiResult};
