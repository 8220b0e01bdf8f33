//! Typed client layer of the clinic management application.
//!
//! The `data` feature builds the transport-free part: domain records, forms
//! and their validation, query and date helpers. The `client` feature adds
//! the async REST client, the session and the per-resource services.

pub mod dates;
pub mod domain;
pub mod forms;
pub mod pagination;
pub mod query;
pub mod validation;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "client")]
pub mod debounce;
#[cfg(feature = "client")]
pub mod error_conversions;
#[cfg(feature = "client")]
pub mod errors;
#[cfg(all(feature = "client", any(test, feature = "test-mocks")))]
pub mod mock;
#[cfg(feature = "client")]
pub mod models;
#[cfg(feature = "client")]
pub mod notify;
#[cfg(feature = "client")]
pub mod resource;
#[cfg(feature = "client")]
pub mod services;
#[cfg(feature = "client")]
pub mod session;
