//! Runtime configuration of the API client.

pub mod config;
