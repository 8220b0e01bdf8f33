//! Form definitions validated before their payload is submitted.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::validation::{ValidationErrors, ValidatorError};

pub mod auth;
pub mod catalog;
pub mod patient;
pub mod user;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid form definition: {0}")]
    Definition(#[from] ValidatorError),

    #[error("invalid value: {0}")]
    Constraint(#[from] TypeConstraintError),
}

impl FormError {
    /// Field messages when the failure came from validation rules.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            FormError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
