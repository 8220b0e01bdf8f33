//! Conversions from the transport-free error types into [`ApiError`].
//!
//! The `data` layer does not know about the client; these impls let client
//! code use `?` on form, query and date helpers.

use crate::dates::DateError;
use crate::domain::types::TypeConstraintError;
use crate::errors::ApiError;
use crate::forms::FormError;
use crate::query::QueryError;
use crate::session::TokenStoreError;
use crate::validation::{ValidationErrors, ValidatorError};

impl From<ValidationErrors> for ApiError {
    fn from(val: ValidationErrors) -> Self {
        ApiError::Validation(val)
    }
}

impl From<FormError> for ApiError {
    fn from(val: FormError) -> Self {
        match val {
            FormError::Validation(errors) => ApiError::Validation(errors),
            FormError::Definition(e) => ApiError::Unexpected(e.to_string()),
            FormError::Constraint(e) => ApiError::InvalidRequest(e.to_string()),
        }
    }
}

impl From<ValidatorError> for ApiError {
    fn from(val: ValidatorError) -> Self {
        ApiError::Unexpected(val.to_string())
    }
}

impl From<TypeConstraintError> for ApiError {
    fn from(val: TypeConstraintError) -> Self {
        ApiError::InvalidRequest(val.to_string())
    }
}

impl From<QueryError> for ApiError {
    fn from(val: QueryError) -> Self {
        ApiError::InvalidRequest(val.to_string())
    }
}

impl From<DateError> for ApiError {
    fn from(val: DateError) -> Self {
        ApiError::InvalidRequest(val.to_string())
    }
}

impl From<TokenStoreError> for ApiError {
    fn from(val: TokenStoreError) -> Self {
        ApiError::Unexpected(val.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::auth::LoginForm;

    #[test]
    fn form_validation_keeps_field_messages() {
        let err: ApiError = LoginForm::new("", "").to_credentials().unwrap_err().into();
        match err {
            ApiError::Validation(errors) => {
                assert_eq!(errors.get("email"), &["wajib diisi".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn constraint_errors_are_invalid_requests() {
        let err: ApiError = TypeConstraintError::NonPositiveId.into();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }
}
