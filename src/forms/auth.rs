use serde::Deserialize;

use crate::domain::auth::Credentials;
use crate::domain::types::Email;
use crate::forms::FormError;
use crate::validation::Validator;
use crate::validation::rules::{email, min, required};

pub const MIN_PASSWORD_LENGTH: i64 = 6;

#[derive(Clone, Debug, Default, Deserialize)]
/// Form data submitted from the login page.
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validator(&self) -> Result<Validator, FormError> {
        let mut validator = Validator::new();
        validator
            .add_validation("email", self.email.as_str(), vec![required(), email()])?
            .add_validation(
                "password",
                self.password.as_str(),
                vec![required(), min(MIN_PASSWORD_LENGTH)],
            )?;
        Ok(validator)
    }

    /// Validates the form and returns the normalized credentials.
    pub fn to_credentials(&self) -> Result<Credentials, FormError> {
        self.validator()?.into_result()?;
        Ok(Credentials {
            email: Email::new(self.email.as_str())?.into_inner(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_login_normalizes_email() {
        let credentials = LoginForm::new(" Admin@Klinik.ID", "rahasia")
            .to_credentials()
            .unwrap();
        assert_eq!(credentials.email, "admin@klinik.id");
        assert_eq!(credentials.password, "rahasia");
    }

    #[test]
    fn short_password_is_reported_per_field() {
        let err = LoginForm::new("admin@klinik.id", "123")
            .to_credentials()
            .unwrap_err();
        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.get("password"), &["minimal 6 karakter".to_string()]);
        assert!(errors.get("email").is_empty());
    }
}
