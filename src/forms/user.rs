use serde::Deserialize;

use crate::domain::types::{Email, NonEmptyString};
use crate::domain::user::{NewUser, UpdateUser};
use crate::forms::FormError;
use crate::validation::Validator;
use crate::validation::rules::{custom, email, min, required};

pub const MIN_PASSWORD_LENGTH: i64 = 8;
pub const ROLES: [&str; 3] = ["admin", "doctor", "staff"];

#[derive(Clone, Debug, Default, Deserialize)]
/// Form data for creating or editing a staff account.
pub struct UserForm {
    pub email: String,
    /// Empty when editing without changing the password.
    #[serde(default)]
    pub password: String,
    pub name: String,
    pub role: String,
}

impl UserForm {
    fn validator(&self, password_required: bool) -> Result<Validator, FormError> {
        let known_role = custom(|value| {
            let role = value.as_str()?;
            if role.is_empty() || ROLES.contains(&role) {
                None
            } else {
                Some(format!("role harus salah satu dari: {}", ROLES.join(", ")))
            }
        });

        let mut password_rules = vec![min(MIN_PASSWORD_LENGTH)];
        if password_required {
            password_rules.insert(0, required());
        }

        let mut validator = Validator::new();
        validator
            .add_validation("email", self.email.as_str(), vec![required(), email()])?
            .add_validation("name", self.name.as_str(), vec![required()])?
            .add_validation("role", self.role.as_str(), vec![required(), known_role])?;

        // An empty password on edit keeps the current one.
        if password_required || !self.password.is_empty() {
            validator.add_validation("password", self.password.as_str(), password_rules)?;
        }
        Ok(validator)
    }

    pub fn to_new_user(&self) -> Result<NewUser, FormError> {
        self.validator(true)?.into_result()?;
        Ok(NewUser {
            email: Email::new(self.email.as_str())?.into_inner(),
            password: self.password.clone(),
            name: NonEmptyString::new(self.name.as_str())?.into_inner(),
            role: self.role.clone(),
        })
    }

    pub fn to_update(&self) -> Result<UpdateUser, FormError> {
        self.validator(false)?.into_result()?;
        Ok(UpdateUser {
            email: Some(Email::new(self.email.as_str())?.into_inner()),
            password: (!self.password.is_empty()).then(|| self.password.clone()),
            name: Some(NonEmptyString::new(self.name.as_str())?.into_inner()),
            role: Some(self.role.clone()),
        })
    }
}
