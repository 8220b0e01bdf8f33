use serde::Deserialize;

use crate::domain::catalog::{NewCatalogEntry, NewComplaint, UpdateCatalogEntry};
use crate::domain::types::NonEmptyString;
use crate::forms::FormError;
use crate::validation::Validator;
use crate::validation::rules::{max, required};

pub const MAX_NAME_LENGTH: i64 = 255;

#[derive(Clone, Debug, Default, Deserialize)]
/// Form used by every named lookup (therapy, medicine, meridian, ...).
pub struct CatalogEntryForm {
    pub name: String,
    /// Only used by complaints.
    #[serde(default)]
    pub meridian_id: Option<i32>,
}

impl CatalogEntryForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meridian_id: None,
        }
    }

    pub fn with_meridian(mut self, meridian_id: i32) -> Self {
        self.meridian_id = Some(meridian_id);
        self
    }

    pub fn validator(&self) -> Result<Validator, FormError> {
        let mut validator = Validator::new();
        validator.add_validation(
            "name",
            self.name.as_str(),
            vec![required(), max(MAX_NAME_LENGTH)],
        )?;
        Ok(validator)
    }

    fn validated_name(&self) -> Result<String, FormError> {
        self.validator()?.into_result()?;
        Ok(NonEmptyString::new(self.name.as_str())?.into_inner())
    }

    pub fn to_new_entry(&self) -> Result<NewCatalogEntry, FormError> {
        Ok(NewCatalogEntry {
            name: self.validated_name()?,
        })
    }

    pub fn to_update(&self) -> Result<UpdateCatalogEntry, FormError> {
        Ok(UpdateCatalogEntry {
            name: Some(self.validated_name()?),
        })
    }

    pub fn to_new_complaint(&self) -> Result<NewComplaint, FormError> {
        Ok(NewComplaint {
            name: self.validated_name()?,
            meridian_id: self.meridian_id,
        })
    }
}
