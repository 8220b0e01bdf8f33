use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::patient::{NewPatient, UpdatePatient};
use crate::domain::types::{ClinicId, TypeConstraintError, UserId};
use crate::forms::FormError;
use crate::validation::Validator;
use crate::validation::rules::{custom, max, min, phone, required};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, Default, Deserialize)]
/// Form data for registering or editing a patient.
pub struct PatientForm {
    pub name: String,
    pub gender: String,
    /// Birth date as entered, `YYYY-MM-DD`.
    pub birthdate: String,
    pub address: String,
    pub telp: String,
    pub user_id: i32,
    pub clinic_id: i32,
}

impl PatientForm {
    pub fn validator(&self) -> Result<Validator, FormError> {
        let birthdate_format = custom(|value| {
            let raw = value.as_str()?;
            if raw.is_empty() || NaiveDate::parse_from_str(raw, DATE_FORMAT).is_ok() {
                None
            } else {
                Some("format tanggal tidak valid".to_string())
            }
        });

        let mut validator = Validator::new();
        validator
            .add_validation("name", self.name.as_str(), vec![required(), min(3), max(255)])?
            .add_validation("gender", self.gender.as_str(), vec![required()])?
            .add_validation(
                "birthdate",
                self.birthdate.as_str(),
                vec![required(), birthdate_format],
            )?
            .add_validation("address", self.address.as_str(), vec![required()])?
            .add_validation("telp", self.telp.as_str(), vec![required(), phone()])?
            .add_validation("user_id", self.user_id, vec![min(1)])?
            .add_validation("clinic_id", self.clinic_id, vec![min(1)])?;
        Ok(validator)
    }

    /// Validates the form and builds the registration payload.
    pub fn to_new_patient(&self) -> Result<NewPatient, FormError> {
        self.validator()?.into_result()?;

        let birthdate = NaiveDate::parse_from_str(&self.birthdate, DATE_FORMAT).map_err(|_| {
            TypeConstraintError::InvalidValue(self.birthdate.clone())
        })?;

        Ok(NewPatient::new(
            self.name.clone(),
            self.gender.clone(),
            birthdate,
            self.address.clone(),
            self.telp.clone(),
            UserId::new(self.user_id)?.get(),
            ClinicId::new(self.clinic_id)?.get(),
        ))
    }

    /// Validates the form and builds a full update payload.
    pub fn to_update(&self) -> Result<UpdatePatient, FormError> {
        self.to_new_patient().map(UpdatePatient::from)
    }
}
