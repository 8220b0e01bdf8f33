use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Staff member that registered the patient.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Registrar {
    pub id: i32,
    pub name: String,
    pub role: String,
}

/// Clinic where the patient was first registered.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RegisterClinic {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Patient {
    pub id: i32,
    /// Medical record number assigned by the API.
    pub no_rm: String,
    pub name: String,
    pub gender: String,
    pub birthdate: String,
    pub address: String,
    pub telp: String,
    pub created_at: String,
    pub registered_by: Registrar,
    pub register_clinic: RegisterClinic,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPatient {
    pub name: String,
    pub gender: String,
    pub birthdate: NaiveDate,
    pub address: String,
    pub telp: String,
    pub user_id: i32,
    pub clinic_id: i32,
}

impl NewPatient {
    #[must_use]
    pub fn new(
        name: String,
        gender: String,
        birthdate: NaiveDate,
        address: String,
        telp: String,
        user_id: i32,
        clinic_id: i32,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            gender: gender.trim().to_lowercase(),
            birthdate,
            address: address.trim().to_string(),
            telp: telp.trim().to_string(),
            user_id,
            clinic_id,
        }
    }
}

/// Partial update; absent fields are left untouched by the API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UpdatePatient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinic_id: Option<i32>,
}

impl From<NewPatient> for UpdatePatient {
    fn from(value: NewPatient) -> Self {
        Self {
            name: Some(value.name),
            gender: Some(value.gender),
            birthdate: Some(value.birthdate),
            address: Some(value.address),
            telp: Some(value.telp),
            user_id: Some(value.user_id),
            clinic_id: Some(value.clinic_id),
        }
    }
}
