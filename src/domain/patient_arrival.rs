use serde::{Deserialize, Serialize};

use crate::domain::patient::RegisterClinic;
use crate::query::{ListFilter, QueryParams};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ArrivalPatient {
    pub id: i32,
    pub no_rm: String,
    pub name: String,
    pub gender: String,
    pub birthdate: String,
    pub address: String,
    pub telp: String,
    pub register_clinic: RegisterClinic,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ArrivalUser {
    pub id: i32,
    pub name: String,
}

/// Queue entry created when a patient shows up at a clinic.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PatientArrival {
    pub id: i32,
    pub done: bool,
    #[serde(rename = "type")]
    pub arrival_type: String,
    pub patient: ArrivalPatient,
    pub user: ArrivalUser,
    pub tag_user: ArrivalUser,
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPatientArrival {
    pub patient_id: i32,
    pub user_id: i32,
    pub tag_user_id: i32,
    #[serde(rename = "type")]
    pub arrival_type: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UpdatePatientArrival {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub arrival_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

/// Optional filters accepted by the patient arrival list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatientArrivalFilter {
    pub done: Option<bool>,
    pub patient_id: Option<i32>,
    pub user_id: Option<i32>,
    pub tag_user_id: Option<i32>,
    pub arrival_type: Option<String>,
}

impl PatientArrivalFilter {
    pub fn done(mut self, done: bool) -> Self {
        self.done = Some(done);
        self
    }

    pub fn patient_id(mut self, patient_id: i32) -> Self {
        self.patient_id = Some(patient_id);
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn tag_user_id(mut self, tag_user_id: i32) -> Self {
        self.tag_user_id = Some(tag_user_id);
        self
    }

    pub fn arrival_type(mut self, arrival_type: impl Into<String>) -> Self {
        self.arrival_type = Some(arrival_type.into());
        self
    }
}

impl ListFilter for PatientArrivalFilter {
    fn apply(&self, params: &mut QueryParams) {
        // `done=false` is a meaningful filter, so it is sent explicitly.
        if let Some(done) = self.done {
            params.flag("done", done);
        }
        params.push("patient_id", self.patient_id);
        params.push("user_id", self.user_id);
        params.push("tag_user_id", self.tag_user_id);
        params.push("type", self.arrival_type.as_deref());
    }
}
