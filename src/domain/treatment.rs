use serde::{Deserialize, Serialize};

use crate::domain::catalog::CatalogEntry;

/// Patient summary embedded in a treatment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TreatmentPatient {
    pub id: i32,
    pub no_rm: String,
    pub name: String,
    pub gender: String,
    pub address: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TherapyDetail {
    pub detail: String,
}

/// Therapy applied during a treatment, with the practitioner's notes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TreatmentTherapy {
    pub id: i32,
    pub name: String,
    #[serde(rename = "TreatmentTherapy")]
    pub treatment_therapy: TherapyDetail,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PulseCheckup {
    pub depth: String,
    pub speed: String,
    pub power: String,
    pub abnormal_type: String,
    pub location_differentiation: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Treatment {
    pub id: i32,
    pub created_at: String,
    pub objective: String,
    #[serde(default)]
    pub blood_pressure: Option<String>,
    #[serde(default)]
    pub pulse_frequency: Option<String>,
    pub is_pregnant: bool,
    pub patient_id: i32,
    pub patient: TreatmentPatient,
    #[serde(default)]
    pub duration_advice_id: Option<i32>,
    #[serde(default)]
    pub duration_advice: Option<CatalogEntry>,
    #[serde(default)]
    pub treatment_packet_id: Option<i32>,
    #[serde(default)]
    pub treatment_packet: Option<CatalogEntry>,
    #[serde(default)]
    pub evaluation: Option<String>,
    #[serde(default)]
    pub doctor_diagnosis: Vec<CatalogEntry>,
    #[serde(default)]
    pub medicine: Vec<CatalogEntry>,
    #[serde(default)]
    pub therapy_history: Vec<CatalogEntry>,
    #[serde(default)]
    pub complaint: Vec<CatalogEntry>,
    #[serde(default)]
    pub stomach_checkup: Vec<CatalogEntry>,
    #[serde(default)]
    pub pulse_checkup: Option<PulseCheckup>,
    #[serde(default)]
    pub tongue_checkup: Vec<CatalogEntry>,
    #[serde(default)]
    pub self_therapy: Vec<CatalogEntry>,
    #[serde(default)]
    pub therapy: Vec<TreatmentTherapy>,
    pub user_id: i32,
    pub clinic_id: i32,
    pub user: CatalogEntry,
    pub clinic: CatalogEntry,
}

/// Therapy reference submitted with a new treatment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TherapyInput {
    pub id: i32,
    pub detail: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NewTreatment {
    pub patient_id: i32,
    pub objective: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pulse_frequency: Option<String>,
    pub is_pregnant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_advice_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_packet_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<String>,
    #[serde(default)]
    pub doctor_diagnosis: Vec<i32>,
    #[serde(default)]
    pub medicine: Vec<i32>,
    #[serde(default)]
    pub therapy_history: Vec<i32>,
    #[serde(default)]
    pub complaint: Vec<i32>,
    #[serde(default)]
    pub stomach_checkup: Vec<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pulse_checkup: Option<PulseCheckup>,
    #[serde(default)]
    pub tongue_checkup: Vec<i32>,
    #[serde(default)]
    pub self_therapy: Vec<i32>,
    #[serde(default)]
    pub therapy: Vec<TherapyInput>,
    pub user_id: i32,
    pub clinic_id: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UpdateTreatment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pulse_frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_pregnant: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub therapy: Option<Vec<TherapyInput>>,
}
