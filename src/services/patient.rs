//! Patient registry.

use crate::client::ApiClient;
use crate::domain::patient::{NewPatient, Patient, UpdatePatient};
use crate::forms::patient::PatientForm;
use crate::query::NoFilter;
use crate::resource::{Resource, ResourceKind};
use crate::services::ApiResult;

pub struct Patients;

impl ResourceKind for Patients {
    const PATH: &'static str = "/patient";

    type Item = Patient;
    type Create = NewPatient;
    type Update = UpdatePatient;
    type Filter = NoFilter;
}

pub fn patients(client: &ApiClient) -> Resource<'_, Patients> {
    Resource::new(client)
}

/// Validates the form and registers a new patient.
pub async fn register_patient(
    client: &ApiClient,
    form: &PatientForm,
) -> ApiResult<Option<Patient>> {
    let new_patient = form.to_new_patient().map_err(|e| client.report(e))?;
    patients(client).create(&new_patient).await
}

/// Validates the form and overwrites the patient's details.
pub async fn update_patient(
    client: &ApiClient,
    patient_id: i32,
    form: &PatientForm,
) -> ApiResult<Option<Patient>> {
    let update = form.to_update().map_err(|e| client.report(e))?;
    patients(client).update(patient_id, &update).await
}
