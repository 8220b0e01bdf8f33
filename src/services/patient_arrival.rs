//! Arrival queue of patients waiting for treatment.

use crate::client::ApiClient;
use crate::domain::patient_arrival::{
    NewPatientArrival, PatientArrival, PatientArrivalFilter, UpdatePatientArrival,
};
use crate::resource::{Resource, ResourceKind};
use crate::services::ApiResult;

pub struct PatientArrivals;

impl ResourceKind for PatientArrivals {
    const PATH: &'static str = "/patient-arrival";

    type Item = PatientArrival;
    type Create = NewPatientArrival;
    type Update = UpdatePatientArrival;
    type Filter = PatientArrivalFilter;
}

pub fn patient_arrivals(client: &ApiClient) -> Resource<'_, PatientArrivals> {
    Resource::new(client)
}

/// Marks an arrival as handled.
pub async fn mark_done(
    client: &ApiClient,
    arrival_id: i32,
) -> ApiResult<Option<PatientArrival>> {
    let update = UpdatePatientArrival {
        done: Some(true),
        ..UpdatePatientArrival::default()
    };
    patient_arrivals(client).update(arrival_id, &update).await
}
