//! Clinic administration.

use crate::client::ApiClient;
use crate::domain::clinic::{Clinic, NewClinic, UpdateClinic};
use crate::forms::catalog::CatalogEntryForm;
use crate::query::NoFilter;
use crate::resource::{Resource, ResourceKind};
use crate::services::ApiResult;

pub struct Clinics;

impl ResourceKind for Clinics {
    const PATH: &'static str = "/clinic";

    type Item = Clinic;
    type Create = NewClinic;
    type Update = UpdateClinic;
    type Filter = NoFilter;
}

pub fn clinics(client: &ApiClient) -> Resource<'_, Clinics> {
    Resource::new(client)
}

/// Creates a clinic from the named-record form.
pub async fn create_clinic(
    client: &ApiClient,
    form: &CatalogEntryForm,
) -> ApiResult<Option<Clinic>> {
    let entry = form.to_new_entry().map_err(|e| client.report(e))?;
    clinics(client)
        .create(&NewClinic { name: entry.name })
        .await
}

pub async fn rename_clinic(
    client: &ApiClient,
    clinic_id: i32,
    form: &CatalogEntryForm,
) -> ApiResult<Option<Clinic>> {
    let update = form.to_update().map_err(|e| client.report(e))?;
    clinics(client)
        .update(clinic_id, &UpdateClinic { name: update.name })
        .await
}
