//! Treatment records.

use crate::client::ApiClient;
use crate::domain::treatment::{NewTreatment, Treatment, UpdateTreatment};
use crate::pagination::{PaginatedResponse, Pagination};
use crate::query::{NoFilter, QueryParams};
use crate::resource::{Resource, ResourceKind};
use crate::services::ApiResult;

pub struct Treatments;

impl ResourceKind for Treatments {
    const PATH: &'static str = "/treatment";

    type Item = Treatment;
    type Create = NewTreatment;
    type Update = UpdateTreatment;
    type Filter = NoFilter;
}

pub fn treatments(client: &ApiClient) -> Resource<'_, Treatments> {
    Resource::new(client)
}

/// Treatment history of one patient, newest first as ordered by the API.
pub async fn list_for_patient(
    client: &ApiClient,
    patient_id: impl Into<i32>,
    pagination: Option<&Pagination>,
) -> ApiResult<PaginatedResponse<Treatment>> {
    let mut params = QueryParams::new();
    if let Some(pagination) = pagination {
        pagination.apply(&mut params);
    }
    let path = format!("{}/patient/{}", Treatments::PATH, patient_id.into());
    client.get(&path, &params).await
}
