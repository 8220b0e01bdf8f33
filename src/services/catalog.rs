//! Lookup tables used when recording treatments.

use crate::client::ApiClient;
use crate::domain::catalog::{
    CatalogEntry, Complaint, NewCatalogEntry, NewComplaint, UpdateCatalogEntry, UpdateComplaint,
};
use crate::forms::catalog::CatalogEntryForm;
use crate::query::{NoFilter, QueryParams};
use crate::resource::{Resource, ResourceKind};
use crate::services::ApiResult;

/// Flag asking the API to embed each complaint's meridian.
pub const WITH_MERIDIAN_KEY: &str = "with-meridian";

macro_rules! catalog_kind {
    ($name:ident, $path:literal, $doc:expr) => {
        #[doc = $doc]
        pub struct $name;

        impl ResourceKind for $name {
            const PATH: &'static str = $path;

            type Item = CatalogEntry;
            type Create = NewCatalogEntry;
            type Update = UpdateCatalogEntry;
            type Filter = NoFilter;
        }
    };
}

catalog_kind!(Therapies, "/therapy", "Therapies offered by the clinics.");
catalog_kind!(Medicines, "/medicine", "Prescribable medicines.");
catalog_kind!(Meridians, "/meridian", "Meridians complaints can be linked to.");
catalog_kind!(DoctorDiagnoses, "/doctor-diagnosis", "Diagnoses a doctor can record.");
catalog_kind!(DurationAdvices, "/duration-advice", "Advised treatment durations.");
catalog_kind!(SelfTherapies, "/self-therapy", "Exercises patients do at home.");
catalog_kind!(StomachCheckups, "/stomach-checkup", "Stomach checkup findings.");
catalog_kind!(TongueCheckups, "/tongue-checkup", "Tongue checkup findings.");
catalog_kind!(TreatmentPackets, "/treatment-packet", "Bundled treatment packets.");

/// Complaints, always fetched together with their meridian.
pub struct Complaints;

impl ResourceKind for Complaints {
    const PATH: &'static str = "/complaint";

    type Item = Complaint;
    type Create = NewComplaint;
    type Update = UpdateComplaint;
    type Filter = NoFilter;

    fn base_params(params: &mut QueryParams) {
        params.flag(WITH_MERIDIAN_KEY, true);
    }
}

/// Handle for any catalog kind, e.g. `catalog::<Therapies>(&client)`.
pub fn catalog<K: ResourceKind>(client: &ApiClient) -> Resource<'_, K> {
    Resource::new(client)
}

pub fn complaints(client: &ApiClient) -> Resource<'_, Complaints> {
    Resource::new(client)
}

/// Validates the form and adds an entry to the catalog `K`.
pub async fn create_entry<K>(
    client: &ApiClient,
    form: &CatalogEntryForm,
) -> ApiResult<Option<CatalogEntry>>
where
    K: ResourceKind<Item = CatalogEntry, Create = NewCatalogEntry>,
{
    let entry = form.to_new_entry().map_err(|e| client.report(e))?;
    catalog::<K>(client).create(&entry).await
}

pub async fn rename_entry<K>(
    client: &ApiClient,
    id: i32,
    form: &CatalogEntryForm,
) -> ApiResult<Option<CatalogEntry>>
where
    K: ResourceKind<Item = CatalogEntry, Update = UpdateCatalogEntry>,
{
    let update = form.to_update().map_err(|e| client.report(e))?;
    catalog::<K>(client).update(id, &update).await
}

pub async fn create_complaint(
    client: &ApiClient,
    form: &CatalogEntryForm,
) -> ApiResult<Option<Complaint>> {
    let complaint = form.to_new_complaint().map_err(|e| client.report(e))?;
    complaints(client).create(&complaint).await
}
