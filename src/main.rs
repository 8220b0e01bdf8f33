//! Smoke tool: logs in and prints one page of a resource as JSON.
//!
//! Usage: `clinic-client [resource] [page]`, e.g. `clinic-client therapy 2`.

use std::env;
use std::path::Path;

use dotenvy::dotenv;
use serde::Serialize;

use clinic_client::client::ApiClient;
use clinic_client::errors::{ApiError, ApiResult};
use clinic_client::forms::auth::LoginForm;
use clinic_client::models::config::ClientConfig;
use clinic_client::pagination::Pagination;
use clinic_client::resource::{Resource, ResourceKind};
use clinic_client::services::auth::login;
use clinic_client::services::catalog::{
    Complaints, DoctorDiagnoses, DurationAdvices, Medicines, Meridians, SelfTherapies,
    StomachCheckups, Therapies, TongueCheckups, TreatmentPackets,
};
use clinic_client::services::clinic::Clinics;
use clinic_client::services::patient::Patients;
use clinic_client::services::patient_arrival::PatientArrivals;
use clinic_client::services::user::Users;

async fn fetch_page<K>(client: &ApiClient, pagination: &Pagination) -> ApiResult<String>
where
    K: ResourceKind,
    K::Item: Serialize,
{
    let page = Resource::<K>::new(client).list(Some(pagination), None).await?;
    serde_json::to_string_pretty(&page).map_err(|e| ApiError::Unexpected(e.to_string()))
}

async fn fetch(client: &ApiClient, resource: &str, pagination: &Pagination) -> ApiResult<String> {
    match resource {
        "clinic" => fetch_page::<Clinics>(client, pagination).await,
        "patient" => fetch_page::<Patients>(client, pagination).await,
        "user" => fetch_page::<Users>(client, pagination).await,
        "patient-arrival" => fetch_page::<PatientArrivals>(client, pagination).await,
        "therapy" => fetch_page::<Therapies>(client, pagination).await,
        "medicine" => fetch_page::<Medicines>(client, pagination).await,
        "meridian" => fetch_page::<Meridians>(client, pagination).await,
        "complaint" => fetch_page::<Complaints>(client, pagination).await,
        "doctor-diagnosis" => fetch_page::<DoctorDiagnoses>(client, pagination).await,
        "duration-advice" => fetch_page::<DurationAdvices>(client, pagination).await,
        "self-therapy" => fetch_page::<SelfTherapies>(client, pagination).await,
        "stomach-checkup" => fetch_page::<StomachCheckups>(client, pagination).await,
        "tongue-checkup" => fetch_page::<TongueCheckups>(client, pagination).await,
        "treatment-packet" => fetch_page::<TreatmentPackets>(client, pagination).await,
        other => Err(ApiError::InvalidRequest(format!("unknown resource `{other}`"))),
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let mut args = env::args().skip(1);
    let resource = args.next().unwrap_or_else(|| "clinic".into());
    let page = args.next().and_then(|p| p.parse::<u32>().ok()).unwrap_or(1);

    let config_path = env::var("CLINIC_CONFIG").ok();
    let config = match ClientConfig::load(config_path.as_deref().map(Path::new)) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading client config: {err}");
            std::process::exit(1);
        }
    };

    let client = match ApiClient::from_config(&config) {
        Ok(client) => client,
        Err(err) => {
            log::error!("Error building API client: {err}");
            std::process::exit(1);
        }
    };

    if !client.session().is_authenticated() {
        let form = LoginForm::new(
            env::var("CLINIC_EMAIL").unwrap_or_default(),
            env::var("CLINIC_PASSWORD").unwrap_or_default(),
        );
        // Failures are already logged by the client.
        if login(&client, &form).await.is_err() {
            std::process::exit(1);
        }
    }

    let pagination = client.default_pagination().page(page);
    match fetch(&client, &resource, &pagination).await {
        Ok(json) => println!("{json}"),
        Err(err) => {
            log::error!("Failed to fetch `{resource}`: {err}");
            std::process::exit(1);
        }
    }
}
