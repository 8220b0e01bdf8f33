//! Read-only reports under `/analytic`.
//!
//! Report endpoints share one convention: optional pagination, an optional
//! calendar-day range sent as `start_date`/`end_date`, and `s` for name
//! search, which returns a bare list instead of a page.

use chrono::{DateTime, Utc};

use crate::client::ApiClient;
use crate::dates::{DateFilterQuery, to_iso_string};
use crate::domain::analytics::{
    AbsenceAnalytic, AbsenceAnalyticDetail, ClinicAnalytic, PatientAnalytic,
    PatientAnalyticSummary, TotalPatientAnalytic, TotalPatientDimension, UserAnalytic,
};
use crate::pagination::{PaginatedResponse, Pagination};
use crate::query::QueryParams;
use crate::services::ApiResult;

const CLINIC_PATH: &str = "/analytic/clinic";
const CLINIC_USER_PATH: &str = "/analytic/clinic/user";
const PATIENT_PATH: &str = "/analytic/patient";
const PATIENT_SUMMARY_PATH: &str = "/analytic/patient/summary";
const ABSENCE_PATH: &str = "/analytic/absence";
const TOTAL_PATIENT_PATH: &str = "/analytic/total-patient";

/// Builds `page`/`limit` followed by the date range.
fn report_params(
    client: &ApiClient,
    pagination: Option<&Pagination>,
    dates: Option<&DateFilterQuery>,
) -> ApiResult<QueryParams> {
    let mut params = QueryParams::new();
    if let Some(pagination) = pagination {
        pagination.apply(&mut params);
    }
    if let Some(dates) = dates {
        dates
            .apply(&mut params, client.utc_offset())
            .map_err(|e| client.report(e))?;
    }
    Ok(params)
}

/// Builds `s` followed by the date range.
fn search_params(
    client: &ApiClient,
    name: &str,
    dates: Option<&DateFilterQuery>,
) -> ApiResult<QueryParams> {
    let mut params = QueryParams::new();
    params.search(name);
    if let Some(dates) = dates {
        dates
            .apply(&mut params, client.utc_offset())
            .map_err(|e| client.report(e))?;
    }
    Ok(params)
}

fn date_param(date: Option<&DateTime<Utc>>) -> QueryParams {
    let mut params = QueryParams::new();
    if let Some(date) = date {
        params.push("date", to_iso_string(date));
    }
    params
}

/// Patients per clinic today and in the month of `date` (default: now).
pub async fn clinic_analytic(
    client: &ApiClient,
    date: Option<&DateTime<Utc>>,
) -> ApiResult<Vec<ClinicAnalytic>> {
    client.get(CLINIC_PATH, &date_param(date)).await
}

/// Patients per practitioner today and in the month of `date`.
pub async fn user_analytic(
    client: &ApiClient,
    date: Option<&DateTime<Utc>>,
) -> ApiResult<Vec<UserAnalytic>> {
    client.get(CLINIC_USER_PATH, &date_param(date)).await
}

/// Per-patient treatment counts, optionally sorted by the API's `sort` key.
pub async fn patient_analytic(
    client: &ApiClient,
    pagination: Option<&Pagination>,
    dates: Option<&DateFilterQuery>,
    sort: Option<&str>,
) -> ApiResult<PaginatedResponse<PatientAnalytic>> {
    let mut params = report_params(client, pagination, dates)?;
    params.push("sort", sort);
    client.get(PATIENT_PATH, &params).await
}

pub async fn search_patient_analytic(
    client: &ApiClient,
    name: &str,
    dates: Option<&DateFilterQuery>,
) -> ApiResult<Vec<PatientAnalytic>> {
    let params = search_params(client, name, dates)?;
    client.get(PATIENT_PATH, &params).await
}

pub async fn patient_analytic_summary(
    client: &ApiClient,
    dates: Option<&DateFilterQuery>,
) -> ApiResult<PatientAnalyticSummary> {
    let params = report_params(client, None, dates)?;
    client.get(PATIENT_SUMMARY_PATH, &params).await
}

/// Attendance totals per staff member, optionally limited to one clinic.
pub async fn absence_analytic(
    client: &ApiClient,
    pagination: Option<&Pagination>,
    dates: Option<&DateFilterQuery>,
    clinic_id: Option<i32>,
) -> ApiResult<PaginatedResponse<AbsenceAnalytic>> {
    let mut params = report_params(client, pagination, dates)?;
    params.push("clinic_id", clinic_id);
    client.get(ABSENCE_PATH, &params).await
}

pub async fn search_absence_analytic(
    client: &ApiClient,
    name: &str,
    dates: Option<&DateFilterQuery>,
) -> ApiResult<Vec<AbsenceAnalytic>> {
    let params = search_params(client, name, dates)?;
    client.get(ABSENCE_PATH, &params).await
}

/// Attendance summary and paged check-in records of one user.
pub async fn absence_analytic_detail(
    client: &ApiClient,
    user_id: impl Into<i32>,
    pagination: Option<&Pagination>,
    dates: Option<&DateFilterQuery>,
) -> ApiResult<AbsenceAnalyticDetail> {
    let params = report_params(client, pagination, dates)?;
    let path = format!("{ABSENCE_PATH}/user/{}", user_id.into());
    client.get(&path, &params).await
}

fn total_patient_path(dimension: TotalPatientDimension) -> String {
    format!("{TOTAL_PATIENT_PATH}/{}", dimension.segment())
}

/// Distinct patients grouped by `dimension`.
pub async fn total_patient_analytic(
    client: &ApiClient,
    dimension: TotalPatientDimension,
    pagination: Option<&Pagination>,
    dates: Option<&DateFilterQuery>,
) -> ApiResult<PaginatedResponse<TotalPatientAnalytic>> {
    let params = report_params(client, pagination, dates)?;
    client.get(&total_patient_path(dimension), &params).await
}

pub async fn search_total_patient_analytic(
    client: &ApiClient,
    dimension: TotalPatientDimension,
    name: &str,
    dates: Option<&DateFilterQuery>,
) -> ApiResult<Vec<TotalPatientAnalytic>> {
    let params = search_params(client, name, dates)?;
    client.get(&total_patient_path(dimension), &params).await
}

/// Patients treated at home versus in a clinic.
pub async fn total_patient_homecare(
    client: &ApiClient,
    dates: Option<&DateFilterQuery>,
) -> ApiResult<Vec<TotalPatientAnalytic>> {
    let params = report_params(client, None, dates)?;
    client
        .get(&format!("{TOTAL_PATIENT_PATH}/homecare"), &params)
        .await
}
