use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use clinic_client::client::ApiClient;
use clinic_client::dates::DateFilterQuery;
use clinic_client::domain::analytics::TotalPatientDimension;
use clinic_client::pagination::Pagination;
use clinic_client::services::analytics::{
    absence_analytic, absence_analytic_detail, clinic_analytic, patient_analytic,
    patient_analytic_summary, search_patient_analytic, search_total_patient_analytic,
    total_patient_analytic, total_patient_homecare,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn january() -> DateFilterQuery {
    DateFilterQuery::new(Some(date(2024, 1, 5)), Some(date(2024, 1, 31))).unwrap()
}

#[tokio::test]
async fn patient_report_sends_pagination_dates_and_sort() {
    let test = common::TestClient::new().await;
    Mock::given(method("GET"))
        .and(path("/analytic/patient"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::page_body(
            json!([{
                "id": 1, "no_rm": "RM-001", "name": "Budi", "patient_status": "active",
                "total_treatment": 4, "last_treatment_date": "2024-01-20T03:00:00.000Z"
            }]),
            1,
            1,
            1,
        )))
        .mount(&test.server)
        .await;

    let page = patient_analytic(
        &test.client,
        Some(&Pagination::new(1, 10)),
        Some(&january()),
        Some("total_treatment"),
    )
    .await
    .unwrap();

    assert_eq!(page.items[0].total_treatment, 4);
    assert_eq!(
        test.received_queries().await,
        vec![
            "page=1&limit=10&start_date=2024-01-05T00%3A00%3A00.000Z\
             &end_date=2024-01-31T23%3A59%3A59.999Z&sort=total_treatment"
        ]
    );
}

#[tokio::test]
async fn name_search_returns_bare_rows() {
    let test = common::TestClient::new().await;
    Mock::given(method("GET"))
        .and(path("/analytic/patient"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&test.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/analytic/total-patient/doctor-diagnosis"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 2, "name": "Insomnia", "total_patient": 14}])),
        )
        .mount(&test.server)
        .await;

    let patients = search_patient_analytic(&test.client, "budi", None)
        .await
        .unwrap();
    let diagnoses = search_total_patient_analytic(
        &test.client,
        TotalPatientDimension::DoctorDiagnosis,
        "insom",
        None,
    )
    .await
    .unwrap();

    assert!(patients.is_empty());
    assert_eq!(diagnoses[0].total_patient, 14);
    assert_eq!(test.received_queries().await, vec!["s=budi", "s=insom"]);
}

#[tokio::test]
async fn days_are_read_in_the_clinic_offset() {
    let server = MockServer::start().await;
    let client = ApiClient::builder(server.uri())
        .utc_offset(FixedOffset::east_opt(7 * 3600).unwrap())
        .build()
        .unwrap();
    Mock::given(method("GET"))
        .and(path("/analytic/patient/summary"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"new_patient": 3, "total_treatment": 9})),
        )
        .mount(&server)
        .await;

    let summary = patient_analytic_summary(&client, Some(&DateFilterQuery::day(date(2024, 1, 5))))
        .await
        .unwrap();

    assert_eq!(summary.new_patient, 3);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("start_date=2024-01-04T17%3A00%3A00.000Z&end_date=2024-01-05T16%3A59%3A59.999Z")
    );
}

#[tokio::test]
async fn clinic_report_sends_optional_instant() {
    let test = common::TestClient::new().await;
    Mock::given(method("GET"))
        .and(path("/analytic/clinic"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Klinik Sehat", "today_patient": 2, "month_patient": 40}
        ])))
        .mount(&test.server)
        .await;

    let at = Utc.with_ymd_and_hms(2024, 2, 1, 9, 30, 0).unwrap();
    let with_date = clinic_analytic(&test.client, Some(&at)).await.unwrap();
    let without_date = clinic_analytic(&test.client, None).await.unwrap();

    assert_eq!(with_date[0].month_patient, 40);
    assert_eq!(without_date.len(), 1);
    assert_eq!(
        test.received_queries().await,
        vec!["date=2024-02-01T09%3A30%3A00.000Z", ""]
    );
}

#[tokio::test]
async fn absence_reports_carry_clinic_and_user() {
    let test = common::TestClient::new().await;
    Mock::given(method("GET"))
        .and(path("/analytic/absence"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::page_body(json!([]), 1, 0, 0)))
        .mount(&test.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/analytic/absence/user/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lateHour": "08:00:00",
            "summary": {"id": 3, "name": "Rina", "total": 1, "late": 0, "absent": 0},
            "pagination": common::page_body(json!([{
                "id": 1, "type": "attend", "in_clinic_time": "2024-03-04T00:59:00.000Z",
                "afterwork_time": "2024-03-04T09:00:00.000Z", "absence_code": "A1",
                "user_id": 3, "created_at": "2024-03-04T00:59:00.000Z"
            }]), 1, 1, 1)
        })))
        .mount(&test.server)
        .await;

    absence_analytic(&test.client, Some(&Pagination::new(1, 10)), None, Some(2))
        .await
        .unwrap();
    let detail = absence_analytic_detail(&test.client, 3, None, None)
        .await
        .unwrap();

    assert_eq!(detail.late_hour, "08:00:00");
    assert_eq!(detail.pagination.items.len(), 1);
    assert_eq!(
        test.received_queries().await,
        vec!["page=1&limit=10&clinic_id=2", ""]
    );
}

#[tokio::test]
async fn total_patient_reports_use_dimension_paths() {
    let test = common::TestClient::new().await;
    Mock::given(method("GET"))
        .and(path("/analytic/total-patient/therapy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::page_body(
            json!([{"id": 1, "name": "Bekam", "total_patient": 12}]),
            1,
            1,
            1,
        )))
        .expect(1)
        .mount(&test.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/analytic/total-patient/homecare"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 0, "name": "homecare", "total_patient": 5}
        ])))
        .expect(1)
        .mount(&test.server)
        .await;

    let therapy = total_patient_analytic(
        &test.client,
        TotalPatientDimension::Therapy,
        Some(&Pagination::new(1, 10)),
        None,
    )
    .await
    .unwrap();
    let homecare = total_patient_homecare(&test.client, None).await.unwrap();

    assert_eq!(therapy.items[0].total_patient, 12);
    assert_eq!(homecare[0].total_patient, 5);
}
