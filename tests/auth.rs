use clinic_client::domain::absence::AbsenceAction;
use clinic_client::forms::auth::LoginForm;
use clinic_client::services::ApiError;
use clinic_client::services::absence::{check_absence, finish_absence, handle_absence};
use clinic_client::services::auth::{current_user, login, logout};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

mod common;

#[tokio::test]
async fn login_stores_token_and_user() {
    let test = common::TestClient::new().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "dokter@klinik.id", "password": "rahasia"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(common::login_body("fresh")))
        .expect(1)
        .mount(&test.server)
        .await;

    let user = login(&test.client, &LoginForm::new(" Dokter@Klinik.id ", "rahasia"))
        .await
        .unwrap();

    assert_eq!(user.clinic_id, 2);
    assert_eq!(test.session.token().as_deref(), Some("fresh"));
    assert_eq!(current_user(&test.client), Some(user));

    logout(&test.client);
    assert!(!test.session.is_authenticated());
    assert_eq!(current_user(&test.client), None);
}

#[tokio::test]
async fn rejected_login_keeps_session_empty() {
    let test = common::TestClient::new().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Password salah"})),
        )
        .mount(&test.server)
        .await;

    let err = login(&test.client, &LoginForm::new("dokter@klinik.id", "salahsekali"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Http { status: 400, .. }));
    assert!(!test.session.is_authenticated());
    assert_eq!(test.notifier.notices()[0].text, "Password salah");
}

#[tokio::test]
async fn invalid_login_form_sends_nothing() {
    let test = common::TestClient::new().await;

    let err = login(&test.client, &LoginForm::new("bukan-email", "123"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(test.notifier.notices().len(), 1);
    assert!(test.received_queries().await.is_empty());
}

#[tokio::test]
async fn absence_flow_uses_user_paths() {
    let test = common::TestClient::logged_in("t0ken").await;
    Mock::given(method("GET"))
        .and(path("/absence/4/check"))
        .and(header("authorization", "Bearer t0ken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "not_attended"})))
        .mount(&test.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/absence/4"))
        .and(body_json(json!({"type": "attend", "data": "A1B2"})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"status": "attended", "absence_code": "A1B2"})),
        )
        .mount(&test.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/absence/4/finish"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "finished"})))
        .mount(&test.server)
        .await;

    let before = check_absence(&test.client, 4).await.unwrap();
    let during = handle_absence(
        &test.client,
        4,
        &AbsenceAction::new("attend", Some("A1B2".into())),
    )
    .await
    .unwrap();
    let after = finish_absence(&test.client, 4).await.unwrap();

    assert_eq!(before.status, "not_attended");
    assert_eq!(during.absence_code.as_deref(), Some("A1B2"));
    assert_eq!(after.status, "finished");
}
