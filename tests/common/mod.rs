#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use clinic_client::client::ApiClient;
use clinic_client::notify::{Connectivity, Navigator, Notice, Notifier};
use clinic_client::session::Session;
use serde_json::{Value, json};
use wiremock::MockServer;

/// Notifier keeping every notice for later assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}

/// Navigator counting login redirects.
#[derive(Default)]
pub struct RecordingNavigator {
    redirects: Mutex<usize>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> usize {
        *self.redirects.lock().unwrap()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to_login(&self) {
        *self.redirects.lock().unwrap() += 1;
    }
}

pub struct Offline;

impl Connectivity for Offline {
    fn is_online(&self) -> bool {
        false
    }
}

/// Client wired to a mock server with recording collaborators.
pub struct TestClient {
    pub server: MockServer,
    pub client: ApiClient,
    pub session: Arc<Session>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
}

impl TestClient {
    pub async fn new() -> Self {
        Self::with_search_debounce(Duration::from_millis(300)).await
    }

    pub async fn with_search_debounce(window: Duration) -> Self {
        let server = MockServer::start().await;
        let session = Arc::new(Session::in_memory("token"));
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let client = ApiClient::builder(server.uri())
            .session(session.clone())
            .notifier(notifier.clone())
            .navigator(navigator.clone())
            .search_debounce(window)
            .build()
            .unwrap();

        Self {
            server,
            client,
            session,
            notifier,
            navigator,
        }
    }

    /// Same as [`TestClient::new`] with a stored bearer token.
    pub async fn logged_in(token: &str) -> Self {
        let test = Self::new().await;
        test.session
            .begin(&serde_json::from_value(login_body(token)).unwrap())
            .unwrap();
        test
    }

    /// Query strings of every request the server received, in order.
    pub async fn received_queries(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| request.url.query().unwrap_or_default().to_string())
            .collect()
    }
}

pub fn login_body(token: &str) -> Value {
    json!({
        "id": 4,
        "email": "dokter@klinik.id",
        "name": "dr. Rina",
        "role": "doctor",
        "token": token,
        "clinic_id": 2
    })
}

pub fn page_body(items: Value, current_page: u32, total_page: u32, total_items: u32) -> Value {
    json!({
        "paginationData": {
            "currentPage": current_page,
            "totalPage": total_page,
            "limit": 10,
            "totalItems": total_items
        },
        "items": items
    })
}
