//! Client-side failure taxonomy and the central failure reporter.
//!
//! Every failing request goes through [`ErrorReporter::report`] exactly once
//! and is then handed back to the caller, so callers can still react to the
//! error after the user has been notified.

use std::sync::Arc;

use thiserror::Error;

use crate::notify::{Navigator, Notice, NoticeKind, Notifier};
use crate::session::Session;
use crate::validation::ValidationErrors;

pub const CONNECTION_TITLE: &str = "Koneksi Error";
pub const OFFLINE_TEXT: &str = "Request tidak terkirim. silahkan cek koneksi internet";
pub const UNREACHABLE_TEXT: &str = "Server tidak merespon. silahkan coba beberapa saat lagi";
pub const UNAUTHORIZED_TEXT: &str = "Sesi telah berakhir. silahkan login kembali";
pub const VALIDATION_TITLE: &str = "Validasi Error";
pub const ERROR_TITLE: &str = "Error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("server responded with {status}: {message}")]
    Http { status: u16, message: String },

    #[error("request not sent: no network connection")]
    Offline,

    #[error("no response from server: {0}")]
    Unreachable(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status carried by the error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The toast shown for this error.
    pub fn notice(&self) -> Notice {
        match self {
            ApiError::Unauthorized => Notice::new(NoticeKind::Server, ERROR_TITLE, UNAUTHORIZED_TEXT),
            ApiError::Http { message, .. } => Notice::new(NoticeKind::Server, ERROR_TITLE, message),
            ApiError::Offline => Notice::new(NoticeKind::Connection, CONNECTION_TITLE, OFFLINE_TEXT),
            ApiError::Unreachable(_) => {
                Notice::new(NoticeKind::Connection, CONNECTION_TITLE, UNREACHABLE_TEXT)
            }
            ApiError::Validation(errors) => {
                Notice::new(NoticeKind::Validation, VALIDATION_TITLE, errors.to_string())
            }
            ApiError::Decode(_)
            | ApiError::InvalidRequest(_)
            | ApiError::Config(_)
            | ApiError::Unexpected(_) => {
                Notice::new(NoticeKind::Unexpected, ERROR_TITLE, self.to_string())
            }
        }
    }
}

/// Central failure handler shared by every request of one client.
#[derive(Clone)]
pub struct ErrorReporter {
    session: Arc<Session>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl ErrorReporter {
    pub fn new(
        session: Arc<Session>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            session,
            notifier,
            navigator,
        }
    }

    /// Logs the error, notifies the user and returns the error unchanged.
    ///
    /// An `Unauthorized` error also ends the session and redirects to login.
    pub fn report(&self, error: ApiError) -> ApiError {
        log::error!("Request failed: {error}");
        if matches!(error, ApiError::Unauthorized) {
            self.session.clear();
            self.navigator.redirect_to_login();
        }
        self.notifier.notify(&error.notice());
        error
    }
}

impl std::fmt::Debug for ErrorReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorReporter")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::LoginResponse;
    use crate::mock::{MockNavigator, MockNotifier};

    fn logged_in_session() -> Arc<Session> {
        let session = Arc::new(Session::in_memory("token"));
        session
            .begin(&LoginResponse {
                id: 1,
                email: "admin@klinik.id".into(),
                name: "Admin".into(),
                role: "admin".into(),
                token: "t0ken".into(),
                clinic_id: 1,
            })
            .unwrap();
        session
    }

    #[test]
    fn unauthorized_clears_session_and_redirects_once() {
        let session = logged_in_session();
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|notice| notice.kind == NoticeKind::Server)
            .times(1)
            .return_const(());
        let mut navigator = MockNavigator::new();
        navigator.expect_redirect_to_login().times(1).return_const(());

        let reporter = ErrorReporter::new(session.clone(), Arc::new(notifier), Arc::new(navigator));
        let returned = reporter.report(ApiError::Unauthorized);

        assert!(matches!(returned, ApiError::Unauthorized));
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn other_errors_keep_the_session() {
        let session = logged_in_session();
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|notice| notice.text == "Pasien tidak ditemukan")
            .times(1)
            .return_const(());
        let mut navigator = MockNavigator::new();
        navigator.expect_redirect_to_login().never();

        let reporter = ErrorReporter::new(session.clone(), Arc::new(notifier), Arc::new(navigator));
        reporter.report(ApiError::Http {
            status: 404,
            message: "Pasien tidak ditemukan".into(),
        });

        assert_eq!(session.token().as_deref(), Some("t0ken"));
    }

    #[test]
    fn notices_are_categorized() {
        assert_eq!(ApiError::Offline.notice().kind, NoticeKind::Connection);
        assert_eq!(ApiError::Offline.notice().text, OFFLINE_TEXT);
        assert_eq!(
            ApiError::Unreachable("timed out".into()).notice().title,
            CONNECTION_TITLE
        );
        assert_eq!(
            ApiError::Validation(ValidationErrors::default()).notice().kind,
            NoticeKind::Validation
        );
        assert_eq!(
            ApiError::Decode("eof".into()).notice().kind,
            NoticeKind::Unexpected
        );
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        assert_eq!(ApiError::Offline.status(), None);
    }
}
