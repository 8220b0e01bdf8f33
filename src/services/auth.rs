//! Login and logout.

use crate::client::ApiClient;
use crate::domain::auth::{AuthUser, LoginResponse};
use crate::forms::auth::LoginForm;
use crate::services::ApiResult;

pub const LOGIN_PATH: &str = "/auth/login";

/// Validates the form, exchanges the credentials for a token and starts the
/// session.
pub async fn login(client: &ApiClient, form: &LoginForm) -> ApiResult<AuthUser> {
    let credentials = form.to_credentials().map_err(|e| client.report(e))?;

    let response: LoginResponse = client.post(LOGIN_PATH, &credentials).await?;

    client
        .session()
        .begin(&response)
        .map_err(|e| client.report(e))
}

/// Forgets the stored token and user.
pub fn logout(client: &ApiClient) {
    client.session().clear();
    log::info!("Logged out");
}

/// User of the running session, if any.
pub fn current_user(client: &ApiClient) -> Option<AuthUser> {
    client.session().user()
}
