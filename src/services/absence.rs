//! Staff attendance: check-in state, check-in and end of shift.

use crate::client::ApiClient;
use crate::domain::absence::{AbsenceAction, AbsenceState};
use crate::query::QueryParams;
use crate::services::ApiResult;

fn absence_path(user_id: i32) -> String {
    format!("/absence/{user_id}")
}

/// Attendance state of the user for today.
pub async fn check_absence(client: &ApiClient, user_id: impl Into<i32>) -> ApiResult<AbsenceState> {
    let path = format!("{}/check", absence_path(user_id.into()));
    client.get(&path, &QueryParams::new()).await
}

/// Records a check-in of the given type (e.g. attendance code or permission).
pub async fn handle_absence(
    client: &ApiClient,
    user_id: impl Into<i32>,
    action: &AbsenceAction,
) -> ApiResult<AbsenceState> {
    client.post(&absence_path(user_id.into()), action).await
}

/// Ends the user's shift.
pub async fn finish_absence(client: &ApiClient, user_id: impl Into<i32>) -> ApiResult<AbsenceState> {
    let path = format!("{}/finish", absence_path(user_id.into()));
    client.put::<(), _>(&path, None).await
}
