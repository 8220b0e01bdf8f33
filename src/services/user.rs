//! Staff accounts.

use crate::client::ApiClient;
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::forms::user::UserForm;
use crate::query::NoFilter;
use crate::resource::{Resource, ResourceKind};
use crate::services::ApiResult;

pub struct Users;

impl ResourceKind for Users {
    const PATH: &'static str = "/user";

    type Item = User;
    type Create = NewUser;
    type Update = UpdateUser;
    type Filter = NoFilter;
}

pub fn users(client: &ApiClient) -> Resource<'_, Users> {
    Resource::new(client)
}

pub async fn create_user(client: &ApiClient, form: &UserForm) -> ApiResult<Option<User>> {
    let new_user = form.to_new_user().map_err(|e| client.report(e))?;
    users(client).create(&new_user).await
}

/// Updates an account; an empty password leaves it unchanged.
pub async fn update_user(
    client: &ApiClient,
    user_id: i32,
    form: &UserForm,
) -> ApiResult<Option<User>> {
    let update = form.to_update().map_err(|e| client.report(e))?;
    users(client).update(user_id, &update).await
}
