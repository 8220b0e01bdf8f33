use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: String,
    pub token: String,
    #[serde(default)]
    pub clinic_id: i32,
}

/// Profile of the logged-in user kept for the lifetime of a session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AuthUser {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: String,
    pub clinic_id: i32,
}

impl From<&LoginResponse> for AuthUser {
    fn from(value: &LoginResponse) -> Self {
        Self {
            id: value.id,
            email: value.email.clone(),
            name: value.name.clone(),
            role: value.role.clone(),
            clinic_id: value.clinic_id,
        }
    }
}
