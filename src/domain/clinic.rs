use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Clinic {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewClinic {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct UpdateClinic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
