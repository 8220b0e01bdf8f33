use serde::{Deserialize, Serialize};

/// Attendance state of a staff member for the current day.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AbsenceState {
    pub status: String,
    #[serde(default)]
    pub absence_code: Option<String>,
}

/// Body of a check-in request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbsenceAction {
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl AbsenceAction {
    pub fn new(action_type: impl Into<String>, data: Option<String>) -> Self {
        Self {
            action_type: action_type.into(),
            data,
        }
    }
}
