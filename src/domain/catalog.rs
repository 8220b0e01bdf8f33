//! Lookup tables shared by treatment records: therapies, medicines,
//! meridians, complaints, diagnoses and the checkup vocabularies.

use serde::{Deserialize, Serialize};

/// A named catalog entry. Every lookup resource except complaints has this shape.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CatalogEntry {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCatalogEntry {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UpdateCatalogEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Complaint with the meridian it is associated with.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Complaint {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub meridian: Option<CatalogEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewComplaint {
    pub name: String,
    #[serde(rename = "meridianId")]
    pub meridian_id: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UpdateComplaint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `Some(None)` detaches the meridian.
    #[serde(rename = "meridianId", skip_serializing_if = "Option::is_none")]
    pub meridian_id: Option<Option<i32>>,
}
