//! Read-only report rows returned by the `/analytic` endpoints.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::dates::{DateError, is_time_after};
use crate::pagination::PaginatedResponse;

/// Patients handled per clinic today and this month.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ClinicAnalytic {
    pub id: i32,
    pub name: String,
    pub today_patient: u32,
    pub month_patient: u32,
}

/// Patients handled per practitioner today and this month.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UserAnalytic {
    pub id: i32,
    pub name: String,
    pub today_patient: u32,
    pub month_patient: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PatientAnalytic {
    pub id: i32,
    pub no_rm: String,
    pub name: String,
    pub patient_status: String,
    pub total_treatment: u32,
    pub last_treatment_date: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PatientAnalyticSummary {
    pub new_patient: u32,
    pub total_treatment: u32,
}

/// Attendance totals for one staff member.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AbsenceAnalytic {
    pub id: i32,
    pub name: String,
    pub total: u32,
    pub late: u32,
    pub absent: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AbsenceRecord {
    pub id: i32,
    #[serde(rename = "type")]
    pub record_type: String,
    pub in_clinic_time: String,
    pub afterwork_time: String,
    pub absence_code: String,
    pub user_id: i32,
    pub created_at: String,
}

impl AbsenceRecord {
    /// Whether the check-in happened after `late_hour` (`HH:MM:SS`) in the
    /// clinic's local time.
    pub fn is_late(&self, late_hour: &str, offset: FixedOffset) -> Result<bool, DateError> {
        let checked_in = DateTime::parse_from_rfc3339(&self.in_clinic_time)
            .map_err(|_| DateError::InvalidTime(self.in_clinic_time.clone()))?
            .with_timezone(&offset);
        is_time_after(late_hour, checked_in.time())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AbsenceAnalyticDetail {
    /// Check-in time after which an arrival counts as late (`HH:MM:SS`).
    #[serde(rename = "lateHour")]
    pub late_hour: String,
    pub summary: AbsenceAnalytic,
    pub pagination: PaginatedResponse<AbsenceRecord>,
}

impl AbsenceAnalyticDetail {
    /// Records on this page checked in after [`Self::late_hour`].
    pub fn late_records(&self, offset: FixedOffset) -> Result<Vec<&AbsenceRecord>, DateError> {
        let mut late = Vec::new();
        for record in &self.pagination.items {
            if record.is_late(&self.late_hour, offset)? {
                late.push(record);
            }
        }
        Ok(late)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TotalPatientAnalytic {
    pub id: i32,
    pub name: String,
    pub total_patient: u32,
}

/// Breakdown axis of the total-patient report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TotalPatientDimension {
    Clinic,
    User,
    Therapy,
    Complaint,
    DoctorDiagnosis,
}

impl TotalPatientDimension {
    /// Path segment under `/analytic/total-patient`.
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Clinic => "clinic",
            Self::User => "user",
            Self::Therapy => "therapy",
            Self::Complaint => "complaint",
            Self::DoctorDiagnosis => "doctor-diagnosis",
        }
    }
}
