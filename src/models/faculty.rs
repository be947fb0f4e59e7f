//! Faculty roster model.
//!
//! The roster is CRUD-managed by an external faculty service; the engine
//! treats it as read-only input. Assigned teaching units are never stored
//! on the record; they are recomputed from the current schedule by the
//! load aggregator.
//!
//! Wire field names follow the faculty service's contract
//! (`AcademicRank`, `Educational_attainment`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Employment status, as used by load classification policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentStatus {
    #[serde(rename = "Full Time")]
    FullTime,
    #[serde(rename = "Part Time")]
    PartTime,
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmploymentStatus::FullTime => f.write_str("Full Time"),
            EmploymentStatus::PartTime => f.write_str("Part Time"),
        }
    }
}

/// A faculty roster entry. `name` is unique within the roster and is the
/// value written into [`ScheduleEvent::faculty`](super::ScheduleEvent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyMember {
    /// Roster identifier assigned by the faculty service.
    #[serde(default)]
    pub id: Option<i64>,
    /// Full name, unique within the roster.
    pub name: String,
    /// Subject specialization.
    #[serde(default)]
    pub specialization: String,
    #[serde(rename = "AcademicRank", default)]
    pub academic_rank: Option<String>,
    #[serde(rename = "Department", default)]
    pub department: Option<String>,
    #[serde(rename = "Educational_attainment", default)]
    pub educational_attainment: Option<String>,
    #[serde(rename = "Sex", default)]
    pub sex: Option<String>,
    /// Full Time or Part Time. Missing on legacy records.
    #[serde(rename = "Status", default)]
    pub status: Option<EmploymentStatus>,
}

impl FacultyMember {
    /// Creates a roster entry with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            specialization: String::new(),
            academic_rank: None,
            department: None,
            educational_attainment: None,
            sex: None,
            status: None,
        }
    }

    /// Sets the roster identifier.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the specialization.
    pub fn with_specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = specialization.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Sets the employment status.
    pub fn with_status(mut self, status: EmploymentStatus) -> Self {
        self.status = Some(status);
        self
    }
}
