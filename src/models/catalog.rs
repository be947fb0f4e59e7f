//! Room and course-unit catalogs.
//!
//! Both are external inputs: the room catalog comes from the settings
//! service, the unit catalog from course metadata. The engine consumes
//! them read-only, for room availability filtering and load aggregation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Session;

/// Candidate rooms by session type, as supplied by the settings service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCatalog {
    /// Rooms usable for lecture sessions.
    #[serde(default)]
    pub lecture: Vec<String>,
    /// Rooms usable for laboratory sessions.
    #[serde(default)]
    pub lab: Vec<String>,
}

impl RoomCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a lecture room.
    pub fn with_lecture_room(mut self, room: impl Into<String>) -> Self {
        self.lecture.push(room.into());
        self
    }

    /// Adds a laboratory room.
    pub fn with_lab_room(mut self, room: impl Into<String>) -> Self {
        self.lab.push(room.into());
        self
    }

    /// The candidate room set for a session type.
    pub fn rooms_for(&self, session: Session) -> &[String] {
        match session {
            Session::Lecture => &self.lecture,
            Session::Lab => &self.lab,
        }
    }
}

/// Lecture and laboratory unit counts for one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseUnits {
    /// Lecture units per week.
    #[serde(rename = "unitsLecture")]
    pub lecture: u32,
    /// Laboratory units per week.
    #[serde(rename = "unitsLab")]
    pub lab: u32,
}

impl CourseUnits {
    /// Creates a unit record.
    pub fn new(lecture: u32, lab: u32) -> Self {
        Self { lecture, lab }
    }

    /// Unit weight of one event of the given session type.
    ///
    /// Each occurrence carries the course's full lecture (or lab) unit
    /// count; units are never divided across weekly occurrences.
    pub fn for_session(&self, session: Session) -> u32 {
        match session {
            Session::Lecture => self.lecture,
            Session::Lab => self.lab,
        }
    }
}

/// Per-course unit metadata, keyed by course code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCatalog {
    courses: HashMap<String, CourseUnits>,
}

impl UnitCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds unit counts for a course.
    pub fn with_course(mut self, code: impl Into<String>, lecture: u32, lab: u32) -> Self {
        self.courses
            .insert(code.into(), CourseUnits::new(lecture, lab));
        self
    }

    /// Looks up unit counts by course code.
    pub fn units_for(&self, course_code: &str) -> Option<CourseUnits> {
        self.courses.get(course_code).copied()
    }

    /// Number of courses in the catalog.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
