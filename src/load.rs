//! Faculty teaching load aggregation.
//!
//! Sums a faculty member's assigned units from the **raw** per-day event
//! list: every stored occurrence contributes the course's full lecture
//! (or lab) unit count once. Aggregating before day/interval merging is
//! deliberate: merged rows would otherwise collapse weekly meetings and
//! undercount, and counting per merged weekday label would overcount.
//!
//! Classification thresholds are display policy, supplied by the caller
//! through [`LoadPolicy`]; the raw numeric aggregate is always exposed so
//! presentation can change without touching the engine.

use tracing::warn;

use crate::models::{EmploymentStatus, FacultyMember, ScheduleEvent, UnitCatalog};

/// Load classification for display badges, ordered from light to heavy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadLevel {
    /// Below the nominal band.
    Underloaded,
    /// Within the nominal band.
    Nominal,
    /// Above the nominal band.
    Overloaded,
}

/// Inclusive nominal unit band for one employment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadBand {
    /// Units below this are underloaded.
    pub nominal_min: u32,
    /// Units above this are overloaded.
    pub nominal_max: u32,
}

impl LoadBand {
    /// Creates a band.
    pub fn new(nominal_min: u32, nominal_max: u32) -> Self {
        Self {
            nominal_min,
            nominal_max,
        }
    }

    /// Classifies a unit total against this band.
    pub fn classify(&self, units: u32) -> LoadLevel {
        if units < self.nominal_min {
            LoadLevel::Underloaded
        } else if units > self.nominal_max {
            LoadLevel::Overloaded
        } else {
            LoadLevel::Nominal
        }
    }
}

/// Configurable classification policy, one band per employment status.
///
/// The defaults are a plausible starting point, not institutional
/// policy; callers are expected to supply their own bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadPolicy {
    /// Band applied to full-time faculty (and records with no status).
    pub full_time: LoadBand,
    /// Band applied to part-time faculty.
    pub part_time: LoadBand,
}

impl Default for LoadPolicy {
    fn default() -> Self {
        Self {
            full_time: LoadBand::new(15, 24),
            part_time: LoadBand::new(6, 12),
        }
    }
}

impl LoadPolicy {
    /// Classifies a faculty member's unit total.
    ///
    /// Records without an employment status fall under the full-time band.
    pub fn classify(&self, faculty: &FacultyMember, units: u32) -> LoadLevel {
        let band = match faculty.status {
            Some(EmploymentStatus::PartTime) => self.part_time,
            Some(EmploymentStatus::FullTime) | None => self.full_time,
        };
        band.classify(units)
    }
}

/// Total units assigned to a faculty member across the raw event list.
///
/// Each occurrence contributes the course's full lecture or lab unit
/// count. Events whose course is missing from the catalog contribute
/// zero and are logged.
pub fn assigned_units(
    faculty_name: &str,
    events: &[ScheduleEvent],
    units: &UnitCatalog,
) -> u32 {
    events
        .iter()
        .filter(|e| e.faculty == faculty_name)
        .map(|e| match units.units_for(&e.course_code) {
            Some(u) => u.for_session(e.session),
            None => {
                warn!(
                    schedule_id = e.schedule_id,
                    course_code = %e.course_code,
                    "course missing from unit catalog; counting zero units"
                );
                0
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Program, Session, Weekday};

    fn occurrence(id: i64, code: &str, session: Session, day: Weekday) -> ScheduleEvent {
        ScheduleEvent::new(id, code, session, Program::Bsit)
            .with_day(day)
            .with_period("7:00 AM - 8:00 AM")
            .with_faculty("Dr. X")
    }

    fn catalog() -> UnitCatalog {
        UnitCatalog::new()
            .with_course("CS301", 3, 0)
            .with_course("CS315", 2, 2)
    }

    #[test]
    fn test_assigned_units_per_occurrence() {
        // 2 lecture occurrences of a 3-lecture-unit course and 1 lab
        // occurrence of a 2-lab-unit course: 3 + 3 + 2 = 8.
        let events = vec![
            occurrence(1, "CS301", Session::Lecture, Weekday::Monday),
            occurrence(2, "CS301", Session::Lecture, Weekday::Wednesday),
            occurrence(3, "CS315", Session::Lab, Weekday::Friday),
        ];
        assert_eq!(assigned_units("Dr. X", &events, &catalog()), 8);
    }

    #[test]
    fn test_assigned_units_ignores_other_faculty() {
        let events = vec![
            occurrence(1, "CS301", Session::Lecture, Weekday::Monday),
            occurrence(2, "CS301", Session::Lecture, Weekday::Tuesday).with_faculty("Dr. Y"),
        ];
        assert_eq!(assigned_units("Dr. X", &events, &catalog()), 3);
        assert_eq!(assigned_units("Dr. Y", &events, &catalog()), 3);
        assert_eq!(assigned_units("Dr. Z", &events, &catalog()), 0);
    }

    #[test]
    fn test_assigned_units_unknown_course_counts_zero() {
        let events = vec![occurrence(1, "XX999", Session::Lecture, Weekday::Monday)];
        assert_eq!(assigned_units("Dr. X", &events, &catalog()), 0);
    }

    #[test]
    fn test_band_classification() {
        let band = LoadBand::new(15, 24);
        assert_eq!(band.classify(10), LoadLevel::Underloaded);
        assert_eq!(band.classify(15), LoadLevel::Nominal);
        assert_eq!(band.classify(24), LoadLevel::Nominal);
        assert_eq!(band.classify(25), LoadLevel::Overloaded);
    }

    #[test]
    fn test_policy_selects_band_by_status() {
        let policy = LoadPolicy::default();
        let full = FacultyMember::new("A").with_status(EmploymentStatus::FullTime);
        let part = FacultyMember::new("B").with_status(EmploymentStatus::PartTime);
        let unknown = FacultyMember::new("C");

        assert_eq!(policy.classify(&full, 10), LoadLevel::Underloaded);
        assert_eq!(policy.classify(&part, 10), LoadLevel::Nominal);
        assert_eq!(policy.classify(&unknown, 10), LoadLevel::Underloaded);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(LoadLevel::Underloaded < LoadLevel::Nominal);
        assert!(LoadLevel::Nominal < LoadLevel::Overloaded);
    }
}
