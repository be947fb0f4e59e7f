//! Snapshot integrity checks.
//!
//! Structural validation of an event snapshot and faculty roster before
//! consolidation or editing. Detects:
//! - Duplicate schedule ids
//! - Malformed period strings
//! - Year levels outside 1-4 and block letters outside A-F
//! - Duplicate faculty names in the roster
//! - Events naming a faculty member missing from the roster
//!
//! All issues are collected in one pass rather than failing on the first.

use std::collections::HashSet;

use crate::models::{FacultyMember, ScheduleEvent};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two events share the same schedule id.
    DuplicateScheduleId,
    /// An event's period string does not parse.
    MalformedPeriod,
    /// An event's year level is outside 1-4.
    YearOutOfRange,
    /// An event's block letter is outside A-F.
    InvalidBlock,
    /// Two roster entries share the same name.
    DuplicateFacultyName,
    /// An event names a faculty member not present in the roster.
    UnknownFaculty,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an event snapshot against its faculty roster.
///
/// Checks:
/// 1. No duplicate schedule ids
/// 2. Every period string parses
/// 3. Year levels within 1-4, blocks within A-F
/// 4. No duplicate names in the roster
/// 5. Every assigned faculty name exists in the roster
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_snapshot(events: &[ScheduleEvent], roster: &[FacultyMember]) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect roster names
    let mut roster_names = HashSet::new();
    for f in roster {
        if !roster_names.insert(f.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateFacultyName,
                format!("Duplicate faculty name: {}", f.name),
            ));
        }
    }

    let mut seen_ids = HashSet::new();
    for event in events {
        if !seen_ids.insert(event.schedule_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateScheduleId,
                format!("Duplicate schedule_id: {}", event.schedule_id),
            ));
        }

        if let Err(err) = event.parsed_period() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedPeriod,
                format!("Event {}: {err}", event.schedule_id),
            ));
        }

        if !(1..=4).contains(&event.year) {
            errors.push(ValidationError::new(
                ValidationErrorKind::YearOutOfRange,
                format!("Event {}: year {} outside 1-4", event.schedule_id, event.year),
            ));
        }

        if !('A'..='F').contains(&event.block) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBlock,
                format!(
                    "Event {}: block '{}' outside A-F",
                    event.schedule_id, event.block
                ),
            ));
        }

        if event.is_assigned() && !roster_names.contains(event.faculty.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownFaculty,
                format!(
                    "Event {} references unknown faculty '{}'",
                    event.schedule_id, event.faculty
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Program, Session, Weekday};

    fn sample_roster() -> Vec<FacultyMember> {
        vec![FacultyMember::new("Dr. X"), FacultyMember::new("Dr. Y")]
    }

    fn sample_event(id: i64) -> ScheduleEvent {
        ScheduleEvent::new(id, "CS101", Session::Lecture, Program::Bscs)
            .with_section(1, 'A')
            .with_day(Weekday::Monday)
            .with_period("7:00 AM - 8:00 AM")
            .with_faculty("Dr. X")
    }

    #[test]
    fn test_valid_snapshot() {
        let events = vec![sample_event(1), sample_event(2)];
        assert!(validate_snapshot(&events, &sample_roster()).is_ok());
    }

    #[test]
    fn test_duplicate_schedule_id() {
        let events = vec![sample_event(1), sample_event(1)];
        let errors = validate_snapshot(&events, &sample_roster()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateScheduleId));
    }

    #[test]
    fn test_malformed_period() {
        let events = vec![sample_event(1).with_period("noon-ish")];
        let errors = validate_snapshot(&events, &sample_roster()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MalformedPeriod));
    }

    #[test]
    fn test_year_and_block_ranges() {
        let events = vec![sample_event(1).with_section(5, 'Z')];
        let errors = validate_snapshot(&events, &sample_roster()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::YearOutOfRange));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidBlock));
    }

    #[test]
    fn test_duplicate_faculty_name() {
        let roster = vec![FacultyMember::new("Dr. X"), FacultyMember::new("Dr. X")];
        let errors = validate_snapshot(&[sample_event(1)], &roster).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateFacultyName));
    }

    #[test]
    fn test_unknown_faculty_reference() {
        let events = vec![sample_event(1).with_faculty("Dr. Nobody")];
        let errors = validate_snapshot(&events, &sample_roster()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownFaculty));
    }

    #[test]
    fn test_unassigned_event_needs_no_roster_entry() {
        let events = vec![sample_event(1).with_faculty("")];
        assert!(validate_snapshot(&events, &[]).is_ok());
    }

    #[test]
    fn test_multiple_errors_collected() {
        let events = vec![
            sample_event(1).with_period("bad"),
            sample_event(1).with_faculty("Dr. Nobody"),
        ];
        let errors = validate_snapshot(&events, &sample_roster()).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
