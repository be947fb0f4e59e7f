//! Assignment group identity and faculty assignment.
//!
//! Two deliberately distinct granularities of "the same class":
//!
//! - [`GroupKey`] is the fine-grained assignment group: every immutable
//!   attribute except `day`. Two events are the same class meeting iff
//!   their keys match; they may differ only in weekday. This is the unit
//!   for selection, availability checks, and assignment, so operating on
//!   a group applies to every member, never a subset.
//! - [`SectionKey`] is the coarse course/section identity
//!   (course code, program, block). It can span multiple rooms and
//!   periods for the same section, so it must never be used for
//!   placement comparisons; it exists only for bulk unassignment.
//!
//! Assignment operations are pure: they take the current snapshot and
//! return a new event list; persistence belongs to the caller.

use tracing::warn;

use crate::conflict::EditError;
use crate::models::{Period, Program, ScheduleEvent, Session};

/// Fine-grained identity of one class meeting: every event attribute
/// except the weekday.
///
/// A group with both `room` and `faculty` empty is still legitimate:
/// an unplaced, unassigned class repeated on several days.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub course_code: String,
    pub session: Session,
    pub program: Program,
    pub year: u8,
    pub block: char,
    pub room: String,
    pub faculty: String,
    pub period: String,
}

impl GroupKey {
    /// Computes the group key of an event.
    pub fn of(event: &ScheduleEvent) -> Self {
        Self {
            course_code: event.course_code.clone(),
            session: event.session,
            program: event.program,
            year: event.year,
            block: event.block,
            room: event.room.clone(),
            faculty: event.faculty.clone(),
            period: event.period.clone(),
        }
    }

    /// Whether an event belongs to this group (day is ignored).
    pub fn matches(&self, event: &ScheduleEvent) -> bool {
        self.course_code == event.course_code
            && self.session == event.session
            && self.program == event.program
            && self.year == event.year
            && self.block == event.block
            && self.room == event.room
            && self.faculty == event.faculty
            && self.period == event.period
    }
}

/// Coarse course/section identity. Spans rooms and periods; bulk
/// unassignment only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionKey {
    pub course_code: String,
    pub program: Program,
    pub block: char,
}

impl SectionKey {
    /// Creates a section key.
    pub fn new(course_code: impl Into<String>, program: Program, block: char) -> Self {
        Self {
            course_code: course_code.into(),
            program,
            block,
        }
    }

    /// Computes the section key of an event.
    pub fn of(event: &ScheduleEvent) -> Self {
        Self::new(event.course_code.clone(), event.program, event.block)
    }

    /// Whether an event belongs to this section.
    pub fn matches(&self, event: &ScheduleEvent) -> bool {
        self.course_code == event.course_code
            && self.program == event.program
            && self.block == event.block
    }
}

/// All events sharing a fine-grained group key.
pub fn events_in_group<'a>(
    events: &'a [ScheduleEvent],
    key: &GroupKey,
) -> Vec<&'a ScheduleEvent> {
    events.iter().filter(|e| key.matches(e)).collect()
}

/// All events of a course/section.
pub fn events_in_section<'a>(
    events: &'a [ScheduleEvent],
    key: &SectionKey,
) -> Vec<&'a ScheduleEvent> {
    events.iter().filter(|e| key.matches(e)).collect()
}

fn parsed_or_skip(event: &ScheduleEvent) -> Option<Period> {
    match event.parsed_period() {
        Ok(p) => Some(p),
        Err(err) => {
            warn!(schedule_id = event.schedule_id, %err, "skipping event with malformed period");
            None
        }
    }
}

/// Finds the first collision between a group's meetings and a faculty
/// member's existing commitments: same weekday, intersecting periods.
fn first_faculty_conflict<'a>(
    group_events: &[&ScheduleEvent],
    faculty_name: &str,
    all_events: &'a [ScheduleEvent],
) -> Option<&'a ScheduleEvent> {
    all_events.iter().find(|committed| {
        if committed.faculty != faculty_name {
            return false;
        }
        group_events.iter().any(|meeting| {
            meeting.schedule_id != committed.schedule_id
                && meeting.day == committed.day
                && match (parsed_or_skip(meeting), parsed_or_skip(committed)) {
                    (Some(a), Some(b)) => a.overlaps(&b),
                    _ => false,
                }
        })
    })
}

/// Whether a faculty member can take every meeting of a group without a
/// same-day period collision against their current commitments.
pub fn faculty_is_available(
    faculty_name: &str,
    key: &GroupKey,
    all_events: &[ScheduleEvent],
) -> bool {
    let group = events_in_group(all_events, key);
    first_faculty_conflict(&group, faculty_name, all_events).is_none()
}

/// Assigns a faculty member to every meeting of an assignment group.
///
/// Uniform by construction: either the whole group is re-labeled or the
/// assignment is rejected. Rejects with [`EditError::OverlapDetected`]
/// when any meeting collides with the faculty member's existing
/// commitments, and with [`EditError::UnknownSection`] when the group has
/// no members. Returns the full re-labeled event list.
pub fn assign_faculty(
    all_events: &[ScheduleEvent],
    key: &GroupKey,
    faculty_name: &str,
) -> Result<Vec<ScheduleEvent>, EditError> {
    let group = events_in_group(all_events, key);
    if group.is_empty() {
        return Err(EditError::UnknownSection {
            course_code: key.course_code.clone(),
            program: key.program,
            block: key.block,
        });
    }
    if let Some(committed) = first_faculty_conflict(&group, faculty_name, all_events) {
        return Err(EditError::OverlapDetected {
            schedule_id: committed.schedule_id,
            day: committed.day,
        });
    }

    Ok(all_events
        .iter()
        .map(|e| {
            if key.matches(e) {
                e.clone().with_faculty(faculty_name)
            } else {
                e.clone()
            }
        })
        .collect())
}

/// Removes the faculty assignment from every event of a course/section.
///
/// Coarse by design: clears all rooms/times of the section at once.
/// Rejects with [`EditError::UnknownSection`] when nothing matches.
pub fn unassign_section(
    all_events: &[ScheduleEvent],
    key: &SectionKey,
) -> Result<Vec<ScheduleEvent>, EditError> {
    if events_in_section(all_events, key).is_empty() {
        return Err(EditError::UnknownSection {
            course_code: key.course_code.clone(),
            program: key.program,
            block: key.block,
        });
    }

    Ok(all_events
        .iter()
        .map(|e| {
            if key.matches(e) {
                e.clone().with_faculty("")
            } else {
                e.clone()
            }
        })
        .collect())
}

/// Clears a faculty member's name from the whole schedule, e.g. after
/// the roster entry is archived.
pub fn clear_faculty(all_events: &[ScheduleEvent], faculty_name: &str) -> Vec<ScheduleEvent> {
    all_events
        .iter()
        .map(|e| {
            if e.faculty == faculty_name {
                e.clone().with_faculty("")
            } else {
                e.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn meeting(id: i64, day: Weekday) -> ScheduleEvent {
        ScheduleEvent::new(id, "CS101", Session::Lecture, Program::Bscs)
            .with_section(1, 'A')
            .with_day(day)
            .with_period("7:00 AM - 8:00 AM")
            .with_room("Room 101")
    }

    #[test]
    fn test_group_key_ignores_day() {
        let mon = meeting(1, Weekday::Monday);
        let wed = meeting(2, Weekday::Wednesday);
        assert_eq!(GroupKey::of(&mon), GroupKey::of(&wed));
        assert!(GroupKey::of(&mon).matches(&wed));
    }

    #[test]
    fn test_group_key_splits_on_room_or_period() {
        let base = meeting(1, Weekday::Monday);
        let other_room = meeting(2, Weekday::Monday).with_room("Room 102");
        let other_time = meeting(3, Weekday::Monday).with_period("8:00 AM - 9:00 AM");
        let key = GroupKey::of(&base);
        assert!(!key.matches(&other_room));
        assert!(!key.matches(&other_time));
    }

    #[test]
    fn test_unplaced_unassigned_group_is_legitimate() {
        let a = ScheduleEvent::new(1, "CS101", Session::Lecture, Program::Bscs)
            .with_day(Weekday::Monday)
            .with_period("7:00 AM - 8:00 AM");
        let b = a.clone().with_day(Weekday::Thursday);
        let b = ScheduleEvent { schedule_id: 2, ..b };
        let events = vec![a.clone(), b];

        let members = events_in_group(&events, &GroupKey::of(&a));
        assert_eq!(members.len(), 2);
    }

    #[test]
    fn test_section_key_spans_rooms_and_periods() {
        let lec = meeting(1, Weekday::Monday);
        let lab = ScheduleEvent::new(2, "CS101", Session::Lab, Program::Bscs)
            .with_section(1, 'A')
            .with_day(Weekday::Tuesday)
            .with_period("1:00 PM - 2:30 PM")
            .with_room("Comlab 1");
        let other_section = meeting(3, Weekday::Monday).with_section(1, 'B');
        let events = vec![lec.clone(), lab, other_section];

        let members = events_in_section(&events, &SectionKey::of(&lec));
        assert_eq!(members.len(), 2);
    }

    #[test]
    fn test_assign_faculty_uniform_over_group() {
        let events = vec![meeting(1, Weekday::Monday), meeting(2, Weekday::Wednesday)];
        let key = GroupKey::of(&events[0]);

        let updated = assign_faculty(&events, &key, "Dr. X").unwrap();
        assert!(updated.iter().all(|e| e.faculty == "Dr. X"));
        assert_eq!(updated.len(), 2);
    }

    #[test]
    fn test_assign_faculty_rejects_collision() {
        // Dr. X already teaches Monday 7:00-8:00 elsewhere.
        let committed = ScheduleEvent::new(9, "IT205", Session::Lecture, Program::Bsit)
            .with_section(2, 'B')
            .with_day(Weekday::Monday)
            .with_period("7:30 AM - 8:30 AM")
            .with_room("Room 102")
            .with_faculty("Dr. X");
        let events = vec![meeting(1, Weekday::Monday), committed];
        let key = GroupKey::of(&events[0]);

        assert!(!faculty_is_available("Dr. X", &key, &events));
        let err = assign_faculty(&events, &key, "Dr. X").unwrap_err();
        assert!(matches!(err, EditError::OverlapDetected { schedule_id: 9, .. }));

        // A faculty member with no commitments is free to take the group.
        assert!(faculty_is_available("Dr. Y", &key, &events));
    }

    #[test]
    fn test_assign_faculty_unknown_group() {
        let events = vec![meeting(1, Weekday::Monday)];
        let mut key = GroupKey::of(&events[0]);
        key.course_code = "XX999".into();
        assert!(matches!(
            assign_faculty(&events, &key, "Dr. X"),
            Err(EditError::UnknownSection { .. })
        ));
    }

    #[test]
    fn test_unassign_section_clears_all_meetings() {
        let lec = meeting(1, Weekday::Monday).with_faculty("Dr. X");
        let lab = ScheduleEvent::new(2, "CS101", Session::Lab, Program::Bscs)
            .with_section(1, 'A')
            .with_day(Weekday::Tuesday)
            .with_period("1:00 PM - 2:30 PM")
            .with_room("Comlab 1")
            .with_faculty("Dr. X");
        let unrelated = ScheduleEvent::new(3, "IT205", Session::Lecture, Program::Bsit)
            .with_day(Weekday::Friday)
            .with_period("7:00 AM - 8:00 AM")
            .with_faculty("Dr. X");
        let events = vec![lec.clone(), lab, unrelated];

        let updated = unassign_section(&events, &SectionKey::of(&lec)).unwrap();
        assert!(updated[0].faculty.is_empty());
        assert!(updated[1].faculty.is_empty());
        // Other sections keep their assignment.
        assert_eq!(updated[2].faculty, "Dr. X");

        let missing = SectionKey::new("XX999", Program::Bsit, 'A');
        assert!(unassign_section(&events, &missing).is_err());
    }

    #[test]
    fn test_clear_faculty_everywhere() {
        let events = vec![
            meeting(1, Weekday::Monday).with_faculty("Dr. X"),
            meeting(2, Weekday::Wednesday).with_faculty("Dr. Y"),
        ];
        let updated = clear_faculty(&events, "Dr. X");
        assert!(updated[0].faculty.is_empty());
        assert_eq!(updated[1].faculty, "Dr. Y");
    }
}
