//! Manual edit conflict validation.
//!
//! Given a proposed `(day, start time, room)` for one event, determines
//! which candidate rooms remain free and whether the move would collide
//! with another event of the same student section or the same faculty
//! member. Durations are policy-fixed by session type (lecture 60
//! minutes, lab 90) and are not part of the proposal.
//!
//! All checks use the half-open overlap test
//! `existing.start < end && start < existing.end`, so back-to-back
//! periods never conflict. [`validate_edit`] is a pure availability
//! query; [`apply_edit`] is the accepted-edit path, returning the
//! re-labeled event while the caller owns persisting it into the
//! canonical list.

use thiserror::Error;
use tracing::warn;

use crate::models::{Period, Program, RoomCatalog, ScheduleEvent, Weekday};

/// A proposed manual placement for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposedSlot {
    /// Target weekday.
    pub day: Weekday,
    /// Proposed start, minutes since midnight. The end is derived from
    /// the event's session type.
    pub start_min: u16,
    /// Chosen room, if the user has picked one yet.
    pub room: Option<String>,
}

impl ProposedSlot {
    /// Creates a proposal without a chosen room.
    pub fn new(day: Weekday, start_min: u16) -> Self {
        Self {
            day,
            start_min,
            room: None,
        }
    }

    /// Sets the chosen room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }
}

/// Result of validating a proposed edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCheck {
    /// Candidate rooms for the event's session type that are free on the
    /// proposed day and interval. Empty means no room fits.
    pub available_rooms: Vec<String>,
    /// Whether the proposal collides with another event of the same
    /// section, or of the same faculty member when one is assigned.
    pub has_overlap: bool,
}

impl EditCheck {
    /// Whether a save with the given room should be accepted.
    pub fn accepts(&self, room: &str) -> bool {
        !self.has_overlap && self.available_rooms.iter().any(|r| r == room)
    }
}

/// A rejected or inapplicable manual edit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// No event carries the requested schedule id.
    #[error("no event with schedule_id {0}")]
    UnknownEvent(i64),
    /// Every candidate room is occupied, or the chosen room is not free.
    #[error("no room available on {day} for {period}")]
    NoRoomAvailable {
        day: Weekday,
        period: Period,
    },
    /// The proposal collides with another event; never auto-resolved.
    #[error("overlaps event {schedule_id} on {day}")]
    OverlapDetected {
        schedule_id: i64,
        day: Weekday,
    },
    /// The fixed duration runs past midnight from the proposed start.
    #[error("a {duration_min} minute session starting at minute {start_min} crosses midnight")]
    CrossesMidnight {
        start_min: u16,
        duration_min: u16,
    },
    /// No events match the targeted assignment group or section.
    #[error("no events match section {course_code} {program} block {block}")]
    UnknownSection {
        course_code: String,
        program: Program,
        block: char,
    },
}

/// The proposed interval for an event: fixed duration by session type.
fn proposed_period(event: &ScheduleEvent, slot: &ProposedSlot) -> Period {
    Period::starting_at(slot.start_min, event.session.duration_min())
}

/// Whether the proposal's derived end still falls on the same calendar
/// day. The engine is the only constructor of edited periods, so this
/// is where the no-midnight-wraparound invariant is enforced.
fn fits_in_day(event: &ScheduleEvent, slot: &ProposedSlot) -> bool {
    slot.start_min as u32 + (event.session.duration_min() as u32) < 24 * 60
}

/// Parses another event's period for comparison, skipping malformed rows.
fn comparable_period(other: &ScheduleEvent) -> Option<Period> {
    match other.parsed_period() {
        Ok(p) => Some(p),
        Err(err) => {
            warn!(schedule_id = other.schedule_id, %err, "skipping event with malformed period");
            None
        }
    }
}

/// Finds the first event colliding with the proposal.
///
/// Checks section exclusivity (same program, year, block on the target
/// day) and, when the event has a faculty member assigned, faculty
/// exclusivity on that day. Room occupancy is handled separately by the
/// availability filter.
fn first_conflict<'a>(
    event: &ScheduleEvent,
    slot: &ProposedSlot,
    all_events: &'a [ScheduleEvent],
) -> Option<&'a ScheduleEvent> {
    let proposed = proposed_period(event, slot);

    all_events.iter().find(|other| {
        if other.schedule_id == event.schedule_id || other.day != slot.day {
            return false;
        }
        let same_section = other.program == event.program
            && other.block == event.block
            && other.year == event.year;
        let same_faculty = event.is_assigned() && other.faculty == event.faculty;
        if !same_section && !same_faculty {
            return false;
        }
        comparable_period(other).is_some_and(|p| p.overlaps(&proposed))
    })
}

/// Validates a proposed day/time move for one event.
///
/// Returns the filtered candidate room list for the event's session type
/// and whether the proposal overlaps a section or faculty commitment.
/// A proposal whose fixed duration would run past midnight has no
/// available rooms. Pure: never mutates the schedule. Other events with
/// malformed periods are skipped and logged rather than failing the
/// whole check.
pub fn validate_edit(
    event: &ScheduleEvent,
    slot: &ProposedSlot,
    all_events: &[ScheduleEvent],
    rooms: &RoomCatalog,
) -> EditCheck {
    if !fits_in_day(event, slot) {
        return EditCheck {
            available_rooms: Vec::new(),
            has_overlap: false,
        };
    }
    let proposed = proposed_period(event, slot);

    // Parse each same-day peer once, not once per candidate room.
    let occupied: Vec<(&ScheduleEvent, Period)> = all_events
        .iter()
        .filter(|other| {
            other.schedule_id != event.schedule_id
                && other.day == slot.day
                && other.is_placed()
        })
        .filter_map(|other| comparable_period(other).map(|p| (other, p)))
        .collect();

    let available_rooms = rooms
        .rooms_for(event.session)
        .iter()
        .filter(|candidate| {
            !occupied
                .iter()
                .any(|(other, p)| other.room == **candidate && p.overlaps(&proposed))
        })
        .cloned()
        .collect();

    EditCheck {
        available_rooms,
        has_overlap: first_conflict(event, slot, all_events).is_some(),
    }
}

/// Applies an accepted manual edit, returning the re-labeled event.
///
/// Rejects with [`EditError::CrossesMidnight`] when the fixed duration
/// runs past midnight from the proposed start, with
/// [`EditError::OverlapDetected`] on a section or faculty collision,
/// and with [`EditError::NoRoomAvailable`] when no room was chosen or
/// the chosen room is not in the free list. On success the returned
/// event carries the new day, the canonical period text for
/// `start + fixed duration`, and the chosen room; the caller replaces
/// the original event in its store.
pub fn apply_edit(
    all_events: &[ScheduleEvent],
    schedule_id: i64,
    slot: &ProposedSlot,
    rooms: &RoomCatalog,
) -> Result<ScheduleEvent, EditError> {
    let event = all_events
        .iter()
        .find(|e| e.schedule_id == schedule_id)
        .ok_or(EditError::UnknownEvent(schedule_id))?;

    if !fits_in_day(event, slot) {
        return Err(EditError::CrossesMidnight {
            start_min: slot.start_min,
            duration_min: event.session.duration_min(),
        });
    }

    if let Some(other) = first_conflict(event, slot, all_events) {
        return Err(EditError::OverlapDetected {
            schedule_id: other.schedule_id,
            day: slot.day,
        });
    }

    let check = validate_edit(event, slot, all_events, rooms);
    let period = proposed_period(event, slot);
    let room = slot
        .room
        .as_deref()
        .filter(|r| check.available_rooms.iter().any(|a| a == r))
        .ok_or(EditError::NoRoomAvailable {
            day: slot.day,
            period,
        })?;

    let mut updated = event.clone();
    updated.day = slot.day;
    updated.period = period.to_string();
    updated.room = room.to_string();
    Ok(updated)
}
