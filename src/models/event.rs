//! Schedule event model.
//!
//! A `ScheduleEvent` is one scheduled occurrence of a course session on
//! one weekday, as produced by the external schedule generator. The
//! engine never creates events; it only re-labels `day`, `period`,
//! `room`, and `faculty` through the validated edit paths, or rejects
//! the re-label.
//!
//! Field names on the wire follow the generator's contract
//! (`schedule_id`, `courseCode`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{MalformedPeriod, Period};

/// Day of week, in timetable display precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in display precedence order (Monday first).
    ///
    /// Every component that concatenates or sorts day labels must use
    /// this single constant so merged output is consistent everywhere.
    pub const ORDERED: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Display precedence, 1 (Monday) through 7 (Sunday).
    #[inline]
    pub fn precedence(&self) -> u8 {
        *self as u8 + 1
    }

    /// Abbreviation used in merged day labels.
    pub fn abbrev(&self) -> &'static str {
        match self {
            Weekday::Monday => "M",
            Weekday::Tuesday => "T",
            Weekday::Wednesday => "W",
            Weekday::Thursday => "Th",
            Weekday::Friday => "F",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }

    /// Full English name, as used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Session type. Determines the fixed duration of a manual edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Session {
    /// Lecture session, 60 minutes per occurrence.
    Lecture,
    /// Laboratory session, 90 minutes per occurrence.
    #[serde(rename = "Laboratory", alias = "Lab")]
    Lab,
}

impl Session {
    /// Policy-fixed duration of one manually placed occurrence, in minutes.
    ///
    /// Not user-editable: lectures are always 60 minutes, labs 90.
    #[inline]
    pub fn duration_min(&self) -> u16 {
        match self {
            Session::Lecture => 60,
            Session::Lab => 90,
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Session::Lecture => f.write_str("Lecture"),
            Session::Lab => f.write_str("Laboratory"),
        }
    }
}

/// Degree program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Program {
    #[serde(rename = "BSIT")]
    Bsit,
    #[serde(rename = "BSCS")]
    Bscs,
    #[serde(rename = "BSEMC")]
    Bsemc,
}

impl Program {
    /// Program code, as used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Program::Bsit => "BSIT",
            Program::Bscs => "BSCS",
            Program::Bsemc => "BSEMC",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One scheduled occurrence of a course session on one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    /// Unique, immutable event identifier.
    pub schedule_id: i64,
    /// Course code (e.g., "IT101").
    #[serde(rename = "courseCode")]
    pub course_code: String,
    /// Course title.
    #[serde(default)]
    pub title: String,
    /// Session type.
    pub session: Session,
    /// Degree program of the section.
    pub program: Program,
    /// Year level, 1 through 4.
    pub year: u8,
    /// Block letter, A through F.
    pub block: char,
    /// Weekday of this occurrence.
    pub day: Weekday,
    /// Display time range, e.g. `"7:00 AM - 8:00 AM"`.
    ///
    /// Kept in wire form; parse with [`ScheduleEvent::parsed_period`].
    /// A malformed value makes the event structurally invalid; the
    /// consolidators skip such events and report them, never crash.
    pub period: String,
    /// Assigned room. Empty string means unplaced.
    #[serde(default)]
    pub room: String,
    /// Assigned faculty name. Empty string means unassigned.
    #[serde(default)]
    pub faculty: String,
}

impl ScheduleEvent {
    /// Creates an event with empty title, room, and faculty, placed on
    /// Monday with an empty period.
    pub fn new(
        schedule_id: i64,
        course_code: impl Into<String>,
        session: Session,
        program: Program,
    ) -> Self {
        Self {
            schedule_id,
            course_code: course_code.into(),
            title: String::new(),
            session,
            program,
            year: 1,
            block: 'A',
            day: Weekday::Monday,
            period: String::new(),
            room: String::new(),
            faculty: String::new(),
        }
    }

    /// Sets the course title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets year level and block letter.
    pub fn with_section(mut self, year: u8, block: char) -> Self {
        self.year = year;
        self.block = block;
        self
    }

    /// Sets the weekday.
    pub fn with_day(mut self, day: Weekday) -> Self {
        self.day = day;
        self
    }

    /// Sets the display period string.
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = period.into();
        self
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Sets the faculty name.
    pub fn with_faculty(mut self, faculty: impl Into<String>) -> Self {
        self.faculty = faculty.into();
        self
    }

    /// Whether a faculty member is assigned (non-blank name).
    pub fn is_assigned(&self) -> bool {
        !self.faculty.trim().is_empty()
    }

    /// Whether a room is assigned (non-blank name).
    pub fn is_placed(&self) -> bool {
        !self.room.trim().is_empty()
    }

    /// Parses the display period into a numeric interval.
    pub fn parsed_period(&self) -> Result<Period, MalformedPeriod> {
        self.period.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_precedence_matches_ordered() {
        for (i, day) in Weekday::ORDERED.iter().enumerate() {
            assert_eq!(day.precedence() as usize, i + 1);
        }
        assert_eq!(Weekday::Monday.precedence(), 1);
        assert_eq!(Weekday::Sunday.precedence(), 7);
    }

    #[test]
    fn test_weekday_abbrevs() {
        let labels: Vec<&str> = Weekday::ORDERED.iter().map(|d| d.abbrev()).collect();
        assert_eq!(labels, ["M", "T", "W", "Th", "F", "Sat", "Sun"]);
    }

    #[test]
    fn test_session_durations() {
        assert_eq!(Session::Lecture.duration_min(), 60);
        assert_eq!(Session::Lab.duration_min(), 90);
    }

    #[test]
    fn test_event_builder() {
        let e = ScheduleEvent::new(7, "CS101", Session::Lecture, Program::Bscs)
            .with_title("Intro to Computing")
            .with_section(2, 'B')
            .with_day(Weekday::Wednesday)
            .with_period("7:00 AM - 8:00 AM")
            .with_room("Room 101")
            .with_faculty("Dr. X");

        assert_eq!(e.schedule_id, 7);
        assert_eq!(e.year, 2);
        assert_eq!(e.block, 'B');
        assert!(e.is_assigned());
        assert!(e.is_placed());
        assert_eq!(e.parsed_period().unwrap().duration_min(), 60);
    }

    #[test]
    fn test_unassigned_unplaced() {
        let e = ScheduleEvent::new(1, "CS101", Session::Lab, Program::Bsit);
        assert!(!e.is_assigned());
        assert!(!e.is_placed());
        assert!(e.parsed_period().is_err());

        let blank = e.with_faculty("   ").with_room(" ");
        assert!(!blank.is_assigned());
        assert!(!blank.is_placed());
    }

    #[test]
    fn test_event_wire_contract() {
        let json = r#"{
            "schedule_id": 42,
            "courseCode": "IT101",
            "title": "Introduction to Computing",
            "session": "Laboratory",
            "program": "BSIT",
            "year": 1,
            "block": "A",
            "day": "Thursday",
            "period": "9:00 AM - 10:30 AM",
            "room": "Comlab 2",
            "faculty": ""
        }"#;
        let e: ScheduleEvent = serde_json::from_str(json).unwrap();
        assert_eq!(e.session, Session::Lab);
        assert_eq!(e.program, Program::Bsit);
        assert_eq!(e.day, Weekday::Thursday);
        assert!(!e.is_assigned());

        let back = serde_json::to_value(&e).unwrap();
        assert_eq!(back["courseCode"], "IT101");
        assert_eq!(back["session"], "Laboratory");
        assert_eq!(back["day"], "Thursday");
    }
}
