//! Consistency and consolidation engine for weekly class timetables.
//!
//! The timetable itself is produced by an external generator; this crate
//! is the presentation-side logic that recurs around it: treating several
//! raw per-day rows as one logical class meeting, collapsing them into
//! merged day/time display rows, and validating that a proposed manual
//! change to day, time, or room does not break room, faculty, or
//! student-section exclusivity.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ScheduleEvent`, `Period`,
//!   `FacultyMember`, `RoomCatalog`, `UnitCatalog`
//! - **`group`**: Assignment-group identity (fine and coarse keys) and
//!   faculty assignment/unassignment
//! - **`consolidate`**: Day and interval merging for grid display
//! - **`conflict`**: Manual-edit validation and the accepted-edit path
//! - **`load`**: Faculty teaching-unit aggregation and classification
//! - **`validation`**: Snapshot integrity checks (duplicate ids,
//!   malformed periods, roster references)
//!
//! # Architecture
//!
//! Every operation is a pure, synchronous function over an in-memory
//! snapshot of the schedule and roster. The engine holds no state and
//! performs no I/O; fetching events, rooms, and faculty, persisting
//! accepted edits, and concurrency control over the authoritative store
//! all belong to the caller.

pub mod conflict;
pub mod consolidate;
pub mod group;
pub mod load;
pub mod models;
pub mod validation;
