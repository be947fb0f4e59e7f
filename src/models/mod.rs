//! Timetable domain models.
//!
//! Core data types shared by every engine component: the per-day
//! schedule event, the class period and its parser, the faculty roster
//! entry, and the externally supplied room and course-unit catalogs.
//!
//! All wire-facing types carry serde renames matching the external data
//! contracts; the engine itself owns no transport or storage.

mod catalog;
mod event;
mod faculty;
mod period;

pub use catalog::{CourseUnits, RoomCatalog, UnitCatalog};
pub use event::{Program, ScheduleEvent, Session, Weekday};
pub use faculty::{EmploymentStatus, FacultyMember};
pub use period::{MalformedPeriod, Period};
