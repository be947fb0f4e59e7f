//! Day and interval consolidation for display.
//!
//! The generator emits one raw row per weekday occurrence. For grids and
//! exports those rows collapse in two passes:
//!
//! 1. **Day consolidation**: events identical except for weekday become
//!    one row whose day label concatenates weekday abbreviations in
//!    [`Weekday::ORDERED`] precedence (`"MW"`, `"TThSat"`, ...).
//! 2. **Interval consolidation**: day-consolidated rows that are
//!    identical and exactly back-to-back in time fuse into one wider
//!    period. A single left-to-right pass over rows sorted by the full
//!    identity key; the sort key ends in period start, which is what
//!    guarantees mergeable rows end up adjacent.
//!
//! Events whose period text does not parse are structurally invalid:
//! they are skipped and reported, never allowed to fail the whole batch.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use crate::group::GroupKey;
use crate::models::{Period, Program, ScheduleEvent, Session, Weekday};

/// One consolidated display row: a class meeting, possibly spanning
/// several weekdays (`day` is a merged label, not a single weekday).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRow {
    /// Schedule id of the first merged member (by day precedence).
    pub schedule_id: i64,
    #[serde(rename = "courseCode")]
    pub course_code: String,
    pub title: String,
    pub session: Session,
    pub program: Program,
    pub year: u8,
    pub block: char,
    /// Merged day label, e.g. `"MW"`.
    pub day: String,
    /// Display time range; widened by interval consolidation.
    pub period: String,
    pub room: String,
    pub faculty: String,
    /// Every raw event folded into this row, in merge order.
    pub member_ids: Vec<i64>,
}

impl DisplayRow {
    fn period_start(&self) -> Option<u16> {
        self.period.parse::<Period>().ok().map(|p| p.start_min)
    }

    /// Total class minutes this row represents: duration × weekday count.
    pub fn total_minutes(&self) -> u32 {
        let duration = self
            .period
            .parse::<Period>()
            .map(|p| p.duration_min() as u32)
            .unwrap_or(0);
        duration * self.day_count() as u32
    }

    /// Number of distinct weekdays in the merged day label.
    pub fn day_count(&self) -> usize {
        let mut days = self.days();
        days.dedup();
        days.len()
    }

    /// The weekdays represented by the merged label.
    pub fn days(&self) -> Vec<Weekday> {
        // Longest-abbreviation-first so "Th" is not consumed as "T".
        let mut rest = self.day.as_str();
        let mut days = Vec::new();
        'outer: while !rest.is_empty() {
            for d in [
                Weekday::Saturday,
                Weekday::Sunday,
                Weekday::Thursday,
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Friday,
            ] {
                if let Some(tail) = rest.strip_prefix(d.abbrev()) {
                    days.push(d);
                    rest = tail;
                    continue 'outer;
                }
            }
            // Labels are produced by consolidate_days, so every fragment
            // is a known abbreviation. Stop rather than loop on foreign
            // text.
            debug_assert!(false, "unrecognized day label fragment: {rest}");
            break;
        }
        days.sort_by_key(|d| d.precedence());
        days
    }
}

/// Consolidation output: merged rows plus the ids of events excluded
/// because their period text did not parse.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Consolidated {
    /// Merged display rows.
    pub rows: Vec<DisplayRow>,
    /// Schedule ids skipped as structurally invalid.
    pub skipped: Vec<i64>,
}

/// Splits events into (parseable, skipped-id) halves.
fn partition_parseable(events: &[ScheduleEvent]) -> (Vec<(&ScheduleEvent, Period)>, Vec<i64>) {
    let mut ok = Vec::with_capacity(events.len());
    let mut skipped = Vec::new();
    for event in events {
        match event.parsed_period() {
            Ok(p) => ok.push((event, p)),
            Err(err) => {
                warn!(schedule_id = event.schedule_id, %err, "excluding event with malformed period");
                skipped.push(event.schedule_id);
            }
        }
    }
    (ok, skipped)
}

/// Collapses same-meeting events that differ only by weekday into one
/// row with a merged day label.
///
/// Grouping uses the fine-grained [`GroupKey`] (identity without day);
/// distinct weekdays are ordered by [`Weekday::ORDERED`] precedence and
/// concatenated. Output cardinality never exceeds input cardinality, and
/// each group yields exactly one row, so re-consolidating consolidated
/// output is a no-op. Malformed-period events are skipped and reported.
pub fn consolidate_days(events: &[ScheduleEvent]) -> Consolidated {
    let (mut parsed, skipped) = partition_parseable(events);
    parsed.sort_by_key(|(_, p)| p.start_min);

    // Group in first-seen (time-sorted) order.
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<(&ScheduleEvent, Vec<(Weekday, i64)>)> = Vec::new();
    for (event, _) in parsed {
        let key = GroupKey::of(event);
        match index.get(&key) {
            Some(&i) => {
                let members = &mut groups[i].1;
                if !members.iter().any(|(d, _)| *d == event.day) {
                    members.push((event.day, event.schedule_id));
                }
            }
            None => {
                index.insert(key, groups.len());
                groups.push((event, vec![(event.day, event.schedule_id)]));
            }
        }
    }

    let rows = groups
        .into_iter()
        .map(|(event, mut members)| {
            members.sort_by_key(|(d, _)| d.precedence());
            let day: String = members.iter().map(|(d, _)| d.abbrev()).collect();
            let member_ids: Vec<i64> = members.iter().map(|(_, id)| *id).collect();
            DisplayRow {
                schedule_id: member_ids[0],
                course_code: event.course_code.clone(),
                title: event.title.clone(),
                session: event.session,
                program: event.program,
                year: event.year,
                block: event.block,
                day,
                period: event.period.clone(),
                room: event.room.clone(),
                faculty: event.faculty.clone(),
                member_ids,
            }
        })
        .collect();

    Consolidated { rows, skipped }
}

/// Whether two rows are the same meeting apart from their time range.
fn same_identity(a: &DisplayRow, b: &DisplayRow) -> bool {
    a.course_code == b.course_code
        && a.title == b.title
        && a.session == b.session
        && a.program == b.program
        && a.year == b.year
        && a.block == b.block
        && a.room == b.room
        && a.day == b.day
        && a.faculty == b.faculty
}

/// Fuses identical rows whose periods are exactly back-to-back.
///
/// Rows are sorted by the full identity key ending in period start, then
/// merged in one linear pass: an accumulator row absorbs the next row
/// iff every identity field matches and `accumulator.end == next.start`
/// (no gap, no overlap tolerance). Total class minutes are preserved.
pub fn consolidate_intervals(rows: Vec<DisplayRow>) -> Vec<DisplayRow> {
    let mut rows = rows;
    rows.sort_by(|a, b| {
        a.course_code
            .cmp(&b.course_code)
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.session.cmp(&b.session))
            .then_with(|| a.program.cmp(&b.program))
            .then_with(|| a.year.cmp(&b.year))
            .then_with(|| a.block.cmp(&b.block))
            .then_with(|| a.room.cmp(&b.room))
            .then_with(|| a.day.cmp(&b.day))
            .then_with(|| a.faculty.cmp(&b.faculty))
            .then_with(|| a.period_start().cmp(&b.period_start()))
    });

    let mut merged: Vec<DisplayRow> = Vec::with_capacity(rows.len());
    let mut current: Option<DisplayRow> = None;

    for next in rows {
        let Some(mut acc) = current.take() else {
            current = Some(next);
            continue;
        };

        if same_identity(&acc, &next) {
            if let (Ok(a), Ok(b)) = (acc.period.parse::<Period>(), next.period.parse::<Period>()) {
                if a.abuts(&b) {
                    acc.period = a.joined_with(&b).to_string();
                    acc.member_ids.extend(next.member_ids);
                    current = Some(acc);
                    continue;
                }
            }
        }

        merged.push(acc);
        current = Some(next);
    }
    if let Some(acc) = current {
        merged.push(acc);
    }

    merged
}

/// Sorts rows by period start for grid display. Rows with unparseable
/// periods sort last.
pub fn sort_by_start(rows: &mut [DisplayRow]) {
    rows.sort_by_key(|r| r.period_start().unwrap_or(u16::MAX));
}

/// Full consolidation pipeline: day merge, interval merge, then sort by
/// period start for display.
pub fn consolidate(events: &[ScheduleEvent]) -> Consolidated {
    let Consolidated { rows, skipped } = consolidate_days(events);
    let mut rows = consolidate_intervals(rows);
    sort_by_start(&mut rows);
    Consolidated { rows, skipped }
}
