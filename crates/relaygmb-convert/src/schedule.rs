//! Daily opening-hours tokens built from up to two time periods.

use std::fmt;

use relaygmb_core::CellValue;

use crate::time::{normalize_time, NormalizedTime};

/// One day's opening hours in GMB's compact syntax.
///
/// Renders as `""`, `"00:00-24:00"`, `"HH:MM-HH:MM"`, or
/// `"HH:MM-HH:MM,HH:MM-HH:MM"`; no other shapes are produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleToken {
    Closed,
    AlwaysOpen,
    OnePeriod {
        open: String,
        close: String,
    },
    TwoPeriods {
        first: (String, String),
        second: (String, String),
    },
}

impl fmt::Display for ScheduleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleToken::Closed => Ok(()),
            ScheduleToken::AlwaysOpen => f.write_str("00:00-24:00"),
            ScheduleToken::OnePeriod { open, close } => write!(f, "{open}-{close}"),
            ScheduleToken::TwoPeriods { first, second } => {
                write!(f, "{}-{},{}-{}", first.0, first.1, second.0, second.1)
            }
        }
    }
}

/// The four raw time cells describing one weekday.
#[derive(Debug, Clone, Copy)]
pub struct DayTimes<'a> {
    pub first_start: &'a CellValue,
    pub first_end: &'a CellValue,
    pub second_start: &'a CellValue,
    pub second_end: &'a CellValue,
}

/// Builds a day's [`ScheduleToken`] from its four raw time cells.
///
/// Full-day detection runs first and wins even when it discards a period:
/// any of `start1=00:00 & end1=24:00`, `start1=00:00 & end2=24:00`, or
/// `start2=00:00 & end2=24:00` means the point is always open. Otherwise
/// each period counts only when both its bounds are valid times.
#[must_use]
pub fn build_day_schedule(times: DayTimes<'_>) -> ScheduleToken {
    let start1 = normalize_time(times.first_start);
    let end1 = normalize_time(times.first_end);
    let start2 = normalize_time(times.second_start);
    let end2 = normalize_time(times.second_end);

    if is_full_day(&start1, &end1, &start2, &end2) {
        return ScheduleToken::AlwaysOpen;
    }

    let first_valid = start1.is_valid() && end1.is_valid();
    let second_valid = start2.is_valid() && end2.is_valid();

    match (first_valid, second_valid) {
        (true, true) => ScheduleToken::TwoPeriods {
            first: (into_clock(start1), into_clock(end1)),
            second: (into_clock(start2), into_clock(end2)),
        },
        (true, false) => ScheduleToken::OnePeriod {
            open: into_clock(start1),
            close: into_clock(end1),
        },
        (false, true) => ScheduleToken::OnePeriod {
            open: into_clock(start2),
            close: into_clock(end2),
        },
        (false, false) => ScheduleToken::Closed,
    }
}

fn is_full_day(
    start1: &NormalizedTime,
    end1: &NormalizedTime,
    start2: &NormalizedTime,
    end2: &NormalizedTime,
) -> bool {
    let midnight = |t: &NormalizedTime| t.as_str() == "00:00";
    let end_of_day = |t: &NormalizedTime| t.as_str() == "24:00";

    (midnight(start1) && end_of_day(end1))
        || (midnight(start1) && end_of_day(end2))
        || (midnight(start2) && end_of_day(end2))
}

fn into_clock(time: NormalizedTime) -> String {
    match time {
        NormalizedTime::Absent => String::new(),
        NormalizedTime::Clock(s) => s,
    }
}

#[cfg(test)]
#[path = "schedule_test.rs"]
mod tests;
