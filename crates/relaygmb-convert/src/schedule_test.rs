use super::*;

fn cell(s: &str) -> CellValue {
    if s.is_empty() {
        CellValue::Empty
    } else {
        CellValue::from(s)
    }
}

fn day(s1: &str, e1: &str, s2: &str, e2: &str) -> String {
    let (s1, e1, s2, e2) = (cell(s1), cell(e1), cell(s2), cell(e2));
    build_day_schedule(DayTimes {
        first_start: &s1,
        first_end: &e1,
        second_start: &s2,
        second_end: &e2,
    })
    .to_string()
}

// -----------------------------------------------------------------------
// full-day detection
// -----------------------------------------------------------------------

#[test]
fn full_day_in_first_period() {
    assert_eq!(day("0:00", "24:00", "", ""), "00:00-24:00");
}

#[test]
fn full_day_start_first_end_second() {
    assert_eq!(day("0:00", "12:00", "13:00", "24:00"), "00:00-24:00");
}

#[test]
fn full_day_in_second_period() {
    assert_eq!(day("08:00", "12:00", "0:00", "24:00:00"), "00:00-24:00");
}

#[test]
fn full_day_from_fractional_numbers() {
    let (zero, whole) = (CellValue::Number(0.0), CellValue::Number(1.0));
    let token = build_day_schedule(DayTimes {
        first_start: &zero,
        first_end: &whole,
        second_start: &CellValue::Empty,
        second_end: &CellValue::Empty,
    });
    assert_eq!(token, ScheduleToken::AlwaysOpen);
}

#[test]
fn literal_double_zero_start_is_not_full_day() {
    // "00:00" is the export's "no time" marker, not midnight.
    assert_eq!(day("00:00", "24:00", "", ""), "");
}

// -----------------------------------------------------------------------
// period combinations
// -----------------------------------------------------------------------

#[test]
fn two_valid_periods_are_joined() {
    assert_eq!(
        day("08:30:00", "12:00:00", "14:00:00", "19:00:00"),
        "08:30-12:00,14:00-19:00"
    );
}

#[test]
fn only_first_period_valid() {
    assert_eq!(day("9:00", "18:00", "00:00", "00:00"), "09:00-18:00");
}

#[test]
fn only_second_period_valid() {
    assert_eq!(day("", "", "14:00", "19:00"), "14:00-19:00");
}

#[test]
fn half_period_is_ignored() {
    assert_eq!(day("08:00", "", "14:00", "19:00"), "14:00-19:00");
}

#[test]
fn closed_when_nothing_valid() {
    assert_eq!(day("", "", "", ""), "");
    assert_eq!(day("00:00:00", "00:00:00", "00:00:00", "00:00:00"), "");
    assert_eq!(day("fermé", "fermé", "", ""), "");
}

#[test]
fn closed_token_renders_empty() {
    assert_eq!(ScheduleToken::Closed.to_string(), "");
}

#[test]
fn numeric_periods_are_formatted() {
    let (s1, e1) = (CellValue::Number(0.375), CellValue::Number(0.75));
    let token = build_day_schedule(DayTimes {
        first_start: &s1,
        first_end: &e1,
        second_start: &CellValue::Empty,
        second_end: &CellValue::Empty,
    });
    assert_eq!(
        token,
        ScheduleToken::OnePeriod {
            open: "09:00".to_string(),
            close: "18:00".to_string()
        }
    );
}
