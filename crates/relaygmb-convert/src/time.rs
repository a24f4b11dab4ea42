//! Time-of-day normalization for the courier's opening-hours columns.
//!
//! Exports mix several spellings of the same time (`"9:05"`, `"09:05:00"`,
//! fractional-day numbers from spreadsheet time cells). Everything is reduced
//! to `HH:MM` or to [`NormalizedTime::Absent`].
//!
//! Shapes are recognised by byte scanning against a tiny pattern language.

use std::fmt;

use relaygmb_core::CellValue;

const MINUTES_PER_DAY: f64 = 1440.0;

/// Result of normalizing one raw time cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedTime {
    /// No usable time: blank, unrecognised, or the `00:00` "no opening" marker.
    Absent,
    /// A canonical `HH:MM` string.
    Clock(String),
}

impl NormalizedTime {
    /// Canonical text, `""` when absent.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            NormalizedTime::Absent => "",
            NormalizedTime::Clock(s) => s,
        }
    }

    /// A time is usable as a period bound iff it is present and not `00:00`.
    ///
    /// `00:00` can still reach here (numeric `0`, or `"0:00"`), and is only
    /// meaningful to full-day detection.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, NormalizedTime::Clock(s) if s != "00:00")
    }
}

impl fmt::Display for NormalizedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recognised textual time layouts, tried in declaration order.
///
/// Pattern bytes: `d` matches one ASCII digit, anything else matches itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeShape {
    /// `HH:MM`, already canonical.
    HourMinute,
    /// `HH:MM:SS`, seconds dropped.
    HourMinuteSecond,
    /// `H:MM`, `H:MM:SS` or `H:M`; hour (and minute) zero-padded.
    ShortHour,
}

const SHAPE_RULES: [(TimeShape, &[&str]); 3] = [
    (TimeShape::HourMinute, &["dd:dd"]),
    (TimeShape::HourMinuteSecond, &["dd:dd:dd"]),
    (TimeShape::ShortHour, &["d:dd", "d:dd:dd", "d:d"]),
];

/// Normalizes a raw cell into `HH:MM` or [`NormalizedTime::Absent`].
///
/// Rules, in order:
/// 1. Empty cell or empty text → absent.
/// 2. Numbers are fractions of a day: rounded to the nearest minute
///    (`0.5` → `"12:00"`, `1.0` → `"24:00"`).
/// 3. Text exactly `"00:00:00"` or `"00:00"` → absent.
/// 4. Trimmed text matching a [`TimeShape`] is reshaped to `HH:MM`.
/// 5. Anything else → absent.
#[must_use]
pub fn normalize_time(raw: &CellValue) -> NormalizedTime {
    match raw {
        CellValue::Empty => NormalizedTime::Absent,
        CellValue::Number(fraction) => normalize_day_fraction(*fraction),
        CellValue::Text(text) => normalize_time_text(text),
    }
}

/// Text-only entry point of [`normalize_time`].
#[must_use]
pub fn normalize_time_text(text: &str) -> NormalizedTime {
    if text.is_empty() || text == "00:00:00" || text == "00:00" {
        return NormalizedTime::Absent;
    }

    let clean = text.trim();
    match classify(clean) {
        Some(TimeShape::HourMinute) => NormalizedTime::Clock(clean.to_string()),
        Some(TimeShape::HourMinuteSecond) => NormalizedTime::Clock(clean[..5].to_string()),
        Some(TimeShape::ShortHour) => {
            // Shape guarantees ASCII digits separated by ':'.
            let mut parts = clean.split(':');
            let hour = parts.next().unwrap_or_default();
            let minute = parts.next().unwrap_or_default();
            NormalizedTime::Clock(format!("0{hour}:{minute:0>2}"))
        }
        None => NormalizedTime::Absent,
    }
}

fn classify(text: &str) -> Option<TimeShape> {
    SHAPE_RULES
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| matches_pattern(text, p)))
        .map(|(shape, _)| *shape)
}

fn matches_pattern(text: &str, pattern: &str) -> bool {
    text.len() == pattern.len()
        && text
            .bytes()
            .zip(pattern.bytes())
            .all(|(t, p)| if p == b'd' { t.is_ascii_digit() } else { t == p })
}

/// Converts a spreadsheet time serial (fraction of a day) to `HH:MM`.
///
/// Date-time serials (`45123.75`) keep only their time-of-day part; exactly
/// `1.0` is kept whole so that an end-of-day `24:00` survives. Negative and
/// non-finite values are absent.
fn normalize_day_fraction(fraction: f64) -> NormalizedTime {
    if !fraction.is_finite() || fraction < 0.0 {
        return NormalizedTime::Absent;
    }
    let day_part = if fraction > 1.0 {
        fraction.fract()
    } else {
        fraction
    };

    // day_part is within 0.0..=1.0 here, so the product fits in u32.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_minutes = (day_part * MINUTES_PER_DAY).round() as u32;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    NormalizedTime::Clock(format!("{hours:02}:{minutes:02}"))
}

#[cfg(test)]
#[path = "time_test.rs"]
mod tests;
