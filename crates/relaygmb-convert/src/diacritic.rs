//! Accent stripping for listing text.
//!
//! Text is decomposed (NFD) and combining marks are dropped, so `"é"` becomes
//! `"e"` while `"ß"` or `"æ"` stay as they are.

use relaygmb_core::{DestinationColumn, DestinationRecord};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[must_use]
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Strips accents from every text column in place. Coordinates are untouched.
pub fn strip_accents_from_records(records: &mut [DestinationRecord]) {
    for record in records.iter_mut() {
        for column in DestinationColumn::ALL {
            if let Some(value) = record.text_mut(column) {
                if !value.is_ascii() {
                    *value = strip_accents(value);
                }
            }
        }
    }
    tracing::debug!(rows = records.len(), "stripped accents from listings");
}
