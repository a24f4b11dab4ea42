//! Store-code matching between an existing GMB listing export and a freshly
//! generated one.

use std::collections::HashSet;

use relaygmb_core::DestinationRecord;

/// Canonical form of a store code: lowercased, with all whitespace removed.
///
/// `"AB 123"`, `"ab123"` and `" Ab\t123 "` all compare equal.
#[must_use]
pub fn canonical_store_code(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// New listings split into genuine additions and a duplicate count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DedupeOutcome {
    /// Generated rows whose store code is not already listed, in input order.
    pub additions: Vec<DestinationRecord>,
    pub duplicate_count: usize,
}

impl DedupeOutcome {
    #[must_use]
    pub fn addition_count(&self) -> usize {
        self.additions.len()
    }

    #[must_use]
    pub fn has_additions(&self) -> bool {
        !self.additions.is_empty()
    }
}

/// Keeps the generated rows whose canonical store code is absent from
/// `existing`.
///
/// Duplicates inside `generated` itself are not collapsed; each one is
/// compared against `existing` only.
#[must_use]
pub fn partition_new_listings(
    existing: &[DestinationRecord],
    generated: Vec<DestinationRecord>,
) -> DedupeOutcome {
    let known: HashSet<String> = existing
        .iter()
        .map(|listing| canonical_store_code(&listing.store_code))
        .collect();

    let total = generated.len();
    let additions: Vec<DestinationRecord> = generated
        .into_iter()
        .filter(|listing| !known.contains(&canonical_store_code(&listing.store_code)))
        .collect();
    let duplicate_count = total - additions.len();

    tracing::debug!(
        existing = existing.len(),
        generated = total,
        additions = additions.len(),
        duplicates = duplicate_count,
        "matched generated listings against existing export"
    );

    DedupeOutcome {
        additions,
        duplicate_count,
    }
}
