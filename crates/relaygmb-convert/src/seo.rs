//! Listing-name rewriting from a user template.
//!
//! The template may reference `{Ville}`, `{CP}` and `{Adresse}`. Only the
//! business name changes; every other column is copied as-is.

use std::sync::LazyLock;

use regex::Regex;
use relaygmb_core::{DestinationRecord, SeoOptions};

pub const CITY_TOKEN: &str = "{Ville}";
pub const POSTAL_CODE_TOKEN: &str = "{CP}";
pub const STREET_TOKEN: &str = "{Adresse}";

/// ASCII word characters, whitespace, Latin-1 letters and hyphens survive.
static SPECIAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\sÀ-ÿ-]").expect("valid special-char regex"));

/// Rewrites the business name of every record from `options.template`.
#[must_use]
pub fn optimize_names(records: &[DestinationRecord], options: &SeoOptions) -> Vec<DestinationRecord> {
    if options.template.trim().is_empty() {
        tracing::debug!("blank name template; listings left unchanged");
        return records.to_vec();
    }

    records
        .iter()
        .map(|record| DestinationRecord {
            business_name: render_name(record, options),
            ..record.clone()
        })
        .collect()
}

/// Renders the template for one record.
///
/// Callers are expected to short-circuit on a blank template; rendering one
/// here just yields whatever the enabled tokens append.
#[must_use]
pub fn render_name(record: &DestinationRecord, options: &SeoOptions) -> String {
    let mut name = options.template.clone();
    name = replace_token(&name, CITY_TOKEN, &record.locality, options.include_city);
    name = replace_token(
        &name,
        POSTAL_CODE_TOKEN,
        &record.postal_code,
        options.include_postal_code,
    );
    name = replace_token(
        &name,
        STREET_TOKEN,
        &record.address_line_1,
        options.include_street,
    );

    name = collapse_whitespace(&name);

    if options.remove_special {
        name = SPECIAL_CHARS.replace_all(&name, "").into_owned();
    }
    if options.capitalize {
        name = capitalize_words(&name);
    }
    name
}

/// Enabled: fill every occurrence of `token`, or append `value` when the
/// template has none. Disabled: drop the token.
fn replace_token(base: &str, token: &str, value: &str, include: bool) -> String {
    if !include {
        return base.replace(token, "");
    }
    if base.contains(token) {
        base.replace(token, value)
    } else {
        format!("{base} {value}").trim().to_string()
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercases everything, then uppercases the first character after each
/// run of whitespace.
fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.to_lowercase().chars() {
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
#[path = "seo_test.rs"]
mod tests;
