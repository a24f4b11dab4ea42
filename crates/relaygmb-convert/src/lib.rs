//! Conversion core: courier rows to GMB listings, plus the follow-up passes
//! over generated listings (store-code dedupe, name templating, accent
//! stripping).
//!
//! Everything here is pure and synchronous. Spreadsheet I/O lives in
//! `relaygmb-sheet`.

pub mod dedupe;
pub mod diacritic;
pub mod mapper;
pub mod schedule;
pub mod seo;
pub mod time;

pub use dedupe::{canonical_store_code, partition_new_listings, DedupeOutcome};
pub use diacritic::{strip_accents, strip_accents_from_records};
pub use mapper::{map_record, map_records};
pub use schedule::{build_day_schedule, DayTimes, ScheduleToken};
pub use seo::{optimize_names, render_name};
pub use time::{normalize_time, NormalizedTime};
