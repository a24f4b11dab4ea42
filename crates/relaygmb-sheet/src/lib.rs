//! Spreadsheet collaborators around the conversion core: courier export
//! ingestion, GMB listings read/write, and export file naming.

pub mod error;
pub mod filename;
pub mod ingest;
pub mod listings;
mod workbook;

pub use error::SheetError;
pub use filename::{export_file_name, export_path, ExportKind};
pub use ingest::{read_courier_export, records_from_rows};
pub use listings::{listings_from_rows, read_listings, write_listings, SHEET_NAME};
