use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("failed to open workbook {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: calamine::Error,
    },

    #[error("workbook {path} has no worksheets")]
    NoSheets { path: String },

    #[error("failed to read worksheet \"{sheet}\": {source}")]
    Read {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    #[error("file appears to be empty or invalid")]
    Empty,

    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("no valid data rows found in the file")]
    NoValidRows,

    #[error("failed to write workbook {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}
