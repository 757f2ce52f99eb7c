use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Dataset errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while turning a file into a [`LaunchDataset`].
///
/// An empty selection is *not* an error: filters that match nothing simply
/// yield empty sequences.
///
/// [`LaunchDataset`]: crate::data::model::LaunchDataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file is missing or cannot be opened.
    #[error("cannot read dataset {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column is absent from the header / schema.
    #[error("dataset is missing required column '{column}'")]
    MissingColumn { column: String },

    /// A cell could not be interpreted for its column.
    ///
    /// `row` counts data rows from 1, header excluded; 0 refers to the file
    /// as a whole (e.g. a JSON document that is not an array).
    #[error("data row {row}, column '{column}': invalid value '{value}'")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    /// A column exists but its storage type cannot be read as required.
    #[error("column '{column}' has unsupported type {found}")]
    ColumnType { column: String, found: String },

    #[error("unsupported dataset format: .{extension}")]
    UnsupportedFormat { extension: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error(transparent)]
    Arrow(#[from] arrow::error::ArrowError),
}

impl DatasetError {
    /// Schema errors mean the file was readable but its layout is wrong.
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            DatasetError::MissingColumn { .. }
                | DatasetError::InvalidValue { .. }
                | DatasetError::ColumnType { .. }
        )
    }
}

pub type DatasetResult<T> = Result<T, DatasetError>;
