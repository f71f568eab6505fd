//! Error types for the TiVA preparation pipeline.
//!
//! - [`CsvError`] - reading, decoding and parsing the input CSV
//! - [`SchemaError`] - the input lacks a required column
//! - [`OutputError`] - validating and writing the JSON payload
//! - [`PipelineError`] - top-level error returned by [`crate::prepare`]
//!
//! Lower-level errors convert into [`PipelineError`] via `From`,
//! so `?` works across module boundaries.

use thiserror::Error;

// =============================================================================
// CSV Errors
// =============================================================================

/// Errors while reading or parsing the input CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Content could not be decoded.
    #[error("Failed to decode content: {0}")]
    Encoding(String),

    /// Malformed CSV record.
    #[error("Line {line}: {message}")]
    Parse { line: u64, message: String },

    /// A cell that must be numeric is not.
    #[error("Line {line}, column '{column}' (value '{value}'): not a number")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },

    /// Empty file.
    #[error("CSV file is empty")]
    EmptyFile,

    /// No headers found.
    #[error("No headers found in CSV")]
    NoHeaders,
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(e) => CsvError::Io(e),
            csv::ErrorKind::Utf8 { err, .. } => CsvError::Encoding(err.to_string()),
            kind => CsvError::Parse {
                line,
                message: format!("{:?}", kind),
            },
        }
    }
}

// =============================================================================
// Schema Errors
// =============================================================================

/// The input table does not have the shape the pipeline needs.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A required column is absent from the header row.
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while checking or writing the output document.
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document does not satisfy the chart's data contract.
    #[error("Output contract violated: {}", .0.join("; "))]
    Contract(Vec<String>),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline error.
///
/// Every failure aborts the run; nothing is retried.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV reading or parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Required column missing.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Output validation or writing error.
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let csv_err = CsvError::EmptyFile;
        let pipeline_err: PipelineError = csv_err.into();
        assert!(pipeline_err.to_string().contains("empty"));

        let schema_err = SchemaError::MissingColumn("OBS_VALUE".into());
        let pipeline_err: PipelineError = schema_err.into();
        assert!(pipeline_err.to_string().contains("OBS_VALUE"));
    }

    #[test]
    fn test_invalid_number_format() {
        let err = CsvError::InvalidNumber {
            line: 5,
            column: "OBS_VALUE".into(),
            value: "abc".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Line 5"));
        assert!(msg.contains("column 'OBS_VALUE'"));
        assert!(msg.contains("value 'abc'"));
    }

    #[test]
    fn test_contract_errors_joined() {
        let err = OutputError::Contract(vec!["first".into(), "second".into()]);
        assert_eq!(err.to_string(), "Output contract violated: first; second");
    }
}
