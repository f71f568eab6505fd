//! # TiVA - value-added chart data preparation
//!
//! Turns an OECD Trade in Value Added (TiVA) CSV export into the
//! pre-aggregated `data.json` read by the browser chart.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│  Transform  │────▶│  data.json  │
//! │ (TiVA SDMX) │     │  (auto-enc) │     │ (year, sum) │     │ (validated) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tiva::prepare;
//!
//! fn main() -> Result<(), tiva::PipelineError> {
//!     let report = prepare("oecd-skva-origin.csv", "web/data.json")?;
//!     println!("{} industries", report.industry_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`logs`] - Console logging
//! - [`models`] - Payload records
//! - [`reference`] - Industry, country and region tables
//! - [`parser`] - CSV parsing with auto-detection
//! - [`transform`] - Filtering, aggregation and the pipeline
//! - [`validation`] - Output contract check
//! - [`output`] - JSON writer

// Core modules
pub mod error;
pub mod logs;
pub mod models;

// Static data
pub mod reference;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Validation
pub mod validation;

// Output
pub mod output;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, OutputError, PipelineError, PipelineResult, SchemaError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    ByIndustry, CountryRecord, IndustryRecord, OutputDocument, RegionKey, ALL_INDUSTRIES_KEY,
};

// =============================================================================
// Re-exports - Reference data
// =============================================================================

pub use reference::{country_name, country_region, industry_meta, IndustryMeta};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_content, detect_delimiter, detect_encoding, parse_bytes_auto, parse_csv_file_auto,
    ParseResult,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    build_document, prepare, prepare_bytes, prepare_with, CsvInfo, PrepareOptions,
    PrepareReport, Prepared, RowStats, DEFAULT_CSV_PATH, DEFAULT_OUT_PATH, REFERENCE_YEAR,
};

// =============================================================================
// Re-exports - Validation & output
// =============================================================================

pub use output::{next_steps, write_document};
pub use validation::{is_valid_payload, validate_document, validate_payload};
