//! High-level API: CSV in, chart payload out.
//!
//! # Example
//!
//! ```rust,ignore
//! use tiva::{prepare_with, PrepareOptions};
//!
//! let report = prepare_with(&PrepareOptions::default())?;
//! println!("{} industries, {} countries", report.industry_count, report.country_count);
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::aggregate::aggregate;
use super::observations::{collect_observations, TIME_PERIOD};
use crate::error::{OutputError, PipelineResult};
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::models::OutputDocument;
use crate::output::write_document;
use crate::parser::{parse_bytes_auto, parse_csv_file_auto, ParseResult};
use crate::validation::validate_document;

/// Input file read when no path is given.
pub const DEFAULT_CSV_PATH: &str = "oecd-skva-origin.csv";

/// Output file written when no path is given.
pub const DEFAULT_OUT_PATH: &str = "web/data.json";

/// Year kept by default.
pub const REFERENCE_YEAR: i32 = 2022;

/// Options for a preparation run
#[derive(Debug, Clone, Serialize)]
pub struct PrepareOptions {
    /// Input CSV
    pub csv_path: PathBuf,

    /// Output JSON
    pub out_path: PathBuf,

    /// Keep only this `TIME_PERIOD`; `None` keeps every row
    pub year: Option<i32>,

    /// Skip the output contract check
    pub skip_validation: bool,
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            out_path: PathBuf::from(DEFAULT_OUT_PATH),
            year: Some(REFERENCE_YEAR),
            skip_validation: false,
        }
    }
}

/// Input file information
#[derive(Debug, Clone, Serialize)]
pub struct CsvInfo {
    pub encoding: String,
    pub delimiter: char,
    pub headers: Vec<String>,
    pub row_count: usize,
}

impl From<&ParseResult> for CsvInfo {
    fn from(table: &ParseResult) -> Self {
        Self {
            encoding: table.encoding.clone(),
            delimiter: table.delimiter,
            headers: table.headers.clone(),
            row_count: table.records.len(),
        }
    }
}

/// Row accounting of one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RowStats {
    pub rows_read: usize,
    pub rows_in_period: usize,
    pub rows_skipped: usize,
    pub rows_without_area: usize,
    pub filtered_by_year: bool,
}

/// Document built without touching the filesystem
#[derive(Debug, Clone)]
pub struct Prepared {
    pub document: OutputDocument,
    pub stats: RowStats,
    pub csv_info: CsvInfo,
}

/// Summary of a completed run
#[derive(Debug, Clone, Serialize)]
pub struct PrepareReport {
    pub csv_info: CsvInfo,
    pub stats: RowStats,
    pub industry_count: usize,
    pub country_count: usize,
    pub out_path: PathBuf,
}

/// Prepare the chart payload from `csv_path` into `out_path` for the
/// reference year.
pub fn prepare(csv_path: impl AsRef<Path>, out_path: impl AsRef<Path>) -> PipelineResult<PrepareReport> {
    prepare_with(&PrepareOptions {
        csv_path: csv_path.as_ref().to_path_buf(),
        out_path: out_path.as_ref().to_path_buf(),
        ..Default::default()
    })
}

/// Run the whole pipeline: read, filter, aggregate, check, write.
///
/// Nothing is written when any step fails.
pub fn prepare_with(options: &PrepareOptions) -> PipelineResult<PrepareReport> {
    log_info(format!("📖 Reading {}", options.csv_path.display()));
    let table = parse_csv_file_auto(&options.csv_path)?;
    let prepared = prepare_table(&table, options)?;

    let out_path = write_document(&prepared.document, &options.out_path)?;
    log_success(format!("Written {}", out_path.display()));

    Ok(PrepareReport {
        industry_count: prepared.document.industries.len(),
        country_count: prepared.document.country_count(),
        csv_info: prepared.csv_info,
        stats: prepared.stats,
        out_path,
    })
}

/// Same as [`prepare_with`] on in-memory CSV bytes, without writing.
///
/// Only `year` and `skip_validation` of `options` are used.
pub fn prepare_bytes(bytes: &[u8], options: &PrepareOptions) -> PipelineResult<Prepared> {
    let table = parse_bytes_auto(bytes)?;
    prepare_table(&table, options)
}

fn prepare_table(table: &ParseResult, options: &PrepareOptions) -> PipelineResult<Prepared> {
    log_success(format!("Detected encoding: {}", table.encoding));
    log_success(format!("Detected separator: '{}'", format_delimiter(table.delimiter)));
    log_success(format!("Read {} rows, {} columns", table.records.len(), table.headers.len()));

    let (document, stats) = build_document(table, options.year)?;

    if options.skip_validation {
        log_info("(contract check skipped)");
    } else {
        log_info("✔️  Checking output contract...");
        validate_document(&document).map_err(OutputError::Contract)?;
        log_success("Output matches the chart contract");
    }

    Ok(Prepared {
        document,
        stats,
        csv_info: CsvInfo::from(table),
    })
}

/// Filter and aggregate an already-parsed table.
pub fn build_document(
    table: &ParseResult,
    year: Option<i32>,
) -> PipelineResult<(OutputDocument, RowStats)> {
    match year {
        Some(year) if table.has_column(TIME_PERIOD) => {
            log_info(format!("Keeping {} = {}", TIME_PERIOD, year))
        }
        Some(_) => log_warning(format!("No {} column, using all rows", TIME_PERIOD)),
        None => log_info("Year filter disabled, using all rows"),
    }

    let set = collect_observations(table, year)?;
    if set.filtered_by_year {
        log_success(format!("{} of {} rows in period", set.rows_in_period, set.rows_read));
    }
    if set.rows_skipped > 0 {
        log_warning(format!(
            "{} rows skipped (empty industry code)",
            set.rows_skipped
        ));
    }
    if set.rows_without_area > 0 {
        log_warning(format!(
            "{} rows without a country, counted in industry totals only",
            set.rows_without_area
        ));
    }

    log_info("📦 Aggregating...");
    let document = aggregate(&set.observations);
    log_info_indent(format!("{} industries", document.industries.len()), 1);
    log_info_indent(format!("{} destination countries", document.country_count()), 1);

    let stats = RowStats {
        rows_read: set.rows_read,
        rows_in_period: set.rows_in_period,
        rows_skipped: set.rows_skipped,
        rows_without_area: set.rows_without_area,
        filtered_by_year: set.filtered_by_year,
    };
    Ok((document, stats))
}

/// Format delimiter for display
pub fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "TAB".to_string(),
        c => c.to_string(),
    }
}
