//! Typed view of the input rows.
//!
//! Resolves the required columns, applies the reference-year filter and
//! parses observation values.

use crate::error::{CsvError, PipelineResult, SchemaError};
use crate::parser::ParseResult;

pub const TIME_PERIOD: &str = "TIME_PERIOD";
pub const FINAL_DEMAND_AREA: &str = "FINAL_DEMAND_AREA";
pub const VALUE_ADDED_SOURCE_ACTIVITY: &str = "VALUE_ADDED_SOURCE_ACTIVITY";
pub const OBS_VALUE: &str = "OBS_VALUE";

/// Required columns, in the order they are checked.
pub const REQUIRED_COLUMNS: [&str; 3] = [FINAL_DEMAND_AREA, VALUE_ADDED_SOURCE_ACTIVITY, OBS_VALUE];

/// One input row that survived filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation<'a> {
    /// Destination country (ISO3). `None` when the cell is empty; such
    /// rows count towards their industry total only.
    pub area: Option<&'a str>,
    /// Source industry code.
    pub activity: &'a str,
    /// `None` for an empty or `NaN` cell.
    pub value: Option<f64>,
}

/// Observations of the reference year plus row accounting.
#[derive(Debug, Clone, Default)]
pub struct ObservationSet<'a> {
    pub observations: Vec<Observation<'a>>,
    /// Rows read from the CSV.
    pub rows_read: usize,
    /// Rows kept by the year filter.
    pub rows_in_period: usize,
    /// Rows dropped for an empty industry code.
    pub rows_skipped: usize,
    /// Rows kept without a destination country.
    pub rows_without_area: usize,
    /// Whether a year filter was applied.
    pub filtered_by_year: bool,
}

struct Columns {
    period: Option<usize>,
    area: usize,
    activity: usize,
    value: usize,
}

fn resolve_columns(table: &ParseResult) -> Result<Columns, SchemaError> {
    let require = |name: &str| {
        table
            .column(name)
            .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))
    };
    Ok(Columns {
        period: table.column(TIME_PERIOD),
        area: require(FINAL_DEMAND_AREA)?,
        activity: require(VALUE_ADDED_SOURCE_ACTIVITY)?,
        value: require(OBS_VALUE)?,
    })
}

/// Whether a `TIME_PERIOD` cell denotes `year`.
///
/// Numeric comparison, so `2022.0` matches 2022.
pub fn period_matches(cell: &str, year: i32) -> bool {
    cell.trim()
        .parse::<f64>()
        .map(|p| p == f64::from(year))
        .unwrap_or(false)
}

/// An `OBS_VALUE` cell that is neither empty, `NaN` nor a finite number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidObsValue;

/// Parse an `OBS_VALUE` cell. Empty and `NaN` are missing observations;
/// infinities are rejected.
pub fn parse_obs_value(cell: &str) -> Result<Option<f64>, InvalidObsValue> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(None);
    }
    match cell.parse::<f64>() {
        Ok(v) if v.is_nan() => Ok(None),
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(InvalidObsValue),
    }
}

/// Extract the observations of `year` from a parsed table.
///
/// With `year == None`, or without a `TIME_PERIOD` column, every row is
/// kept.
pub fn collect_observations(
    table: &ParseResult,
    year: Option<i32>,
) -> PipelineResult<ObservationSet<'_>> {
    let columns = resolve_columns(table)?;
    let filter = match (columns.period, year) {
        (Some(index), Some(year)) => Some((index, year)),
        _ => None,
    };

    let mut set = ObservationSet {
        rows_read: table.records.len(),
        filtered_by_year: filter.is_some(),
        ..Default::default()
    };

    for record in &table.records {
        if let Some((index, year)) = filter {
            if !period_matches(ParseResult::cell(record, index), year) {
                continue;
            }
        }
        set.rows_in_period += 1;

        let activity = ParseResult::cell(record, columns.activity);
        if activity.is_empty() {
            set.rows_skipped += 1;
            continue;
        }
        let area = Some(ParseResult::cell(record, columns.area)).filter(|a| !a.is_empty());
        if area.is_none() {
            set.rows_without_area += 1;
        }

        let raw = ParseResult::cell(record, columns.value);
        let value = parse_obs_value(raw).map_err(|_| CsvError::InvalidNumber {
            line: ParseResult::line_of(record),
            column: OBS_VALUE.to_string(),
            value: raw.to_string(),
        })?;

        set.observations.push(Observation { area, activity, value });
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use crate::parser::parse_bytes_auto;

    fn table(csv: &str) -> ParseResult {
        parse_bytes_auto(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_year_filter() {
        let t = table(
            "TIME_PERIOD,FINAL_DEMAND_AREA,VALUE_ADDED_SOURCE_ACTIVITY,OBS_VALUE\n\
             2022,DEU,A,100\n2021,FRA,A,999\n2022.0,USA,B,5",
        );
        let set = collect_observations(&t, Some(2022)).unwrap();

        assert!(set.filtered_by_year);
        assert_eq!(set.rows_read, 3);
        assert_eq!(set.rows_in_period, 2);
        let areas: Vec<_> = set.observations.iter().map(|o| o.area).collect();
        assert_eq!(areas, vec![Some("DEU"), Some("USA")]);
    }

    #[test]
    fn test_no_period_column_keeps_all_rows() {
        let t = table("FINAL_DEMAND_AREA,VALUE_ADDED_SOURCE_ACTIVITY,OBS_VALUE\nDEU,A,1\nFRA,A,2");
        let set = collect_observations(&t, Some(2022)).unwrap();

        assert!(!set.filtered_by_year);
        assert_eq!(set.observations.len(), 2);
    }

    #[test]
    fn test_year_none_keeps_all_rows() {
        let t = table(
            "TIME_PERIOD,FINAL_DEMAND_AREA,VALUE_ADDED_SOURCE_ACTIVITY,OBS_VALUE\n\
             2021,DEU,A,1\n2022,DEU,A,2",
        );
        let set = collect_observations(&t, None).unwrap();
        assert_eq!(set.observations.len(), 2);
    }

    #[test]
    fn test_missing_columns_reported_in_order() {
        let t = table("TIME_PERIOD,OBS_VALUE\n2022,1");
        match collect_observations(&t, Some(2022)) {
            Err(PipelineError::Schema(SchemaError::MissingColumn(c))) => {
                assert_eq!(c, FINAL_DEMAND_AREA)
            }
            other => panic!("unexpected: {:?}", other),
        }

        let t = table("FINAL_DEMAND_AREA,VALUE_ADDED_SOURCE_ACTIVITY\nDEU,A");
        match collect_observations(&t, Some(2022)) {
            Err(PipelineError::Schema(SchemaError::MissingColumn(c))) => assert_eq!(c, OBS_VALUE),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_missing_values_and_empty_keys() {
        let t = table(
            "FINAL_DEMAND_AREA,VALUE_ADDED_SOURCE_ACTIVITY,OBS_VALUE\n\
             DEU,A,\nFRA,A,NaN\n,A,3\nUSA,,4",
        );
        let set = collect_observations(&t, None).unwrap();

        assert_eq!(set.rows_skipped, 1);
        assert_eq!(set.rows_without_area, 1);
        assert_eq!(set.observations.len(), 3);
        assert!(set.observations[..2].iter().all(|o| o.value.is_none()));
        assert_eq!(set.observations[2].area, None);
        assert_eq!(set.observations[2].value, Some(3.0));
    }

    #[test]
    fn test_infinite_values_rejected() {
        for raw in ["inf", "-inf", "infinity", "-Infinity"] {
            let t = table(&format!(
                "TIME_PERIOD,FINAL_DEMAND_AREA,VALUE_ADDED_SOURCE_ACTIVITY,OBS_VALUE
2022,DEU,A,{}",
                raw
            ));
            match collect_observations(&t, Some(2022)) {
                Err(PipelineError::Csv(CsvError::InvalidNumber { line, column, value })) => {
                    assert_eq!(line, 2);
                    assert_eq!(column, OBS_VALUE);
                    assert_eq!(value, raw);
                }
                other => panic!("unexpected for {}: {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_parse_obs_value() {
        assert_eq!(parse_obs_value(" 1.5 "), Ok(Some(1.5)));
        assert_eq!(parse_obs_value(""), Ok(None));
        assert_eq!(parse_obs_value("NaN"), Ok(None));
        assert_eq!(parse_obs_value("inf"), Err(InvalidObsValue));
        assert_eq!(parse_obs_value("abc"), Err(InvalidObsValue));
    }

    #[test]
    fn test_invalid_number_names_line_and_value() {
        let t = table("FINAL_DEMAND_AREA,VALUE_ADDED_SOURCE_ACTIVITY,OBS_VALUE\nDEU,A,1\nDEU,A,n/a");
        let err = collect_observations(&t, None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Line 3"));
        assert!(msg.contains("n/a"));
    }

    #[test]
    fn test_period_matches() {
        assert!(period_matches("2022", 2022));
        assert!(period_matches(" 2022.0 ", 2022));
        assert!(!period_matches("2022-Q1", 2022));
        assert!(!period_matches("", 2022));
    }
}
