//! CSV reader with encoding and delimiter auto-detection.
//!
//! Produces a [`ParseResult`]: trimmed headers plus the raw records.
//! Column lookup and typing happen in [`crate::transform`].

use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;

use crate::error::{CsvError, CsvResult};

/// Parsed table with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Column headers, trimmed
    pub headers: Vec<String>,
    /// Data rows, with their source positions
    pub records: Vec<StringRecord>,
    /// Detected encoding
    pub encoding: String,
    /// Detected delimiter
    pub delimiter: char,
}

impl ParseResult {
    /// Index of a column by exact header name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Cell value, empty when the row is shorter than the header.
    pub fn cell<'r>(record: &'r StringRecord, index: usize) -> &'r str {
        record.get(index).unwrap_or("")
    }

    /// 1-based line of a record in the source file.
    pub fn line_of(record: &StringRecord) -> u64 {
        record.position().map(|p| p.line()).unwrap_or(0)
    }
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let charset = chardet::detect(bytes).0;

    match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" | "utf-8-sig" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes with the given encoding and strip a byte order mark.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let decoded = match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => match std::str::from_utf8(bytes) {
            Ok(s) => s.to_string(),
            Err(e) => {
                crate::logs::log_warning(format!("Invalid UTF-8 ({}), decoding lossily", e));
                String::from_utf8_lossy(bytes).into_owned()
            }
        },
        // WHATWG maps the Latin-1 labels onto windows-1252
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
        other => match encoding_rs::Encoding::for_label(other.as_bytes()) {
            Some(enc) => {
                let (text, _, had_errors) = enc.decode(bytes);
                if had_errors {
                    return Err(CsvError::Encoding(format!(
                        "content is not valid {}",
                        enc.name()
                    )));
                }
                text.into_owned()
            }
            None => String::from_utf8_lossy(bytes).into_owned(),
        },
    };

    Ok(decoded.trim_start_matches('\u{feff}').to_string())
}

/// Detect the delimiter by counting occurrences in the header line.
///
/// Falls back to `,` when no candidate appears.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse decoded CSV text with an explicit delimiter.
///
/// Quoted fields may contain the delimiter. Short and long rows are
/// accepted; missing cells read as empty.
pub fn parse_str(content: &str, delimiter: char, encoding: String) -> CsvResult<ParseResult> {
    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }
    let delimiter_byte = u8::try_from(delimiter).map_err(|_| CsvError::Parse {
        line: 1,
        message: format!("unsupported delimiter '{}'", delimiter),
    })?;

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter_byte)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_matches('"').to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(CsvError::NoHeaders);
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        records.push(record);
    }

    Ok(ParseResult {
        headers,
        records,
        encoding,
        delimiter,
    })
}

/// Parse CSV bytes with auto-detection of encoding and delimiter.
pub fn parse_bytes_auto(bytes: &[u8]) -> CsvResult<ParseResult> {
    if bytes.is_empty() {
        return Err(CsvError::EmptyFile);
    }
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let delimiter = detect_delimiter(&content);
    parse_str(&content, delimiter, encoding)
}

/// Parse a CSV file with auto-detection of encoding and delimiter.
pub fn parse_csv_file_auto<P: AsRef<Path>>(path: P) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes_auto(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(csv: &str) -> ParseResult {
        parse_bytes_auto(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_simple_csv() {
        let result = parse("name,age\nAlice,30\nBob,25");

        assert_eq!(result.headers, vec!["name", "age"]);
        assert_eq!(result.records.len(), 2);
        assert_eq!(&result.records[0][0], "Alice");
        assert_eq!(&result.records[1][1], "25");
        assert_eq!(result.delimiter, ',');
    }

    #[test]
    fn test_quoted_delimiter() {
        let result = parse("code,label\nA,\"Agriculture, forestry and fishing\"");
        assert_eq!(&result.records[0][1], "Agriculture, forestry and fishing");
    }

    #[test]
    fn test_empty_lines_skipped() {
        let result = parse("a;b\n1;2\n\n3;4\n");
        assert_eq!(result.delimiter, ';');
        assert_eq!(result.records.len(), 2);
    }

    #[test]
    fn test_short_rows_read_as_empty() {
        let result = parse("a,b,c\n1");
        let record = &result.records[0];
        assert_eq!(ParseResult::cell(record, 0), "1");
        assert_eq!(ParseResult::cell(record, 2), "");
    }

    #[test]
    fn test_headers_trimmed_and_bom_stripped() {
        let result = parse("\u{feff} TIME_PERIOD , OBS_VALUE\n2022,1");
        assert_eq!(result.headers, vec!["TIME_PERIOD", "OBS_VALUE"]);
        assert_eq!(result.column("OBS_VALUE"), Some(1));
        assert!(!result.has_column("FINAL_DEMAND_AREA"));
    }

    #[test]
    fn test_line_numbers() {
        let result = parse("a,b\n1,2\n3,4");
        assert_eq!(ParseResult::line_of(&result.records[1]), 3);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_bytes_auto(b""), Err(CsvError::EmptyFile)));
        assert!(matches!(parse_bytes_auto(b"  \n"), Err(CsvError::EmptyFile)));
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), ';');
        assert_eq!(detect_delimiter("a\tb\tc"), '\t');
        assert_eq!(detect_delimiter("a|b|c"), '|');
        assert_eq!(detect_delimiter("single"), ',');
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1").unwrap();
        assert_eq!(decoded, "Société");
    }

    #[test]
    fn test_latin1_currency_sign() {
        // 0xA4 is '¤' in Latin-1, '€' only in ISO-8859-15
        let decoded = decode_content(&[0x31, 0xA4], "iso-8859-1").unwrap();
        assert_eq!(decoded, "1¤");
    }

    #[test]
    fn test_missing_file() {
        let err = parse_csv_file_auto("/nonexistent/tiva.csv").unwrap_err();
        assert!(matches!(err, CsvError::Io(_)));
    }
}
