//! Validation of the inputs that start a review
//!
//! Slide reviews start from a count typed by the user; demo reviews start from
//! a sheet (Excel workbook, CSV, TSV or a plain list) whose cells hold demo
//! URLs. The cap on item counts lives here, not in
//! [`ItemSequence`](crate::ItemSequence).

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::{debug, warn};

use crate::{Error, Result};

/// Largest review accepted by default
pub const DEFAULT_MAX_ITEMS: usize = 1000;

const EXCEL_PARSE_ERROR: &str =
    "Error parsing Excel file. Please ensure it's a valid Excel format.";

/// Parse the number of slides to review
pub fn parse_slide_count(input: &str, max: usize) -> Result<usize> {
    let count: i64 = input
        .trim()
        .parse()
        .map_err(|_| Error::InvalidInput("Please enter a valid positive number".to_string()))?;

    if count <= 0 {
        return Err(Error::InvalidInput(
            "Please enter a valid positive number".to_string(),
        ));
    }

    let count = usize::try_from(count).unwrap_or(usize::MAX);
    if count > max {
        return Err(Error::InvalidInput(format!(
            "For performance reasons, please limit to {} slides or fewer",
            max
        )));
    }

    Ok(count)
}

/// Supported sheet files, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// `.xlsx` / `.xls`; only the first worksheet is read
    Excel,
    /// `.csv`, comma separated with standard quoting
    Csv,
    /// `.tsv`, tab separated with standard quoting
    Tsv,
    /// `.txt`, one cell per line
    Text,
}

impl SheetFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" | "xls" => Some(SheetFormat::Excel),
            "csv" => Some(SheetFormat::Csv),
            "tsv" => Some(SheetFormat::Tsv),
            "txt" => Some(SheetFormat::Text),
            _ => None,
        }
    }
}

/// URLs found in a sheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlExtraction {
    /// Accepted URLs in row-major order
    pub urls: Vec<String>,
    /// Number of URLs found before the cap was applied, if it was applied
    pub truncated_from: Option<usize>,
}

impl UrlExtraction {
    pub fn is_truncated(&self) -> bool {
        self.truncated_from.is_some()
    }
}

/// Whether a cell value is accepted as a demo URL
pub fn is_demo_url(cell: &str) -> bool {
    cell.starts_with("http://") || cell.starts_with("https://")
}

/// Keep the cells that are demo URLs, unmodified and in order
///
/// More than `max` URLs keeps the first `max` and records the original count.
pub fn collect_urls(cells: impl IntoIterator<Item = String>, max: usize) -> UrlExtraction {
    let mut urls: Vec<String> = cells.into_iter().filter(|cell| is_demo_url(cell)).collect();

    let found = urls.len();
    let truncated_from = if found > max {
        warn!(found, max, "Too many demo URLs, keeping the first {}", max);
        urls.truncate(max);
        Some(found)
    } else {
        None
    };

    debug!(count = urls.len(), "Extracted demo URLs");

    UrlExtraction {
        urls,
        truncated_from,
    }
}

/// Cells of a delimited sheet in row-major order
///
/// Quoted cells may contain the delimiter; rows may differ in length.
pub fn delimited_cells(text: &str, delimiter: u8) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut cells = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| Error::InvalidInput(format!("Error parsing sheet: {}", e)))?;
        cells.extend(record.iter().map(str::to_string));
    }
    Ok(cells)
}

/// Cells of a plain list: each line is one cell
pub fn line_cells(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// String cells of the first worksheet in row-major order
pub fn workbook_cells(path: &Path) -> Result<Vec<String>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| excel_error(path, e))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|e| excel_error(path, e))?,
        None => return Ok(Vec::new()),
    };

    Ok(range
        .rows()
        .flat_map(|row| row.iter())
        .filter_map(|cell| match cell {
            Data::String(s) => Some(s.clone()),
            _ => None,
        })
        .collect())
}

fn excel_error(path: &Path, err: calamine::Error) -> Error {
    warn!(path = %path.display(), error = %err, "Failed to read workbook");
    Error::InvalidInput(EXCEL_PARSE_ERROR.to_string())
}

/// Read a sheet from disk and collect its demo URLs
///
/// Fails if the extension is not a supported format, if the file cannot be
/// parsed, or if no URL is found at all.
pub fn load_urls(path: &Path, max: usize) -> Result<UrlExtraction> {
    let format = SheetFormat::from_path(path).ok_or_else(|| {
        Error::InvalidInput(format!(
            "Please provide a valid sheet file (.xlsx, .xls, .csv, .tsv or .txt): {}",
            path.display()
        ))
    })?;

    let cells = match format {
        SheetFormat::Excel => workbook_cells(path)?,
        SheetFormat::Csv => delimited_cells(&std::fs::read_to_string(path)?, b',')?,
        SheetFormat::Tsv => delimited_cells(&std::fs::read_to_string(path)?, b'\t')?,
        SheetFormat::Text => line_cells(&std::fs::read_to_string(path)?),
    };

    let extraction = collect_urls(cells, max);
    if extraction.urls.is_empty() {
        return Err(Error::InvalidInput(format!(
            "No valid URLs found in {}",
            path.display()
        )));
    }

    Ok(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use tempfile::TempDir;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_slide_count_valid() {
        assert_eq!(parse_slide_count("12", 1000).unwrap(), 12);
        assert_eq!(parse_slide_count("  7\n", 1000).unwrap(), 7);
        assert_eq!(parse_slide_count("1000", 1000).unwrap(), 1000);
    }

    #[test]
    fn test_parse_slide_count_rejects_non_positive() {
        for input in ["0", "-3", "abc", "", "2.5"] {
            let err = parse_slide_count(input, 1000).unwrap_err();
            assert_eq!(err.to_string(), "Please enter a valid positive number");
        }
    }

    #[test]
    fn test_parse_slide_count_rejects_over_cap() {
        let err = parse_slide_count("1001", 1000).unwrap_err();
        assert_eq!(
            err.to_string(),
            "For performance reasons, please limit to 1000 slides or fewer"
        );
    }

    #[test]
    fn test_sheet_format_from_extension() {
        assert_eq!(
            SheetFormat::from_path(Path::new("demos.XLSX")),
            Some(SheetFormat::Excel)
        );
        assert_eq!(
            SheetFormat::from_path(Path::new("demos.xls")),
            Some(SheetFormat::Excel)
        );
        assert_eq!(
            SheetFormat::from_path(Path::new("demos.csv")),
            Some(SheetFormat::Csv)
        );
        assert_eq!(
            SheetFormat::from_path(Path::new("demos.tsv")),
            Some(SheetFormat::Tsv)
        );
        assert_eq!(
            SheetFormat::from_path(Path::new("demos.txt")),
            Some(SheetFormat::Text)
        );
        assert_eq!(SheetFormat::from_path(Path::new("demos.pdf")), None);
        assert_eq!(SheetFormat::from_path(Path::new("demos")), None);
    }

    #[test]
    fn test_collect_urls_keeps_only_urls() {
        let extraction = collect_urls(
            cells(&[
                "name",
                "http://a.com",
                "ftp://files.net",
                "www.example.com",
                "notes about http://x.com",
                "https://b.com",
            ]),
            1000,
        );
        assert_eq!(extraction.urls, vec!["http://a.com", "https://b.com"]);
        assert!(!extraction.is_truncated());
    }

    #[test]
    fn test_collect_urls_truncates_over_cap() {
        let all: Vec<String> = (0..5).map(|i| format!("https://d{}.io", i)).collect();
        let extraction = collect_urls(all, 3);
        assert_eq!(extraction.urls.len(), 3);
        assert_eq!(extraction.urls[2], "https://d2.io");
        assert_eq!(extraction.truncated_from, Some(5));
    }

    #[test]
    fn test_csv_keeps_semicolons_and_quoted_commas() {
        let sheet = "https://a.com/p;jsessionid=1\n\"https://b.com/?q=1,2\"\n";
        let extraction = collect_urls(delimited_cells(sheet, b',').unwrap(), 1000);
        assert_eq!(
            extraction.urls,
            vec!["https://a.com/p;jsessionid=1", "https://b.com/?q=1,2"]
        );
    }

    #[test]
    fn test_csv_row_major_with_ragged_rows() {
        let sheet = "name,url\nfirst,http://a.com\nsecond,https://b.com,https://c.com\n";
        let extraction = collect_urls(delimited_cells(sheet, b',').unwrap(), 1000);
        assert_eq!(
            extraction.urls,
            vec!["http://a.com", "https://b.com", "https://c.com"]
        );
    }

    #[test]
    fn test_tsv_cells() {
        let sheet = "demo\thttps://a.com/x,y\nother\thttp://b.com\n";
        assert_eq!(
            delimited_cells(sheet, b'\t').unwrap(),
            vec!["demo", "https://a.com/x,y", "other", "http://b.com"]
        );
    }

    #[test]
    fn test_text_lines_are_whole_cells() {
        let extraction = collect_urls(
            line_cells("https://a.com/p;v=1,2\r\nnot a url\nhttp://b.com\n"),
            1000,
        );
        assert_eq!(extraction.urls, vec!["https://a.com/p;v=1,2", "http://b.com"]);
    }

    #[test]
    fn test_load_urls_from_csv_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("demos.csv");
        std::fs::write(&path, "http://a.com\n\"https://b.com/?a=1,2\"\n").unwrap();

        let extraction = load_urls(&path, 1000).unwrap();
        assert_eq!(extraction.urls, vec!["http://a.com", "https://b.com/?a=1,2"]);
    }

    #[test]
    fn test_load_urls_from_workbook_first_sheet() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("demos.xlsx");

        let mut workbook = Workbook::new();
        let first = workbook.add_worksheet();
        first.write_string(0, 0, "Demo").unwrap();
        first.write_string(0, 1, "https://a.com/p;id=1,2").unwrap();
        first.write_number(1, 0, 42.0).unwrap();
        first.write_string(1, 1, "http://b.com").unwrap();
        let second = workbook.add_worksheet();
        second.write_string(0, 0, "https://ignored.com").unwrap();
        workbook.save(&path).unwrap();

        let extraction = load_urls(&path, 1000).unwrap();
        assert_eq!(extraction.urls, vec!["https://a.com/p;id=1,2", "http://b.com"]);
    }

    #[test]
    fn test_load_urls_rejects_corrupt_workbook() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("demos.xlsx");
        std::fs::write(&path, "definitely not a zip archive").unwrap();

        let err = load_urls(&path, 1000).unwrap_err();
        assert_eq!(err.to_string(), EXCEL_PARSE_ERROR);
    }

    #[test]
    fn test_load_urls_rejects_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("demos.pdf");
        std::fs::write(&path, "http://a.com").unwrap();

        let err = load_urls(&path, 1000).unwrap_err();
        assert!(err.to_string().contains("valid sheet file"));
    }

    #[test]
    fn test_load_urls_rejects_empty_sheet() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("demos.txt");
        std::fs::write(&path, "no links here\n").unwrap();

        let err = load_urls(&path, 1000).unwrap_err();
        assert!(err.to_string().starts_with("No valid URLs found"));
    }

    #[test]
    fn test_load_urls_missing_file() {
        let result = load_urls(Path::new("/nonexistent/demos.csv"), 1000);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
