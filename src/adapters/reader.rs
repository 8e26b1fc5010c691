//! Table loading: CSV first, spreadsheet formats on failure.

use crate::domain::model::{Cell, Table};
use crate::utils::error::{Result, UnifierError};
use calamine::{open_workbook_auto_from_rs, Data, DataType, Range, Reader};
use std::borrow::Cow;
use std::io::Cursor;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const DELIMITER_CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 讀取表格：先嘗試 CSV，失敗後改用試算表格式
pub fn read_table(bytes: &[u8], path: &Path) -> Result<Table> {
    let csv_cause = match parse_csv(bytes) {
        Ok(table) => {
            tracing::debug!("Parsed {} as CSV", path.display());
            return Ok(table);
        }
        Err(e) => e.to_string(),
    };

    tracing::debug!("CSV parse failed ({}), trying spreadsheet formats", csv_cause);

    match parse_spreadsheet(bytes) {
        Ok(table) => {
            tracing::debug!("Parsed {} as spreadsheet", path.display());
            Ok(table)
        }
        Err(e) => Err(UnifierError::InputUnreadable {
            path: path.to_path_buf(),
            csv_cause,
            spreadsheet_cause: e.to_string(),
        }),
    }
}

pub fn parse_csv(bytes: &[u8]) -> Result<Table> {
    // 含 NUL 的內容必定是二進位檔（xlsx/xls），直接交給試算表解析
    if bytes.contains(&0) {
        return Err(UnifierError::ProcessingError {
            message: "content is binary, not delimited text".to_string(),
        });
    }

    let content = decode_content(bytes);
    let delimiter = detect_delimiter(&content);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(UnifierError::ProcessingError {
            message: "no header row found".to_string(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > headers.len() {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(UnifierError::ProcessingError {
                message: format!(
                    "line {} has {} fields, header has {}",
                    line,
                    record.len(),
                    headers.len()
                ),
            });
        }

        let row = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    None
                } else {
                    Some(Cell::text(field))
                }
            })
            .collect();
        rows.push(row);
    }

    Ok(Table::from_rows(headers, rows))
}

/// Decodes UTF-8 (BOM stripped), falling back to Windows-1252.
pub fn decode_content(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            tracing::debug!("Input is not valid UTF-8, decoding as Windows-1252");
            encoding_rs::WINDOWS_1252
                .decode_without_bom_handling(bytes)
                .0
        }
    }
}

/// Picks the candidate that splits the header record into the most fields.
///
/// The header is parsed with each candidate, so delimiters inside quoted
/// names do not count. Ties go to `,`.
pub fn detect_delimiter(content: &str) -> u8 {
    let mut best = b',';
    let mut best_count = header_field_count(content, best);
    for candidate in DELIMITER_CANDIDATES {
        let count = header_field_count(content, candidate);
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }

    best
}

fn header_field_count(content: &str, delimiter: u8) -> usize {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes())
        .records()
        .next()
        .and_then(|record| record.ok())
        .map(|record| record.len())
        .unwrap_or(0)
}

pub fn parse_spreadsheet(bytes: &[u8]) -> Result<Table> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = first_worksheet(workbook.worksheet_range_at(0))?;

    // Range 從第一個有值的儲存格開始；補回前面的空白欄
    let leading = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => std::iter::repeat(String::new())
            .take(leading)
            .chain(
                header_row
                    .iter()
                    .map(|c| convert_cell(c).map(|cell| cell.to_string()).unwrap_or_default()),
            )
            .collect(),
        None => return Ok(Table::default()),
    };

    let data = rows
        .map(|row| {
            std::iter::repeat(None)
                .take(leading)
                .chain(row.iter().map(convert_cell))
                .collect()
        })
        .collect();

    Ok(Table::from_rows(headers, data))
}

fn first_worksheet(
    range: Option<std::result::Result<Range<Data>, calamine::Error>>,
) -> Result<Range<Data>> {
    match range {
        Some(range) => Ok(range?),
        None => Err(UnifierError::ProcessingError {
            message: "workbook has no worksheets".to_string(),
        }),
    }
}

fn convert_cell(data: &Data) -> Option<Cell> {
    match data {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(Cell::Text(s.clone())),
        Data::Float(f) => Some(Cell::Float(*f)),
        Data::Int(i) => Some(Cell::Int(*i)),
        Data::Bool(b) => Some(Cell::Bool(*b)),
        Data::DateTime(_) => {
            let formatted = data
                .as_datetime()
                .map(|dt: chrono::NaiveDateTime| dt.format(DATETIME_FORMAT).to_string())
                .unwrap_or_else(|| data.to_string());
            Some(Cell::Text(formatted))
        }
        other => Some(Cell::Text(other.to_string())),
    }
}
