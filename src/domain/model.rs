use crate::utils::error::ErrorSeverity;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// 單一儲存格的值；缺值以 `Option::None` 表示
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Float(f64),
    Int(i64),
    Bool(bool),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Int(i) => write!(f, "{}", i),
            // 1500.0 顯示為 "1500"
            Cell::Float(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 => {
                write!(f, "{}", *v as i64)
            }
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Bool(true) => f.write_str("TRUE"),
            Cell::Bool(false) => f.write_str("FALSE"),
        }
    }
}

/// Text form of an optional cell: missing reads as the empty string.
pub fn cell_text(cell: Option<&Cell>) -> String {
    cell.map(Cell::to_string).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Option<Cell>>,
}

/// Column-oriented table. Column names are unique and every column has
/// exactly `row_count` values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    index: HashMap<String, usize>,
    row_count: usize,
}

impl Table {
    /// 由表頭與資料列建立表格
    ///
    /// Empty header names become `Unnamed: <position>`, repeated names get a
    /// `.1`, `.2`, ... suffix, and short rows are padded with missing cells.
    /// Rows longer than the header are truncated; callers that must reject
    /// them check before building.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<Option<Cell>>>) -> Self {
        let names = normalize_headers(headers);
        let row_count = rows.len();

        let mut columns: Vec<Column> = names
            .into_iter()
            .map(|name| Column {
                name,
                values: Vec::with_capacity(row_count),
            })
            .collect();

        for row in rows {
            let mut cells = row.into_iter();
            for column in columns.iter_mut() {
                column.values.push(cells.next().flatten());
            }
        }

        let index = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();

        Self {
            columns,
            index,
            row_count,
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.index.get(name).map(|&i| &self.columns[i])
    }

    pub fn cell(&self, column: &str, row: usize) -> Option<&Cell> {
        self.column(column)
            .and_then(|c| c.values.get(row))
            .and_then(Option::as_ref)
    }

    /// Replaces the values of `name` in place, or appends a new column.
    pub fn set_column(&mut self, name: &str, values: Vec<Option<Cell>>) {
        debug_assert_eq!(values.len(), self.row_count);

        match self.index.get(name) {
            Some(&i) => self.columns[i].values = values,
            None => {
                self.index.insert(name.to_string(), self.columns.len());
                self.columns.push(Column {
                    name: name.to_string(),
                    values,
                });
            }
        }
    }

    /// 逐列取得儲存格，供輸出使用
    pub fn rows(&self) -> impl Iterator<Item = Vec<Option<&Cell>>> + '_ {
        (0..self.row_count).map(move |row| {
            self.columns
                .iter()
                .map(|c| c.values[row].as_ref())
                .collect()
        })
    }
}

/// 每條規則的解析統計
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleStats {
    pub target: &'static str,
    pub from_primary: usize,
    /// One counter per fallback, in rule order.
    pub from_fallbacks: Vec<usize>,
    pub unresolved: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnifyReport {
    pub rules: Vec<RuleStats>,
}

#[derive(Debug, Clone)]
pub struct UnifiedTable {
    pub table: Table,
    pub report: UnifyReport,
}

/// Terminal state of one interactive run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { output_path: PathBuf },
    Cancelled,
    Failed {
        message: String,
        severity: ErrorSeverity,
    },
}

impl RunOutcome {
    /// `(success, message)` pair shown to the user.
    pub fn as_result(&self) -> (bool, String) {
        match self {
            RunOutcome::Completed { output_path } => (
                true,
                format!(
                    "Process completed successfully!\n\nFile saved as:\n{}",
                    output_path.display()
                ),
            ),
            RunOutcome::Cancelled => (false, "The process was cancelled.".to_string()),
            RunOutcome::Failed { message, .. } => {
                (false, format!("An unexpected error occurred:\n{}", message))
            }
        }
    }
}

fn normalize_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(headers.len());

    for (position, header) in headers.into_iter().enumerate() {
        let base = if header.is_empty() {
            format!("Unnamed: {}", position)
        } else {
            header
        };

        let mut name = base.clone();
        while seen.contains_key(&name) {
            let counter = seen.entry(base.clone()).or_insert(0);
            *counter += 1;
            name = format!("{}.{}", base, counter);
        }
        seen.insert(name.clone(), 0);
        names.push(name);
    }

    names
}
