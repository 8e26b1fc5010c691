use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnifierError {
    #[error(
        "Could not read '{}' as CSV ({csv_cause}) or as a spreadsheet ({spreadsheet_cause})",
        .path.display()
    )]
    InputUnreadable {
        path: PathBuf,
        csv_cause: String,
        spreadsheet_cause: String,
    },

    #[error("Could not write '{}': {reason}", .path.display())]
    OutputUnwritable { path: PathBuf, reason: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    SpreadsheetError(#[from] calamine::Error),

    #[error("XLSX writer error: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl UnifierError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            UnifierError::InputUnreadable { .. }
            | UnifierError::CsvError(_)
            | UnifierError::SpreadsheetError(_)
            | UnifierError::IoError(_) => ErrorCategory::Input,
            UnifierError::OutputUnwritable { .. } | UnifierError::XlsxError(_) => {
                ErrorCategory::Output
            }
            UnifierError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            UnifierError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 使用者可以換一個檔案或路徑再試一次
            ErrorCategory::Input | ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Processing => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            UnifierError::InputUnreadable { .. }
            | UnifierError::CsvError(_)
            | UnifierError::SpreadsheetError(_)
            | UnifierError::IoError(_) => {
                "Check that the input is a CSV or spreadsheet file with a header row"
            }
            UnifierError::OutputUnwritable { .. } | UnifierError::XlsxError(_) => {
                "Choose an output location that exists and is writable, and close the file if it is open elsewhere"
            }
            UnifierError::InvalidConfigValueError { .. } => {
                "Review the paths given on the command line"
            }
            UnifierError::ProcessingError { .. } => "Retry the operation",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("The input file could not be read.\n{}", self),
            ErrorCategory::Output => format!("The output file could not be saved.\n{}", self),
            ErrorCategory::Configuration => format!("Invalid settings.\n{}", self),
            ErrorCategory::Processing => format!("An unexpected error occurred:\n{}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, UnifierError>;
