use crate::domain::model::RunOutcome;
use crate::domain::ports::InteractionShell;
use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};
use std::path::PathBuf;

/// 終端機版的檔案對話框與通知
///
/// Paths given up front skip the matching prompt. At the input prompt an
/// empty line or EOF cancels; at the save prompt an empty line accepts the
/// suggested name and EOF cancels.
pub struct TerminalShell<R, O, E> {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    reader: R,
    out: O,
    err: E,
}

impl TerminalShell<StdinLock<'static>, Stdout, Stderr> {
    pub fn stdio(input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        Self::new(input, output, io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, O: Write, E: Write> TerminalShell<R, O, E> {
    pub fn new(
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        reader: R,
        out: O,
        err: E,
    ) -> Self {
        Self {
            input,
            output,
            reader,
            out,
            err,
        }
    }

    /// Returns `None` on EOF or a read error.
    fn prompt(&mut self, label: &str) -> Option<String> {
        if let Err(e) = write!(self.out, "{}", label).and_then(|_| self.out.flush()) {
            tracing::warn!("Could not write prompt: {}", e);
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(clean_path_text(&line).to_string()),
            Err(e) => {
                tracing::warn!("Could not read from terminal: {}", e);
                None
            }
        }
    }

    pub fn into_parts(self) -> (R, O, E) {
        (self.reader, self.out, self.err)
    }
}

impl<R: BufRead, O: Write, E: Write> InteractionShell for TerminalShell<R, O, E> {
    fn choose_input(&mut self) -> Option<PathBuf> {
        if let Some(path) = self.input.take() {
            return Some(path);
        }

        self.prompt("Select the order spreadsheet to process (CSV/XLSX): ")
            .filter(|answer| !answer.is_empty())
            .map(PathBuf::from)
    }

    fn choose_output(&mut self, suggested: &str) -> Option<PathBuf> {
        if let Some(path) = self.output.take() {
            return Some(path);
        }

        let answer = self.prompt(&format!("Save processed file as [{}]: ", suggested))?;
        if answer.is_empty() {
            Some(PathBuf::from(suggested))
        } else {
            Some(PathBuf::from(answer))
        }
    }

    fn notify(&mut self, outcome: &RunOutcome) {
        let (_, message) = outcome.as_result();

        let written = match outcome {
            RunOutcome::Completed { .. } => writeln!(self.out, "✅ Success!\n{}", message),
            RunOutcome::Cancelled => writeln!(self.out, "ℹ️  Cancelled\n{}", message),
            RunOutcome::Failed { .. } => writeln!(self.err, "❌ Error\n{}", message),
        };

        if let Err(e) = written {
            tracing::warn!("Could not write notification: {}", e);
        }
    }
}

// 拖放到終端機的路徑常帶引號
fn clean_path_text(line: &str) -> &str {
    line.trim().trim_matches(|c: char| c == '"' || c == '\'')
}
