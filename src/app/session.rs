use crate::core::engine::EtlEngine;
use crate::core::pipeline::UnificationPipeline;
use crate::domain::model::RunOutcome;
use crate::domain::ports::{InteractionShell, Storage};
use crate::domain::rules::SUGGESTED_OUTPUT_NAME;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extensions, validate_path};
use std::path::{Path, PathBuf};

const OUTPUT_EXTENSION: &str = "xlsx";

/// 一次互動流程：選擇輸入、選擇輸出、執行、通知
pub struct Session<S: Storage + Clone> {
    storage: S,
}

impl<S: Storage + Clone> Session<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn run(&self, shell: &mut dyn InteractionShell) -> RunOutcome {
        let outcome = self.attempt(shell);

        match &outcome {
            RunOutcome::Completed { output_path } => {
                tracing::info!("✅ Unified workbook saved to {}", output_path.display());
            }
            RunOutcome::Cancelled => tracing::info!("Run cancelled by user"),
            RunOutcome::Failed { message, severity } => {
                tracing::error!("❌ Run failed ({:?}): {}", severity, message);
            }
        }

        shell.notify(&outcome);
        outcome
    }

    fn attempt(&self, shell: &mut dyn InteractionShell) -> RunOutcome {
        let Some(input_path) = shell.choose_input() else {
            return RunOutcome::Cancelled;
        };
        let Some(output_path) = shell.choose_output(SUGGESTED_OUTPUT_NAME) else {
            return RunOutcome::Cancelled;
        };

        match self.process(input_path, output_path) {
            Ok(output_path) => RunOutcome::Completed { output_path },
            Err(e) => {
                tracing::debug!("💡 Suggestion: {}", e.recovery_suggestion());
                RunOutcome::Failed {
                    message: e.to_string(),
                    severity: e.severity(),
                }
            }
        }
    }

    fn process(&self, input_path: PathBuf, output_path: PathBuf) -> Result<PathBuf> {
        validate_path("input", &input_path)?;
        let output_path = resolve_output_path(output_path)?;

        let pipeline = UnificationPipeline::new(self.storage.clone(), input_path, output_path);
        EtlEngine::new(pipeline).run()
    }
}

/// Appends `.xlsx` to a bare output name and rejects other extensions.
pub fn resolve_output_path(path: PathBuf) -> Result<PathBuf> {
    validate_path("output", &path)?;

    let path = if path.extension().is_none() {
        path.with_extension(OUTPUT_EXTENSION)
    } else {
        path
    };

    validate_file_extensions("output", &[Path::new(&path)], &[OUTPUT_EXTENSION])?;
    Ok(path)
}
