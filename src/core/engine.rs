use crate::core::Pipeline;
use crate::utils::error::Result;
use std::path::PathBuf;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<PathBuf> {
        tracing::info!("Starting column unification...");

        // Extract
        tracing::info!("📥 Loading table...");
        let table = self.pipeline.extract()?;
        tracing::info!(
            "Loaded {} rows with {} columns",
            table.row_count(),
            table.column_count()
        );

        // Transform
        tracing::info!("🔄 Unifying columns...");
        let unified = self.pipeline.transform(table)?;
        tracing::info!("Added {} unified columns", unified.report.rules.len());

        // Load
        tracing::info!("💾 Saving workbook...");
        let output_path = self.pipeline.load(unified)?;
        tracing::info!("Output saved to: {}", output_path.display());

        Ok(output_path)
    }
}
