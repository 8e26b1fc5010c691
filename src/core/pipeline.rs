use crate::adapters::{reader, writer};
use crate::core::unifier::unify_in_place;
use crate::core::{Pipeline, Storage, Table, UnifiedTable};
use crate::domain::rules::{FieldRule, DELIVERY_ADDRESS_RULES};
use crate::utils::error::{Result, UnifierError};
use std::path::PathBuf;

/// 讀取一個輸入檔、套用欄位規則並寫出 xlsx 的管道
pub struct UnificationPipeline<S: Storage> {
    storage: S,
    input_path: PathBuf,
    output_path: PathBuf,
    rules: &'static [FieldRule],
}

impl<S: Storage> UnificationPipeline<S> {
    pub fn new(storage: S, input_path: PathBuf, output_path: PathBuf) -> Self {
        Self::with_rules(storage, input_path, output_path, &DELIVERY_ADDRESS_RULES)
    }

    pub fn with_rules(
        storage: S,
        input_path: PathBuf,
        output_path: PathBuf,
        rules: &'static [FieldRule],
    ) -> Self {
        Self {
            storage,
            input_path,
            output_path,
            rules,
        }
    }
}

impl<S: Storage> Pipeline for UnificationPipeline<S> {
    fn extract(&self) -> Result<Table> {
        tracing::debug!("Reading input file: {}", self.input_path.display());
        let bytes = self.storage.read_file(&self.input_path)?;

        let table = reader::read_table(&bytes, &self.input_path)?;
        tracing::debug!(
            "Loaded {} rows x {} columns",
            table.row_count(),
            table.column_count()
        );
        Ok(table)
    }

    fn transform(&self, mut table: Table) -> Result<UnifiedTable> {
        let report = unify_in_place(&mut table, self.rules);

        for stats in &report.rules {
            tracing::info!(
                "🔗 {}: {} from primary, {:?} from fallbacks, {} empty",
                stats.target,
                stats.from_primary,
                stats.from_fallbacks,
                stats.unresolved
            );
        }

        Ok(UnifiedTable { table, report })
    }

    fn load(&self, result: UnifiedTable) -> Result<PathBuf> {
        let data = writer::write_xlsx(&result.table)?;

        tracing::debug!("Writing XLSX file ({} bytes) to storage", data.len());
        self.storage
            .write_file(&self.output_path, &data)
            .map_err(|e| UnifierError::OutputUnwritable {
                path: self.output_path.clone(),
                reason: e.to_string(),
            })?;

        Ok(self.output_path.clone())
    }
}
