use crate::domain::model::{RunOutcome, Table, UnifiedTable};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Table>;
    fn transform(&self, table: Table) -> Result<UnifiedTable>;
    fn load(&self, result: UnifiedTable) -> Result<PathBuf>;
}

/// 檔案選擇與通知介面；回傳 `None` 代表使用者取消
pub trait InteractionShell {
    fn choose_input(&mut self) -> Option<PathBuf>;
    fn choose_output(&mut self, suggested: &str) -> Option<PathBuf>;
    fn notify(&mut self, outcome: &RunOutcome);
}
