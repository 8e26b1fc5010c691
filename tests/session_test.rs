use anyhow::Result;
use column_unifier::adapters::reader::parse_spreadsheet;
use column_unifier::domain::model::cell_text;
use column_unifier::domain::ports::InteractionShell;
use column_unifier::{LocalStorage, RunOutcome, Session};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 以預先設定的答案模擬檔案對話框
struct ScriptedShell {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    suggested: Option<String>,
    notifications: Vec<RunOutcome>,
}

impl ScriptedShell {
    fn new(input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            input,
            output,
            suggested: None,
            notifications: Vec::new(),
        }
    }
}

impl InteractionShell for ScriptedShell {
    fn choose_input(&mut self) -> Option<PathBuf> {
        self.input.clone()
    }

    fn choose_output(&mut self, suggested: &str) -> Option<PathBuf> {
        self.suggested = Some(suggested.to_string());
        self.output.clone()
    }

    fn notify(&mut self, outcome: &RunOutcome) {
        self.notifications.push(outcome.clone());
    }
}

fn header_names(path: &Path) -> Result<Vec<String>> {
    let table = parse_spreadsheet(&std::fs::read(path)?)?;
    Ok(table.column_names().map(str::to_string).collect())
}

#[test]
fn test_end_to_end_csv_to_xlsx() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("pedidos.csv");
    let output = temp_dir.path().join("resultado.xlsx");
    std::fs::write(&input, "Endereço,CEP\n\"Rua A, 10\",01000-000\n")?;

    let mut shell = ScriptedShell::new(Some(input), Some(output.clone()));
    let outcome = Session::new(LocalStorage::new()).run(&mut shell);

    assert_eq!(
        outcome,
        RunOutcome::Completed {
            output_path: output.clone()
        }
    );
    assert_eq!(shell.notifications, vec![outcome]);
    assert_eq!(
        shell.suggested.as_deref(),
        Some("planilha_com_colunas_unificadas.xlsx")
    );

    assert_eq!(
        header_names(&output)?,
        vec![
            "Endereço",
            "CEP",
            "Endereço Unificado",
            "Número Unificado",
            "CEP Unificado",
            "Bairro Unificado"
        ]
    );

    let table = parse_spreadsheet(&std::fs::read(&output)?)?;
    assert_eq!(table.row_count(), 1);
    assert_eq!(cell_text(table.cell("Endereço Unificado", 0)), "Rua A, 10");
    assert_eq!(cell_text(table.cell("Número Unificado", 0)), "");
    assert_eq!(cell_text(table.cell("CEP Unificado", 0)), "01000-000");
    assert_eq!(cell_text(table.cell("Bairro Unificado", 0)), "");
    Ok(())
}

#[test]
fn test_end_to_end_xlsx_input() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("pedidos.xlsx");
    let output = temp_dir.path().join("resultado");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Número Entrega")?;
    sheet.write_string(0, 1, "Número")?;
    sheet.write_string(0, 2, "Nome Bai. Entrega")?;
    sheet.write_string(0, 3, "Nome do Bairro")?;
    sheet.write_number(1, 0, 1500)?;
    sheet.write_string(1, 1, "20")?;
    sheet.write_string(1, 2, "   ")?;
    sheet.write_string(1, 3, " Centro ")?;
    sheet.write_string(2, 1, "77")?;
    workbook.save(&input)?;

    let mut shell = ScriptedShell::new(Some(input), Some(output));
    let outcome = Session::new(LocalStorage::new()).run(&mut shell);

    // 沒有副檔名時自動補上 .xlsx
    let saved = temp_dir.path().join("resultado.xlsx");
    assert_eq!(
        outcome,
        RunOutcome::Completed {
            output_path: saved.clone()
        }
    );

    let table = parse_spreadsheet(&std::fs::read(&saved)?)?;
    assert_eq!(cell_text(table.cell("Número Unificado", 0)), "1500");
    assert_eq!(cell_text(table.cell("Número Unificado", 1)), "77");
    assert_eq!(cell_text(table.cell("Bairro Unificado", 0)), "Centro");
    assert_eq!(cell_text(table.cell("Bairro Unificado", 1)), "");
    Ok(())
}

#[test]
fn test_cancelled_save_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("pedidos.csv");
    std::fs::write(&input, "CEP\n01000-000\n")?;

    let mut shell = ScriptedShell::new(Some(input), None);
    let outcome = Session::new(LocalStorage::new()).run(&mut shell);

    assert_eq!(outcome, RunOutcome::Cancelled);
    assert_eq!(shell.notifications, vec![RunOutcome::Cancelled]);

    let (success, message) = outcome.as_result();
    assert!(!success);
    assert!(message.contains("cancelled"));

    let entries: Vec<_> = std::fs::read_dir(temp_dir.path())?.collect();
    assert_eq!(entries.len(), 1);
    Ok(())
}

#[test]
fn test_no_input_selected_is_cancelled() {
    let mut shell = ScriptedShell::new(None, Some(PathBuf::from("never.xlsx")));
    let outcome = Session::new(LocalStorage::new()).run(&mut shell);

    assert_eq!(outcome, RunOutcome::Cancelled);
    assert!(shell.suggested.is_none());
}

#[test]
fn test_unreadable_input_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("corrompido.xlsx");
    let output = temp_dir.path().join("resultado.xlsx");
    std::fs::write(&input, b"PK\x03\x04\x00\x00 not really a workbook")?;

    let mut shell = ScriptedShell::new(Some(input), Some(output.clone()));
    let outcome = Session::new(LocalStorage::new()).run(&mut shell);

    match &outcome {
        RunOutcome::Failed { message, .. } => {
            assert!(message.contains("corrompido.xlsx"));
            assert!(message.contains("CSV"));
            assert!(message.contains("spreadsheet"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(!outcome.as_result().0);
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_unwritable_output_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("pedidos.csv");
    let output = temp_dir.path().join("nao_existe").join("resultado.xlsx");
    std::fs::write(&input, "CEP\n01000-000\n")?;

    let mut shell = ScriptedShell::new(Some(input), Some(output.clone()));
    let outcome = Session::new(LocalStorage::new()).run(&mut shell);

    match outcome {
        RunOutcome::Failed { message, .. } => assert!(message.contains("Could not write")),
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_wrong_output_extension_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("pedidos.csv");
    std::fs::write(&input, "CEP\n01000-000\n")?;

    let mut shell = ScriptedShell::new(Some(input), Some(temp_dir.path().join("saida.csv")));
    let outcome = Session::new(LocalStorage::new()).run(&mut shell);

    assert!(matches!(outcome, RunOutcome::Failed { .. }));
    Ok(())
}
