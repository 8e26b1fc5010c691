use crate::domain::model::{Cell, Table};
use crate::utils::error::{Result, UnifierError};
use rust_xlsxwriter::{Format, Workbook};

const MAX_COLUMNS: usize = 16_384;
// Excel 以 f64 儲存數值，超出此範圍的整數改寫為字串
const MAX_EXACT_INT: i64 = 1 << 53;

/// 將表格序列化為 xlsx；不輸出索引欄，表頭為粗體
pub fn write_xlsx(table: &Table) -> Result<Vec<u8>> {
    if table.column_count() > MAX_COLUMNS {
        return Err(UnifierError::ProcessingError {
            message: format!(
                "{} columns exceed the xlsx limit of {}",
                table.column_count(),
                MAX_COLUMNS
            ),
        });
    }

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let sheet = workbook.add_worksheet();

    for (col, name) in table.column_names().enumerate() {
        sheet.write_string_with_format(0, col as u16, name, &header_format)?;
    }

    for (row_index, row) in table.rows().enumerate() {
        let row_number = (row_index + 1) as u32;
        for (col, cell) in row.into_iter().enumerate() {
            let col = col as u16;
            match cell {
                None => {}
                Some(Cell::Text(s)) => {
                    sheet.write_string(row_number, col, s)?;
                }
                Some(Cell::Float(v)) => {
                    sheet.write_number(row_number, col, *v)?;
                }
                Some(Cell::Int(i)) if i.unsigned_abs() <= MAX_EXACT_INT as u64 => {
                    sheet.write_number(row_number, col, *i as f64)?;
                }
                Some(Cell::Int(i)) => {
                    sheet.write_string(row_number, col, i.to_string())?;
                }
                Some(Cell::Bool(b)) => {
                    sheet.write_boolean(row_number, col, *b)?;
                }
            }
        }
    }

    let buffer = workbook.save_to_buffer()?;
    tracing::debug!(
        "Serialized {} rows x {} columns ({} bytes)",
        table.row_count(),
        table.column_count(),
        buffer.len()
    );
    Ok(buffer)
}
