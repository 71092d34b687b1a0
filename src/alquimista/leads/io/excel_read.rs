use std::path::PathBuf;

use calamine::{DataType, Reader, Xlsx, open_workbook};
use tracing::{debug, info};

use crate::alquimista::leads::error::Result;
use crate::alquimista::leads::model::SheetTable;

/// Collects the named worksheet from every workbook that carries it.
///
/// Workbooks without the sheet contribute nothing and are skipped; only
/// the caller can decide whether finding no data anywhere is fatal. Tables
/// come back in the order the paths were given, rows top to bottom, which
/// fixes the first-encountered semantics of the later pipeline stages.
pub fn collect_sheets(paths: &[PathBuf], sheet: &str) -> Result<Vec<SheetTable>> {
    let mut tables = Vec::new();

    for path in paths {
        let mut workbook: Xlsx<_> = open_workbook(path)?;
        let Some(range_result) = workbook.worksheet_range(sheet) else {
            debug!(path = %path.display(), sheet, "sheet not present, skipping workbook");
            continue;
        };
        let range = range_result?;
        let table = range_to_table(&range);
        info!(path = %path.display(), sheet, rows = table.rows.len(), "loaded sheet");
        tables.push(table);
    }

    Ok(tables)
}

fn range_to_table(range: &calamine::Range<DataType>) -> SheetTable {
    let mut rows = range.rows();
    let columns = match rows.next() {
        Some(header) => header.iter().map(cell_to_string).collect(),
        None => Vec::new(),
    };
    let rows = rows
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    SheetTable { columns, rows }
}

fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::String(value) => value.clone(),
        DataType::Float(value) => float_to_string(*value),
        DataType::Int(value) => value.to_string(),
        DataType::Bool(value) => value.to_string(),
        DataType::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Documents and phones frequently arrive as numeric cells. An integral
/// float must render without the trailing `.0`, or the digit normaliser
/// downstream would pick up a spurious zero.
fn float_to_string(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
