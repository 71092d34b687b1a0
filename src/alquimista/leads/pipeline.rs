use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::alquimista::leads::consolidate::consolidate;
use crate::alquimista::leads::dedup::dedup;
use crate::alquimista::leads::error::{Result, ToolError};
use crate::alquimista::leads::explode::{EMAIL_SHEET, PHONE_SHEET, explode_emails, explode_phones};
use crate::alquimista::leads::io::{csv_write, excel_read, excel_write};
use crate::alquimista::leads::model::SheetTable;

/// Runs the full consolidation over the given source workbooks and writes
/// the styled output workbook, plus an optional flat CSV copy.
///
/// Returns the number of consolidated leads. Fails fast when a present
/// sheet lacks the required columns or when no workbook carried any
/// Telefones/Emails rows at all.
#[instrument(
    level = "info",
    skip_all,
    fields(sources = inputs.len(), output = %output.display())
)]
pub fn consolidate_workbooks(
    inputs: &[PathBuf],
    output: &Path,
    csv: Option<&Path>,
) -> Result<usize> {
    let phone_tables = excel_read::collect_sheets(inputs, PHONE_SHEET)?;
    let email_tables = excel_read::collect_sheets(inputs, EMAIL_SHEET)?;

    let has_rows = |tables: &[SheetTable]| tables.iter().any(|table| !table.is_empty());
    if !has_rows(&phone_tables) && !has_rows(&email_tables) {
        return Err(ToolError::NoSourceData);
    }

    let phones = explode_phones(&phone_tables)?;
    let emails = explode_emails(&email_tables)?;
    debug!(
        phones = phones.len(),
        emails = emails.len(),
        "exploded atomic records"
    );

    let rows = consolidate(&phones, &emails);
    debug!(rows = rows.len(), "cross-joined consolidated rows");

    let leads = dedup(rows);
    info!(leads = leads.len(), "deduplicated final leads");

    excel_write::write_leads(output, &leads)?;
    if let Some(csv_path) = csv {
        csv_write::write_leads(csv_path, &leads)?;
    }

    Ok(leads.len())
}
