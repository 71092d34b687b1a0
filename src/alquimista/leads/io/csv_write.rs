use std::path::Path;

use crate::alquimista::leads::error::Result;
use crate::alquimista::leads::model::Lead;

/// Writes the final leads as a flat CSV with the same column set as the
/// workbook output.
pub fn write_leads(path: &Path, leads: &[Lead]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    if leads.is_empty() {
        // serialize() only emits headers alongside the first record.
        writer.write_record(Lead::HEADERS)?;
    }
    for lead in leads {
        writer.serialize(lead)?;
    }
    writer.flush()?;
    Ok(())
}
