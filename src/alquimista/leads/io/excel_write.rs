use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};

use crate::alquimista::leads::error::Result;
use crate::alquimista::leads::model::Lead;

const SHEET_NAME: &str = "Leads";
const HEADER_FILL: u32 = 0x366092;
const MAX_COLUMN_WIDTH: usize = 50;
/// Columns kept on Excel's text format so the digit strings survive
/// spreadsheet consumers untouched: CNPJ/CPF and Telefone.
const TEXT_COLUMNS: [usize; 2] = [2, 4];

/// Writes the final leads as a styled workbook: filled bold header, frozen
/// top row, an autofilter over the data range, and text-formatted
/// document/phone columns.
pub fn write_leads(path: &Path, leads: &[Lead]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_font_size(11)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let body_format = Format::new().set_align(FormatAlign::Top);
    let text_format = Format::new().set_num_format("@").set_align(FormatAlign::Top);

    for (col_idx, header) in Lead::HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col_idx as u16, *header, &header_format)?;
    }

    for (row_idx, lead) in leads.iter().enumerate() {
        for (col_idx, cell) in lead.cells().iter().enumerate() {
            let format = if TEXT_COLUMNS.contains(&col_idx) {
                &text_format
            } else {
                &body_format
            };
            worksheet.write_string_with_format((row_idx + 1) as u32, col_idx as u16, *cell, format)?;
        }
    }

    for (col_idx, width) in column_widths(leads).into_iter().enumerate() {
        worksheet.set_column_width(col_idx as u16, width as f64)?;
    }

    let last_row = leads.len() as u32;
    let last_col = (Lead::HEADERS.len() as u16).saturating_sub(1);
    worksheet.autofilter(0, 0, last_row, last_col)?;
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Column widths follow the longest cell per column, padded by two and
/// capped at [`MAX_COLUMN_WIDTH`] characters.
fn column_widths(leads: &[Lead]) -> Vec<usize> {
    let mut widths: Vec<usize> = Lead::HEADERS.iter().map(|header| header.len()).collect();
    for lead in leads {
        for (col_idx, cell) in lead.cells().iter().enumerate() {
            widths[col_idx] = widths[col_idx].max(cell.len());
        }
    }
    widths
        .into_iter()
        .map(|width| (width + 2).min(MAX_COLUMN_WIDTH))
        .collect()
}
