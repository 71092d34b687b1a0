//! Explodes raw sheet rows into atomic single-valued contact records.
//!
//! Source cells routinely pack several phones or emails into one value.
//! Phones are split on the delimiters people actually type between them;
//! emails are recognised by a permissive token pattern so that surrounding
//! prose does not hide them. In both cases a non-blank cell that yields no
//! usable piece is preserved whole rather than lost.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::alquimista::leads::error::{Result, ToolError};
use crate::alquimista::leads::model::{AtomicRecord, SheetTable};

/// Worksheet name carrying phone rows.
pub const PHONE_SHEET: &str = "Telefones";
/// Worksheet name carrying email rows.
pub const EMAIL_SHEET: &str = "Emails";

const DOCUMENT_COLUMN: &str = "CPF/CNPJ";
const COMPANY_COLUMN: &str = "EMPRESA";
const PHONE_COLUMN: &str = "TELEFONE";
const EMAIL_COLUMN: &str = "EMAIL";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email pattern compiles")
});

/// Explodes the phone tables into atomic records, one per delimited entry.
pub fn explode_phones(tables: &[SheetTable]) -> Result<Vec<AtomicRecord>> {
    explode_tables(tables, PHONE_SHEET, PHONE_COLUMN, split_phones)
}

/// Explodes the email tables into atomic records, one per recognised token.
pub fn explode_emails(tables: &[SheetTable]) -> Result<Vec<AtomicRecord>> {
    explode_tables(tables, EMAIL_SHEET, EMAIL_COLUMN, split_emails)
}

fn explode_tables(
    tables: &[SheetTable],
    sheet: &str,
    value_column: &str,
    split: fn(&str) -> Vec<String>,
) -> Result<Vec<AtomicRecord>> {
    // Column resolution is all-or-nothing across the tables: a structural
    // defect in any of them aborts before a single row is exploded.
    let resolved = tables
        .iter()
        .map(|table| resolve_columns(table, sheet, value_column))
        .collect::<Result<Vec<_>>>()?;

    let mut records = Vec::new();

    for (table, columns) in tables.iter().zip(&resolved) {
        for row in &table.rows {
            let document = cell(row, columns.document);
            let company = cell(row, columns.company);
            let raw = cell(row, columns.value);
            explode_row(document, company, raw, split, &mut records);
        }
    }

    Ok(records)
}

struct ColumnIndexes {
    document: usize,
    company: usize,
    value: usize,
}

fn resolve_columns(table: &SheetTable, sheet: &str, value_column: &str) -> Result<ColumnIndexes> {
    let document = table.column_index(DOCUMENT_COLUMN);
    let company = table.column_index(COMPANY_COLUMN);
    let value = table.column_index(value_column);

    match (document, company, value) {
        (Some(document), Some(company), Some(value)) => Ok(ColumnIndexes {
            document,
            company,
            value,
        }),
        _ => {
            let mut missing = Vec::new();
            if document.is_none() {
                missing.push(DOCUMENT_COLUMN);
            }
            if company.is_none() {
                missing.push(COMPANY_COLUMN);
            }
            if value.is_none() {
                missing.push(value_column);
            }
            Err(ToolError::MissingColumns {
                sheet: sheet.to_string(),
                columns: missing.join(", "),
            })
        }
    }
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

fn explode_row(
    document: &str,
    company: &str,
    raw: &str,
    split: fn(&str) -> Vec<String>,
    records: &mut Vec<AtomicRecord>,
) {
    if raw.trim().is_empty() {
        records.push(AtomicRecord::new(document, company, None));
        return;
    }

    let pieces = split(raw);
    if pieces.is_empty() {
        // Nothing recognisable, keep the raw text instead of losing it.
        records.push(AtomicRecord::new(
            document,
            company,
            Some(raw.trim().to_string()),
        ));
        return;
    }

    for piece in pieces {
        records.push(AtomicRecord::new(document, company, Some(piece)));
    }
}

fn split_phones(text: &str) -> Vec<String> {
    text.split([';', '|', ',', '/', '\n'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_emails(text: &str) -> Vec<String> {
    EMAIL_REGEX
        .find_iter(text)
        .map(|token| token.as_str().trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{EMAIL_SHEET, PHONE_SHEET, explode_emails, explode_phones};
    use crate::alquimista::leads::error::ToolError;
    use crate::alquimista::leads::model::SheetTable;

    fn phone_table(rows: Vec<Vec<&str>>) -> SheetTable {
        table(&["CPF/CNPJ", "EMPRESA", "TELEFONE"], rows)
    }

    fn email_table(rows: Vec<Vec<&str>>) -> SheetTable {
        table(&["CPF/CNPJ", "EMPRESA", "EMAIL"], rows)
    }

    fn table(columns: &[&str], rows: Vec<Vec<&str>>) -> SheetTable {
        SheetTable {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect())
                .collect(),
        }
    }

    #[test]
    fn phones_split_on_common_delimiters() {
        let tables = [phone_table(vec![vec![
            "123",
            "Acme",
            "11 98765-4321; 1133334444 / 1144445555",
        ]])];
        let records = explode_phones(&tables).expect("exploded");

        let values: Vec<_> = records.iter().map(|r| r.value.as_deref()).collect();
        assert_eq!(
            values,
            vec![
                Some("11 98765-4321"),
                Some("1133334444"),
                Some("1144445555")
            ]
        );
    }

    #[test]
    fn blank_phone_cell_yields_one_absent_record() {
        let tables = [phone_table(vec![vec!["123", "Acme", "   "]])];
        let records = explode_phones(&tables).expect("exploded");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value, None);
        assert_eq!(records[0].document, "123");
    }

    #[test]
    fn delimiter_only_phone_cell_falls_back_to_the_trimmed_text() {
        let tables = [phone_table(vec![vec!["123", "Acme", " ; ; "]])];
        let records = explode_phones(&tables).expect("exploded");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value.as_deref(), Some("; ;"));
    }

    #[test]
    fn emails_are_extracted_by_token_match() {
        let tables = [email_table(vec![vec![
            "123",
            "Acme",
            "contato: a@acme.com ou vendas@acme.com.br",
        ]])];
        let records = explode_emails(&tables).expect("exploded");

        let values: Vec<_> = records.iter().map(|r| r.value.as_deref()).collect();
        assert_eq!(values, vec![Some("a@acme.com"), Some("vendas@acme.com.br")]);
    }

    #[test]
    fn unmatched_email_text_is_preserved_whole() {
        let tables = [email_table(vec![vec!["123", "Acme", " sem email valido "]])];
        let records = explode_emails(&tables).expect("exploded");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value.as_deref(), Some("sem email valido"));
    }

    #[test]
    fn blank_email_cell_yields_one_absent_record() {
        let tables = [email_table(vec![vec!["123", "Acme", ""]])];
        let records = explode_emails(&tables).expect("exploded");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value, None);
    }

    #[test]
    fn headers_match_case_insensitively() {
        let tables = [table(
            &["cpf/cnpj", "Empresa", "telefone"],
            vec![vec!["123", "Acme", "1133334444"]],
        )];
        let records = explode_phones(&tables).expect("exploded");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn missing_columns_abort_before_row_processing() {
        let tables = [table(&["CPF/CNPJ", "TELEFONE"], vec![])];
        let error = explode_phones(&tables).expect_err("missing column");
        match error {
            ToolError::MissingColumns { sheet, columns } => {
                assert_eq!(sheet, PHONE_SHEET);
                assert_eq!(columns, "EMPRESA");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_email_column_names_the_email_sheet() {
        let tables = [table(&["EMPRESA"], vec![])];
        let error = explode_emails(&tables).expect_err("missing columns");
        match error {
            ToolError::MissingColumns { sheet, columns } => {
                assert_eq!(sheet, EMAIL_SHEET);
                assert_eq!(columns, "CPF/CNPJ, EMAIL");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
