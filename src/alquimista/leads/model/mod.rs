use serde::Serialize;

use crate::alquimista::leads::entity::EntityKey;

/// A tabular slice of one source worksheet: a header row plus data rows,
/// every cell already stringified.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Finds a column by name, ignoring ASCII case and surrounding
    /// whitespace in the header cell.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.trim().eq_ignore_ascii_case(name))
    }

    /// Whether the table carries any data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One single-valued contact fact extracted from a possibly multi-valued
/// source cell, still carrying the identifying fields of its parent row.
///
/// A blank source cell yields a record with `value = None` rather than no
/// record at all, so the entity stays visible to grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomicRecord {
    pub document: String,
    pub company: String,
    pub value: Option<String>,
}

impl AtomicRecord {
    /// Creates a new atomic record for the given identifying fields.
    pub fn new(
        document: impl Into<String>,
        company: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self {
            document: document.into(),
            company: company.into(),
            value,
        }
    }
}

/// One phone × email pairing for an entity, before formatting, filtering,
/// and deduplication.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidatedRow {
    pub document: String,
    pub company: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub entity: EntityKey,
}

/// Final output row. Document and phone are display-formatted strings,
/// never numeric values, so spreadsheet consumers cannot mangle them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lead {
    #[serde(rename = "Empresa")]
    pub company: String,
    #[serde(rename = "Contato")]
    pub contact: String,
    #[serde(rename = "CNPJ/CPF")]
    pub document: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Telefone")]
    pub phone: String,
}

impl Lead {
    /// Output column headers, in order.
    pub const HEADERS: [&'static str; 5] = ["Empresa", "Contato", "CNPJ/CPF", "Email", "Telefone"];

    /// The row cells in header order.
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.company,
            &self.contact,
            &self.document,
            &self.email,
            &self.phone,
        ]
    }
}
