use crate::alquimista::leads::normalize::{digits_only, normalize_company};

/// Identity of a business entity across source rows.
///
/// The `Ord` derive fixes the output iteration order: document-keyed
/// entities sort before name-keyed ones, which sort before the unkeyed
/// sentinel, lexicographically within each variant. Consolidation relies on
/// this to stay byte-identical across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKey {
    /// Keyed by the digit content of a tax document (CNPJ or CPF).
    Document(String),
    /// Keyed by the normalised company name when no document is usable.
    Company(String),
    /// Neither field carried anything usable.
    Unkeyed,
}

/// Derives the entity key for a record. The document wins whenever its
/// digit content is non-empty; the company name is the fallback.
pub fn entity_key(document: &str, company: &str) -> EntityKey {
    let digits = digits_only(document);
    if !digits.is_empty() {
        return EntityKey::Document(digits);
    }

    let name = normalize_company(company);
    if !name.is_empty() {
        return EntityKey::Company(name);
    }

    EntityKey::Unkeyed
}
