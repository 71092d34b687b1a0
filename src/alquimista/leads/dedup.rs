//! Final pass over the consolidated rows: display formatting, the phone
//! validity filter, and first-wins deduplication.

use std::collections::HashSet;

use crate::alquimista::leads::entity::EntityKey;
use crate::alquimista::leads::model::{ConsolidatedRow, Lead};
use crate::alquimista::leads::normalize::{format_document, format_phone};

/// Formats, filters, and deduplicates consolidated rows into final leads.
///
/// Rows whose phone cannot be formatted are dropped: a contact without a
/// dialable number has no value downstream, email or not. Duplicates are
/// detected on `(entity key, formatted phone, lower-cased email)` and the
/// first occurrence wins, so input order decides which row survives.
pub fn dedup(rows: Vec<ConsolidatedRow>) -> Vec<Lead> {
    let mut seen: HashSet<(EntityKey, String, String)> = HashSet::new();
    let mut leads = Vec::new();

    for row in rows {
        let phone = format_phone(row.phone.as_deref().unwrap_or(""));
        if phone.is_empty() {
            continue;
        }

        let document = format_document(&row.document);
        let email = row.email.unwrap_or_default();

        let fingerprint = (
            row.entity,
            phone.trim().to_string(),
            email.trim().to_lowercase(),
        );
        if !seen.insert(fingerprint) {
            continue;
        }

        leads.push(Lead {
            company: row.company,
            contact: contact_from_email(&email),
            document,
            email,
            phone,
        });
    }

    leads
}

/// Derives the contact label from the email local part; anything without
/// an `@` yields an empty label.
fn contact_from_email(email: &str) -> String {
    email
        .trim()
        .split_once('@')
        .map(|(local, _)| local.to_string())
        .unwrap_or_default()
}
