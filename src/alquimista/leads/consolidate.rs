//! Groups atomic records by entity and expands each group into its
//! phone × email cross-join.
//!
//! The sources never say which phone belongs to which email, so every
//! phone of an entity is paired with every email. Over-generating pairs is
//! the conservative reading of the data; callers that want a tighter
//! pairing need a correspondence signal the sheets do not carry.

use std::collections::BTreeMap;

use crate::alquimista::leads::entity::{EntityKey, entity_key};
use crate::alquimista::leads::model::{AtomicRecord, ConsolidatedRow};

/// Contact facts accumulated for one entity key.
///
/// The `document`/`company` pair is the representative chosen for output:
/// the first phone-side record seen for the key, or the first email-side
/// record when the key never appears on the phone side.
struct EntityGroup {
    document: String,
    company: String,
    phones: Vec<String>,
    emails: Vec<String>,
}

/// Consolidates exploded phone and email records into cross-joined rows,
/// one per phone × email pair, or one per value when only one side exists.
///
/// Phone records must be passed first-hand from the phone tables; they are
/// processed before the email records, which is what gives phone-side
/// representatives precedence. Entities iterate in [`EntityKey`] order, so
/// the output is deterministic for identical inputs.
pub fn consolidate(phones: &[AtomicRecord], emails: &[AtomicRecord]) -> Vec<ConsolidatedRow> {
    let mut groups: BTreeMap<EntityKey, EntityGroup> = BTreeMap::new();

    for record in phones {
        let group = group_for(&mut groups, record);
        if let Some(value) = &record.value {
            group.phones.push(value.clone());
        }
    }

    for record in emails {
        let group = group_for(&mut groups, record);
        if let Some(value) = &record.value {
            group.emails.push(value.clone());
        }
    }

    let mut rows = Vec::new();
    for (key, group) in groups {
        expand_group(&key, group, &mut rows);
    }
    rows
}

fn group_for<'a>(
    groups: &'a mut BTreeMap<EntityKey, EntityGroup>,
    record: &AtomicRecord,
) -> &'a mut EntityGroup {
    let key = entity_key(&record.document, &record.company);
    groups.entry(key).or_insert_with(|| EntityGroup {
        document: record.document.clone(),
        company: record.company.clone(),
        phones: Vec::new(),
        emails: Vec::new(),
    })
}

fn expand_group(key: &EntityKey, group: EntityGroup, rows: &mut Vec<ConsolidatedRow>) {
    let EntityGroup {
        document,
        company,
        phones,
        emails,
    } = group;

    if !phones.is_empty() && !emails.is_empty() {
        for phone in &phones {
            for email in &emails {
                rows.push(ConsolidatedRow {
                    document: document.clone(),
                    company: company.clone(),
                    phone: Some(phone.clone()),
                    email: Some(email.clone()),
                    entity: key.clone(),
                });
            }
        }
    } else if !phones.is_empty() {
        for phone in phones {
            rows.push(ConsolidatedRow {
                document: document.clone(),
                company: company.clone(),
                phone: Some(phone),
                email: None,
                entity: key.clone(),
            });
        }
    } else {
        // Email-only entity; a group where both sides are empty came from
        // blank cells alone and expands to nothing.
        for email in emails {
            rows.push(ConsolidatedRow {
                document: document.clone(),
                company: company.clone(),
                phone: None,
                email: Some(email),
                entity: key.clone(),
            });
        }
    }
}
