//! Natural-key uniqueness between a candidate and the stored records.

use serde::{Deserialize, Serialize};

use super::rules::{Violation, ViolationKind};
use crate::records::StoredRecord;
use crate::types::NaturalKey;

/// Whether the candidate is a new record or an edit of a stored one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum WriteMode {
    #[default]
    Create,
    /// Edit of a stored record. `original_key` is the natural key the record
    /// had before the edit; omitted means the key is unchanged.
    Update {
        #[serde(default)]
        original_key: Option<NaturalKey>,
    },
}

/// Stored record whose natural key the candidate would take over.
///
/// Records keyed by a surrogate id never collide here. An update that keeps
/// its original key is the record itself, not a collision.
pub fn find_key_conflict<'a, T: StoredRecord>(
    candidate: &T,
    existing: &'a [T],
    mode: &WriteMode,
) -> Option<&'a T> {
    if T::KEY_FIELDS.is_empty() {
        return None;
    }
    let key = candidate.identity()?;
    if let WriteMode::Update { original_key } = mode {
        if original_key.as_ref().map_or(true, |original| *original == key) {
            return None;
        }
    }
    existing
        .iter()
        .find(|other| other.identity().as_ref() == Some(&key))
}

pub fn check_unique_key<T: StoredRecord>(
    candidate: &T,
    existing: &[T],
    mode: &WriteMode,
) -> Option<Violation> {
    find_key_conflict(candidate, existing, mode)?;
    let key = candidate.identity().unwrap_or_default().join(", ");
    Some(Violation::new(
        ViolationKind::DuplicateKey { entity: T::KIND },
        T::KEY_FIELDS,
        format!("A {} with key ({key}) already exists.", T::KIND),
    ))
}
