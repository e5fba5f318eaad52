//! Trading partners and partner groups.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{RecordKind, StoredRecord};
use crate::activation::Activatable;
use crate::types::NaturalKey;

/// A trading party, or a group of parties when `isgroup` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Partner {
    #[validate(length(min = 1, max = 35))]
    pub idpartner: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub isgroup: bool,
    #[serde(default)]
    #[validate(length(max = 256))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(email)]
    pub mail: Option<String>,
    #[serde(default)]
    #[validate(email)]
    pub cc: Option<String>,
    /// Ids of the groups this partner belongs to.
    #[serde(default)]
    pub group: BTreeSet<String>,
}

impl Partner {
    pub fn new(idpartner: impl Into<String>) -> Self {
        Self {
            idpartner: idpartner.into(),
            active: false,
            isgroup: false,
            name: None,
            mail: None,
            cc: None,
            group: BTreeSet::new(),
        }
    }
}

impl StoredRecord for Partner {
    const KIND: RecordKind = RecordKind::Partner;
    const KEY_FIELDS: &'static [&'static str] = &["idpartner"];

    fn identity(&self) -> Option<NaturalKey> {
        Some(vec![self.idpartner.clone()])
    }
}

impl Activatable for Partner {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
