//! User code lists used by mappings for code conversion.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{RecordKind, StoredRecord};
use crate::types::NaturalKey;

/// Declares a code list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Ccodetrigger {
    #[validate(length(min = 1, max = 35))]
    pub ccodeid: String,
    #[serde(default)]
    pub ccodeid_desc: Option<String>,
}

impl StoredRecord for Ccodetrigger {
    const KIND: RecordKind = RecordKind::Ccodetrigger;
    const KEY_FIELDS: &'static [&'static str] = &["ccodeid"];

    fn identity(&self) -> Option<NaturalKey> {
        Some(vec![self.ccodeid.clone()])
    }
}

/// One conversion entry of a code list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Ccode {
    #[validate(length(min = 1, max = 35))]
    pub ccodeid: String,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub leftcode: String,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub rightcode: String,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub attr1: String,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub attr2: String,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub attr3: String,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub attr4: String,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub attr5: String,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub attr6: String,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub attr7: String,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub attr8: String,
}

impl Ccode {
    pub fn new(
        ccodeid: impl Into<String>,
        leftcode: impl Into<String>,
        rightcode: impl Into<String>,
    ) -> Self {
        Self {
            ccodeid: ccodeid.into(),
            leftcode: leftcode.into(),
            rightcode: rightcode.into(),
            attr1: String::new(),
            attr2: String::new(),
            attr3: String::new(),
            attr4: String::new(),
            attr5: String::new(),
            attr6: String::new(),
            attr7: String::new(),
            attr8: String::new(),
        }
    }
}

impl StoredRecord for Ccode {
    const KIND: RecordKind = RecordKind::Ccode;
    const KEY_FIELDS: &'static [&'static str] = &["ccodeid", "leftcode", "rightcode"];

    fn identity(&self) -> Option<NaturalKey> {
        Some(vec![
            self.ccodeid.clone(),
            self.leftcode.clone(),
            self.rightcode.clone(),
        ])
    }
}
