//! Translation bindings: which mapping script handles an incoming message.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{is_blank, RecordKind, StoredRecord};
use crate::activation::Activatable;
use crate::types::{DbId, NaturalKey};

/// Binds an incoming editype/messagetype (optionally narrowed by `alt` and
/// partners) to a mapping script and outgoing message shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Translate {
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(default)]
    pub active: bool,
    #[validate(length(min = 1, max = 35))]
    pub fromeditype: String,
    #[validate(length(min = 1, max = 35))]
    pub frommessagetype: String,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub alt: String,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub frompartner: Option<String>,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub topartner: Option<String>,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub tscript: String,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub toeditype: String,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub tomessagetype: String,
    #[serde(default)]
    pub desc: Option<String>,
}

/// The five columns that must be unique across all translations.
///
/// Partner columns compare literally: "no partner" equals "no partner".
/// An empty partner string counts as no partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TranslateKey<'a> {
    pub fromeditype: &'a str,
    pub frommessagetype: &'a str,
    pub alt: &'a str,
    pub frompartner: Option<&'a str>,
    pub topartner: Option<&'a str>,
}

impl Translate {
    pub fn new(fromeditype: impl Into<String>, frommessagetype: impl Into<String>) -> Self {
        Self {
            id: None,
            active: false,
            fromeditype: fromeditype.into(),
            frommessagetype: frommessagetype.into(),
            alt: String::new(),
            frompartner: None,
            topartner: None,
            tscript: String::new(),
            toeditype: String::new(),
            tomessagetype: String::new(),
            desc: None,
        }
    }

    pub fn binding_key(&self) -> TranslateKey<'_> {
        TranslateKey {
            fromeditype: &self.fromeditype,
            frommessagetype: &self.frommessagetype,
            alt: &self.alt,
            frompartner: present(self.frompartner.as_deref()),
            topartner: present(self.topartner.as_deref()),
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    if is_blank(value) {
        None
    } else {
        value
    }
}

impl StoredRecord for Translate {
    const KIND: RecordKind = RecordKind::Translate;
    const KEY_FIELDS: &'static [&'static str] = &[];

    fn identity(&self) -> Option<NaturalKey> {
        self.id.map(|id| vec![id.to_string()])
    }
}

impl Activatable for Translate {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
