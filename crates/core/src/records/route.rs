//! Routes: how an inbound message is picked up, translated and forwarded.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{is_blank, RecordKind, StoredRecord};
use crate::activation::Activatable;
use crate::types::NaturalKey;

/// What a route does with the messages it reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranslateMode {
    Nothing,
    #[default]
    Translate,
    PassThrough,
}

/// One step of a route. `(idroute, seq)` is the natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Route {
    #[validate(length(min = 1, max = 35))]
    pub idroute: String,
    #[serde(default = "default_seq")]
    #[validate(range(min = 1))]
    pub seq: u32,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub fromchannel: Option<String>,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub fromeditype: String,
    #[serde(default)]
    #[validate(length(max = 35))]
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
    pub translateind: TranslateMode,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub tochannel: Option<String>,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub toeditype: String,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub tomessagetype: String,
}

fn default_seq() -> u32 {
    1
}

impl Route {
    pub fn new(idroute: impl Into<String>, seq: u32) -> Self {
        Self {
            idroute: idroute.into(),
            seq,
            active: false,
            fromchannel: None,
            fromeditype: String::new(),
            frommessagetype: String::new(),
            alt: String::new(),
            frompartner: None,
            topartner: None,
            translateind: TranslateMode::default(),
            tochannel: None,
            toeditype: String::new(),
            tomessagetype: String::new(),
        }
    }

    /// `true` when the route reads from an inbound channel.
    pub fn reads_from_channel(&self) -> bool {
        !is_blank(self.fromchannel.as_deref())
    }
}

impl StoredRecord for Route {
    const KIND: RecordKind = RecordKind::Route;
    const KEY_FIELDS: &'static [&'static str] = &["idroute", "seq"];

    fn identity(&self) -> Option<NaturalKey> {
        Some(vec![self.idroute.clone(), self.seq.to_string()])
    }
}

impl Activatable for Route {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
