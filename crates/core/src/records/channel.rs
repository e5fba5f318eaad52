//! Transport endpoints used by routes.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{RecordKind, StoredRecord};
use crate::types::NaturalKey;

/// Whether a channel receives or sends messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
}

/// A configured transport endpoint (mailbox, ftp account, directory, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Channel {
    #[validate(length(min = 1, max = 35))]
    pub idchannel: String,
    pub inorout: Direction,
    #[serde(rename = "type", default)]
    #[validate(length(max = 35))]
    pub channel_type: String,
    #[serde(default)]
    #[validate(length(max = 256))]
    pub host: Option<String>,
    #[serde(default)]
    #[validate(length(max = 256))]
    pub path: Option<String>,
}

impl StoredRecord for Channel {
    const KIND: RecordKind = RecordKind::Channel;
    const KEY_FIELDS: &'static [&'static str] = &["idchannel"];

    fn identity(&self) -> Option<NaturalKey> {
        Some(vec![self.idchannel.clone()])
    }
}
