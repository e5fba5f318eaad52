//! Typed configuration records for EDI routing.
//!
//! One module per configuration table. Every record derives
//! [`validator::Validate`] for its column-level constraints; the cross-field
//! rules live in [`crate::validation`].

pub mod ccode;
pub mod channel;
pub mod confirmrule;
pub mod partner;
pub mod route;
pub mod translate;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::NaturalKey;

pub use ccode::{Ccode, Ccodetrigger};
pub use channel::{Channel, Direction};
pub use confirmrule::{ConfirmType, Confirmrule, RuleType};
pub use partner::Partner;
pub use route::{Route, TranslateMode};
pub use translate::{Translate, TranslateKey};

// ---------------------------------------------------------------------------
// Record kinds
// ---------------------------------------------------------------------------

/// The configuration tables known to the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Partner,
    Channel,
    Route,
    Confirmrule,
    Translate,
    Ccodetrigger,
    Ccode,
}

impl RecordKind {
    pub const ALL: [RecordKind; 7] = [
        RecordKind::Partner,
        RecordKind::Channel,
        RecordKind::Route,
        RecordKind::Confirmrule,
        RecordKind::Translate,
        RecordKind::Ccodetrigger,
        RecordKind::Ccode,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Partner => "partner",
            RecordKind::Channel => "channel",
            RecordKind::Route => "route",
            RecordKind::Confirmrule => "confirmrule",
            RecordKind::Translate => "translate",
            RecordKind::Ccodetrigger => "ccodetrigger",
            RecordKind::Ccode => "ccode",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown record kind '{s}'")))
    }
}

/// Common identity accessors for stored records.
pub trait StoredRecord {
    const KIND: RecordKind;

    /// Columns forming the natural key. Empty for records identified by a
    /// surrogate id, which never collide on key.
    const KEY_FIELDS: &'static [&'static str];

    /// Natural key, or the surrogate id as a one-element key. `None` for a
    /// surrogate-keyed record that has not been stored yet.
    fn identity(&self) -> Option<NaturalKey>;
}

/// `true` when an optional text column holds no value.
///
/// Absent and empty are the same thing for reference columns.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

// ---------------------------------------------------------------------------
// Tagged union
// ---------------------------------------------------------------------------

/// Any configuration record, tagged by `kind` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ConfigRecord {
    Partner(Partner),
    Channel(Channel),
    Route(Route),
    Confirmrule(Confirmrule),
    Translate(Translate),
    Ccodetrigger(Ccodetrigger),
    Ccode(Ccode),
}

impl ConfigRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            ConfigRecord::Partner(_) => RecordKind::Partner,
            ConfigRecord::Channel(_) => RecordKind::Channel,
            ConfigRecord::Route(_) => RecordKind::Route,
            ConfigRecord::Confirmrule(_) => RecordKind::Confirmrule,
            ConfigRecord::Translate(_) => RecordKind::Translate,
            ConfigRecord::Ccodetrigger(_) => RecordKind::Ccodetrigger,
            ConfigRecord::Ccode(_) => RecordKind::Ccode,
        }
    }

    pub fn identity(&self) -> Option<NaturalKey> {
        match self {
            ConfigRecord::Partner(r) => r.identity(),
            ConfigRecord::Channel(r) => r.identity(),
            ConfigRecord::Route(r) => r.identity(),
            ConfigRecord::Confirmrule(r) => r.identity(),
            ConfigRecord::Translate(r) => r.identity(),
            ConfigRecord::Ccodetrigger(r) => r.identity(),
            ConfigRecord::Ccode(r) => r.identity(),
        }
    }
}
