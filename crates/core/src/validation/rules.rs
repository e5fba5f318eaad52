//! Violation and outcome types.

use serde::{Deserialize, Serialize};

use crate::records::{RecordKind, RuleType};
use crate::types::DbId;

/// Which invariant a candidate record broke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViolationKind {
    /// A partner group listed as member of another group.
    InvalidGroupMembership,
    /// A route reading from a channel without editype and messagetype.
    MissingEditypeForChannel,
    /// A confirm rule whose ruletype column is empty.
    MissingRequiredReference { ruletype: RuleType },
    /// Another translation already binds the same five-column key.
    DuplicateTranslateBinding {
        #[serde(skip_serializing_if = "Option::is_none")]
        existing_id: Option<DbId>,
    },
    /// Another record of the same kind already has this natural key.
    DuplicateKey { entity: RecordKind },
    /// A column-level constraint (length, range, e-mail format).
    InvalidField { code: String },
}

/// One violated rule, with the offending fields and operator-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub fields: Vec<String>,
    pub message: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, fields: &[&str], message: impl Into<String>) -> Self {
        Self {
            kind,
            fields: fields.iter().map(|f| f.to_string()).collect(),
            message: message.into(),
        }
    }
}

/// Result of validating one candidate record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidationOutcome {
    Accepted,
    Rejected { violations: Vec<Violation> },
}

impl ValidationOutcome {
    /// `Accepted` when `violations` is empty, `Rejected` otherwise.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            ValidationOutcome::Accepted
        } else {
            ValidationOutcome::Rejected { violations }
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationOutcome::Accepted => &[],
            ValidationOutcome::Rejected { violations } => violations,
        }
    }
}
