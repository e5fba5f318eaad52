//! Rules deciding when receipt of a message is confirmed.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{RecordKind, StoredRecord};
use crate::activation::Activatable;
use crate::types::{DbId, NaturalKey};

/// What a confirm rule is scoped by. Each variant owns one reference column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    Route,
    Channel,
    Frompartner,
    Topartner,
    Messagetype,
}

impl RuleType {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleType::Route => "route",
            RuleType::Channel => "channel",
            RuleType::Frompartner => "frompartner",
            RuleType::Topartner => "topartner",
            RuleType::Messagetype => "messagetype",
        }
    }

    /// Name of the reference column this rule type requires.
    pub fn reference_field(self) -> &'static str {
        match self {
            RuleType::Route => "idroute",
            RuleType::Channel => "idchannel",
            RuleType::Frompartner => "frompartner",
            RuleType::Topartner => "topartner",
            RuleType::Messagetype => "messagetype",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of acknowledgement a rule asks for or sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmType {
    #[serde(rename = "ask-email-MDN")]
    AskEmailMdn,
    #[serde(rename = "send-email-MDN")]
    SendEmailMdn,
    #[serde(rename = "ask-x12-997")]
    AskX12_997,
    #[serde(rename = "send-x12-997")]
    SendX12_997,
    #[serde(rename = "ask-edifact-CONTRL")]
    AskEdifactContrl,
    #[serde(rename = "send-edifact-CONTRL")]
    SendEdifactContrl,
}

/// A confirm rule. Only the reference column matching `ruletype` matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Confirmrule {
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub negativerule: bool,
    #[serde(default)]
    pub confirmtype: Option<ConfirmType>,
    pub ruletype: RuleType,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub idroute: Option<String>,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub idchannel: Option<String>,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub frompartner: Option<String>,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub topartner: Option<String>,
    #[serde(default)]
    #[validate(length(max = 35))]
    pub messagetype: Option<String>,
}

impl Confirmrule {
    pub fn new(ruletype: RuleType) -> Self {
        Self {
            id: None,
            active: false,
            negativerule: false,
            confirmtype: None,
            ruletype,
            idroute: None,
            idchannel: None,
            frompartner: None,
            topartner: None,
            messagetype: None,
        }
    }

    /// Value of the reference column belonging to `ruletype`.
    pub fn reference(&self, ruletype: RuleType) -> Option<&str> {
        match ruletype {
            RuleType::Route => self.idroute.as_deref(),
            RuleType::Channel => self.idchannel.as_deref(),
            RuleType::Frompartner => self.frompartner.as_deref(),
            RuleType::Topartner => self.topartner.as_deref(),
            RuleType::Messagetype => self.messagetype.as_deref(),
        }
    }
}

impl StoredRecord for Confirmrule {
    const KIND: RecordKind = RecordKind::Confirmrule;
    const KEY_FIELDS: &'static [&'static str] = &[];

    fn identity(&self) -> Option<NaturalKey> {
        self.id.map(|id| vec![id.to_string()])
    }
}

impl Activatable for Confirmrule {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reference_follows_ruletype() {
        let mut rule = Confirmrule::new(RuleType::Channel);
        rule.idchannel = Some("CH1".to_string());
        rule.frompartner = Some("ACME".to_string());
        assert_eq!(rule.reference(RuleType::Channel), Some("CH1"));
        assert_eq!(rule.reference(RuleType::Frompartner), Some("ACME"));
        assert_eq!(rule.reference(RuleType::Route), None);
    }

    #[test]
    fn confirmtype_uses_wire_names() {
        let rule: Confirmrule = serde_json::from_value(json!({
            "ruletype": "route",
            "idroute": "R1",
            "confirmtype": "ask-x12-997"
        }))
        .unwrap();
        assert_eq!(rule.confirmtype, Some(ConfirmType::AskX12_997));
    }
}
