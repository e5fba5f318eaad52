//! Cross-field rules per record type — pure logic, no store access.
//!
//! Each `validate_*` function applies exactly the rule of its record type.
//! Column-level checks and key uniqueness are layered on top by
//! [`super::validator::ConfigValidator`].

use super::rules::{ValidationOutcome, Violation, ViolationKind};
use crate::records::{is_blank, Confirmrule, Partner, Route, Translate};
use crate::types::DbId;

/// A partner group must not itself belong to a group.
pub fn validate_partner(candidate: &Partner) -> ValidationOutcome {
    ValidationOutcome::from_violations(check_group_membership(candidate).into_iter().collect())
}

/// A route reading from a channel needs both editype and messagetype.
pub fn validate_route(candidate: &Route) -> ValidationOutcome {
    ValidationOutcome::from_violations(check_channel_editype(candidate).into_iter().collect())
}

/// The reference column selected by `ruletype` must be filled in.
pub fn validate_confirmrule(candidate: &Confirmrule) -> ValidationOutcome {
    ValidationOutcome::from_violations(check_rule_reference(candidate).into_iter().collect())
}

/// The five-column binding key must be unique across `existing`.
///
/// A candidate without an id is being created and collides with any match.
/// A candidate with an id only collides with a record carrying another id.
pub fn validate_translate(candidate: &Translate, existing: &[Translate]) -> ValidationOutcome {
    ValidationOutcome::from_violations(
        check_translate_binding(candidate, candidate.id, existing)
            .into_iter()
            .collect(),
    )
}

pub(crate) fn check_group_membership(candidate: &Partner) -> Option<Violation> {
    if candidate.isgroup && !candidate.group.is_empty() {
        Some(Violation::new(
            ViolationKind::InvalidGroupMembership,
            &["isgroup", "group"],
            "A partner group cannot be a member of another group.",
        ))
    } else {
        None
    }
}

pub(crate) fn check_channel_editype(candidate: &Route) -> Option<Violation> {
    if !candidate.reads_from_channel() {
        return None;
    }
    let mut fields = vec!["fromchannel"];
    if candidate.fromeditype.is_empty() {
        fields.push("fromeditype");
    }
    if candidate.frommessagetype.is_empty() {
        fields.push("frommessagetype");
    }
    if fields.len() == 1 {
        return None;
    }
    Some(Violation::new(
        ViolationKind::MissingEditypeForChannel,
        &fields,
        "A route reading from an inbound channel requires both \"fromeditype\" and \
         \"frommessagetype\".",
    ))
}

pub(crate) fn check_rule_reference(candidate: &Confirmrule) -> Option<Violation> {
    let ruletype = candidate.ruletype;
    if !is_blank(candidate.reference(ruletype)) {
        return None;
    }
    let field = ruletype.reference_field();
    Some(Violation::new(
        ViolationKind::MissingRequiredReference { ruletype },
        &[field],
        format!("A confirm rule of ruletype \"{ruletype}\" requires \"{field}\"."),
    ))
}

/// First record in `existing` that the candidate's binding key collides with.
pub fn find_duplicate_binding<'a>(
    candidate: &Translate,
    existing: &'a [Translate],
) -> Option<&'a Translate> {
    find_binding_conflict(candidate, candidate.id, existing)
}

/// `own_id` is the stored record being edited; `None` means a create, where
/// any match counts whatever id the candidate carries.
pub(crate) fn find_binding_conflict<'a>(
    candidate: &Translate,
    own_id: Option<DbId>,
    existing: &'a [Translate],
) -> Option<&'a Translate> {
    let key = candidate.binding_key();
    existing
        .iter()
        .find(|other| other.binding_key() == key && (own_id.is_none() || other.id != own_id))
}

pub(crate) fn check_translate_binding(
    candidate: &Translate,
    own_id: Option<DbId>,
    existing: &[Translate],
) -> Option<Violation> {
    let duplicate = find_binding_conflict(candidate, own_id, existing)?;
    Some(Violation::new(
        ViolationKind::DuplicateTranslateBinding {
            existing_id: duplicate.id,
        },
        &["fromeditype", "frommessagetype", "alt", "frompartner", "topartner"],
        "A translation for this fromeditype, frommessagetype, alt, frompartner and topartner \
         already exists.",
    ))
}
