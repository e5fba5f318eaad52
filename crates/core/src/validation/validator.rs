//! Combined entry point: column checks, the record's rule, key uniqueness.

use validator::Validate;

use super::evaluator::{
    check_channel_editype, check_group_membership, check_rule_reference, check_translate_binding,
};
use super::fields::field_violations;
use super::keys::{check_unique_key, WriteMode};
use super::rules::{ValidationOutcome, Violation};
use crate::records::{ConfigRecord, StoredRecord};
use crate::store::RecordSource;

/// Validates any [`ConfigRecord`] against a read-only record set.
///
/// Every independent violation is reported; nothing short-circuits. Reading
/// the record set happens once per call, so one call sees one snapshot.
pub struct ConfigValidator<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S: RecordSource + ?Sized> ConfigValidator<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Validate `record` as a create or update.
    ///
    /// Errors from the record source are returned as they are.
    pub fn validate(
        &self,
        record: &ConfigRecord,
        mode: &WriteMode,
    ) -> Result<ValidationOutcome, S::Error> {
        let violations = match record {
            ConfigRecord::Partner(r) => {
                let mut v = field_violations(r);
                v.extend(check_group_membership(r));
                v.extend(check_unique_key(r, &self.source.partners()?, mode));
                v
            }
            ConfigRecord::Channel(r) => keyed(r, &self.source.channels()?, mode),
            ConfigRecord::Route(r) => {
                let mut v = field_violations(r);
                v.extend(check_channel_editype(r));
                v.extend(check_unique_key(r, &self.source.routes()?, mode));
                v
            }
            ConfigRecord::Confirmrule(r) => {
                let mut v = field_violations(r);
                v.extend(check_rule_reference(r));
                v
            }
            ConfigRecord::Translate(r) => {
                let mut v = field_violations(r);
                let own_id = match mode {
                    WriteMode::Create => None,
                    WriteMode::Update { .. } => r.id,
                };
                v.extend(check_translate_binding(r, own_id, &self.source.translates()?));
                v
            }
            ConfigRecord::Ccodetrigger(r) => keyed(r, &self.source.ccodetriggers()?, mode),
            ConfigRecord::Ccode(r) => keyed(r, &self.source.ccodes()?, mode),
        };
        Ok(ValidationOutcome::from_violations(violations))
    }
}

/// Records with no cross-field rule: column checks and key uniqueness only.
fn keyed<T: Validate + StoredRecord>(
    record: &T,
    existing: &[T],
    mode: &WriteMode,
) -> Vec<Violation> {
    let mut v = field_violations(record);
    v.extend(check_unique_key(record, existing, mode));
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{
        Ccode, Ccodetrigger, Channel, Confirmrule, Direction, Partner, RecordKind, Route,
        RuleType, Translate,
    };
    use crate::store::{InMemoryStore, StoreSnapshot};
    use crate::validation::rules::ViolationKind;
    use assert_matches::assert_matches;

    /// A record source whose backing store is unreachable.
    struct Unreachable;

    #[derive(Debug, PartialEq)]
    struct StoreDown(&'static str);

    impl RecordSource for Unreachable {
        type Error = StoreDown;

        fn partners(&self) -> Result<Vec<Partner>, StoreDown> {
            Err(StoreDown("partners"))
        }
        fn channels(&self) -> Result<Vec<Channel>, StoreDown> {
            Err(StoreDown("channels"))
        }
        fn routes(&self) -> Result<Vec<Route>, StoreDown> {
            Err(StoreDown("routes"))
        }
        fn confirmrules(&self) -> Result<Vec<Confirmrule>, StoreDown> {
            Err(StoreDown("confirmrules"))
        }
        fn translates(&self) -> Result<Vec<Translate>, StoreDown> {
            Err(StoreDown("translates"))
        }
        fn ccodetriggers(&self) -> Result<Vec<Ccodetrigger>, StoreDown> {
            Err(StoreDown("ccodetriggers"))
        }
        fn ccodes(&self) -> Result<Vec<Ccode>, StoreDown> {
            Err(StoreDown("ccodes"))
        }
    }

    fn seeded() -> InMemoryStore {
        let mut existing = Translate::new("EDIFACT", "ORDERS");
        existing.id = Some(1);
        existing.frompartner = Some("A".to_string());
        existing.topartner = Some("B".to_string());
        InMemoryStore::from_snapshot(StoreSnapshot {
            partners: vec![Partner::new("ACME"), Partner::new("EUGROUP")],
            channels: vec![Channel {
                idchannel: "CH1".to_string(),
                inorout: Direction::In,
                channel_type: "file".to_string(),
                host: None,
                path: Some("/data/in".to_string()),
            }],
            routes: vec![Route::new("R1", 1)],
            translates: vec![existing],
            ..Default::default()
        })
    }

    fn kinds(outcome: &ValidationOutcome) -> Vec<ViolationKind> {
        outcome.violations().iter().map(|v| v.kind.clone()).collect()
    }

    #[test]
    fn reports_all_independent_violations() {
        let store = seeded();
        let mut partner = Partner::new("ACME");
        partner.isgroup = true;
        partner.group.insert("EUGROUP".to_string());
        partner.mail = Some("broken".to_string());

        let outcome = ConfigValidator::new(&store)
            .validate(&ConfigRecord::Partner(partner), &WriteMode::Create)
            .unwrap();

        assert_eq!(
            kinds(&outcome),
            vec![
                ViolationKind::InvalidField {
                    code: "email".to_string()
                },
                ViolationKind::InvalidGroupMembership,
                ViolationKind::DuplicateKey {
                    entity: RecordKind::Partner
                },
            ]
        );
    }

    #[test]
    fn editing_partner_in_place_is_accepted() {
        let store = seeded();
        let mode = WriteMode::Update { original_key: None };
        let outcome = ConfigValidator::new(&store)
            .validate(&ConfigRecord::Partner(Partner::new("ACME")), &mode)
            .unwrap();
        assert!(outcome.is_accepted());
    }

    #[test]
    fn route_rule_and_key_are_both_checked() {
        let store = seeded();
        let mut route = Route::new("R1", 1);
        route.fromchannel = Some("CH1".to_string());
        route.frommessagetype = "ORDERS".to_string();

        let outcome = ConfigValidator::new(&store)
            .validate(&ConfigRecord::Route(route), &WriteMode::Create)
            .unwrap();

        assert_eq!(
            kinds(&outcome),
            vec![
                ViolationKind::MissingEditypeForChannel,
                ViolationKind::DuplicateKey {
                    entity: RecordKind::Route
                },
            ]
        );
    }

    #[test]
    fn confirmrule_reference_is_checked() {
        let store = seeded();
        let mut rule = Confirmrule::new(RuleType::Messagetype);
        rule.messagetype = Some(String::new());
        let outcome = ConfigValidator::new(&store)
            .validate(&ConfigRecord::Confirmrule(rule), &WriteMode::Create)
            .unwrap();
        assert_eq!(
            kinds(&outcome),
            vec![ViolationKind::MissingRequiredReference {
                ruletype: RuleType::Messagetype
            }]
        );
    }

    #[test]
    fn duplicate_translate_binding_is_rejected() {
        let store = seeded();
        let mut candidate = Translate::new("EDIFACT", "ORDERS");
        candidate.frompartner = Some("A".to_string());
        candidate.topartner = Some("B".to_string());
        let outcome = ConfigValidator::new(&store)
            .validate(&ConfigRecord::Translate(candidate), &WriteMode::Create)
            .unwrap();
        assert_eq!(
            kinds(&outcome),
            vec![ViolationKind::DuplicateTranslateBinding {
                existing_id: Some(1)
            }]
        );
    }

    #[test]
    fn create_carrying_an_existing_id_still_collides() {
        let store = seeded();
        let mut candidate = Translate::new("EDIFACT", "ORDERS");
        candidate.id = Some(1);
        candidate.frompartner = Some("A".to_string());
        candidate.topartner = Some("B".to_string());
        let outcome = ConfigValidator::new(&store)
            .validate(&ConfigRecord::Translate(candidate), &WriteMode::Create)
            .unwrap();
        assert_eq!(
            kinds(&outcome),
            vec![ViolationKind::DuplicateTranslateBinding {
                existing_id: Some(1)
            }]
        );
    }

    #[test]
    fn translate_update_skips_its_own_row() {
        let store = seeded();
        let mut candidate = Translate::new("EDIFACT", "ORDERS");
        candidate.id = Some(1);
        candidate.frompartner = Some("A".to_string());
        candidate.topartner = Some("B".to_string());
        candidate.tscript = "orders_v2".to_string();
        let outcome = ConfigValidator::new(&store)
            .validate(
                &ConfigRecord::Translate(candidate),
                &WriteMode::Update { original_key: None },
            )
            .unwrap();
        assert!(outcome.is_accepted());
    }

    #[test]
    fn new_channel_is_accepted() {
        let store = seeded();
        let channel = Channel {
            idchannel: "CH2".to_string(),
            inorout: Direction::Out,
            channel_type: "smtp".to_string(),
            host: Some("mail.example.com".to_string()),
            path: None,
        };
        let outcome = ConfigValidator::new(&store)
            .validate(&ConfigRecord::Channel(channel), &WriteMode::Create)
            .unwrap();
        assert!(outcome.is_accepted());
    }

    #[test]
    fn source_errors_propagate_unchanged() {
        let result = ConfigValidator::new(&Unreachable).validate(
            &ConfigRecord::Translate(Translate::new("EDIFACT", "ORDERS")),
            &WriteMode::Create,
        );
        assert_eq!(result, Err(StoreDown("translates")));
    }

    #[test]
    fn confirmrule_needs_no_store_access() {
        let mut rule = Confirmrule::new(RuleType::Route);
        rule.idroute = Some("R1".to_string());
        let result = ConfigValidator::new(&Unreachable)
            .validate(&ConfigRecord::Confirmrule(rule), &WriteMode::Create);
        assert_matches!(result, Ok(ValidationOutcome::Accepted));
    }
}
