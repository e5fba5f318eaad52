//! Read access to the stored record set, plus an in-memory implementation.

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::activation::{toggle_active, Activatable};
use crate::error::CoreError;
use crate::records::{
    Ccode, Ccodetrigger, Channel, ConfigRecord, Confirmrule, Partner, RecordKind, Route,
    StoredRecord, Translate,
};
use crate::types::{DbId, NaturalKey};
use crate::validation::keys::WriteMode;

/// Committed configuration records, one accessor per table.
///
/// Errors belong to the backing store and are handed back to the caller
/// unchanged by the validator.
pub trait RecordSource {
    type Error;

    fn partners(&self) -> Result<Vec<Partner>, Self::Error>;
    fn channels(&self) -> Result<Vec<Channel>, Self::Error>;
    fn routes(&self) -> Result<Vec<Route>, Self::Error>;
    fn confirmrules(&self) -> Result<Vec<Confirmrule>, Self::Error>;
    fn translates(&self) -> Result<Vec<Translate>, Self::Error>;
    fn ccodetriggers(&self) -> Result<Vec<Ccodetrigger>, Self::Error>;
    fn ccodes(&self) -> Result<Vec<Ccode>, Self::Error>;
}

/// Serializable content of a store, used for seeding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub partners: Vec<Partner>,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub confirmrules: Vec<Confirmrule>,
    #[serde(default)]
    pub translates: Vec<Translate>,
    #[serde(default)]
    pub ccodetriggers: Vec<Ccodetrigger>,
    #[serde(default)]
    pub ccodes: Vec<Ccode>,
}

/// Record set held in memory. Does not validate; callers run the
/// validator before [`InMemoryStore::commit`].
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    data: StoreSnapshot,
    next_id: DbId,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::from_snapshot(StoreSnapshot::default())
    }

    /// Build a store from seed data. Surrogate-keyed records without an id
    /// are numbered after the highest id present.
    pub fn from_snapshot(mut data: StoreSnapshot) -> Self {
        let max_id = data
            .translates
            .iter()
            .filter_map(|t| t.id)
            .chain(data.confirmrules.iter().filter_map(|c| c.id))
            .max()
            .unwrap_or(0);
        let mut next_id = max_id + 1;
        for id in data
            .translates
            .iter_mut()
            .map(|t| &mut t.id)
            .chain(data.confirmrules.iter_mut().map(|c| &mut c.id))
        {
            if id.is_none() {
                *id = Some(next_id);
                next_id += 1;
            }
        }
        Self { data, next_id }
    }

    /// Parse a JSON seed document.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let snapshot: StoreSnapshot = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid seed data: {e}")))?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn snapshot(&self) -> &StoreSnapshot {
        &self.data
    }

    /// All stored records of one kind.
    pub fn records_of(&self, kind: RecordKind) -> Vec<ConfigRecord> {
        let d = &self.data;
        match kind {
            RecordKind::Partner => d.partners.iter().cloned().map(ConfigRecord::Partner).collect(),
            RecordKind::Channel => d.channels.iter().cloned().map(ConfigRecord::Channel).collect(),
            RecordKind::Route => d.routes.iter().cloned().map(ConfigRecord::Route).collect(),
            RecordKind::Confirmrule => d
                .confirmrules
                .iter()
                .cloned()
                .map(ConfigRecord::Confirmrule)
                .collect(),
            RecordKind::Translate => d
                .translates
                .iter()
                .cloned()
                .map(ConfigRecord::Translate)
                .collect(),
            RecordKind::Ccodetrigger => d
                .ccodetriggers
                .iter()
                .cloned()
                .map(ConfigRecord::Ccodetrigger)
                .collect(),
            RecordKind::Ccode => d.ccodes.iter().cloned().map(ConfigRecord::Ccode).collect(),
        }
    }

    /// Insert or replace a record and return it as stored.
    ///
    /// On create, surrogate-keyed records get a fresh id. On update the
    /// record is located by its original natural key, or by id for
    /// surrogate-keyed records.
    pub fn commit(
        &mut self,
        record: ConfigRecord,
        mode: &WriteMode,
    ) -> Result<ConfigRecord, CoreError> {
        let next_id = &mut self.next_id;
        let d = &mut self.data;
        let stored = match record {
            ConfigRecord::Partner(r) => ConfigRecord::Partner(write(&mut d.partners, r, mode)?),
            ConfigRecord::Channel(r) => ConfigRecord::Channel(write(&mut d.channels, r, mode)?),
            ConfigRecord::Route(r) => ConfigRecord::Route(write(&mut d.routes, r, mode)?),
            ConfigRecord::Ccodetrigger(r) => {
                ConfigRecord::Ccodetrigger(write(&mut d.ccodetriggers, r, mode)?)
            }
            ConfigRecord::Ccode(r) => ConfigRecord::Ccode(write(&mut d.ccodes, r, mode)?),
            ConfigRecord::Confirmrule(mut r) => {
                if matches!(mode, WriteMode::Create) {
                    r.id = Some(take_id(next_id));
                }
                ConfigRecord::Confirmrule(write(&mut d.confirmrules, r, mode)?)
            }
            ConfigRecord::Translate(mut r) => {
                if matches!(mode, WriteMode::Create) {
                    r.id = Some(take_id(next_id));
                }
                ConfigRecord::Translate(write(&mut d.translates, r, mode)?)
            }
        };
        Ok(stored)
    }

    /// Flip `active` on the selected records of `kind`.
    ///
    /// Fails without changing anything when the kind has no `active` flag or
    /// any selected key is unknown.
    pub fn toggle_active(
        &mut self,
        kind: RecordKind,
        keys: &[NaturalKey],
    ) -> Result<usize, CoreError> {
        let d = &mut self.data;
        match kind {
            RecordKind::Partner => toggle_selected(&mut d.partners, keys),
            RecordKind::Route => toggle_selected(&mut d.routes, keys),
            RecordKind::Confirmrule => toggle_selected(&mut d.confirmrules, keys),
            RecordKind::Translate => toggle_selected(&mut d.translates, keys),
            RecordKind::Channel | RecordKind::Ccodetrigger | RecordKind::Ccode => Err(
                CoreError::Validation(format!("Records of kind {kind} cannot be (de)activated")),
            ),
        }
    }
}

fn take_id(next_id: &mut DbId) -> DbId {
    let id = *next_id;
    *next_id += 1;
    id
}

fn write<T: StoredRecord + Clone>(
    table: &mut Vec<T>,
    record: T,
    mode: &WriteMode,
) -> Result<T, CoreError> {
    match mode {
        WriteMode::Create => {
            table.push(record.clone());
            Ok(record)
        }
        WriteMode::Update { original_key } => {
            let target = if T::KEY_FIELDS.is_empty() {
                record.identity()
            } else {
                original_key.clone().or_else(|| record.identity())
            };
            let target = target.ok_or_else(|| {
                CoreError::Validation(format!("Updating a {} requires its id", T::KIND))
            })?;
            let slot = table
                .iter_mut()
                .find(|stored| stored.identity().as_ref() == Some(&target))
                .ok_or_else(|| CoreError::NotFound {
                    entity: T::KIND.as_str(),
                    key: target.join(", "),
                })?;
            *slot = record.clone();
            Ok(record)
        }
    }
}

fn toggle_selected<T: StoredRecord + Activatable>(
    table: &mut [T],
    keys: &[NaturalKey],
) -> Result<usize, CoreError> {
    if let Some(missing) = keys
        .iter()
        .find(|key| !table.iter().any(|r| r.identity().as_ref() == Some(*key)))
    {
        return Err(CoreError::NotFound {
            entity: T::KIND.as_str(),
            key: missing.join(", "),
        });
    }
    let selected = table
        .iter_mut()
        .filter(|r| r.identity().is_some_and(|id| keys.contains(&id)));
    Ok(toggle_active(selected))
}

impl RecordSource for InMemoryStore {
    type Error = Infallible;

    fn partners(&self) -> Result<Vec<Partner>, Self::Error> {
        Ok(self.data.partners.clone())
    }

    fn channels(&self) -> Result<Vec<Channel>, Self::Error> {
        Ok(self.data.channels.clone())
    }

    fn routes(&self) -> Result<Vec<Route>, Self::Error> {
        Ok(self.data.routes.clone())
    }

    fn confirmrules(&self) -> Result<Vec<Confirmrule>, Self::Error> {
        Ok(self.data.confirmrules.clone())
    }

    fn translates(&self) -> Result<Vec<Translate>, Self::Error> {
        Ok(self.data.translates.clone())
    }

    fn ccodetriggers(&self) -> Result<Vec<Ccodetrigger>, Self::Error> {
        Ok(self.data.ccodetriggers.clone())
    }

    fn ccodes(&self) -> Result<Vec<Ccode>, Self::Error> {
        Ok(self.data.ccodes.clone())
    }
}
