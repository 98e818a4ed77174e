use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use super::domain::{Candidate, CandidateId};
use super::validation::{CandidateDraft, CandidateFields, ValidationError};

/// Error raised by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("candidate {0} not found")]
    NotFound(CandidateId),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug)]
struct StoreState {
    records: Vec<Candidate>,
    next_id: u64,
}

/// Authoritative in-memory collection of candidates.
///
/// Ids come from a counter that only moves forward, so an id freed by `delete` is never
/// handed out again. Reads share the lock; every mutation holds it exclusively.
#[derive(Debug)]
pub struct CandidateStore {
    state: RwLock<StoreState>,
}

impl Default for CandidateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Build a store by creating each draft in order.
    pub fn seeded<I>(drafts: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = CandidateDraft>,
    {
        let store = Self::new();
        for draft in drafts {
            store.create(draft)?;
        }
        Ok(store)
    }

    /// Build a store from records that already carry ids. The counter resumes after the
    /// highest id present.
    pub fn from_records(records: Vec<Candidate>) -> Self {
        let next_id = records
            .iter()
            .map(|candidate| candidate.id.0)
            .max()
            .map_or(1, |max| max + 1);
        Self {
            state: RwLock::new(StoreState { records, next_id }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().records.is_empty()
    }

    /// All candidates in insertion order.
    pub fn list(&self) -> Vec<Candidate> {
        self.read().records.clone()
    }

    pub fn get(&self, id: CandidateId) -> Result<Candidate, StoreError> {
        self.read()
            .records
            .iter()
            .find(|candidate| candidate.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    pub fn create(&self, draft: CandidateDraft) -> Result<Candidate, StoreError> {
        let fields = draft.validate().inspect_err(|err| {
            debug!(violations = ?err.fields(), "rejected candidate create");
        })?;

        let mut state = self.write();
        let id = CandidateId(state.next_id);
        state.next_id += 1;

        let candidate = assemble(id, fields);
        state.records.push(candidate.clone());
        info!(%id, name = %candidate.name, "candidate created");
        Ok(candidate)
    }

    /// Apply `draft` as a partial update; unspecified fields keep their stored values.
    pub fn update(&self, id: CandidateId, draft: CandidateDraft) -> Result<Candidate, StoreError> {
        let mut state = self.write();
        let slot = state
            .records
            .iter_mut()
            .find(|candidate| candidate.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let fields = draft.merged_over(slot).validate().inspect_err(|err| {
            debug!(%id, violations = ?err.fields(), "rejected candidate update");
        })?;

        *slot = assemble(id, fields);
        info!(%id, "candidate updated");
        Ok(slot.clone())
    }

    pub fn delete(&self, id: CandidateId) -> Result<Candidate, StoreError> {
        let mut state = self.write();
        let position = state
            .records
            .iter()
            .position(|candidate| candidate.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let removed = state.records.remove(position);
        info!(%id, "candidate deleted");
        Ok(removed)
    }
}

fn assemble(id: CandidateId, fields: CandidateFields) -> Candidate {
    let CandidateFields {
        name,
        email,
        phone,
        qualification,
        experience,
        skills,
        gender,
        avatar,
    } = fields;

    Candidate {
        id,
        name,
        email,
        phone,
        qualification,
        experience,
        skills,
        gender,
        avatar,
    }
}
