//! Candidate records: domain model, validation, the in-memory store, the search and
//! filter engine, and the HTTP routes over them.

pub mod domain;
pub mod query;
pub mod router;
pub mod seed;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Candidate, CandidateId, Gender, Qualification, Skill, DEFAULT_AVATAR, MAX_EXPERIENCE,
};
pub use query::{
    filter_candidates, search_candidates, CandidateQuery, ExperienceRange, FilterParams,
    FilterSpec,
};
pub use router::candidate_router;
pub use seed::{SeedProfile, UnknownSeedProfile};
pub use store::{CandidateStore, StoreError};
pub use validation::{CandidateDraft, CandidateFields, FieldViolation, ValidationError};
