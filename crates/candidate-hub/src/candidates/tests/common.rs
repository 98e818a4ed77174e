use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::candidates::domain::{Candidate, CandidateId, Gender, Qualification, Skill};
use crate::candidates::seed::SeedProfile;
use crate::candidates::store::CandidateStore;
use crate::candidates::validation::CandidateDraft;
use crate::candidates::{candidate_router, DEFAULT_AVATAR};

pub(super) fn draft() -> CandidateDraft {
    CandidateDraft {
        name: Some("Priya Raman".to_string()),
        email: Some("priya@example.com".to_string()),
        phone: Some("+91 9876543210".to_string()),
        qualification: Some("Bachelor of Science (BSc)".to_string()),
        experience: Some(5),
        skills: Some(vec!["React".to_string(), "TypeScript".to_string()]),
        gender: Some("Female".to_string()),
        avatar: None,
    }
}

pub(super) fn invalid_draft() -> CandidateDraft {
    CandidateDraft {
        name: Some("P".to_string()),
        email: Some("priya-at-example".to_string()),
        phone: Some("12345".to_string()),
        qualification: Some("PhD".to_string()),
        experience: Some(51),
        skills: Some(Vec::new()),
        gender: Some("Unknown".to_string()),
        avatar: None,
    }
}

pub(super) fn sample_store() -> CandidateStore {
    SeedProfile::Sample
        .build_store()
        .expect("sample seed validates")
}

pub(super) fn showcase_store() -> CandidateStore {
    SeedProfile::Showcase
        .build_store()
        .expect("showcase seed validates")
}

pub(super) fn candidate(
    id: u64,
    name: &str,
    qualification: Qualification,
    experience: u8,
    skills: &[Skill],
    gender: Gender,
) -> Candidate {
    let slug = name.to_ascii_lowercase().replace(' ', ".");
    Candidate {
        id: CandidateId(id),
        name: name.to_string(),
        email: format!("{slug}@example.com"),
        phone: format!("+1 555 010 {id:04}"),
        qualification,
        experience,
        skills: skills.to_vec(),
        gender,
        avatar: DEFAULT_AVATAR.to_string(),
    }
}

pub(super) fn ids(candidates: &[Candidate]) -> Vec<u64> {
    candidates.iter().map(|candidate| candidate.id.0).collect()
}

pub(super) fn router_with(store: CandidateStore) -> (axum::Router, Arc<CandidateStore>) {
    let store = Arc::new(store);
    (candidate_router(store.clone()), store)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
