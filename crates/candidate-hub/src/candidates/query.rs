//! Search and filter pipeline shared by the HTTP surface and the CLI preview.
//!
//! Every function here is pure: it reads a slice of candidates and returns the matching
//! subset as copies, keeping the input's relative order. Nothing in this module can fail;
//! filter values that make no sense (an inverted range, an unknown label) just match
//! nothing.

use serde::{Deserialize, Serialize};

use super::domain::Candidate;

/// Value callers send to leave the qualification or gender dimension unconstrained.
pub const ANY_SENTINEL: &str = "all";

pub const DEFAULT_MIN_EXPERIENCE: i64 = 0;
pub const DEFAULT_MAX_EXPERIENCE: i64 = 10;

/// Inclusive bounds on years of experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRange {
    pub min: i64,
    pub max: i64,
}

impl Default for ExperienceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_EXPERIENCE,
            max: DEFAULT_MAX_EXPERIENCE,
        }
    }
}

impl ExperienceRange {
    pub fn contains(&self, years: u8) -> bool {
        let years = i64::from(years);
        self.min <= years && years <= self.max
    }
}

/// Non-text constraints; an absent dimension constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    pub qualification: Option<String>,
    pub experience: Option<ExperienceRange>,
    pub skills: Vec<String>,
    pub gender: Option<String>,
}

/// Search text plus filter spec, as the browser table combines them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateQuery {
    pub search: String,
    pub filter: FilterSpec,
}

impl CandidateQuery {
    pub fn apply(&self, candidates: &[Candidate]) -> Vec<Candidate> {
        filter_candidates(candidates, &self.search, &self.filter)
    }
}

/// Raw query-string parameters for the filter and query endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterParams {
    pub q: Option<String>,
    pub qualification: Option<String>,
    pub min_experience: Option<String>,
    pub max_experience: Option<String>,
    pub skills: Option<String>,
    pub gender: Option<String>,
}

impl FilterParams {
    /// Collect parameters from decoded query pairs. Unknown keys are ignored and the
    /// first occurrence of a repeated key wins.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut params.q,
                "qualification" => &mut params.qualification,
                "minExperience" => &mut params.min_experience,
                "maxExperience" => &mut params.max_experience,
                "skills" => &mut params.skills,
                "gender" => &mut params.gender,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Experience bounds when at least one was supplied; unusable bounds fall back to
    /// the defaults.
    fn experience_range(&self) -> Option<ExperienceRange> {
        if self.min_experience.is_none() && self.max_experience.is_none() {
            return None;
        }

        Some(ExperienceRange {
            min: self
                .min_experience
                .as_deref()
                .and_then(parse_leading_int)
                .unwrap_or(DEFAULT_MIN_EXPERIENCE),
            max: self
                .max_experience
                .as_deref()
                .and_then(parse_leading_int)
                .unwrap_or(DEFAULT_MAX_EXPERIENCE),
        })
    }
}

impl FilterSpec {
    /// Build a spec for the filter endpoint. The experience range is always applied,
    /// with bounds that are missing or do not start with a number falling back to 0
    /// and 10; `skills` is comma separated.
    pub fn from_params(params: &FilterParams) -> Self {
        Self {
            experience: Some(params.experience_range().unwrap_or_default()),
            ..Self::without_default_range(params)
        }
    }

    /// Like [`FilterSpec::from_params`], but experience stays unconstrained unless a
    /// bound was supplied.
    pub fn without_default_range(params: &FilterParams) -> Self {
        let experience = params.experience_range();

        let skills = params
            .skills
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|skill| !skill.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            qualification: params.qualification.clone(),
            experience,
            skills,
            gender: params.gender.clone(),
        }
    }

    pub fn matches(&self, candidate: &Candidate) -> bool {
        matches_label(self.qualification.as_deref(), candidate.qualification.label())
            && self
                .experience
                .map_or(true, |range| range.contains(candidate.experience))
            && self.matches_skills(candidate)
            && matches_label(self.gender.as_deref(), candidate.gender.label())
    }

    /// A candidate passes when it holds any one of the requested skills.
    fn matches_skills(&self, candidate: &Candidate) -> bool {
        let mut requested = self
            .skills
            .iter()
            .map(|skill| skill.trim())
            .filter(|skill| !skill.is_empty())
            .peekable();

        if requested.peek().is_none() {
            return true;
        }
        requested.any(|skill| candidate.has_skill_labelled(skill))
    }
}

impl From<&FilterParams> for CandidateQuery {
    fn from(params: &FilterParams) -> Self {
        Self {
            search: params.q.clone().unwrap_or_default(),
            filter: FilterSpec::without_default_range(params),
        }
    }
}

/// Case-insensitive substring match on name, email, or phone.
pub fn matches_search(candidate: &Candidate, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }

    let needle = search.to_lowercase();
    [&candidate.name, &candidate.email, &candidate.phone]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn search_candidates(candidates: &[Candidate], search: &str) -> Vec<Candidate> {
    candidates
        .iter()
        .filter(|candidate| matches_search(candidate, search))
        .cloned()
        .collect()
}

/// Search first, then qualification, experience, skills, and gender. Order is preserved.
pub fn filter_candidates(
    candidates: &[Candidate],
    search: &str,
    filter: &FilterSpec,
) -> Vec<Candidate> {
    candidates
        .iter()
        .filter(|candidate| matches_search(candidate, search))
        .filter(|candidate| filter.matches(candidate))
        .cloned()
        .collect()
}

fn matches_label(wanted: Option<&str>, actual: &str) -> bool {
    match wanted.map(str::trim) {
        None => true,
        Some(value) if value.is_empty() || value.eq_ignore_ascii_case(ANY_SENTINEL) => true,
        Some(value) => value == actual,
    }
}

/// Integer prefix of `raw` (after leading whitespace), so "5", "5yrs", and "5.5" give 5.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}
