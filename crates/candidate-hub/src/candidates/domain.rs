use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder image served when a candidate is stored without an avatar.
pub const DEFAULT_AVATAR: &str = "/placeholder.svg?height=40&width=40";

/// Upper bound (inclusive) for years of experience accepted by validation.
pub const MAX_EXPERIENCE: u8 = 50;

/// Identifier assigned by the store when a candidate is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub u64);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Highest degree held by a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Qualification {
    #[serde(rename = "Bachelor of Arts (BA)")]
    BachelorOfArts,
    #[serde(rename = "Bachelor of Science (BSc)")]
    BachelorOfScience,
    #[serde(rename = "Master of Commerce (MCom)")]
    MasterOfCommerce,
    #[serde(rename = "Master of Business Administration (MBA)")]
    MasterOfBusinessAdministration,
}

impl Qualification {
    pub const ALL: [Qualification; 4] = [
        Qualification::BachelorOfArts,
        Qualification::BachelorOfScience,
        Qualification::MasterOfCommerce,
        Qualification::MasterOfBusinessAdministration,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Qualification::BachelorOfArts => "Bachelor of Arts (BA)",
            Qualification::BachelorOfScience => "Bachelor of Science (BSc)",
            Qualification::MasterOfCommerce => "Master of Commerce (MCom)",
            Qualification::MasterOfBusinessAdministration => {
                "Master of Business Administration (MBA)"
            }
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|value| value.label() == label)
    }
}

/// Technology a candidate has listed on their profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Angular,
    React,
    Vue,
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "CSS")]
    Css,
    JavaScript,
    TypeScript,
}

impl Skill {
    pub const ALL: [Skill; 7] = [
        Skill::Angular,
        Skill::React,
        Skill::Vue,
        Skill::Html,
        Skill::Css,
        Skill::JavaScript,
        Skill::TypeScript,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Skill::Angular => "Angular",
            Skill::React => "React",
            Skill::Vue => "Vue",
            Skill::Html => "HTML",
            Skill::Css => "CSS",
            Skill::JavaScript => "JavaScript",
            Skill::TypeScript => "TypeScript",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|value| value.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub const fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|value| value.label() == label)
    }
}

/// Authoritative candidate record as held by the store.
///
/// Values handed out by the store or the query engine are copies; mutating one has no
/// effect on stored state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub qualification: Qualification,
    pub experience: u8,
    pub skills: Vec<Skill>,
    pub gender: Gender,
    pub avatar: String,
}

impl Candidate {
    pub fn has_skill_labelled(&self, label: &str) -> bool {
        self.skills.iter().any(|skill| skill.label() == label)
    }
}
