use std::fmt;
use std::str::FromStr;

use super::store::{CandidateStore, StoreError};
use super::validation::CandidateDraft;

/// Named data sets a store can be started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedProfile {
    /// The two records served by the REST mock.
    #[default]
    Sample,
    /// The four records shown by the browser table.
    Showcase,
    Empty,
}

impl SeedProfile {
    pub const fn label(self) -> &'static str {
        match self {
            SeedProfile::Sample => "sample",
            SeedProfile::Showcase => "showcase",
            SeedProfile::Empty => "empty",
        }
    }

    pub fn drafts(self) -> Vec<CandidateDraft> {
        match self {
            SeedProfile::Sample => vec![
                draft(
                    "JT",
                    "jt@gmail.com",
                    "+91 9789678979",
                    "Bachelor of Arts (BA)",
                    1,
                    &["Angular"],
                    "Male",
                    None,
                ),
                draft(
                    "John",
                    "john@gmail.com",
                    "+91 9789678978",
                    "Master of Commerce (MCom)",
                    1,
                    &["HTML"],
                    "Male",
                    None,
                ),
            ],
            SeedProfile::Showcase => vec![
                draft(
                    "John Thompson",
                    "john@example.com",
                    "+91 9789678979",
                    "Bachelor of Arts (BA)",
                    2,
                    &["Angular"],
                    "Male",
                    Some("https://randomuser.me/api/portraits/men/32.jpg"),
                ),
                draft(
                    "Sarah Johnson",
                    "sarah@example.com",
                    "+91 9789678978",
                    "Master of Commerce (MCom)",
                    1,
                    &["HTML"],
                    "Female",
                    Some("https://randomuser.me/api/portraits/women/44.jpg"),
                ),
                draft(
                    "Michael Chen",
                    "michael@example.com",
                    "+91 9789678977",
                    "Bachelor of Science (BSc)",
                    3,
                    &["React", "JavaScript"],
                    "Male",
                    Some("https://randomuser.me/api/portraits/men/22.jpg"),
                ),
                draft(
                    "Emily Davis",
                    "emily@example.com",
                    "+91 9789678976",
                    "Master of Business Administration (MBA)",
                    4,
                    &["Vue", "CSS"],
                    "Female",
                    Some("https://randomuser.me/api/portraits/women/28.jpg"),
                ),
            ],
            SeedProfile::Empty => Vec::new(),
        }
    }

    pub fn build_store(self) -> Result<CandidateStore, StoreError> {
        CandidateStore::seeded(self.drafts())
    }
}

impl fmt::Display for SeedProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSeedProfile(pub String);

impl fmt::Display for UnknownSeedProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown seed profile '{}' (expected sample, showcase, or empty)",
            self.0
        )
    }
}

impl std::error::Error for UnknownSeedProfile {}

impl FromStr for SeedProfile {
    type Err = UnknownSeedProfile;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sample" | "" => Ok(Self::Sample),
            "showcase" | "demo" => Ok(Self::Showcase),
            "empty" | "none" => Ok(Self::Empty),
            _ => Err(UnknownSeedProfile(value.to_string())),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draft(
    name: &str,
    email: &str,
    phone: &str,
    qualification: &str,
    experience: i64,
    skills: &[&str],
    gender: &str,
    avatar: Option<&str>,
) -> CandidateDraft {
    CandidateDraft {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        phone: Some(phone.to_string()),
        qualification: Some(qualification.to_string()),
        experience: Some(experience),
        skills: Some(skills.iter().map(|skill| skill.to_string()).collect()),
        gender: Some(gender.to_string()),
        avatar: avatar.map(str::to_string),
    }
}
