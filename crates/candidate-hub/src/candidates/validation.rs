use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::{Candidate, Gender, Qualification, Skill, DEFAULT_AVATAR, MAX_EXPERIENCE};

const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_DIGITS: usize = 10;

/// Inbound candidate payload for create and update requests.
///
/// Fields stay loosely typed so that every rule can be checked and reported together
/// instead of the body failing to parse on the first bad value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub qualification: Option<String>,
    #[serde(deserialize_with = "deserialize_experience")]
    pub experience: Option<i64>,
    pub skills: Option<Vec<String>>,
    pub gender: Option<String>,
    pub avatar: Option<String>,
}

/// Field values that passed validation, ready to be stored under an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub qualification: Qualification,
    pub experience: u8,
    pub skills: Vec<Skill>,
    pub gender: Gender,
    pub avatar: String,
}

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Every constraint a draft failed, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "candidate failed validation")?;
        for (index, violation) in self.violations.iter().enumerate() {
            let separator = if index == 0 { ": " } else { "; " };
            write!(f, "{separator}{} {}", violation.field, violation.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(|violation| violation.field).collect()
    }
}

/// Collects violations while a draft is checked field by field.
#[derive(Default)]
struct Violations(Vec<FieldViolation>);

impl Violations {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    fn required<'a, T>(&mut self, field: &'static str, value: &'a Option<T>) -> Option<&'a T> {
        if value.is_none() {
            self.push(field, "is required");
        }
        value.as_ref()
    }
}

impl CandidateDraft {
    /// Draft carrying every current value of `candidate`.
    pub fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            name: Some(candidate.name.clone()),
            email: Some(candidate.email.clone()),
            phone: Some(candidate.phone.clone()),
            qualification: Some(candidate.qualification.label().to_string()),
            experience: Some(i64::from(candidate.experience)),
            skills: Some(
                candidate
                    .skills
                    .iter()
                    .map(|skill| skill.label().to_string())
                    .collect(),
            ),
            gender: Some(candidate.gender.label().to_string()),
            avatar: Some(candidate.avatar.clone()),
        }
    }

    /// Treat `self` as a partial update: absent fields keep the candidate's current values.
    pub fn merged_over(self, candidate: &Candidate) -> Self {
        let current = Self::from_candidate(candidate);
        Self {
            name: self.name.or(current.name),
            email: self.email.or(current.email),
            phone: self.phone.or(current.phone),
            qualification: self.qualification.or(current.qualification),
            experience: self.experience.or(current.experience),
            skills: self.skills.or(current.skills),
            gender: self.gender.or(current.gender),
            avatar: self.avatar.or(current.avatar),
        }
    }

    pub fn validate(&self) -> Result<CandidateFields, ValidationError> {
        let mut violations = Violations::default();

        let name = violations.required("name", &self.name).and_then(|raw| {
            let trimmed = raw.trim();
            if trimmed.chars().count() < MIN_NAME_CHARS {
                violations.push("name", "must be at least 2 characters");
                None
            } else {
                Some(trimmed.to_string())
            }
        });

        let email = violations.required("email", &self.email).and_then(|raw| {
            let trimmed = raw.trim();
            if is_well_formed_email(trimmed) {
                Some(trimmed.to_string())
            } else {
                violations.push("email", "must be a valid email address");
                None
            }
        });

        let phone = violations.required("phone", &self.phone).and_then(|raw| {
            let trimmed = raw.trim();
            if is_plausible_phone(trimmed) {
                Some(trimmed.to_string())
            } else {
                violations.push("phone", "must contain at least 10 digits");
                None
            }
        });

        let qualification = violations
            .required("qualification", &self.qualification)
            .and_then(|raw| {
                let parsed = Qualification::from_label(raw.trim());
                if parsed.is_none() {
                    violations.push(
                        "qualification",
                        format!("'{raw}' is not a known qualification"),
                    );
                }
                parsed
            });

        let experience = violations
            .required("experience", &self.experience)
            .and_then(|raw| match u8::try_from(*raw) {
                Ok(years) if years <= MAX_EXPERIENCE => Some(years),
                _ => {
                    violations.push(
                        "experience",
                        format!("must be between 0 and {MAX_EXPERIENCE}"),
                    );
                    None
                }
            });

        let skills = violations.required("skills", &self.skills).and_then(|raw| {
            let mut parsed: Vec<Skill> = Vec::with_capacity(raw.len());
            let mut unknown = Vec::new();
            for label in raw {
                match Skill::from_label(label.trim()) {
                    Some(skill) if !parsed.contains(&skill) => parsed.push(skill),
                    Some(_) => {}
                    None => unknown.push(label.as_str()),
                }
            }

            if !unknown.is_empty() {
                violations.push("skills", format!("unknown skills: {}", unknown.join(", ")));
                None
            } else if parsed.is_empty() {
                violations.push("skills", "at least one skill is required");
                None
            } else {
                Some(parsed)
            }
        });

        let gender = violations.required("gender", &self.gender).and_then(|raw| {
            let parsed = Gender::from_label(raw.trim());
            if parsed.is_none() {
                violations.push("gender", format!("'{raw}' is not a known gender"));
            }
            parsed
        });

        let avatar = match self.avatar.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => DEFAULT_AVATAR.to_string(),
        };

        match (name, email, phone, qualification, experience, skills, gender) {
            (
                Some(name),
                Some(email),
                Some(phone),
                Some(qualification),
                Some(experience),
                Some(skills),
                Some(gender),
            ) if violations.0.is_empty() => Ok(CandidateFields {
                name,
                email,
                phone,
                qualification,
                experience,
                skills,
                gender,
                avatar,
            }),
            _ => Err(ValidationError {
                violations: violations.0,
            }),
        }
    }
}

/// Experience as sent by form clients: an integer, a whole-number float such as `3.0`,
/// or a numeric string such as `"3"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawExperience {
    Integer(i64),
    Float(f64),
    Text(String),
}

fn deserialize_experience<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<RawExperience>::deserialize(deserializer)?;
    raw.map(|value| match value {
        RawExperience::Integer(years) => Ok(years),
        RawExperience::Float(years) => whole_years(years),
        RawExperience::Text(text) => {
            let trimmed = text.trim();
            match trimmed.parse::<i64>() {
                Ok(years) => Ok(years),
                Err(_) => trimmed
                    .parse::<f64>()
                    .map_err(|_| format!("experience '{text}' is not a number"))
                    .and_then(whole_years),
            }
        }
    })
    .transpose()
    .map_err(serde::de::Error::custom)
}

fn whole_years(years: f64) -> Result<i64, String> {
    if years.is_finite() && years.fract() == 0.0 && years.abs() <= i64::MAX as f64 {
        Ok(years as i64)
    } else {
        Err(format!("experience {years} is not a whole number"))
    }
}

fn is_well_formed_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

fn is_plausible_phone(value: &str) -> bool {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.');
    value.chars().all(allowed) && value.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}
