use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::contains_ignore_case;
use super::timestamp::deserialize_created_at;

/// Placement status of a candidate. Only `Available` candidates are offered to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[default]
    Available,
    Placed,
    Unavailable,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Placed => "placed",
            Availability::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(Availability::Available),
            "placed" => Ok(Availability::Placed),
            "unavailable" => Ok(Availability::Unavailable),
            other => Err(format!(
                "unknown availability '{}' (expected available, placed or unavailable)",
                other
            )),
        }
    }
}

/// Job requirements a candidate can be checked against.
///
/// Empty lists are vacuously satisfied; `min_experience` of 0 accepts everyone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Requirements {
    pub required_skills: Vec<String>,
    pub min_experience: f64,
    pub required_specializations: Vec<String>,
}

/// Named construction parameters for [`Candidate::new`].
///
/// Defaults: no skills, specializations, certifications or locations,
/// 0 years of experience, `Available`, no portfolio or rate, `created_at` = now.
#[derive(Debug, Clone, Default)]
pub struct CandidateConfig {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub years_experience: f64,
    pub specializations: Vec<String>,
    pub certifications: Vec<String>,
    pub portfolio_url: Option<String>,
    pub availability: Availability,
    pub hourly_rate: Option<f64>,
    pub preferred_locations: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub candidate_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub candidate_id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub years_experience: f64,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>, // informational, never scored
    #[serde(default)]
    pub portfolio_url: Option<String>,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    #[serde(default = "Utc::now", deserialize_with = "deserialize_created_at")]
    pub created_at: DateTime<Utc>,
}

impl Candidate {
    pub fn new(config: CandidateConfig) -> Self {
        Self {
            candidate_id: config.candidate_id,
            name: config.name,
            email: config.email,
            phone: config.phone,
            skills: config.skills,
            years_experience: config.years_experience,
            specializations: config.specializations,
            certifications: config.certifications,
            portfolio_url: config.portfolio_url,
            availability: config.availability,
            hourly_rate: config.hourly_rate,
            preferred_locations: config.preferred_locations,
            created_at: config.created_at.unwrap_or_else(Utc::now),
        }
    }

    /// Check if the candidate lists a skill (case-insensitive, exact token)
    pub fn has_skill(&self, skill: &str) -> bool {
        contains_ignore_case(&self.skills, skill)
    }

    /// Check if the candidate lists a specialization (case-insensitive, exact token)
    pub fn has_specialization(&self, specialization: &str) -> bool {
        contains_ignore_case(&self.specializations, specialization)
    }

    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    /// Check that every requirement is met: all skills, enough experience, all specializations
    pub fn matches_requirements(&self, requirements: &Requirements) -> bool {
        requirements
            .required_skills
            .iter()
            .all(|skill| self.has_skill(skill))
            && self.years_experience >= requirements.min_experience
            && requirements
                .required_specializations
                .iter()
                .all(|spec| self.has_specialization(spec))
    }
}
