use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::candidate::Requirements;
use super::timestamp::deserialize_created_at;

/// Named construction parameters for [`Client::new`].
///
/// Defaults: no required skills or preferred specializations, no location,
/// 0 years minimum experience, not urgent, `created_at` = now.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub client_type: String,
    pub required_skills: Vec<String>,
    pub preferred_specializations: Vec<String>,
    pub location: Option<String>,
    pub position_type: String,
    pub min_experience_years: f64,
    pub urgent: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub client_id: Option<String>,
}

/// A hiring requisition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(default)]
    pub client_id: Option<String>,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub client_type: String, // e.g. "jewelry_store", "repair_shop"
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_specializations: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub position_type: String, // e.g. "full_time", "contract", "freelance"
    #[serde(default)]
    pub min_experience_years: f64,
    #[serde(default)]
    pub urgent: bool,
    #[serde(default = "Utc::now", deserialize_with = "deserialize_created_at")]
    pub created_at: DateTime<Utc>,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client_id: config.client_id,
            company_name: config.company_name,
            contact_name: config.contact_name,
            email: config.email,
            phone: config.phone,
            client_type: config.client_type,
            required_skills: config.required_skills,
            preferred_specializations: config.preferred_specializations,
            location: config.location,
            position_type: config.position_type,
            min_experience_years: config.min_experience_years,
            urgent: config.urgent,
            created_at: config.created_at.unwrap_or_else(Utc::now),
        }
    }

    /// Location used for matching. An empty string counts as no location.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }

    /// Check if the client requires a skill (case-insensitive, exact token)
    pub fn requires_skill(&self, skill: &str) -> bool {
        super::contains_ignore_case(&self.required_skills, skill)
    }

    /// Requirements view of this client, treating preferred specializations as required
    pub fn requirements(&self) -> Requirements {
        Requirements {
            required_skills: self.required_skills.clone(),
            min_experience: self.min_experience_years,
            required_specializations: self.preferred_specializations.clone(),
        }
    }
}
