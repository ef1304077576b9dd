use serde::Serialize;
use std::fmt;

use super::engine::{score_match, CategoryScore};
use crate::models::{Candidate, Client};

/// Verdict derived from a match score. Thresholds are inclusive lower bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    #[serde(rename = "Strong match")]
    Strong,
    #[serde(rename = "Good match")]
    Good,
    #[serde(rename = "Possible match")]
    Possible,
    #[serde(rename = "Weak match")]
    Weak,
}

impl Recommendation {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Recommendation::Strong
        } else if score >= 60.0 {
            Recommendation::Good
        } else if score >= 40.0 {
            Recommendation::Possible
        } else {
            Recommendation::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Strong => "Strong match",
            Recommendation::Good => "Good match",
            Recommendation::Possible => "Possible match",
            Recommendation::Weak => "Weak match",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub candidate_id: Option<String>,
    pub candidate_name: String,
    pub client_id: Option<String>,
    pub client_name: String,
    pub overall_score: f64, // rounded to 2 decimals
    pub skills_met: Vec<String>,
    pub skills_missing: Vec<String>,
    pub specializations_matched: Vec<String>,
    pub experience_requirement: f64,
    pub candidate_experience: f64,
    pub experience_met: bool,
    pub breakdown: Vec<CategoryScore>,
    pub recommendation: Recommendation,
}

/// Build a detailed report for one candidate/client pair. The score is recomputed.
pub fn build_match_report(candidate: &Candidate, client: &Client) -> MatchReport {
    let result = score_match(candidate, client);

    let (skills_met, skills_missing): (Vec<String>, Vec<String>) = client
        .required_skills
        .iter()
        .cloned()
        .partition(|skill| candidate.has_skill(skill));

    let specializations_matched = client
        .preferred_specializations
        .iter()
        .filter(|spec| candidate.has_specialization(spec))
        .cloned()
        .collect();

    MatchReport {
        candidate_id: candidate.candidate_id.clone(),
        candidate_name: candidate.name.clone(),
        client_id: client.client_id.clone(),
        client_name: client.company_name.clone(),
        overall_score: (result.score * 100.0).round() / 100.0,
        skills_met,
        skills_missing,
        specializations_matched,
        experience_requirement: client.min_experience_years,
        candidate_experience: candidate.years_experience,
        experience_met: candidate.years_experience >= client.min_experience_years,
        recommendation: Recommendation::from_score(result.score),
        breakdown: result.breakdown,
    }
}
