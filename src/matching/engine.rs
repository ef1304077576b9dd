use serde::Serialize;

use crate::models::{Candidate, Client};

pub const SKILLS_MAX: f64 = 40.0;
pub const EXPERIENCE_MAX: f64 = 30.0;
pub const SPECIALIZATIONS_MAX: f64 = 20.0;
pub const LOCATION_MAX: f64 = 10.0;
pub const MAX_SCORE: f64 = 100.0;

/// Points awarded per year ratio when experience is compared to the minimum
const EXPERIENCE_POINTS_PER_RATIO: f64 = 15.0;
const EXPERIENCE_RATIO_CAP: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Skills,
    Experience,
    Specializations,
    Location,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Skills => "Skills",
            Category::Experience => "Experience",
            Category::Specializations => "Specializations",
            Category::Location => "Location",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub points: f64,
    pub max_points: f64,
    pub description: String, // e.g. "1/2 required skills", "no location preference"
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub score: f64,
    pub breakdown: Vec<CategoryScore>,
}

impl ScoreResult {
    pub fn points_for(&self, category: Category) -> f64 {
        self.breakdown
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.points)
            .unwrap_or(0.0)
    }
}

/// Score a candidate against a client on a 0-100 scale with a per-category breakdown.
///
/// Categories without a stated requirement award full points, except the
/// experience category, whose sub-minimum branch only credits a positive minimum.
pub fn score_match(candidate: &Candidate, client: &Client) -> ScoreResult {
    let breakdown = vec![
        skills_score(candidate, client),
        experience_score(candidate, client),
        specializations_score(candidate, client),
        location_score(candidate, client),
    ];

    let total: f64 = breakdown.iter().map(|c| c.points).sum();

    // Each category is already capped, so this only guards rounding drift
    ScoreResult {
        score: total.min(MAX_SCORE),
        breakdown,
    }
}

/// Score a candidate against a client on a 0-100 scale
pub fn calculate_match_score(candidate: &Candidate, client: &Client) -> f64 {
    score_match(candidate, client).score
}

fn skills_score(candidate: &Candidate, client: &Client) -> CategoryScore {
    let (points, description) = if client.required_skills.is_empty() {
        (SKILLS_MAX, "no required skills".to_string())
    } else {
        let matched = client
            .required_skills
            .iter()
            .filter(|skill| candidate.has_skill(skill))
            .count();
        let total = client.required_skills.len();
        (
            matched as f64 / total as f64 * SKILLS_MAX,
            format!("{}/{} required skills", matched, total),
        )
    };

    CategoryScore {
        category: Category::Skills,
        points: points.max(0.0),
        max_points: SKILLS_MAX,
        description,
    }
}

fn experience_score(candidate: &Candidate, client: &Client) -> CategoryScore {
    let years = candidate.years_experience;
    let required = client.min_experience_years;

    let points = if years >= required {
        let ratio = (years / required.max(1.0)).min(EXPERIENCE_RATIO_CAP);
        (ratio * EXPERIENCE_POINTS_PER_RATIO).min(EXPERIENCE_MAX)
    } else if required > 0.0 {
        // Partial credit, always below the floor of the met branch
        years / required * EXPERIENCE_POINTS_PER_RATIO
    } else {
        0.0
    };

    CategoryScore {
        category: Category::Experience,
        points: points.max(0.0),
        max_points: EXPERIENCE_MAX,
        description: format!("{} years vs {} required", years, required),
    }
}

fn specializations_score(candidate: &Candidate, client: &Client) -> CategoryScore {
    let (points, description) = if client.preferred_specializations.is_empty() {
        (SPECIALIZATIONS_MAX, "no preferred specializations".to_string())
    } else {
        let matched = client
            .preferred_specializations
            .iter()
            .filter(|spec| candidate.has_specialization(spec))
            .count();
        let total = client.preferred_specializations.len();
        (
            matched as f64 / total as f64 * SPECIALIZATIONS_MAX,
            format!("{}/{} preferred specializations", matched, total),
        )
    };

    CategoryScore {
        category: Category::Specializations,
        points: points.max(0.0),
        max_points: SPECIALIZATIONS_MAX,
        description,
    }
}

/// The client location must appear inside one of the candidate's preferred
/// locations; the reverse direction does not count.
fn location_score(candidate: &Candidate, client: &Client) -> CategoryScore {
    let (points, description) = match client.location() {
        Some(location) if !candidate.preferred_locations.is_empty() => {
            let needle = location.to_lowercase();
            let matched = candidate
                .preferred_locations
                .iter()
                .any(|l| l.to_lowercase().contains(&needle));
            if matched {
                (LOCATION_MAX, format!("prefers {}", location))
            } else {
                (0.0, format!("does not list {}", location))
            }
        }
        Some(_) => (LOCATION_MAX, "candidate has no location preference".to_string()),
        None => (LOCATION_MAX, "client has no location".to_string()),
    };

    CategoryScore {
        category: Category::Location,
        points,
        max_points: LOCATION_MAX,
        description,
    }
}
