use super::types::Store;
use crate::models::{Availability, Candidate, Client, Requirements};

impl Store<Candidate> {
    /// Candidates listing a skill (case-insensitive, exact token)
    pub fn search_by_skill(&self, skill: &str) -> Vec<&Candidate> {
        self.iter().filter(|c| c.has_skill(skill)).collect()
    }

    pub fn search_by_availability(&self, availability: Availability) -> Vec<&Candidate> {
        self.iter()
            .filter(|c| c.availability == availability)
            .collect()
    }

    /// Candidates with at least `min_years` of experience
    pub fn search_by_experience(&self, min_years: f64) -> Vec<&Candidate> {
        self.iter()
            .filter(|c| c.years_experience >= min_years)
            .collect()
    }

    /// Candidates with the given availability that meet every requirement
    pub fn find_matches(
        &self,
        requirements: &Requirements,
        availability: Availability,
    ) -> Vec<&Candidate> {
        self.iter()
            .filter(|c| c.availability == availability && c.matches_requirements(requirements))
            .collect()
    }
}

impl Store<Client> {
    pub fn search_urgent(&self) -> Vec<&Client> {
        self.iter().filter(|c| c.urgent).collect()
    }

    pub fn search_by_client_type(&self, client_type: &str) -> Vec<&Client> {
        self.iter()
            .filter(|c| c.client_type == client_type)
            .collect()
    }

    /// Clients requiring a skill (case-insensitive, exact token)
    pub fn search_by_required_skill(&self, skill: &str) -> Vec<&Client> {
        self.iter().filter(|c| c.requires_skill(skill)).collect()
    }

    /// Clients whose location contains `location` (case-insensitive)
    pub fn search_by_location(&self, location: &str) -> Vec<&Client> {
        let needle = location.to_lowercase();
        self.iter()
            .filter(|c| {
                c.location()
                    .map(|l| l.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
            .collect()
    }
}
