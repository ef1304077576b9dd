use std::cmp::Ordering;

use super::engine::calculate_match_score;
use super::options::SearchOptions;
use super::report::{build_match_report, MatchReport};
use crate::models::{Availability, Candidate, Client};
use crate::store::{CandidateStore, ClientStore};

/// Ranks candidates against clients and back. Reads both stores, never mutates them.
pub struct Matcher<'a> {
    candidates: &'a CandidateStore,
    clients: &'a ClientStore,
}

fn by_score_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

impl<'a> Matcher<'a> {
    pub fn new(candidates: &'a CandidateStore, clients: &'a ClientStore) -> Self {
        Self {
            candidates,
            clients,
        }
    }

    pub fn calculate_match_score(&self, candidate: &Candidate, client: &Client) -> f64 {
        calculate_match_score(candidate, client)
    }

    /// Best available candidates for a client, highest score first.
    ///
    /// Placed and unavailable candidates are never returned. Ties keep store order.
    pub fn find_candidates_for_client(
        &self,
        client: &Client,
        options: &SearchOptions,
    ) -> Vec<(&'a Candidate, f64)> {
        let mut matches: Vec<(&'a Candidate, f64)> = self
            .candidates
            .search_by_availability(Availability::Available)
            .into_iter()
            .map(|candidate| (candidate, calculate_match_score(candidate, client)))
            .filter(|(_, score)| *score >= options.min_score)
            .collect();

        matches.sort_by(|a, b| by_score_desc(a.1, b.1));
        options.truncate(&mut matches);

        tracing::debug!(
            client = client.client_id.as_deref().unwrap_or("-"),
            min_score = options.min_score,
            found = matches.len(),
            "ranked candidates for client"
        );
        matches
    }

    /// Best clients for a candidate. Urgent clients always rank above
    /// non-urgent ones; score orders within each group.
    pub fn find_clients_for_candidate(
        &self,
        candidate: &Candidate,
        options: &SearchOptions,
    ) -> Vec<(&'a Client, f64)> {
        let mut matches: Vec<(&'a Client, f64)> = self
            .clients
            .iter()
            .map(|client| (client, calculate_match_score(candidate, client)))
            .filter(|(_, score)| *score >= options.min_score)
            .collect();

        matches.sort_by(|a, b| {
            b.0.urgent
                .cmp(&a.0.urgent)
                .then_with(|| by_score_desc(a.1, b.1))
        });
        options.truncate(&mut matches);

        tracing::debug!(
            candidate = candidate.candidate_id.as_deref().unwrap_or("-"),
            min_score = options.min_score,
            found = matches.len(),
            "ranked clients for candidate"
        );
        matches
    }

    pub fn get_match_report(&self, candidate: &Candidate, client: &Client) -> MatchReport {
        build_match_report(candidate, client)
    }
}
