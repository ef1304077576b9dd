use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Candidate, Client};

/// An entity that can live in a [`Store`].
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Prefix of generated IDs, e.g. "CAND" for "CAND-0001"
    const ID_PREFIX: &'static str;
    /// Field name holding the records in a persisted snapshot
    const COLLECTION: &'static str;

    fn id(&self) -> Option<&str>;
    fn assign_id(&mut self, id: String);
}

impl Record for Candidate {
    const ID_PREFIX: &'static str = "CAND";
    const COLLECTION: &'static str = "candidates";

    fn id(&self) -> Option<&str> {
        self.candidate_id.as_deref()
    }

    fn assign_id(&mut self, id: String) {
        self.candidate_id = Some(id);
    }
}

impl Record for Client {
    const ID_PREFIX: &'static str = "CLI";
    const COLLECTION: &'static str = "clients";

    fn id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    fn assign_id(&mut self, id: String) {
        self.client_id = Some(id);
    }
}

/// In-memory keyed collection with generated sequential IDs.
///
/// Records iterate in ID order. The store does no locking; callers sharing
/// it across threads must serialize access themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Store<T: Record> {
    records: BTreeMap<String, T>,
    next_id: u64,
}

pub type CandidateStore = Store<Candidate>;
pub type ClientStore = Store<Client>;

impl<T: Record> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Store<T> {
    /// Create an empty store whose first generated ID ends in 0001
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Rebuild a store from persisted parts
    pub(crate) fn from_parts(records: BTreeMap<String, T>, next_id: u64) -> Self {
        Self { records, next_id }
    }

    /// Insert a record, assigning the next sequential ID if it has none.
    ///
    /// A record that already carries an ID keeps it and leaves the counter
    /// alone; any existing record under that ID is replaced.
    pub fn insert(&mut self, mut record: T) -> String {
        let id = match record.id() {
            Some(id) => id.to_string(),
            None => {
                let id = self.generate_id();
                record.assign_id(id.clone());
                id
            }
        };
        tracing::debug!(id = %id, collection = T::COLLECTION, "inserted record");
        self.records.insert(id.clone(), record);
        id
    }

    /// Generated IDs skip over any ID already taken by an explicitly keyed record
    fn generate_id(&mut self) -> String {
        loop {
            let id = format!("{}-{:04}", T::ID_PREFIX, self.next_id);
            self.next_id += 1;
            if !self.records.contains_key(&id) {
                return id;
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.records.get_mut(id)
    }

    /// Remove a record. Returns true if it existed.
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.records.remove(id).is_some();
        if removed {
            tracing::debug!(id = %id, collection = T::COLLECTION, "removed record");
        }
        removed
    }

    pub fn list_all(&self) -> Vec<&T> {
        self.records.values().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Counter value the next generated ID will use
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub(crate) fn records(&self) -> &BTreeMap<String, T> {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CandidateConfig, ClientConfig};

    fn candidate(name: &str) -> Candidate {
        Candidate::new(CandidateConfig {
            name: name.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_new_store_empty() {
        let store: CandidateStore = Store::new();
        assert_eq!(store.count(), 0);
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut store = CandidateStore::new();
        assert_eq!(store.insert(candidate("Emily")), "CAND-0001");
        assert_eq!(store.insert(candidate("Marcus")), "CAND-0002");
        assert_eq!(store.next_id(), 3);
        assert_eq!(
            store.get("CAND-0001").unwrap().candidate_id.as_deref(),
            Some("CAND-0001")
        );
    }

    #[test]
    fn test_client_ids_use_client_prefix() {
        let mut store = ClientStore::new();
        let id = store.insert(Client::new(ClientConfig::default()));
        assert_eq!(id, "CLI-0001");
    }

    #[test]
    fn test_insert_with_existing_id_keeps_counter() {
        let mut store = CandidateStore::new();
        let mut record = candidate("Sofia");
        record.candidate_id = Some("CAND-0042".to_string());

        assert_eq!(store.insert(record), "CAND-0042");
        assert_eq!(store.next_id(), 1);
        assert_eq!(store.insert(candidate("David")), "CAND-0001");
        assert_eq!(store.next_id(), 2);
    }

    #[test]
    fn test_reinsert_is_idempotent_on_id() {
        let mut store = CandidateStore::new();
        let id = store.insert(candidate("Emily"));
        let mut stored = store.get(&id).unwrap().clone();
        stored.years_experience = 9.0;

        assert_eq!(store.insert(stored), id);
        assert_eq!(store.count(), 1);
        assert_eq!(store.next_id(), 2);
        assert_eq!(store.get(&id).unwrap().years_experience, 9.0);
    }

    #[test]
    fn test_generated_id_skips_taken_id() {
        let mut store = CandidateStore::new();
        let mut record = candidate("Sofia");
        record.candidate_id = Some("CAND-0001".to_string());
        store.insert(record);

        assert_eq!(store.insert(candidate("David")), "CAND-0002");
        assert_eq!(store.count(), 2);
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = CandidateStore::new();
        assert!(store.get("CAND-9999").is_none());
    }

    #[test]
    fn test_get_mut_allows_edits() {
        let mut store = CandidateStore::new();
        let id = store.insert(candidate("Emily"));
        store.get_mut(&id).unwrap().skills.push("engraving".to_string());
        assert!(store.get(&id).unwrap().has_skill("engraving"));
    }

    #[test]
    fn test_remove() {
        let mut store = CandidateStore::new();
        let id = store.insert(candidate("Emily"));
        assert!(store.remove(&id));
        assert!(!store.remove(&id));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut store = CandidateStore::new();
        let first = store.insert(candidate("Emily"));
        store.remove(&first);
        assert_eq!(store.insert(candidate("Marcus")), "CAND-0002");
    }

    #[test]
    fn test_list_all_follows_id_order() {
        let mut store = CandidateStore::new();
        store.insert(candidate("Emily"));
        store.insert(candidate("Marcus"));
        store.insert(candidate("Sofia"));

        let names: Vec<&str> = store.list_all().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Emily", "Marcus", "Sofia"]);
    }
}
