//! Candidate/client matching for a goldsmith recruiting marketplace.
//!
//! Two [`store::Store`]s hold candidates and clients; [`matching::Matcher`]
//! scores and ranks them against each other.

pub mod config;
pub mod logging;
pub mod matching;
pub mod models;
pub mod output;
pub mod store;

pub use matching::{Matcher, MatchReport, Recommendation, SearchOptions};
pub use models::{Availability, Candidate, CandidateConfig, Client, ClientConfig, Requirements};
pub use store::{CandidateStore, ClientStore, Store, StoreError};
