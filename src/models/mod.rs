pub mod candidate;
pub mod client;
pub mod timestamp;

pub use candidate::{Availability, Candidate, CandidateConfig, Requirements};
pub use client::{Client, ClientConfig};
pub use timestamp::parse_timestamp;

/// Case-insensitive exact membership (no substring matching)
pub(crate) fn contains_ignore_case(haystack: &[String], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    haystack.iter().any(|s| s.to_lowercase() == needle)
}
