pub mod engine;
pub mod options;
pub mod report;
pub mod search;

pub use engine::{calculate_match_score, score_match, Category, CategoryScore, ScoreResult};
pub use options::{validate_search_options, SearchOptions, DEFAULT_MIN_SCORE};
pub use report::{build_match_report, MatchReport, Recommendation};
pub use search::Matcher;
