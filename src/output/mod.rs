pub mod formatter;

pub use formatter::{
    format_age, format_candidate_list, format_candidate_matches, format_client_list,
    format_client_matches, format_ranked_table, format_report, format_score, should_use_colors,
    RankedRow,
};
