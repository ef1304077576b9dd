use chrono::{Duration, Utc};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::matching::{MatchReport, Recommendation};
use crate::models::{Availability, Candidate, Client};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a 0-100 match score with one decimal, e.g. "72.5"
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Format a duration into a human-readable age string
/// "2h" for hours, "3d" for days, "1w" for weeks
pub fn format_age(duration: Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else if hours >= 1 {
        format!("{}h", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m", minutes)
        } else {
            "now".to_string()
        }
    }
}

fn format_years(years: f64) -> String {
    if years.fract() == 0.0 {
        format!("{:.0}y", years)
    } else {
        format!("{:.1}y", years)
    }
}

/// Format candidates as one line per candidate
/// Format: "{id} | {name} | {experience} | {availability} | {skills} | added {age}"
pub fn format_candidate_list(candidates: &[&Candidate], use_colors: bool) -> String {
    if candidates.is_empty() {
        return "No candidates found.".to_string();
    }

    candidates
        .iter()
        .map(|c| {
            let id = c.candidate_id.as_deref().unwrap_or("-");
            let years = format_years(c.years_experience);
            let skills = c.skills.join(", ");
            let age = format_age(Utc::now() - c.created_at);
            if use_colors {
                let availability = match c.availability {
                    Availability::Available => c.availability.green().to_string(),
                    Availability::Placed => c.availability.yellow().to_string(),
                    Availability::Unavailable => c.availability.red().to_string(),
                };
                format!(
                    "{} | {} | {} | {} | {} | added {}",
                    id.dimmed(),
                    c.name.bold(),
                    years,
                    availability,
                    skills.cyan(),
                    age
                )
            } else {
                format!(
                    "{} | {} | {} | {} | {} | added {}",
                    id, c.name, years, c.availability, skills, age
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format clients as one line per client
/// Format: "{id} | {company} | {location} | {position_type} | min {years}[ | URGENT]"
pub fn format_client_list(clients: &[&Client], use_colors: bool) -> String {
    if clients.is_empty() {
        return "No clients found.".to_string();
    }

    clients
        .iter()
        .map(|c| {
            let id = c.client_id.as_deref().unwrap_or("-");
            let location = c.location().unwrap_or("anywhere");
            let years = format_years(c.min_experience_years);
            let line = if use_colors {
                format!(
                    "{} | {} | {} | {} | min {}",
                    id.dimmed(),
                    c.company_name.bold(),
                    location.cyan(),
                    c.position_type,
                    years
                )
            } else {
                format!(
                    "{} | {} | {} | {} | min {}",
                    id, c.company_name, location, c.position_type, years
                )
            };
            match (c.urgent, use_colors) {
                (true, true) => format!("{} | {}", line, "URGENT".red().bold()),
                (true, false) => format!("{} | URGENT", line),
                (false, _) => line,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One row of a ranked match table
pub struct RankedRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub score: f64,
    pub urgent: bool,
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format ranked matches as a table with columns: Index, Score, Name, ID
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column: 5 chars (fits "100.0"), right-aligned
/// Urgent rows are marked with a trailing "!"
pub fn format_ranked_table(rows: &[RankedRow], empty_message: &str, use_colors: bool) -> String {
    if rows.is_empty() {
        return empty_message.to_string();
    }

    let term_width = get_terminal_width();
    let index_width = 3;
    let score_width = 5;
    let separator = "  ";

    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>width$}", format_score(row.score), width = score_width);
            let marker = if row.urgent { " !" } else { "" };

            let fixed_width =
                index_width + 1 + score_width + separator.len() * 2 + row.id.len() + marker.len();
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_name(row.name, width - fixed_width),
                Some(_) => truncate_name(row.name, 20),
                None => row.name.to_string(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    name,
                    separator,
                    row.id.underline(),
                    marker.red().bold()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}",
                    index_str, score_padded, separator, name, separator, row.id, marker
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_candidate_matches(matches: &[(&Candidate, f64)], use_colors: bool) -> String {
    let rows: Vec<RankedRow> = matches
        .iter()
        .map(|(c, score)| RankedRow {
            id: c.candidate_id.as_deref().unwrap_or("-"),
            name: &c.name,
            score: *score,
            urgent: false,
        })
        .collect();
    format_ranked_table(&rows, "No matching candidates found.", use_colors)
}

pub fn format_client_matches(matches: &[(&Client, f64)], use_colors: bool) -> String {
    let rows: Vec<RankedRow> = matches
        .iter()
        .map(|(c, score)| RankedRow {
            id: c.client_id.as_deref().unwrap_or("-"),
            name: &c.company_name,
            score: *score,
            urgent: c.urgent,
        })
        .collect();
    format_ranked_table(&rows, "No matching clients found.", use_colors)
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

/// Format a match report with detailed multi-line output
pub fn format_report(report: &MatchReport, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let candidate = format!(
        "{} ({})",
        report.candidate_name,
        report.candidate_id.as_deref().unwrap_or("-")
    );
    let client = format!(
        "{} ({})",
        report.client_name,
        report.client_id.as_deref().unwrap_or("-")
    );
    let score = format!("{}%", report.overall_score);

    if use_colors {
        let recommendation = match report.recommendation {
            Recommendation::Strong => report.recommendation.green().bold().to_string(),
            Recommendation::Good => report.recommendation.green().to_string(),
            Recommendation::Possible => report.recommendation.yellow().to_string(),
            Recommendation::Weak => report.recommendation.red().to_string(),
        };
        lines.push(format!("Candidate: {}", candidate.bold()));
        lines.push(format!("Client: {}", client.bold()));
        lines.push(format!("Overall Score: {}", score.bold()));
        lines.push(format!("Recommendation: {}", recommendation));
    } else {
        lines.push(format!("Candidate: {}", candidate));
        lines.push(format!("Client: {}", client));
        lines.push(format!("Overall Score: {}", score));
        lines.push(format!("Recommendation: {}", report.recommendation));
    }

    lines.push(String::new());
    lines.push(format!("Skills Met: {}", join_or_none(&report.skills_met)));
    if !report.skills_missing.is_empty() {
        lines.push(format!("Skills Missing: {}", report.skills_missing.join(", ")));
    }
    lines.push(format!(
        "Experience: {} years (requires {}) -> {}",
        report.candidate_experience,
        report.experience_requirement,
        if report.experience_met { "met" } else { "not met" }
    ));
    lines.push(format!(
        "Matching Specializations: {}",
        join_or_none(&report.specializations_matched)
    ));

    lines.push(String::new());
    lines.push("Breakdown:".to_string());
    for category in &report.breakdown {
        lines.push(format!(
            "  {:<16}{:>5} / {:<3} {}",
            category.category.label(),
            format_score(category.points),
            category.max_points,
            category.description
        ));
    }

    lines.join("\n")
}
