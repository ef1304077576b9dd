use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

use goldsmith_connect::config::{self, Config};
use goldsmith_connect::matching::{validate_search_options, Matcher, SearchOptions};
use goldsmith_connect::models::{Availability, Candidate, CandidateConfig, Client, ClientConfig};
use goldsmith_connect::output;
use goldsmith_connect::store::{self, CandidateStore, ClientStore, Record, Store};

const EXIT_SUCCESS: i32 = 0;
const EXIT_NOT_FOUND: i32 = 1;
const EXIT_CONFIG: i32 = 4;
const EXIT_DATA: i32 = 5;

#[derive(Args, Debug)]
struct MatchArgs {
    /// Minimum score (0-100) a match needs (overrides config, default 50)
    #[arg(long)]
    min_score: Option<f64>,

    /// Maximum number of matches to show (overrides config)
    #[arg(long)]
    limit: Option<usize>,
}

/// Parse a number that must not be negative (years, rates)
fn parse_non_negative(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("'{}' must be a non-negative number", s));
    }
    Ok(value)
}

#[derive(Args, Debug)]
struct AddCandidateArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    /// Skill, repeat for several (e.g. --skill soldering --skill "stone setting")
    #[arg(long = "skill")]
    skills: Vec<String>,
    /// Years of experience
    #[arg(long, default_value_t = 0.0, value_parser = parse_non_negative)]
    years: f64,
    /// Specialization, repeatable
    #[arg(long = "specialization")]
    specializations: Vec<String>,
    /// Certification, repeatable
    #[arg(long = "certification")]
    certifications: Vec<String>,
    #[arg(long)]
    portfolio_url: Option<String>,
    #[arg(long, default_value_t = Availability::Available)]
    availability: Availability,
    #[arg(long, value_parser = parse_non_negative)]
    hourly_rate: Option<f64>,
    /// Preferred location, repeatable
    #[arg(long = "location")]
    preferred_locations: Vec<String>,
}

impl AddCandidateArgs {
    fn into_candidate(self) -> Candidate {
        Candidate::new(CandidateConfig {
            name: self.name,
            email: self.email,
            phone: self.phone,
            skills: self.skills,
            years_experience: self.years,
            specializations: self.specializations,
            certifications: self.certifications,
            portfolio_url: self.portfolio_url,
            availability: self.availability,
            hourly_rate: self.hourly_rate,
            preferred_locations: self.preferred_locations,
            ..Default::default()
        })
    }
}

#[derive(Args, Debug)]
struct AddClientArgs {
    #[arg(long)]
    company: String,
    #[arg(long)]
    contact: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    /// Kind of business (e.g. jewelry_store, repair_shop)
    #[arg(long, default_value = "")]
    client_type: String,
    /// Required skill, repeatable
    #[arg(long = "skill")]
    required_skills: Vec<String>,
    /// Preferred specialization, repeatable
    #[arg(long = "specialization")]
    preferred_specializations: Vec<String>,
    #[arg(long)]
    location: Option<String>,
    /// Position type (e.g. full_time, contract, freelance)
    #[arg(long, default_value = "")]
    position_type: String,
    /// Minimum years of experience
    #[arg(long, default_value_t = 0.0, value_parser = parse_non_negative)]
    min_years: f64,
    #[arg(long)]
    urgent: bool,
}

impl AddClientArgs {
    fn into_client(self) -> Client {
        Client::new(ClientConfig {
            company_name: self.company,
            contact_name: self.contact,
            email: self.email,
            phone: self.phone,
            client_type: self.client_type,
            required_skills: self.required_skills,
            preferred_specializations: self.preferred_specializations,
            location: self.location,
            position_type: self.position_type,
            min_experience_years: self.min_years,
            urgent: self.urgent,
            ..Default::default()
        })
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List candidates, optionally filtered
    Candidates {
        /// Only candidates with this skill (case-insensitive)
        #[arg(long)]
        skill: Option<String>,
        /// Only candidates with at least this many years of experience
        #[arg(long)]
        min_experience: Option<f64>,
        /// Only candidates with this availability (available, placed, unavailable)
        #[arg(long)]
        availability: Option<Availability>,
    },
    /// List clients, optionally filtered
    Clients {
        /// Only urgent clients
        #[arg(long)]
        urgent: bool,
        /// Only clients requiring this skill (case-insensitive)
        #[arg(long)]
        skill: Option<String>,
        /// Only clients whose location contains this text
        #[arg(long)]
        location: Option<String>,
        /// Only clients of this type (exact, e.g. jewelry_store)
        #[arg(long)]
        client_type: Option<String>,
    },
    /// Rank available candidates for a client
    MatchClient {
        client_id: String,
        #[command(flatten)]
        options: MatchArgs,
    },
    /// Rank clients for a candidate (urgent clients first)
    MatchCandidate {
        candidate_id: String,
        #[command(flatten)]
        options: MatchArgs,
    },
    /// Show a detailed match report for one candidate and one client
    Report {
        candidate_id: String,
        client_id: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a candidate; prints the assigned ID
    AddCandidate(AddCandidateArgs),
    /// Add a client; prints the assigned ID
    AddClient(AddClientArgs),
    /// Remove a candidate by ID
    RemoveCandidate { id: String },
    /// Remove a client by ID
    RemoveClient { id: String },
    /// Write a starter config file
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "goldsmith-connect")]
#[command(about = "Match goldsmith candidates with hiring clients", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/goldsmith-connect/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Load a store snapshot or exit with the data error code
fn load_or_exit<T: Record>(path: &Path) -> Store<T> {
    match store::load_store(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Data error: {}", e);
            std::process::exit(EXIT_DATA);
        }
    }
}

fn save_or_exit<T: Record>(path: &Path, s: &Store<T>) {
    if let Err(e) = store::save_store(path, s) {
        eprintln!("Data error: {}", e);
        std::process::exit(EXIT_DATA);
    }
}

/// Keep only the entries of `base` that also appear in `other`
fn intersect<'a, T>(base: Vec<&'a T>, other: Vec<&'a T>) -> Vec<&'a T> {
    base.into_iter()
        .filter(|a| other.iter().any(|b| std::ptr::eq(*a, *b)))
        .collect()
}

/// Config defaults overridden by command-line flags, validated
fn effective_options(config: &Config, args: &MatchArgs) -> SearchOptions {
    let mut options = config.search_options();
    if let Some(min_score) = args.min_score {
        options.min_score = min_score;
    }
    if let Some(limit) = args.limit {
        options.limit = Some(limit);
    }

    if let Err(errors) = validate_search_options(&options) {
        eprintln!("Matching option errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    options
}

fn not_found(kind: &str, id: &str) -> ! {
    eprintln!("No {} with ID {}", kind, id);
    std::process::exit(EXIT_NOT_FOUND);
}

fn main() {
    let cli = Cli::parse();
    goldsmith_connect::logging::init_cli_logger(cli.verbose);
    let start_time = Instant::now();
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init = cli.command {
        match config::write_starter_config(config_path) {
            Ok(path) => {
                println!("Config written to {}", path.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let candidates_path = config.candidates_path();
    let clients_path = config.clients_path();
    tracing::debug!(
        candidates = %candidates_path.display(),
        clients = %clients_path.display(),
        "using data files"
    );

    let use_colors = output::should_use_colors();

    match cli.command {
        Commands::Candidates {
            skill,
            min_experience,
            availability,
        } => {
            let candidates: CandidateStore = load_or_exit(&candidates_path);
            let mut selected = candidates.list_all();
            if let Some(skill) = skill {
                selected = intersect(selected, candidates.search_by_skill(&skill));
            }
            if let Some(years) = min_experience {
                selected = intersect(selected, candidates.search_by_experience(years));
            }
            if let Some(availability) = availability {
                selected = intersect(selected, candidates.search_by_availability(availability));
            }
            println!("{}", output::format_candidate_list(&selected, use_colors));
        }
        Commands::Clients {
            urgent,
            skill,
            location,
            client_type,
        } => {
            let clients: ClientStore = load_or_exit(&clients_path);
            let mut selected = clients.list_all();
            if urgent {
                selected = intersect(selected, clients.search_urgent());
            }
            if let Some(skill) = skill {
                selected = intersect(selected, clients.search_by_required_skill(&skill));
            }
            if let Some(location) = location {
                selected = intersect(selected, clients.search_by_location(&location));
            }
            if let Some(client_type) = client_type {
                selected = intersect(selected, clients.search_by_client_type(&client_type));
            }
            println!("{}", output::format_client_list(&selected, use_colors));
        }
        Commands::MatchClient { client_id, options } => {
            let options = effective_options(&config, &options);
            let candidates: CandidateStore = load_or_exit(&candidates_path);
            let clients: ClientStore = load_or_exit(&clients_path);
            let client = clients
                .get(&client_id)
                .unwrap_or_else(|| not_found("client", &client_id));

            let matcher = Matcher::new(&candidates, &clients);
            let matches = matcher.find_candidates_for_client(client, &options);
            println!("{}", output::format_candidate_matches(&matches, use_colors));
        }
        Commands::MatchCandidate {
            candidate_id,
            options,
        } => {
            let options = effective_options(&config, &options);
            let candidates: CandidateStore = load_or_exit(&candidates_path);
            let clients: ClientStore = load_or_exit(&clients_path);
            let candidate = candidates
                .get(&candidate_id)
                .unwrap_or_else(|| not_found("candidate", &candidate_id));

            let matcher = Matcher::new(&candidates, &clients);
            let matches = matcher.find_clients_for_candidate(candidate, &options);
            println!("{}", output::format_client_matches(&matches, use_colors));
        }
        Commands::Report {
            candidate_id,
            client_id,
            json,
        } => {
            let candidates: CandidateStore = load_or_exit(&candidates_path);
            let clients: ClientStore = load_or_exit(&clients_path);
            let candidate = candidates
                .get(&candidate_id)
                .unwrap_or_else(|| not_found("candidate", &candidate_id));
            let client = clients
                .get(&client_id)
                .unwrap_or_else(|| not_found("client", &client_id));

            let report = Matcher::new(&candidates, &clients).get_match_report(candidate, client);
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("Failed to serialize report: {}", e);
                        std::process::exit(EXIT_DATA);
                    }
                }
            } else {
                println!("{}", output::format_report(&report, use_colors));
            }
        }
        Commands::AddCandidate(args) => {
            let mut candidates: CandidateStore = load_or_exit(&candidates_path);
            let id = candidates.insert(args.into_candidate());
            save_or_exit(&candidates_path, &candidates);
            println!("Added candidate {}", id);
        }
        Commands::AddClient(args) => {
            let mut clients: ClientStore = load_or_exit(&clients_path);
            let id = clients.insert(args.into_client());
            save_or_exit(&clients_path, &clients);
            println!("Added client {}", id);
        }
        Commands::RemoveCandidate { id } => {
            let mut candidates: CandidateStore = load_or_exit(&candidates_path);
            if !candidates.remove(&id) {
                not_found("candidate", &id);
            }
            save_or_exit(&candidates_path, &candidates);
            println!("Removed candidate {}", id);
        }
        Commands::RemoveClient { id } => {
            let mut clients: ClientStore = load_or_exit(&clients_path);
            if !clients.remove(&id) {
                not_found("client", &id);
            }
            save_or_exit(&clients_path, &clients);
            println!("Removed client {}", id);
        }
        Commands::Init => {} // handled before config load
    }

    tracing::debug!(elapsed = ?start_time.elapsed(), "done");
    std::process::exit(EXIT_SUCCESS);
}
