use goldsmith_connect::matching::Recommendation;
use goldsmith_connect::store::{load_store, save_store};
use goldsmith_connect::{
    Availability, Candidate, CandidateConfig, CandidateStore, Client, ClientConfig, ClientStore,
    Matcher, SearchOptions,
};
use tempfile::TempDir;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn populate_candidates() -> CandidateStore {
    let mut store = CandidateStore::new();
    let records = [
        (
            "Emily Chen",
            &["soldering", "stone setting", "engraving", "CAD design"][..],
            8.0,
            &["engagement rings", "custom design"][..],
            &["New York, NY", "Brooklyn, NY"][..],
        ),
        (
            "Marcus Johnson",
            &["casting", "finishing", "polishing", "wax carving"][..],
            5.0,
            &["manufacturing", "production"][..],
            &["Los Angeles, CA"][..],
        ),
        (
            "Sofia Rodriguez",
            &["antique restoration", "repair", "stone setting", "engraving"][..],
            12.0,
            &["antique restoration", "vintage pieces"][..],
            &["Boston, MA", "Providence, RI"][..],
        ),
        (
            "David Kim",
            &["3D printing", "CAD design", "prototyping", "soldering"][..],
            3.0,
            &["modern design", "rapid prototyping"][..],
            &["San Francisco, CA", "San Jose, CA"][..],
        ),
    ];

    for (name, skills, years, specs, locations) in records {
        store.insert(Candidate::new(CandidateConfig {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: "555-0100".to_string(),
            skills: strings(skills),
            years_experience: years,
            specializations: strings(specs),
            preferred_locations: strings(locations),
            ..Default::default()
        }));
    }
    store
}

fn populate_clients() -> ClientStore {
    let mut store = ClientStore::new();
    store.insert(Client::new(ClientConfig {
        company_name: "Elegant Jewelers".to_string(),
        contact_name: "Sarah Miller".to_string(),
        email: "sarah@elegantjewelers.com".to_string(),
        phone: "555-2001".to_string(),
        client_type: "jewelry_store".to_string(),
        required_skills: strings(&["stone setting", "engraving", "repair"]),
        preferred_specializations: strings(&["custom design"]),
        location: Some("New York, NY".to_string()),
        position_type: "full_time".to_string(),
        min_experience_years: 5.0,
        urgent: false,
        ..Default::default()
    }));
    store.insert(Client::new(ClientConfig {
        company_name: "Heritage Restorations".to_string(),
        contact_name: "Robert Thompson".to_string(),
        email: "robert@heritagerest.com".to_string(),
        phone: "555-2002".to_string(),
        client_type: "repair_shop".to_string(),
        required_skills: strings(&["antique restoration", "repair", "stone setting"]),
        preferred_specializations: strings(&["antique restoration", "vintage pieces"]),
        location: Some("Boston, MA".to_string()),
        position_type: "contract".to_string(),
        min_experience_years: 8.0,
        urgent: true,
        ..Default::default()
    }));
    store.insert(Client::new(ClientConfig {
        company_name: "ModernLux Designs".to_string(),
        contact_name: "Jennifer Lee".to_string(),
        email: "jennifer@modernlux.com".to_string(),
        phone: "555-2003".to_string(),
        client_type: "independent_designer".to_string(),
        required_skills: strings(&["CAD design", "3D printing", "prototyping"]),
        preferred_specializations: strings(&["modern design"]),
        location: Some("San Francisco, CA".to_string()),
        position_type: "freelance".to_string(),
        min_experience_years: 2.0,
        urgent: false,
        ..Default::default()
    }));
    store
}

#[test]
fn test_ids_assigned_in_insertion_order() {
    let candidates = populate_candidates();
    let clients = populate_clients();

    assert_eq!(candidates.count(), 4);
    assert_eq!(clients.count(), 3);
    assert_eq!(candidates.get("CAND-0003").unwrap().name, "Sofia Rodriguez");
    assert_eq!(clients.get("CLI-0002").unwrap().company_name, "Heritage Restorations");
}

#[test]
fn test_candidates_for_heritage_restorations() {
    let candidates = populate_candidates();
    let clients = populate_clients();
    let matcher = Matcher::new(&candidates, &clients);
    let heritage = clients.get("CLI-0002").unwrap();

    let matches = matcher.find_candidates_for_client(heritage, &SearchOptions::default());

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].0.name, "Sofia Rodriguez");
    assert_eq!(matches[0].1, 92.5);
}

#[test]
fn test_placed_candidate_drops_out_of_results() {
    let mut candidates = populate_candidates();
    candidates.get_mut("CAND-0003").unwrap().availability = Availability::Placed;
    let clients = populate_clients();
    let matcher = Matcher::new(&candidates, &clients);
    let heritage = clients.get("CLI-0002").unwrap();

    let matches = matcher.find_candidates_for_client(heritage, &SearchOptions::default());
    assert!(matches.is_empty());
}

#[test]
fn test_opportunities_for_emily() {
    let candidates = populate_candidates();
    let clients = populate_clients();
    let matcher = Matcher::new(&candidates, &clients);
    let emily = candidates.get("CAND-0001").unwrap();

    let matches = matcher.find_clients_for_candidate(emily, &SearchOptions::default());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].0.company_name, "Elegant Jewelers");

    // Without a score floor the urgent client leads despite the lowest score
    let all = matcher.find_clients_for_candidate(emily, &SearchOptions::default().with_min_score(0.0));
    let names: Vec<&str> = all.iter().map(|(c, _)| c.company_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Heritage Restorations", "Elegant Jewelers", "ModernLux Designs"]
    );
    assert!(all[0].1 < all[1].1);
}

#[test]
fn test_detailed_match_report() {
    let candidates = populate_candidates();
    let clients = populate_clients();
    let matcher = Matcher::new(&candidates, &clients);

    let sofia = candidates.get("CAND-0003").unwrap();
    let heritage = clients.get("CLI-0002").unwrap();
    let report = matcher.get_match_report(sofia, heritage);

    assert_eq!(report.candidate_name, "Sofia Rodriguez");
    assert_eq!(report.client_name, "Heritage Restorations");
    assert_eq!(report.overall_score, 92.5);
    assert_eq!(report.recommendation, Recommendation::Strong);
    assert_eq!(
        report.skills_met,
        strings(&["antique restoration", "repair", "stone setting"])
    );
    assert!(report.skills_missing.is_empty());
    assert_eq!(
        report.specializations_matched,
        strings(&["antique restoration", "vintage pieces"])
    );
    assert!(report.experience_met);
}

#[test]
fn test_search_capabilities() {
    let candidates = populate_candidates();
    let clients = populate_clients();

    let cad: Vec<&str> = candidates
        .search_by_skill("CAD design")
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(cad, vec!["Emily Chen", "David Kim"]);

    let experienced: Vec<&str> = candidates
        .search_by_experience(7.0)
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(experienced, vec!["Emily Chen", "Sofia Rodriguez"]);

    let urgent = clients.search_urgent();
    assert_eq!(urgent.len(), 1);
    assert_eq!(urgent[0].company_name, "Heritage Restorations");
}

#[test]
fn test_matching_survives_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let candidates_path = temp_dir.path().join("candidates_example.json");
    let clients_path = temp_dir.path().join("clients_example.json");

    let candidates = populate_candidates();
    let clients = populate_clients();
    save_store(&candidates_path, &candidates).unwrap();
    save_store(&clients_path, &clients).unwrap();

    let loaded_candidates: CandidateStore = load_store(&candidates_path).unwrap();
    let loaded_clients: ClientStore = load_store(&clients_path).unwrap();
    assert_eq!(loaded_candidates, candidates);
    assert_eq!(loaded_clients, clients);

    let before = Matcher::new(&candidates, &clients);
    let after = Matcher::new(&loaded_candidates, &loaded_clients);
    let emily = candidates.get("CAND-0001").unwrap();
    let options = SearchOptions::default().with_min_score(0.0);

    let ranked_before: Vec<(Option<String>, f64)> = before
        .find_clients_for_candidate(emily, &options)
        .into_iter()
        .map(|(c, s)| (c.client_id.clone(), s))
        .collect();
    let ranked_after: Vec<(Option<String>, f64)> = after
        .find_clients_for_candidate(emily, &options)
        .into_iter()
        .map(|(c, s)| (c.client_id.clone(), s))
        .collect();
    assert_eq!(ranked_before, ranked_after);
}
