//! Unit tests for reporting utilities.

use moalns_2evrp::archive::{Archive, ArchiveEntry};
use moalns_2evrp::config::Config;
use moalns_2evrp::evaluator::Evaluator;
use moalns_2evrp::instance::{reference_problem, reference_seed_solution};
use moalns_2evrp::utils::{format_archive, format_duration, save_archive, write_archive_json};
use moalns_2evrp::MoalnsAlgorithm;
use std::time::Duration;

fn reference_archive() -> Archive {
    let problem = reference_problem().unwrap();
    let seed = reference_seed_solution();
    let objectives = Evaluator::new(&problem).evaluate(&seed).unwrap();

    let mut archive = Archive::new();
    archive.insert(ArchiveEntry::new(seed, objectives));
    archive
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(Duration::from_secs(0)), "0h 00m 00s");
    assert_eq!(format_duration(Duration::from_secs(59)), "0h 00m 59s");
    assert_eq!(format_duration(Duration::from_secs(61)), "0h 01m 01s");
    assert_eq!(format_duration(Duration::from_secs(3661)), "1h 01m 01s");
}

#[test]
fn test_format_archive() {
    let table = format_archive(&reference_archive());
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Cost"));
    assert!(lines[0].contains("Vehicles"));
    assert!(lines[2].contains("396.87"));
    assert!(lines[2].contains("[C1 -> C2] [C3 -> C4]"));

    // Header only for an empty archive
    assert_eq!(format_archive(&Archive::new()).lines().count(), 2);
}

#[test]
fn test_write_archive_json() {
    let path = std::env::temp_dir().join("moalns_2evrp_utils_tests_archive.json");
    let archive = reference_archive();

    write_archive_json(&archive, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let entries: Vec<ArchiveEntry> = serde_json::from_str(&text).unwrap();
    assert_eq!(entries, archive.entries());

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value[0]["objectives"]["vehicles"], 2);
    assert_eq!(value[0]["solution"]["second_echelon"][1][0], "C3");

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_save_archive_report() {
    let path = std::env::temp_dir().join("moalns_2evrp_utils_tests_report.txt");
    let problem = reference_problem().unwrap();

    save_archive(&reference_archive(), &problem, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();

    assert!(text.starts_with("Pareto archive for instance: reference"));
    assert!(text.contains("Members: 1"));
    assert!(text.contains("truck:   [DC2 -> S1]"));
    assert!(text.contains("vehicle: [C3 -> C4]"));

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_search_statistics_format() {
    let problem = reference_problem().unwrap();
    let mut algorithm = MoalnsAlgorithm::new(problem, Config::new().with_seed(4).with_iterations(3))
        .unwrap()
        .with_seed_solution(reference_seed_solution());
    algorithm.run().unwrap();

    let statistics = algorithm.statistics();
    assert_eq!(statistics.iterations, 3);
    assert_eq!(statistics.candidates, 15);

    let text = statistics.format();
    assert!(text.contains("- Iterations: 3"));
    assert!(text.contains("- Candidates: 15"));
    assert!(text.contains("- Operator swap"));
    assert!(text.contains("- Operator split"));
}
