//! End-to-end tests for the command handlers, writing reports to temp files.

use negari_readiness::cli::{load_answers, run_questions, run_score};
use negari_readiness::config::{load_config_file, AppConfig};
use negari_readiness::pipeline::exit_codes;
use negari_readiness::reports::ReportFormat;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture(relative: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(relative)
}

fn json_config(report: &Path) -> AppConfig {
    AppConfig::builder()
        .output_format(ReportFormat::Json)
        .output_file(Some(report.to_path_buf()))
        .quiet(true)
        .build()
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn score_strong_answers_as_json() {
    let tmp = TempDir::new().unwrap();
    let report = tmp.path().join("report.json");

    let code = run_score(&fixture("answers/strong.yaml"), &json_config(&report)).unwrap();
    assert_eq!(code, exit_codes::SUCCESS);

    let value = read_json(&report);
    assert_eq!(value["result"]["total_score"], 22);
    assert_eq!(value["result"]["percentage"], 88.0);
    assert_eq!(value["result"]["level"], "Excellent");
    assert_eq!(value["result"]["category_scores"]["leadership"], 4);
}

#[test]
fn partial_answers_still_score() {
    let tmp = TempDir::new().unwrap();
    let report = tmp.path().join("report.json");

    let answers = load_answers(&fixture("answers/partial.json")).unwrap();
    assert_eq!(answers.len(), 3);

    run_score(&fixture("answers/partial.json"), &json_config(&report)).unwrap();
    let value = read_json(&report);
    assert_eq!(value["result"]["answered"], 3);
    assert_eq!(value["result"]["question_count"], 5);
    assert_eq!(value["result"]["total_score"], 12);
}

#[test]
fn min_score_gate_sets_exit_code() {
    let tmp = TempDir::new().unwrap();
    let mut config = json_config(&tmp.path().join("report.json"));

    config.behavior.min_score = Some(88.0);
    assert_eq!(
        run_score(&fixture("answers/strong.yaml"), &config).unwrap(),
        exit_codes::SUCCESS
    );

    config.behavior.min_score = Some(90.0);
    assert_eq!(
        run_score(&fixture("answers/strong.yaml"), &config).unwrap(),
        exit_codes::BELOW_THRESHOLD
    );
}

#[test]
fn custom_question_file_from_config() {
    let tmp = TempDir::new().unwrap();
    let report = tmp.path().join("questions.md");
    let config_path = tmp.path().join("negari.yaml");
    std::fs::write(
        &config_path,
        format!(
            "questions:\n  file: {}\noutput:\n  format: markdown\n  file: {}\nbehavior:\n  quiet: true\n",
            fixture("questions/campus.yaml").display(),
            report.display()
        ),
    )
    .unwrap();

    let config = load_config_file(&config_path).unwrap();
    assert_eq!(run_questions(&config).unwrap(), exit_codes::SUCCESS);

    let md = std::fs::read_to_string(&report).unwrap();
    assert!(md.starts_with("# Question set `campus-2025`"));
    assert!(md.contains("| `band_8` | 8.0+ | 5 |"));
}

#[test]
fn broken_question_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let config = AppConfig::builder()
        .questions_file(Some(fixture("questions/not_descending.yaml")))
        .output_file(Some(tmp.path().join("report.json")))
        .build();

    let err = run_score(&fixture("answers/strong.yaml"), &config).unwrap_err();
    assert!(format!("{err:#}").contains("not_descending.yaml"));
}

#[test]
fn academic_advisory_flows_through_config() {
    let tmp = TempDir::new().unwrap();
    let report = tmp.path().join("report.md");
    let answers = tmp.path().join("answers.yaml");
    std::fs::write(&answers, "academic_performance: below_average\n").unwrap();

    let config = AppConfig::builder()
        .academic_advisory(true)
        .output_format(ReportFormat::Markdown)
        .output_file(Some(report.clone()))
        .quiet(true)
        .build();
    run_score(&answers, &config).unwrap();

    let md = std::fs::read_to_string(&report).unwrap();
    assert!(md.contains("- Strengthen your academic record and grades in core subjects"));
}
