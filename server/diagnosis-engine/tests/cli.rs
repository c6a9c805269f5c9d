#![allow(deprecated)]

// CLI tests for the diagnosis-engine binary.
//
// These invoke the binary with assert_cmd and check exit codes and the
// stdout contract (JSON report, script text, or ErrorOutput).

use assert_cmd::Command;
use predicates::prelude::*;

const COMPLETE_REQUEST: &str = r#"{
  "facts": {"company": "한빛정밀(주)", "ceo": "김민수"},
  "answers": {
    "key_person": ["아니오", "예", "아니오", "아니오", "예", "아니오"],
    "corporate": ["아니오", "아니오", "아니오", "아니오", "아니오", "아니오"],
    "awareness": ["그렇다", "예", "예"],
    "scenario": ["큰 영향 없음", "대응 가능", "내부 대응 가능"]
  },
  "generated_at": "2026-02-02T09:00:00"
}"#;

fn engine() -> Command {
  Command::cargo_bin("diagnosis-engine").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
  engine()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("diagnosis-engine"));
}

#[test]
fn json_report_on_stdout() {
  engine()
    .write_stdin(COMPLETE_REQUEST)
    .assert()
    .success()
    .stdout(predicate::str::contains("\"overall_level\":\"good\""))
    .stdout(predicate::str::contains("\"category\":\"key_person\""))
    .stdout(predicate::str::contains("\"script\":"));
}

#[test]
fn script_format_prints_plain_text() {
  engine()
    .args(["--format", "script"])
    .write_stdin(COMPLETE_REQUEST)
    .assert()
    .success()
    .stdout(predicate::str::contains("안녕하세요, 김민수님."))
    .stdout(predicate::str::contains("▸ 대표자 리스크 (2건 해당)"))
    .stdout(predicate::str::contains("2026.02.02 09:00"));
}

#[test]
fn catalog_format_needs_no_stdin() {
  engine()
    .args(["--format", "catalog"])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"total_weight\":26"))
    .stdout(predicate::str::contains("경영 전반에 중대한 영향"));
}

#[test]
fn invalid_json_yields_error_output() {
  engine()
    .write_stdin("{not json")
    .assert()
    .code(1)
    .stdout(predicate::str::contains("\"error\":true"))
    .stdout(predicate::str::contains("\"message\":\"json: "))
    .stdout(predicate::str::contains("\"field\"").not());
}

#[test]
fn out_of_domain_answer_names_field() {
  let request = COMPLETE_REQUEST.replace("\"그렇다\"", "\"몰라요\"");
  engine()
    .write_stdin(request)
    .assert()
    .code(1)
    .stdout(predicate::str::contains("answer not in domain"))
    .stdout(predicate::str::contains("\"field\":\"answers.awareness[0]\""));
}

#[test]
fn missing_category_rejected_without_fill_flag() {
  let request = r#"{"answers": {"key_person": ["예", "예", "예", "예", "예", "예"]}}"#;
  engine()
    .write_stdin(request)
    .assert()
    .code(1)
    .stdout(predicate::str::contains("incomplete answers"));

  engine()
    .arg("--fill-unanswered")
    .write_stdin(request)
    .assert()
    .success()
    .stdout(predicate::str::contains("\"filled_categories\":[\"corporate\",\"awareness\",\"scenario\"]"));
}

#[test]
fn limit_flag_caps_priorities() {
  engine()
    .args(["--format", "script", "--limit", "1"])
    .write_stdin(COMPLETE_REQUEST)
    .assert()
    .success()
    .stdout(predicate::str::contains("▸ 대표자 리스크 (1건 해당)"));
}
