//! End-to-end tests for the `jsv` subcommand handlers.

use std::fs;
use std::path::{Path, PathBuf};

use jsv_cli::syntax::{run_syntax, SyntaxArgs};
use jsv_cli::validate::{run_validate, ValidateArgs};
use jsv_cli::{ReportStyle, RetCode, Session};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run_syntax_on(session: &Session, schemas: Vec<PathBuf>) -> (u8, String) {
    let mut out = Vec::new();
    let code = run_syntax(&SyntaxArgs { schemas }, session, &mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
}

fn run_validate_on(session: &Session, schema: PathBuf, instances: Vec<PathBuf>) -> (u8, String) {
    let mut out = Vec::new();
    let code = run_validate(&ValidateArgs { schema, instances }, session, &mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
}

#[test]
fn syntax_accepts_valid_schema() {
    let dir = TempDir::new().unwrap();
    let schema = write(dir.path(), "s.json", r#"{"type": "string", "minLength": 1}"#);
    let session = Session::new(None, ReportStyle::Default).unwrap();

    let (code, text) = run_syntax_on(&session, vec![schema.clone()]);
    assert_eq!(code, RetCode::AllOk.code());
    let name = schema.display().to_string();
    assert_eq!(
        text,
        format!("--- BEGIN {name}---\nvalidation: SUCCESS\n--- END {name}---\n")
    );
}

#[test]
fn syntax_reports_worst_code_over_files() {
    let dir = TempDir::new().unwrap();
    let good = write(dir.path(), "good.json", r#"{"type": "integer"}"#);
    let bad = write(dir.path(), "bad.yaml", "type: 42\n");
    let session = Session::new(None, ReportStyle::Brief).unwrap();

    let (code, text) = run_syntax_on(&session, vec![good, bad]);
    assert_eq!(code, RetCode::SchemaSyntaxError.code());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("good.json: SUCCESS"));
    assert!(lines[1].ends_with("bad.yaml: FAILURE"));
}

#[test]
fn missing_input_is_command_error() {
    let dir = TempDir::new().unwrap();
    let session = Session::new(None, ReportStyle::Default).unwrap();

    let (code, text) = run_syntax_on(&session, vec![dir.path().join("absent.json")]);
    assert_eq!(code, RetCode::CmdError.code());
    assert!(text.is_empty());
}

#[test]
fn unparseable_document_is_an_error() {
    let dir = TempDir::new().unwrap();
    let broken = write(dir.path(), "broken.json", "{ not json");
    let session = Session::new(None, ReportStyle::Default).unwrap();

    let mut out = Vec::new();
    let result = run_syntax(&SyntaxArgs { schemas: vec![broken] }, &session, &mut out);
    assert!(result.is_err());
}

#[test]
fn validate_success_and_failure() {
    let dir = TempDir::new().unwrap();
    let schema = write(
        dir.path(),
        "s.json",
        r#"{"type": "object", "required": ["name"], "properties": {"name": {"type": "string"}}}"#,
    );
    let ok = write(dir.path(), "ok.json", r#"{"name": "jsv"}"#);
    let bad = write(dir.path(), "bad.yaml", "name: 42\n");
    let session = Session::new(None, ReportStyle::Default).unwrap();

    let (code, _) = run_validate_on(&session, schema.clone(), vec![ok.clone()]);
    assert_eq!(code, RetCode::AllOk.code());

    let (code, text) = run_validate_on(&session, schema, vec![ok, bad]);
    assert_eq!(code, RetCode::ValidationFailure.code());
    assert!(text.contains("validation: SUCCESS"));
    assert!(text.contains("validation: FAILURE"));
    assert!(text.contains("\"keyword\": \"type\""));
    assert!(text.contains("\"instance\""));
}

#[test]
fn validate_stops_on_schema_syntax_error() {
    let dir = TempDir::new().unwrap();
    let schema = write(dir.path(), "s.json", r#"{"minLength": -1}"#);
    let instance = write(dir.path(), "i.json", r#""text""#);
    let session = Session::new(None, ReportStyle::Brief).unwrap();

    let (code, text) = run_validate_on(&session, schema, vec![instance]);
    assert_eq!(code, RetCode::SchemaSyntaxError.code());
    assert_eq!(text.lines().count(), 1);
    assert!(text.contains("s.json: FAILURE"));
    assert!(!text.contains("i.json"));
}

#[test]
fn quiet_style_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let schema = write(dir.path(), "s.json", r#"{"type": "string"}"#);
    let instance = write(dir.path(), "i.json", "42");
    let session = Session::new(None, ReportStyle::Quiet).unwrap();

    let (code, text) = run_validate_on(&session, schema, vec![instance]);
    assert_eq!(code, RetCode::ValidationFailure.code());
    assert!(text.is_empty());
}

#[test]
fn configuration_can_disable_format() {
    let dir = TempDir::new().unwrap();
    let schema = write(dir.path(), "s.json", r#"{"format": "email"}"#);
    let instance = write(dir.path(), "i.json", r#""not an email""#);

    let strict = Session::new(None, ReportStyle::Quiet).unwrap();
    let (code, _) = run_validate_on(&strict, schema.clone(), vec![instance.clone()]);
    assert_eq!(code, RetCode::ValidationFailure.code());

    let config = write(dir.path(), "jsv.yaml", "use_format: false\n");
    let lenient = Session::new(Some(&config), ReportStyle::Quiet).unwrap();
    assert!(!lenient.validator().config().use_format);
    let (code, _) = run_validate_on(&lenient, schema, vec![instance]);
    assert_eq!(code, RetCode::AllOk.code());
}

#[test]
fn invalid_configuration_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "jsv.yaml", "no_such_setting: true\n");
    assert!(Session::new(Some(&config), ReportStyle::Default).is_err());
    assert!(Session::new(Some(&dir.path().join("absent.yaml")), ReportStyle::Default).is_err());
}
