//! Integration tests for CLI parsing and routing

use super::test_utils::{with_xdg_env, NatroFixture, NM_CONFIG};
use clap::Parser;
use fieldswap::cli::{map_error, map_error_json, Cli, RunContext};
use fieldswap::error::ApiError;
use tempfile::TempDir;

/// Parse and execute a command line inside an isolated environment.
fn run(fixture: &NatroFixture, args: &[&str]) -> Result<String, ApiError> {
    let test_dir = TempDir::new().unwrap();
    let root = fixture.root().to_string_lossy().to_string();
    let workspace = test_dir.path().to_string_lossy().to_string();

    let mut argv = vec![
        "fieldswap",
        "--workspace",
        workspace.as_str(),
        "--natro-root",
        root.as_str(),
    ];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();

    with_xdg_env(&test_dir, || {
        let context = RunContext::new(&cli)?;
        context.execute(&cli.command)
    })
}

#[test]
fn test_switch_command_prints_chat_responses() {
    let fixture = NatroFixture::new();
    let out = run(&fixture, &["switch", "Rose", "--no-key"]).unwrap();
    assert_eq!(
        out,
        "Switching field to Rose with defaults from field_config.ini\n\
         Field switched to Rose with defaults applied"
    );
    assert!(fixture.nm_config().contains("FieldName1=Rose\r\n"));
}

#[test]
fn test_switch_json_output() {
    let fixture = NatroFixture::new();
    let out = run(&fixture, &["switch", "Pine Tree", "--no-key", "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["field"], "Pine Tree");
    assert_eq!(value["keys_patched"], 14);
    assert_eq!(value["key_press"]["status"], "skipped");
}

#[test]
fn test_switch_with_default_key_sender_logs_only() {
    let fixture = NatroFixture::new();
    let out = run(&fixture, &["switch", "Rose", "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["key_press"]["status"], "sent");
    assert_eq!(value["key_press"]["key"], "f3");
}

#[test]
fn test_dry_run_does_not_write() {
    let fixture = NatroFixture::new();
    let out = run(&fixture, &["switch", "Rose", "--dry-run"]).unwrap();
    assert!(out.starts_with("Dry run: switching to Rose would set 14 key(s)"));
    assert!(out.contains("FieldPatternSize1"));
    assert_eq!(fixture.nm_config(), NM_CONFIG);
}

#[test]
fn test_unknown_field_error_lists_valid_fields() {
    let fixture = NatroFixture::new();
    let err = run(&fixture, &["switch", "Lake"]).unwrap_err();
    let message = map_error(&err);
    assert!(message.starts_with("Unknown field: \"Lake\". Valid fields:\n"));
    assert!(message.contains("Mountain Top"));

    let json: serde_json::Value = serde_json::from_str(&map_error_json(&err)).unwrap();
    assert_eq!(json["error"], "unknown_field");
    assert_eq!(fixture.nm_config(), NM_CONFIG);
}

#[test]
fn test_missing_section_error_message() {
    let fixture = NatroFixture::new();
    let err = run(&fixture, &["show", "Sunflower"]).unwrap_err();
    assert!(map_error(&err).starts_with("Could not find defaults for field \"Sunflower\""));
}

#[test]
fn test_show_command_renders_table_and_json() {
    let fixture = NatroFixture::new();
    let text = run(&fixture, &["show", "Rose"]).unwrap();
    assert!(text.starts_with("Defaults for Rose:"));
    assert!(text.contains("FieldPattern1"));
    assert!(text.contains("Snake"));

    let json = run(&fixture, &["show", "Rose", "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["defaults"]["pattern"], "Snake");
    assert_eq!(value["defaults"]["percent"], "95");
    assert_eq!(value["target"]["FieldPatternSize1"], "M");
    assert_eq!(fixture.nm_config(), NM_CONFIG);
}

#[test]
fn test_explicit_file_flags_override_natro_root() {
    let fixture = NatroFixture::new();
    let other = NatroFixture::with("FieldName1=Clover\n", "[Bamboo]\nsize=L\n");
    let other_field_config = other.field_config_path().to_string_lossy().to_string();

    let out = run(
        &fixture,
        &["--field-config", other_field_config.as_str(), "show", "Bamboo", "--format", "json"],
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["defaults"]["size"], "L");
}
