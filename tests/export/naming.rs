use chrono::{Local, TimeZone};
use igscout::export::{ExportFormat, default_file_stem, target_path};
use igscout::ProfileRecord;
use serde_json::json;
use std::path::{Path, PathBuf};

fn at() -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(2026, 3, 9, 14, 5, 7).unwrap()
}

fn named(username: &str) -> ProfileRecord {
    ProfileRecord::from_value(json!({ "username": username })).unwrap()
}

#[test]
fn default_stem_uses_prefix_username_and_timestamp() {
    assert_eq!(default_file_stem(&named("alice"), at()), "instagram_alice_20260309_140507");
}

#[test]
fn default_stem_without_username_uses_placeholder() {
    assert_eq!(
        default_file_stem(&ProfileRecord::new(), at()),
        "instagram_unknown_20260309_140507"
    );
}

#[test]
fn default_stem_never_contains_path_separators() {
    let stem = default_file_stem(&named("../etc/x"), at());
    assert!(!stem.contains('/'), "{stem}");
}

#[test]
fn default_target_gets_format_extension() {
    let rec = named("alice");
    assert_eq!(
        target_path(&rec, ExportFormat::Csv, None, at()),
        PathBuf::from("instagram_alice_20260309_140507.csv")
    );
    assert_eq!(
        target_path(&rec, ExportFormat::Json, None, at()),
        PathBuf::from("instagram_alice_20260309_140507.json")
    );
}

#[test]
fn explicit_name_gets_extension_unless_present() {
    let rec = ProfileRecord::new();
    assert_eq!(
        target_path(&rec, ExportFormat::Json, Some(Path::new("report")), at()),
        PathBuf::from("report.json")
    );
    assert_eq!(
        target_path(&rec, ExportFormat::Json, Some(Path::new("report.JSON")), at()),
        PathBuf::from("report.JSON")
    );
    assert_eq!(
        target_path(&rec, ExportFormat::Csv, Some(Path::new("out/report.json")), at()),
        PathBuf::from("out/report.json.csv")
    );
}

#[test]
fn format_parses_case_insensitively() {
    assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
    assert_eq!(" csv ".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
    assert!("xml".parse::<ExportFormat>().is_err());
    assert_eq!(ExportFormat::default(), ExportFormat::Json);
}
