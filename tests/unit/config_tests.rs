use std::path::PathBuf;

use draft_watch::config::GlobalConfig;

fn sample_toml() -> &'static str {
    r#"
league_url = "https://example.test/league/home?lgid=691"
state_path = "state/last_status.txt"
message_header = "**Draft Update:**"

[http]
user_agent = "draft-watch-test"
timeout_seconds = 5

[page]
status_class = "alert-info"
open_marker = "is currently open."
end_marker = "View draft board"

[draft]
anchor = "Next pick due on"
clock_phrase = "are on the clock"
reference_zone = "America/Los_Angeles"
zone_abbreviations = ["PST", "PDT"]

[owners]
bigdaddybrett05 = "<@1001>"

[teams]
Giants = "<@&622615034157203469>"
"Red Sox" = "<@&1180931211858809023>"
"#
}

#[test]
fn parses_valid_config() {
    let config = GlobalConfig::from_toml_str(sample_toml()).expect("config parses");

    assert_eq!(config.league_url, "https://example.test/league/home?lgid=691");
    assert_eq!(config.state_path, PathBuf::from("state/last_status.txt"));
    assert_eq!(config.http.timeout_seconds, 5);
    assert_eq!(config.page.end_marker.as_deref(), Some("View draft board"));
    assert_eq!(config.owners.get("bigdaddybrett05").map(String::as_str), Some("<@1001>"));
    assert_eq!(config.teams.len(), 2);
    assert!(config.teams.contains_key("Red Sox"));
    assert!(config.webhook_url.is_empty(), "webhook is never read from TOML");
}

#[test]
fn minimal_config_uses_defaults() {
    let config = GlobalConfig::from_toml_str(r#"league_url = "https://example.test/""#)
        .expect("config parses");

    assert_eq!(config.state_path, PathBuf::from("last_status.txt"));
    assert_eq!(config.message_header, "**Draft Update:**");
    assert_eq!(config.http.timeout_seconds, 10);
    assert_eq!(config.page.status_tag, "div");
    assert_eq!(config.page.status_class, "alert-info");
    assert_eq!(config.page.open_marker, "is currently open.");
    assert!(config.page.end_marker.is_none());
    assert_eq!(config.draft.anchor, "Next pick due on");
    assert_eq!(config.draft.reference_zone, "America/Los_Angeles");
    assert_eq!(config.draft.zone_abbreviations, vec!["PST", "PDT"]);
    assert!(config.owners.is_empty());
    assert!(config.teams.is_empty());
}

#[test]
fn webhook_url_in_toml_is_ignored() {
    let config = GlobalConfig::from_toml_str(
        r#"
league_url = "https://example.test/"
webhook_url = "https://discord.test/api/webhooks/1/secret"
"#,
    );
    // Unknown keys are tolerated, but the skipped field stays empty.
    let config = config.expect("config parses");
    assert!(config.webhook_url.is_empty());
}

#[test]
fn rejects_missing_league_url() {
    let err = GlobalConfig::from_toml_str("state_path = 'x.txt'").expect_err("must fail");
    assert!(err.to_string().starts_with("config:"), "{err}");
}

#[test]
fn rejects_unknown_reference_zone() {
    let err = GlobalConfig::from_toml_str(
        r#"
league_url = "https://example.test/"
[draft]
reference_zone = "Pacific/Nowhere"
"#,
    )
    .expect_err("must fail");
    assert!(err.to_string().contains("Pacific/Nowhere"), "{err}");
}

#[test]
fn rejects_zero_timeout() {
    let err = GlobalConfig::from_toml_str(
        r#"
league_url = "https://example.test/"
[http]
timeout_seconds = 0
"#,
    )
    .expect_err("must fail");
    assert!(err.to_string().contains("timeout_seconds"), "{err}");
}

#[test]
fn rejects_empty_open_marker() {
    let err = GlobalConfig::from_toml_str(
        r#"
league_url = "https://example.test/"
[page]
open_marker = ""
"#,
    )
    .expect_err("must fail");
    assert!(err.to_string().contains("open_marker"), "{err}");
}

#[test]
fn rejects_invalid_status_tag() {
    let err = GlobalConfig::from_toml_str(
        r#"
league_url = "https://example.test/"
[page]
status_tag = "div.alert"
"#,
    )
    .expect_err("must fail");
    assert!(err.to_string().contains("status_tag"), "{err}");
}

#[test]
fn load_from_path_reports_missing_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let err = GlobalConfig::load_from_path(temp.path().join("absent.toml")).expect_err("must fail");
    assert!(err.to_string().contains("failed to read config"), "{err}");
}

#[test]
fn load_from_path_reads_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("draft-watch.toml");
    std::fs::write(&path, sample_toml()).expect("write config");

    let config = GlobalConfig::load_from_path(&path).expect("config loads");
    assert_eq!(config.http.user_agent, "draft-watch-test");
}

#[test]
fn shipped_example_config_is_valid() {
    let raw = include_str!("../../draft-watch.example.toml");
    let config = GlobalConfig::from_toml_str(raw).expect("example config should parse");

    assert_eq!(config.teams.len(), 30);
    assert_eq!(
        config.teams.get("Blue Jays").map(String::as_str),
        Some("<@&622615298322989070>")
    );
    assert!(config.owners.is_empty());
}
