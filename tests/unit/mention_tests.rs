use std::collections::HashMap;

use draft_watch::config::GlobalConfig;
use draft_watch::models::mention::{Mention, MentionBook};

fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

#[test]
fn owner_lookup_wins_over_team_lookup() {
    let book = MentionBook::new(
        table(&[("bigdaddybrett05", "<@1001>")]),
        table(&[("Giants", "<@&2002>")]),
    );

    assert_eq!(
        book.resolve(Some("bigdaddybrett05"), "Giants"),
        Mention::Lookup("<@1001>".into())
    );
}

#[test]
fn team_lookup_used_when_owner_unknown() {
    let book = MentionBook::new(table(&[]), table(&[("Giants", "<@&2002>")]));

    assert_eq!(
        book.resolve(Some("someone_else"), "Giants"),
        Mention::Lookup("<@&2002>".into())
    );
    assert_eq!(book.resolve(None, "Giants"), Mention::Lookup("<@&2002>".into()));
}

#[test]
fn literal_fallback_when_nothing_matches() {
    let book = MentionBook::default();
    let mention = book.resolve(Some("bigdaddybrett05"), "Giants");

    assert_eq!(mention, Mention::Literal("Giants".into()));
    assert_eq!(mention.to_string(), "@Giants");
}

#[test]
fn lookup_tokens_render_verbatim() {
    assert_eq!(Mention::Lookup("<@&622615034157203469>".into()).to_string(), "<@&622615034157203469>");
    assert_eq!(Mention::Lookup("Red Sox crew".into()).to_string(), "Red Sox crew");
}

#[test]
fn team_lookup_is_case_sensitive() {
    let book = MentionBook::new(table(&[]), table(&[("Giants", "<@&2002>")]));

    assert_eq!(book.resolve(None, "giants"), Mention::Literal("giants".into()));
}

#[test]
fn builds_from_config_tables() {
    let config = GlobalConfig::from_toml_str(
        r#"
league_url = "https://example.test/"
[owners]
sox_fan = "<@77>"
[teams]
"Red Sox" = "<@&88>"
"#,
    )
    .expect("config parses");
    let book = MentionBook::from_config(&config);

    assert_eq!(book.resolve(Some("sox_fan"), "Red Sox"), Mention::Lookup("<@77>".into()));
    assert_eq!(book.resolve(None, "Red Sox"), Mention::Lookup("<@&88>".into()));
}
