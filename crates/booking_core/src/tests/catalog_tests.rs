use super::*;

use std::{
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

const TWO_MATCHES: &str = r#"
[[matches]]
id = 10
home_team = "الهلال"
home_team_icon = "🌙"
home_team_logo = "/alhilal.png"
away_team = "النصر"
away_team_icon = "🟡"
away_team_logo = "/Al-Nassr.png"
date = "2026-05-01"
time = "18:45"
stadium = "King Fahd Stadium"
price = 120

[[matches]]
id = 11
home_team = "الاتحاد"
home_team_icon = "⚽"
away_team = "الشباب"
away_team_icon = "⚡"
date = "2026-05-08"
stadium = "Jeddah Arena"
price = "45.50"
"#;

#[test]
fn mock_catalog_has_three_fixtures_in_order() {
    let catalog = MatchCatalog::mock();
    let ids: Vec<i64> = catalog.iter().map(|fixture| fixture.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let first = catalog.get(MatchId(1)).expect("match 1");
    assert_eq!(first.home_team, "الأخضر");
    assert_eq!(first.away_team, "الهلال");
    assert_eq!(first.date_label(), "2026-02-17");
    assert_eq!(first.time_label().as_deref(), Some("21:00"));
    assert_eq!(first.price, Price::from(50));
    assert!(catalog.get(MatchId(4)).is_none());
}

#[test]
fn mock_catalog_fixture_kickoffs_are_exact() {
    let kickoffs: Vec<String> = MatchCatalog::mock()
        .iter()
        .map(|fixture| fixture.kickoff_label())
        .collect();
    assert_eq!(
        kickoffs,
        vec!["2026-02-17 21:00", "2026-03-02 20:30", "2026-04-10 19:00"]
    );
}

#[test]
fn mock_catalog_passes_validation() {
    let mock = MatchCatalog::mock();
    let rebuilt = MatchCatalog::new(mock.as_slice().to_vec()).expect("valid");
    assert_eq!(rebuilt, mock);
}

#[test]
fn rejects_duplicate_ids() {
    let mut matches = MatchCatalog::mock().as_slice().to_vec();
    matches[2].id = MatchId(1);
    let err = MatchCatalog::new(matches).expect_err("duplicate");
    assert!(matches!(err, CatalogError::DuplicateMatchId(MatchId(1))));
}

#[test]
fn rejects_non_positive_price() {
    let mut matches = MatchCatalog::mock().as_slice().to_vec();
    matches[1].price = Price::from(0);
    let err = MatchCatalog::new(matches).expect_err("free match");
    assert!(matches!(err, CatalogError::NonPositivePrice { id: MatchId(2), .. }));
}

#[test]
fn parses_toml_catalog_with_optional_fields() {
    let catalog = MatchCatalog::from_toml_str(TWO_MATCHES).expect("catalog");
    assert_eq!(catalog.len(), 2);

    let second = catalog.get(MatchId(11)).expect("match 11");
    assert_eq!(second.time, None);
    assert_eq!(second.home_team_logo, "");
    assert_eq!(second.price.to_string(), "45.50 SAR");
}

#[test]
fn reports_parse_errors() {
    let err = MatchCatalog::from_toml_str("[[matches]]\nid = \"x\"").expect_err("bad toml");
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn loads_catalog_from_file() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("booking_catalog_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join("catalog.toml");
    fs::write(&path, TWO_MATCHES).expect("write catalog");

    let catalog = MatchCatalog::load(&path).expect("load");
    assert_eq!(catalog.as_slice()[0].stadium, "King Fahd Stadium");

    let missing = MatchCatalog::load(temp_root.join("missing.toml")).expect_err("missing");
    assert!(matches!(missing, CatalogError::Read { .. }));

    fs::remove_dir_all(temp_root).expect("cleanup");
}
