use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_root(label: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let root = env::temp_dir().join(format!("booking_gui_{label}_{suffix}"));
    fs::create_dir_all(&root).expect("temp root");
    root
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn missing_config_file_yields_defaults() {
    let root = temp_root("defaults");
    let config = load_startup_config(&root.join("booking.toml"), &CliOverrides::default(), no_env)
        .expect("config");
    assert_eq!(config, StartupConfig::default());
    fs::remove_dir_all(root).expect("cleanup");
}

#[test]
fn file_then_env_then_cli_take_precedence() {
    let root = temp_root("layers");
    let path = root.join("booking.toml");
    fs::write(
        &path,
        "assets_dir = \"/srv/assets\"\ncatalog = \"/srv/catalog.toml\"\nlog_filter = \"debug\"\n",
    )
    .expect("write config");

    let from_file = load_startup_config(&path, &CliOverrides::default(), no_env).expect("file");
    assert_eq!(from_file.assets_dir, PathBuf::from("/srv/assets"));
    assert_eq!(from_file.catalog_path, Some(PathBuf::from("/srv/catalog.toml")));
    assert_eq!(from_file.log_filter, "debug");

    let vars: HashMap<&str, &str> = HashMap::from([
        ("BOOKING_ASSETS_DIR", "/env/assets"),
        ("BOOKING_CLEAR_TICKETS_ON_LOGOUT", "yes"),
        ("BOOKING_LOG", "  "),
    ]);
    let env_lookup = |name: &str| vars.get(name).map(|v| v.to_string());
    let from_env = load_startup_config(&path, &CliOverrides::default(), env_lookup).expect("env");
    assert_eq!(from_env.assets_dir, PathBuf::from("/env/assets"));
    assert_eq!(from_env.logout_policy, LogoutPolicy::ClearTickets);
    assert_eq!(from_env.log_filter, "debug");

    let cli = CliOverrides {
        assets_dir: Some(PathBuf::from("/cli/assets")),
        catalog_path: None,
        clear_tickets_on_logout: false,
    };
    let from_cli = load_startup_config(&path, &cli, env_lookup).expect("cli");
    assert_eq!(from_cli.assets_dir, PathBuf::from("/cli/assets"));
    assert_eq!(from_cli.catalog_path, Some(PathBuf::from("/srv/catalog.toml")));

    fs::remove_dir_all(root).expect("cleanup");
}

#[test]
fn malformed_config_file_is_an_error() {
    let root = temp_root("malformed");
    let path = root.join("booking.toml");
    fs::write(&path, "clear_tickets_on_logout = \"maybe\"").expect("write config");

    let err = load_startup_config(&path, &CliOverrides::default(), no_env).expect_err("invalid");
    assert!(err.to_string().contains("invalid config file"));

    fs::remove_dir_all(root).expect("cleanup");
}

#[test]
fn parses_boolean_flags() {
    assert_eq!(parse_flag("TRUE"), Some(true));
    assert_eq!(parse_flag("off"), Some(false));
    assert_eq!(parse_flag("sometimes"), None);
}
