use super::*;

use std::{
    cell::RefCell,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::logos::{team_icon_placeholder, team_logo_fallback};

struct RecordingAssets {
    available: Vec<&'static str>,
    requested: RefCell<Vec<String>>,
}

impl AssetSource for RecordingAssets {
    type Image = String;

    fn load(&self, path: &str) -> Result<Self::Image, AssetError> {
        self.requested.borrow_mut().push(path.to_string());
        if self.available.iter().any(|candidate| *candidate == path) {
            Ok(format!("image:{path}"))
        } else {
            Err(AssetError::NotFound(path.to_string()))
        }
    }
}

fn team<'a>(name: &'a str, icon: &'a str, logo: &'a str) -> TeamRef<'a> {
    TeamRef { name, icon, logo }
}

#[test]
fn loads_available_asset() {
    let source = RecordingAssets {
        available: vec!["/alhilal.png"],
        requested: RefCell::new(Vec::new()),
    };
    let resolved = resolve_team_image(
        &source,
        team("الهلال", "🌙", "/alhilal.png"),
        FallbackStyle::TeamIcon,
    );
    assert_eq!(resolved, ResolvedImage::Loaded("image:/alhilal.png".to_string()));
}

#[test]
fn missing_asset_falls_back_per_style() {
    let source = RecordingAssets {
        available: Vec::new(),
        requested: RefCell::new(Vec::new()),
    };
    let hilal = team("الهلال", "🌙", "/alhilal.png");

    assert_eq!(
        resolve_team_image(&source, hilal, FallbackStyle::TeamIcon),
        ResolvedImage::Fallback(team_icon_placeholder("🌙"))
    );
    assert_eq!(
        resolve_team_image(&source, hilal, FallbackStyle::TeamName),
        ResolvedImage::Fallback(team_logo_fallback("الهلال"))
    );
}

#[test]
fn empty_logo_path_skips_loading() {
    let source = RecordingAssets {
        available: Vec::new(),
        requested: RefCell::new(Vec::new()),
    };
    let resolved = resolve_team_image(&source, team("X", "?", "  "), FallbackStyle::TeamName);
    assert!(resolved.is_fallback());
    assert!(source.requested.borrow().is_empty());
}

#[test]
fn directory_assets_decode_catalog_paths() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("booking_assets_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    fs::write(temp_root.join(" Al-Ettifaq.png"), b"png-bytes").expect("write asset");

    let assets = DirectoryAssets::new(&temp_root);
    assert_eq!(
        assets.resolve_path("/%20Al-Ettifaq.png"),
        temp_root.join(" Al-Ettifaq.png")
    );
    assert_eq!(
        assets.load("/%20Al-Ettifaq.png").expect("asset"),
        b"png-bytes".to_vec()
    );
    assert!(matches!(
        assets.load("/missing.png"),
        Err(AssetError::NotFound(_))
    ));

    fs::remove_dir_all(temp_root).expect("cleanup");
}
