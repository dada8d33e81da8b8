//! Read-only match catalog supplied to the booking flow at startup.

use std::{collections::HashSet, fs, path::Path};

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use shared::{
    domain::{Match, MatchId, Price},
    error::CatalogError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCatalog {
    matches: Vec<Match>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    matches: Vec<Match>,
}

impl MatchCatalog {
    pub fn new(matches: Vec<Match>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(matches.len());
        for fixture in &matches {
            if !seen.insert(fixture.id) {
                return Err(CatalogError::DuplicateMatchId(fixture.id));
            }
            if !fixture.price.is_positive() {
                return Err(CatalogError::NonPositivePrice {
                    id: fixture.id,
                    price: fixture.price.amount().to_string(),
                });
            }
        }
        Ok(Self { matches })
    }

    /// The three fixtures the booking app ships with.
    pub fn mock() -> Self {
        Self {
            matches: vec![
                fixture(
                    1,
                    ("الأخضر", "🟢", "/Alahli.png"),
                    ("الهلال", "🌙", "/alhilal.png"),
                    (2026, 2, 17),
                    Some((21, 0)),
                    "Red Arena",
                    50,
                ),
                fixture(
                    2,
                    ("الاتفاق", "🔵", "/%20Al-Ettifaq.png"),
                    ("الاتحاد", "⚽", "/Al-Ittihad.png"),
                    (2026, 3, 2),
                    Some((20, 30)),
                    "Green Arena",
                    75,
                ),
                fixture(
                    3,
                    ("النصر", "🟡", "/Al-Nassr.png"),
                    ("الشباب", "⚡", "/AlShabab.png"),
                    (2026, 4, 10),
                    Some((19, 0)),
                    "Blue Arena",
                    60,
                ),
            ],
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(raw).map_err(|err| CatalogError::Parse(err.to_string()))?;
        Self::new(file.matches)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_toml_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            matches = catalog.len(),
            "loaded match catalog"
        );
        Ok(catalog)
    }

    pub fn get(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|fixture| fixture.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter()
    }

    pub fn as_slice(&self) -> &[Match] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl Default for MatchCatalog {
    fn default() -> Self {
        Self::mock()
    }
}

fn fixture(
    id: i64,
    home: (&str, &str, &str),
    away: (&str, &str, &str),
    (year, month, day): (i32, u32, u32),
    time: Option<(u32, u32)>,
    stadium: &str,
    price: i64,
) -> Match {
    Match {
        id: MatchId(id),
        home_team: home.0.to_string(),
        home_team_icon: home.1.to_string(),
        home_team_logo: home.2.to_string(),
        away_team: away.0.to_string(),
        away_team_icon: away.1.to_string(),
        away_team_logo: away.2.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        time: time.and_then(|(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0)),
        stadium: stadium.to_string(),
        price: Price::from(price),
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
