//! Image asset lookup with local fallback to placeholder artwork.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use percent_encoding::percent_decode_str;
use shared::{domain::TeamRef, error::AssetError};

use crate::logos::{fallback_for, FallbackStyle, Placeholder};

pub trait AssetSource {
    type Image;

    fn load(&self, path: &str) -> Result<Self::Image, AssetError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedImage<I> {
    Loaded(I),
    Fallback(Placeholder),
}

impl<I> ResolvedImage<I> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolvedImage::Fallback(_))
    }
}

/// Resolves a team's logo. Load failures are logged and replaced by the
/// placeholder for `style`; they never reach the caller.
pub fn resolve_team_image<S>(
    source: &S,
    team: TeamRef<'_>,
    style: FallbackStyle,
) -> ResolvedImage<S::Image>
where
    S: AssetSource + ?Sized,
{
    let fallback = || fallback_for(style, team.name, team.icon);
    let path = team.logo.trim();
    if path.is_empty() {
        return ResolvedImage::Fallback(fallback());
    }

    match source.load(path) {
        Ok(image) => ResolvedImage::Loaded(image),
        Err(err) => {
            tracing::warn!(team = team.name, path, error = %err, "team logo unavailable; using placeholder");
            ResolvedImage::Fallback(fallback())
        }
    }
}

/// Reads raw asset bytes from a directory. Catalog paths are rooted at the
/// directory and may be percent-encoded.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let relative = path.trim_start_matches('/');
        let decoded = percent_decode_str(relative).decode_utf8_lossy();
        self.root.join(decoded.as_ref())
    }
}

impl AssetSource for DirectoryAssets {
    type Image = Vec<u8>;

    fn load(&self, path: &str) -> Result<Self::Image, AssetError> {
        let full_path = self.resolve_path(path);
        fs::read(&full_path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                AssetError::NotFound(full_path.display().to_string())
            } else {
                AssetError::Io {
                    path: full_path.display().to_string(),
                    source,
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "tests/assets_tests.rs"]
mod tests;
