//! Placeholder artwork used when a team's logo asset cannot be shown.

use url::Url;

const PLACEHOLDER_BASE: &str = "https://via.placeholder.com";
const DEFAULT_BACKGROUND: Rgb = Rgb(0x66, 0x7e, 0xea);
const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Which fallback a screen uses for a missing logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackStyle {
    /// Match list and match details show the team's icon glyph.
    TeamIcon,
    /// Confirmation and ticket wallet use the per-team placeholder table.
    TeamName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub size: u32,
    pub background: Rgb,
    pub foreground: Rgb,
    pub text: String,
}

impl Placeholder {
    fn new(size: u32, background: Rgb, foreground: Rgb, text: impl Into<String>) -> Self {
        Self {
            size,
            background,
            foreground,
            text: text.into(),
        }
    }

    pub fn url(&self) -> String {
        let base = format!(
            "{PLACEHOLDER_BASE}/{size}x{size}/{bg}/{fg}",
            size = self.size,
            bg = self.background.hex(),
            fg = self.foreground.hex(),
        );
        match Url::parse_with_params(&base, &[("text", self.text.as_str())]) {
            Ok(url) => url.into(),
            Err(_) => base,
        }
    }
}

pub fn team_logo_fallback(team_name: &str) -> Placeholder {
    let (background, foreground, text) = match team_name {
        "الأخضر" => (Rgb(0x27, 0xae, 0x60), WHITE, "الأخضر"),
        "الهلال" => (WHITE, BLACK, "🌙"),
        "الاتفاق" => (Rgb(0x29, 0x80, 0xb9), WHITE, "الاتفاق"),
        "الاتحاد" => (WHITE, BLACK, "⚽"),
        "النصر" => (Rgb(0xff, 0xd7, 0x00), BLACK, "النصر"),
        "الشباب" => (BLACK, WHITE, "⚡"),
        _ => (DEFAULT_BACKGROUND, WHITE, "Team"),
    };
    Placeholder::new(80, background, foreground, text)
}

pub fn team_icon_placeholder(icon: &str) -> Placeholder {
    Placeholder::new(100, DEFAULT_BACKGROUND, WHITE, icon)
}

pub fn fallback_for(style: FallbackStyle, team_name: &str, icon: &str) -> Placeholder {
    match style {
        FallbackStyle::TeamIcon => team_icon_placeholder(icon),
        FallbackStyle::TeamName => team_logo_fallback(team_name),
    }
}

#[cfg(test)]
#[path = "tests/logos_tests.rs"]
mod tests;
