use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, SeatField};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(MatchId);
id_newtype!(TicketId);

/// Ticket price in Saudi riyals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub Decimal);

impl Price {
    pub const CURRENCY: &'static str = "SAR";

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Whole amounts without decimals (`50 SAR`), fractional ones as-is.
    pub fn short(&self) -> String {
        let amount = self.0.normalize();
        format!("{amount} {}", Self::CURRENCY)
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.0, Self::CURRENCY)
    }
}

/// Colour-coded stadium zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Red,
    Yellow,
    Green,
    Blue,
    Pink,
    Orange,
    Cyan,
}

impl Zone {
    pub const ALL: [Zone; 7] = [
        Zone::Red,
        Zone::Yellow,
        Zone::Green,
        Zone::Blue,
        Zone::Pink,
        Zone::Orange,
        Zone::Cyan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Red => "Red",
            Zone::Yellow => "Yellow",
            Zone::Green => "Green",
            Zone::Blue => "Blue",
            Zone::Pink => "Pink",
            Zone::Orange => "Orange",
            Zone::Cyan => "Cyan",
        }
    }

    pub fn arabic_label(&self) -> &'static str {
        match self {
            Zone::Red => "أحمر",
            Zone::Yellow => "أصفر",
            Zone::Green => "أخضر",
            Zone::Blue => "أزرق",
            Zone::Pink => "وردي",
            Zone::Orange => "برتقالي",
            Zone::Cyan => "سماوي",
        }
    }

    /// Option label as shown in the zone picker, e.g. `أحمر (Red)`.
    pub fn picker_label(&self) -> String {
        format!("{} ({})", self.arabic_label(), self.as_str())
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zone {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zone::ALL
            .into_iter()
            .find(|zone| zone.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BookingError::InvalidSeatValue {
                field: SeatField::Zone,
                value: s.to_string(),
            })
    }
}

/// Stadium sections that can be booked. Not contiguous.
pub const AREA_NUMBERS: [u16; 55] = [
    104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114, 115, 116, //
    119, 120, 121, //
    125, 126, //
    130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140, //
    201, 202, 203, 204, 205, 206, 207, 208, 209, 210, 211, 212, 213, 214, 215, 216, 217, 218,
    219, 220, 221, 222, 223, 224, 225, 226,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct AreaNumber(u16);

impl AreaNumber {
    pub fn new(code: u16) -> Option<Self> {
        AREA_NUMBERS.contains(&code).then_some(Self(code))
    }

    pub fn code(&self) -> u16 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = AreaNumber> {
        AREA_NUMBERS.into_iter().map(AreaNumber)
    }
}

impl TryFrom<u16> for AreaNumber {
    type Error = BookingError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::new(code).ok_or_else(|| BookingError::InvalidSeatValue {
            field: SeatField::AreaNumber,
            value: code.to_string(),
        })
    }
}

impl From<AreaNumber> for u16 {
    fn from(value: AreaNumber) -> Self {
        value.0
    }
}

impl FromStr for AreaNumber {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .ok()
            .and_then(AreaNumber::new)
            .ok_or_else(|| BookingError::InvalidSeatValue {
                field: SeatField::AreaNumber,
                value: s.to_string(),
            })
    }
}

impl fmt::Display for AreaNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSelection {
    pub zone: Option<Zone>,
    pub area_number: Option<AreaNumber>,
}

impl SeatSelection {
    pub fn new(zone: Zone, area_number: AreaNumber) -> Self {
        Self {
            zone: Some(zone),
            area_number: Some(area_number),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.zone.is_some() && self.area_number.is_some()
    }

    /// `Red - Area 104`, or `None` while either field is unset.
    pub fn summary(&self) -> Option<String> {
        match (self.zone, self.area_number) {
            (Some(zone), Some(area)) => Some(format!("{zone} - Area {area}")),
            _ => None,
        }
    }
}

/// One side of a fixture, borrowed from a [`Match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamRef<'a> {
    pub name: &'a str,
    pub icon: &'a str,
    pub logo: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub home_team: String,
    pub home_team_icon: String,
    #[serde(default)]
    pub home_team_logo: String,
    pub away_team: String,
    pub away_team_icon: String,
    #[serde(default)]
    pub away_team_logo: String,
    pub date: NaiveDate,
    #[serde(default, with = "hh_mm")]
    pub time: Option<NaiveTime>,
    pub stadium: String,
    pub price: Price,
}

impl Match {
    pub fn home(&self) -> TeamRef<'_> {
        TeamRef {
            name: &self.home_team,
            icon: &self.home_team_icon,
            logo: &self.home_team_logo,
        }
    }

    pub fn away(&self) -> TeamRef<'_> {
        TeamRef {
            name: &self.away_team,
            icon: &self.away_team_icon,
            logo: &self.away_team_logo,
        }
    }

    pub fn title(&self) -> String {
        format!("{} VS {}", self.home_team, self.away_team)
    }

    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_label(&self) -> Option<String> {
        self.time.map(|time| time.format("%H:%M").to_string())
    }

    /// Date and, when known, kick-off time: `2026-02-17 21:00`.
    pub fn kickoff_label(&self) -> String {
        match self.time_label() {
            Some(time) => format!("{} {time}", self.date_label()),
            None => self.date_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub match_info: Match,
    pub seat_info: SeatSelection,
    pub issued_at: DateTime<Utc>,
}

/// Serde adapter for optional `HH:MM` clock times.
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_some(&time.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => NaiveTime::parse_from_str(text, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
