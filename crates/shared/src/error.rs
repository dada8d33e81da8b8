use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::MatchId,
    protocol::{IntentKind, ScreenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatField {
    Zone,
    AreaNumber,
}

impl fmt::Display for SeatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatField::Zone => f.write_str("zone"),
            SeatField::AreaNumber => f.write_str("area_number"),
        }
    }
}

/// Why an intent was refused by the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "match_id", rename_all = "snake_case")]
pub enum TransitionRejection {
    /// The current screen has no transition for this intent.
    NotDefined,
    /// The side menu is open and only accepts menu actions.
    MenuOpen,
    /// A menu action arrived while the side menu is closed.
    MenuClosed,
    UnknownMatch(MatchId),
}

impl fmt::Display for TransitionRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionRejection::NotDefined => f.write_str("not defined on this screen"),
            TransitionRejection::MenuOpen => f.write_str("side menu is open"),
            TransitionRejection::MenuClosed => f.write_str("side menu is closed"),
            TransitionRejection::UnknownMatch(id) => write!(f, "match {id} is not in the catalog"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("invalid transition: {intent} on {screen} ({reason})")]
    InvalidTransition {
        screen: ScreenKind,
        intent: IntentKind,
        reason: TransitionRejection,
    },
    #[error("invalid {field} value {value:?}")]
    InvalidSeatValue { field: SeatField, value: String },
}

impl BookingError {
    pub fn rejection(&self) -> Option<TransitionRejection> {
        match self {
            BookingError::InvalidTransition { reason, .. } => Some(*reason),
            BookingError::InvalidSeatValue { .. } => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate match id {0} in catalog")]
    DuplicateMatchId(MatchId),
    #[error("match {id} has non-positive price {price}")]
    NonPositivePrice { id: MatchId, price: String },
    #[error("failed to read catalog file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset '{0}' not found")]
    NotFound(String),
    #[error("failed to read asset '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode asset '{path}': {message}")]
    Decode { path: String, message: String },
}
