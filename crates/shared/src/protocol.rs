use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{AreaNumber, MatchId, Zone},
    error::{BookingError, SeatField},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenKind {
    Login,
    MatchList,
    MatchDetails,
    Confirm,
    Payment,
    Success,
    MyTickets,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 7] = [
        ScreenKind::Login,
        ScreenKind::MatchList,
        ScreenKind::MatchDetails,
        ScreenKind::Confirm,
        ScreenKind::Payment,
        ScreenKind::Success,
        ScreenKind::MyTickets,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenKind::Login => "login",
            ScreenKind::MatchList => "match_list",
            ScreenKind::MatchDetails => "match_details",
            ScreenKind::Confirm => "confirm",
            ScreenKind::Payment => "payment",
            ScreenKind::Success => "success",
            ScreenKind::MyTickets => "my_tickets",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ScreenKind::Login => "نفاذ",
            ScreenKind::MatchList => "المباريات المتاحة",
            ScreenKind::MatchDetails => "تفاصيل المباراة",
            ScreenKind::Confirm => "تأكيد الحجز",
            ScreenKind::Payment => "الدفع",
            ScreenKind::Success => "تم الحجز",
            ScreenKind::MyTickets => "تذاكري",
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    Close,
    Home,
    Tickets,
    Logout,
}

/// A single seat field update. `None` clears the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum SeatChoice {
    Zone(Option<Zone>),
    AreaNumber(Option<AreaNumber>),
}

impl SeatChoice {
    /// Builds a choice from a picker's raw string value; an empty value
    /// means "nothing picked".
    pub fn parse(field: SeatField, raw: &str) -> Result<Self, BookingError> {
        let raw = raw.trim();
        match field {
            SeatField::Zone if raw.is_empty() => Ok(SeatChoice::Zone(None)),
            SeatField::Zone => raw.parse().map(|zone| SeatChoice::Zone(Some(zone))),
            SeatField::AreaNumber if raw.is_empty() => Ok(SeatChoice::AreaNumber(None)),
            SeatField::AreaNumber => raw
                .parse()
                .map(|area| SeatChoice::AreaNumber(Some(area))),
        }
    }

    pub fn field(&self) -> SeatField {
        match self {
            SeatChoice::Zone(_) => SeatField::Zone,
            SeatChoice::AreaNumber(_) => SeatField::AreaNumber,
        }
    }
}

/// User intents accepted by the booking flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum BookingIntent {
    SubmitCredentials,
    SelectMatch { match_id: MatchId },
    ChooseSeat(SeatChoice),
    Proceed,
    Back,
    Confirm,
    Pay,
    GoToTickets,
    OpenMenu,
    Menu(MenuAction),
}

impl BookingIntent {
    pub fn kind(&self) -> IntentKind {
        match self {
            BookingIntent::SubmitCredentials => IntentKind::SubmitCredentials,
            BookingIntent::SelectMatch { .. } => IntentKind::SelectMatch,
            BookingIntent::ChooseSeat(_) => IntentKind::ChooseSeat,
            BookingIntent::Proceed => IntentKind::Proceed,
            BookingIntent::Back => IntentKind::Back,
            BookingIntent::Confirm => IntentKind::Confirm,
            BookingIntent::Pay => IntentKind::Pay,
            BookingIntent::GoToTickets => IntentKind::GoToTickets,
            BookingIntent::OpenMenu => IntentKind::OpenMenu,
            BookingIntent::Menu(action) => IntentKind::Menu(*action),
        }
    }
}

/// Payload-free tag of a [`BookingIntent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    SubmitCredentials,
    SelectMatch,
    ChooseSeat,
    Proceed,
    Back,
    Confirm,
    Pay,
    GoToTickets,
    OpenMenu,
    Menu(MenuAction),
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntentKind::SubmitCredentials => f.write_str("submit_credentials"),
            IntentKind::SelectMatch => f.write_str("select_match"),
            IntentKind::ChooseSeat => f.write_str("choose_seat"),
            IntentKind::Proceed => f.write_str("proceed"),
            IntentKind::Back => f.write_str("back"),
            IntentKind::Confirm => f.write_str("confirm"),
            IntentKind::Pay => f.write_str("pay"),
            IntentKind::GoToTickets => f.write_str("go_to_tickets"),
            IntentKind::OpenMenu => f.write_str("open_menu"),
            IntentKind::Menu(MenuAction::Close) => f.write_str("menu_close"),
            IntentKind::Menu(MenuAction::Home) => f.write_str("menu_home"),
            IntentKind::Menu(MenuAction::Tickets) => f.write_str("menu_tickets"),
            IntentKind::Menu(MenuAction::Logout) => f.write_str("menu_logout"),
        }
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
