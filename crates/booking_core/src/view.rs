//! Read-only projections of the session handed to the rendering layer.

use shared::domain::{Match, Price, SeatSelection, Ticket};

use crate::flow::{BookingFlow, Screen};

/// Shown wherever a zone/area pair is incomplete.
pub const SEAT_NOT_SELECTED: &str = "لم يتم اختيار المنطقة";
pub const NO_TICKETS_HINT: &str = "لا توجد تذاكر حتى الآن.";

pub fn seat_label(seat: &SeatSelection) -> String {
    seat.summary()
        .unwrap_or_else(|| SEAT_NOT_SELECTED.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView<'a> {
    Login,
    MatchList {
        matches: &'a [Match],
    },
    MatchDetails {
        selected: &'a Match,
        seat: &'a SeatSelection,
    },
    Confirm {
        selected: &'a Match,
        seat_label: String,
        price: Price,
    },
    Payment {
        price: Price,
    },
    Success,
    MyTickets {
        tickets: &'a [Ticket],
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView<'a> {
    pub screen: ScreenView<'a>,
    pub menu_open: bool,
    pub shows_top_bar: bool,
}

impl BookingFlow {
    pub fn view(&self) -> SessionView<'_> {
        let screen = match self.screen() {
            Screen::Login => ScreenView::Login,
            Screen::MatchList => ScreenView::MatchList {
                matches: self.catalog().as_slice(),
            },
            Screen::MatchDetails { selected } => ScreenView::MatchDetails {
                selected,
                seat: self.seat_info(),
            },
            Screen::Confirm { selected } => ScreenView::Confirm {
                selected,
                seat_label: seat_label(self.seat_info()),
                price: selected.price,
            },
            Screen::Payment { selected, .. } => ScreenView::Payment {
                price: selected.price,
            },
            Screen::Success { .. } => ScreenView::Success,
            Screen::MyTickets => ScreenView::MyTickets {
                tickets: self.tickets(),
            },
        };

        SessionView {
            shows_top_bar: !matches!(screen, ScreenView::Login),
            menu_open: self.menu_open(),
            screen,
        }
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
