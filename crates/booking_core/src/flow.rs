//! Booking flow controller: the screen state machine, its side-menu overlay
//! and the session data carried between screens.

use chrono::Utc;
use serde::Serialize;
use shared::{
    domain::{Match, MatchId, SeatSelection, Ticket, TicketId},
    error::{BookingError, TransitionRejection},
    protocol::{BookingIntent, IntentKind, MenuAction, ScreenKind, SeatChoice},
};
use tracing::{debug, info, warn};

use crate::catalog::MatchCatalog;

/// What happens to issued tickets when the user logs out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoutPolicy {
    #[default]
    PreserveTickets,
    ClearTickets,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowSettings {
    pub logout_policy: LogoutPolicy,
}

/// Current screen together with the data it needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login,
    MatchList,
    MatchDetails { selected: Match },
    Confirm { selected: Match },
    Payment { selected: Match, ticket_id: TicketId },
    Success { ticket_id: TicketId },
    MyTickets,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Login => ScreenKind::Login,
            Screen::MatchList => ScreenKind::MatchList,
            Screen::MatchDetails { .. } => ScreenKind::MatchDetails,
            Screen::Confirm { .. } => ScreenKind::Confirm,
            Screen::Payment { .. } => ScreenKind::Payment,
            Screen::Success { .. } => ScreenKind::Success,
            Screen::MyTickets => ScreenKind::MyTickets,
        }
    }

    pub fn selected_match(&self) -> Option<&Match> {
        match self {
            Screen::MatchDetails { selected }
            | Screen::Confirm { selected }
            | Screen::Payment { selected, .. } => Some(selected),
            _ => None,
        }
    }
}

/// Hands out ticket ids; never reuses one within a session.
#[derive(Debug, Clone)]
pub struct TicketIdAllocator {
    next: i64,
}

impl TicketIdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn allocate(&mut self) -> TicketId {
        let id = TicketId(self.next);
        self.next += 1;
        id
    }
}

impl Default for TicketIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable summary of the session, used by scripted drivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub screen: ScreenKind,
    pub menu_open: bool,
    pub selected_match: Option<MatchId>,
    pub seat_info: SeatSelection,
    pub tickets: Vec<Ticket>,
}

enum Step {
    Screen(Screen),
    Seat(SeatChoice),
    Issue(Match),
    Menu { open: bool, screen: Option<Screen> },
    Logout,
}

#[derive(Debug, Clone)]
pub struct BookingFlow {
    catalog: MatchCatalog,
    settings: FlowSettings,
    screen: Screen,
    menu_open: bool,
    seat_info: SeatSelection,
    tickets: Vec<Ticket>,
    ticket_ids: TicketIdAllocator,
}

impl BookingFlow {
    pub fn new(catalog: MatchCatalog) -> Self {
        Self::with_settings(catalog, FlowSettings::default())
    }

    pub fn with_settings(catalog: MatchCatalog, settings: FlowSettings) -> Self {
        Self {
            catalog,
            settings,
            screen: Screen::Login,
            menu_open: false,
            seat_info: SeatSelection::default(),
            tickets: Vec::new(),
            ticket_ids: TicketIdAllocator::new(),
        }
    }

    pub fn catalog(&self) -> &MatchCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> FlowSettings {
        self.settings
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn selected_match(&self) -> Option<&Match> {
        self.screen.selected_match()
    }

    pub fn seat_info(&self) -> &SeatSelection {
        &self.seat_info
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            screen: self.screen_kind(),
            menu_open: self.menu_open,
            selected_match: self.selected_match().map(|fixture| fixture.id),
            seat_info: self.seat_info,
            tickets: self.tickets.clone(),
        }
    }

    /// Intent kinds the current screen and overlay accept.
    pub fn available_intents(&self) -> Vec<IntentKind> {
        if self.menu_open {
            return vec![
                IntentKind::Menu(MenuAction::Close),
                IntentKind::Menu(MenuAction::Home),
                IntentKind::Menu(MenuAction::Tickets),
                IntentKind::Menu(MenuAction::Logout),
            ];
        }

        let mut intents = match &self.screen {
            Screen::Login => vec![IntentKind::SubmitCredentials],
            Screen::MatchList if self.catalog.is_empty() => Vec::new(),
            Screen::MatchList => vec![IntentKind::SelectMatch],
            Screen::MatchDetails { .. } => vec![
                IntentKind::ChooseSeat,
                IntentKind::Proceed,
                IntentKind::Back,
            ],
            Screen::Confirm { .. } => vec![IntentKind::Confirm, IntentKind::Back],
            Screen::Payment { .. } => vec![IntentKind::Pay, IntentKind::Back],
            Screen::Success { .. } => vec![IntentKind::GoToTickets],
            Screen::MyTickets => vec![IntentKind::Back],
        };
        if self.screen.kind() != ScreenKind::Login {
            intents.push(IntentKind::OpenMenu);
        }
        intents
    }

    /// Applies one intent. A rejected intent leaves the session untouched.
    pub fn apply(&mut self, intent: BookingIntent) -> Result<ScreenKind, BookingError> {
        let from = self.screen_kind();
        let kind = intent.kind();
        let step = match self.plan(intent) {
            Ok(step) => step,
            Err(err) => {
                warn!(screen = %from, intent = %kind, error = %err, "rejected booking intent");
                return Err(err);
            }
        };

        self.commit(step);
        let to = self.screen_kind();
        info!(from = %from, to = %to, intent = %kind, menu_open = self.menu_open, "booking transition");
        Ok(to)
    }

    fn plan(&self, intent: BookingIntent) -> Result<Step, BookingError> {
        let kind = intent.kind();
        let reject = |reason| BookingError::InvalidTransition {
            screen: self.screen_kind(),
            intent: kind,
            reason,
        };

        if let BookingIntent::Menu(action) = intent {
            if !self.menu_open {
                return Err(reject(TransitionRejection::MenuClosed));
            }
            return Ok(match action {
                MenuAction::Close => Step::Menu {
                    open: false,
                    screen: None,
                },
                MenuAction::Home => Step::Menu {
                    open: false,
                    screen: Some(Screen::MatchList),
                },
                MenuAction::Tickets => Step::Menu {
                    open: false,
                    screen: Some(Screen::MyTickets),
                },
                MenuAction::Logout => Step::Logout,
            });
        }

        if self.menu_open {
            return Err(reject(TransitionRejection::MenuOpen));
        }

        let step = match (&self.screen, intent) {
            (Screen::Login, BookingIntent::OpenMenu) => {
                return Err(reject(TransitionRejection::NotDefined))
            }
            (_, BookingIntent::OpenMenu) => Step::Menu {
                open: true,
                screen: None,
            },
            (Screen::Login, BookingIntent::SubmitCredentials) => Step::Screen(Screen::MatchList),
            (Screen::MatchList, BookingIntent::SelectMatch { match_id }) => {
                let selected = self
                    .catalog
                    .get(match_id)
                    .cloned()
                    .ok_or_else(|| reject(TransitionRejection::UnknownMatch(match_id)))?;
                Step::Screen(Screen::MatchDetails { selected })
            }
            (Screen::MatchDetails { .. }, BookingIntent::ChooseSeat(choice)) => Step::Seat(choice),
            (Screen::MatchDetails { selected }, BookingIntent::Proceed) => {
                Step::Screen(Screen::Confirm {
                    selected: selected.clone(),
                })
            }
            (Screen::MatchDetails { .. }, BookingIntent::Back) => Step::Screen(Screen::MatchList),
            (Screen::Confirm { selected }, BookingIntent::Confirm) => Step::Issue(selected.clone()),
            (Screen::Confirm { selected }, BookingIntent::Back) => {
                Step::Screen(Screen::MatchDetails {
                    selected: selected.clone(),
                })
            }
            (Screen::Payment { ticket_id, .. }, BookingIntent::Pay) => {
                Step::Screen(Screen::Success {
                    ticket_id: *ticket_id,
                })
            }
            (Screen::Payment { selected, .. }, BookingIntent::Back) => {
                Step::Screen(Screen::Confirm {
                    selected: selected.clone(),
                })
            }
            (Screen::Success { .. }, BookingIntent::GoToTickets) => Step::Screen(Screen::MyTickets),
            (Screen::MyTickets, BookingIntent::Back) => Step::Screen(Screen::MatchList),
            _ => return Err(reject(TransitionRejection::NotDefined)),
        };
        Ok(step)
    }

    fn commit(&mut self, step: Step) {
        match step {
            Step::Screen(screen) => self.screen = screen,
            Step::Seat(choice) => {
                match choice {
                    SeatChoice::Zone(zone) => self.seat_info.zone = zone,
                    SeatChoice::AreaNumber(area) => self.seat_info.area_number = area,
                }
                debug!(field = %choice.field(), seat = ?self.seat_info, "seat selection updated");
            }
            Step::Issue(selected) => {
                let ticket = Ticket {
                    id: self.ticket_ids.allocate(),
                    match_info: selected.clone(),
                    seat_info: self.seat_info,
                    issued_at: Utc::now(),
                };
                info!(
                    ticket_id = %ticket.id,
                    match_id = %selected.id,
                    seat = ?ticket.seat_info,
                    "issued ticket"
                );
                self.screen = Screen::Payment {
                    selected,
                    ticket_id: ticket.id,
                };
                self.tickets.push(ticket);
            }
            Step::Menu { open, screen } => {
                self.menu_open = open;
                if let Some(screen) = screen {
                    self.screen = screen;
                }
            }
            Step::Logout => {
                self.menu_open = false;
                self.screen = Screen::Login;
                self.seat_info = SeatSelection::default();
                if self.settings.logout_policy == LogoutPolicy::ClearTickets {
                    self.tickets.clear();
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/flow_tests.rs"]
mod tests;
