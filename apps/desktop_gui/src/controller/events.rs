//! UI-facing error modeling for rejected booking intents.

use shared::{
    error::{BookingError, TransitionRejection},
    protocol::{BookingIntent, MenuAction},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    /// The intent is not offered on the current screen.
    Navigation,
    /// A picked value or match id is not in the catalog.
    Validation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    message: String,
}

impl UiError {
    pub fn from_booking_error(err: &BookingError) -> Self {
        let category = match err {
            BookingError::InvalidTransition {
                reason: TransitionRejection::UnknownMatch(_),
                ..
            }
            | BookingError::InvalidSeatValue { .. } => UiErrorCategory::Validation,
            BookingError::InvalidTransition { .. } => UiErrorCategory::Navigation,
        };

        Self {
            category,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn label(&self) -> &'static str {
        match self.category {
            UiErrorCategory::Navigation => "Navigation",
            UiErrorCategory::Validation => "Validation",
        }
    }
}

/// At most one intent per frame: the first user action wins.
#[derive(Debug, Default)]
pub struct IntentQueue {
    pending: Option<BookingIntent>,
}

impl IntentQueue {
    pub fn emit(&mut self, intent: BookingIntent) {
        if self.pending.is_none() {
            self.pending = Some(intent);
        } else {
            tracing::debug!(?intent, "dropping second intent emitted in the same frame");
        }
    }

    pub fn take(&mut self) -> Option<BookingIntent> {
        self.pending.take()
    }

    /// A click on the dimmed screen behind the open side menu dismisses it.
    pub fn emit_backdrop_click(&mut self, menu_open: bool, clicked: bool) {
        if menu_open && clicked {
            self.emit(BookingIntent::Menu(MenuAction::Close));
        }
    }
}

#[cfg(test)]
#[path = "../tests/events_tests.rs"]
mod tests;
