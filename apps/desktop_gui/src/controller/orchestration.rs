//! Dispatch helpers from UI actions to the booking flow.

use booking_core::BookingFlow;
use shared::protocol::BookingIntent;

use crate::controller::events::UiError;

/// Applies one intent; a rejection is surfaced through the status banner
/// and the flow stays where it was.
pub fn dispatch_intent(
    flow: &mut BookingFlow,
    intent: BookingIntent,
    status_banner: &mut Option<UiError>,
) {
    let intent_name = intent.kind();
    match flow.apply(intent) {
        Ok(screen) => {
            tracing::debug!(intent = %intent_name, screen = %screen, "applied ui intent");
            *status_banner = None;
        }
        Err(err) => {
            *status_banner = Some(UiError::from_booking_error(&err));
        }
    }
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
