use super::*;

use booking_core::MatchCatalog;
use shared::protocol::ScreenKind;

use crate::controller::events::{IntentQueue, UiErrorCategory};

#[test]
fn accepted_intent_clears_banner() {
    let mut flow = BookingFlow::new(MatchCatalog::mock());
    let mut banner = None;

    dispatch_intent(&mut flow, BookingIntent::Pay, &mut banner);
    assert_eq!(
        banner.as_ref().map(UiError::category),
        Some(UiErrorCategory::Navigation)
    );
    assert_eq!(flow.screen_kind(), ScreenKind::Login);

    dispatch_intent(&mut flow, BookingIntent::SubmitCredentials, &mut banner);
    assert!(banner.is_none());
    assert_eq!(flow.screen_kind(), ScreenKind::MatchList);
}

#[test]
fn backdrop_click_dismisses_menu_and_keeps_screen() {
    let mut flow = BookingFlow::new(MatchCatalog::mock());
    let mut banner = None;
    dispatch_intent(&mut flow, BookingIntent::SubmitCredentials, &mut banner);
    dispatch_intent(&mut flow, BookingIntent::OpenMenu, &mut banner);
    assert!(flow.menu_open());

    let mut queue = IntentQueue::default();
    queue.emit_backdrop_click(flow.menu_open(), true);
    let intent = queue.take().expect("close intent");
    dispatch_intent(&mut flow, intent, &mut banner);

    assert!(banner.is_none());
    assert!(!flow.menu_open());
    assert_eq!(flow.screen_kind(), ScreenKind::MatchList);
}
