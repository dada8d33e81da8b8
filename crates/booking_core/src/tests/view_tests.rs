use super::*;

use shared::{
    domain::{AreaNumber, MatchId, Zone},
    protocol::{BookingIntent, SeatChoice},
};

use crate::catalog::MatchCatalog;

fn at_details() -> BookingFlow {
    let mut flow = BookingFlow::new(MatchCatalog::mock());
    flow.apply(BookingIntent::SubmitCredentials).expect("login");
    flow.apply(BookingIntent::SelectMatch {
        match_id: MatchId(1),
    })
    .expect("select");
    flow
}

#[test]
fn login_hides_top_bar() {
    let flow = BookingFlow::new(MatchCatalog::mock());
    let view = flow.view();
    assert_eq!(view.screen, ScreenView::Login);
    assert!(!view.shows_top_bar);
}

#[test]
fn match_list_projects_whole_catalog() {
    let mut flow = BookingFlow::new(MatchCatalog::mock());
    flow.apply(BookingIntent::SubmitCredentials).expect("login");
    let view = flow.view();
    assert!(view.shows_top_bar);
    match view.screen {
        ScreenView::MatchList { matches } => assert_eq!(matches.len(), 3),
        other => panic!("unexpected screen {other:?}"),
    }
}

#[test]
fn confirm_shows_not_selected_message_when_seat_is_incomplete() {
    let mut flow = at_details();
    flow.apply(BookingIntent::ChooseSeat(SeatChoice::Zone(Some(Zone::Red))))
        .expect("zone");
    flow.apply(BookingIntent::Proceed).expect("proceed");

    match flow.view().screen {
        ScreenView::Confirm {
            seat_label, price, ..
        } => {
            assert_eq!(seat_label, SEAT_NOT_SELECTED);
            assert_eq!(price.to_string(), "50.00 SAR");
        }
        other => panic!("unexpected screen {other:?}"),
    }
}

#[test]
fn confirm_shows_zone_and_area() {
    let mut flow = at_details();
    flow.apply(BookingIntent::ChooseSeat(SeatChoice::Zone(Some(Zone::Green))))
        .expect("zone");
    flow.apply(BookingIntent::ChooseSeat(SeatChoice::AreaNumber(
        AreaNumber::new(130),
    )))
    .expect("area");
    flow.apply(BookingIntent::Proceed).expect("proceed");

    match flow.view().screen {
        ScreenView::Confirm { seat_label, .. } => assert_eq!(seat_label, "Green - Area 130"),
        other => panic!("unexpected screen {other:?}"),
    }
}

#[test]
fn payment_projects_selected_price() {
    let mut flow = at_details();
    flow.apply(BookingIntent::Proceed).expect("proceed");
    flow.apply(BookingIntent::Confirm).expect("confirm");
    assert_eq!(
        flow.view().screen,
        ScreenView::Payment {
            price: shared::domain::Price::from(50),
        }
    );
}

#[test]
fn menu_flag_is_projected() {
    let mut flow = at_details();
    flow.apply(BookingIntent::OpenMenu).expect("open");
    assert!(flow.view().menu_open);
}
