use super::*;

#[test]
fn seat_choice_parses_picker_values() {
    assert_eq!(
        SeatChoice::parse(SeatField::Zone, "Red").expect("zone"),
        SeatChoice::Zone(Some(Zone::Red))
    );
    assert_eq!(
        SeatChoice::parse(SeatField::AreaNumber, "").expect("cleared"),
        SeatChoice::AreaNumber(None)
    );
    assert!(SeatChoice::parse(SeatField::AreaNumber, "999").is_err());
}

#[test]
fn intents_use_adjacently_tagged_json() {
    let intent = BookingIntent::SelectMatch {
        match_id: MatchId(2),
    };
    let json = serde_json::to_value(&intent).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({"type": "select_match", "payload": {"match_id": 2}})
    );

    let script = r#"[
        {"type": "submit_credentials"},
        {"type": "choose_seat", "payload": {"field": "area_number", "value": 104}},
        {"type": "menu", "payload": "logout"}
    ]"#;
    let parsed: Vec<BookingIntent> = serde_json::from_str(script).expect("script");
    assert_eq!(parsed[0], BookingIntent::SubmitCredentials);
    assert_eq!(
        parsed[1],
        BookingIntent::ChooseSeat(SeatChoice::AreaNumber(AreaNumber::new(104)))
    );
    assert_eq!(parsed[2].kind(), IntentKind::Menu(MenuAction::Logout));
}

#[test]
fn rejects_scripted_area_outside_catalog() {
    let script = r#"{"type": "choose_seat", "payload": {"field": "area_number", "value": 117}}"#;
    assert!(serde_json::from_str::<BookingIntent>(script).is_err());
}

#[test]
fn intent_kinds_render_snake_case() {
    assert_eq!(IntentKind::GoToTickets.to_string(), "go_to_tickets");
    assert_eq!(IntentKind::Menu(MenuAction::Home).to_string(), "menu_home");
    assert_eq!(ScreenKind::MyTickets.to_string(), "my_tickets");
}
