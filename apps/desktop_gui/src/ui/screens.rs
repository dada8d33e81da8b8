//! One render function per booking screen. Each reads its projection and
//! emits at most one intent per user action.

use booking_core::{view::NO_TICKETS_HINT, FallbackStyle};
use eframe::egui;
use shared::{
    domain::{AreaNumber, Match, Price, SeatSelection, Ticket, Zone},
    protocol::{BookingIntent, MenuAction, SeatChoice},
};

use crate::{
    controller::events::IntentQueue,
    ui::{
        images::LogoCache,
        theme::{self, card_frame, primary_button, secondary_button},
    },
};

const PAYMENT_METHODS: [&str; 7] = [
    "mada",
    "VISA",
    "MasterCard",
    "Apple Pay",
    "STC Pay",
    "PayPal",
    "تمارا",
];

/// Text typed into the login form. Never validated.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub national_id: String,
}

pub struct ScreenContext<'a> {
    pub logos: &'a mut LogoCache,
    pub intents: &'a mut IntentQueue,
}

fn screen_title(ui: &mut egui::Ui, title: &str) {
    ui.add_space(8.0);
    ui.heading(egui::RichText::new(title).strong());
    ui.add_space(8.0);
}

fn info_box(ui: &mut egui::Ui, label: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(label).small().color(theme::MUTED_TEXT));
        add_contents(ui);
    });
    ui.add_space(6.0);
}

fn team_column(
    ui: &mut egui::Ui,
    logos: &mut LogoCache,
    fixture: &Match,
    home: bool,
    style: FallbackStyle,
    size: f32,
) {
    let team = if home { fixture.home() } else { fixture.away() };
    ui.vertical_centered(|ui| {
        logos.show(ui, team, style, size);
        ui.label(egui::RichText::new(team.name).strong());
    });
}

fn versus_row(ui: &mut egui::Ui, logos: &mut LogoCache, fixture: &Match, style: FallbackStyle, size: f32) {
    ui.columns(3, |columns| {
        team_column(&mut columns[0], logos, fixture, true, style, size);
        columns[1].vertical_centered(|ui| {
            ui.add_space(size * 0.35);
            ui.label(egui::RichText::new("VS").strong().size(18.0));
        });
        team_column(&mut columns[2], logos, fixture, false, style, size);
    });
}

pub fn show_login(ui: &mut egui::Ui, form: &mut LoginForm, intents: &mut IntentQueue) {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.label(
            egui::RichText::new("نفاذ")
                .size(36.0)
                .strong()
                .color(theme::ACCENT),
        );
        ui.add_space(24.0);
    });

    ui.label("رقم السجل المدني");
    let response = ui.add(
        egui::TextEdit::singleline(&mut form.national_id)
            .hint_text("رقم السجل المدني")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(8.0);
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.weak("reCAPTCHA");
    });
    ui.add_space(12.0);

    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    if ui.add(primary_button("تسجيل الدخول")).clicked() || submitted {
        intents.emit(BookingIntent::SubmitCredentials);
    }

    ui.add_space(16.0);
    ui.horizontal(|ui| {
        ui.weak("Download on App Store");
        ui.separator();
        ui.weak("Get it on Google Play");
    });
    ui.add_space(8.0);
    ui.small("لا يوجد لديك حساب نفاذ؟ يمكنك تسجيل الدخول باستخدام حساب أبشر.");
}

pub fn show_match_list(ui: &mut egui::Ui, matches: &[Match], cx: &mut ScreenContext<'_>) {
    screen_title(ui, "المباريات المتاحة");

    for fixture in matches {
        let card = card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            if let Some(time) = fixture.time_label() {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(time).strong().color(theme::ACCENT));
                });
            }
            versus_row(ui, cx.logos, fixture, FallbackStyle::TeamIcon, 64.0);
            ui.horizontal(|ui| {
                ui.weak(fixture.date_label());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(&fixture.stadium);
                });
            });
        });

        let clicked = card
            .response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .clicked();
        if clicked {
            cx.intents.emit(BookingIntent::SelectMatch {
                match_id: fixture.id,
            });
        }
        ui.add_space(8.0);
    }
}

pub fn show_match_details(
    ui: &mut egui::Ui,
    selected: &Match,
    seat: &SeatSelection,
    cx: &mut ScreenContext<'_>,
) {
    ui.horizontal(|ui| {
        if ui.button("←").clicked() {
            cx.intents.emit(BookingIntent::Back);
        }
        ui.heading(egui::RichText::new("تفاصيل المباراة").strong());
    });
    ui.add_space(8.0);

    versus_row(ui, cx.logos, selected, FallbackStyle::TeamIcon, 88.0);
    ui.add_space(8.0);

    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(format!("📅 التاريخ: {}", selected.date_label()));
        ui.label(format!("🏟 الملعب: {}", selected.stadium));
        if let Some(time) = selected.time_label() {
            ui.label(format!("⏰ الوقت: {time}"));
        }
    });
    ui.add_space(10.0);

    ui.label("لون المنطقة");
    let zone_text = seat
        .zone
        .map(|zone| zone.picker_label())
        .unwrap_or_else(|| "اختر لون المنطقة".to_string());
    egui::ComboBox::from_id_salt("zone_picker")
        .selected_text(zone_text)
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            if ui
                .selectable_label(seat.zone.is_none(), "اختر لون المنطقة")
                .clicked()
            {
                cx.intents
                    .emit(BookingIntent::ChooseSeat(SeatChoice::Zone(None)));
            }
            for zone in Zone::ALL {
                let label = egui::RichText::new(zone.picker_label()).color(theme::zone_color(zone));
                if ui.selectable_label(seat.zone == Some(zone), label).clicked() {
                    cx.intents
                        .emit(BookingIntent::ChooseSeat(SeatChoice::Zone(Some(zone))));
                }
            }
        });

    ui.add_space(6.0);
    ui.label("رقم المنطقة");
    let area_text = seat
        .area_number
        .map(|area| area.to_string())
        .unwrap_or_else(|| "اختر رقم المنطقة".to_string());
    egui::ComboBox::from_id_salt("area_picker")
        .selected_text(area_text)
        .width(ui.available_width())
        .height(280.0)
        .show_ui(ui, |ui| {
            if ui
                .selectable_label(seat.area_number.is_none(), "اختر رقم المنطقة")
                .clicked()
            {
                cx.intents
                    .emit(BookingIntent::ChooseSeat(SeatChoice::AreaNumber(None)));
            }
            for area in AreaNumber::all() {
                if ui
                    .selectable_label(seat.area_number == Some(area), area.to_string())
                    .clicked()
                {
                    cx.intents
                        .emit(BookingIntent::ChooseSeat(SeatChoice::AreaNumber(Some(area))));
                }
            }
        });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(selected.price.short()).size(20.0).strong());
        ui.label(egui::RichText::new("🎟").size(20.0));
    });
    ui.add_space(8.0);
    if ui.add(primary_button("NEXT")).clicked() {
        cx.intents.emit(BookingIntent::Proceed);
    }
}

pub fn show_confirm(
    ui: &mut egui::Ui,
    selected: &Match,
    seat_label: &str,
    price: Price,
    cx: &mut ScreenContext<'_>,
) {
    screen_title(ui, "تأكيد الحجز");

    info_box(ui, "المباراة", |ui| {
        versus_row(ui, cx.logos, selected, FallbackStyle::TeamName, 48.0);
    });
    info_box(ui, "التاريخ", |ui| {
        ui.label(selected.date_label());
    });
    info_box(ui, "المدرج / المنطقة", |ui| {
        ui.label(seat_label);
    });
    info_box(ui, "المبلغ", |ui| {
        ui.label(price.to_string());
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.add(secondary_button("رجوع")).clicked() {
            cx.intents.emit(BookingIntent::Back);
        }
        if ui.add(secondary_button("تأكيد").fill(theme::ACCENT)).clicked() {
            cx.intents.emit(BookingIntent::Confirm);
        }
    });
}

pub fn show_payment(ui: &mut egui::Ui, price: Price, intents: &mut IntentQueue) {
    screen_title(ui, "الدفع");

    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(price.short()).size(28.0).strong());
        ui.label(egui::RichText::new("🎟").size(32.0));
    });
    ui.add_space(12.0);

    ui.horizontal_wrapped(|ui| {
        for method in PAYMENT_METHODS {
            card_frame().show(ui, |ui| {
                ui.label(method);
            });
        }
    });
    ui.add_space(16.0);

    ui.horizontal(|ui| {
        if ui.add(secondary_button("رجوع")).clicked() {
            intents.emit(BookingIntent::Back);
        }
        let pay = egui::Button::new(
            egui::RichText::new("Buy with  Pay")
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(egui::Color32::BLACK)
        .min_size(egui::vec2(160.0, 36.0));
        if ui.add(pay).clicked() {
            intents.emit(BookingIntent::Pay);
        }
    });
}

pub fn show_success(ui: &mut egui::Ui, intents: &mut IntentQueue) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.heading(egui::RichText::new("تم الحجز").size(28.0).strong());
        ui.label(egui::RichText::new("🥳").size(56.0));
        ui.add_space(24.0);
        if ui.add(primary_button("الذهاب إلى التذاكر")).clicked() {
            intents.emit(BookingIntent::GoToTickets);
        }
    });
}

pub fn show_my_tickets(ui: &mut egui::Ui, tickets: &[Ticket], cx: &mut ScreenContext<'_>) {
    screen_title(ui, "تذاكري");

    if tickets.is_empty() {
        ui.weak(NO_TICKETS_HINT);
    }

    for ticket in tickets {
        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            versus_row(ui, cx.logos, &ticket.match_info, FallbackStyle::TeamName, 48.0);
            ui.horizontal(|ui| {
                ui.weak(&ticket.match_info.stadium);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(ticket.match_info.date_label());
                });
            });
            ui.label(
                egui::RichText::new(booking_core::seat_label(&ticket.seat_info)).strong(),
            );
            ui.horizontal(|ui| {
                // Details and resale have no flow behind them yet.
                ui.add_enabled(false, egui::Button::new("التفاصيل"));
                ui.add_enabled(false, egui::Button::new("إعادة البيع"));
            });
        });
        ui.add_space(8.0);
    }

    ui.add_space(8.0);
    if ui.add(secondary_button("رجوع إلى المباريات")).clicked() {
        cx.intents.emit(BookingIntent::Back);
    }
}

pub fn show_side_menu(ctx: &egui::Context, intents: &mut IntentQueue) {
    egui::SidePanel::left("side_menu")
        .resizable(false)
        .exact_width(240.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new("Aboor").strong().color(theme::ACCENT));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✕").clicked() {
                        intents.emit(BookingIntent::Menu(MenuAction::Close));
                    }
                });
            });
            ui.separator();

            let entries = [
                ("المباريات", MenuAction::Home),
                ("تذاكري", MenuAction::Tickets),
                ("تسجيل الخروج", MenuAction::Logout),
            ];
            for (label, action) in entries {
                let item = egui::Button::new(egui::RichText::new(label).size(16.0))
                    .frame(false)
                    .min_size(egui::vec2(ui.available_width(), 36.0));
                if ui.add(item).clicked() {
                    intents.emit(BookingIntent::Menu(action));
                }
            }
        });
}
