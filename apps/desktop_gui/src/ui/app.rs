use booking_core::{BookingFlow, DirectoryAssets, ScreenView};
use eframe::egui;
use shared::protocol::BookingIntent;

use crate::{
    config::StartupConfig,
    controller::{
        events::{IntentQueue, UiError, UiErrorCategory},
        orchestration::dispatch_intent,
    },
    ui::{
        images::LogoCache,
        screens::{self, LoginForm, ScreenContext},
        theme,
    },
};

pub struct BookingGuiApp {
    flow: BookingFlow,
    logos: LogoCache,
    login: LoginForm,
    status_banner: Option<UiError>,
}

impl BookingGuiApp {
    pub fn new(cc: &eframe::CreationContext<'_>, flow: BookingFlow, startup: &StartupConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        tracing::info!(
            assets_dir = %startup.assets_dir.display(),
            matches = flow.catalog().len(),
            "booking gui started"
        );

        Self {
            flow,
            logos: LogoCache::new(DirectoryAssets::new(&startup.assets_dir)),
            login: LoginForm::default(),
            status_banner: None,
        }
    }

    fn show_top_bar(ctx: &egui::Context, intents: &mut IntentQueue) {
        egui::TopBottomPanel::top("booking_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(egui::RichText::new("☰").size(20.0)).clicked() {
                    intents.emit(BookingIntent::OpenMenu);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new("Aboor")
                            .strong()
                            .size(18.0)
                            .color(theme::ACCENT),
                    );
                });
            });
        });
    }

    fn show_status_banner(ctx: &egui::Context, status_banner: &mut Option<UiError>) {
        let Some(banner) = status_banner.clone() else {
            return;
        };
        egui::TopBottomPanel::bottom("booking_status_banner")
            .frame(
                egui::Frame::NONE
                    .fill(theme::ERROR_FILL)
                    .inner_margin(egui::Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let tag = match banner.category() {
                        UiErrorCategory::Navigation => "⚠",
                        UiErrorCategory::Validation => "✖",
                    };
                    ui.label(format!("{tag} {}: {}", banner.label(), banner.message()));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").clicked() {
                            *status_banner = None;
                        }
                    });
                });
            });
    }
}

impl eframe::App for BookingGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut intents = IntentQueue::default();
        let view = self.flow.view();

        if view.shows_top_bar {
            Self::show_top_bar(ctx, &mut intents);
        }
        Self::show_status_banner(ctx, &mut self.status_banner);
        if view.menu_open {
            screens::show_side_menu(ctx, &mut intents);
        }

        let logos = &mut self.logos;
        let login = &mut self.login;
        let central = egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!view.menu_open, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.set_max_width(theme::PHONE_WIDTH);
                    let mut cx = ScreenContext {
                        logos,
                        intents: &mut intents,
                    };
                    match &view.screen {
                        ScreenView::Login => screens::show_login(ui, login, cx.intents),
                        ScreenView::MatchList { matches } => {
                            screens::show_match_list(ui, matches, &mut cx)
                        }
                        ScreenView::MatchDetails { selected, seat } => {
                            screens::show_match_details(ui, selected, seat, &mut cx)
                        }
                        ScreenView::Confirm {
                            selected,
                            seat_label,
                            price,
                        } => screens::show_confirm(ui, selected, seat_label, *price, &mut cx),
                        ScreenView::Payment { price } => {
                            screens::show_payment(ui, *price, cx.intents)
                        }
                        ScreenView::Success => screens::show_success(ui, cx.intents),
                        ScreenView::MyTickets { tickets } => {
                            screens::show_my_tickets(ui, tickets, &mut cx)
                        }
                    }
                });
            });
            if view.menu_open {
                ui.painter()
                    .rect_filled(ui.max_rect(), 0.0, egui::Color32::from_black_alpha(96));
            }
        });
        let backdrop_clicked =
            view.menu_open && central.response.interact(egui::Sense::click()).clicked();
        intents.emit_backdrop_click(view.menu_open, backdrop_clicked);

        if let Some(intent) = intents.take() {
            dispatch_intent(&mut self.flow, intent, &mut self.status_banner);
            ctx.request_repaint();
        }
    }
}
