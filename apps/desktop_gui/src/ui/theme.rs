use eframe::egui;
use shared::domain::Zone;

pub const PHONE_WIDTH: f32 = 390.0;
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x1b, 0x8a, 0x5a);
pub const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(0xf4, 0xf6, 0xf8);
pub const CARD_STROKE: egui::Color32 = egui::Color32::from_rgb(0xdc, 0xe1, 0xe6);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(0x6b, 0x72, 0x80);
pub const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(0xfd, 0xe8, 0xe8);

pub fn zone_color(zone: Zone) -> egui::Color32 {
    match zone {
        Zone::Red => egui::Color32::from_rgb(0xe7, 0x4c, 0x3c),
        Zone::Yellow => egui::Color32::from_rgb(0xf1, 0xc4, 0x0f),
        Zone::Green => egui::Color32::from_rgb(0x2e, 0xcc, 0x71),
        Zone::Blue => egui::Color32::from_rgb(0x34, 0x98, 0xdb),
        Zone::Pink => egui::Color32::from_rgb(0xff, 0x7e, 0xb6),
        Zone::Orange => egui::Color32::from_rgb(0xe6, 0x7e, 0x22),
        Zone::Cyan => egui::Color32::from_rgb(0x1a, 0xbc, 0xd4),
    }
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(CARD_FILL)
        .corner_radius(12.0)
        .stroke(egui::Stroke::new(1.0, CARD_STROKE))
        .inner_margin(egui::Margin::symmetric(14, 12))
}

pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.to_string())
            .strong()
            .size(16.0)
            .color(egui::Color32::WHITE),
    )
    .fill(ACCENT)
    .min_size(egui::vec2(PHONE_WIDTH - 48.0, 40.0))
}

pub fn secondary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).size(15.0))
        .stroke(egui::Stroke::new(1.0, CARD_STROKE))
        .min_size(egui::vec2(120.0, 36.0))
}
