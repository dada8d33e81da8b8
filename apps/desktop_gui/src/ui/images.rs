//! Team logo textures with placeholder fallback.

use std::collections::HashMap;

use booking_core::{
    logos::Rgb, resolve_team_image, AssetSource, DirectoryAssets, FallbackStyle, Placeholder,
    ResolvedImage,
};
use eframe::egui;
use shared::{domain::TeamRef, error::AssetError};

/// Decodes files from the asset directory into egui textures.
struct TextureAssets<'a> {
    files: &'a DirectoryAssets,
    ctx: &'a egui::Context,
}

impl AssetSource for TextureAssets<'_> {
    type Image = egui::TextureHandle;

    fn load(&self, path: &str) -> Result<Self::Image, AssetError> {
        let bytes = self.files.load(path)?;
        let decoded = image::load_from_memory(&bytes).map_err(|err| AssetError::Decode {
            path: path.to_string(),
            message: err.to_string(),
        })?;
        let rgba = decoded.to_rgba8();
        let [w, h] = [rgba.width() as usize, rgba.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied([w, h], rgba.as_raw());
        Ok(self.ctx.load_texture(
            format!("team-logo:{path}"),
            color_image,
            egui::TextureOptions::LINEAR,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LogoKey {
    team: String,
    path: String,
    style: FallbackStyle,
}

/// Resolves each (team, logo, style) once per session so failed loads are
/// not retried every frame.
pub struct LogoCache {
    files: DirectoryAssets,
    resolved: HashMap<LogoKey, ResolvedImage<egui::TextureHandle>>,
}

impl LogoCache {
    pub fn new(files: DirectoryAssets) -> Self {
        Self {
            files,
            resolved: HashMap::new(),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, team: TeamRef<'_>, style: FallbackStyle, size: f32) {
        let key = LogoKey {
            team: team.name.to_string(),
            path: team.logo.to_string(),
            style,
        };
        let files = &self.files;
        let resolved = self.resolved.entry(key).or_insert_with(|| {
            let source = TextureAssets {
                files,
                ctx: ui.ctx(),
            };
            resolve_team_image(&source, team, style)
        });

        match resolved {
            ResolvedImage::Loaded(texture) => {
                ui.add(
                    egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                        .fit_to_exact_size(egui::vec2(size, size)),
                );
            }
            ResolvedImage::Fallback(placeholder) => paint_placeholder(ui, placeholder, size),
        }
    }
}

fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

fn paint_placeholder(ui: &mut egui::Ui, placeholder: &Placeholder, size: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.circle_filled(rect.center(), size * 0.5, color(placeholder.background));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        &placeholder.text,
        egui::FontId::proportional(size * 0.28),
        color(placeholder.foreground),
    );
}
