//! Site palette and egui visuals.

use eframe::egui;

pub const EMERALD_600: egui::Color32 = egui::Color32::from_rgb(5, 150, 105);
pub const EMERALD_800: egui::Color32 = egui::Color32::from_rgb(6, 95, 70);
pub const GREEN_600: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
pub const GREEN_700: egui::Color32 = egui::Color32::from_rgb(21, 128, 61);
pub const GRAY_50: egui::Color32 = egui::Color32::from_rgb(249, 250, 251);
pub const GRAY_100: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);
pub const GRAY_700: egui::Color32 = egui::Color32::from_rgb(55, 65, 81);
pub const GRAY_800: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);
pub const RED_100: egui::Color32 = egui::Color32::from_rgb(254, 226, 226);
pub const RED_600: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
pub const RED_800: egui::Color32 = egui::Color32::from_rgb(153, 27, 27);

pub fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

pub fn site_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = GRAY_100;
    visuals.window_fill = egui::Color32::WHITE;
    visuals.window_corner_radius = egui::CornerRadius::same(8);
    visuals.selection.bg_fill = lighten_color(GREEN_600, 0.6);
    visuals.hyperlink_color = EMERALD_800;
    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_moves_toward_white() {
        assert_eq!(lighten_color(GREEN_700, 0.0), GREEN_700);
        assert_eq!(lighten_color(GREEN_700, 1.0), egui::Color32::WHITE);
        let half = lighten_color(egui::Color32::from_rgb(0, 100, 200), 0.5);
        assert_eq!((half.r(), half.g(), half.b()), (128, 178, 228));
    }
}
