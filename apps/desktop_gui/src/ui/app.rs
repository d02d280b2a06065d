use std::{collections::HashMap, time::Duration};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::TextureHandle;
use shared::{
    catalog,
    domain::MenuItemId,
    error::Notice,
    view::{ButtonView, InputView, MenuCard, NavBar, PageContent, UiAction, ViewDescriptor},
};
use site_core::{ImageSlot, ViewController};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{DecodedImage, UiEvent},
    notifier::GuiNotifier,
    orchestration::{apply_ui_actions, dispatch_backend_command},
};
use crate::ui::theme;

const CARD_WIDTH: f32 = 280.0;
const CARD_IMAGE_HEIGHT: f32 = 180.0;

enum ImagePhase {
    Idle,
    Loading,
    Decoded(DecodedImage),
    Ready(TextureHandle),
    Unavailable,
}

struct CardImage {
    slot: ImageSlot,
    phase: ImagePhase,
}

/// What the UI should do after a card image failed to load.
#[derive(Debug, PartialEq, Eq)]
enum FailureFollowUp {
    Stale,
    Retry(String),
    GiveUp,
}

impl CardImage {
    fn new(card: &MenuCard) -> Self {
        Self {
            slot: ImageSlot::new(card.image.clone()),
            phase: ImagePhase::Idle,
        }
    }

    fn on_loaded(&mut self, url: &str, image: DecodedImage) {
        if self.slot.current_url() == url {
            self.phase = ImagePhase::Decoded(image);
        }
    }

    fn on_failed(&mut self, url: &str) -> FailureFollowUp {
        if self.slot.current_url() != url {
            return FailureFollowUp::Stale;
        }
        match self.slot.on_load_failed() {
            Some(fallback) => {
                self.phase = ImagePhase::Loading;
                FailureFollowUp::Retry(fallback.to_string())
            }
            None => {
                self.phase = ImagePhase::Unavailable;
                FailureFollowUp::GiveUp
            }
        }
    }
}

pub struct SiteApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    controller: ViewController<GuiNotifier>,
    card_images: HashMap<MenuItemId, CardImage>,
    fetch_images: bool,
    pending_notice: Option<Notice>,
    status: String,
}

impl SiteApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_tx: Sender<UiEvent>,
        ui_rx: Receiver<UiEvent>,
        fetch_images: bool,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            controller: ViewController::new(GuiNotifier::new(ui_tx)),
            card_images: HashMap::new(),
            fetch_images,
            pending_notice: None,
            status: String::new(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Notice(notice) => {
                    // Notices are one-shot; a newer one replaces an unread older one.
                    self.pending_notice = Some(notice);
                }
                UiEvent::CardImageLoaded {
                    item_id,
                    url,
                    image,
                } => {
                    if let Some(card) = self.card_images.get_mut(&item_id) {
                        card.on_loaded(&url, image);
                    }
                }
                UiEvent::CardImageFailed {
                    item_id,
                    url,
                    reason,
                } => {
                    tracing::warn!(item = item_id.0, %url, "card image failed: {reason}");
                    let Some(card) = self.card_images.get_mut(&item_id) else {
                        continue;
                    };
                    if let FailureFollowUp::Retry(fallback) = card.on_failed(&url) {
                        if !dispatch_backend_command(
                            &self.cmd_tx,
                            BackendCommand::FetchImage {
                                item_id,
                                url: fallback,
                            },
                            &mut self.status,
                        ) {
                            card.phase = ImagePhase::Unavailable;
                        }
                    }
                }
            }
        }
    }

    fn request_card_images(&mut self, cards: &[MenuCard]) {
        for card in cards {
            let entry = self
                .card_images
                .entry(card.item_id)
                .or_insert_with(|| CardImage::new(card));
            if !matches!(entry.phase, ImagePhase::Idle) {
                continue;
            }
            if !self.fetch_images {
                entry.phase = ImagePhase::Unavailable;
                continue;
            }
            let queued = dispatch_backend_command(
                &self.cmd_tx,
                BackendCommand::FetchImage {
                    item_id: card.item_id,
                    url: entry.slot.current_url().to_string(),
                },
                &mut self.status,
            );
            entry.phase = if queued {
                ImagePhase::Loading
            } else {
                ImagePhase::Unavailable
            };
        }
    }

    fn images_loading(&self) -> bool {
        self.card_images
            .values()
            .any(|card| matches!(card.phase, ImagePhase::Loading))
    }

    fn show_nav_bar(&self, ctx: &egui::Context, nav: &NavBar, actions: &mut Vec<UiAction>) {
        egui::TopBottomPanel::top("site_nav")
            .frame(
                egui::Frame::NONE
                    .fill(theme::EMERALD_600)
                    .inner_margin(egui::Margin::symmetric(16, 12)),
            )
            .show(ctx, |ui| {
                ui.add_enabled_ui(self.pending_notice.is_none(), |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(&nav.brand)
                                .size(22.0)
                                .strong()
                                .color(egui::Color32::WHITE),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            for item in nav.items.iter().rev() {
                                let fill = if item.active {
                                    theme::GREEN_700
                                } else {
                                    egui::Color32::TRANSPARENT
                                };
                                let button = egui::Button::new(
                                    egui::RichText::new(&item.label).color(egui::Color32::WHITE),
                                )
                                .fill(fill)
                                .corner_radius(8.0);
                                if ui.add(button).clicked() {
                                    actions.push(item.on_click.clone());
                                }
                            }
                        });
                    });
                });
            });
    }

    fn show_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("site_footer")
            .frame(
                egui::Frame::NONE
                    .fill(theme::GRAY_800)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(catalog::FOOTER_TEXT)
                            .size(12.0)
                            .color(egui::Color32::WHITE),
                    );
                    if !self.status.is_empty() {
                        ui.label(
                            egui::RichText::new(&self.status)
                                .size(11.0)
                                .color(theme::lighten_color(theme::GRAY_700, 0.5)),
                        );
                    }
                });
            });
    }

    fn show_content(
        &mut self,
        ctx: &egui::Context,
        view: &ViewDescriptor,
        actions: &mut Vec<UiAction>,
    ) {
        let enabled = self.pending_notice.is_none();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_space(24.0);
                        ui.vertical_centered(|ui| match &view.content {
                            PageContent::MenuGallery { title, cards } => {
                                self.show_menu_gallery(ui, title, cards);
                            }
                            PageContent::BookingForm {
                                title,
                                party_size,
                                preferred_time,
                                submit,
                            } => {
                                show_booking_form(
                                    ui,
                                    title,
                                    party_size,
                                    preferred_time,
                                    submit,
                                    actions,
                                );
                            }
                            PageContent::Contact { title, body } => {
                                show_text_panel(
                                    ui,
                                    title,
                                    body,
                                    egui::Color32::WHITE,
                                    theme::GRAY_800,
                                );
                            }
                            PageContent::NotFound { title, body } => {
                                show_text_panel(ui, title, body, theme::RED_100, theme::RED_800);
                            }
                        });
                    });
            });
        });
    }

    fn show_menu_gallery(&mut self, ui: &mut egui::Ui, title: &str, cards: &[MenuCard]) {
        self.request_card_images(cards);
        ui.label(
            egui::RichText::new(title)
                .size(34.0)
                .strong()
                .color(theme::GRAY_800),
        );
        ui.add_space(20.0);
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(24.0, 24.0);
            for card in cards {
                self.show_menu_card(ui, card);
            }
        });
    }

    fn show_menu_card(&mut self, ui: &mut egui::Ui, card: &MenuCard) {
        egui::Frame::NONE
            .fill(theme::GRAY_50)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.vertical(|ui| {
                    let size = egui::vec2(CARD_WIDTH, CARD_IMAGE_HEIGHT);
                    match self.card_images.get_mut(&card.item_id) {
                        Some(state) => show_card_image(ui, state, card, size),
                        None => show_image_placeholder(ui, size, &card.image.alt),
                    }
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(&card.name)
                            .size(19.0)
                            .strong()
                            .color(theme::GRAY_800),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(&card.description)
                            .size(13.0)
                            .color(theme::GRAY_700),
                    );
                });
            });
    }

    fn show_notice_modal(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.pending_notice.as_ref() else {
            return;
        };
        let title = if notice.is_error() {
            "Booking incomplete"
        } else {
            "Booking confirmed"
        };
        let mut dismissed = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&notice.message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });
        if dismissed {
            self.pending_notice = None;
        }
    }
}

fn show_card_image(ui: &mut egui::Ui, state: &mut CardImage, card: &MenuCard, size: egui::Vec2) {
    if let ImagePhase::Decoded(image) = &state.phase {
        let color_image =
            egui::ColorImage::from_rgba_unmultiplied([image.width, image.height], &image.rgba);
        let texture = ui.ctx().load_texture(
            format!("menu_card_{}_{}", card.item_id.0, state.slot.is_fallback()),
            color_image,
            egui::TextureOptions::LINEAR,
        );
        state.phase = ImagePhase::Ready(texture);
    }

    match &state.phase {
        ImagePhase::Ready(texture) => {
            ui.add(
                egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                    .fit_to_exact_size(size)
                    .corner_radius(6.0),
            )
            .on_hover_text(&card.image.alt);
        }
        ImagePhase::Idle | ImagePhase::Loading => {
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            ui.painter().rect_filled(rect, 6.0, theme::GRAY_100);
            egui::Spinner::new().paint_at(ui, rect.shrink2(egui::vec2(
                (size.x - 24.0) / 2.0,
                (size.y - 24.0) / 2.0,
            )));
        }
        ImagePhase::Unavailable | ImagePhase::Decoded(_) => {
            show_image_placeholder(ui, size, &card.image.alt);
        }
    }
}

fn show_image_placeholder(ui: &mut egui::Ui, size: egui::Vec2, alt: &str) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 6.0, egui::Color32::from_rgb(204, 204, 204));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        alt,
        egui::FontId::proportional(14.0),
        egui::Color32::from_rgb(102, 102, 102),
    );
}

fn show_booking_form(
    ui: &mut egui::Ui,
    title: &str,
    party_size: &InputView,
    preferred_time: &InputView,
    submit: &ButtonView,
    actions: &mut Vec<UiAction>,
) {
    egui::Frame::NONE
        .fill(egui::Color32::WHITE)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(28))
        .show(ui, |ui| {
            ui.set_width(380.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(title)
                        .size(28.0)
                        .strong()
                        .color(theme::GRAY_800),
                );
            });
            ui.add_space(18.0);
            show_bound_input(ui, party_size, "1", actions);
            ui.add_space(12.0);
            show_bound_input(ui, preferred_time, "HH:MM", actions);
            ui.add_space(18.0);

            let button = egui::Button::new(
                egui::RichText::new(&submit.label)
                    .strong()
                    .color(egui::Color32::WHITE),
            )
            .fill(theme::GREEN_600)
            .corner_radius(8.0)
            .min_size(egui::vec2(ui.available_width(), 40.0));
            if ui.add(button).clicked() {
                actions.push(submit.on_click.clone());
            }
        });
}

fn show_bound_input(ui: &mut egui::Ui, input: &InputView, hint: &str, actions: &mut Vec<UiAction>) {
    ui.label(
        egui::RichText::new(&input.label)
            .strong()
            .size(13.0)
            .color(theme::GRAY_700),
    );
    let mut text = input.value.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut text)
            .id_salt(input.field.element_id())
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        actions.push(input.field.on_change(text));
    }
}

fn show_text_panel(
    ui: &mut egui::Ui,
    title: &str,
    body: &str,
    fill: egui::Color32,
    heading: egui::Color32,
) {
    egui::Frame::NONE
        .fill(fill)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(28))
        .show(ui, |ui| {
            ui.set_max_width(560.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(title).size(28.0).strong().color(heading));
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(body)
                        .size(16.0)
                        .color(if fill == theme::RED_100 {
                            theme::RED_600
                        } else {
                            theme::GRAY_700
                        }),
                );
            });
        });
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let view = self.controller.render();
        let mut actions = Vec::new();
        self.show_nav_bar(ctx, &view.nav, &mut actions);
        self.show_footer(ctx);
        self.show_content(ctx, &view, &mut actions);
        self.show_notice_modal(ctx);

        if !actions.is_empty() {
            apply_ui_actions(&mut self.controller, actions);
            // Pick up notices emitted by a submit on this frame.
            self.process_ui_events();
            ctx.request_repaint();
        }

        if self.images_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::view::ImageSource;

    fn card() -> MenuCard {
        MenuCard {
            item_id: MenuItemId(7),
            name: "Soup".to_string(),
            description: "Warm".to_string(),
            image: ImageSource {
                primary: "https://img.test/soup.png".to_string(),
                fallback: "https://img.test/error.png".to_string(),
                alt: "Soup".to_string(),
            },
        }
    }

    fn pixel() -> DecodedImage {
        DecodedImage {
            width: 1,
            height: 1,
            rgba: vec![0, 0, 0, 255],
        }
    }

    #[test]
    fn primary_failure_retries_fallback_once() {
        let mut image = CardImage::new(&card());
        assert_eq!(
            image.on_failed("https://img.test/soup.png"),
            FailureFollowUp::Retry("https://img.test/error.png".to_string())
        );
        assert!(matches!(image.phase, ImagePhase::Loading));
        assert_eq!(
            image.on_failed("https://img.test/error.png"),
            FailureFollowUp::GiveUp
        );
        assert!(matches!(image.phase, ImagePhase::Unavailable));
    }

    #[test]
    fn stale_results_are_ignored() {
        let mut image = CardImage::new(&card());
        image.on_failed("https://img.test/soup.png");

        assert_eq!(
            image.on_failed("https://img.test/soup.png"),
            FailureFollowUp::Stale
        );
        image.on_loaded("https://img.test/soup.png", pixel());
        assert!(matches!(image.phase, ImagePhase::Loading));

        image.on_loaded("https://img.test/error.png", pixel());
        assert!(matches!(image.phase, ImagePhase::Decoded(_)));
    }

    #[test]
    fn disabled_fetching_marks_cards_unavailable() {
        let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(4);
        let (ui_tx, ui_rx) = crossbeam_channel::bounded(4);
        let mut app = SiteApp::new(cmd_tx, ui_tx, ui_rx, false);

        app.request_card_images(&[card()]);
        assert!(cmd_rx.try_recv().is_err());
        assert!(matches!(
            app.card_images[&MenuItemId(7)].phase,
            ImagePhase::Unavailable
        ));
    }

    #[test]
    fn failed_primary_queues_fallback_fetch() {
        let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(4);
        let (ui_tx, ui_rx) = crossbeam_channel::bounded(4);
        let mut app = SiteApp::new(cmd_tx, ui_tx.clone(), ui_rx, true);

        app.request_card_images(&[card()]);
        let BackendCommand::FetchImage { url, .. } = cmd_rx.try_recv().expect("primary queued");
        assert_eq!(url, "https://img.test/soup.png");

        ui_tx
            .try_send(UiEvent::CardImageFailed {
                item_id: MenuItemId(7),
                url,
                reason: "404".to_string(),
            })
            .expect("queue event");
        app.process_ui_events();

        let BackendCommand::FetchImage { url, .. } = cmd_rx.try_recv().expect("fallback queued");
        assert_eq!(url, "https://img.test/error.png");
    }

    #[test]
    fn submit_notice_becomes_pending_modal() {
        let (cmd_tx, _cmd_rx) = crossbeam_channel::bounded(4);
        let (ui_tx, ui_rx) = crossbeam_channel::bounded(4);
        let mut app = SiteApp::new(cmd_tx, ui_tx, ui_rx, false);

        apply_ui_actions(&mut app.controller, vec![UiAction::SubmitBooking]);
        app.process_ui_events();

        let notice = app.pending_notice.as_ref().expect("notice queued");
        assert!(notice.is_error());
    }
}
