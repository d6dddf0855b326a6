// Reusable UI components
// Cards, banners, badges, and the loading indicator

use content_generator::{ContentSection, SectionBody};
use eframe::egui;

/// Brand accent used for headings and the primary button
pub const BRAND_PRIMARY: egui::Color32 = egui::Color32::from_rgb(255, 0, 80);

/// Secondary accent used for tag badges
pub const BRAND_SECONDARY: egui::Color32 = egui::Color32::from_rgb(130, 60, 220);

const ERROR_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(90, 10, 10, 120);
const ERROR_STROKE: egui::Color32 = egui::Color32::from_rgb(220, 60, 60);
const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(255, 200, 200);

/// Render an alert card with the standard failure heading
/// Used for both the configuration banner and request errors
pub fn error_card(ui: &mut egui::Ui, message: &str) {
    egui::Frame::none()
        .fill(ERROR_FILL)
        .stroke(egui::Stroke::new(1.0, ERROR_STROKE))
        .rounding(8.0)
        .inner_margin(egui::Margin::symmetric(16.0, 12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("Oops! Something went wrong.")
                    .strong()
                    .color(ERROR_TEXT),
            );
            ui.add_space(4.0);
            ui.label(egui::RichText::new(message).color(ERROR_TEXT));
        });
}

/// Render a spinner with a status message underneath
pub fn loading_indicator(ui: &mut egui::Ui, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.add(egui::Spinner::new().size(48.0).color(BRAND_PRIMARY));
        ui.add_space(12.0);
        ui.label(egui::RichText::new(message).size(16.0));
        ui.add_space(24.0);
    });
}

/// Render the generate button
/// Shows a spinner and "Generating..." while a request is in flight
pub fn generate_button(ui: &mut egui::Ui, enabled: bool, loading: bool) -> egui::Response {
    let size = egui::vec2(ui.available_width(), 40.0);
    if loading {
        ui.add_enabled_ui(false, |ui| {
            ui.allocate_ui_with_layout(
                size,
                egui::Layout::left_to_right(egui::Align::Center),
                |ui| {
                    ui.add_space((size.x / 2.0 - 60.0).max(0.0));
                    ui.add(egui::Spinner::new());
                    ui.label(egui::RichText::new("Generating...").strong());
                },
            );
        })
        .response
    } else {
        let button = egui::Button::new(
            egui::RichText::new("Generate Content")
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(BRAND_PRIMARY)
        .min_size(size);
        ui.add_enabled(enabled, button)
    }
}

/// Render a single tag as a rounded badge
pub fn tag_badge(ui: &mut egui::Ui, tag: &str) {
    egui::Frame::none()
        .fill(BRAND_SECONDARY.gamma_multiply(0.8))
        .rounding(12.0)
        .inner_margin(egui::Margin::symmetric(10.0, 4.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(tag)
                    .size(12.0)
                    .color(egui::Color32::WHITE),
            );
        });
}

/// Render one labeled section of generated content
pub fn section_card(ui: &mut egui::Ui, section: &ContentSection<'_>) {
    egui::Frame::group(ui.style())
        .rounding(8.0)
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(section.heading)
                    .heading()
                    .color(BRAND_PRIMARY),
            );
            ui.add_space(8.0);

            match section.body {
                SectionBody::List(items) => {
                    for item in items {
                        ui.horizontal_wrapped(|ui| {
                            ui.label("•");
                            ui.label(item.as_str());
                        });
                    }
                }
                // Labels keep embedded newlines; long lines wrap
                SectionBody::Preformatted(text) => {
                    ui.label(egui::RichText::new(text).size(14.0));
                }
                SectionBody::Badges(tags) => {
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);
                        for tag in tags {
                            tag_badge(ui, tag);
                        }
                    });
                }
            }
        });
    ui.add_space(16.0);
}
