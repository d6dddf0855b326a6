// Main application layout
// Handles the menu bar, header, topic form, results, and footer

use crate::state::{AppState, SubmitOutcome};
use crate::ui::components::*;
use chrono::Datelike;
use eframe::egui;

/// Width of the centered content column
const CONTENT_WIDTH: f32 = 640.0;

const LOADING_MESSAGE: &str = "Crafting your YouTube masterpiece...";

/// Render the main application layout
/// Returns the topic to generate for when the user triggered a new request
pub fn render_app_layout(ctx: &egui::Context, state: &mut AppState) -> Option<String> {
    render_menu_bar(ctx, state);
    render_footer(ctx);
    render_about_window(ctx, state);

    let mut dispatched = None;
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                let side = ((ui.available_width() - CONTENT_WIDTH) / 2.0).max(0.0);
                ui.horizontal(|ui| {
                    ui.add_space(side);
                    ui.vertical(|ui| {
                        ui.set_max_width(CONTENT_WIDTH);
                        render_header(ui);

                        if let Some(banner) = &state.config_banner {
                            error_card(ui, banner);
                            ui.add_space(16.0);
                        }

                        dispatched = render_topic_form(ui, state);
                        ui.add_space(16.0);
                        render_results(ui, state);
                    });
                });
            });
    });
    dispatched
}

/// Render the top menu bar
fn render_menu_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let mut dark_mode = ctx.style().visuals.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                    let visuals = if dark_mode {
                        egui::Visuals::dark()
                    } else {
                        egui::Visuals::light()
                    };
                    ctx.set_visuals(visuals);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    state.ui_state.about_open = true;
                    ui.close_menu();
                }
            });
        });
    });
}

/// Render the footer with copyright and credits
fn render_footer(ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(format!(
                    "© {} AI YouTube Content Generator. All rights reserved.",
                    chrono::Local::now().year()
                ))
                .weak()
                .small(),
            );
            ui.label(
                egui::RichText::new("Powered by egui and the Gemini API.")
                    .weak()
                    .small(),
            );
            ui.add_space(4.0);
        });
    });
}

fn render_about_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.ui_state.about_open;
    egui::Window::new("About")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("AI YouTube Content Generator");
            ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
            ui.add_space(8.0);
            ui.label("Generates titles, a script outline, a description, and tags for a video topic.");
        });
    state.ui_state.about_open = open;
}

fn render_header(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(
            egui::RichText::new("AI YouTube Content Generator")
                .size(32.0)
                .strong()
                .color(BRAND_PRIMARY),
        );
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(
                "Describe your video topic below, and let AI help you craft compelling titles, \
                 script outlines, descriptions, and tags for your YouTube channel!",
            )
            .size(15.0),
        );
        ui.add_space(24.0);
    });
}

/// Render the topic editor and generate button
/// Returns the topic when a request was dispatched
fn render_topic_form(ui: &mut egui::Ui, state: &mut AppState) -> Option<String> {
    let mut dispatched = None;

    egui::Frame::group(ui.style())
        .rounding(10.0)
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("Enter Your Video Topic:")
                    .strong()
                    .size(18.0),
            );
            ui.add_space(8.0);

            let input_enabled = state.input_enabled();
            let editor = egui::TextEdit::multiline(&mut state.topic)
                .hint_text("e.g., 'Beginner's guide to Rust ownership', 'Easy vegan recipes for students'")
                .desired_rows(3)
                .desired_width(f32::INFINITY);
            ui.add_enabled(input_enabled, editor);
            ui.add_space(12.0);

            let clicked = generate_button(ui, state.can_submit(), state.is_loading()).clicked();
            if clicked {
                match state.submit() {
                    SubmitOutcome::Dispatched(topic) => dispatched = Some(topic),
                    SubmitOutcome::Rejected => {
                        tracing::debug!("Generate action rejected by validation")
                    }
                    SubmitOutcome::Ignored => {}
                }
            }
        });

    dispatched
}

/// Render the loading indicator, error card, or content sections
fn render_results(ui: &mut egui::Ui, state: &AppState) {
    if state.is_loading() {
        loading_indicator(ui, LOADING_MESSAGE);
    } else if let Some(message) = state.error_message() {
        error_card(ui, message);
    } else if let Some(content) = state.content() {
        for section in content.sections() {
            section_card(ui, &section);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GenerationState;
    use content_generator::GeneratedContent;

    fn render_once(state: &mut AppState) -> Option<String> {
        let ctx = egui::Context::default();
        let mut dispatched = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            dispatched = render_app_layout(ctx, state);
        });
        dispatched
    }

    #[test]
    fn test_renders_every_state_without_dispatching() {
        let content = GeneratedContent {
            titles: vec!["A".to_string(), "B".to_string()],
            script_outline: "Intro:\n- Hook\nOutro:\n- Bye".to_string(),
            description: String::new(),
            tags: vec!["tag1".to_string(), "tag2".to_string()],
        };

        for generation in [
            GenerationState::Idle,
            GenerationState::Loading,
            GenerationState::Error("Failed to generate content: offline".to_string()),
            GenerationState::Success(content),
        ] {
            let mut state = AppState::new(true);
            state.topic = "vegan recipes".to_string();
            state.generation = generation.clone();

            assert!(render_once(&mut state).is_none());
            assert_eq!(state.generation, generation);
        }
    }

    #[test]
    fn test_renders_missing_key_banner() {
        let mut state = AppState::new(false);
        assert!(render_once(&mut state).is_none());
        assert!(state.config_banner.is_some());
    }
}
