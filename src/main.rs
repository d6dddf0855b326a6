// AI YouTube Content Generator - Main Entry Point
// Native Rust GUI that turns a video topic into titles, an outline, a description, and tags

mod state;
mod ui;
mod worker;

use content_generator::{ContentGenerator, GeminiContentGenerator, GeneratorConfig};
use eframe::egui;
use state::AppState;
use std::sync::Arc;
use tracing::info;
use ui::render_app_layout;
use worker::GenerationWorker;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Configuration is resolved once and injected from here on
    let config = GeneratorConfig::from_env();
    info!("Configuration loaded: {:?}", config);
    if !config.has_credential() {
        tracing::warn!("No Gemini API key configured; content generation is disabled");
    }

    let credential_available = config.has_credential();
    let generator: Arc<dyn ContentGenerator> = Arc::new(GeminiContentGenerator::new(config));
    let app = ContentStudioApp::new(generator, credential_available)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("AI YouTube Content Generator")
            .with_inner_size([900.0, 800.0])
            .with_min_inner_size([600.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "AI YouTube Content Generator",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run the application window: {}", e))?;

    info!("Application closed");
    Ok(())
}

/// Main application struct
/// Owns UI state and the worker that runs generation requests
struct ContentStudioApp {
    /// Application state (topic, generation lifecycle, UI preferences)
    state: AppState,
    /// Background request runner
    worker: GenerationWorker,
}

impl ContentStudioApp {
    /// Create a new application instance
    fn new(generator: Arc<dyn ContentGenerator>, credential_available: bool) -> std::io::Result<Self> {
        Ok(Self {
            state: AppState::new(credential_available),
            worker: GenerationWorker::new(generator)?,
        })
    }

    /// Apply any results that finished since the last frame
    fn drain_results(&mut self) {
        while let Some(result) = self.worker.poll() {
            self.state.complete(result);
        }
    }

    /// Hand a dispatched topic to the worker
    fn start_generation(&self, topic: String, ctx: &egui::Context) {
        let ctx = ctx.clone();
        self.worker.dispatch(topic, move || ctx.request_repaint());
    }
}

impl eframe::App for ContentStudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_results();

        if let Some(topic) = render_app_layout(ctx, &mut self.state) {
            self.start_generation(topic, ctx);
        }
    }
}
