// Game window: egui panels driving a GameSession

mod app;
mod controls;
mod style;

use anyhow::Result;
use guess_config::AppConfig;
use guess_core::{GameSession, NotifySink, SecretSource};

pub use app::GuessApp;
pub use controls::{Controls, high_score_label};

pub const WINDOW_TITLE: &str = "Number Guessing Game";

/// Open the game window and block until it is closed.
pub fn run<S: SecretSource + 'static>(
    config: &AppConfig,
    session: GameSession<S>,
    cues: Box<dyn NotifySink>,
) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([500.0, 400.0])
            .with_resizable(false)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    let app = GuessApp::new(session, cues, config);
    eframe::run_native(WINDOW_TITLE, options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;
    Ok(())
}
