use guess_config::{AppConfig, Theme};
use guess_core::{
    Command, Difficulty, GameSession, GameState, NotifySink, RandomSecret, Response, SecretSource,
    dispatch,
};
use tracing::info;

use crate::controls::{Controls, high_score_label};
use crate::style;

pub struct GuessApp<S = RandomSecret> {
    session: GameSession<S>,
    cues: Box<dyn NotifySink>,
    /// Selector value, applied on the next Start.
    difficulty: Difficulty,
    theme: Theme,
    /// Visuals must be pushed to the egui context on the next frame.
    theme_dirty: bool,
    guess_text: String,
    message: String,
}

impl<S: SecretSource> GuessApp<S> {
    pub fn new(session: GameSession<S>, cues: Box<dyn NotifySink>, config: &AppConfig) -> Self {
        Self {
            session,
            cues,
            difficulty: config.difficulty,
            theme: config.theme,
            theme_dirty: true,
            guess_text: String::new(),
            message: String::new(),
        }
    }

    /// Forward a user action to the session and update what is displayed.
    pub fn handle(&mut self, command: Command) {
        let response = dispatch(&mut self.session, command, self.cues.as_mut());
        let round_over =
            matches!(&response, Response::Guessed(Ok(outcome)) if outcome.is_terminal());
        if round_over || response == Response::Reset {
            self.guess_text.clear();
        }
        self.message = response.message();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if theme != self.theme {
            info!(%theme, "Theme changed");
        }
        self.theme = theme;
        self.theme_dirty = true;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn controls(&self) -> Controls {
        Controls::for_state(self.session.state())
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Remaining tries, only while a round is being played.
    pub fn tries_left_text(&self) -> Option<String> {
        if self.session.state() != GameState::Active {
            return None;
        }
        self.session
            .tries_left()
            .map(|left| format!("Tries left: {left}"))
    }

    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Themes", |ui| {
                    for &theme in Theme::ALL {
                        if ui.button(theme.label()).clicked() {
                            self.set_theme(theme);
                            ui.close_menu();
                        }
                    }
                });
            });
        });
    }

    fn top_panel(&mut self, ctx: &egui::Context, controls: Controls) {
        let palette = self.theme.palette();
        let frame = egui::Frame::side_top_panel(&ctx.style()).fill(style::color(palette.background));
        egui::TopBottomPanel::top("difficulty_panel")
            .frame(frame)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Number Guessing Game")
                            .size(24.0)
                            .strong(),
                    );
                    ui.horizontal(|ui| {
                        ui.label("Select Difficulty:");
                        egui::ComboBox::from_id_salt("difficulty")
                            .selected_text(self.difficulty.label())
                            .show_ui(ui, |ui| {
                                for &d in Difficulty::ALL {
                                    ui.selectable_value(&mut self.difficulty, d, d.label());
                                }
                            });
                        if ui
                            .add_enabled(controls.start, egui::Button::new("Start Game"))
                            .clicked()
                        {
                            self.handle(Command::Start(self.difficulty));
                        }
                    });
                    ui.label(high_score_label(self.session.best_score()));
                });
            });
    }

    fn bottom_panel(&mut self, ctx: &egui::Context, controls: Controls) {
        let palette = self.theme.palette();
        let frame = egui::Frame::side_top_panel(&ctx.style()).fill(style::color(palette.background));
        egui::TopBottomPanel::bottom("reset_panel")
            .frame(frame)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    if ui
                        .add_enabled(controls.reset, egui::Button::new("Reset Game"))
                        .clicked()
                    {
                        self.handle(Command::Reset);
                    }
                });
            });
    }

    fn central_panel(&mut self, ctx: &egui::Context, controls: Controls) {
        let palette = self.theme.palette();
        let frame = egui::Frame::central_panel(&ctx.style()).fill(style::color(palette.panel));
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Enter your guess:");
                let field = ui.add_enabled(
                    controls.guess,
                    egui::TextEdit::singleline(&mut self.guess_text).desired_width(100.0),
                );
                let submitted =
                    field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let clicked = ui
                    .add_enabled(controls.guess, egui::Button::new("Guess"))
                    .clicked();
                if controls.guess && (submitted || clicked) {
                    self.handle(Command::Guess(self.guess_text.clone()));
                }
            });
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(self.message.as_str()).size(18.0));
                if let Some(text) = self.tries_left_text() {
                    ui.label(text);
                }
            });
        });
    }
}

impl<S: SecretSource> eframe::App for GuessApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.theme_dirty {
            ctx.set_visuals(style::visuals(self.theme));
            self.theme_dirty = false;
        }

        // Enablement is fixed for the whole frame, like a button press
        // handled before the next repaint.
        let controls = self.controls();
        self.menu_bar(ctx);
        self.top_panel(ctx, controls);
        self.bottom_panel(ctx, controls);
        self.central_panel(ctx, controls);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use guess_core::{Notification, SequenceSecret};

    use super::*;

    #[derive(Clone, Default)]
    struct SharedSink(Rc<RefCell<Vec<Notification>>>);

    impl NotifySink for SharedSink {
        fn notify(&mut self, notification: Notification) {
            self.0.borrow_mut().push(notification);
        }
    }

    fn new_app(secret: i32) -> (GuessApp<SequenceSecret>, SharedSink) {
        let sink = SharedSink::default();
        let session = GameSession::with_source(SequenceSecret::constant(secret));
        let app = GuessApp::new(session, Box::new(sink.clone()), &AppConfig::default());
        (app, sink)
    }

    #[test]
    fn starts_with_config_selection() {
        let config = AppConfig {
            theme: Theme::Dark,
            difficulty: Difficulty::Hard,
            ..Default::default()
        };
        let session = GameSession::with_source(SequenceSecret::constant(1));
        let mut app = GuessApp::new(session, Box::new(SharedSink::default()), &config);
        assert_eq!(app.theme(), Theme::Dark);
        app.handle(Command::Start(app.difficulty));
        assert_eq!(app.session().max_number(), Some(200));
    }

    #[test]
    fn full_round_updates_message_and_controls() {
        let (mut app, sink) = new_app(7);
        assert!(!app.controls().guess);

        app.handle(Command::Start(Difficulty::Easy));
        assert!(app.controls().guess);
        assert!(app.message().starts_with("I have selected a number between 1 and 50."));

        app.guess_text = "3".to_string();
        app.handle(Command::Guess(app.guess_text.clone()));
        assert_eq!(app.message(), "It's higher than 3. Try again.");

        app.handle(Command::Guess("7".to_string()));
        assert_eq!(
            app.message(),
            "Congratulations! You've guessed the number 7 in 2 tries."
        );
        assert_eq!(app.session().state(), GameState::Won);
        assert!(!app.controls().guess);
        assert!(app.controls().reset);

        assert_eq!(
            *sink.0.borrow(),
            [
                Notification::Start,
                Notification::Incorrect,
                Notification::Correct
            ]
        );
    }

    #[test]
    fn tries_left_counts_down_while_active() {
        let (mut app, _) = new_app(7);
        assert_eq!(app.tries_left_text(), None);
        app.handle(Command::Start(Difficulty::Easy));
        assert_eq!(app.tries_left_text().as_deref(), Some("Tries left: 10"));
        app.handle(Command::Guess("99".to_string()));
        assert_eq!(app.tries_left_text().as_deref(), Some("Tries left: 9"));
        app.handle(Command::Guess("7".to_string()));
        assert_eq!(app.tries_left_text(), None);
    }

    #[test]
    fn finished_round_clears_guess_text() {
        let (mut app, _) = new_app(7);
        app.handle(Command::Start(Difficulty::Easy));
        app.guess_text = "4".to_string();
        app.handle(Command::Guess(app.guess_text.clone()));
        assert_eq!(app.guess_text, "4");

        app.guess_text = "7".to_string();
        app.handle(Command::Guess(app.guess_text.clone()));
        assert_eq!(app.session().state(), GameState::Won);
        assert!(app.guess_text.is_empty());
    }

    #[test]
    fn reset_clears_text_and_message() {
        let (mut app, sink) = new_app(7);
        app.handle(Command::Start(Difficulty::Easy));
        app.guess_text = "12".to_string();
        app.handle(Command::Guess(app.guess_text.clone()));
        app.handle(Command::Reset);
        assert!(app.guess_text.is_empty());
        assert!(app.message().is_empty());
        assert!(!app.controls().reset);
        assert_eq!(sink.0.borrow().last(), Some(&Notification::Reset));
    }

    #[test]
    fn theme_change_marks_visuals_dirty() {
        let (mut app, _) = new_app(7);
        app.theme_dirty = false;
        app.set_theme(Theme::Light);
        assert!(app.theme_dirty);
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.session().state(), GameState::Idle);
    }
}
