mod game;

use common::games::snake::KeyCodeSender;
use eframe::egui;
use crate::state::{AppState, SharedState};

pub use game::SnakeBoardUi;

/// The session takes input until it ends, even before the first snapshot lands.
fn accepts_input(state: &AppState) -> bool {
    !matches!(state, AppState::GameOver { .. })
}

/// Key identifier handed to the session, e.g. `ArrowUp`.
fn key_code(key: egui::Key) -> String {
    format!("{:?}", key)
}

pub struct SnakeApp {
    shared_state: SharedState,
    input_tx: KeyCodeSender,
    board_ui: SnakeBoardUi,
}

impl SnakeApp {
    pub fn new(shared_state: SharedState, input_tx: KeyCodeSender, tile_size: f32) -> Self {
        Self {
            shared_state,
            input_tx,
            board_ui: SnakeBoardUi::new(tile_size),
        }
    }

    /// Forwards every fresh key press by name; the session decides which
    /// ones mean something.
    fn forward_key_presses(&self, ctx: &egui::Context) {
        let key_codes: Vec<String> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } => Some(key_code(*key)),
                    _ => None,
                })
                .collect()
        });

        for code in key_codes {
            // The session closes its end at game over.
            let _ = self.input_tx.send(code);
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let current_state = self.shared_state.get_state();

        if accepts_input(&current_state) {
            self.forward_key_presses(ctx);
        }

        if let Some(error) = self.shared_state.get_error() {
            egui::Window::new("Error")
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            match current_state {
                AppState::Starting => {
                    ui.heading("Starting game...");
                    ui.spinner();
                }
                AppState::InGame { snapshot } => {
                    ui.heading(format!(
                        "Score: {}  Length: {}",
                        snapshot.score,
                        snapshot.snake_len()
                    ));
                    ui.separator();
                    self.board_ui.render(ui, &snapshot);
                }
                AppState::GameOver { notification } => {
                    ui.heading(format!(
                        "Game over: snake {} after {} ticks",
                        notification.reason, notification.ticks
                    ));
                    ui.separator();
                    self.board_ui.render(ui, &notification.final_state);
                }
            }
        });

        ctx.request_repaint();
    }
}
