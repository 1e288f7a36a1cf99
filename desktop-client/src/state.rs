use std::sync::{Arc, Mutex, PoisonError};
use common::games::snake::{BoardSnapshot, GameOverNotification};

#[derive(Debug, Clone)]
pub enum AppState {
    Starting,
    InGame {
        snapshot: BoardSnapshot,
    },
    GameOver {
        notification: GameOverNotification,
    },
}

/// State shared between the game thread and the UI thread.
#[derive(Clone)]
pub struct SharedState {
    state: Arc<Mutex<AppState>>,
    error: Arc<Mutex<Option<String>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::Starting)),
            error: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_state(&self, state: AppState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    pub fn get_state(&self) -> AppState {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Ignored once the game is over so a late frame can't hide the result.
    pub fn update_snapshot(&self, snapshot: BoardSnapshot) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if matches!(*state, AppState::GameOver { .. }) {
            return;
        }
        *state = AppState::InGame { snapshot };
    }

    pub fn set_error(&self, error: String) {
        *self.error.lock().unwrap_or_else(PoisonError::into_inner) = Some(error);
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
