use common::games::GameBroadcaster;
use common::games::snake::{BoardSnapshot, GameOverNotification};
use crate::state::{AppState, SharedState};

/// Publishes session output into the UI's shared state; the egui app picks it
/// up on the next frame.
#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: BoardSnapshot) {
        self.shared_state.update_snapshot(snapshot);
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        self.shared_state.set_state(AppState::GameOver { notification });
    }
}
