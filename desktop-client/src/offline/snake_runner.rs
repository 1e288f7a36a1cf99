use common::games::GameBroadcaster;
use common::games::snake::{KeyCodeReceiver, SnakeSession, SnakeSessionSettings, SnakeSessionState};
use common::log;
use crate::state::SharedState;

use super::LocalBroadcaster;

pub async fn run_snake_game(
    shared_state: SharedState,
    input_rx: KeyCodeReceiver,
    settings: SnakeSessionSettings,
    seed: u64,
) {
    let session_id = format!("offline_{}", std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0));

    let session_state = match SnakeSessionState::create(session_id, &settings, seed) {
        Ok(session_state) => session_state,
        Err(e) => {
            log!("Failed to create snake session: {}", e);
            shared_state.set_error(e);
            return;
        }
    };

    let broadcaster = LocalBroadcaster::new(shared_state);
    let notification = SnakeSession::run(session_state, input_rx, broadcaster.clone()).await;
    broadcaster.broadcast_game_over(notification).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use common::games::snake::DeathReason;
    use tokio::sync::mpsc;
    use crate::state::AppState;

    #[tokio::test]
    async fn test_finished_game_lands_in_shared_state() {
        let shared_state = SharedState::new();
        let (_input_tx, input_rx) = mpsc::unbounded_channel();
        let settings = SnakeSessionSettings {
            tick_interval: Duration::from_millis(1),
            ..SnakeSessionSettings::default()
        };

        run_snake_game(shared_state.clone(), input_rx, settings, 17).await;

        match shared_state.get_state() {
            AppState::GameOver { notification } => {
                assert_eq!(notification.reason, DeathReason::WallCollision);
                assert_eq!(notification.final_state.game_over, Some(DeathReason::WallCollision));
            }
            other => panic!("expected game over, got {:?}", other),
        }
        assert!(shared_state.get_error().is_none());
    }
}
