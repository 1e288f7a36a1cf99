use std::future::Future;

use super::snake::{BoardSnapshot, GameOverNotification};

/// Receiving end of a running session: whatever draws the board.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: BoardSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}
