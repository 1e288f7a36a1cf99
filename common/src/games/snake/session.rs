use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};

use crate::games::{GameBroadcaster, SessionRng};
use crate::log;
use super::game_state::{SnakeGameState, TickOutcome};
use super::settings::SnakeSessionSettings;
use super::snapshot::GameOverNotification;
use super::types::Direction;

pub type KeyCodeSender = mpsc::UnboundedSender<String>;
pub type KeyCodeReceiver = mpsc::UnboundedReceiver<String>;

pub struct SnakeSessionState {
    pub session_id: String,
    pub game_state: SnakeGameState,
    pub rng: SessionRng,
    pub tick_interval: Duration,
}

impl SnakeSessionState {
    /// Builds a started game. The snake is placed and the first food item
    /// spawned, but nothing moves until `SnakeSession::run` drives it.
    pub fn create(
        session_id: String,
        settings: &SnakeSessionSettings,
        seed: u64,
    ) -> Result<Self, String> {
        let mut rng = SessionRng::new(seed);
        let mut game_state = SnakeGameState::new(settings);
        game_state.start(&mut rng)?;

        log!("[session:{}] created with seed {}", session_id, rng.seed());

        Ok(Self {
            session_id,
            game_state,
            rng,
            tick_interval: settings.tick_interval,
        })
    }
}

pub struct SnakeSession;

impl SnakeSession {
    /// Runs one game to completion. The loop is the only owner of the game
    /// state: key codes from `input_rx` can only set the pending direction,
    /// and only the timer branch advances the simulation. Game over closes
    /// the input channel and drops the timer before returning.
    pub async fn run(
        mut session_state: SnakeSessionState,
        mut input_rx: KeyCodeReceiver,
        broadcaster: impl GameBroadcaster,
    ) -> GameOverNotification {
        broadcaster
            .broadcast_state(session_state.game_state.snapshot())
            .await;

        let mut tick_interval_timer = interval(session_state.tick_interval);
        tick_interval_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of a tokio interval fires immediately.
        tick_interval_timer.tick().await;

        let mut input_open = true;

        let reason = loop {
            tokio::select! {
                biased;

                _ = tick_interval_timer.tick() => {
                    let outcome = session_state.game_state.tick(&mut session_state.rng);
                    if let TickOutcome::GameOver(reason) = outcome {
                        input_rx.close();
                        break reason;
                    }
                    broadcaster
                        .broadcast_state(session_state.game_state.snapshot())
                        .await;
                }

                key_code = input_rx.recv(), if input_open => {
                    match key_code {
                        Some(key_code) => Self::handle_key(&mut session_state, &key_code),
                        None => {
                            log!("[session:{}] input source closed", session_state.session_id);
                            input_open = false;
                        }
                    }
                }
            }
        };
        drop(tick_interval_timer);

        let final_state = session_state.game_state.snapshot();
        log!(
            "[session:{}] finished after {} ticks, {} (score {})",
            session_state.session_id,
            final_state.tick,
            reason,
            final_state.score
        );

        GameOverNotification {
            score: final_state.score,
            reason,
            ticks: final_state.tick,
            final_state,
        }
    }

    fn handle_key(session_state: &mut SnakeSessionState, key_code: &str) {
        let Some(direction) = Direction::from_key_code(key_code) else {
            return;
        };
        session_state.game_state.on_input(direction);
    }
}
