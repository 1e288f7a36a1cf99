mod entity;
mod food;
mod game_state;
mod session;
mod settings;
mod snapshot;
mod types;

pub use entity::Snake;
pub use food::{DEFAULT_MAX_SPAWN_ATTEMPTS, FoodSpawner};
pub use game_state::{GamePhase, SnakeGameState, TickOutcome};
pub use session::{KeyCodeReceiver, KeyCodeSender, SnakeSession, SnakeSessionState};
pub use settings::{DEFAULT_FIELD_SIZE, DEFAULT_TICK_INTERVAL, SnakeSessionSettings};
pub use snapshot::{BoardSnapshot, CellRole, GameOverNotification};
pub use types::{DeathReason, Direction, FieldSize, Point};
