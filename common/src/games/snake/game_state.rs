use std::collections::HashSet;

use crate::games::SessionRng;
use crate::log;
use super::entity::Snake;
use super::food::FoodSpawner;
use super::settings::SnakeSessionSettings;
use super::snapshot::BoardSnapshot;
use super::types::{DeathReason, Direction, FieldSize, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    Running,
    GameOver(DeathReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    AteFood,
    GameOver(DeathReason),
    NotRunning,
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    pub snake: Snake,
    pub food_set: HashSet<Point>,
    pub field_size: FieldSize,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
    pub score: u32,
    pub tick: u64,
    phase: GamePhase,
    food_spawner: FoodSpawner,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSessionSettings) -> Self {
        let (head, tail) = settings.start_position();
        Self {
            snake: Snake::new(head, tail),
            food_set: HashSet::new(),
            field_size: settings.field_size(),
            direction: settings.start_direction(),
            pending_direction: None,
            score: 0,
            tick: 0,
            phase: GamePhase::Idle,
            food_spawner: FoodSpawner::default(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn start(&mut self, rng: &mut SessionRng) -> Result<(), String> {
        if self.phase != GamePhase::Idle {
            return Err(format!("Game can't be started from {:?}", self.phase));
        }

        self.phase = GamePhase::Running;
        self.spawn_food(rng);
        log!(
            "Game started on {}x{} field, snake at {} heading {:?}",
            self.field_size.width,
            self.field_size.height,
            self.snake.head(),
            self.direction
        );
        Ok(())
    }

    /// Records a turn for the next tick. Turns that reverse the direction the
    /// snake is currently moving in are dropped, as is everything after game
    /// over. Returns whether the request was kept.
    pub fn on_input(&mut self, direction: Direction) -> bool {
        if matches!(self.phase, GamePhase::GameOver(_)) || direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    pub fn tick(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::NotRunning;
        }

        self.tick += 1;
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let next_head = self.snake.head().moved_by(self.direction);

        if self.snake.contains_body(next_head) {
            return self.finish(DeathReason::SelfCollision);
        }
        if !self.field_size.contains(next_head) {
            return self.finish(DeathReason::WallCollision);
        }

        if self.food_set.remove(&next_head) {
            self.snake.grow_into(self.direction);
            self.score += 1;
            log!("Ate food at {}. Score: {}", next_head, self.score);
            self.spawn_food(rng);
            TickOutcome::AteFood
        } else {
            self.snake.advance(self.direction);
            TickOutcome::Moved
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut food: Vec<Point> = self.food_set.iter().copied().collect();
        food.sort_by_key(|p| (p.y, p.x));

        BoardSnapshot {
            tick: self.tick,
            field_size: self.field_size,
            head: self.snake.head(),
            body: self.snake.body().collect(),
            tail: self.snake.tail(),
            food,
            direction: self.direction,
            score: self.score,
            game_over: match self.phase {
                GamePhase::GameOver(reason) => Some(reason),
                _ => None,
            },
        }
    }

    fn finish(&mut self, reason: DeathReason) -> TickOutcome {
        self.phase = GamePhase::GameOver(reason);
        self.pending_direction = None;
        log!("Game over: snake {} at tick {}. Score: {}", reason, self.tick, self.score);
        TickOutcome::GameOver(reason)
    }

    fn spawn_food(&mut self, rng: &mut SessionRng) {
        self.food_spawner
            .spawn(&self.field_size, &self.snake, &mut self.food_set, rng);
        debug_assert!(
            self.food_set.iter().all(|food| !self.snake.contains(*food)),
            "food overlaps the snake"
        );
    }

    #[cfg(test)]
    fn set_snake(&mut self, segments: &[Point], direction: Direction) {
        self.snake = Snake::from_segments(segments).unwrap();
        self.direction = direction;
        self.pending_direction = None;
    }

    #[cfg(test)]
    fn set_food(&mut self, food: &[Point]) {
        self.food_set = food.iter().copied().collect();
    }
}
