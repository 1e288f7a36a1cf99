use std::collections::HashSet;

use crate::games::SessionRng;
use crate::log;
use super::entity::Snake;
use super::types::{FieldSize, Point};

pub const DEFAULT_MAX_SPAWN_ATTEMPTS: usize = 100;

/// Places food on random free cells. Random sampling is tried a bounded
/// number of times, then the free cells are enumerated.
#[derive(Clone, Debug)]
pub struct FoodSpawner {
    max_attempts: usize,
}

impl Default for FoodSpawner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SPAWN_ATTEMPTS)
    }
}

impl FoodSpawner {
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Adds one food item to `food_set` and returns its position, or `None`
    /// when every cell is taken.
    pub fn spawn(
        &self,
        field_size: &FieldSize,
        snake: &Snake,
        food_set: &mut HashSet<Point>,
        rng: &mut SessionRng,
    ) -> Option<Point> {
        let position = self
            .sample(field_size, snake, food_set, rng)
            .or_else(|| Self::pick_free_cell(field_size, snake, food_set, rng));

        match position {
            Some(pos) => {
                food_set.insert(pos);
                log!("Food spawned at {}", pos);
            }
            None => {
                log!("No free cell left for food on {}x{} field", field_size.width, field_size.height);
            }
        }

        position
    }

    fn sample(
        &self,
        field_size: &FieldSize,
        snake: &Snake,
        food_set: &HashSet<Point>,
        rng: &mut SessionRng,
    ) -> Option<Point> {
        if field_size.area() == 0 {
            return None;
        }

        for _ in 0..self.max_attempts {
            let x = rng.random_range(0..field_size.width as i32);
            let y = rng.random_range(0..field_size.height as i32);
            let pos = Point::new(x, y);

            if Self::is_free(pos, snake, food_set) {
                return Some(pos);
            }
        }

        log!(
            "Random food placement failed after {} attempts, scanning free cells",
            self.max_attempts
        );
        None
    }

    fn pick_free_cell(
        field_size: &FieldSize,
        snake: &Snake,
        food_set: &HashSet<Point>,
        rng: &mut SessionRng,
    ) -> Option<Point> {
        let free_cells: Vec<Point> = field_size
            .cells()
            .filter(|pos| Self::is_free(*pos, snake, food_set))
            .collect();

        rng.choose(&free_cells).copied()
    }

    fn is_free(pos: Point, snake: &Snake, food_set: &HashSet<Point>) -> bool {
        !snake.contains(pos) && !food_set.contains(&pos)
    }
}
