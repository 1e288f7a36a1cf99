use std::time::Duration;

use crate::config::{Validate, validate_range};
use super::types::{Direction, FieldSize, Point};

pub const DEFAULT_FIELD_SIZE: usize = 19;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub field_width: usize,
    pub field_height: usize,
    pub tick_interval: Duration,
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_SIZE,
            field_height: DEFAULT_FIELD_SIZE,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl SnakeSessionSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.field_width, self.field_height)
    }

    /// Head in the middle of the field, tail right below it.
    pub fn start_position(&self) -> (Point, Point) {
        let head = Point::new((self.field_width / 2) as i32, (self.field_height / 2) as i32);
        let tail = head.moved_by(Direction::Down);
        (head, tail)
    }

    pub fn start_direction(&self) -> Direction {
        Direction::Up
    }
}

impl Validate for SnakeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        validate_range("field_width", self.field_width, 5..=50)?;
        validate_range("field_height", self.field_height, 5..=50)?;
        validate_range(
            "tick_interval_ms",
            self.tick_interval.as_millis(),
            50..=1000,
        )?;
        Ok(())
    }
}
