use super::types::{DeathReason, Direction, FieldSize, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellRole {
    Head,
    Body,
    Tail,
    Food,
}

/// Everything a renderer needs to redraw the whole board after a tick.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardSnapshot {
    pub tick: u64,
    pub field_size: FieldSize,
    pub head: Point,
    pub body: Vec<Point>,
    pub tail: Point,
    pub food: Vec<Point>,
    pub direction: Direction,
    pub score: u32,
    pub game_over: Option<DeathReason>,
}

impl BoardSnapshot {
    /// Food first, then the snake from tail to head, so later cells paint
    /// over earlier ones.
    pub fn cells(&self) -> impl Iterator<Item = (Point, CellRole)> + '_ {
        self.food
            .iter()
            .map(|p| (*p, CellRole::Food))
            .chain(std::iter::once((self.tail, CellRole::Tail)))
            .chain(self.body.iter().rev().map(|p| (*p, CellRole::Body)))
            .chain(std::iter::once((self.head, CellRole::Head)))
    }

    pub fn snake_len(&self) -> usize {
        self.body.len() + 2
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameOverNotification {
    pub score: u32,
    pub reason: DeathReason,
    pub ticks: u64,
    pub final_state: BoardSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_paint_head_last() {
        let snapshot = BoardSnapshot {
            tick: 3,
            field_size: FieldSize::new(19, 19),
            head: Point::new(9, 7),
            body: vec![Point::new(9, 8)],
            tail: Point::new(9, 9),
            food: vec![Point::new(2, 2)],
            direction: Direction::Up,
            score: 1,
            game_over: None,
        };

        let cells: Vec<_> = snapshot.cells().collect();
        assert_eq!(
            cells,
            vec![
                (Point::new(2, 2), CellRole::Food),
                (Point::new(9, 9), CellRole::Tail),
                (Point::new(9, 8), CellRole::Body),
                (Point::new(9, 7), CellRole::Head),
            ]
        );
        assert_eq!(snapshot.snake_len(), 3);
    }
}
