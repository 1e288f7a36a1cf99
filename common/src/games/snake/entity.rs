use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

/// Snake body split into head, interior body and tail. The interior is kept
/// both in order and as a set so `contains_body` stays O(1).
#[derive(Clone, Debug)]
pub struct Snake {
    head: Point,
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
    tail: Point,
}

impl Snake {
    pub fn new(head: Point, tail: Point) -> Self {
        Self {
            head,
            body: VecDeque::new(),
            body_set: HashSet::new(),
            tail,
        }
    }

    /// Builds a snake from segments ordered head first.
    pub fn from_segments(segments: &[Point]) -> Result<Self, String> {
        let [head, body @ .., tail] = segments else {
            return Err(format!(
                "Snake needs at least 2 segments, got {}",
                segments.len()
            ));
        };

        let mut seen = HashSet::with_capacity(segments.len());
        for segment in segments {
            if !seen.insert(*segment) {
                return Err(format!("Snake segment {} is duplicated", segment));
            }
        }

        Ok(Self {
            head: *head,
            body: body.iter().copied().collect(),
            body_set: body.iter().copied().collect(),
            tail: *tail,
        })
    }

    pub fn head(&self) -> Point {
        self.head
    }

    pub fn tail(&self) -> Point {
        self.tail
    }

    pub fn body(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    /// Head to tail.
    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.head)
            .chain(self.body.iter().copied())
            .chain(std::iter::once(self.tail))
    }

    pub fn len(&self) -> usize {
        self.body.len() + 2
    }

    /// Moves one cell keeping the length: the old head joins the body and the
    /// last body segment (or the old head, for a bare head+tail snake) becomes
    /// the tail.
    pub fn advance(&mut self, direction: Direction) {
        self.push_head(direction);
        if let Some(new_tail) = self.body.pop_back() {
            self.body_set.remove(&new_tail);
            self.tail = new_tail;
        }
    }

    /// Moves one cell and keeps the tail where it is, so the length grows by one.
    pub fn grow_into(&mut self, direction: Direction) {
        self.push_head(direction);
    }

    pub fn contains(&self, point: Point) -> bool {
        point == self.head || point == self.tail || self.contains_body(point)
    }

    /// Interior segments only. The tail is left out because it vacates its
    /// cell on a non-growing move, so this is only meaningful for testing the
    /// next head position before a move.
    pub fn contains_body(&self, point: Point) -> bool {
        self.body_set.contains(&point)
    }

    fn push_head(&mut self, direction: Direction) {
        let old_head = self.head;
        self.body.push_front(old_head);
        let inserted = self.body_set.insert(old_head);
        debug_assert!(inserted, "snake head {} overlapped its own body", old_head);
        self.head = old_head.moved_by(direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn segments(snake: &Snake) -> Vec<Point> {
        snake.segments().collect()
    }

    #[test]
    fn test_new_snake_has_length_two() {
        let snake = Snake::new(p(9, 9), p(9, 10));
        assert_eq!(snake.len(), 2);
        assert_eq!(segments(&snake), vec![p(9, 9), p(9, 10)]);
    }

    #[test]
    fn test_advance_bare_snake_moves_tail_to_old_head() {
        let mut snake = Snake::new(p(9, 9), p(9, 10));
        snake.advance(Direction::Up);
        assert_eq!(segments(&snake), vec![p(9, 8), p(9, 9)]);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.body().count(), 0);
    }

    #[test]
    fn test_advance_preserves_length_and_shifts_body() {
        let mut snake = Snake::from_segments(&[p(5, 5), p(5, 6), p(5, 7), p(5, 8)]).unwrap();
        snake.advance(Direction::Left);
        assert_eq!(segments(&snake), vec![p(4, 5), p(5, 5), p(5, 6), p(5, 7)]);
        assert_eq!(snake.len(), 4);
        assert!(!snake.contains(p(5, 8)));
    }

    #[test]
    fn test_grow_into_adds_one_segment_and_keeps_tail() {
        let mut snake = Snake::new(p(9, 8), p(9, 9));
        snake.grow_into(Direction::Up);
        assert_eq!(segments(&snake), vec![p(9, 7), p(9, 8), p(9, 9)]);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.tail(), p(9, 9));
    }

    #[test]
    fn test_new_head_is_old_head_moved_by_direction() {
        let mut snake = Snake::from_segments(&[p(3, 3), p(3, 4), p(3, 5)]).unwrap();
        for direction in [Direction::Right, Direction::Up, Direction::Left, Direction::Up] {
            let expected = snake.head().moved_by(direction);
            snake.advance(direction);
            assert_eq!(snake.head(), expected);

            let expected = snake.head().moved_by(direction);
            snake.grow_into(direction);
            assert_eq!(snake.head(), expected);
        }
    }

    #[test]
    fn test_contains_and_contains_body_differ_on_head_and_tail() {
        let snake = Snake::from_segments(&[p(5, 5), p(5, 6), p(5, 7)]).unwrap();

        assert!(snake.contains(p(5, 5)));
        assert!(snake.contains(p(5, 6)));
        assert!(snake.contains(p(5, 7)));
        assert!(!snake.contains(p(6, 6)));

        assert!(!snake.contains_body(p(5, 5)));
        assert!(snake.contains_body(p(5, 6)));
        assert!(!snake.contains_body(p(5, 7)));
    }

    #[test]
    fn test_from_segments_rejects_short_or_overlapping() {
        assert!(Snake::from_segments(&[]).is_err());
        assert!(Snake::from_segments(&[p(1, 1)]).is_err());
        assert!(Snake::from_segments(&[p(1, 1), p(1, 2), p(1, 1)]).is_err());
    }
}
