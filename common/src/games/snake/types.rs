use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    pub fn moved_by(mut self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        self.translate(dx, dy);
        self
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal directions in cyclic order: neighbours on the compass differ by
/// one in `order()`, opposites by two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

const KEY_BINDINGS: [(&str, Direction); 4] = [
    ("ArrowUp", Direction::Up),
    ("ArrowDown", Direction::Down),
    ("ArrowLeft", Direction::Left),
    ("ArrowRight", Direction::Right),
];

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    /// Unit step on a grid whose y axis grows downward.
    pub fn vector(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
        }
    }

    pub fn order(self) -> u8 {
        match self {
            Direction::Right => 0,
            Direction::Up => 1,
            Direction::Left => 2,
            Direction::Down => 3,
        }
    }

    pub fn opposite(self) -> Direction {
        Self::ALL[((self.order() + 2) % 4) as usize]
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        (self.order() as i32 - other.order() as i32).abs() % 4 == 2
    }

    pub fn from_key_code(key_code: &str) -> Option<Direction> {
        KEY_BINDINGS
            .iter()
            .find(|(code, _)| *code == key_code)
            .map(|(_, direction)| *direction)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

impl fmt::Display for DeathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeathReason::WallCollision => write!(f, "hit the wall"),
            DeathReason::SelfCollision => write!(f, "bit itself"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    pub width: usize,
    pub height: usize,
}

impl FieldSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height as i32).flat_map(move |y| (0..self.width as i32).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_direction_reverses_its_opposite_only() {
        for direction in Direction::ALL {
            assert!(direction.is_opposite(&direction.opposite()));
            assert!(!direction.is_opposite(&direction));
            for other in Direction::ALL {
                let expected = other == direction.opposite();
                assert_eq!(direction.is_opposite(&other), expected, "{:?} vs {:?}", direction, other);
            }
        }
    }

    #[test]
    fn test_up_down_orders_differ_by_two() {
        assert_eq!(Direction::Up.order(), 1);
        assert_eq!(Direction::Down.order(), 3);
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(!Direction::Up.is_opposite(&Direction::Right));
        assert!(!Direction::Right.is_opposite(&Direction::Down));
    }

    #[test]
    fn test_moved_by_is_chainable_and_leaves_original() {
        let start = Point::new(9, 9);
        let moved = start.moved_by(Direction::Up).moved_by(Direction::Right);
        assert_eq!(moved, Point::new(10, 8));
        assert_eq!(start, Point::new(9, 9));
    }

    #[test]
    fn test_translate_mutates_in_place() {
        let mut point = Point::new(1, 1);
        point.translate(-2, 3);
        assert_eq!(point, Point::new(-1, 4));
    }

    #[test]
    fn test_key_codes_map_to_directions() {
        assert_eq!(Direction::from_key_code("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key_code("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key_code("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key_code("ArrowRight"), Some(Direction::Right));
        assert_eq!(Direction::from_key_code("KeyW"), None);
        assert_eq!(Direction::from_key_code(""), None);
    }

    #[test]
    fn test_field_contains_bounds() {
        let field = FieldSize::new(19, 19);
        assert!(field.contains(Point::new(0, 0)));
        assert!(field.contains(Point::new(18, 18)));
        assert!(!field.contains(Point::new(19, 9)));
        assert!(!field.contains(Point::new(-1, 9)));
        assert!(!field.contains(Point::new(9, -1)));
        assert_eq!(field.cells().count(), field.area());
    }
}
