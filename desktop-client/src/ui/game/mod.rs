mod snake_board;

pub use snake_board::SnakeBoardUi;
