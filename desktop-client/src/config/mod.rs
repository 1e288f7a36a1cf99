mod display_config;
mod main_config;
mod snake_config;

pub use display_config::DisplayConfig;
pub use main_config::get_config_manager;
pub use snake_config::SnakeConfig;
