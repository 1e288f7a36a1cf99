mod config;
mod offline;
mod state;
mod ui;

use clap::Parser;
use common::config::Validate;
use common::games::snake::SnakeSessionSettings;
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

use config::get_config_manager;
use offline::run_snake_game;
use state::SharedState;
use ui::{SnakeApp, SnakeBoardUi};

#[derive(Parser)]
#[command(name = "snake_client")]
struct Args {
    /// Config file path; defaults to snake_client_config.yaml next to the executable.
    #[arg(long)]
    config: Option<String>,

    /// Seed for food placement, for reproducing a game.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(args.config.as_deref()).load_or_create()?;
    let settings = SnakeSessionSettings::from(&config.snake);
    settings.validate()?;

    let seed: u64 = args.seed.unwrap_or_else(rand::random);
    log!(
        "Starting {}x{} game, tick {} ms, seed {}",
        settings.field_width,
        settings.field_height,
        settings.tick_interval.as_millis(),
        seed
    );

    let shared_state = SharedState::new();
    let (input_tx, input_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    let game_settings = settings.clone();
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                log!("Failed to start game runtime: {}", e);
                shared_state_clone.set_error(format!("Failed to start game runtime: {}", e));
                return;
            }
        };
        runtime.block_on(run_snake_game(shared_state_clone, input_rx, game_settings, seed));
    });

    let tile_size = config.display.tile_size;
    let board_size = SnakeBoardUi::new(tile_size).board_size(&settings.field_size());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_size.x + 40.0, board_size.y + 90.0])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(shared_state, input_tx, tile_size)))),
    )?;

    Ok(())
}
