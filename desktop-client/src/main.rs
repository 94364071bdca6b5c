mod config;
mod offline;
mod state;
mod ui;

use clap::Parser;
use common::config::ConfigManager;
use common::games::lightcycle::DuelSessionSettings;
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

use config::get_config_manager;
use offline::run_duel;
use state::SharedState;
use ui::DuelApp;

const STATUS_BAR_HEIGHT: f32 = 48.0;
const PIXELS_PER_CELL: f32 = 16.0;

#[derive(Parser)]
#[command(name = "light_cycles_client")]
struct Args {
    /// Path to an alternative YAML config file.
    #[arg(long)]
    config: Option<String>,
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

    let config_manager = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };
    let config = config_manager.get_config()?;

    let settings = DuelSessionSettings::from(&config.duel);
    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    log!(
        "Starting light cycles duel on a {}x{} field",
        config.duel.field_width,
        config.duel.field_height
    );

    let runner_state = shared_state.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
        rt.block_on(run_duel(settings, runner_state, command_rx));
    });

    let window_size = [
        config.duel.field_width as f32 * PIXELS_PER_CELL,
        config.duel.field_height as f32 * PIXELS_PER_CELL + STATUS_BAR_HEIGHT,
    ];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_title("Light Cycles"),
        ..Default::default()
    };

    eframe::run_native(
        "Light Cycles",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(DuelApp::new(
                shared_state,
                command_tx,
                config.show_grid_lines,
            )))
        }),
    )?;

    Ok(())
}
