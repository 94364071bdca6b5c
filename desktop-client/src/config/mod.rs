mod duel_lobby_config;
mod main_config;

pub use duel_lobby_config::DuelLobbyConfig;
pub use main_config::{Config, get_config_manager};
