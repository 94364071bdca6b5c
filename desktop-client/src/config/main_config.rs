use common::config::{ConfigManager, FileContentConfigProvider, Validate};
use serde::{Deserialize, Serialize};

use super::DuelLobbyConfig;

const CONFIG_FILE_NAME: &str = "light_cycles_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config> {
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub duel: DuelLobbyConfig,
    pub show_grid_lines: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.duel.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duel: DuelLobbyConfig::default(),
            show_grid_lines: true,
        }
    }
}
