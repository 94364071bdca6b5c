use std::time::Duration;

use common::config::Validate;
use common::games::lightcycle::DuelSessionSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DuelLobbyConfig {
    pub field_width: u32,
    pub field_height: u32,
    pub tick_interval_ms: u32,
}

impl Validate for DuelLobbyConfig {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < 10 || self.field_width > 100 {
            return Err("field_width must be between 10 and 100".to_string());
        }
        if self.field_height < 10 || self.field_height > 100 {
            return Err("field_height must be between 10 and 100".to_string());
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("tick_interval_ms must be between 50 and 5000".to_string());
        }
        Ok(())
    }
}

impl Default for DuelLobbyConfig {
    fn default() -> Self {
        Self {
            field_width: 40,
            field_height: 40,
            tick_interval_ms: 100,
        }
    }
}

impl From<&DuelLobbyConfig> for DuelSessionSettings {
    fn from(config: &DuelLobbyConfig) -> Self {
        Self {
            field_width: config.field_width as i32,
            field_height: config.field_height as i32,
            tick_interval: Duration::from_millis(config.tick_interval_ms as u64),
        }
    }
}
