use std::time::Duration;

use super::game_state::DuelGameState;
use super::types::FieldSize;

pub struct DuelSessionSettings {
    pub field_width: i32,
    pub field_height: i32,
    pub tick_interval: Duration,
}

impl DuelSessionSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.field_width, self.field_height)
    }

    pub fn create_state(&self) -> DuelGameState {
        DuelGameState::new(self.field_size())
    }
}
