use std::sync::{Arc, Mutex};

use common::games::lightcycle::{Direction, DuelGameState, PlayerSlot};

#[derive(Debug, Clone)]
pub enum ClientCommand {
    Start,
    Restart,
    Turn {
        slot: PlayerSlot,
        direction: Direction,
    },
}

/// Latest engine snapshot shared between the game-loop task and the UI
/// thread. The runner publishes after every mutation; the UI only reads.
pub struct SharedState {
    game_state: Arc<Mutex<Option<DuelGameState>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            game_state: Arc::new(Mutex::new(None)),
        }
    }

    pub fn publish(&self, state: &DuelGameState) {
        *self.game_state.lock().unwrap() = Some(state.clone());
    }

    pub fn get_game_state(&self) -> Option<DuelGameState> {
        self.game_state.lock().unwrap().clone()
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            game_state: Arc::clone(&self.game_state),
        }
    }
}
