mod collision;
mod cycle;
mod game_state;
mod settings;
mod types;

pub use collision::check_crash;
pub use cycle::LightCycle;
pub use game_state::DuelGameState;
pub use settings::DuelSessionSettings;
pub use types::{CrashReason, Direction, FieldSize, Outcome, Phase, PlayerSlot, Point};
