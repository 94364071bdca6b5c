use common::games::lightcycle::{DuelSessionSettings, Phase};
use common::log;
use tokio::sync::mpsc;
use tokio::time::interval;

use crate::state::{ClientCommand, SharedState};

/// The external tick driver. Commands from the UI are applied between
/// ticks, so a heading change is always atomic with respect to the next
/// advance.
pub async fn run_duel(
    settings: DuelSessionSettings,
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
) {
    let mut game_state = settings.create_state();
    shared_state.publish(&game_state);

    let mut tick_timer = interval(settings.tick_interval);

    loop {
        tokio::select! {
            _ = tick_timer.tick() => {
                if game_state.phase != Phase::Running {
                    continue;
                }
                game_state.tick();
                shared_state.publish(&game_state);
            }
            command = command_rx.recv() => {
                let Some(command) = command else {
                    break;
                };
                match command {
                    ClientCommand::Start => game_state.start(),
                    ClientCommand::Restart => game_state.reset(),
                    ClientCommand::Turn { slot, direction } => {
                        game_state.set_direction(slot, direction);
                    }
                }
                shared_state.publish(&game_state);
            }
        }
    }

    log!("Duel runner stopped");
}
