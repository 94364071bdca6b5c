use crate::log;

use super::collision::check_crash;
use super::cycle::LightCycle;
use super::types::{Direction, FieldSize, Outcome, Phase, PlayerSlot, Point};

/// Owns the full duel: both cycles, the field bounds and the phase machine.
/// The phase lifecycle is Waiting -> Running -> GameOver, with reset()
/// returning to Waiting from anywhere.
#[derive(Clone, Debug)]
pub struct DuelGameState {
    pub cycles: [LightCycle; 2],
    pub field_size: FieldSize,
    pub phase: Phase,
    pub outcome: Option<Outcome>,
}

impl DuelGameState {
    pub fn new(field_size: FieldSize) -> Self {
        if field_size.width < 1 || field_size.height < 1 {
            panic!("Duel field dimensions must be positive");
        }
        if field_size.width * field_size.height < 2 {
            panic!("Duel field must hold two distinct spawn cells");
        }

        let cycles =
            spawn_placements(&field_size).map(|(position, heading)| LightCycle::spawn(position, heading));

        Self {
            cycles,
            field_size,
            phase: Phase::Waiting,
            outcome: None,
        }
    }

    pub fn cycle(&self, slot: PlayerSlot) -> &LightCycle {
        &self.cycles[slot.index()]
    }

    pub fn start(&mut self) {
        if self.phase != Phase::Waiting {
            return;
        }
        self.phase = Phase::Running;
        log!(
            "Duel started on a {}x{} field",
            self.field_size.width,
            self.field_size.height
        );
    }

    /// Steers one player's cycle. Callable in any phase; the cycle's own
    /// guards make it inert unless the cycle is alive.
    pub fn set_direction(&mut self, slot: PlayerSlot, direction: Direction) {
        self.cycles[slot.index()].turn(direction);
    }

    /// One simulation step: advance both live cycles, then judge both heads
    /// against the post-advance state of the whole field.
    pub fn tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }

        for cycle in self.cycles.iter_mut() {
            cycle.advance();
        }

        // Both verdicts are taken before either kill lands, so neither
        // player's check can see the other's death from the same tick.
        let crashes = PlayerSlot::BOTH.map(|slot| {
            let cycle = self.cycle(slot);
            if !cycle.is_alive() {
                return None;
            }
            check_crash(cycle, self.cycle(slot.opponent()), &self.field_size)
        });

        for (slot, crash) in PlayerSlot::BOTH.into_iter().zip(crashes) {
            if let Some(reason) = crash {
                let head = self.cycle(slot).position;
                log!("{} {} at ({}, {})", slot, reason, head.x, head.y);
                self.cycles[slot.index()].kill(reason);
            }
        }

        self.resolve_phase();
    }

    pub fn reset(&mut self) {
        for (cycle, (position, heading)) in self
            .cycles
            .iter_mut()
            .zip(spawn_placements(&self.field_size))
        {
            cycle.reset(position, heading);
        }
        self.phase = Phase::Waiting;
        self.outcome = None;
    }

    fn resolve_phase(&mut self) {
        let alive_one = self.cycle(PlayerSlot::One).is_alive();
        let alive_two = self.cycle(PlayerSlot::Two).is_alive();

        let outcome = match (alive_one, alive_two) {
            (true, true) => return,
            (false, false) => Outcome::Draw,
            (true, false) => Outcome::PlayerOneWins,
            (false, true) => Outcome::PlayerTwoWins,
        };

        self.phase = Phase::GameOver;
        self.outcome = Some(outcome);
        log!("Duel over: {:?}", outcome);
    }
}

/// Player one spawns at the quarter point heading right, player two at the
/// three-quarter point heading left, both on the vertical midline. Fields
/// narrower than four columns pin the players to the outer columns; if the
/// cells still coincide, player two is pushed one step along an axis with
/// remaining room.
fn spawn_placements(field_size: &FieldSize) -> [(Point, Direction); 2] {
    let mid_y = field_size.height / 2;

    let (first, mut second) = if field_size.width < 4 {
        (
            Point::new(0, mid_y),
            Point::new(field_size.width - 1, mid_y),
        )
    } else {
        (
            Point::new(field_size.width / 4, mid_y),
            Point::new(field_size.width * 3 / 4, mid_y),
        )
    };

    if first == second {
        if second.x + 1 < field_size.width {
            second.x += 1;
        } else if second.y + 1 < field_size.height {
            second.y += 1;
        } else {
            second.y -= 1;
        }
    }

    [(first, Direction::Right), (second, Direction::Left)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::lightcycle::types::CrashReason;

    fn running_duel(width: i32, height: i32) -> DuelGameState {
        let mut state = DuelGameState::new(FieldSize::new(width, height));
        state.start();
        state
    }

    #[test]
    fn test_spawns_at_quarter_points() {
        let state = DuelGameState::new(FieldSize::new(40, 40));
        assert_eq!(state.cycle(PlayerSlot::One).position, Point::new(10, 20));
        assert_eq!(state.cycle(PlayerSlot::One).heading, Direction::Right);
        assert_eq!(state.cycle(PlayerSlot::Two).position, Point::new(30, 20));
        assert_eq!(state.cycle(PlayerSlot::Two).heading, Direction::Left);
        assert_eq!(state.phase, Phase::Waiting);
        assert_eq!(state.outcome, None);
    }

    #[test]
    fn test_degenerate_fields_get_distinct_spawns() {
        for (width, height) in [(1, 2), (2, 2), (3, 5), (1, 40), (2, 1), (3, 1)] {
            let state = DuelGameState::new(FieldSize::new(width, height));
            let first = state.cycle(PlayerSlot::One).position;
            let second = state.cycle(PlayerSlot::Two).position;
            assert_ne!(first, second, "spawns coincide on {}x{}", width, height);
            assert!(state.field_size.contains(first));
            assert!(state.field_size.contains(second));
        }
    }

    #[test]
    #[should_panic]
    fn test_zero_width_field_panics() {
        DuelGameState::new(FieldSize::new(0, 10));
    }

    #[test]
    #[should_panic]
    fn test_single_cell_field_panics() {
        DuelGameState::new(FieldSize::new(1, 1));
    }

    #[test]
    fn test_tick_before_start_moves_nothing() {
        let mut state = DuelGameState::new(FieldSize::new(10, 10));
        state.tick();
        assert_eq!(state.cycle(PlayerSlot::One).trail.len(), 1);
        assert_eq!(state.cycle(PlayerSlot::Two).trail.len(), 1);
        assert_eq!(state.phase, Phase::Waiting);
    }

    #[test]
    fn test_start_transitions_to_running() {
        let mut state = DuelGameState::new(FieldSize::new(10, 10));
        state.start();
        assert_eq!(state.phase, Phase::Running);
        // A second start changes nothing.
        state.start();
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_trail_grows_by_one_per_tick_while_alive() {
        let mut state = running_duel(40, 40);
        for expected_len in 2..=5 {
            state.tick();
            assert_eq!(state.cycle(PlayerSlot::One).trail.len(), expected_len);
            assert_eq!(state.cycle(PlayerSlot::Two).trail.len(), expected_len);
        }
    }

    #[test]
    fn test_wall_collision_kills_and_ends_game() {
        let mut state = running_duel(10, 10);
        // Player one drives up from (2, 5) and runs out of field on tick
        // six. Player two dodges down and then left to survive that long.
        state.set_direction(PlayerSlot::One, Direction::Up);
        state.set_direction(PlayerSlot::Two, Direction::Down);
        for _ in 0..3 {
            state.tick();
        }
        state.set_direction(PlayerSlot::Two, Direction::Left);
        for _ in 0..3 {
            state.tick();
        }
        assert_eq!(
            state.cycle(PlayerSlot::One).crash_reason,
            Some(CrashReason::WallCollision)
        );
        assert!(state.cycle(PlayerSlot::Two).is_alive());
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.outcome, Some(Outcome::PlayerTwoWins));
    }

    #[test]
    fn test_dead_cycle_trail_is_frozen_after_game_over() {
        let mut state = running_duel(10, 10);
        state.set_direction(PlayerSlot::One, Direction::Up);
        state.set_direction(PlayerSlot::Two, Direction::Down);
        for _ in 0..3 {
            state.tick();
        }
        state.set_direction(PlayerSlot::Two, Direction::Left);
        for _ in 0..3 {
            state.tick();
        }
        assert_eq!(state.phase, Phase::GameOver);
        let dead_len = state.cycle(PlayerSlot::One).trail.len();
        state.tick();
        assert_eq!(state.cycle(PlayerSlot::One).trail.len(), dead_len);
    }

    #[test]
    fn test_self_collision_on_closed_loop() {
        let mut state = running_duel(10, 10);
        // Player two drives down and away; player one boxes itself in:
        // right, up, left, down lands back on its spawn cell on tick four.
        state.set_direction(PlayerSlot::Two, Direction::Down);
        state.tick();
        state.set_direction(PlayerSlot::One, Direction::Up);
        state.tick();
        state.set_direction(PlayerSlot::One, Direction::Left);
        state.tick();
        state.set_direction(PlayerSlot::One, Direction::Down);
        state.tick();

        assert_eq!(
            state.cycle(PlayerSlot::One).crash_reason,
            Some(CrashReason::SelfCollision)
        );
        assert_eq!(state.cycle(PlayerSlot::One).position, Point::new(2, 5));
        assert_eq!(state.outcome, Some(Outcome::PlayerTwoWins));
    }

    #[test]
    fn test_head_on_collision_is_a_draw() {
        // On a 5x5 field the cycles spawn at (1, 2) and (3, 2) facing each
        // other; the first tick lands both heads on (2, 2).
        let mut state = running_duel(5, 5);
        state.tick();

        assert_eq!(state.cycle(PlayerSlot::One).position, Point::new(2, 2));
        assert_eq!(state.cycle(PlayerSlot::Two).position, Point::new(2, 2));
        assert_eq!(
            state.cycle(PlayerSlot::One).crash_reason,
            Some(CrashReason::OpponentCollision)
        );
        assert_eq!(
            state.cycle(PlayerSlot::Two).crash_reason,
            Some(CrashReason::OpponentCollision)
        );
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.outcome, Some(Outcome::Draw));
    }

    #[test]
    fn test_straight_charge_collides_on_tick_three() {
        // 10x10: spawns (2, 5) heading right and (7, 5) heading left. Two
        // ticks in, the heads sit at (4, 5) and (5, 5) with one open cell
        // between their columns already consumed; on tick three they swap
        // cells, which lands each head on the other's trail.
        let mut state = running_duel(10, 10);
        for _ in 0..2 {
            state.tick();
        }
        assert_eq!(state.cycle(PlayerSlot::One).position, Point::new(4, 5));
        assert_eq!(state.cycle(PlayerSlot::Two).position, Point::new(5, 5));
        assert_eq!(state.phase, Phase::Running);

        state.tick();
        assert_eq!(state.cycle(PlayerSlot::One).position, Point::new(5, 5));
        assert_eq!(state.cycle(PlayerSlot::Two).position, Point::new(4, 5));
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.outcome, Some(Outcome::Draw));
        assert_eq!(
            state.cycle(PlayerSlot::One).crash_reason,
            Some(CrashReason::OpponentCollision)
        );
        assert_eq!(
            state.cycle(PlayerSlot::Two).crash_reason,
            Some(CrashReason::OpponentCollision)
        );
    }

    #[test]
    fn test_turn_during_game_over_is_inert() {
        let mut state = running_duel(5, 5);
        state.tick();
        assert_eq!(state.phase, Phase::GameOver);

        let heading_before = state.cycle(PlayerSlot::One).heading;
        state.set_direction(PlayerSlot::One, Direction::Up);
        assert_eq!(state.cycle(PlayerSlot::One).heading, heading_before);
    }

    #[test]
    fn test_tick_after_game_over_is_noop() {
        let mut state = running_duel(5, 5);
        state.tick();
        let trail_len = state.cycle(PlayerSlot::One).trail.len();
        state.tick();
        state.tick();
        assert_eq!(state.cycle(PlayerSlot::One).trail.len(), trail_len);
        assert_eq!(state.phase, Phase::GameOver);
    }

    #[test]
    fn test_reset_returns_to_waiting_spawn_state() {
        let mut state = running_duel(10, 10);
        state.tick();
        state.tick();
        state.reset();

        assert_eq!(state.phase, Phase::Waiting);
        assert_eq!(state.outcome, None);
        for slot in PlayerSlot::BOTH {
            let cycle = state.cycle(slot);
            assert!(cycle.is_alive());
            assert_eq!(cycle.trail.len(), 1);
        }
        assert_eq!(state.cycle(PlayerSlot::One).position, Point::new(2, 5));
        assert_eq!(state.cycle(PlayerSlot::Two).position, Point::new(7, 5));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = running_duel(10, 10);
        state.tick();
        state.reset();
        let once = state.clone();
        state.reset();

        assert_eq!(state.phase, once.phase);
        assert_eq!(state.outcome, once.outcome);
        for slot in PlayerSlot::BOTH {
            assert_eq!(
                state.cycle(slot).position,
                once.cycle(slot).position
            );
            assert_eq!(state.cycle(slot).heading, once.cycle(slot).heading);
            assert_eq!(state.cycle(slot).trail, once.cycle(slot).trail);
        }
    }

    #[test]
    fn test_start_after_reset_runs_again() {
        let mut state = running_duel(5, 5);
        state.tick();
        assert_eq!(state.phase, Phase::GameOver);

        state.reset();
        state.start();
        assert_eq!(state.phase, Phase::Running);
        state.tick();
        assert_eq!(state.cycle(PlayerSlot::One).trail.len(), 2);
    }
}
