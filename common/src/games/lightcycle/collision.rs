use super::cycle::LightCycle;
use super::types::{CrashReason, FieldSize};

/// Evaluates whether a cycle's head position is fatal, after both cycles
/// have advanced for the tick. Checks run in a fixed order (wall, self,
/// opponent) so the reported reason is deterministic.
pub fn check_crash(
    cycle: &LightCycle,
    opponent: &LightCycle,
    field_size: &FieldSize,
) -> Option<CrashReason> {
    let head = cycle.position;

    if !field_size.contains(head) {
        return Some(CrashReason::WallCollision);
    }

    // Every own trail cell except the just-appended head itself.
    let (_, earlier) = cycle
        .trail
        .split_last()
        .expect("Cycle trail should never be empty");
    if earlier.contains(&head) {
        return Some(CrashReason::SelfCollision);
    }

    // The opponent's trail is a physical obstacle whether or not its rider
    // is still alive. The opponent's own head counts, which is what makes
    // head-on crashes fatal for both sides.
    if opponent.trail_set.contains(&head) {
        return Some(CrashReason::OpponentCollision);
    }

    None
}
