use std::collections::HashSet;

use super::types::{CrashReason, Direction, Point};

/// One player's light cycle. The trail is append-only: index 0 is the spawn
/// cell and the last element always equals `position`.
#[derive(Clone, Debug)]
pub struct LightCycle {
    pub position: Point,
    pub heading: Direction,
    pub trail: Vec<Point>,
    pub trail_set: HashSet<Point>,
    pub crash_reason: Option<CrashReason>,
}

impl LightCycle {
    pub fn spawn(position: Point, heading: Direction) -> Self {
        Self {
            position,
            heading,
            trail: vec![position],
            trail_set: HashSet::from([position]),
            crash_reason: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.crash_reason.is_none()
    }

    pub fn head(&self) -> Point {
        *self
            .trail
            .last()
            .expect("Cycle trail should never be empty")
    }

    pub fn advance(&mut self) {
        if !self.is_alive() {
            return;
        }
        let (dx, dy) = self.heading.delta();
        self.position = Point::new(self.position.x + dx, self.position.y + dy);
        self.trail.push(self.position);
        self.trail_set.insert(self.position);
    }

    /// Only an axis change is a real turn; re-confirming the current heading
    /// or reversing 180 degrees is ignored.
    pub fn turn(&mut self, new_heading: Direction) {
        if !self.is_alive() {
            return;
        }
        if new_heading.same_axis(&self.heading) {
            return;
        }
        self.heading = new_heading;
    }

    pub fn kill(&mut self, reason: CrashReason) {
        if self.is_alive() {
            self.crash_reason = Some(reason);
        }
    }

    pub fn reset(&mut self, position: Point, heading: Direction) {
        self.position = position;
        self.heading = heading;
        self.trail = vec![position];
        self.trail_set = HashSet::from([position]);
        self.crash_reason = None;
    }
}
