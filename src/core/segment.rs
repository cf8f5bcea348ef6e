use glam::DVec2;
use std::f64::consts::PI;

use super::geometry::heading;

/// One rigid link of a tendril.
///
/// `pos` is the end facing the tendril's origin, `next_pos` the end facing
/// the target. The two stay exactly `length` apart along `angle`.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub pos: DVec2,
    pub next_pos: DVec2,
    pub length: f64,
    pub angle: f64,
}

impl Segment {
    pub fn new(anchor: DVec2, length: f64, angle: f64) -> Self {
        Self {
            pos: anchor,
            next_pos: anchor + length * DVec2::from_angle(angle),
            length,
            angle,
        }
    }

    /// Swing toward `target` and land the far end on it, leaving `pos` one
    /// link behind along the new heading.
    pub fn chase(self, target: DVec2) -> Self {
        let angle = heading(self.pos, target);
        let pos = target + self.length * DVec2::from_angle(angle - PI);
        Self {
            pos,
            next_pos: pos + self.length * DVec2::from_angle(angle),
            angle,
            ..self
        }
    }

    /// Re-anchor at `anchor` keeping the current angle, so a chain of settled
    /// segments lies in its relaxed extended shape.
    pub fn settle(self, anchor: DVec2) -> Self {
        Self {
            pos: anchor,
            next_pos: anchor + self.length * DVec2::from_angle(self.angle),
            ..self
        }
    }
}
