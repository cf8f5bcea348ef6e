use glam::DVec2;

use super::constants::LEAD_FACTOR;
use super::geometry::heading;
use super::segment::Segment;

/// A chain of equal-length segments anchored at a fixed origin.
///
/// `visual_seed` is a stable random in `[0, 1)` that the renderer turns into
/// this tendril's color, line width and head size.
#[derive(Clone, Debug)]
pub struct Tendril {
    pub origin: DVec2,
    pub total_length: f64,
    pub visual_seed: f64,
    pub segments: Vec<Segment>,
}

impl Tendril {
    /// Build a chain extended from `origin` along `initial_angle`, split into
    /// `segment_count` equal links (at least one).
    pub fn new(
        origin: DVec2,
        total_length: f64,
        segment_count: usize,
        initial_angle: f64,
        visual_seed: f64,
    ) -> Self {
        let segment_count = segment_count.max(1);
        let link = total_length / segment_count as f64;
        let mut segments = Vec::with_capacity(segment_count);
        let mut segment = Segment::new(origin, link, initial_angle);
        segments.push(segment);
        for _ in 1..segment_count {
            segment = Segment::new(segment.next_pos, link, initial_angle);
            segments.push(segment);
        }
        Self {
            origin,
            total_length,
            visual_seed,
            segments,
        }
    }

    /// Bend the chain toward `target` for one frame.
    ///
    /// The tip chases a lead point slightly behind the target along its
    /// direction of travel (the raw target on the first frame, when no
    /// `last_target` exists yet), and each earlier segment chases the one
    /// after it. If the target sits within the chain's span plus this frame's
    /// travel, a second pass re-anchors every segment from the origin out,
    /// which keeps resting chains pinned instead of drifting.
    pub fn follow(&mut self, last_target: Option<DVec2>, target: DVec2) {
        let angle = heading(self.origin, target);
        let travel = last_target.map_or(0.0, |last| last.distance(target));
        let aim = match last_target {
            Some(_) => target - LEAD_FACTOR * travel * DVec2::from_angle(angle),
            None => target,
        };

        let tip = self.segments.len() - 1;
        self.segments[tip] = self.segments[tip].chase(aim);
        for i in (0..tip).rev() {
            let anchor = self.segments[i + 1].pos;
            self.segments[i] = self.segments[i].chase(anchor);
        }

        if self.origin.distance(target) <= self.total_length + travel {
            self.segments[0] = self.segments[0].settle(self.origin);
            for i in 1..self.segments.len() {
                let anchor = self.segments[i - 1].next_pos;
                self.segments[i] = self.segments[i].settle(anchor);
            }
        }
    }

    /// True when `target` is no farther from the origin than the chain can
    /// stretch. Gates body rendering and the head style.
    pub fn within_reach(&self, target: DVec2) -> bool {
        self.origin.distance(target) <= self.total_length
    }
}
