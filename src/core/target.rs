use glam::DVec2;
use std::f64::consts::SQRT_2;

use super::constants::{IDLE_MARGIN, IDLE_PHASE_STEP, TARGET_SMOOTHING};
use super::geometry::Viewport;

/// The single point every tendril chases.
///
/// `current` eases toward the pointer, or toward a figure-eight idle path
/// when the pointer is away, closing a tenth of the remaining offset each
/// frame. `previous` is where `current` was one frame ago; the pair gives
/// the chains their direction and speed of travel.
#[derive(Clone, Debug)]
pub struct TargetTracker {
    current: DVec2,
    previous: Option<DVec2>,
    phase: f64,
}

impl TargetTracker {
    pub fn new() -> Self {
        Self {
            current: DVec2::ZERO,
            previous: None,
            phase: 0.0,
        }
    }

    /// One frame of target motion. The idle phase advances whether or not
    /// the pointer is present, so the idle path resumes further along after
    /// a pointer session instead of where it left off.
    pub fn advance(&mut self, pointer: Option<DVec2>, viewport: Viewport) {
        let goal = pointer.unwrap_or_else(|| idle_point(self.phase, viewport));
        let error = goal - self.current;
        self.previous = Some(self.current);
        self.current += error / TARGET_SMOOTHING;
        self.phase += IDLE_PHASE_STEP;
    }

    pub fn current(&self) -> DVec2 {
        self.current
    }

    pub fn previous(&self) -> Option<DVec2> {
        self.previous
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Distance covered between the last two frames, zero before the second.
    pub fn speed(&self) -> f64 {
        self.previous.map_or(0.0, |p| p.distance(self.current))
    }
}

impl Default for TargetTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Point on the idle figure-eight (a lemniscate centered on the viewport,
/// sized off its height) for a given phase.
pub fn idle_point(phase: f64, viewport: Viewport) -> DVec2 {
    let amplitude = viewport.height / 2.0 - IDLE_MARGIN;
    let (sin, cos) = phase.sin_cos();
    let denom = sin * sin + 1.0;
    DVec2::new(
        viewport.width / 2.0 + amplitude * SQRT_2 * cos / denom,
        viewport.height / 2.0 + amplitude * SQRT_2 * cos * sin / denom,
    )
}
