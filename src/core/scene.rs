use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

use super::constants::{CHAIN_COUNT, CHAIN_MAX_LENGTH, CHAIN_MIN_LENGTH, SEGMENTS_PER_CHAIN};
use super::geometry::Viewport;
use super::target::TargetTracker;
use super::tendril::Tendril;

/// Swarm construction parameters.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub chain_count: usize,
    pub segments_per_chain: usize,
    pub min_chain_length: f64,
    pub max_chain_length: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            chain_count: CHAIN_COUNT,
            segments_per_chain: SEGMENTS_PER_CHAIN,
            min_chain_length: CHAIN_MIN_LENGTH,
            max_chain_length: CHAIN_MAX_LENGTH,
        }
    }
}

/// The whole swarm plus the target it shares.
pub struct Scene {
    tendrils: Vec<Tendril>,
    target: TargetTracker,
}

impl Scene {
    /// Scatter `config.chain_count` tendrils over the viewport. The same
    /// seed reproduces the same swarm.
    pub fn new(viewport: Viewport, config: &SceneConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let length_span = config.max_chain_length - config.min_chain_length;
        let tendrils = (0..config.chain_count)
            .map(|_| {
                let origin = DVec2::new(
                    rng.gen::<f64>() * viewport.width,
                    rng.gen::<f64>() * viewport.height,
                );
                let total_length = config.min_chain_length + rng.gen::<f64>() * length_span;
                let initial_angle = rng.gen::<f64>() * TAU;
                let visual_seed = rng.gen::<f64>();
                Tendril::new(
                    origin,
                    total_length,
                    config.segments_per_chain,
                    initial_angle,
                    visual_seed,
                )
            })
            .collect();
        Self {
            tendrils,
            target: TargetTracker::new(),
        }
    }

    /// One simulation step: move the target, then bend every tendril against
    /// the same (previous, current) pair.
    pub fn advance(&mut self, pointer: Option<DVec2>, viewport: Viewport) {
        self.target.advance(pointer, viewport);
        let last_target = self.target.previous();
        let target = self.target.current();
        for tendril in &mut self.tendrils {
            tendril.follow(last_target, target);
        }
    }

    pub fn tendrils(&self) -> &[Tendril] {
        &self.tendrils
    }

    pub fn target(&self) -> &TargetTracker {
        &self.target
    }
}
