// Shared simulation tuning constants used by the web frontend.

// Target motion
pub const TARGET_SMOOTHING: f64 = 10.0; // fraction of the remaining offset closed per frame is 1/this
pub const LEAD_FACTOR: f64 = 0.8; // how far behind the direction of travel the chains aim
pub const IDLE_PHASE_STEP: f64 = 0.01; // idle-path phase advance per frame (~60 Hz)
pub const IDLE_MARGIN: f64 = 10.0; // gap kept between the idle path and the viewport edge, px

// Swarm layout
pub const CHAIN_COUNT: usize = 600;
pub const SEGMENTS_PER_CHAIN: usize = 30;
pub const CHAIN_MIN_LENGTH: f64 = 50.0; // px
pub const CHAIN_MAX_LENGTH: f64 = 400.0; // px
