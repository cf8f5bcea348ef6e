// Rendering and frame-driver tuning for the web frontend. The simulation's
// own constants live in core::constants.

// Canvas painting
pub const BACKGROUND_FILL: &str = "rgba(30,30,30,1)";
pub const GLOW_FILL: &str = "hsl(210,100%,80%)";
pub const GLOW_RADIUS_PAD: f64 = 5.0; // glow radius is target speed plus this, px

// Head markers
pub const HEAD_RADIUS_SPAN: f64 = 2.0; // radius contribution of the visual seed, px
pub const HEAD_ACTIVE_RADIUS_PAD: f64 = 1.0; // extra radius while the target is in reach, px
pub const HEAD_ACTIVE_FILL: &str = "white";
pub const HEAD_RESTING_FILL: &str = "darkcyan";

// Body strokes, keyed to each tendril's visual seed
pub const BODY_HUE_BASE: f64 = 180.0; // degrees, cyan end of the ramp
pub const BODY_HUE_SPAN: f64 = 60.0;
pub const BODY_LIGHTNESS_BASE: f64 = 25.0; // percent
pub const BODY_LIGHTNESS_SPAN: f64 = 60.0;
pub const BODY_WIDTH_SPAN: f64 = 2.0; // stroke width is seed times this, px

// Frame scheduling
pub const FALLBACK_FRAME_MS: i32 = 16; // timer cadence when requestAnimationFrame is unavailable
pub const FRAME_LOG_EVERY: u64 = 600; // frames between frame-time debug reports
