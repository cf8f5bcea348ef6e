pub mod constants;
pub mod geometry;
pub mod scene;
pub mod segment;
pub mod target;
pub mod tendril;

pub use constants::*;
pub use geometry::{heading, Viewport};
pub use scene::{Scene, SceneConfig};
pub use segment::Segment;
pub use target::{idle_point, TargetTracker};
pub use tendril::Tendril;
