use glam::DVec2;

/// Canvas size in backing pixels.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Angle of the line from `from` to `to`, in radians.
#[inline]
pub fn heading(from: DVec2, to: DVec2) -> f64 {
    let d = to - from;
    d.y.atan2(d.x)
}
