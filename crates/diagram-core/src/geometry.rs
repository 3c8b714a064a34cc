// File: crates/diagram-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
    pub const fn center_x(&self) -> i32 { self.left + self.width() / 2 }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointI32 {
    pub x: i32,
    pub y: i32,
}

impl PointI32 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Point at `radius` pixels from the origin along `degrees`, screen Y pointing down.
/// Components are truncated toward zero like every other pixel in the output.
#[inline]
pub fn polar_offset(degrees: f64, radius: f64) -> PointI32 {
    let rad = degrees.to_radians();
    PointI32::new((rad.cos() * radius) as i32, -((rad.sin() * radius) as i32))
}
