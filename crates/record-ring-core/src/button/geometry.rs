use crate::ButtonConfig;

/// A pointer location in the control's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Construct a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Point-in-bounds test the host UI layer supplies to the control.
///
/// The control never assumes a particular shape; closures implement the
/// trait directly, and [`RectBounds`]/[`CircleBounds`] cover the common
/// cases.
pub trait HitTest {
    /// Whether `point` lies inside the control's hit region.
    fn contains_point(&self, point: Point) -> bool;
}

impl<F> HitTest for F
where
    F: Fn(Point) -> bool,
{
    fn contains_point(&self, point: Point) -> bool {
        self(point)
    }
}

/// Axis-aligned rectangular hit region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectBounds {
    /// Top-left corner.
    pub origin: Point,
    /// Region width.
    pub width: f32,
    /// Region height.
    pub height: f32,
}

impl HitTest for RectBounds {
    fn contains_point(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.height
    }
}

/// Circular hit region matching the control's rounded face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleBounds {
    /// Circle center.
    pub center: Point,
    /// Circle radius.
    pub radius: f32,
}

impl CircleBounds {
    /// Region for a control of the given size with its origin at zero.
    pub fn centered(size: f32) -> Self {
        Self {
            center: Point::new(size / 2.0, size / 2.0),
            radius: size / 2.0,
        }
    }
}

impl HitTest for CircleBounds {
    fn contains_point(&self, point: Point) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Radii and stroke width the external renderer needs for one frame.
///
/// Path construction and drawing stay outside the core; this is only the
/// scale arithmetic. While recording, the outer circle expands to the
/// full control and the center disc shrinks to its recording scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingMetrics {
    /// Radius of the outer circle.
    pub outer_radius: f32,
    /// Radius of the center disc.
    pub center_radius: f32,
    /// Radius of the progress ring's centerline.
    pub ring_radius: f32,
    /// Stroke width of the progress ring.
    pub ring_width: f32,
}

impl RingMetrics {
    /// Resolve metrics for a control of `size`, in its normal or
    /// recording appearance.
    pub fn resolve(config: &ButtonConfig, size: f32, recording: bool) -> Self {
        let (outer_radius, center_radius) = if recording {
            (size / 2.0, size * config.center_disc_recording_scale / 2.0)
        } else {
            (
                size * config.outer_ring_scale / 2.0,
                size * config.center_disc_scale / 2.0,
            )
        };

        Self {
            outer_radius,
            center_radius,
            ring_radius: size / 2.0 * (1.0 - config.progress_width_scale / 2.0),
            ring_width: size * config.progress_width_scale / 2.0,
        }
    }
}
