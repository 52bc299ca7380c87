use canvas::{RenderCommand, RenderFrame};
use foundation::color::Rgba;
use foundation::math::{Vec2, wrap_tau};
use foundation::time::Time;
use scene::SphereGeometry;

/// Orbit distances step outward from the sphere edge in three rings.
const BASE_CLEARANCE: f64 = 30.0;
const RING_SPACING: f64 = 15.0;

const DOT_RADIUS: f64 = 2.0;
const DOT_ALPHA: f32 = 0.6;

/// Even dots are cyan, odd magenta.
const STREAM_COLORS: [Rgba; 2] = [
    Rgba::from_u8(0x00, 0xff, 0xff),
    Rgba::from_u8(0xff, 0x00, 0xff),
];

/// Decorative data-stream dots circling outside the sphere.
///
/// Purely wall-clock driven, no state: dot `i` rides at angle
/// `0.5·wall + i` on one of three rings beyond the sphere edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StreamLayer {
    pub count: usize,
}

impl StreamLayer {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn emit(&self, geometry: SphereGeometry, wall: Time, out: &mut RenderFrame) {
        for i in 0..self.count {
            let angle = wrap_tau(0.5 * wall.0 + i as f64);
            let distance = geometry.radius + BASE_CLEARANCE + (i % 3) as f64 * RING_SPACING;
            out.push(RenderCommand::FillCircle {
                center: Vec2::new(
                    geometry.center.x + distance * angle.cos(),
                    geometry.center.y + distance * angle.sin(),
                ),
                radius: DOT_RADIUS,
                color: STREAM_COLORS[i % 2].with_alpha(DOT_ALPHA),
            });
        }
    }
}
