use canvas::{RenderCommand, RenderFrame};
use foundation::color::Rgba;
use foundation::math::{Vec2, turn_fraction};
use scene::SphereGeometry;

const CYAN: Rgba = Rgba::from_u8(0x00, 0xff, 0xff);

/// Latitude bands at 0.4r vertical spacing, flattened to 0.1r.
const LAT_BAND_SPACING: f64 = 0.4;
const LAT_BAND_FLATTEN: f64 = 0.1;
const LAT_ALPHA: f32 = 0.25;

pub const LONGITUDE_BANDS: usize = 8;
const LON_ALPHA: f32 = 0.3;

const LINE_WIDTH: f64 = 1.0;

/// Latitude/longitude grid over the sphere.
///
/// Latitude rings are fixed; longitude rings pivot with the globe rotation,
/// their horizontal radius collapsing as each meridian swings edge-on. This
/// is what sells the 2D disc as a turning sphere.
#[derive(Debug, Copy, Clone, Default)]
pub struct GraticuleLayer;

impl GraticuleLayer {
    pub fn emit(&self, geometry: SphereGeometry, rotation: f64, out: &mut RenderFrame) {
        let c = geometry.center;
        let r = geometry.radius;

        for i in -2..=2i64 {
            let drop = i as f64 * r * LAT_BAND_SPACING;
            let rx = (r * r - drop * drop).sqrt();
            out.push(RenderCommand::StrokeEllipse {
                center: Vec2::new(c.x, c.y + drop),
                radii: Vec2::new(rx, r * LAT_BAND_FLATTEN),
                width: LINE_WIDTH,
                color: CYAN.with_alpha(LAT_ALPHA),
            });
        }

        for i in 0..LONGITUDE_BANDS {
            let angle = turn_fraction(i, LONGITUDE_BANDS) + rotation;
            let rx = (r * angle.cos()).abs();
            out.push(RenderCommand::StrokeEllipse {
                center: c,
                radii: Vec2::new(rx, r),
                width: LINE_WIDTH,
                color: CYAN.with_alpha(LON_ALPHA),
            });
        }
    }
}
