use canvas::{GradientStop, RenderCommand, RenderFrame};
use foundation::time::Time;
use scene::{HotspotCatalog, SphereGeometry, hotspot_position};

/// Outer ring around each marker.
const RING_RADIUS: f64 = 12.0;
const RING_WIDTH: f64 = 2.0;
const RING_ALPHA: f32 = 0.4;

/// Solid marker dot, base radius before the pulse scales it.
const DOT_RADIUS: f64 = 6.0;
const DOT_ALPHA: f32 = 0.9;

/// Soft glow footprint around the dot.
const GLOW_RADIUS: f64 = 20.0;
const GLOW_ALPHA: f32 = 0.6;

/// Faint spoke back to the sphere center.
const SPOKE_WIDTH: f64 = 1.0;
const SPOKE_ALPHA: f32 = 0.2;

/// Markers for the monitored sites, drawn at their orbit positions.
///
/// Each marker breathes on the wall clock with a per-index phase shift so the
/// five never pulse in lockstep. Positions come from the shared orbit formula;
/// this layer never caches them.
#[derive(Debug, Copy, Clone, Default)]
pub struct HotspotLayer;

impl HotspotLayer {
    pub fn emit(
        &self,
        catalog: &HotspotCatalog,
        rotation: f64,
        geometry: SphereGeometry,
        wall: Time,
        out: &mut RenderFrame,
    ) {
        let count = catalog.len();
        for (index, hotspot) in catalog.iter().enumerate() {
            let position = hotspot_position(index, count, rotation, geometry, hotspot.offset);
            let pulse = marker_pulse(wall, index);

            out.push(RenderCommand::StrokeCircle {
                center: position,
                radius: RING_RADIUS,
                width: RING_WIDTH,
                color: hotspot.color.with_alpha(RING_ALPHA * pulse),
            });
            out.push(RenderCommand::FillCircle {
                center: position,
                radius: DOT_RADIUS * pulse as f64,
                color: hotspot.color.with_alpha(DOT_ALPHA),
            });
            out.push(RenderCommand::RadialFill {
                from_center: position,
                from_radius: 0.0,
                to_center: position,
                to_radius: GLOW_RADIUS,
                stops: vec![
                    GradientStop::new(0.0, hotspot.color),
                    GradientStop::new(1.0, hotspot.color.with_alpha(0.0)),
                ],
                alpha: GLOW_ALPHA * pulse,
            });
            out.push(RenderCommand::Line {
                from: position,
                to: geometry.center,
                width: SPOKE_WIDTH,
                color: hotspot.color.with_alpha(SPOKE_ALPHA),
            });
        }
    }
}

/// Pulse factor in `[0.6, 1.0]`; `index` offsets the phase per marker.
pub fn marker_pulse(wall: Time, index: usize) -> f32 {
    (0.8 + 0.2 * (4.0 * wall.0 + index as f64).sin()) as f32
}
