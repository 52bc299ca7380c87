use canvas::{GradientStop, RenderCommand, RenderFrame};
use foundation::color::Rgba;
use foundation::math::Vec2;
use foundation::time::Time;
use scene::SphereGeometry;

const CYAN: Rgba = Rgba::from_u8(0x00, 0xff, 0xff);

/// Glow halo spans 0.9r to 1.8r around the sphere.
const GLOW_INNER_FRACTION: f64 = 0.9;
const GLOW_OUTER_FRACTION: f64 = 1.8;
const GLOW_ALPHA: f32 = 0.6;

/// Body shading: light falls from the upper left, focus at center - 0.4r.
const BODY_FOCUS_FRACTION: f64 = 0.4;
const BODY_INNER_FRACTION: f64 = 0.1;

const OUTLINE_WIDTH: f64 = 3.0;

/// The globe body: outer glow, shaded sphere, pulsing outline.
#[derive(Debug, Copy, Clone, Default)]
pub struct SphereLayer;

impl SphereLayer {
    pub fn emit(&self, geometry: SphereGeometry, wall: Time, out: &mut RenderFrame) {
        let c = geometry.center;
        let r = geometry.radius;

        out.push(RenderCommand::RadialFill {
            from_center: c,
            from_radius: r * GLOW_INNER_FRACTION,
            to_center: c,
            to_radius: r * GLOW_OUTER_FRACTION,
            stops: vec![
                GradientStop::new(0.0, CYAN.with_alpha(0.4)),
                GradientStop::new(0.5, CYAN.with_alpha(0.2)),
                GradientStop::new(1.0, CYAN.with_alpha(0.0)),
            ],
            alpha: GLOW_ALPHA,
        });

        out.push(RenderCommand::RadialFill {
            from_center: Vec2::new(
                c.x - r * BODY_FOCUS_FRACTION,
                c.y - r * BODY_FOCUS_FRACTION,
            ),
            from_radius: r * BODY_INNER_FRACTION,
            to_center: c,
            to_radius: r,
            stops: vec![
                GradientStop::new(0.0, Rgba::from_u8(0x2a, 0x5a, 0x7a)),
                GradientStop::new(0.4, Rgba::from_u8(0x1a, 0x3a, 0x52)),
                GradientStop::new(0.7, Rgba::from_u8(0x0a, 0x16, 0x28)),
                GradientStop::new(1.0, Rgba::from_u8(0x05, 0x05, 0x10)),
            ],
            alpha: 1.0,
        });

        out.push(RenderCommand::StrokeCircle {
            center: c,
            radius: r,
            width: OUTLINE_WIDTH,
            color: CYAN.with_alpha(outline_pulse(wall)),
        });
    }
}

/// Outline alpha breathes between 0.2 and 1.0 on the wall clock.
pub fn outline_pulse(wall: Time) -> f32 {
    (0.6 + 0.4 * (2.0 * wall.0).sin()) as f32
}

#[cfg(test)]
mod tests {
    use super::{SphereLayer, outline_pulse};
    use canvas::{RenderCommand, RenderFrame};
    use foundation::math::Vec2;
    use foundation::time::Time;
    use scene::SphereGeometry;

    fn geometry() -> SphereGeometry {
        SphereGeometry {
            center: Vec2::new(400.0, 300.0),
            radius: 90.0,
        }
    }

    #[test]
    fn emits_glow_body_outline_in_order() {
        let mut frame = RenderFrame::new();
        SphereLayer.emit(geometry(), Time(0.0), &mut frame);
        assert_eq!(frame.len(), 3);

        let RenderCommand::RadialFill {
            from_radius,
            to_radius,
            ..
        } = &frame.commands[0]
        else {
            panic!("expected glow");
        };
        assert_eq!(*from_radius, 81.0);
        assert_eq!(*to_radius, 162.0);

        let RenderCommand::RadialFill {
            from_center,
            from_radius,
            to_radius,
            stops,
            ..
        } = &frame.commands[1]
        else {
            panic!("expected body");
        };
        assert_eq!(*from_center, Vec2::new(400.0 - 36.0, 300.0 - 36.0));
        assert_eq!(*from_radius, 9.0);
        assert_eq!(*to_radius, 90.0);
        assert_eq!(stops.len(), 4);
        assert_eq!(stops[1].t, 0.4);

        let RenderCommand::StrokeCircle { radius, width, .. } = &frame.commands[2] else {
            panic!("expected outline");
        };
        assert_eq!(*radius, 90.0);
        assert_eq!(*width, 3.0);
    }

    #[test]
    fn outline_breathes_on_the_wall_clock() {
        assert_eq!(outline_pulse(Time(0.0)), 0.6);
        let quarter = std::f64::consts::FRAC_PI_4; // sin(2t) = 1
        assert!((outline_pulse(Time(quarter)) - 1.0).abs() < 1e-6);
        let trough = 3.0 * std::f64::consts::FRAC_PI_4; // sin(2t) = -1
        assert!((outline_pulse(Time(trough)) - 0.2).abs() < 1e-6);
    }
}
