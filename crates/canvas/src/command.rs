use foundation::color::Rgba;
use foundation::math::Vec2;

/// One stop of a radial gradient. `t` runs 0 at the inner circle to 1 at the
/// outer circle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    pub t: f32,
    pub color: Rgba,
}

impl GradientStop {
    pub fn new(t: f32, color: Rgba) -> Self {
        Self { t, color }
    }
}

/// Drawing primitives, executed in push order by the rasterizer.
///
/// Every command blends source-over onto what is already on the surface;
/// nothing clears. Colors carry their own alpha.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Translucent wash over the whole surface.
    Overlay { color: Rgba },
    FillCircle {
        center: Vec2,
        radius: f64,
        color: Rgba,
    },
    StrokeCircle {
        center: Vec2,
        radius: f64,
        width: f64,
        color: Rgba,
    },
    /// Axis-aligned ellipse outline. Either radius may be zero; the outline
    /// degenerates to a line.
    StrokeEllipse {
        center: Vec2,
        radii: Vec2,
        width: f64,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f64,
        color: Rgba,
    },
    /// Two-circle radial gradient, painted over the footprint of the outer
    /// circle. `stops` must be sorted ascending by `t`; `alpha` scales every
    /// stop's alpha.
    RadialFill {
        from_center: Vec2,
        from_radius: f64,
        to_center: Vec2,
        to_radius: f64,
        stops: Vec<GradientStop>,
        alpha: f32,
    },
}

/// Display list for one frame, collected by the scene passes and then
/// executed in order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderFrame {
    pub commands: Vec<RenderCommand>,
}

impl RenderFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{RenderCommand, RenderFrame};
    use foundation::color::Rgba;
    use foundation::math::Vec2;

    #[test]
    fn frame_collects_in_order() {
        let mut frame = RenderFrame::new();
        assert!(frame.is_empty());

        frame.push(RenderCommand::Overlay {
            color: Rgba::from_u8(5, 5, 16).with_alpha(0.15),
        });
        frame.push(RenderCommand::FillCircle {
            center: Vec2::new(1.0, 2.0),
            radius: 3.0,
            color: Rgba::from_u8(0, 255, 255),
        });

        assert_eq!(frame.len(), 2);
        assert!(matches!(frame.commands[0], RenderCommand::Overlay { .. }));
        assert!(matches!(
            frame.commands[1],
            RenderCommand::FillCircle { .. }
        ));

        frame.clear();
        assert!(frame.is_empty());
    }
}
