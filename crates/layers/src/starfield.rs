use canvas::{RenderCommand, RenderFrame};
use scene::ParticleField;

/// Draw alpha for every particle dot.
pub const PARTICLE_ALPHA: f32 = 0.7;

/// Ambient particle dots behind the globe.
#[derive(Debug, Copy, Clone, Default)]
pub struct StarfieldLayer;

impl StarfieldLayer {
    pub fn emit(&self, field: &ParticleField, out: &mut RenderFrame) {
        for p in field.particles() {
            out.push(RenderCommand::FillCircle {
                center: p.position,
                radius: p.size,
                color: p.color.with_alpha(PARTICLE_ALPHA),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PARTICLE_ALPHA, StarfieldLayer};
    use canvas::{RenderCommand, RenderFrame};
    use foundation::viewport::Viewport;
    use scene::ParticleField;

    #[test]
    fn one_dot_per_particle() {
        let field = ParticleField::seed(50, Viewport::new(800, 600), 11);
        let mut frame = RenderFrame::new();
        StarfieldLayer.emit(&field, &mut frame);

        assert_eq!(frame.len(), 50);
        for (command, particle) in frame.commands.iter().zip(field.particles()) {
            let RenderCommand::FillCircle {
                center,
                radius,
                color,
            } = command
            else {
                panic!("expected fill circle");
            };
            assert_eq!(*center, particle.position);
            assert_eq!(*radius, particle.size);
            assert_eq!(color.a, PARTICLE_ALPHA);
            assert_eq!(
                (color.r, color.g, color.b),
                (particle.color.r, particle.color.g, particle.color.b)
            );
        }
    }
}
