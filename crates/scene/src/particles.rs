use foundation::color::Rgba;
use foundation::math::Vec2;
use foundation::viewport::Viewport;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Colors drawn by newly seeded particles.
pub const PARTICLE_PALETTE: [Rgba; 4] = [
    Rgba::from_u8(0x00, 0xff, 0xff),
    Rgba::from_u8(0xff, 0x00, 0xff),
    Rgba::from_u8(0x00, 0xaa, 0xff),
    Rgba::from_u8(0x5a, 0xff, 0x00),
];

/// One starfield particle. Recycled in place, never destroyed.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Rgba,
    pub size: f64,
}

/// Fixed-size particle population bouncing inside a rectangular bound.
///
/// Notes on determinism:
/// - Seeding draws from a `StdRng` keyed by the caller's seed, so the same
///   (count, bounds, seed) triple always produces the same field.
/// - Stepping is pure integer-frame integration with no further randomness.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Viewport,
}

impl ParticleField {
    /// Seed `count` particles uniformly over `bounds`.
    ///
    /// `bounds` must be non-empty; positions land in `[0, w) x [0, h)`,
    /// velocities in `[-0.4, 0.4)` per axis, sizes in `[1, 3)` px, colors
    /// drawn uniformly from `PARTICLE_PALETTE`.
    pub fn seed(count: usize, bounds: Viewport, seed: u64) -> Self {
        debug_assert!(!bounds.is_empty());
        let mut rng = StdRng::seed_from_u64(seed);
        let w = bounds.width as f64;
        let h = bounds.height as f64;

        let particles = (0..count)
            .map(|_| Particle {
                position: Vec2::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h)),
                velocity: Vec2::new(rng.gen_range(-0.4..0.4), rng.gen_range(-0.4..0.4)),
                color: PARTICLE_PALETTE[rng.gen_range(0..PARTICLE_PALETTE.len())],
                size: rng.gen_range(1.0..3.0),
            })
            .collect();

        Self { particles, bounds }
    }

    pub fn from_particles(particles: Vec<Particle>, bounds: Viewport) -> Self {
        Self { particles, bounds }
    }

    /// Advance one frame: integrate positions, then reflect at the bounds.
    ///
    /// Reflection flips only the velocity component whose axis was crossed;
    /// a corner exit flips both. Positions are not clamped back inside, the
    /// flipped velocity carries the particle back on later frames.
    pub fn step(&mut self) {
        let w = self.bounds.width as f64;
        let h = self.bounds.height as f64;
        for p in &mut self.particles {
            p.position += p.velocity;
            if p.position.x < 0.0 || p.position.x > w {
                p.velocity.x = -p.velocity.x;
            }
            if p.position.y < 0.0 || p.position.y > h {
                p.velocity.y = -p.velocity.y;
            }
        }
    }

    /// Swap the reflection bounds. Particle positions are left untouched;
    /// anything now out of bounds simply reflects on the next step.
    pub fn set_bounds(&mut self, bounds: Viewport) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Viewport {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
