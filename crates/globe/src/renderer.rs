use std::fmt;

use canvas::{CursorStyle, Rasterizer, RenderFrame, Surface};
use foundation::math::Vec2;
use foundation::time::Time;
use foundation::viewport::Viewport;
use layers::{BackdropLayer, GraticuleLayer, HotspotLayer, SphereLayer, StarfieldLayer, StreamLayer};
use runtime::{Event, EventBus, Metrics, Tick, Ticker};
use scene::{
    ClickReport, HotspotCatalog, ParticleField, PickOptions, SphereGeometry, pick_hotspot,
};

use crate::quality::QualityTier;

/// Rotation advance per frame, radians.
pub const ROTATION_STEP: f64 = 0.003;

/// Everything the host supplies at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    /// Size of the private drawing surface.
    pub viewport: Viewport,
    /// Top-left corner of the surface in the host's view coordinates.
    /// Pointer events arrive in view coordinates and are translated by this.
    pub origin: Vec2,
    pub quality: QualityTier,
    /// Particle seeding key. The same config renders the same pixels.
    pub seed: u64,
    pub catalog: HotspotCatalog,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(800, 600),
            origin: Vec2::ZERO,
            quality: QualityTier::default(),
            seed: 0,
            catalog: HotspotCatalog::default_scene(),
        }
    }
}

/// Fatal construction failure. The loop never starts; there is nothing to
/// recover at tick time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    EmptySurface { width: u32, height: u32 },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::EmptySurface { width, height } => {
                write!(f, "drawing surface has zero area: {width}x{height}")
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// The animated globe component.
///
/// Owns every piece of mutable animation state (particle field, rotation,
/// surface) for its whole lifetime; independent instances share nothing.
/// The host drives it by calling `tick` once per display refresh with its
/// wall-clock reading and runs pointer handlers between ticks. `stop` is the
/// teardown: it cancels the pending tick, and a stopped renderer never draws
/// again.
#[derive(Debug)]
pub struct GlobeRenderer {
    origin: Vec2,
    quality: QualityTier,
    seed: u64,
    catalog: HotspotCatalog,
    surface: Surface,
    ticker: Ticker,
    rotation: f64,
    particles: ParticleField,
    last_frame: RenderFrame,
    events: EventBus,
    metrics: Metrics,
}

impl GlobeRenderer {
    pub fn new(config: RendererConfig) -> Result<Self, SetupError> {
        if config.viewport.is_empty() {
            return Err(SetupError::EmptySurface {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        let particles = ParticleField::seed(
            config.quality.particle_count(),
            config.viewport,
            config.seed,
        );

        Ok(Self {
            origin: config.origin,
            quality: config.quality,
            seed: config.seed,
            catalog: config.catalog,
            surface: Surface::new(config.viewport),
            ticker: Ticker::default(),
            rotation: 0.0,
            particles,
            last_frame: RenderFrame::new(),
            events: EventBus::new(),
            metrics: Metrics::new(),
        })
    }

    /// Run one animation step, or `None` once stopped.
    ///
    /// The pass order is fixed: fade wash, particles, sphere, graticule,
    /// hotspot markers, stream dots. Rotation advances before anything that
    /// reads it, so a pointer handler running after this tick picks against
    /// exactly what was drawn.
    pub fn tick(&mut self, wall: Time) -> Option<Tick> {
        let tick = self.ticker.tick(wall)?;

        let mut frame = RenderFrame::new();
        BackdropLayer::default().emit(&mut frame);

        self.particles.step();
        StarfieldLayer.emit(&self.particles, &mut frame);

        self.rotation += ROTATION_STEP;
        let geometry = self.geometry();
        SphereLayer.emit(geometry, tick.wall, &mut frame);
        GraticuleLayer.emit(geometry, self.rotation, &mut frame);
        HotspotLayer.emit(&self.catalog, self.rotation, geometry, tick.wall, &mut frame);
        StreamLayer::new(self.quality.stream_count()).emit(geometry, tick.wall, &mut frame);

        Rasterizer::execute(&frame, &mut self.surface);

        self.metrics.inc_counter("renderer.frames", 1);
        self.metrics
            .record_histogram("renderer.commands", frame.len() as f64);
        self.metrics
            .set_gauge("renderer.particles", self.particles.len() as i64);
        self.metrics
            .set_gauge("renderer.streams", self.quality.stream_count() as i64);

        self.last_frame = frame;
        Some(tick)
    }

    /// Resolve a click at view coordinates `point`. Always returns exactly
    /// one payload, the first in-radius marker in catalog order or the
    /// ambient miss text; `point` is echoed back raw so the host can anchor
    /// its popup to the pointer.
    pub fn pointer_click(&mut self, point: Vec2) -> ClickReport {
        let local = point - self.origin;
        let hit = pick_hotspot(
            &self.catalog,
            local,
            self.rotation,
            self.geometry(),
            PickOptions::default(),
        );
        let frame_index = self.ticker.current_frame_index();
        self.metrics.inc_counter("input.clicks", 1);

        if let Some(hotspot) = hit.and_then(|h| self.catalog.get(h.index)) {
            self.events
                .emit(frame_index, "click.hit", hotspot.label.clone());
            ClickReport::for_hotspot(hotspot, point.x, point.y)
        } else {
            self.events
                .emit(frame_index, "click.miss", format!("at {},{}", point.x, point.y));
            ClickReport::ambient(point.x, point.y)
        }
    }

    /// Update the cursor affordance for a pointer at view coordinates
    /// `point`. Emits nothing.
    pub fn pointer_move(&mut self, point: Vec2) -> CursorStyle {
        let local = point - self.origin;
        let over = pick_hotspot(
            &self.catalog,
            local,
            self.rotation,
            self.geometry(),
            PickOptions::default(),
        )
        .is_some();
        let style = if over {
            CursorStyle::Pointer
        } else {
            CursorStyle::Default
        };
        self.surface.set_cursor(style);
        style
    }

    /// Swap in new bounds. Particle positions are untouched; center/radius
    /// change on the next tick. The surface buffer restarts at the backdrop
    /// color, so motion trails reset. A zero-area request is a host bug and
    /// is refused.
    pub fn resize(&mut self, viewport: Viewport) {
        let frame_index = self.ticker.current_frame_index();
        if viewport.is_empty() {
            self.events.emit(
                frame_index,
                "resize.rejected",
                format!("zero-area viewport {}x{}", viewport.width, viewport.height),
            );
            return;
        }
        self.surface.resize(viewport);
        self.particles.set_bounds(viewport);
        self.events.emit(
            frame_index,
            "resize",
            format!("{}x{}", viewport.width, viewport.height),
        );
    }

    /// Switch tiers with full-restart semantics: the particle field is
    /// re-seeded from the stored seed and rotation returns to zero, so the
    /// switch is reproducible. The ticker is kept, a stopped renderer stays
    /// stopped.
    pub fn set_quality(&mut self, quality: QualityTier) {
        self.quality = quality;
        self.rotation = 0.0;
        self.particles = ParticleField::seed(
            quality.particle_count(),
            self.surface.viewport(),
            self.seed,
        );
        self.events.emit(
            self.ticker.current_frame_index(),
            "quality.changed",
            quality.as_str(),
        );
    }

    /// Teardown: cancel the pending tick. Idempotent.
    pub fn stop(&mut self) {
        self.ticker.stop();
    }

    pub fn is_stopped(&self) -> bool {
        self.ticker.is_stopped()
    }

    pub fn geometry(&self) -> SphereGeometry {
        SphereGeometry::for_viewport(self.surface.viewport())
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn quality(&self) -> QualityTier {
        self.quality
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Display list of the most recent tick, for the host and tests.
    pub fn last_frame(&self) -> &RenderFrame {
        &self.last_frame
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        self.events.drain()
    }
}
