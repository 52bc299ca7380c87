use foundation::math::{Vec2, turn_fraction};
use foundation::viewport::Viewport;

/// Fraction of the viewport's shorter side used as the sphere radius.
pub const SPHERE_RADIUS_FRACTION: f64 = 0.15;

/// Center and radius of the globe for a given viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SphereGeometry {
    pub center: Vec2,
    pub radius: f64,
}

impl SphereGeometry {
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            center: viewport.center(),
            radius: viewport.min_extent() * SPHERE_RADIUS_FRACTION,
        }
    }
}

/// Orbit phase of marker `index` out of `count` at the given globe rotation.
///
/// Markers advance at half the globe's rotation rate, spaced evenly around
/// the circle by definition index.
pub fn orbit_angle(index: usize, count: usize, rotation: f64) -> f64 {
    rotation * 0.5 + turn_fraction(index, count)
}

/// Screen position of marker `index` on the sphere.
///
/// Pure in every argument. Drawing and hit-testing both resolve marker
/// positions through this one function; nothing caches the result across
/// frames.
pub fn hotspot_position(
    index: usize,
    count: usize,
    rotation: f64,
    geometry: SphereGeometry,
    offset: Vec2,
) -> Vec2 {
    let angle = orbit_angle(index, count, rotation);
    Vec2::new(
        geometry.center.x + offset.x * geometry.radius * angle.cos(),
        geometry.center.y + offset.y * geometry.radius * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::{SPHERE_RADIUS_FRACTION, SphereGeometry, hotspot_position, orbit_angle};
    use foundation::math::Vec2;
    use foundation::viewport::Viewport;

    #[test]
    fn geometry_follows_the_shorter_side() {
        let g = SphereGeometry::for_viewport(Viewport::new(800, 600));
        assert_eq!(g.center, Vec2::new(400.0, 300.0));
        assert_eq!(g.radius, 600.0 * SPHERE_RADIUS_FRACTION);

        let tall = SphereGeometry::for_viewport(Viewport::new(400, 1000));
        assert_eq!(tall.radius, 400.0 * SPHERE_RADIUS_FRACTION);
    }

    #[test]
    fn position_is_pure() {
        let geometry = SphereGeometry {
            center: Vec2::new(400.0, 300.0),
            radius: 90.0,
        };
        let offset = Vec2::new(0.3, 0.2);
        let a = hotspot_position(2, 5, 1.25, geometry, offset);
        let b = hotspot_position(2, 5, 1.25, geometry, offset);
        assert_eq!(a, b);
    }

    #[test]
    fn rotation_moves_markers_at_half_rate() {
        let base = orbit_angle(0, 5, 0.0);
        let turned = orbit_angle(0, 5, 0.006);
        assert!((turned - base - 0.003).abs() < 1e-12);
    }

    #[test]
    fn zero_rotation_places_first_marker_along_x() {
        let geometry = SphereGeometry {
            center: Vec2::new(100.0, 100.0),
            radius: 50.0,
        };
        // angle 0: cos = 1, sin = 0.
        let p = hotspot_position(0, 5, 0.0, geometry, Vec2::new(0.3, 0.2));
        assert!((p.x - (100.0 + 0.3 * 50.0)).abs() < 1e-12);
        assert!((p.y - 100.0).abs() < 1e-12);
    }
}
