use foundation::math::Vec2;

use crate::hotspot::HotspotCatalog;
use crate::orbit::{SphereGeometry, hotspot_position};

/// Pick radius around a marker center, in pixels.
pub const HIT_RADIUS_PX: f64 = 20.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickHit {
    /// Catalog index of the winning hotspot.
    pub index: usize,
    /// Marker position at the rotation the pick was evaluated with.
    pub position: Vec2,
    pub distance: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickOptions {
    pub radius_px: f64,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            radius_px: HIT_RADIUS_PX,
        }
    }
}

/// Deterministic marker picking.
///
/// Ordering contract:
/// - Markers are tested in catalog definition order; the first marker with
///   distance strictly inside `radius_px` wins, even when a later marker is
///   closer to the pointer.
/// - The boundary is exclusive: distance exactly equal to `radius_px` is a
///   miss.
///
/// Notes:
/// - Positions are recomputed from `rotation` at call time, so a pick always
///   agrees with what that rotation draws.
pub fn pick_hotspot(
    catalog: &HotspotCatalog,
    point: Vec2,
    rotation: f64,
    geometry: SphereGeometry,
    opts: PickOptions,
) -> Option<PickHit> {
    let count = catalog.len();
    for (index, hotspot) in catalog.iter().enumerate() {
        let position = hotspot_position(index, count, rotation, geometry, hotspot.offset);
        let distance = point.distance(position);
        if distance < opts.radius_px {
            return Some(PickHit {
                index,
                position,
                distance,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{HIT_RADIUS_PX, PickOptions, pick_hotspot};
    use crate::hotspot::{Hotspot, HotspotCatalog, Severity};
    use crate::orbit::SphereGeometry;
    use foundation::color::Rgba;
    use foundation::math::Vec2;

    fn geometry() -> SphereGeometry {
        SphereGeometry {
            center: Vec2::new(400.0, 300.0),
            radius: 90.0,
        }
    }

    fn site(offset: Vec2, label: &str) -> Hotspot {
        Hotspot::new(offset, Rgba::from_u8(0, 255, 255), label, Severity::High)
    }

    #[test]
    fn boundary_is_strict() {
        // Zero offset pins the marker to the sphere center at any rotation.
        let catalog = HotspotCatalog::new(vec![site(Vec2::ZERO, "center")]);
        let center = geometry().center;

        let just_inside = Vec2::new(center.x + 19.999, center.y);
        let hit = pick_hotspot(
            &catalog,
            just_inside,
            0.7,
            geometry(),
            PickOptions::default(),
        );
        assert_eq!(hit.unwrap().index, 0);

        for dx in [HIT_RADIUS_PX, 20.0001] {
            let outside = Vec2::new(center.x + dx, center.y);
            let miss = pick_hotspot(&catalog, outside, 0.7, geometry(), PickOptions::default());
            assert_eq!(miss, None);
        }
    }

    #[test]
    fn first_in_definition_order_wins_over_closer() {
        // Both markers are inside the radius at the pick point; the second
        // sits exactly on it.
        let catalog = HotspotCatalog::new(vec![
            site(Vec2::new(0.05, 0.05), "near"),
            site(Vec2::ZERO, "exact"),
        ]);
        let hit = pick_hotspot(
            &catalog,
            geometry().center,
            0.0,
            geometry(),
            PickOptions::default(),
        )
        .unwrap();
        assert_eq!(hit.index, 0);
        assert!(hit.distance > 0.0);
    }

    #[test]
    fn miss_returns_none() {
        let catalog = HotspotCatalog::default_scene();
        let far = Vec2::new(10.0, 10.0);
        assert_eq!(
            pick_hotspot(&catalog, far, 0.0, geometry(), PickOptions::default()),
            None
        );
    }

    #[test]
    fn pick_tracks_rotation() {
        let catalog = HotspotCatalog::default_scene();
        let rotation = 2.0;
        let position = catalog.position(2, rotation, geometry()).unwrap();

        let hit = pick_hotspot(
            &catalog,
            position,
            rotation,
            geometry(),
            PickOptions::default(),
        )
        .unwrap();
        assert_eq!(hit.index, 2);
        assert_eq!(hit.distance, 0.0);

        // The same point misses once the globe has turned on.
        let later = pick_hotspot(
            &catalog,
            position,
            rotation + 3.0,
            geometry(),
            PickOptions::default(),
        );
        assert_ne!(later.map(|h| h.index), Some(2));
    }
}
