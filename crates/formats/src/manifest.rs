use std::fmt;

use foundation::color::Rgba;
use foundation::math::Vec2;
use scene::{Hotspot, HotspotCatalog, Severity};
use serde::{Deserialize, Serialize};

pub const MANIFEST_VERSION: &str = "1.0";

/// Largest offset magnitude a manifest may place a site at. Offsets are
/// radius multipliers; anything beyond this never intersects the globe art.
pub const MAX_OFFSET: f64 = 1.5;

/// JSON description of a hotspot catalog.
///
/// This is the one serialized boundary of the workspace: the engine types
/// carry no serde derives, a manifest round-trips to `HotspotCatalog` through
/// validation instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneManifest {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// blake3 hex of the manifest serialized with this field cleared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
    pub hotspots: Vec<HotspotEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotspotEntry {
    pub x: f64,
    pub y: f64,
    /// `#rrggbb`.
    pub color: String,
    pub label: String,
    /// `high` | `critical` | `positive`.
    pub severity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ManifestError {
    UnsupportedVersion { found: String },
    BadColor { label: String, found: String },
    UnknownSeverity { label: String, found: String },
    OffsetOutOfRange { label: String, x: f64, y: f64 },
    IdentityMismatch { expected: String, found: String },
    Json(String),
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::UnsupportedVersion { found } => {
                write!(f, "unsupported manifest version: {found}")
            }
            ManifestError::BadColor { label, found } => {
                write!(f, "hotspot {label:?}: malformed color {found:?}")
            }
            ManifestError::UnknownSeverity { label, found } => {
                write!(f, "hotspot {label:?}: unknown severity {found:?}")
            }
            ManifestError::OffsetOutOfRange { label, x, y } => {
                write!(f, "hotspot {label:?}: offset ({x}, {y}) out of range")
            }
            ManifestError::IdentityMismatch { expected, found } => {
                write!(f, "content hash mismatch: manifest says {found}, computed {expected}")
            }
            ManifestError::Json(msg) => write!(f, "manifest JSON error: {msg}"),
        }
    }
}

impl std::error::Error for ManifestError {}

impl SceneManifest {
    pub fn new() -> Self {
        Self {
            version: MANIFEST_VERSION.to_string(),
            name: None,
            content_hash: None,
            hotspots: Vec::new(),
        }
    }

    pub fn from_catalog(catalog: &HotspotCatalog) -> Self {
        let mut manifest = Self::new();
        manifest.hotspots = catalog
            .iter()
            .map(|h| HotspotEntry {
                x: h.offset.x,
                y: h.offset.y,
                color: h.color.to_hex(),
                label: h.label.clone(),
                severity: h.severity.as_str().to_string(),
            })
            .collect();
        manifest
    }

    /// Validate and build the catalog this manifest describes, preserving
    /// entry order. Does not check `content_hash`; callers wanting identity
    /// verification do that first via `verify_identity`.
    pub fn to_catalog(&self) -> Result<HotspotCatalog, ManifestError> {
        if self.version != MANIFEST_VERSION {
            return Err(ManifestError::UnsupportedVersion {
                found: self.version.clone(),
            });
        }

        let mut hotspots = Vec::with_capacity(self.hotspots.len());
        for entry in &self.hotspots {
            if entry.x.abs() > MAX_OFFSET || entry.y.abs() > MAX_OFFSET {
                return Err(ManifestError::OffsetOutOfRange {
                    label: entry.label.clone(),
                    x: entry.x,
                    y: entry.y,
                });
            }
            let color = Rgba::from_hex(&entry.color).ok_or_else(|| ManifestError::BadColor {
                label: entry.label.clone(),
                found: entry.color.clone(),
            })?;
            let severity: Severity =
                entry
                    .severity
                    .parse()
                    .map_err(|_| ManifestError::UnknownSeverity {
                        label: entry.label.clone(),
                        found: entry.severity.clone(),
                    })?;
            hotspots.push(Hotspot::new(
                Vec2::new(entry.x, entry.y),
                color,
                entry.label.clone(),
                severity,
            ));
        }
        Ok(HotspotCatalog::new(hotspots))
    }

    /// blake3 hex over the manifest serialized with `content_hash` cleared.
    pub fn compute_identity(&self) -> Result<String, ManifestError> {
        let mut cleared = self.clone();
        cleared.content_hash = None;
        let payload =
            serde_json::to_vec(&cleared).map_err(|e| ManifestError::Json(e.to_string()))?;
        Ok(blake3::hash(&payload).to_hex().to_string())
    }

    pub fn compute_and_set_identity(&mut self) -> Result<(), ManifestError> {
        self.content_hash = Some(self.compute_identity()?);
        Ok(())
    }

    /// Check a stored `content_hash` against the recomputed identity. A
    /// manifest without a hash passes; it simply makes no claim.
    pub fn verify_identity(&self) -> Result<(), ManifestError> {
        let Some(found) = &self.content_hash else {
            return Ok(());
        };
        let expected = self.compute_identity()?;
        if *found != expected {
            return Err(ManifestError::IdentityMismatch {
                expected,
                found: found.clone(),
            });
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String, ManifestError> {
        serde_json::to_string_pretty(self).map_err(|e| ManifestError::Json(e.to_string()))
    }

    pub fn from_json(payload: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(payload).map_err(|e| ManifestError::Json(e.to_string()))
    }
}

impl Default for SceneManifest {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{MANIFEST_VERSION, ManifestError, SceneManifest};
    use pretty_assertions::assert_eq;
    use scene::HotspotCatalog;

    fn default_manifest() -> SceneManifest {
        SceneManifest::from_catalog(&HotspotCatalog::default_scene())
    }

    #[test]
    fn catalog_round_trips_through_the_manifest() {
        let catalog = HotspotCatalog::default_scene();
        let manifest = SceneManifest::from_catalog(&catalog);
        assert_eq!(manifest.version, MANIFEST_VERSION);
        assert_eq!(manifest.hotspots.len(), 5);
        assert_eq!(manifest.hotspots[1].severity, "critical");
        assert_eq!(manifest.hotspots[4].color, "#ff0055");

        let rebuilt = manifest.to_catalog().unwrap();
        assert_eq!(rebuilt, catalog);
    }

    #[test]
    fn json_round_trips() {
        let mut manifest = default_manifest();
        manifest.name = Some("stock scene".to_string());
        let payload = manifest.to_json_pretty().unwrap();
        let parsed = SceneManifest::from_json(&payload).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn identity_is_stable_and_verifies() {
        let mut manifest = default_manifest();
        manifest.compute_and_set_identity().unwrap();
        let first = manifest.content_hash.clone().unwrap();
        manifest.verify_identity().unwrap();

        // Recomputing over the hashed form must not change the identity:
        // the hash field is cleared before hashing.
        manifest.compute_and_set_identity().unwrap();
        assert_eq!(manifest.content_hash.unwrap(), first);
    }

    #[test]
    fn tampering_breaks_identity() {
        let mut manifest = default_manifest();
        manifest.compute_and_set_identity().unwrap();
        manifest.hotspots[0].label = "Tampered".to_string();
        assert!(matches!(
            manifest.verify_identity(),
            Err(ManifestError::IdentityMismatch { .. })
        ));
    }

    #[test]
    fn missing_hash_makes_no_claim() {
        default_manifest().verify_identity().unwrap();
    }

    #[test]
    fn rejects_unknown_version() {
        let mut manifest = default_manifest();
        manifest.version = "2.0".to_string();
        assert_eq!(
            manifest.to_catalog(),
            Err(ManifestError::UnsupportedVersion {
                found: "2.0".to_string()
            })
        );
    }

    #[test]
    fn rejects_bad_color() {
        let mut manifest = default_manifest();
        manifest.hotspots[2].color = "cyan".to_string();
        assert!(matches!(
            manifest.to_catalog(),
            Err(ManifestError::BadColor { .. })
        ));
    }

    #[test]
    fn rejects_unknown_severity() {
        let mut manifest = default_manifest();
        manifest.hotspots[0].severity = "calamitous".to_string();
        assert!(matches!(
            manifest.to_catalog(),
            Err(ManifestError::UnknownSeverity { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_offsets() {
        let mut manifest = default_manifest();
        manifest.hotspots[3].y = -1.6;
        assert!(matches!(
            manifest.to_catalog(),
            Err(ManifestError::OffsetOutOfRange { .. })
        ));
    }
}
