use std::fmt;
use std::str::FromStr;

use foundation::color::Rgba;
use foundation::math::Vec2;

use crate::orbit::{self, SphereGeometry};

/// Alert class of a monitored site.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    High,
    Critical,
    Positive,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Critical => "critical",
            Severity::Positive => "positive",
        }
    }

    /// Upper-case form used in click payload text.
    pub fn as_upper(self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
            Severity::Positive => "POSITIVE",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError {
    pub found: String,
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: {}", self.found)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            "positive" => Ok(Severity::Positive),
            _ => Err(ParseSeverityError {
                found: s.to_string(),
            }),
        }
    }
}

/// Static descriptor of one monitored site.
///
/// `offset` holds unit-range multipliers applied to the sphere radius; the
/// on-screen position is derived per frame from the current rotation and is
/// never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotspot {
    pub offset: Vec2,
    pub color: Rgba,
    pub label: String,
    pub severity: Severity,
}

impl Hotspot {
    pub fn new(offset: Vec2, color: Rgba, label: impl Into<String>, severity: Severity) -> Self {
        Self {
            offset,
            color,
            label: label.into(),
            severity,
        }
    }
}

/// Ordered set of hotspots. Definition order is part of the picking contract.
#[derive(Debug, Clone, PartialEq)]
pub struct HotspotCatalog {
    hotspots: Vec<Hotspot>,
}

impl HotspotCatalog {
    pub fn new(hotspots: Vec<Hotspot>) -> Self {
        Self { hotspots }
    }

    /// The five monitored sites of the stock scene.
    pub fn default_scene() -> Self {
        Self::new(vec![
            Hotspot::new(
                Vec2::new(0.3, 0.2),
                Rgba::from_u8(0x00, 0xff, 0xff),
                "Arctic Ice Loss",
                Severity::High,
            ),
            Hotspot::new(
                Vec2::new(-0.4, 0.3),
                Rgba::from_u8(0xff, 0x00, 0xff),
                "Amazon Deforestation",
                Severity::Critical,
            ),
            Hotspot::new(
                Vec2::new(0.2, -0.5),
                Rgba::from_u8(0x00, 0xaa, 0xff),
                "Pacific Plastic",
                Severity::High,
            ),
            Hotspot::new(
                Vec2::new(0.6, -0.2),
                Rgba::from_u8(0x5a, 0xff, 0x00),
                "Renewable Energy",
                Severity::Positive,
            ),
            Hotspot::new(
                Vec2::new(-0.3, -0.4),
                Rgba::from_u8(0xff, 0x00, 0x55),
                "Air Pollution",
                Severity::Critical,
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.hotspots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Hotspot> {
        self.hotspots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hotspot> {
        self.hotspots.iter()
    }

    /// Screen position of hotspot `index` at `rotation`.
    ///
    /// Delegates to the one shared orbit formula so draw and pick can never
    /// disagree.
    pub fn position(&self, index: usize, rotation: f64, geometry: SphereGeometry) -> Option<Vec2> {
        let hotspot = self.get(index)?;
        Some(orbit::hotspot_position(
            index,
            self.len(),
            rotation,
            geometry,
            hotspot.offset,
        ))
    }
}

impl Default for HotspotCatalog {
    fn default() -> Self {
        Self::default_scene()
    }
}
