use crate::hotspot::Hotspot;

/// Payload title when a click lands on no marker.
pub const AMBIENT_TITLE: &str = "Environmental Data Point";

/// Payload body when a click lands on no marker.
pub const AMBIENT_DESCRIPTION: &str = "CO₂ levels: 412 ppm | Temperature: +1.2°C | \
     Air Quality: Moderate | Click hotspots for details";

/// Structured payload handed to the host for every click. Exactly one is
/// produced per click, hit or miss.
///
/// `x`/`y` are the raw viewport coordinates of the click, not canvas-local
/// ones, so the host can anchor its own UI to the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickReport {
    pub title: String,
    pub description: String,
    pub x: f64,
    pub y: f64,
}

impl ClickReport {
    pub fn for_hotspot(hotspot: &Hotspot, x: f64, y: f64) -> Self {
        Self {
            title: hotspot.label.clone(),
            description: format!(
                "Severity: {} | Click to view detailed analysis and take action",
                hotspot.severity.as_upper()
            ),
            x,
            y,
        }
    }

    pub fn ambient(x: f64, y: f64) -> Self {
        Self {
            title: AMBIENT_TITLE.to_string(),
            description: AMBIENT_DESCRIPTION.to_string(),
            x,
            y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AMBIENT_TITLE, ClickReport};
    use crate::hotspot::{Hotspot, Severity};
    use foundation::color::Rgba;
    use foundation::math::Vec2;

    #[test]
    fn hotspot_report_upper_cases_severity() {
        let hotspot = Hotspot::new(
            Vec2::new(0.2, -0.5),
            Rgba::from_u8(0x00, 0xaa, 0xff),
            "Pacific Plastic",
            Severity::High,
        );
        let report = ClickReport::for_hotspot(&hotspot, 210.0, 144.0);
        assert_eq!(report.title, "Pacific Plastic");
        assert_eq!(
            report.description,
            "Severity: HIGH | Click to view detailed analysis and take action"
        );
        assert_eq!((report.x, report.y), (210.0, 144.0));
    }

    #[test]
    fn ambient_report_is_fixed_text() {
        let report = ClickReport::ambient(5.0, 6.0);
        assert_eq!(report.title, AMBIENT_TITLE);
        assert!(report.description.starts_with("CO₂ levels: 412 ppm"));
        assert!(report.description.ends_with("Click hotspots for details"));
        assert_eq!((report.x, report.y), (5.0, 6.0));
    }
}
