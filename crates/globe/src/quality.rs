use std::fmt;
use std::str::FromStr;

/// Coarse fidelity setting controlling particle and stream counts.
///
/// A pure lookup, not a state machine: the tier never changes under the
/// renderer's feet, a switch goes through `GlobeRenderer::set_quality` and
/// restarts the animation state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum QualityTier {
    #[default]
    High,
    Medium,
    Low,
}

impl QualityTier {
    pub fn particle_count(self) -> usize {
        match self {
            QualityTier::High => 150,
            QualityTier::Medium => 100,
            QualityTier::Low => 50,
        }
    }

    pub fn stream_count(self) -> usize {
        match self {
            QualityTier::High => 20,
            QualityTier::Medium | QualityTier::Low => 10,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QualityTier::High => "high",
            QualityTier::Medium => "medium",
            QualityTier::Low => "low",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseQualityError {
    pub found: String,
}

impl fmt::Display for ParseQualityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown quality tier: {}", self.found)
    }
}

impl std::error::Error for ParseQualityError {}

impl FromStr for QualityTier {
    type Err = ParseQualityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(QualityTier::High),
            "medium" => Ok(QualityTier::Medium),
            "low" => Ok(QualityTier::Low),
            _ => Err(ParseQualityError {
                found: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::QualityTier;

    #[test]
    fn tier_counts_are_fixed() {
        assert_eq!(QualityTier::High.particle_count(), 150);
        assert_eq!(QualityTier::High.stream_count(), 20);
        assert_eq!(QualityTier::Medium.particle_count(), 100);
        assert_eq!(QualityTier::Medium.stream_count(), 10);
        assert_eq!(QualityTier::Low.particle_count(), 50);
        assert_eq!(QualityTier::Low.stream_count(), 10);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("high".parse::<QualityTier>().unwrap(), QualityTier::High);
        assert_eq!("MEDIUM".parse::<QualityTier>().unwrap(), QualityTier::Medium);
        assert_eq!("Low".parse::<QualityTier>().unwrap(), QualityTier::Low);
        assert!("ultra".parse::<QualityTier>().is_err());
    }

    #[test]
    fn names_round_trip() {
        for tier in [QualityTier::High, QualityTier::Medium, QualityTier::Low] {
            assert_eq!(tier.as_str().parse::<QualityTier>().unwrap(), tier);
            assert_eq!(tier.to_string(), tier.as_str());
        }
    }
}
