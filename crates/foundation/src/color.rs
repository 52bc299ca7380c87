/// Straight-alpha color, channels in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Parse `#rrggbb` (lower or upper case). Returns `None` on any other
    /// shape; alpha is always 1.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let b = hex.as_bytes();
        let r = (hex_nibble(b[0])? << 4) | hex_nibble(b[1])?;
        let g = (hex_nibble(b[2])? << 4) | hex_nibble(b[3])?;
        let bl = (hex_nibble(b[4])? << 4) | hex_nibble(b[5])?;
        Some(Self::from_u8(r, g, bl))
    }

    /// `#rrggbb` form of the color; alpha is not encoded.
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn scale_alpha(self, k: f32) -> Self {
        Self {
            a: (self.a * k).clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        fn q(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

fn hex_nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::Rgba;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(Rgba::from_hex("#00ffff"), Some(Rgba::from_u8(0, 255, 255)));
        assert_eq!(Rgba::from_hex("#FF0055"), Some(Rgba::from_u8(255, 0, 85)));
        assert_eq!(Rgba::from_hex("00ffff"), None);
        assert_eq!(Rgba::from_hex("#00fff"), None);
        assert_eq!(Rgba::from_hex("#00fffg"), None);
    }

    #[test]
    fn hex_round_trips() {
        for s in ["#00ffff", "#ff00ff", "#00aaff", "#5aff00", "#ff0055"] {
            let c = Rgba::from_hex(s).unwrap();
            assert_eq!(c.to_hex(), s);
        }
    }

    #[test]
    fn alpha_scaling_clamps() {
        let c = Rgba::rgb(1.0, 1.0, 1.0).with_alpha(0.5);
        assert_eq!(c.scale_alpha(0.5).a, 0.25);
        assert_eq!(c.scale_alpha(4.0).a, 1.0);
        assert_eq!(c.scale_alpha(-1.0).a, 0.0);
    }

    #[test]
    fn lerp_mixes_channels() {
        let a = Rgba::new(0.0, 0.0, 0.0, 0.0);
        let b = Rgba::new(1.0, 0.5, 0.0, 1.0);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid, Rgba::new(0.5, 0.25, 0.0, 0.5));
        assert_eq!(a.lerp(b, 2.0), b);
    }

    #[test]
    fn quantizes_to_bytes() {
        assert_eq!(Rgba::rgb(0.0, 0.5, 1.0).to_rgba8(), [0, 128, 255, 255]);
    }
}
