use canvas::Surface;

/// Encode the surface as a binary PPM (P6) image, alpha dropped.
///
/// PPM is deliberately boring: three-line ASCII header, then raw RGB, no
/// dependencies, every viewer opens it.
pub fn encode_ppm(surface: &Surface) -> Vec<u8> {
    let vp = surface.viewport();
    let mut out = format!("P6\n{} {}\n255\n", vp.width, vp.height).into_bytes();
    out.reserve(vp.width as usize * vp.height as usize * 3);
    for px in surface.pixels().chunks_exact(4) {
        out.extend_from_slice(&px[..3]);
    }
    out
}

/// blake3 hex digest of the surface contents, dimensions included so two
/// sizes of the same clear color never collide.
///
/// Two renderers with the same config and tick sequence produce the same
/// digest; this is the workspace's determinism check.
pub fn surface_digest(surface: &Surface) -> String {
    let vp = surface.viewport();
    let mut hasher = blake3::Hasher::new();
    hasher.update(&vp.width.to_le_bytes());
    hasher.update(&vp.height.to_le_bytes());
    hasher.update(surface.pixels());
    hasher.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::{encode_ppm, surface_digest};
    use canvas::Surface;
    use foundation::color::Rgba;
    use foundation::viewport::Viewport;

    #[test]
    fn ppm_has_header_and_rgb_payload() {
        let surface = Surface::new(Viewport::new(3, 2));
        let ppm = encode_ppm(&surface);

        let header = b"P6\n3 2\n255\n";
        assert_eq!(&ppm[..header.len()], header);
        assert_eq!(ppm.len(), header.len() + 3 * 2 * 3);
        // First pixel is the space-black backdrop.
        assert_eq!(&ppm[header.len()..header.len() + 3], &[5, 5, 16]);
    }

    #[test]
    fn digest_tracks_the_pixels() {
        let clean = Surface::new(Viewport::new(4, 4));
        let mut drawn = Surface::new(Viewport::new(4, 4));
        assert_eq!(surface_digest(&clean), surface_digest(&drawn));

        drawn.fill(Rgba::rgb(1.0, 0.0, 0.0));
        assert_ne!(surface_digest(&clean), surface_digest(&drawn));
    }

    #[test]
    fn digest_covers_dimensions() {
        let wide = Surface::new(Viewport::new(4, 2));
        let tall = Surface::new(Viewport::new(2, 4));
        assert_ne!(surface_digest(&wide), surface_digest(&tall));
    }
}
