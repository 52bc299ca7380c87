use foundation::color::Rgba;
use foundation::math::{TAU, Vec2};

use crate::command::{GradientStop, RenderCommand, RenderFrame};
use crate::surface::Surface;

/// CPU execution of display lists.
///
/// Commands blend source-over in push order; there is no depth. Shape edges
/// get a half-pixel feather so strokes and discs stay smooth at the small
/// radii this scene draws.
pub struct Rasterizer;

impl Rasterizer {
    pub fn execute(frame: &RenderFrame, surface: &mut Surface) {
        for command in &frame.commands {
            match command {
                RenderCommand::Overlay { color } => overlay(surface, *color),
                RenderCommand::FillCircle {
                    center,
                    radius,
                    color,
                } => fill_circle(surface, *center, *radius, *color),
                RenderCommand::StrokeCircle {
                    center,
                    radius,
                    width,
                    color,
                } => stroke_circle(surface, *center, *radius, *width, *color),
                RenderCommand::StrokeEllipse {
                    center,
                    radii,
                    width,
                    color,
                } => stroke_ellipse(surface, *center, *radii, *width, *color),
                RenderCommand::Line {
                    from,
                    to,
                    width,
                    color,
                } => line(surface, *from, *to, *width, *color),
                RenderCommand::RadialFill {
                    from_center,
                    from_radius,
                    to_center,
                    to_radius,
                    stops,
                    alpha,
                } => radial_fill(
                    surface,
                    *from_center,
                    *from_radius,
                    *to_center,
                    *to_radius,
                    stops,
                    *alpha,
                ),
            }
        }
    }
}

fn pixel_center(x: i64, y: i64) -> Vec2 {
    Vec2::new(x as f64 + 0.5, y as f64 + 0.5)
}

/// Coverage for a pixel whose center sits `signed_distance` px outside the
/// shape edge (negative = inside).
fn edge_coverage(signed_distance: f64) -> f64 {
    (0.5 - signed_distance).clamp(0.0, 1.0)
}

/// Inclusive pixel bounds of a bbox, clamped to the surface. `None` when the
/// bbox misses the surface entirely.
fn pixel_span(surface: &Surface, min: Vec2, max: Vec2) -> Option<(i64, i64, i64, i64)> {
    let vp = surface.viewport();
    let x0 = (min.x.floor() as i64).max(0);
    let y0 = (min.y.floor() as i64).max(0);
    let x1 = (max.x.ceil() as i64).min(vp.width as i64 - 1);
    let y1 = (max.y.ceil() as i64).min(vp.height as i64 - 1);
    if x0 > x1 || y0 > y1 {
        return None;
    }
    Some((x0, y0, x1, y1))
}

fn overlay(surface: &mut Surface, color: Rgba) {
    if color.a <= 0.0 {
        return;
    }
    let vp = surface.viewport();
    for y in 0..vp.height as i64 {
        for x in 0..vp.width as i64 {
            surface.blend_pixel(x, y, color);
        }
    }
}

fn fill_circle(surface: &mut Surface, center: Vec2, radius: f64, color: Rgba) {
    if radius <= 0.0 || color.a <= 0.0 {
        return;
    }
    let pad = Vec2::new(radius + 1.0, radius + 1.0);
    let Some((x0, y0, x1, y1)) = pixel_span(surface, center - pad, center + pad) else {
        return;
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            let sd = pixel_center(x, y).distance(center) - radius;
            let cov = edge_coverage(sd);
            if cov > 0.0 {
                surface.blend_pixel(x, y, color.scale_alpha(cov as f32));
            }
        }
    }
}

fn stroke_circle(surface: &mut Surface, center: Vec2, radius: f64, width: f64, color: Rgba) {
    if radius <= 0.0 || width <= 0.0 || color.a <= 0.0 {
        return;
    }
    let half = width * 0.5;
    let pad = Vec2::new(radius + half + 1.0, radius + half + 1.0);
    let Some((x0, y0, x1, y1)) = pixel_span(surface, center - pad, center + pad) else {
        return;
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            let d = pixel_center(x, y).distance(center);
            let sd = (d - radius).abs() - half;
            let cov = edge_coverage(sd);
            if cov > 0.0 {
                surface.blend_pixel(x, y, color.scale_alpha(cov as f32));
            }
        }
    }
}

fn line(surface: &mut Surface, from: Vec2, to: Vec2, width: f64, color: Rgba) {
    if width <= 0.0 || color.a <= 0.0 {
        return;
    }
    let half = width * 0.5;
    let pad = half + 1.0;
    let min = Vec2::new(from.x.min(to.x) - pad, from.y.min(to.y) - pad);
    let max = Vec2::new(from.x.max(to.x) + pad, from.y.max(to.y) + pad);
    let Some((x0, y0, x1, y1)) = pixel_span(surface, min, max) else {
        return;
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            let sd = segment_distance(pixel_center(x, y), from, to) - half;
            let cov = edge_coverage(sd);
            if cov > 0.0 {
                surface.blend_pixel(x, y, color.scale_alpha(cov as f32));
            }
        }
    }
}

/// Polyline approximation of an axis-aligned ellipse outline.
///
/// Segments share vertices, so coverage is gathered into a max-mask first
/// and blended once; overlapping joints must not double-darken a
/// low-alpha stroke.
fn stroke_ellipse(surface: &mut Surface, center: Vec2, radii: Vec2, width: f64, color: Rgba) {
    if width <= 0.0 || color.a <= 0.0 {
        return;
    }
    let rx = radii.x.abs();
    let ry = radii.y.abs();
    if rx <= 0.0 && ry <= 0.0 {
        return;
    }

    let half = width * 0.5;
    let pad = Vec2::new(rx + half + 1.0, ry + half + 1.0);
    let Some((x0, y0, x1, y1)) = pixel_span(surface, center - pad, center + pad) else {
        return;
    };

    let mask_w = (x1 - x0 + 1) as usize;
    let mask_h = (y1 - y0 + 1) as usize;
    let mut mask = vec![0.0f64; mask_w * mask_h];

    let steps = ellipse_steps(rx, ry);
    let mut prev = ellipse_point(center, rx, ry, 0, steps);
    for i in 1..=steps {
        let next = ellipse_point(center, rx, ry, i, steps);
        accumulate_segment(&mut mask, (x0, y0, x1, y1), prev, next, half);
        prev = next;
    }

    for my in 0..mask_h {
        for mx in 0..mask_w {
            let cov = mask[my * mask_w + mx];
            if cov > 0.0 {
                surface.blend_pixel(x0 + mx as i64, y0 + my as i64, color.scale_alpha(cov as f32));
            }
        }
    }
}

fn ellipse_steps(rx: f64, ry: f64) -> usize {
    // Roughly 6 px per segment.
    ((rx.max(ry) * TAU / 6.0).ceil() as usize).clamp(24, 256)
}

fn ellipse_point(center: Vec2, rx: f64, ry: f64, i: usize, steps: usize) -> Vec2 {
    let angle = TAU * i as f64 / steps as f64;
    Vec2::new(center.x + rx * angle.cos(), center.y + ry * angle.sin())
}

fn accumulate_segment(
    mask: &mut [f64],
    span: (i64, i64, i64, i64),
    from: Vec2,
    to: Vec2,
    half_width: f64,
) {
    let (x0, y0, x1, y1) = span;
    let mask_w = (x1 - x0 + 1) as usize;
    let pad = half_width + 1.0;

    let sx0 = ((from.x.min(to.x) - pad).floor() as i64).max(x0);
    let sy0 = ((from.y.min(to.y) - pad).floor() as i64).max(y0);
    let sx1 = ((from.x.max(to.x) + pad).ceil() as i64).min(x1);
    let sy1 = ((from.y.max(to.y) + pad).ceil() as i64).min(y1);

    for y in sy0..=sy1 {
        for x in sx0..=sx1 {
            let sd = segment_distance(pixel_center(x, y), from, to) - half_width;
            let cov = edge_coverage(sd);
            if cov > 0.0 {
                let idx = (y - y0) as usize * mask_w + (x - x0) as usize;
                mask[idx] = mask[idx].max(cov);
            }
        }
    }
}

fn segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f64 {
    let ab = b - a;
    let len2 = ab.x * ab.x + ab.y * ab.y;
    if len2 <= 0.0 {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * ab.x + (p.y - a.y) * ab.y) / len2).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

fn radial_fill(
    surface: &mut Surface,
    from_center: Vec2,
    from_radius: f64,
    to_center: Vec2,
    to_radius: f64,
    stops: &[GradientStop],
    alpha: f32,
) {
    if stops.is_empty() || alpha <= 0.0 || to_radius <= 0.0 {
        return;
    }
    let pad = Vec2::new(to_radius + 1.0, to_radius + 1.0);
    let Some((x0, y0, x1, y1)) = pixel_span(surface, to_center - pad, to_center + pad) else {
        return;
    };

    let d = to_center - from_center;
    let dr = to_radius - from_radius;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = pixel_center(x, y);
            let cov = edge_coverage(p.distance(to_center) - to_radius);
            if cov <= 0.0 {
                continue;
            }
            let Some(t) = gradient_t(p, from_center, from_radius, d, dr) else {
                continue;
            };
            let color = sample_stops(stops, t as f32);
            if color.a <= 0.0 {
                continue;
            }
            surface.blend_pixel(x, y, color.scale_alpha(alpha * cov as f32));
        }
    }
}

/// Gradient parameter at `p` for circles interpolating `(c0, r0)` to
/// `(c0 + d, r0 + dr)`: the largest `t` whose circle passes through `p`,
/// clamped to `[0, 1]` (terminal stops pad beyond the circles).
fn gradient_t(p: Vec2, c0: Vec2, r0: f64, d: Vec2, dr: f64) -> Option<f64> {
    let q = p - c0;
    let a = d.x * d.x + d.y * d.y - dr * dr;
    let b = q.x * d.x + q.y * d.y + r0 * dr;
    let c = q.x * q.x + q.y * q.y - r0 * r0;

    let t = if a.abs() < 1e-9 {
        if b.abs() < 1e-9 {
            return None;
        }
        c / (2.0 * b)
    } else {
        let disc = b * b - a * c;
        if disc < 0.0 {
            return None;
        }
        let s = disc.sqrt();
        // Larger root; the sign of `a` decides which branch that is.
        if a > 0.0 { (b + s) / a } else { (b - s) / a }
    };
    Some(t.clamp(0.0, 1.0))
}

fn sample_stops(stops: &[GradientStop], t: f32) -> Rgba {
    let first = stops[0];
    if t <= first.t {
        return first.color;
    }
    let last = stops[stops.len() - 1];
    if t >= last.t {
        return last.color;
    }
    for pair in stops.windows(2) {
        let (s0, s1) = (pair[0], pair[1]);
        if t <= s1.t {
            let span = s1.t - s0.t;
            if span <= 0.0 {
                return s1.color;
            }
            return s0.color.lerp(s1.color, (t - s0.t) / span);
        }
    }
    last.color
}
