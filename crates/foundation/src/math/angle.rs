//! Angle helpers.
//!
//! Angles are radians throughout. Orbit phases are expressed as fractions of
//! a full turn so call sites never spell out `2.0 * PI` by hand.

pub use std::f64::consts::TAU;

/// Radians for `i` of `n` equal divisions of a full turn.
pub fn turn_fraction(i: usize, n: usize) -> f64 {
    debug_assert!(n > 0);
    (i as f64 / n as f64) * TAU
}

/// Wrap an angle into `[0, TAU)`.
///
/// Total for all finite inputs, including large negatives.
pub fn wrap_tau(angle: f64) -> f64 {
    let wrapped = angle % TAU;
    if wrapped < 0.0 { wrapped + TAU } else { wrapped }
}
