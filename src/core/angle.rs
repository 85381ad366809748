//! Pointer-to-angle conversion and wrap-safe angular deltas.

use glam::DVec2;
use std::f64::consts::{PI, TAU};

/// Angle of `pointer` around `center`, in (-π, π].
///
/// Screen coordinates grow downwards, so a positive angle step is a
/// clockwise turn on screen.
#[inline]
pub fn pointer_angle(pointer: DVec2, center: DVec2) -> f64 {
    let d = pointer - center;
    d.y.atan2(d.x)
}

/// Shortest equivalent of a raw angle difference.
///
/// Raw pointer angles jump by 2π when the pointer crosses the negative x
/// axis; folding the difference back keeps a small physical step small.
#[inline]
pub fn normalize_delta(delta: f64) -> f64 {
    if delta > PI {
        delta - TAU
    } else if delta < -PI {
        delta + TAU
    } else {
        delta
    }
}
