//! Small helpers over [`DVec2`] that the steering code leans on.

use glam::DVec2;
use rand::Rng;
use rand_distr::{Distribution, UnitCircle};

#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}

/// Unit vector along `v`, or `None` when `v` has no usable direction.
#[inline]
pub fn normalize(v: DVec2) -> Option<DVec2> {
    v.try_normalize()
}

/// Like [`normalize`] but picks a uniformly random direction for the zero vector.
pub fn normalize_or_random(v: DVec2, rng: &mut impl Rng) -> DVec2 {
    normalize(v).unwrap_or_else(|| random_unit(rng))
}

/// Returns `v` untouched when `|v| <= max`, otherwise `v` rescaled to length `max`.
pub fn clamp_length(v: DVec2, max: f64) -> DVec2 {
    let len = v.length();
    if len > max {
        if max <= 0.0 {
            return DVec2::ZERO;
        }
        v / len * max
    } else {
        v
    }
}

pub fn random_unit(rng: &mut impl Rng) -> DVec2 {
    let [x, y]: [f64; 2] = UnitCircle.sample(rng);
    DVec2::new(x, y)
}
