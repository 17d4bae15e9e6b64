use crate::fish::Fish;
use crate::school::WorldBounds;
use crate::vector::clamp_length;

pub fn limit_speed(fish: &mut Fish) {
    fish.vel = clamp_length(fish.vel, fish.params.max_speed);
}

/// Toroidal wrap: leaving one edge puts the fish exactly on the opposite edge.
///
/// This snaps to the edge rather than carrying the overshoot over, so the
/// path is only faithful while `|vel * dt|` stays below the bound.
pub fn wrap_within_bounds(fish: &mut Fish, bounds: &WorldBounds) {
    fish.pos.x = wrap_axis(fish.pos.x, bounds.w);
    fish.pos.y = wrap_axis(fish.pos.y, bounds.h);
}

fn wrap_axis(value: f64, bound: f64) -> f64 {
    if value < 0.0 {
        bound
    } else if value > bound {
        0.0
    } else {
        value
    }
}
