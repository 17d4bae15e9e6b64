//! Boids rules for a single fish, read against a fixed view of the school.

use glam::DVec2;
use rand::Rng;

use crate::config::AvoidanceParams;
use crate::fish::{Fish, FlockParams};
use crate::obstacle::Obstacle;

/// Unweighted rule outputs for one fish. Avoidance is already scaled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Steering {
    pub separation: DVec2,
    pub alignment: DVec2,
    pub cohesion: DVec2,
    pub avoidance: DVec2,
}

impl Steering {
    /// Velocity change for this step.
    pub fn combined(&self, params: &FlockParams) -> DVec2 {
        self.separation * params.separation_weight
            + self.alignment * params.alignment_weight
            + self.cohesion * params.cohesion_weight
            + self.avoidance
    }
}

/// Computes the flocking rules for `fishes[index]`.
///
/// `candidates` are indices to consider; each rule filters them by its own
/// radius, so passing every index is fine. The fish's own index is skipped.
pub fn flocking(fishes: &[Fish], index: usize, candidates: &[usize]) -> Steering {
    let me = fishes[index];
    let params = &me.params;

    let mut separation = DVec2::ZERO;
    let mut separation_count = 0usize;
    let mut avg_vel = DVec2::ZERO;
    let mut alignment_count = 0usize;
    let mut center = DVec2::ZERO;
    let mut cohesion_count = 0usize;

    for &j in candidates {
        if j == index {
            continue;
        }
        let other = fishes[j];
        let dist = me.pos.distance(other.pos);
        if dist <= 0.0 {
            continue;
        }

        if dist < params.separation_radius {
            separation += (me.pos - other.pos) / dist;
            separation_count += 1;
        }
        if dist < params.alignment_radius {
            avg_vel += other.vel;
            alignment_count += 1;
        }
        if dist < params.cohesion_radius {
            center += other.pos;
            cohesion_count += 1;
        }
    }

    let mut steering = Steering::default();

    // --- separation ---
    if separation_count > 0 {
        steering.separation = separation / separation_count as f64;
    }

    // --- alignment ---
    if alignment_count > 0 {
        steering.alignment = avg_vel / alignment_count as f64 - me.vel;
    }

    // --- cohesion ---
    if cohesion_count > 0 {
        steering.cohesion = center / cohesion_count as f64 - me.pos;
    }

    steering
}

/// Push away from every obstacle whose surface is within `avoidance.radius`.
///
/// Magnitude is `strength / max(surface_distance, min_distance)`.
pub fn avoid_obstacles(
    pos: DVec2,
    obstacles: &[Obstacle],
    avoidance: &AvoidanceParams,
    rng: &mut impl Rng,
) -> DVec2 {
    let mut push = DVec2::ZERO;
    for obstacle in obstacles {
        let surface = obstacle.distance_to_surface(pos);
        if surface >= avoidance.radius {
            continue;
        }
        let dir = obstacle.direction_from_center(pos, rng);
        push += dir * (avoidance.strength / surface.max(avoidance.min_distance));
    }
    push
}

/// All four rules for `fishes[index]`.
pub fn steer(
    fishes: &[Fish],
    index: usize,
    candidates: &[usize],
    obstacles: &[Obstacle],
    avoidance: &AvoidanceParams,
    rng: &mut impl Rng,
) -> Steering {
    let mut steering = flocking(fishes, index, candidates);
    steering.avoidance = avoid_obstacles(fishes[index].pos, obstacles, avoidance, rng);
    steering
}
