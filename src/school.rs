use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SpawnParams;
use crate::fish::{Fish, FlockParams};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub w: f64,
    pub h: f64,
}

impl WorldBounds {
    pub fn contains(&self, pos: DVec2) -> bool {
        (0.0..=self.w).contains(&pos.x) && (0.0..=self.h).contains(&pos.y)
    }
}

/// The fish population plus the plane it swims on.
///
/// A fish's identity is its index in `fishes`.
#[derive(Clone, Debug)]
pub struct School {
    pub fishes: Vec<Fish>,
    pub bounds: WorldBounds,
}

impl School {
    pub fn empty(bounds: WorldBounds) -> Self {
        Self {
            fishes: Vec::new(),
            bounds,
        }
    }

    pub fn new_random_with_rng(
        num: usize,
        bounds: WorldBounds,
        params: FlockParams,
        spawn: &SpawnParams,
        rng: &mut impl Rng,
    ) -> Self {
        let mut fishes = Vec::with_capacity(num);

        for _ in 0..num {
            let x = rng.random_range(0.0..bounds.w);
            let y = rng.random_range(0.0..bounds.h);
            fishes.push(spawn_fish(DVec2::new(x, y), params, spawn, rng));
        }

        Self { fishes, bounds }
    }
}

/// A fish at `pos` with a random heading and a speed in `[min_speed, max_speed)`.
pub fn spawn_fish(
    pos: DVec2,
    params: FlockParams,
    spawn: &SpawnParams,
    rng: &mut impl Rng,
) -> Fish {
    let angle = rng.random_range(0.0..std::f64::consts::TAU);
    let speed = if spawn.max_speed > spawn.min_speed {
        rng.random_range(spawn.min_speed..spawn.max_speed)
    } else {
        spawn.min_speed
    };
    Fish::new(pos, DVec2::from_angle(angle) * speed, params)
}
