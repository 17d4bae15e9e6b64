use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::config::{validate_bounds, SimConfig, UpdateOrder};
use crate::error::SimError;
use crate::fish::Fish;
use crate::obstacle::Obstacle;
use crate::school::{spawn_fish, School, WorldBounds};
use super::steering::steer;
use super::{BruteForceNeighborSearch, NeighborSearch};

/// Owns the school and the obstacles and advances them one `dt` at a time.
pub struct World {
    config: SimConfig,
    school: School,
    obstacles: Vec<Obstacle>,
    obstacles_enabled: bool,
    neighbors: Box<dyn NeighborSearch>,
    rng: StdRng,
}

impl World {
    /// Validates `config` and populates the world with `config.fish_count` random fish.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        Self::with_neighbor_search(config, Box::new(BruteForceNeighborSearch))
    }

    pub fn with_neighbor_search(
        config: SimConfig,
        neighbors: Box<dyn NeighborSearch>,
    ) -> Result<Self, SimError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let school = School::new_random_with_rng(
            config.fish_count,
            config.bounds(),
            config.fish,
            &config.spawn,
            &mut rng,
        );
        debug!(
            fish = school.fishes.len(),
            obstacles = config.obstacles.len(),
            width = config.width,
            height = config.height,
            "world initialized",
        );
        Ok(Self {
            obstacles: config.obstacles.clone(),
            obstacles_enabled: config.obstacles_enabled,
            config,
            school,
            neighbors,
            rng,
        })
    }

    /// Replaces the school with `count` random fish on a plane of the given size.
    pub fn initialize(&mut self, count: usize, bounds: WorldBounds) -> Result<(), SimError> {
        validate_bounds(&bounds)?;
        self.config.width = bounds.w;
        self.config.height = bounds.h;
        self.config.fish_count = count;
        self.school = School::new_random_with_rng(
            count,
            bounds,
            self.config.fish,
            &self.config.spawn,
            &mut self.rng,
        );
        debug!(fish = count, width = bounds.w, height = bounds.h, "school reinitialized");
        Ok(())
    }

    /// Advances every fish by `dt` seconds.
    pub fn step(&mut self, dt: f64) -> Result<(), SimError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SimError::InvalidTimestep(dt));
        }
        let n = self.school.fishes.len();
        if n == 0 {
            return Ok(());
        }

        let obstacles: &[Obstacle] = if self.obstacles_enabled {
            &self.obstacles[..]
        } else {
            &[]
        };
        let avoidance = &self.config.avoidance;
        let bounds = self.school.bounds;
        let rng = &mut self.rng;

        match self.config.update_order {
            UpdateOrder::Simultaneous => {
                let mut deltas = vec![DVec2::ZERO; n];
                {
                    let snapshot = &self.school.fishes;
                    self.neighbors.rebuild(snapshot);
                    for (i, delta) in deltas.iter_mut().enumerate() {
                        let radius = snapshot[i].params.sight_radius();
                        let candidates = self.neighbors.neighbors(snapshot, i, radius);
                        *delta = steer(snapshot, i, &candidates, obstacles, avoidance, rng)
                            .combined(&snapshot[i].params);
                    }
                }

                for (fish, delta) in self.school.fishes.iter_mut().zip(deltas) {
                    fish.apply(delta, dt, &bounds);
                }
            }
            UpdateOrder::Sequential => {
                let fishes = &mut self.school.fishes;
                self.neighbors.rebuild(fishes);
                for i in 0..n {
                    let radius = fishes[i].params.sight_radius();
                    let candidates = self.neighbors.neighbors(fishes, i, radius);
                    let delta = steer(fishes, i, &candidates, obstacles, avoidance, rng)
                        .combined(&fishes[i].params);
                    fishes[i].apply(delta, dt, &bounds);
                }
            }
        }

        trace!(dt, fish = n, "stepped");
        Ok(())
    }

    /// Drops a fish at `(x, y)` with a random heading. Returns its index.
    pub fn add_fish(&mut self, x: f64, y: f64) -> Result<usize, SimError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(SimError::InvalidPosition { x, y });
        }
        let fish = spawn_fish(
            DVec2::new(x, y),
            self.config.fish,
            &self.config.spawn,
            &mut self.rng,
        );
        Ok(self.push(fish))
    }

    /// Adds a fish with caller-chosen velocity and params.
    pub fn add_fish_with(&mut self, fish: Fish) -> Result<usize, SimError> {
        if !fish.pos.is_finite() {
            return Err(SimError::InvalidPosition {
                x: fish.pos.x,
                y: fish.pos.y,
            });
        }
        if !fish.vel.is_finite() {
            return Err(SimError::InvalidConfig("fish velocity must be finite"));
        }
        fish.params.validate()?;
        Ok(self.push(fish))
    }

    fn push(&mut self, fish: Fish) -> usize {
        let index = self.school.fishes.len();
        self.school.fishes.push(fish);
        debug!(index, x = fish.pos.x, y = fish.pos.y, "fish added");
        index
    }

    /// Removes the fish at `index`; later fish shift down by one.
    pub fn remove_fish(&mut self, index: usize) -> Option<Fish> {
        if index >= self.school.fishes.len() {
            return None;
        }
        let fish = self.school.fishes.remove(index);
        debug!(index, remaining = self.school.fishes.len(), "fish removed");
        Some(fish)
    }

    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn set_obstacles_enabled(&mut self, enabled: bool) {
        if self.obstacles_enabled != enabled {
            debug!(enabled, "obstacle avoidance toggled");
        }
        self.obstacles_enabled = enabled;
    }

    pub fn fishes(&self) -> &[Fish] {
        &self.school.fishes
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacles_enabled(&self) -> bool {
        self.obstacles_enabled
    }

    pub fn bounds(&self) -> WorldBounds {
        self.school.bounds
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.school.fishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.school.fishes.is_empty()
    }

    pub fn neighbor_search_name(&self) -> &'static str {
        self.neighbors.name()
    }
}
