use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::fish::FlockParams;
use crate::obstacle::Obstacle;
use crate::school::WorldBounds;

/// How a step reads neighbor state while fish are being updated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOrder {
    /// Every fish steers against the pre-step school; updates are committed together.
    #[default]
    Simultaneous,
    /// Fish are updated in place in index order, so later fish see
    /// neighbors that already moved this step.
    Sequential,
}

/// Initial speed range for spawned fish.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnParams {
    pub min_speed: f64,
    pub max_speed: f64,
}

impl Default for SpawnParams {
    fn default() -> Self {
        Self {
            min_speed: 50.0,
            max_speed: 100.0,
        }
    }
}

/// Inverse-distance push away from nearby obstacles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvoidanceParams {
    /// Obstacles whose surface is farther than this are ignored.
    pub radius: f64,
    pub strength: f64,
    /// Floor on the surface distance so touching an obstacle stays finite.
    pub min_distance: f64,
}

impl Default for AvoidanceParams {
    fn default() -> Self {
        Self {
            radius: 40.0,
            strength: 300.0,
            min_distance: 1.0,
        }
    }
}

/// Static configuration for a fish world.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: f64,
    pub height: f64,
    pub fish_count: usize,
    /// Tunables handed to every fish the world spawns.
    pub fish: FlockParams,
    pub spawn: SpawnParams,
    pub avoidance: AvoidanceParams,
    pub obstacles: Vec<Obstacle>,
    pub obstacles_enabled: bool,
    pub update_order: UpdateOrder,
    /// Optional RNG seed for reproducible worlds.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            fish_count: 80,
            fish: FlockParams::default(),
            spawn: SpawnParams::default(),
            avoidance: AvoidanceParams::default(),
            obstacles: Vec::new(),
            obstacles_enabled: true,
            update_order: UpdateOrder::default(),
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn bounds(&self) -> WorldBounds {
        WorldBounds {
            w: self.width,
            h: self.height,
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        validate_bounds(&self.bounds())?;
        self.fish.validate()?;

        let spawn = &self.spawn;
        if !spawn.min_speed.is_finite() || !spawn.max_speed.is_finite() {
            return Err(SimError::InvalidConfig("spawn speeds must be finite"));
        }
        if spawn.min_speed < 0.0 {
            return Err(SimError::InvalidConfig(
                "spawn min_speed must be non-negative",
            ));
        }
        if spawn.max_speed < spawn.min_speed {
            return Err(SimError::InvalidConfig(
                "spawn max_speed must not be below min_speed",
            ));
        }

        let avoid = &self.avoidance;
        if !avoid.radius.is_finite() || avoid.radius < 0.0 {
            return Err(SimError::InvalidConfig(
                "avoidance radius must be finite and non-negative",
            ));
        }
        if !avoid.strength.is_finite() || avoid.strength < 0.0 {
            return Err(SimError::InvalidConfig(
                "avoidance strength must be finite and non-negative",
            ));
        }
        if !avoid.min_distance.is_finite() || avoid.min_distance <= 0.0 {
            return Err(SimError::InvalidConfig(
                "avoidance min_distance must be positive",
            ));
        }

        for obstacle in &self.obstacles {
            obstacle.validate()?;
        }
        Ok(())
    }
}

pub(crate) fn validate_bounds(bounds: &WorldBounds) -> Result<(), SimError> {
    if !bounds.w.is_finite() || !bounds.h.is_finite() || bounds.w <= 0.0 || bounds.h <= 0.0 {
        return Err(SimError::InvalidConfig(
            "world dimensions must be positive and finite",
        ));
    }
    Ok(())
}
