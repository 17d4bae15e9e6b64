use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::school::WorldBounds;
use crate::sim::utils::{limit_speed, wrap_within_bounds};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fish {
    pub pos: DVec2,
    pub vel: DVec2,
    pub params: FlockParams,
}

/// Per-fish tunables for the three flocking rules.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockParams {
    pub separation_radius: f64,
    pub alignment_radius: f64,
    pub cohesion_radius: f64,
    pub separation_weight: f64,
    pub alignment_weight: f64,
    pub cohesion_weight: f64,
    pub max_speed: f64,
    /// Head-to-tail length, only used for drawing.
    pub body_length: f64,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            separation_radius: 25.0,
            alignment_radius: 50.0,
            cohesion_radius: 50.0,
            separation_weight: 30.0,
            alignment_weight: 1.0,
            cohesion_weight: 0.5,
            max_speed: 150.0,
            body_length: 15.0,
        }
    }
}

impl FlockParams {
    pub fn validate(&self) -> Result<(), SimError> {
        let radii = [
            self.separation_radius,
            self.alignment_radius,
            self.cohesion_radius,
        ];
        if radii.iter().any(|r| !r.is_finite() || *r < 0.0) {
            return Err(SimError::InvalidConfig(
                "neighbor radii must be finite and non-negative",
            ));
        }
        let weights = [
            self.separation_weight,
            self.alignment_weight,
            self.cohesion_weight,
        ];
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(SimError::InvalidConfig("rule weights must be finite"));
        }
        if !self.max_speed.is_finite() || self.max_speed < 0.0 {
            return Err(SimError::InvalidConfig(
                "max_speed must be finite and non-negative",
            ));
        }
        if !self.body_length.is_finite() || self.body_length < 0.0 {
            return Err(SimError::InvalidConfig(
                "body_length must be finite and non-negative",
            ));
        }
        Ok(())
    }

    /// Largest radius any rule looks at.
    pub fn sight_radius(&self) -> f64 {
        self.separation_radius
            .max(self.alignment_radius)
            .max(self.cohesion_radius)
    }
}

impl Fish {
    pub fn new(pos: DVec2, vel: DVec2, params: FlockParams) -> Self {
        Self { pos, vel, params }
    }

    /// Adds a steering delta, caps the speed, moves and wraps.
    pub fn apply(&mut self, steer: DVec2, dt: f64, bounds: &WorldBounds) {
        self.vel += steer;
        limit_speed(self);
        self.pos += self.vel * dt;
        wrap_within_bounds(self, bounds);
    }

    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Where the tail sits, trailing the head along the heading.
    pub fn tail(&self) -> DVec2 {
        let heading = self.vel.try_normalize().unwrap_or(DVec2::X);
        self.pos - heading * self.params.body_length
    }
}
