use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::vector::normalize_or_random;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Circle { radius: f64 },
    /// Axis-aligned, centered on the obstacle's center.
    Rectangle { width: f64, height: f64 },
}

/// A static rock the school steers around.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    center: DVec2,
    shape: Shape,
}

impl Obstacle {
    pub fn circle(center: DVec2, radius: f64) -> Result<Self, SimError> {
        let obstacle = Self {
            center,
            shape: Shape::Circle { radius },
        };
        obstacle.validate()?;
        Ok(obstacle)
    }

    pub fn rectangle(center: DVec2, width: f64, height: f64) -> Result<Self, SimError> {
        let obstacle = Self {
            center,
            shape: Shape::Rectangle { width, height },
        };
        obstacle.validate()?;
        Ok(obstacle)
    }

    /// Square rectangle whose side is `2 * radius`.
    pub fn square(center: DVec2, radius: f64) -> Result<Self, SimError> {
        Self::rectangle(center, radius * 2.0, radius * 2.0)
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub(crate) fn validate(&self) -> Result<(), SimError> {
        if !self.center.is_finite() {
            return Err(SimError::InvalidConfig("obstacle center must be finite"));
        }
        match self.shape {
            Shape::Circle { radius } => {
                if !radius.is_finite() || radius < 0.0 {
                    return Err(SimError::InvalidConfig(
                        "obstacle radius must be finite and non-negative",
                    ));
                }
            }
            Shape::Rectangle { width, height } => {
                if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
                    return Err(SimError::InvalidConfig(
                        "obstacle width/height must be finite and non-negative",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Distance from `point` to the obstacle's surface, 0 when inside.
    pub fn distance_to_surface(&self, point: DVec2) -> f64 {
        match self.shape {
            Shape::Circle { radius } => (point.distance(self.center) - radius).max(0.0),
            Shape::Rectangle { width, height } => {
                let half = DVec2::new(width, height) * 0.5;
                let closest = point.clamp(self.center - half, self.center + half);
                point.distance(closest)
            }
        }
    }

    pub fn contains(&self, point: DVec2) -> bool {
        self.distance_to_surface(point) == 0.0
    }

    /// Unit vector pointing from the center toward `point`.
    ///
    /// A point sitting exactly on the center gets a uniformly random direction.
    pub fn direction_from_center(&self, point: DVec2, rng: &mut impl Rng) -> DVec2 {
        normalize_or_random(point - self.center, rng)
    }
}
