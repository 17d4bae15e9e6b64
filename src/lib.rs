//! Schooling fish on a wrap-around plane.
//!
//! The core is [`World`]: hand it a `dt`, it moves every fish by the Boids
//! rules (separation, alignment, cohesion), pushes them away from nearby
//! obstacles, caps their speed and wraps them at the edges. Drawing and input
//! live outside the library.

pub mod config;
pub mod error;
pub mod fish;
pub mod obstacle;
pub mod school;
pub mod sim;
pub mod vector;

pub use config::{AvoidanceParams, SimConfig, SpawnParams, UpdateOrder};
pub use error::SimError;
pub use fish::{Fish, FlockParams};
pub use glam::DVec2;
pub use obstacle::{Obstacle, Shape};
pub use school::{School, WorldBounds};
pub use sim::{BruteForceNeighborSearch, NeighborSearch, Steering, World};
