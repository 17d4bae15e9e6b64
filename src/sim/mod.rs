use crate::fish::Fish;

/// A pluggable neighbor query that can be swapped without touching fish update logic.
pub trait NeighborSearch: Send + Sync {
    /// Rebuild internal structures based on the current fish positions.
    fn rebuild(&mut self, fishes: &[Fish]);

    /// Indices of fish strictly within `radius` of fish `index`, never `index` itself.
    fn neighbors(&self, fishes: &[Fish], index: usize, radius: f64) -> Vec<usize>;

    /// Human-readable name for display/debugging.
    fn name(&self) -> &'static str;
}

mod brute_force;
mod engine;
pub mod steering;
pub(crate) mod utils;

pub use brute_force::BruteForceNeighborSearch;
pub use engine::World;
pub use steering::Steering;
