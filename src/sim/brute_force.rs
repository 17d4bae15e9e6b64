use crate::fish::Fish;
use crate::vector::distance;
use super::NeighborSearch;

/// Checks every pair; O(n^2) per step.
pub struct BruteForceNeighborSearch;

impl NeighborSearch for BruteForceNeighborSearch {
    fn rebuild(&mut self, _fishes: &[Fish]) {
        // Nothing to rebuild for brute force.
    }

    fn neighbors(&self, fishes: &[Fish], index: usize, radius: f64) -> Vec<usize> {
        let me = fishes[index].pos;

        fishes
            .iter()
            .enumerate()
            .filter(|&(j, other)| {
                if j == index {
                    return false;
                }
                let dist = distance(me, other.pos);
                dist > 0.0 && dist < radius
            })
            .map(|(j, _)| j)
            .collect()
    }

    fn name(&self) -> &'static str {
        "BruteForce"
    }
}
