//! Homotopic thinning: a static priority queue, built once from the
//! distance map and never re-seeded, removing every simple voxel in
//! ascending-distance order up to an optional maximum distance.

use skel_core::error::Result;
use skel_core::image::Image;
use skel_core::types::{BinaryMask, DistanceMap, Skeleton};

use crate::heap::MinHeap;
use crate::strategy::{strategy_2d, strategy_3d, Strategy};

/// Tunables for [`thin_homotopic_2d`] / [`thin_homotopic_3d`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HomotopicOptions {
    /// Stop processing once the popped priority exceeds this value. `None`
    /// means process the whole queue.
    pub max_distance: Option<f32>,
}

fn thin_homotopic_core<const D: usize>(
    binary: &BinaryMask<D>,
    distance: &DistanceMap<D>,
    strategy: &Strategy<D>,
    options: HomotopicOptions,
) -> Result<Skeleton<D>> {
    let mut skeleton: Skeleton<D> = Image::new(binary.size(), binary.spacing(), 0.0)?;
    for index in binary.indices() {
        if binary.get_or(index, 0) != 0 {
            skeleton.set(index, 1.0);
        }
    }

    let mut heap: MinHeap<D> = MinHeap::new();
    for index in skeleton.indices() {
        let d = distance.get_or(index, 0.0);
        if d > 0.0 {
            heap.push(index, d);
        }
    }

    loop {
        let Some(priority) = heap.peek_priority() else { break };
        if let Some(max) = options.max_distance {
            if priority > max {
                break;
            }
        }
        let (index, _) = heap.pop().expect("heap non-empty after peek");
        if (strategy.is_simple)(&skeleton, index) {
            skeleton.set(index, 0.0);
        }
    }

    Ok(skeleton)
}

/// Homotopic thinning of a 2D binary mask.
pub fn thin_homotopic_2d(
    binary: &BinaryMask<2>,
    spacing: [f64; 2],
    options: HomotopicOptions,
) -> Result<Skeleton<2>> {
    let (distance, _spokes) = skel_distance::build_distance_and_spokes_2d(binary, spacing)?;
    thin_homotopic_core(binary, &distance, &strategy_2d(), options)
}

/// Homotopic thinning of a 3D binary mask.
pub fn thin_homotopic_3d(
    binary: &BinaryMask<3>,
    spacing: [f64; 3],
    options: HomotopicOptions,
) -> Result<Skeleton<3>> {
    let (distance, _spokes) = skel_distance::build_distance_and_spokes_3d(binary, spacing)?;
    thin_homotopic_core(binary, &distance, &strategy_3d(), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skel_testsupport::{filled_cube_3d, filled_square_2d};

    #[test]
    fn thinning_never_adds_foreground() {
        let mask = filled_square_2d(7, 2);
        let skeleton = thin_homotopic_2d(&mask, [1.0, 1.0], HomotopicOptions::default()).unwrap();
        for index in mask.indices() {
            if skeleton.get_or(index, 0.0) > 0.0 {
                assert!(mask.get_or(index, 0) != 0, "skeleton voxel outside original foreground");
            }
        }
    }

    #[test]
    fn thinning_reduces_a_filled_square_to_a_small_residue() {
        let mask = filled_square_2d(7, 2);
        let original = mask.data().iter().filter(|&&v| v != 0).count();
        let skeleton = thin_homotopic_2d(&mask, [1.0, 1.0], HomotopicOptions::default()).unwrap();
        let remaining = skeleton.data().iter().filter(|&&v| v > 0.0).count();
        assert!(remaining < original);
        assert!(remaining >= 1);
    }

    #[test]
    fn thinning_a_solid_cube_leaves_a_nonempty_connected_residue() {
        let mask = filled_cube_3d(7, 1);
        let skeleton = thin_homotopic_3d(&mask, [1.0, 1.0, 1.0], HomotopicOptions::default()).unwrap();
        let remaining = skeleton.data().iter().filter(|&&v| v > 0.0).count();
        assert!(remaining >= 1);
    }
}
