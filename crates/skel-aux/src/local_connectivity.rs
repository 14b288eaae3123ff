//! Local connectivity: for every foreground voxel, the number of foreground
//! voxels reachable from it by BFS within a bounded number of levels.

use std::collections::{HashSet, VecDeque};

use skel_core::image::{add_offset, Image, Index};
use skel_core::types::{BinaryMask, ConnectivityImage};

fn foreground<const D: usize>(mask: &BinaryMask<D>, index: Index<D>) -> bool {
    mask.get_or(index, 0) != 0
}

fn local_connectivity<const D: usize>(
    thin: &BinaryMask<D>,
    max_level: u32,
    neighbors: &[[isize; D]],
) -> ConnectivityImage<D> {
    let mut out: ConnectivityImage<D> = Image::new(thin.size(), thin.spacing(), 0).unwrap();

    for start in thin.indices() {
        if !foreground(thin, start) {
            continue;
        }

        let mut visited: HashSet<Index<D>> = HashSet::new();
        visited.insert(start);
        let mut queue: VecDeque<(Index<D>, u32)> = VecDeque::new();
        queue.push_back((start, 0));
        let mut count = 0u32;

        while let Some((current, level)) = queue.pop_front() {
            if level >= max_level {
                continue;
            }
            count += 1;
            for &offset in neighbors {
                let next = add_offset(current, offset);
                if foreground(thin, next) && !visited.contains(&next) {
                    visited.insert(next);
                    queue.push_back((next, level + 1));
                }
            }
        }

        out.set(start, count);
    }

    out
}

/// Local connectivity of a 2D thin binary image.
pub fn local_connectivity_2d(thin: &BinaryMask<2>, max_level: u32) -> ConnectivityImage<2> {
    local_connectivity(thin, max_level, &skel_topology::tables::NEIGHBORS8)
}

/// Local connectivity of a 3D thin binary image.
pub fn local_connectivity_3d(thin: &BinaryMask<3>, max_level: u32) -> ConnectivityImage<3> {
    local_connectivity(thin, max_level, &skel_topology::tables::NEIGHBORS26)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skel_core::types::BinaryMask;

    #[test]
    fn isolated_voxel_has_connectivity_one() {
        let mut mask: BinaryMask<2> = BinaryMask::new([5, 5], [1.0, 1.0], 0).unwrap();
        mask.set([2, 2], 1);
        let out = local_connectivity_2d(&mask, 5);
        assert_eq!(out.get([2, 2]), Some(&1));
    }

    #[test]
    fn a_line_of_five_with_level_cap_two_counts_three() {
        let mut mask: BinaryMask<2> = BinaryMask::new([9, 3], [1.0, 1.0], 0).unwrap();
        for x in 2..7 {
            mask.set([x, 1], 1);
        }
        let out = local_connectivity_2d(&mask, 2);
        // from the middle voxel (x=4), level 0 = itself, level 1 reaches
        // x=3 and x=5: three voxels within 2 levels.
        assert_eq!(out.get([4, 1]), Some(&3));
    }
}
