//! Transfers skeleton values (e.g. thickness) onto the boundary voxels of
//! the original shape, via nearest-neighbor lookup against the skeleton's
//! foreground voxels.

use skel_core::error::{Error, Result};
use skel_core::image::Image;
use skel_core::types::{BinaryMask, BoundaryField, Skeleton};

use crate::kdtree::KdTree;

fn foreground_u8<const D: usize>(mask: &BinaryMask<D>, index: skel_core::image::Index<D>) -> bool {
    mask.get_or(index, 0) != 0
}

fn is_boundary<const D: usize>(
    mask: &BinaryMask<D>,
    index: skel_core::image::Index<D>,
    neighbors: &[[isize; D]],
) -> bool {
    if !foreground_u8(mask, index) {
        return false;
    }
    neighbors
        .iter()
        .any(|&offset| !foreground_u8(mask, skel_core::image::add_offset(index, offset)))
}

fn physical_coords<const D: usize>(index: skel_core::image::Index<D>, origin: [f64; D], spacing: [f64; D]) -> [f64; D] {
    let mut out = [0.0; D];
    for d in 0..D {
        out[d] = origin[d] + index[d] as f64 * spacing[d];
    }
    out
}

fn map_to_boundary<const D: usize>(
    shape: &BinaryMask<D>,
    skeleton: &Skeleton<D>,
    neighbors: &[[isize; D]],
) -> Result<BoundaryField<D>> {
    if !shape.same_geometry(skeleton) {
        return Err(Error::ShapeMismatch("shape and skeleton must share geometry".into()));
    }

    let origin = shape.origin();
    let spacing = shape.spacing();

    let points: Vec<([f64; D], f32)> = skeleton
        .indices()
        .filter_map(|index| {
            let value = skeleton.get_or(index, 0.0);
            (value > 0.0).then(|| (physical_coords(index, origin, spacing), value))
        })
        .collect();
    let tree: KdTree<D> = KdTree::build(points);

    let mut out: BoundaryField<D> = Image::new(shape.size(), spacing, 0.0)?;
    for index in shape.indices() {
        if !is_boundary(shape, index, neighbors) {
            continue;
        }
        let target = physical_coords(index, origin, spacing);
        let value = tree.nearest(target).unwrap_or(0.0);
        out.set(index, value);
    }

    Ok(out)
}

/// Maps skeleton values onto the shape boundary of a 2D binary mask.
pub fn map_to_boundary_2d(shape: &BinaryMask<2>, skeleton: &Skeleton<2>) -> Result<BoundaryField<2>> {
    map_to_boundary(shape, skeleton, &skel_topology::tables::NEIGHBORS8)
}

/// Maps skeleton values onto the shape boundary of a 3D binary mask.
pub fn map_to_boundary_3d(shape: &BinaryMask<3>, skeleton: &Skeleton<3>) -> Result<BoundaryField<3>> {
    map_to_boundary(shape, skeleton, &skel_topology::tables::NEIGHBORS26)
}
