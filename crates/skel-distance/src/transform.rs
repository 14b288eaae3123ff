//! Signed distance transform and spoke field construction.
//!
//! Builds both images together via Danielsson-style vector propagation:
//! boundary voxels seed a closest-point offset field, which is relaxed
//! across repeated raster sweeps until it stabilizes. The signed distance
//! at a voxel is then the physical length of its closest-point offset,
//! positive inside the shape and negative outside.

use skel_core::error::{Error, Result};
use skel_core::image::{add_offset, Image, Index};
use skel_core::types::{BinaryMask, DistanceMap, SpokeField};
use skel_core::vector::Vector;

const SENTINEL: f32 = 1.0e9;

fn foreground<const D: usize>(mask: &BinaryMask<D>, index: Index<D>) -> bool {
    mask.get_or(index, 0) != 0
}

fn is_boundary<const D: usize>(mask: &BinaryMask<D>, index: Index<D>, neighbors: &[[isize; D]]) -> bool {
    if !foreground(mask, index) {
        return false;
    }
    neighbors.iter().any(|&offset| !foreground(mask, add_offset(index, offset)))
}

fn squared_length<const D: usize>(offset: &Vector<D>, spacing: [f64; D]) -> f64 {
    let mut sum = 0.0;
    for d in 0..D {
        let component = offset.0[d] as f64 * spacing[d];
        sum += component * component;
    }
    sum
}

/// Danielsson-style closest-point propagation seeded at every boundary
/// voxel. Returns, per voxel, the offset (in voxel units) to the nearest
/// boundary voxel.
fn propagate_closest_point<const D: usize>(
    mask: &BinaryMask<D>,
    spacing: [f64; D],
    neighbors: &[[isize; D]],
) -> Image<Vector<D>, D> {
    let size = mask.size();
    let mut field: Image<Vector<D>, D> =
        Image::new(size, mask.spacing().map(|_| 1.0), Vector::zero()).unwrap();
    let mut has_value: Image<u8, D> = Image::new(size, mask.spacing().map(|_| 1.0), 0).unwrap();

    for index in mask.indices() {
        if is_boundary(mask, index, neighbors) {
            field.set(index, Vector::zero());
            has_value.set(index, 1);
        }
    }

    let forward: Vec<Index<D>> = mask.indices().collect();
    let backward: Vec<Index<D>> = forward.iter().rev().cloned().collect();

    // Repeated forward/backward sweeps let the offset information travel
    // across the whole grid regardless of scan direction; using the full
    // neighbor set each sweep (rather than splitting into causal/anticausal
    // halves) costs extra iterations but never produces an incorrect result,
    // since relaxation only ever replaces a candidate with a strictly
    // shorter one.
    for _ in 0..3 {
        for &index in forward.iter().chain(backward.iter()) {
            relax(&mut field, &mut has_value, index, spacing, neighbors);
        }
    }

    field
}

fn relax<const D: usize>(
    field: &mut Image<Vector<D>, D>,
    has_value: &mut Image<u8, D>,
    index: Index<D>,
    spacing: [f64; D],
    neighbors: &[[isize; D]],
) {
    let mut best = if has_value.get_or(index, 0) != 0 {
        Some(*field.get(index).unwrap())
    } else {
        None
    };
    let mut best_sq = best.map(|v| squared_length(&v, spacing)).unwrap_or(f64::from(SENTINEL) * f64::from(SENTINEL));

    for &offset in neighbors {
        let neighbor_index = add_offset(index, offset);
        if has_value.get_or(neighbor_index, 0) == 0 {
            continue;
        }
        let Some(neighbor_offset) = field.get(neighbor_index) else { continue };
        let mut candidate = [0.0f32; D];
        for d in 0..D {
            candidate[d] = neighbor_offset.0[d] + offset[d] as f32;
        }
        let candidate = Vector(candidate);
        let candidate_sq = squared_length(&candidate, spacing);
        if candidate_sq < best_sq {
            best_sq = candidate_sq;
            best = Some(candidate);
        }
    }

    if let Some(value) = best {
        field.set(index, value);
        has_value.set(index, 1);
    }
}

fn finish<const D: usize>(
    mask: &BinaryMask<D>,
    spacing: [f64; D],
    closest: &Image<Vector<D>, D>,
    neighbors: &[[isize; D]],
) -> Result<(DistanceMap<D>, SpokeField<D>)> {
    let size = mask.size();
    let mut distance: DistanceMap<D> = Image::new(size, spacing, 0.0).unwrap();
    let mut spokes: SpokeField<D> = Image::new(size, spacing, Vector::zero()).unwrap();
    let max_spacing = spacing.iter().cloned().fold(f64::MIN, f64::max) as f32;

    for index in mask.indices() {
        let offset = closest.get_or(index, Vector([SENTINEL; D]));
        let magnitude = squared_length(&offset, spacing).sqrt() as f32;
        let signed = if foreground(mask, index) { magnitude } else { -magnitude };
        if !signed.is_finite() {
            return Err(Error::Numeric(format!("non-finite signed distance at {index:?}")));
        }
        distance.set(index, signed);

        let spoke = if signed > 1.5 * max_spacing { offset } else { Vector::zero() };
        spokes.set(index, spoke);
    }

    let _ = neighbors;
    Ok((distance, spokes))
}

/// Builds the signed distance map and spoke field for a 2D binary mask.
pub fn build_distance_and_spokes_2d(mask: &BinaryMask<2>, spacing: [f64; 2]) -> Result<(DistanceMap<2>, SpokeField<2>)> {
    build(mask, spacing, &skel_topology::tables::NEIGHBORS8)
}

/// Builds the signed distance map and spoke field for a 3D binary mask.
pub fn build_distance_and_spokes_3d(mask: &BinaryMask<3>, spacing: [f64; 3]) -> Result<(DistanceMap<3>, SpokeField<3>)> {
    build(mask, spacing, &skel_topology::tables::NEIGHBORS26)
}

fn build<const D: usize>(
    mask: &BinaryMask<D>,
    spacing: [f64; D],
    neighbors: &[[isize; D]],
) -> Result<(DistanceMap<D>, SpokeField<D>)> {
    if mask.is_empty() {
        return Err(Error::MissingInput("binary mask has no voxels"));
    }
    if spacing.iter().any(|&s| !(s > 0.0)) {
        return Err(Error::InvalidParameter("spacing must be positive on every axis".into()));
    }
    let closest = propagate_closest_point(mask, spacing, neighbors);
    finish(mask, spacing, &closest, neighbors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skel_testsupport::filled_square_2d;

    #[test]
    fn interior_distance_is_positive_and_exterior_negative() {
        let mask = filled_square_2d(7, 3);
        let (distance, _) = build_distance_and_spokes_2d(&mask, [1.0, 1.0]).unwrap();
        assert!(distance.get([0, 0]).unwrap() < &0.0);
        let center = (7 / 2 + 3) as isize;
        assert!(distance.get([center, center]).unwrap() > &0.0);
    }

    #[test]
    fn deep_interior_spoke_is_nonzero_and_shallow_spoke_is_zero() {
        let mask = filled_square_2d(9, 3);
        let (_, spokes) = build_distance_and_spokes_2d(&mask, [1.0, 1.0]).unwrap();
        let center = (9 / 2 + 3) as isize;
        assert!(!spokes.get([center, center]).unwrap().is_zero());
        assert!(spokes.get([3, 3]).unwrap().is_zero());
    }

    #[test]
    fn rejects_empty_spacing() {
        let mask = filled_square_2d(3, 1);
        let result = build_distance_and_spokes_2d(&mask, [1.0, 0.0]);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }
}
