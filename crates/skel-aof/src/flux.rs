//! Average outward flux computation from a spoke field.

use skel_core::error::{Error, Result};
use skel_core::image::{Image, Index};
use skel_core::types::{AofImage, SpokeField};
use skel_core::vector::Vector;

use crate::directions::generate_directions;

const DEFAULT_N_DIRS: usize = 60;

fn to_index<const D: usize>(coords: [f32; D]) -> Index<D> {
    let mut out = [0isize; D];
    for d in 0..D {
        out[d] = coords[d].floor() as isize;
    }
    out
}

/// Computes the average outward flux image from a spoke field.
///
/// Only voxels whose own spoke is non-zero (i.e. judged strictly interior
/// by the spoke builder) receive a non-zero flux value; all others are 0.
/// `n_dirs` defaults to 60 quasi-uniform directions generated from `seed`.
pub fn compute_aof<const D: usize>(spokes: &SpokeField<D>, seed: u64, n_dirs: Option<usize>) -> Result<AofImage<D>> {
    if spokes.is_empty() {
        return Err(Error::MissingInput("spoke field has no voxels"));
    }
    let n_dirs = n_dirs.unwrap_or(DEFAULT_N_DIRS);
    if n_dirs == 0 {
        return Err(Error::InvalidParameter("n_dirs must be at least 1".into()));
    }
    let directions: Vec<Vector<D>> = generate_directions(n_dirs, seed);

    let size = spokes.size();
    let mut aof: AofImage<D> = Image::new(size, spokes.spacing(), 0.0)?;

    for p in spokes.indices() {
        let own_spoke = spokes.get(p).copied().unwrap_or(Vector::zero());
        if own_spoke.is_zero() {
            continue;
        }

        let mut flux = 0.0f32;
        for u in &directions {
            let mut sample = [0.0f32; D];
            for d in 0..D {
                sample[d] = p[d] as f32 + u.0[d] + 0.5;
            }
            let q = to_index(sample);
            let spoke_at_q = spokes.get_or(q, Vector::zero());

            let mut s = [0.0f32; D];
            for d in 0..D {
                s[d] = spoke_at_q.0[d] + (p[d] - q[d]) as f32;
            }
            let s = Vector(s);
            if let Some(unit) = s.normalized() {
                flux -= unit.dot(u);
            }
        }
        if !flux.is_finite() {
            return Err(Error::Numeric(format!("non-finite average outward flux at {p:?}")));
        }
        aof.set(p, flux);
    }

    Ok(aof)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skel_distance::build_distance_and_spokes_2d;
    use skel_testsupport::filled_square_2d;

    #[test]
    fn exterior_and_shallow_voxels_have_zero_aof() {
        let mask = filled_square_2d(9, 3);
        let (_, spokes) = build_distance_and_spokes_2d(&mask, [1.0, 1.0]).unwrap();
        let aof = compute_aof(&spokes, 1, None).unwrap();
        assert_eq!(aof.get([0, 0]), Some(&0.0));
    }

    #[test]
    fn deep_interior_voxel_has_negative_aof() {
        let mask = filled_square_2d(11, 3);
        let (_, spokes) = build_distance_and_spokes_2d(&mask, [1.0, 1.0]).unwrap();
        let aof = compute_aof(&spokes, 1, None).unwrap();
        let center = (11 / 2 + 3) as isize;
        let value = *aof.get([center, center]).unwrap();
        assert!(value < 0.0, "expected negative flux at medial center, got {value}");
    }
}
