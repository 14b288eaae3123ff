//! Generation of a quasi-uniform direction set on the unit sphere via
//! Coulomb-like pairwise repulsion, used to sample the spoke field from
//! multiple angles when computing average outward flux.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skel_core::vector::Vector;

const REPULSION_ITERATIONS: usize = 50;
const STEP_SIZE: f32 = 0.1;

fn random_unit_vector<const D: usize>(rng: &mut StdRng) -> Vector<D> {
    loop {
        let mut components = [0.0f32; D];
        for c in components.iter_mut() {
            *c = rng.random_range(-1.0f32..1.0f32);
        }
        let candidate = Vector(components);
        if let Some(unit) = candidate.normalized() {
            return unit;
        }
    }
}

/// Generates `n` quasi-uniform directions on the unit `(D-1)`-sphere.
///
/// The first direction is always the fixed axis `(1, 0, ..., 0)`; the
/// remaining `n - 1` start as i.i.d. uniform random directions (seeded by
/// `seed` for reproducibility) and are relaxed toward an even spread by
/// repeated pairwise inverse-square repulsion. The fixed first direction is
/// never moved.
pub fn generate_directions<const D: usize>(n: usize, seed: u64) -> Vec<Vector<D>> {
    assert!(n >= 1, "direction count must be at least 1");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut points: Vec<Vector<D>> = Vec::with_capacity(n);
    let mut fixed = [0.0f32; D];
    fixed[0] = 1.0;
    points.push(Vector(fixed));
    for _ in 1..n {
        points.push(random_unit_vector(&mut rng));
    }

    for _ in 0..REPULSION_ITERATIONS {
        let snapshot = points.clone();
        for i in 1..points.len() {
            let mut force = Vector::<D>::zero();
            for (j, &other) in snapshot.iter().enumerate() {
                if i == j {
                    continue;
                }
                let delta = snapshot[i].sub(&other);
                let dist2 = delta.dot(&delta).max(1.0e-6);
                let scale = 1.0 / dist2;
                force = force.add(&delta.scale(scale));
            }
            if let Some(direction) = force.normalized() {
                let moved = snapshot[i].add(&direction.scale(STEP_SIZE));
                if let Some(unit) = moved.normalized() {
                    points[i] = unit;
                }
            }
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_direction_is_fixed_axis() {
        let dirs: Vec<Vector<3>> = generate_directions(10, 1);
        assert_eq!(dirs[0], Vector([1.0, 0.0, 0.0]));
    }

    #[test]
    fn all_directions_are_unit_length() {
        let dirs: Vec<Vector<3>> = generate_directions(60, 42);
        for d in &dirs {
            assert!((d.norm() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn deterministic_for_fixed_seed() {
        let a: Vec<Vector<3>> = generate_directions(20, 7);
        let b: Vec<Vector<3>> = generate_directions(20, 7);
        assert_eq!(a, b);
    }
}
