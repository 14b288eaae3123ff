//! Synthetic binary shapes used as fixtures by the skeletonization test
//! suites. Each generator returns a [`BinaryMask`] with a small margin of
//! background around the shape so boundary-adjacent voxels are well defined.

use skel_core::types::BinaryMask;

/// A filled `side x side` square, with `margin` voxels of background border.
pub fn filled_square_2d(side: usize, margin: usize) -> BinaryMask<2> {
    let extent = side + 2 * margin;
    let mut mask: BinaryMask<2> = BinaryMask::new([extent, extent], [1.0, 1.0], 0).unwrap();
    for x in 0..side {
        for y in 0..side {
            mask.set([(x + margin) as isize, (y + margin) as isize], 1);
        }
    }
    mask
}

/// A hollow ring (annulus): foreground between `inner_radius` and
/// `outer_radius` from the center of a square canvas.
pub fn hollow_ring_2d(outer_radius: usize, inner_radius: usize, margin: usize) -> BinaryMask<2> {
    let extent = 2 * outer_radius + 1 + 2 * margin;
    let center = (outer_radius + margin) as isize;
    let mut mask: BinaryMask<2> = BinaryMask::new([extent, extent], [1.0, 1.0], 0).unwrap();
    let outer2 = (outer_radius * outer_radius) as isize;
    let inner2 = (inner_radius * inner_radius) as isize;
    for x in 0..extent as isize {
        for y in 0..extent as isize {
            let dx = x - center;
            let dy = y - center;
            let r2 = dx * dx + dy * dy;
            if r2 <= outer2 && r2 >= inner2 {
                mask.set([x, y], 1);
            }
        }
    }
    mask
}

/// A filled `side x side x side` cube with a background margin.
pub fn filled_cube_3d(side: usize, margin: usize) -> BinaryMask<3> {
    let extent = side + 2 * margin;
    let mut mask: BinaryMask<3> = BinaryMask::new([extent, extent, extent], [1.0, 1.0, 1.0], 0).unwrap();
    for x in 0..side {
        for y in 0..side {
            for z in 0..side {
                mask.set(
                    [(x + margin) as isize, (y + margin) as isize, (z + margin) as isize],
                    1,
                );
            }
        }
    }
    mask
}

/// A solid cylinder of the given radius and length, axis along z.
pub fn cylinder_3d(radius: usize, length: usize, margin: usize) -> BinaryMask<3> {
    let plane_extent = 2 * radius + 1 + 2 * margin;
    let z_extent = length + 2 * margin;
    let center = (radius + margin) as isize;
    let mut mask: BinaryMask<3> =
        BinaryMask::new([plane_extent, plane_extent, z_extent], [1.0, 1.0, 1.0], 0).unwrap();
    let radius2 = (radius * radius) as isize;
    for x in 0..plane_extent as isize {
        for y in 0..plane_extent as isize {
            let dx = x - center;
            let dy = y - center;
            if dx * dx + dy * dy <= radius2 {
                for z in margin..(margin + length) {
                    mask.set([x, y, z as isize], 1);
                }
            }
        }
    }
    mask
}

/// A solid torus (donut) lying in the xy-plane, with the given major radius
/// (center of tube to center of hole) and minor radius (tube thickness).
pub fn torus_3d(major_radius: usize, minor_radius: usize, margin: usize) -> BinaryMask<3> {
    let plane_extent = 2 * (major_radius + minor_radius) + 1 + 2 * margin;
    let z_extent = 2 * minor_radius + 1 + 2 * margin;
    let center = (major_radius + minor_radius + margin) as isize;
    let zc = (minor_radius + margin) as isize;
    let mut mask: BinaryMask<3> =
        BinaryMask::new([plane_extent, plane_extent, z_extent], [1.0, 1.0, 1.0], 0).unwrap();
    let minor2 = (minor_radius * minor_radius) as f64;
    for x in 0..plane_extent as isize {
        for y in 0..plane_extent as isize {
            let dx = (x - center) as f64;
            let dy = (y - center) as f64;
            let planar = (dx * dx + dy * dy).sqrt() - major_radius as f64;
            for z in 0..z_extent as isize {
                let dz = (z - zc) as f64;
                if planar * planar + dz * dz <= minor2 {
                    mask.set([x, y, z], 1);
                }
            }
        }
    }
    mask
}

/// A 3D "T" shape: two perpendicular solid bars of square cross-section
/// meeting at a shared junction, used to exercise curve-curve junctions and
/// AOF anchoring of the three free ends.
pub fn t_shape_3d(arm_length: usize, thickness: usize, margin: usize) -> BinaryMask<3> {
    let span = 2 * arm_length + thickness;
    let extent = span + 2 * margin;
    let mut mask: BinaryMask<3> = BinaryMask::new([extent, extent, extent], [1.0, 1.0, 1.0], 0).unwrap();
    let mid = margin + arm_length;
    // Horizontal bar along x, centered on y/z.
    for x in 0..span {
        for t0 in 0..thickness {
            for t1 in 0..thickness {
                mask.set(
                    [(x + margin) as isize, (mid + t0) as isize, (mid + t1) as isize],
                    1,
                );
            }
        }
    }
    // Vertical bar along y, from the junction to one side only (the stem of
    // the T), centered on x/z.
    for y in 0..(arm_length + thickness) {
        for t0 in 0..thickness {
            for t1 in 0..thickness {
                mask.set(
                    [(mid + t0) as isize, (y + mid) as isize, (mid + t1) as isize],
                    1,
                );
            }
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_has_expected_foreground_count() {
        let mask = filled_square_2d(7, 2);
        let count = mask.data().iter().filter(|&&v| v != 0).count();
        assert_eq!(count, 49);
    }

    #[test]
    fn ring_excludes_center() {
        let mask = hollow_ring_2d(6, 2, 2);
        let center = (6 + 2) as isize;
        assert_eq!(mask.get([center, center]), Some(&0));
    }

    #[test]
    fn cube_has_expected_foreground_count() {
        let mask = filled_cube_3d(7, 1);
        let count = mask.data().iter().filter(|&&v| v != 0).count();
        assert_eq!(count, 343);
    }
}
