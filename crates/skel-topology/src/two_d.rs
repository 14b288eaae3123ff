//! 2D digital-topology predicates. 2D has no analogue of C̄/C*; simplicity
//! is decided directly from the clockwise 8-neighborhood via an
//! edge/corner-counting formula.

use skel_core::image::{add_offset, Image, Index};

use crate::tables::NEIGHBORS8;

fn foreground(image: &Image<f32, 2>, index: Index<2>) -> bool {
    image.get_or(index, 0.0) > 0.0
}

/// A voxel is simple in 2D iff `num_neighbors - num_edges == 1`, where
/// `num_neighbors` counts (half-weighted) adjacent clockwise foreground
/// pairs and `num_edges` additionally credits corners whose two
/// side-neighbors are foreground but the corner itself is background.
pub fn is_simple(image: &Image<f32, 2>, index: Index<2>) -> bool {
    let nbrs: [bool; 8] = std::array::from_fn(|i| foreground(image, add_offset(index, NEIGHBORS8[i])));

    let mut num_neighbors = 0i32;
    let mut num_edges = 0i32;
    for i in 0..8 {
        let j = (i + 1) % 8;
        if nbrs[i] && nbrs[j] {
            num_neighbors += 2;
            num_edges += 1;
        } else if nbrs[i] || nbrs[j] {
            num_neighbors += 1;
        }
    }
    num_neighbors /= 2;

    for i in (0..8).step_by(2) {
        let prev = nbrs[(i + 7) % 8];
        let corner = nbrs[i];
        let next = nbrs[(i + 1) % 8];
        if prev && !corner && next {
            num_edges += 1;
        }
    }

    num_neighbors - num_edges == 1
}

/// True iff `index` is foreground and at least one 8-neighbor is background.
pub fn is_boundary(image: &Image<f32, 2>, index: Index<2>) -> bool {
    if !foreground(image, index) {
        return false;
    }
    NEIGHBORS8
        .iter()
        .any(|&offset| !foreground(image, add_offset(index, offset)))
}

/// A curve tip: fewer than two foreground 8-neighbors.
pub fn is_end_curve(image: &Image<f32, 2>, index: Index<2>) -> bool {
    let count = NEIGHBORS8
        .iter()
        .filter(|&&offset| foreground(image, add_offset(index, offset)))
        .count();
    count < 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use skel_core::image::Image;

    fn filled_square(side: isize) -> Image<f32, 2> {
        let extent = (side + 4) as usize;
        let mut img: Image<f32, 2> = Image::new([extent, extent], [1.0, 1.0], 0.0).unwrap();
        for x in 0..side {
            for y in 0..side {
                img.set([x + 2, y + 2], 1.0);
            }
        }
        img
    }

    #[test]
    fn interior_of_filled_square_not_simple() {
        let img = filled_square(7);
        assert!(!is_simple(&img, [5, 5]));
    }

    #[test]
    fn boundary_voxel_of_square_is_simple() {
        let img = filled_square(7);
        // top-left corner of the 7x7 block, offset by margin 2.
        assert!(is_simple(&img, [2, 2]));
    }

    #[test]
    fn isolated_pixel_is_not_simple() {
        let mut img: Image<f32, 2> = Image::new([5, 5], [1.0, 1.0], 0.0).unwrap();
        img.set([2, 2], 1.0);
        assert!(!is_simple(&img, [2, 2]));
    }

    #[test]
    fn single_pixel_has_no_foreground_neighbors_and_is_a_curve_end() {
        let mut img: Image<f32, 2> = Image::new([5, 5], [1.0, 1.0], 0.0).unwrap();
        img.set([2, 2], 1.0);
        assert!(is_end_curve(&img, [2, 2]));
    }
}
