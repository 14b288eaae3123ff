//! Pre-processing glue: Gaussian smoothing, interval thresholding and hole
//! filling. The engine crates only consume a binary mask; turning a raw
//! grayscale volume into one is ordinary image processing that doesn't
//! belong in the topology-aware core, so it lives here instead, next to
//! the façade that actually wants an end-to-end entry point.

use std::collections::VecDeque;

use skel_core::image::{add_offset, Image, Index};
use skel_core::types::BinaryMask;

/// Face-connected (4-neighbor) background offsets in 2D, used by
/// [`fill_holes`] to match the face-connectivity convention background
/// components use elsewhere in this library.
const FACE_NEIGHBORS_2D: [[isize; 2]; 4] = [[-1, 0], [1, 0], [0, -1], [0, 1]];

/// Face-connected (6-neighbor) background offsets in 3D.
const FACE_NEIGHBORS_3D: [[isize; 3]; 6] = [
    [-1, 0, 0],
    [1, 0, 0],
    [0, -1, 0],
    [0, 1, 0],
    [0, 0, -1],
    [0, 0, 1],
];

fn gaussian_kernel(variance: f64) -> Vec<f64> {
    let sigma = variance.max(0.0).sqrt();
    if sigma <= 0.0 {
        return vec![1.0];
    }
    let radius = (3.0 * sigma).ceil().max(1.0) as i64;
    let mut kernel: Vec<f64> = (-radius..=radius)
        .map(|i| {
            let x = i as f64;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f64 = kernel.iter().sum();
    for weight in &mut kernel {
        *weight /= sum;
    }
    kernel
}

fn blur_axis<const D: usize>(image: &Image<f32, D>, axis: usize, kernel: &[f64]) -> Image<f32, D> {
    let radius = (kernel.len() / 2) as isize;
    let size = image.size();
    let mut out: Image<f32, D> = Image::new(size, image.spacing(), 0.0).expect("geometry preserved from source image");

    for index in image.indices() {
        let mut acc = 0.0f64;
        for (k, &weight) in kernel.iter().enumerate() {
            let offset_along_axis = k as isize - radius;
            let mut offset: Index<D> = [0; D];
            offset[axis] = offset_along_axis;
            let clamped = clamp_to_bounds(add_offset(index, offset), size);
            acc += weight * image.get_or(clamped, 0.0) as f64;
        }
        out.set(index, acc as f32);
    }
    out
}

fn clamp_to_bounds<const D: usize>(index: Index<D>, size: [usize; D]) -> Index<D> {
    let mut out = [0isize; D];
    for d in 0..D {
        out[d] = index[d].clamp(0, size[d] as isize - 1);
    }
    out
}

/// Separable discrete Gaussian blur with variance specified in voxel units
/// (not scaled by physical spacing).
pub fn gaussian_smooth<const D: usize>(image: &Image<f32, D>, variance: f64) -> Image<f32, D> {
    let kernel = gaussian_kernel(variance);
    let mut current = image.clone();
    for axis in 0..D {
        current = blur_axis(&current, axis, &kernel);
    }
    current
}

/// Binarizes `image` to a mask whose foreground is `lower <= value <= upper`.
pub fn threshold<const D: usize>(image: &Image<f32, D>, lower: f32, upper: f32) -> BinaryMask<D> {
    let mut mask: BinaryMask<D> = Image::new(image.size(), image.spacing(), 0).expect("geometry preserved from source image");
    for index in image.indices() {
        let value = image.get_or(index, 0.0);
        if value >= lower && value <= upper {
            mask.set(index, 1);
        }
    }
    mask
}

fn fill_holes<const D: usize>(mask: &BinaryMask<D>, neighbors: &[[isize; D]]) -> BinaryMask<D> {
    let size = mask.size();
    let mut reachable: BinaryMask<D> = Image::new(size, mask.spacing(), 0).expect("geometry preserved from source mask");
    let mut queue: VecDeque<Index<D>> = VecDeque::new();

    for index in mask.indices() {
        if mask.get_or(index, 0) != 0 {
            continue;
        }
        let on_border = (0..D).any(|d| index[d] == 0 || index[d] as usize == size[d] - 1);
        if on_border && reachable.get_or(index, 0) == 0 {
            reachable.set(index, 1);
            queue.push_back(index);
        }
    }

    while let Some(p) = queue.pop_front() {
        for &offset in neighbors {
            let q = add_offset(p, offset);
            if mask.get_or(q, 1) == 0 && reachable.get_or(q, 1) == 0 {
                reachable.set(q, 1);
                queue.push_back(q);
            }
        }
    }

    let mut out: BinaryMask<D> = Image::new(size, mask.spacing(), 0).expect("geometry preserved from source mask");
    for index in mask.indices() {
        let is_foreground = mask.get_or(index, 0) != 0;
        let is_enclosed_background = !is_foreground && reachable.get_or(index, 1) == 0;
        if is_foreground || is_enclosed_background {
            out.set(index, 1);
        }
    }
    out
}

/// Fills background holes not connected to the image border, in 2D.
pub fn fill_holes_2d(mask: &BinaryMask<2>) -> BinaryMask<2> {
    fill_holes(mask, &FACE_NEIGHBORS_2D)
}

/// Fills background holes not connected to the image border, in 3D.
pub fn fill_holes_3d(mask: &BinaryMask<3>) -> BinaryMask<3> {
    fill_holes(mask, &FACE_NEIGHBORS_3D)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaussian_smooth_preserves_a_flat_field() {
        let image: Image<f32, 2> = Image::new([9, 9], [1.0, 1.0], 4.0).unwrap();
        let smoothed = gaussian_smooth(&image, 2.0);
        for index in smoothed.indices() {
            assert!((smoothed.get_or(index, 0.0) - 4.0).abs() < 1e-4);
        }
    }

    #[test]
    fn threshold_keeps_only_values_in_range() {
        let mut image: Image<f32, 2> = Image::new([3, 1], [1.0, 1.0], 0.0).unwrap();
        image.set([0, 0], 1.0);
        image.set([1, 0], 5.0);
        image.set([2, 0], 10.0);
        let mask = threshold(&image, 4.0, 9.0);
        assert_eq!(mask.get_or([0, 0], 9), 0);
        assert_eq!(mask.get_or([1, 0], 9), 1);
        assert_eq!(mask.get_or([2, 0], 9), 0);
    }

    #[test]
    fn fill_holes_closes_an_enclosed_background_pocket() {
        let mut mask: BinaryMask<2> = Image::new([5, 5], [1.0, 1.0], 1).unwrap();
        mask.set([2, 2], 0);
        let filled = fill_holes_2d(&mask);
        assert_eq!(filled.get_or([2, 2], 0), 1);
    }

    #[test]
    fn fill_holes_leaves_border_connected_background_alone() {
        let mut mask: BinaryMask<2> = Image::new([5, 5], [1.0, 1.0], 0).unwrap();
        for x in 1..4 {
            for y in 1..4 {
                mask.set([x, y], 1);
            }
        }
        let filled = fill_holes_2d(&mask);
        assert_eq!(filled.get_or([0, 0], 9), 0);
    }
}
