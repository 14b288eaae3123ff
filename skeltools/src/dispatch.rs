//! One typed end-to-end entry point per dimension: grayscale in, skeleton
//! out, binding the pre-processing helpers (`crate::preprocess`) and the
//! thinning engines (`skel_thin`) behind a single call.

use skel_core::error::Result;
use skel_core::image::Image;
use skel_core::types::BinaryMask;
use skel_thin::{skeletonize_2d, skeletonize_3d, SkeletonizeOptions, SkeletonizeOutcome};

use crate::options::PipelineConfig;
use crate::preprocess::{fill_holes_2d, fill_holes_3d, gaussian_smooth, threshold};

fn binarize<const D: usize>(image: &Image<f32, D>, config: &PipelineConfig<D>) -> Image<f32, D> {
    match config.smooth_variance {
        Some(variance) => gaussian_smooth(image, variance),
        None => image.clone(),
    }
}

/// Runs the full grayscale-to-skeleton pipeline on a 2D image: optional
/// smoothing, interval thresholding, optional hole filling, then ordered
/// skeletonization.
pub fn skeletonize_from_grayscale_2d(
    image: &Image<f32, 2>,
    config: &PipelineConfig<2>,
) -> Result<SkeletonizeOutcome<2>> {
    let smoothed = binarize(image, config);
    let mut mask: BinaryMask<2> = threshold(&smoothed, config.l_threshold, config.u_threshold);
    if config.fill_holes {
        mask = fill_holes_2d(&mask);
    }

    let aof_image;
    let aof = if config.requires_aof() {
        let (_distance, spokes) = skel_distance::build_distance_and_spokes_2d(&mask, config.spacing)?;
        aof_image = skel_aof::compute_aof(&spokes, config.aof_seed, None)?;
        Some(&aof_image)
    } else {
        None
    };

    let options = SkeletonizeOptions {
        priority: None,
        end_kind: config.end_kind,
        aof,
        radius_weighted: config.radius_weighted,
        quick: config.quick,
    };
    skeletonize_2d(&mask, config.spacing, &options, || false)
}

/// Runs the full grayscale-to-skeleton pipeline on a 3D image.
pub fn skeletonize_from_grayscale_3d(
    image: &Image<f32, 3>,
    config: &PipelineConfig<3>,
) -> Result<SkeletonizeOutcome<3>> {
    let smoothed = binarize(image, config);
    let mut mask: BinaryMask<3> = threshold(&smoothed, config.l_threshold, config.u_threshold);
    if config.fill_holes {
        mask = fill_holes_3d(&mask);
    }

    let aof_image;
    let aof = if config.requires_aof() {
        let (_distance, spokes) = skel_distance::build_distance_and_spokes_3d(&mask, config.spacing)?;
        aof_image = skel_aof::compute_aof(&spokes, config.aof_seed, None)?;
        Some(&aof_image)
    } else {
        None
    };

    let options = SkeletonizeOptions {
        priority: None,
        end_kind: config.end_kind,
        aof,
        radius_weighted: config.radius_weighted,
        quick: config.quick,
    };
    skeletonize_3d(&mask, config.spacing, &options, || false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skel_core::types::BinaryMask;

    fn square_image() -> Image<f32, 2> {
        let mut mask: BinaryMask<2> = Image::new([9, 9], [1.0, 1.0], 0).unwrap();
        for x in 1..8 {
            for y in 1..8 {
                mask.set([x, y], 1);
            }
        }
        let mut image: Image<f32, 2> = Image::new([9, 9], [1.0, 1.0], 0.0).unwrap();
        for index in mask.indices() {
            if mask.get_or(index, 0) != 0 {
                image.set(index, 255.0);
            }
        }
        image
    }

    #[test]
    fn end_to_end_pipeline_produces_a_nonempty_curve_skeleton() {
        let image = square_image();
        let config = PipelineConfig {
            l_threshold: 200.0,
            u_threshold: 300.0,
            ..PipelineConfig::default()
        };
        let outcome = skeletonize_from_grayscale_2d(&image, &config).unwrap();
        let skeleton = outcome.into_skeleton();
        let remaining = skeleton.data().iter().filter(|&&v| v > 0.0).count();
        assert!(remaining >= 1);
        assert!(remaining < 7 * 7);
    }

    #[test]
    fn smoothing_and_hole_filling_do_not_crash_the_pipeline() {
        let image = square_image();
        let config = PipelineConfig {
            l_threshold: 200.0,
            u_threshold: 300.0,
            smooth_variance: Some(1.0),
            fill_holes: true,
            ..PipelineConfig::default()
        };
        let outcome = skeletonize_from_grayscale_2d(&image, &config).unwrap();
        let skeleton = outcome.into_skeleton();
        assert!(skeleton.data().iter().any(|&v| v >= 0.0));
    }
}
