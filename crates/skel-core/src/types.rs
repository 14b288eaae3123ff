//! Named type aliases for the images that flow through the pipeline.
//!
//! These are thin aliases over [`crate::image::Image`]; they exist so each
//! crate's public API reads in terms of its domain role (distance map,
//! spoke field, skeleton, ...) rather than a bare `Image<T, D>`.

use crate::image::Image;
use crate::vector::Vector;

/// A binary mask: 0 = background, non-zero = foreground.
pub type BinaryMask<const D: usize> = Image<u8, D>;

/// A signed distance map; positive values are interior to the shape.
pub type DistanceMap<const D: usize> = Image<f32, D>;

/// Per-voxel offset to the nearest boundary voxel; zero near/outside the
/// boundary (see [`skel_distance`] for the exact depth rule).
pub type SpokeField<const D: usize> = Image<Vector<D>, D>;

/// Average outward flux; negative values concentrate on medial voxels.
pub type AofImage<const D: usize> = Image<f32, D>;

/// The thinning result. Foreground voxels are non-zero; when
/// radius-weighting is enabled, survivors retain their seeded distance
/// value instead of a flat 1.0.
pub type Skeleton<const D: usize> = Image<f32, D>;

/// Scratch image tracking priority-queue membership during thinning.
pub type QueuedMask<const D: usize> = Image<u8, D>;

/// Output of the local-connectivity auxiliary filter.
pub type ConnectivityImage<const D: usize> = Image<u32, D>;

/// Output of the map-to-boundary auxiliary filter: skeleton values
/// transferred onto the nearest shape boundary voxel.
pub type BoundaryField<const D: usize> = Image<f32, D>;
