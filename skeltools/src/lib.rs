//! Distance-ordered topological thinning for 2D/3D binary images.
//!
//! This crate is the façade over the engine crates: it binds caller-facing
//! configuration ([`PipelineConfig`]) to a concrete skeletonization engine
//! and end criterion, and supplies the grayscale pre-processing glue
//! ([`preprocess`]) so a caller can go from a raw image straight to a
//! skeleton without pulling in a separate image-processing dependency.
//!
//! The underlying building blocks — topology predicates, the distance/spoke
//! transform, the AOF engine, and the two thinning engines — are
//! re-exported from their own crates for callers who want to assemble a
//! custom pipeline instead of using [`skeletonize_from_grayscale_2d`] /
//! `_3d`.

pub mod dispatch;
pub mod options;
pub mod preprocess;

pub use dispatch::{skeletonize_from_grayscale_2d, skeletonize_from_grayscale_3d};
pub use options::PipelineConfig;

pub use skel_aof::compute_aof;
pub use skel_aux::{local_connectivity_2d, local_connectivity_3d, map_to_boundary_2d, map_to_boundary_3d};
pub use skel_core::error::{Error, Result};
pub use skel_core::image::Image;
pub use skel_core::types::{
    AofImage, BinaryMask, BoundaryField, ConnectivityImage, DistanceMap, Skeleton, SpokeField,
};
pub use skel_distance::{build_distance_and_spokes_2d, build_distance_and_spokes_3d};
pub use skel_topology::{topological_label, ObjectPointType};
pub use skel_thin::{
    skeletonize_2d, skeletonize_3d, thin_homotopic_2d, thin_homotopic_3d, EndKind, HomotopicOptions,
    SkeletonizeOptions, SkeletonizeOutcome,
};
