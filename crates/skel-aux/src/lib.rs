//! Auxiliary filters that consume a computed skeleton: local connectivity
//! (a thickness-agnostic branching measure) and map-to-boundary (transfers
//! skeleton values onto the nearest shape-boundary voxel).

pub mod kdtree;
pub mod local_connectivity;
pub mod map_to_boundary;

pub use kdtree::KdTree;
pub use local_connectivity::{local_connectivity_2d, local_connectivity_3d};
pub use map_to_boundary::{map_to_boundary_2d, map_to_boundary_3d};
