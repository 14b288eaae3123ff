//! Signed distance transform and spoke (nearest-boundary-offset) field
//! construction, feeding both the thinning core's priority image and the
//! AOF engine.

pub mod transform;

pub use transform::{build_distance_and_spokes_2d, build_distance_and_spokes_3d};
