//! Digital-topology predicates: the topological numbers C̄/C*, the voxel
//! classification table derived from them, and the simple/end/boundary
//! point tests that the thinning core drives off of.
//!
//! 3D predicates live in [`three_d`], 2D predicates (which use a direct
//! edge/corner counting formula rather than C̄/C*) live in [`two_d`].

pub mod label;
pub mod tables;
pub mod three_d;
pub mod two_d;

pub use label::{topological_label, ObjectPointType};
