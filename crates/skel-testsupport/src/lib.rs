//! Synthetic shape generators shared by the skeltools test suites.
//!
//! Kept separate from the core crates (rather than behind a `cfg(test)`
//! feature) so integration tests in every downstream crate can depend on it
//! as an ordinary dev-dependency, mirroring how the regression tests share
//! fixtures across the workspace.

pub mod shapes;

pub use shapes::{cylinder_3d, filled_cube_3d, filled_square_2d, hollow_ring_2d, t_shape_3d, torus_3d};
