//! Average outward flux (AOF) engine.
//!
//! Consumes a spoke field and produces a scalar image whose negative values
//! concentrate on medial voxels, used by the anchored end criteria in
//! `skel-thin`.

pub mod directions;
pub mod flux;

pub use flux::compute_aof;
