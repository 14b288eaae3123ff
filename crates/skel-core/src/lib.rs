//! Core data structures for the skeltools skeletonization library.
//!
//! This crate owns the dense grid container ([`Image`]), the index/offset
//! and vector types used to address and displace within it, the named type
//! aliases each pipeline stage speaks in terms of, and the shared error
//! taxonomy. It has no knowledge of topology, distance transforms, or
//! thinning; those live in their own crates.

pub mod error;
pub mod image;
pub mod types;
pub mod vector;

pub use error::{Error, Result};
pub use image::{Image, Index, Offset, add_offset};
pub use types::{AofImage, BinaryMask, BoundaryField, ConnectivityImage, DistanceMap, QueuedMask, Skeleton, SpokeField};
pub use vector::Vector;
