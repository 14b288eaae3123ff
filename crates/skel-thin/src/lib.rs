//! Priority-queue-driven thinning: the central skeletonization algorithm.
//!
//! Two concrete shapes are provided: [`homotopic::thin_homotopic_2d`] /
//! `_3d` (a static heap with no re-insertion, stopping at a maximum
//! distance) and [`ordered::skeletonize_2d`] / `_3d` (seeds boundary+simple
//! voxels, re-queues simple foreground neighbors on each deletion, and
//! dispatches to a pluggable end criterion — see [`end_criteria`]).

pub mod end_criteria;
pub mod heap;
pub mod homotopic;
pub mod ordered;
pub mod strategy;

pub use end_criteria::EndKind;
pub use homotopic::{thin_homotopic_2d, thin_homotopic_3d, HomotopicOptions};
pub use ordered::{skeletonize_2d, skeletonize_3d, SkeletonizeOptions, SkeletonizeOutcome};
pub use strategy::{strategy_2d, strategy_3d, Strategy};
