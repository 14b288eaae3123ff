//! Ordered skeletonization with re-insertion: the generalized engine behind
//! medial-curve, medial-surface, and AOF-anchored variants.

use skel_core::error::Result;
use skel_core::image::{add_offset, Image};
use skel_core::types::{AofImage, BinaryMask, DistanceMap, QueuedMask, Skeleton};

use crate::end_criteria::{is_end, EndKind};
use crate::heap::MinHeap;
use crate::strategy::{strategy_2d, strategy_3d, Strategy};

/// Tunables for [`skeletonize_2d`] / [`skeletonize_3d`].
pub struct SkeletonizeOptions<'a, const D: usize> {
    /// Priority image (typically the unsigned distance transform). If
    /// absent, the caller's distance map is computed by the wrapper and
    /// used directly.
    pub priority: Option<&'a DistanceMap<D>>,
    pub end_kind: EndKind,
    pub aof: Option<&'a AofImage<D>>,
    /// Seed survivors with their distance value rather than a flat 1.0.
    pub radius_weighted: bool,
    /// Restrict the initial seed set to voxels with AOF < 0 (only
    /// meaningful for AOF-anchored variants).
    pub quick: bool,
}

impl<'a, const D: usize> Default for SkeletonizeOptions<'a, D> {
    fn default() -> Self {
        Self {
            priority: None,
            end_kind: EndKind::CurveNone,
            aof: None,
            radius_weighted: false,
            quick: false,
        }
    }
}

/// Whether a run completed or was cooperatively cancelled partway through.
/// Either way the caller gets back a valid, topology-consistent skeleton —
/// cancellation never discards the partial result.
#[derive(Debug, Clone)]
pub enum SkeletonizeOutcome<const D: usize> {
    Completed(Skeleton<D>),
    Cancelled(Skeleton<D>),
}

impl<const D: usize> SkeletonizeOutcome<D> {
    pub fn into_skeleton(self) -> Skeleton<D> {
        match self {
            SkeletonizeOutcome::Completed(s) | SkeletonizeOutcome::Cancelled(s) => s,
        }
    }
}

fn skeletonize_core<const D: usize>(
    binary: &BinaryMask<D>,
    priority: &DistanceMap<D>,
    strategy: &Strategy<D>,
    options: &SkeletonizeOptions<D>,
    mut cancel: impl FnMut() -> bool,
) -> Result<SkeletonizeOutcome<D>> {
    crate::end_criteria::validate(options.end_kind, strategy)?;

    let size = binary.size();
    let mut skeleton: Skeleton<D> = Image::new(size, binary.spacing(), 0.0)?;
    let quick_anchored = options.quick
        && matches!(
            options.end_kind,
            EndKind::CurveAofAnchored { .. } | EndKind::SurfaceAofAnchored { .. }
        );

    for index in binary.indices() {
        if binary.get_or(index, 0) == 0 {
            continue;
        }
        if quick_anchored {
            let aof_value = options.aof.map(|a| a.get_or(index, f32::INFINITY)).unwrap_or(f32::INFINITY);
            if !(aof_value < 0.0) {
                continue;
            }
        }
        let value = if options.radius_weighted { priority.get_or(index, 0.0) } else { 1.0 };
        skeleton.set(index, value);
    }

    let mut queued: QueuedMask<D> = Image::new(size, binary.spacing(), 0)?;
    let mut heap: MinHeap<D> = MinHeap::new();
    for index in skeleton.indices() {
        if skeleton.get_or(index, 0.0) <= 0.0 {
            continue;
        }
        if (strategy.is_boundary)(&skeleton, index) && (strategy.is_simple)(&skeleton, index) {
            heap.push(index, priority.get_or(index, 0.0));
            queued.set(index, 1);
        }
    }

    while !heap.is_empty() {
        if cancel() {
            return Ok(SkeletonizeOutcome::Cancelled(skeleton));
        }
        let (p, _priority) = heap.pop().expect("heap non-empty");
        queued.set(p, 0);

        if !(strategy.is_simple)(&skeleton, p) {
            continue;
        }
        if is_end(options.end_kind, strategy, &skeleton, p, options.aof) {
            continue;
        }

        skeleton.set(p, 0.0);
        for &offset in strategy.neighbors {
            let q = add_offset(p, offset);
            if skeleton.get_or(q, 0.0) <= 0.0 {
                continue;
            }
            if queued.get_or(q, 0) != 0 {
                continue;
            }
            if (strategy.is_simple)(&skeleton, q) {
                heap.push(q, priority.get_or(q, 0.0));
                queued.set(q, 1);
            }
        }
    }

    Ok(SkeletonizeOutcome::Completed(skeleton))
}

/// Ordered skeletonization of a 2D binary mask.
pub fn skeletonize_2d(
    binary: &BinaryMask<2>,
    spacing: [f64; 2],
    options: &SkeletonizeOptions<2>,
    cancel: impl FnMut() -> bool,
) -> Result<SkeletonizeOutcome<2>> {
    let owned_priority;
    let priority = match options.priority {
        Some(p) => p,
        None => {
            let (distance, _spokes) = skel_distance::build_distance_and_spokes_2d(binary, spacing)?;
            owned_priority = distance;
            &owned_priority
        }
    };
    skeletonize_core(binary, priority, &strategy_2d(), options, cancel)
}

/// Ordered skeletonization of a 3D binary mask.
pub fn skeletonize_3d(
    binary: &BinaryMask<3>,
    spacing: [f64; 3],
    options: &SkeletonizeOptions<3>,
    cancel: impl FnMut() -> bool,
) -> Result<SkeletonizeOutcome<3>> {
    let owned_priority;
    let priority = match options.priority {
        Some(p) => p,
        None => {
            let (distance, _spokes) = skel_distance::build_distance_and_spokes_3d(binary, spacing)?;
            owned_priority = distance;
            &owned_priority
        }
    };
    skeletonize_core(binary, priority, &strategy_3d(), options, cancel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skel_testsupport::{filled_cube_3d, filled_square_2d, hollow_ring_2d};

    #[test]
    fn curve_skeleton_of_filled_square_is_a_strict_subset() {
        let mask = filled_square_2d(7, 2);
        let options = SkeletonizeOptions::default();
        let outcome = skeletonize_2d(&mask, [1.0, 1.0], &options, || false).unwrap();
        let skeleton = outcome.into_skeleton();
        for index in mask.indices() {
            if skeleton.get_or(index, 0.0) > 0.0 {
                assert!(mask.get_or(index, 0) != 0);
            }
        }
        let remaining = skeleton.data().iter().filter(|&&v| v > 0.0).count();
        assert!(remaining >= 1);
    }

    #[test]
    fn curve_skeleton_of_ring_keeps_the_loop_connected() {
        let mask = hollow_ring_2d(6, 2, 2);
        let options = SkeletonizeOptions::default();
        let outcome = skeletonize_2d(&mask, [1.0, 1.0], &options, || false).unwrap();
        let skeleton = outcome.into_skeleton();
        let remaining = skeleton.data().iter().filter(|&&v| v > 0.0).count();
        assert!(remaining > 4);
    }

    #[test]
    fn idempotent_on_its_own_output() {
        let mask = filled_cube_3d(7, 1);
        let options = SkeletonizeOptions::default();
        let first = skeletonize_3d(&mask, [1.0, 1.0, 1.0], &options, || false)
            .unwrap()
            .into_skeleton();
        let mut as_mask: BinaryMask<3> = BinaryMask::new(first.size(), first.spacing(), 0).unwrap();
        for index in first.indices() {
            if first.get_or(index, 0.0) > 0.0 {
                as_mask.set(index, 1);
            }
        }
        let second = skeletonize_3d(&as_mask, [1.0, 1.0, 1.0], &options, || false)
            .unwrap()
            .into_skeleton();
        let first_count = first.data().iter().filter(|&&v| v > 0.0).count();
        let second_count = second.data().iter().filter(|&&v| v > 0.0).count();
        assert_eq!(first_count, second_count);
    }

    #[test]
    fn cancellation_returns_a_valid_partial_skeleton() {
        let mask = filled_cube_3d(7, 1);
        let options = SkeletonizeOptions::default();
        let mut calls = 0;
        let outcome = skeletonize_3d(&mask, [1.0, 1.0, 1.0], &options, || {
            calls += 1;
            calls > 3
        })
        .unwrap();
        assert!(matches!(outcome, SkeletonizeOutcome::Cancelled(_)));
        let skeleton = outcome.into_skeleton();
        for index in mask.indices() {
            if skeleton.get_or(index, 0.0) > 0.0 {
                assert!(mask.get_or(index, 0) != 0);
            }
        }
    }

    #[test]
    fn surface_end_kind_on_a_2d_mask_is_a_invalid_parameter_error_not_a_panic() {
        let mask = filled_square_2d(7, 2);
        let options = SkeletonizeOptions {
            end_kind: EndKind::SurfaceNone,
            ..SkeletonizeOptions::default()
        };
        let result = skeletonize_2d(&mask, [1.0, 1.0], &options, || false);
        assert!(matches!(result, Err(skel_core::error::Error::InvalidParameter(_))));
    }
}
