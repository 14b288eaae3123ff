//! Pluggable end criteria deciding which simple voxels survive thinning.

use skel_core::error::{Error, Result};
use skel_core::image::{Image, Index};
use skel_core::types::AofImage;

use crate::strategy::Strategy;

/// Which voxels are treated as medially significant "ends" that the
/// thinning loop must not delete.
#[derive(Debug, Clone, Copy)]
pub enum EndKind {
    /// Curve tip: fewer than two foreground neighbors.
    CurveNone,
    /// Surface edge point (3D only).
    SurfaceNone,
    /// Curve tip AND average outward flux below `threshold`.
    CurveAofAnchored { threshold: f32 },
    /// Surface edge point AND average outward flux below `threshold`
    /// (3D only).
    SurfaceAofAnchored { threshold: f32 },
}

impl EndKind {
    /// The reference default anchor threshold for curve variants.
    pub const DEFAULT_CURVE_THRESHOLD: f32 = -30.0;
    /// The reference default anchor threshold for surface variants.
    pub const DEFAULT_SURFACE_THRESHOLD: f32 = 0.0;
}

/// Rejects an `(end_kind, strategy)` pairing that cannot be evaluated, e.g.
/// a surface variant paired with a 2D strategy. Call once before the
/// thinning loop starts so a bad configuration fails fast rather than
/// panicking on the first simple voxel tested.
pub fn validate<const D: usize>(kind: EndKind, strategy: &Strategy<D>) -> Result<()> {
    let needs_surface = matches!(kind, EndKind::SurfaceNone | EndKind::SurfaceAofAnchored { .. });
    if needs_surface && strategy.is_end_surface.is_none() {
        return Err(Error::InvalidParameter(
            "surface end criterion requires a 3D strategy".into(),
        ));
    }
    Ok(())
}

/// Evaluates the end criterion at `index` against the current skeleton.
///
/// Panics if `kind` requires a surface variant and `strategy` has none;
/// callers must run [`validate`] once before entering the thinning loop.
pub fn is_end<const D: usize>(
    kind: EndKind,
    strategy: &Strategy<D>,
    skeleton: &Image<f32, D>,
    index: Index<D>,
    aof: Option<&AofImage<D>>,
) -> bool {
    match kind {
        EndKind::CurveNone => (strategy.is_end_curve)(skeleton, index),
        EndKind::SurfaceNone => strategy
            .is_end_surface
            .expect("validated by `validate` before the thinning loop starts")(skeleton, index),
        EndKind::CurveAofAnchored { threshold } => {
            (strategy.is_end_curve)(skeleton, index) && below_threshold(aof, index, threshold)
        }
        EndKind::SurfaceAofAnchored { threshold } => {
            strategy
                .is_end_surface
                .expect("validated by `validate` before the thinning loop starts")(skeleton, index)
                && below_threshold(aof, index, threshold)
        }
    }
}

fn below_threshold<const D: usize>(aof: Option<&AofImage<D>>, index: Index<D>, threshold: f32) -> bool {
    match aof {
        Some(image) => image.get_or(index, f32::INFINITY) < threshold,
        None => false,
    }
}
