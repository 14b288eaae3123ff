//! The façade's single configuration struct, naming every tunable exposed
//! by the underlying engines.

use skel_thin::EndKind;

/// End-to-end pipeline configuration: pre-processing plus thinning options.
/// One typed instance per dimension, matching the monomorphized entry
/// points in [`crate::dispatch`].
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig<const D: usize> {
    pub spacing: [f64; D],
    /// Gaussian blur variance (voxel units) applied before thresholding.
    /// `None` skips smoothing entirely.
    pub smooth_variance: Option<f64>,
    pub l_threshold: f32,
    pub u_threshold: f32,
    /// Run hole filling on the binarized mask before thinning.
    pub fill_holes: bool,
    pub end_kind: EndKind,
    pub radius_weighted: bool,
    pub quick: bool,
    /// Seed for the AOF engine's direction set, when `end_kind` requires AOF.
    pub aof_seed: u64,
}

impl<const D: usize> Default for PipelineConfig<D> {
    fn default() -> Self {
        Self {
            spacing: [1.0; D],
            smooth_variance: None,
            l_threshold: 1.0,
            u_threshold: f32::INFINITY,
            fill_holes: false,
            end_kind: EndKind::CurveNone,
            radius_weighted: false,
            quick: false,
            aof_seed: 0,
        }
    }
}

impl<const D: usize> PipelineConfig<D> {
    pub fn requires_aof(&self) -> bool {
        matches!(self.end_kind, EndKind::CurveAofAnchored { .. } | EndKind::SurfaceAofAnchored { .. })
    }
}
