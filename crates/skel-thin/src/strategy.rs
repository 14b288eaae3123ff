//! The per-dimension strategy record that the thinning driver is generic
//! over, replacing a virtual-method filter hierarchy with a plain value.

use skel_core::image::{Image, Index};

/// Bundles the dimension-specific predicates the thinning driver needs.
/// Built once per run via [`strategy_2d`] / [`strategy_3d`]; never mutated.
#[derive(Clone, Copy)]
pub struct Strategy<const D: usize> {
    pub is_simple: fn(&Image<f32, D>, Index<D>) -> bool,
    pub is_boundary: fn(&Image<f32, D>, Index<D>) -> bool,
    pub is_end_curve: fn(&Image<f32, D>, Index<D>) -> bool,
    /// `None` in 2D, where there is no surface variant.
    pub is_end_surface: Option<fn(&Image<f32, D>, Index<D>) -> bool>,
    pub neighbors: &'static [[isize; D]],
}

pub fn strategy_2d() -> Strategy<2> {
    Strategy {
        is_simple: skel_topology::two_d::is_simple,
        is_boundary: skel_topology::two_d::is_boundary,
        is_end_curve: skel_topology::two_d::is_end_curve,
        is_end_surface: None,
        neighbors: &skel_topology::tables::NEIGHBORS8,
    }
}

pub fn strategy_3d() -> Strategy<3> {
    Strategy {
        is_simple: skel_topology::three_d::is_simple,
        is_boundary: skel_topology::three_d::is_boundary,
        is_end_curve: skel_topology::three_d::is_end_curve,
        is_end_surface: Some(skel_topology::three_d::is_end_surface),
        neighbors: &skel_topology::tables::NEIGHBORS26,
    }
}
