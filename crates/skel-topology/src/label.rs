//! Classification of a voxel from its topological numbers.

/// The classification of a foreground voxel derived from its topological
/// numbers C̄ and C*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectPointType {
    Interior,
    Isolated,
    Simple,
    Curve,
    CurveCurveJunction,
    Surface,
    CurveSurfaceJunction,
    SurfaceSurfaceJunction,
    SurfaceCurveJunction,
    Other,
}

/// Classifies a voxel given its background-component count (`cbar`, over
/// the 18-neighborhood restricted to 6-connectivity) and its
/// foreground-component count (`cstar`, over the 26-neighborhood).
pub fn topological_label(cbar: u32, cstar: u32) -> ObjectPointType {
    use ObjectPointType::*;
    if cbar == 0 {
        Interior
    } else if cstar == 0 {
        Isolated
    } else if cbar == 1 && cstar == 1 {
        Simple
    } else if cbar == 1 && cstar == 2 {
        Curve
    } else if cbar == 1 && cstar > 2 {
        CurveCurveJunction
    } else if cbar == 2 && cstar == 1 {
        Surface
    } else if cbar == 2 && cstar >= 2 {
        CurveSurfaceJunction
    } else if cbar > 2 && cstar == 1 {
        SurfaceSurfaceJunction
    } else if cbar > 2 && cstar >= 2 {
        SurfaceCurveJunction
    } else {
        Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_simple() {
        assert_eq!(topological_label(1, 1), ObjectPointType::Simple);
    }

    #[test]
    fn classifies_interior_regardless_of_cstar() {
        assert_eq!(topological_label(0, 5), ObjectPointType::Interior);
    }

    #[test]
    fn classifies_isolated() {
        assert_eq!(topological_label(3, 0), ObjectPointType::Isolated);
    }
}
