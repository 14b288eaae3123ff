//! Fixed neighborhood and adjacency tables used by the topological-number
//! computations. These are the digital-topology constants for 18- and
//! 26-connectivity in 3D and 8-connectivity in 2D; they never change at
//! runtime.

/// 18-neighborhood offsets in 3D (|offset|_inf = 1, excluding the 8 corners).
pub const NEIGHBORS18: [[isize; 3]; 18] = [
    [-1, -1, 0],
    [-1, 0, -1],
    [-1, 0, 0],
    [-1, 0, 1],
    [-1, 1, 0],
    [0, -1, -1],
    [0, -1, 0],
    [0, -1, 1],
    [0, 0, -1],
    [0, 0, 1],
    [0, 1, -1],
    [0, 1, 0],
    [0, 1, 1],
    [1, -1, 0],
    [1, 0, -1],
    [1, 0, 0],
    [1, 0, 1],
    [1, 1, 0],
];

/// True at the entries of [`NEIGHBORS18`] that are axis-aligned (6-connected).
pub const N6: [bool; 18] = [
    false, false, true, false, false, false, true, false, true, true, false, true, false, false,
    false, true, false, false,
];

/// Adjacency within the 18-neighborhood: `GRAPH18[i]` lists the indices of
/// entries adjacent to entry `i` inside the restricted cube, used to flood
/// fill connected components during `compute_cbar`.
pub const GRAPH18: [&[usize]; 18] = [
    &[0, 2, 6],
    &[1, 2, 8],
    &[0, 1, 2, 3, 4],
    &[2, 3, 9],
    &[2, 4, 11],
    &[5, 6, 8],
    &[0, 5, 6, 7, 13],
    &[6, 7, 9],
    &[1, 5, 8, 10, 14],
    &[3, 7, 9, 12, 16],
    &[8, 10, 11],
    &[4, 10, 11, 12, 17],
    &[9, 11, 12],
    &[6, 13, 15],
    &[8, 14, 15],
    &[13, 14, 15, 16, 17],
    &[9, 15, 16],
    &[11, 15, 17],
];

/// 26-neighborhood offsets in 3D (the full 3x3x3 cube minus the center),
/// in lexicographic order.
pub const NEIGHBORS26: [[isize; 3]; 26] = [
    [-1, -1, -1],
    [-1, -1, 0],
    [-1, -1, 1],
    [-1, 0, -1],
    [-1, 0, 0],
    [-1, 0, 1],
    [-1, 1, -1],
    [-1, 1, 0],
    [-1, 1, 1],
    [0, -1, -1],
    [0, -1, 0],
    [0, -1, 1],
    [0, 0, -1],
    [0, 0, 1],
    [0, 1, -1],
    [0, 1, 0],
    [0, 1, 1],
    [1, -1, -1],
    [1, -1, 0],
    [1, -1, 1],
    [1, 0, -1],
    [1, 0, 0],
    [1, 0, 1],
    [1, 1, -1],
    [1, 1, 0],
    [1, 1, 1],
];

/// Adjacency within the 26-neighborhood, used to flood fill connected
/// components during `compute_cstar`.
pub const GRAPH26: [&[usize]; 26] = [
    &[0, 1, 3, 4, 9, 10, 12],
    &[0, 1, 2, 3, 4, 5, 9, 10, 11, 12, 13],
    &[1, 2, 4, 5, 10, 11, 13],
    &[0, 1, 3, 4, 6, 7, 9, 10, 12, 14, 15],
    &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16],
    &[1, 2, 4, 5, 7, 8, 10, 11, 13, 15, 16],
    &[3, 4, 6, 7, 12, 14, 15],
    &[3, 4, 5, 6, 7, 8, 12, 13, 14, 15, 16],
    &[4, 5, 7, 8, 13, 15, 16],
    &[0, 1, 3, 4, 9, 10, 12, 17, 18, 20, 21],
    &[0, 1, 2, 3, 4, 5, 9, 10, 11, 12, 13, 17, 18, 19, 20, 21, 22],
    &[1, 2, 4, 5, 10, 11, 13, 18, 19, 21, 22],
    &[0, 1, 3, 4, 6, 7, 9, 10, 12, 14, 15, 17, 18, 20, 21, 23, 24],
    &[1, 2, 4, 5, 7, 8, 10, 11, 13, 15, 16, 18, 19, 21, 22, 24, 25],
    &[3, 4, 6, 7, 12, 14, 15, 20, 21, 23, 24],
    &[3, 4, 5, 6, 7, 8, 12, 13, 14, 15, 16, 20, 21, 22, 23, 24, 25],
    &[4, 5, 7, 8, 13, 15, 16, 21, 22, 24, 25],
    &[9, 10, 12, 17, 18, 20, 21],
    &[9, 10, 11, 12, 13, 17, 18, 19, 20, 21, 22],
    &[10, 11, 13, 18, 19, 21, 22],
    &[9, 10, 12, 14, 15, 17, 18, 20, 21, 23, 24],
    &[9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25],
    &[10, 11, 13, 15, 16, 18, 19, 21, 22, 24, 25],
    &[12, 14, 15, 20, 21, 23, 24],
    &[12, 13, 14, 15, 16, 20, 21, 22, 23, 24, 25],
    &[13, 15, 16, 21, 22, 24, 25],
];

/// 8-neighborhood in 2D, in clockwise order starting at (-1,-1). Does not
/// include the center.
pub const NEIGHBORS8: [[isize; 2]; 8] = [
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, 1],
    [1, 1],
    [1, 0],
    [1, -1],
    [0, -1],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn n6_marks_exactly_six_axis_aligned_entries() {
        assert_eq!(N6.iter().filter(|&&b| b).count(), 6);
        for (i, &flag) in N6.iter().enumerate() {
            let offset = NEIGHBORS18[i];
            let axis_aligned = offset.iter().filter(|&&c| c != 0).count() == 1;
            assert_eq!(flag, axis_aligned, "index {i}");
        }
    }

    #[test]
    fn graph26_is_symmetric() {
        for (i, neighbors) in GRAPH26.iter().enumerate() {
            for &j in *neighbors {
                assert!(GRAPH26[j].contains(&i), "edge {i}-{j} not symmetric");
            }
        }
    }

    #[test]
    fn graph18_is_symmetric() {
        for (i, neighbors) in GRAPH18.iter().enumerate() {
            for &j in *neighbors {
                assert!(GRAPH18[j].contains(&i), "edge {i}-{j} not symmetric");
            }
        }
    }
}
