//! A minimal bucket k-d tree over physical coordinates, used by
//! `map_to_boundary` for nearest-neighbor lookup. No external spatial-index
//! crate is used anywhere in this codebase, so this is hand-rolled rather
//! than reaching for one just for this single call site.

const BUCKET_SIZE: usize = 16;

#[derive(Debug, Clone, Copy)]
struct Point<const D: usize> {
    coords: [f64; D],
    value: f32,
}

enum Node<const D: usize> {
    Leaf(Vec<Point<D>>),
    Split {
        axis: usize,
        threshold: f64,
        left: Box<Node<D>>,
        right: Box<Node<D>>,
    },
}

/// A k-d tree over a fixed set of `(coordinates, value)` pairs, supporting
/// nearest-neighbor queries.
pub struct KdTree<const D: usize> {
    root: Option<Node<D>>,
}

impl<const D: usize> KdTree<D> {
    pub fn build(points: Vec<([f64; D], f32)>) -> Self {
        let points: Vec<Point<D>> = points.into_iter().map(|(coords, value)| Point { coords, value }).collect();
        Self { root: if points.is_empty() { None } else { Some(build_node(points, 0)) } }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the value of the nearest point to `target`, or `None` if the
    /// tree is empty.
    pub fn nearest(&self, target: [f64; D]) -> Option<f32> {
        let root = self.root.as_ref()?;
        let mut best: Option<(f32, f64)> = None;
        search(root, target, &mut best);
        best.map(|(value, _)| value)
    }
}

fn build_node<const D: usize>(mut points: Vec<Point<D>>, depth: usize) -> Node<D> {
    if points.len() <= BUCKET_SIZE {
        return Node::Leaf(points);
    }
    let axis = depth % D;
    points.sort_by(|a, b| a.coords[axis].partial_cmp(&b.coords[axis]).unwrap());
    let mid = points.len() / 2;
    let threshold = points[mid].coords[axis];
    let right_points = points.split_off(mid);
    let left_points = points;
    Node::Split {
        axis,
        threshold,
        left: Box::new(build_node(left_points, depth + 1)),
        right: Box::new(build_node(right_points, depth + 1)),
    }
}

fn squared_distance<const D: usize>(a: [f64; D], b: [f64; D]) -> f64 {
    let mut sum = 0.0;
    for d in 0..D {
        let diff = a[d] - b[d];
        sum += diff * diff;
    }
    sum
}

fn search<const D: usize>(node: &Node<D>, target: [f64; D], best: &mut Option<(f32, f64)>) {
    match node {
        Node::Leaf(points) => {
            for p in points {
                let d2 = squared_distance(p.coords, target);
                if best.is_none_or(|(_, bd)| d2 < bd) {
                    *best = Some((p.value, d2));
                }
            }
        }
        Node::Split { axis, threshold, left, right } => {
            let diff = target[*axis] - threshold;
            let (near, far) = if diff <= 0.0 { (left, right) } else { (right, left) };
            search(near, target, best);
            if best.is_none_or(|(_, bd)| diff * diff < bd) {
                search(far, target, best);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_exact_match() {
        let tree: KdTree<2> = KdTree::build(vec![([0.0, 0.0], 1.0), ([5.0, 5.0], 2.0), ([1.0, 1.0], 3.0)]);
        assert_eq!(tree.nearest([1.0, 1.0]), Some(3.0));
    }

    #[test]
    fn finds_nearest_among_many() {
        let points: Vec<([f64; 2], f32)> = (0..50).map(|i| ([i as f64, 0.0], i as f32)).collect();
        let tree: KdTree<2> = KdTree::build(points);
        assert_eq!(tree.nearest([24.4, 0.0]), Some(24.0));
    }

    #[test]
    fn empty_tree_returns_none() {
        let tree: KdTree<3> = KdTree::build(vec![]);
        assert!(tree.is_empty());
        assert_eq!(tree.nearest([0.0, 0.0, 0.0]), None);
    }
}
