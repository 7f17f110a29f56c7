//! A single isolation tree
//!
//! Nodes live in a flat arena; children are referenced by index. A tree is
//! grown once over a row subsample and is read-only afterwards.

use flight_core::FeatureMatrix;
use rand::Rng;

/// Euler–Mascheroni constant
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Average path length of an unsuccessful search in a binary search tree
/// of `n` nodes, used to normalise isolation depths.
pub fn average_path_length(n: usize) -> f64 {
    match n {
        0 | 1 => 0.0,
        2 => 1.0,
        _ => {
            let n = n as f64;
            2.0 * ((n - 1.0).ln() + EULER_GAMMA) - 2.0 * (n - 1.0) / n
        }
    }
}

/// Depth limit for a tree grown on `sample_size` rows: `ceil(log2(ψ))`
pub fn height_limit(sample_size: usize) -> usize {
    (sample_size.max(2) as f64).log2().ceil() as usize
}

#[derive(Debug, Clone)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        size: usize,
    },
}

/// Randomised recursive partition of a row subsample
#[derive(Debug, Clone)]
pub struct IsolationTree {
    nodes: Vec<Node>,
    height_limit: usize,
}

impl IsolationTree {
    /// Grow a tree over the given rows of `features`
    ///
    /// `rows` must index into `features`; duplicates are allowed.
    pub fn grow<R: Rng>(
        features: &FeatureMatrix,
        rows: Vec<usize>,
        height_limit: usize,
        rng: &mut R,
    ) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            height_limit,
        };
        tree.grow_node(features, rows, 0, rng);
        tree
    }

    fn grow_node<R: Rng>(
        &mut self,
        features: &FeatureMatrix,
        rows: Vec<usize>,
        depth: usize,
        rng: &mut R,
    ) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node::Leaf { size: rows.len() });

        if depth >= self.height_limit || rows.len() <= 1 {
            return id;
        }

        // Only features that vary inside this node can separate its rows
        let candidates: Vec<(usize, f64, f64)> = (0..features.n_cols())
            .filter_map(|col| {
                let (lo, hi) = rows.iter().fold(
                    (f64::INFINITY, f64::NEG_INFINITY),
                    |(lo, hi), &r| {
                        let v = features.get(r, col);
                        (lo.min(v), hi.max(v))
                    },
                );
                (hi > lo).then_some((col, lo, hi))
            })
            .collect();

        if candidates.is_empty() {
            return id;
        }

        let (feature, lo, hi) = candidates[rng.gen_range(0..candidates.len())];
        // In [lo, hi): the minimum always goes left and the maximum right
        let threshold = rng.gen_range(lo..hi);

        let (left_rows, right_rows): (Vec<usize>, Vec<usize>) = rows
            .into_iter()
            .partition(|&r| features.get(r, feature) <= threshold);

        let left = self.grow_node(features, left_rows, depth + 1, rng);
        let right = self.grow_node(features, right_rows, depth + 1, rng);
        self.nodes[id] = Node::Split {
            feature,
            threshold,
            left,
            right,
        };
        id
    }

    /// Isolation path length of `row`, including the expected remainder for
    /// rows still sharing its leaf
    pub fn path_length(&self, row: &[f64]) -> f64 {
        let mut node = 0;
        let mut depth = 0usize;
        loop {
            match self.nodes[node] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if row[feature] <= threshold { left } else { right };
                    depth += 1;
                }
                Node::Leaf { size } => return depth as f64 + average_path_length(size),
            }
        }
    }

    /// Deepest root-to-leaf path
    pub fn depth(&self) -> usize {
        fn walk(nodes: &[Node], id: usize) -> usize {
            match nodes[id] {
                Node::Split { left, right, .. } => 1 + walk(nodes, left).max(walk(nodes, right)),
                Node::Leaf { .. } => 0,
            }
        }
        walk(&self.nodes, 0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn height_limit(&self) -> usize {
        self.height_limit
    }
}
