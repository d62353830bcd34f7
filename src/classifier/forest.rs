use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::FEATURE_COUNT;

/// Number of trees in the bagged ensemble.
pub const TREE_COUNT: usize = 100;

/// Seed for bootstrap and feature subsampling. Fixed so training the
/// same data twice yields an identical ensemble.
pub const DEFAULT_SEED: u64 = 42;

/// Bagged ensemble of binary decision trees with Gini splits.
///
/// Each tree is grown to purity on a bootstrap sample of the training
/// set, considering a random subset of features at every split. The
/// predicted probability is the per-tree class-1 leaf fraction averaged
/// across the ensemble.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    tree_count: usize,
    seed: u64,
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn new(tree_count: usize, seed: u64) -> Self {
        Self {
            tree_count,
            seed,
            trees: Vec::new(),
        }
    }

    pub fn is_fitted(&self) -> bool {
        !self.trees.is_empty()
    }

    /// Fit the ensemble from scratch. Any previously grown trees are
    /// discarded.
    pub fn fit(&mut self, matrix: &[[f64; FEATURE_COUNT]], labels: &[u8]) {
        self.trees.clear();
        if matrix.is_empty() {
            return;
        }
        self.trees.reserve(self.tree_count);

        for tree_index in 0..self.tree_count {
            // Per-tree RNG derived from the master seed keeps every tree
            // reproducible independently of how many trees are grown.
            let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(tree_index as u64));
            let indices: Vec<usize> = (0..matrix.len())
                .map(|_| rng.random_range(0..matrix.len()))
                .collect();
            self.trees.push(DecisionTree::fit(matrix, labels, &indices, &mut rng));
        }
    }

    /// Averaged class-1 probability across all trees.
    pub fn predict_proba(&self, row: &[f64; FEATURE_COUNT]) -> f64 {
        if self.trees.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.trees.iter().map(|t| t.probability(row)).sum();
        sum / self.trees.len() as f64
    }

    /// Hard class vote: 1 when the averaged probability reaches 0.5.
    pub fn predict(&self, row: &[f64; FEATURE_COUNT]) -> u8 {
        if self.predict_proba(row) >= 0.5 { 1 } else { 0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DecisionTree {
    root: Node,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
enum Node {
    Leaf {
        probability: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl DecisionTree {
    fn fit(
        matrix: &[[f64; FEATURE_COUNT]],
        labels: &[u8],
        indices: &[usize],
        rng: &mut StdRng,
    ) -> Self {
        Self {
            root: build_node(matrix, labels, indices, rng),
        }
    }

    fn probability(&self, row: &[f64; FEATURE_COUNT]) -> f64 {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { probability } => return *probability,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if row[*feature] <= *threshold { left } else { right };
                }
            }
        }
    }
}

fn build_node(
    matrix: &[[f64; FEATURE_COUNT]],
    labels: &[u8],
    indices: &[usize],
    rng: &mut StdRng,
) -> Node {
    if indices.is_empty() {
        return Node::Leaf { probability: 0.0 };
    }

    let positives = indices.iter().filter(|&&i| labels[i] == 1).count();
    if positives == 0 || positives == indices.len() || indices.len() < 2 {
        return Node::Leaf {
            probability: positives as f64 / indices.len() as f64,
        };
    }

    let candidates = sample_features(rng, split_feature_count());
    let split = best_split(matrix, labels, indices, &candidates).or_else(|| {
        // Every sampled feature was constant on this node; fall back to
        // scanning all features before giving up on the split.
        let all: Vec<usize> = (0..FEATURE_COUNT).collect();
        best_split(matrix, labels, indices, &all)
    });

    match split {
        Some((feature, threshold)) => {
            let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
                .iter()
                .copied()
                .partition(|&i| matrix[i][feature] <= threshold);
            Node::Split {
                feature,
                threshold,
                left: Box::new(build_node(matrix, labels, &left_idx, rng)),
                right: Box::new(build_node(matrix, labels, &right_idx, rng)),
            }
        }
        // Identical rows with mixed labels: terminal impure leaf.
        None => Node::Leaf {
            probability: positives as f64 / indices.len() as f64,
        },
    }
}

/// Features considered per split: floor(sqrt(feature count)), at least 1.
fn split_feature_count() -> usize {
    ((FEATURE_COUNT as f64).sqrt() as usize).max(1)
}

/// Draw `k` distinct feature indices via a partial Fisher-Yates shuffle.
fn sample_features(rng: &mut StdRng, k: usize) -> Vec<usize> {
    let mut features: Vec<usize> = (0..FEATURE_COUNT).collect();
    for i in 0..k.min(FEATURE_COUNT) {
        let j = rng.random_range(i..FEATURE_COUNT);
        features.swap(i, j);
    }
    features.truncate(k);
    features
}

/// Best (feature, midpoint threshold) by weighted Gini impurity, or
/// `None` when every candidate feature is constant over `indices`.
fn best_split(
    matrix: &[[f64; FEATURE_COUNT]],
    labels: &[u8],
    indices: &[usize],
    features: &[usize],
) -> Option<(usize, f64)> {
    let total = indices.len() as f64;
    let total_pos = indices.iter().filter(|&&i| labels[i] == 1).count() as f64;

    let mut best: Option<(usize, f64, f64)> = None;

    for &feature in features {
        let mut values: Vec<(f64, u8)> = indices
            .iter()
            .map(|&i| (matrix[i][feature], labels[i]))
            .collect();
        values.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut left_n = 0.0;
        let mut left_pos = 0.0;
        for w in 0..values.len() - 1 {
            left_n += 1.0;
            if values[w].1 == 1 {
                left_pos += 1.0;
            }
            // A boundary only exists between distinct values.
            if values[w].0 == values[w + 1].0 {
                continue;
            }

            let right_n = total - left_n;
            let right_pos = total_pos - left_pos;
            let impurity = (left_n / total) * gini(left_n, left_pos)
                + (right_n / total) * gini(right_n, right_pos);

            if best.is_none_or(|(_, _, g)| impurity < g) {
                let threshold = (values[w].0 + values[w + 1].0) / 2.0;
                best = Some((feature, threshold, impurity));
            }
        }
    }

    best.map(|(feature, threshold, _)| (feature, threshold))
}

fn gini(n: f64, positives: f64) -> f64 {
    if n == 0.0 {
        return 0.0;
    }
    let p = positives / n;
    1.0 - p * p - (1.0 - p) * (1.0 - p)
}
