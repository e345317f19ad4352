//! Injectable seam for the similarity metrics.
//!
//! The scorer and engine take the metrics as an explicit parameter instead of
//! calling `barman-metrics` directly, so tests substitute fakes without
//! touching shared state.

use barman_core::{BarmanError, PhyloTree, YeastProfile};

/// Pair of similarity metrics consumed by the pairwise scorer.
pub trait SimilarityStrategy {
    /// Spectral-shape similarity between two Raman vectors.
    ///
    /// May fail with `InvalidInput` for degenerate vectors; the scorer
    /// neutralizes such failures to a 0 contribution.
    fn spectral(&self, a: &[f64], b: &[f64]) -> Result<f64, BarmanError>;

    /// Weighted phylogenetic similarity between two yeast profiles.
    fn phylogenetic(&self, tree: &PhyloTree, a: &YeastProfile, b: &YeastProfile) -> f64;
}

/// Production strategy delegating to the real metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricStrategy;

impl SimilarityStrategy for MetricStrategy {
    fn spectral(&self, a: &[f64], b: &[f64]) -> Result<f64, BarmanError> {
        barman_metrics::spectral_shape_similarity(a, b)
    }

    fn phylogenetic(&self, tree: &PhyloTree, a: &YeastProfile, b: &YeastProfile) -> f64 {
        barman_metrics::weighted_phylogenetic_similarity(tree, a, b)
    }
}
