mod common;

use barman_core::{BarmanError, ErrorInfo, PhyloTree, YeastProfile};
use barman_engine::{pairwise_score, SimilarityStrategy, PHYLO_WEIGHT, SPECTRAL_WEIGHT};
use common::{beer, uniform_dataset, FixedStrategy};

const TOLERANCE: f64 = 1e-9;

struct FailingSpectral;

impl SimilarityStrategy for FailingSpectral {
    fn spectral(&self, _a: &[f64], _b: &[f64]) -> Result<f64, BarmanError> {
        Err(BarmanError::InvalidInput(ErrorInfo::new(
            "vec-length-mismatch",
            "lengths differ",
        )))
    }

    fn phylogenetic(&self, _tree: &PhyloTree, _a: &YeastProfile, _b: &YeastProfile) -> f64 {
        0.75
    }
}

#[test]
fn weights_are_the_golden_ratio_split() {
    assert!((SPECTRAL_WEIGHT + PHYLO_WEIGHT - 1.0).abs() < TOLERANCE);
    assert!(SPECTRAL_WEIGHT > PHYLO_WEIGHT);
}

#[test]
fn full_data_combines_both_terms() {
    let a = beer(1, true);
    let b = beer(2, true);
    let dataset = uniform_dataset(&[a.clone(), b.clone()]);

    let strategy = FixedStrategy {
        spectral: 1.0,
        phylo: 0.0,
    };
    let score = pairwise_score(&strategy, &a, &b, &dataset);
    assert!((score - 0.618).abs() < TOLERANCE);

    let strategy = FixedStrategy {
        spectral: 1.0,
        phylo: 1.0,
    };
    let score = pairwise_score(&strategy, &a, &b, &dataset);
    assert!((score - 1.0).abs() < TOLERANCE);
}

#[test]
fn missing_yeast_flag_drops_to_spectral_only() {
    let a = beer(1, true);
    let b = beer(3, false);
    let dataset = uniform_dataset(&[a.clone(), b.clone()]);

    let strategy = FixedStrategy {
        spectral: 1.0,
        phylo: 1.0,
    };
    // The weight is deliberately not renormalized: the pair tops out at
    // 0.618, below any full-data pair with the same spectral match.
    let score = pairwise_score(&strategy, &a, &b, &dataset);
    assert!((score - 0.618).abs() < TOLERANCE);
}

#[test]
fn flagged_beer_without_profile_entry_is_spectral_only() {
    let a = beer(1, true);
    let b = beer(2, true);
    let mut dataset = uniform_dataset(&[a.clone(), b.clone()]);
    dataset.profiles.remove(&b.id);

    let strategy = FixedStrategy {
        spectral: 1.0,
        phylo: 1.0,
    };
    let score = pairwise_score(&strategy, &a, &b, &dataset);
    assert!((score - SPECTRAL_WEIGHT).abs() < TOLERANCE);
}

#[test]
fn missing_vector_zeroes_the_spectral_term() {
    let a = beer(1, true);
    let b = beer(2, true);
    let mut dataset = uniform_dataset(&[a.clone(), b.clone()]);
    dataset.vectors.remove(&a.id);

    let strategy = FixedStrategy {
        spectral: 1.0,
        phylo: 0.5,
    };
    let score = pairwise_score(&strategy, &a, &b, &dataset);
    assert!((score - PHYLO_WEIGHT * 0.5).abs() < TOLERANCE);
}

#[test]
fn metric_failure_is_neutralized_to_zero() {
    let a = beer(1, true);
    let b = beer(2, true);
    let dataset = uniform_dataset(&[a.clone(), b.clone()]);

    let score = pairwise_score(&FailingSpectral, &a, &b, &dataset);
    assert!((score - PHYLO_WEIGHT * 0.75).abs() < TOLERANCE);
}
