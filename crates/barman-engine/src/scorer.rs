//! Golden-ratio combination of spectral and phylogenetic similarity.

use barman_core::{Beer, Dataset};

use crate::strategy::SimilarityStrategy;

/// Weight of the spectral-shape term in the combined score.
///
/// The golden-ratio split favors the spectral signal roughly 3:2 because a
/// Raman spectrum exists for nearly every beer while sequencing coverage is
/// partial. Together with [`PHYLO_WEIGHT`] the weights sum to 1.
pub const SPECTRAL_WEIGHT: f64 = 0.618;

/// Weight of the phylogenetic term in the combined score.
///
/// When yeast data is missing for either beer the score is
/// `SPECTRAL_WEIGHT * spectral` with no renormalization, so incomplete
/// comparisons score systematically lower instead of hiding the gap.
pub const PHYLO_WEIGHT: f64 = 0.382;

/// Scores a beer pair by combining spectral and phylogenetic similarity.
///
/// The spectral term is 0 unless both beers have a vector; a metric failure
/// (for example mismatched vector lengths) is logged and likewise treated as
/// 0, so a single bad pair never aborts a recommendation run. The
/// phylogenetic term only participates when both beers are flagged as
/// sequenced *and* both profiles are present in the dataset.
pub fn pairwise_score(
    strategy: &dyn SimilarityStrategy,
    beer_a: &Beer,
    beer_b: &Beer,
    dataset: &Dataset,
) -> f64 {
    let spectral = match (dataset.vectors.get(&beer_a.id), dataset.vectors.get(&beer_b.id)) {
        (Some(vec_a), Some(vec_b)) => match strategy.spectral(vec_a, vec_b) {
            Ok(value) => value,
            Err(err) => {
                log::warn!(
                    "spectral similarity failed for beers {} and {}: {err}",
                    beer_a.id.as_raw(),
                    beer_b.id.as_raw()
                );
                0.0
            }
        },
        _ => 0.0,
    };

    let profile_a = beer_a
        .has_yeast_data
        .then(|| dataset.profiles.get(&beer_a.id))
        .flatten();
    let profile_b = beer_b
        .has_yeast_data
        .then(|| dataset.profiles.get(&beer_b.id))
        .flatten();

    match (profile_a, profile_b) {
        (Some(sample_a), Some(sample_b)) => {
            let phylo = strategy.phylogenetic(&dataset.tree, sample_a, sample_b);
            SPECTRAL_WEIGHT * spectral + PHYLO_WEIGHT * phylo
        }
        _ => SPECTRAL_WEIGHT * spectral,
    }
}
