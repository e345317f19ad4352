//! Candidate scoring, barman mode selection, and pool sampling.

use std::fmt;

use barman_core::{Beer, BeerId, Dataset, RngHandle, SessionContext};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::scorer::pairwise_score;
use crate::strategy::SimilarityStrategy;

/// Session length, in seconds, beyond which a lingering user may be nudged
/// toward exploration.
pub const WANDER_ELAPSED_SECS: f64 = 180.0;

/// Homogeneity below which a selection counts as dissimilar enough to wander.
pub const HOMOGENEITY_THRESHOLD: f64 = 0.6;

/// Fraction of the score-sorted candidate list forming the Comfort Zone pool
/// (and the band skipped by Wander Away).
pub const COMFORT_POOL_FRACTION: f64 = 0.10;

/// Lower edge of the Wander Away band as a fraction of the candidate list.
pub const WANDER_BAND_FRACTION: f64 = 0.25;

/// Candidate count below which percentile bands are meaningless and Wander
/// Away falls back to a top slice.
pub const SMALL_CANDIDATE_COUNT: usize = 10;

/// Size of the Wander Away fallback slice on small candidate lists.
pub const SMALL_POOL_LIMIT: usize = 5;

/// Maximum number of recommendations returned per call.
pub const MAX_RECOMMENDATIONS: usize = 2;

/// Pool policy chosen by the barman heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Sample from the best-matching decile.
    ComfortZone,
    /// Sample from the band below the best decile to encourage exploration.
    WanderAway,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::ComfortZone => write!(f, "Comfort Zone"),
            Mode::WanderAway => write!(f, "Wander Away"),
        }
    }
}

/// A single recommendation returned by [`recommend`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The recommended beer.
    pub beer: Beer,
    /// Score of the winning comparison against the selection.
    pub score: f64,
    /// Pool policy in effect for this run.
    pub mode: Mode,
    /// Whether yeast data was unavailable for the candidate or any selected
    /// beer, signaling a spectral-only comparison.
    pub missing_yeast_data: bool,
}

#[derive(Clone)]
struct ScoredCandidate {
    beer: Beer,
    score: f64,
    missing_yeast_data: bool,
}

/// Recommends up to [`MAX_RECOMMENDATIONS`] beers similar to the selection.
///
/// Each candidate is scored by its best pairwise match against the selected
/// beers (a candidate need only resemble one liked beer). The session's
/// homogeneity, the average pairwise score within the selection, feeds the
/// barman heuristic: a user who has lingered past [`WANDER_ELAPSED_SECS`]
/// with a self-inconsistent selection gets the Wander Away band instead of
/// the top decile. The final picks are sampled uniformly from the pool via
/// the injected RNG handle.
///
/// Selected ids never appear in the output. The function is total: an empty
/// selection scores every candidate 0, and an empty candidate list yields an
/// empty result.
pub fn recommend(
    strategy: &dyn SimilarityStrategy,
    selected_ids: &[BeerId],
    beers: &[Beer],
    dataset: &Dataset,
    session: SessionContext,
    rng: &mut RngHandle,
) -> Vec<Recommendation> {
    let (selected, candidates): (Vec<&Beer>, Vec<&Beer>) = beers
        .iter()
        .partition(|beer| selected_ids.contains(&beer.id));

    let any_selected_unsequenced = selected.iter().any(|beer| !beer.has_yeast_data);
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|candidate| {
            let score = if selected.is_empty() {
                0.0
            } else {
                selected
                    .iter()
                    .map(|liked| pairwise_score(strategy, liked, candidate, dataset))
                    .fold(f64::NEG_INFINITY, f64::max)
            };
            ScoredCandidate {
                beer: candidate.clone(),
                score,
                missing_yeast_data: !candidate.has_yeast_data || any_selected_unsequenced,
            }
        })
        .collect();

    let homogeneity = selection_homogeneity(strategy, &selected, dataset);
    let mode = if session.elapsed_seconds > WANDER_ELAPSED_SECS
        && homogeneity < HOMOGENEITY_THRESHOLD
    {
        Mode::WanderAway
    } else {
        Mode::ComfortZone
    };

    // Stable descending sort: equal scores keep their input order, which
    // pins the pool contents for fixed-seed tests.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut pool = carve_pool(scored, mode);
    pool.shuffle(rng);
    pool.truncate(MAX_RECOMMENDATIONS);

    pool.into_iter()
        .map(|candidate| Recommendation {
            beer: candidate.beer,
            score: candidate.score,
            mode,
            missing_yeast_data: candidate.missing_yeast_data,
        })
        .collect()
}

/// Average pairwise score over all unordered pairs within the selection.
///
/// Fewer than two selected beers are vacuously homogeneous (1), so a
/// singleton selection always lands in Comfort Zone.
fn selection_homogeneity(
    strategy: &dyn SimilarityStrategy,
    selected: &[&Beer],
    dataset: &Dataset,
) -> f64 {
    if selected.len() < 2 {
        return 1.0;
    }
    let mut sum = 0.0;
    let mut count = 0usize;
    for (i, first) in selected.iter().enumerate() {
        for second in &selected[i + 1..] {
            sum += pairwise_score(strategy, first, second, dataset);
            count += 1;
        }
    }
    sum / count as f64
}

fn carve_pool(scored: Vec<ScoredCandidate>, mode: Mode) -> Vec<ScoredCandidate> {
    let n = scored.len();
    if n == 0 {
        return scored;
    }
    match mode {
        Mode::ComfortZone => {
            let take = ((n as f64 * COMFORT_POOL_FRACTION).ceil() as usize)
                .max(MAX_RECOMMENDATIONS)
                .min(n);
            scored[..take].to_vec()
        }
        Mode::WanderAway => {
            if n < SMALL_CANDIDATE_COUNT {
                scored[..n.min(SMALL_POOL_LIMIT)].to_vec()
            } else {
                // The band between the 90th and 75th percentile from the
                // top, both edges inclusive.
                let start = ((n as f64 * COMFORT_POOL_FRACTION).floor() as usize).min(n - 1);
                let end = ((n as f64 * WANDER_BAND_FRACTION).floor() as usize + 1).min(n);
                scored[start..end].to_vec()
            }
        }
    }
}
