#![deny(missing_docs)]
#![doc = "Recommendation engine for the Barman project: golden-ratio pairwise scoring over spectral and phylogenetic similarity, and the Comfort Zone / Wander Away candidate selection policy."]

pub mod engine;
pub mod scorer;
pub mod strategy;

pub use engine::{recommend, Mode, Recommendation};
pub use scorer::{pairwise_score, PHYLO_WEIGHT, SPECTRAL_WEIGHT};
pub use strategy::{MetricStrategy, SimilarityStrategy};
