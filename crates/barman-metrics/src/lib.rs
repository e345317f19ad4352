#![deny(missing_docs)]
#![doc = "Pairwise similarity metrics for the Barman engine: cosine and spectral-shape similarity over Raman vectors, and weighted UniFrac-style similarity over yeast community profiles."]

pub mod phylo;
pub mod vector;

pub use phylo::{normalize_profile, weighted_phylogenetic_similarity};
pub use vector::{cosine_similarity, spectral_shape_similarity};
