#![deny(missing_docs)]
#![doc = "Core data model for the Barman beer recommendation engine: beers, spectral vectors, yeast profiles, the phylogenetic tree arena, structured errors, and the deterministic RNG handle."]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;
pub mod tree;

pub use errors::{BarmanError, ErrorInfo};
pub use rng::{derive_substream_seed, RngHandle};
pub use tree::{PhyloNode, PhyloTree};

/// Identifier for a beer within a [`Dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BeerId(u64);

impl BeerId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// A beer record as produced by the upstream ETL step.
///
/// Records are immutable inputs: the engine only reads them and never owns
/// their lifecycle. `has_yeast_data` marks whether a sequencing run exists
/// for the beer; the corresponding [`YeastProfile`] may still be absent from
/// the dataset, and the scorer checks both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    /// Unique identifier shared with the vector and profile maps.
    pub id: BeerId,
    /// Display name.
    pub name: String,
    /// Brewery the beer comes from.
    pub brewery: String,
    /// Whether a yeast community profile was sequenced for this beer.
    pub has_yeast_data: bool,
}

/// Pre-normalized Raman spectrum: one intensity per wavenumber bucket.
///
/// All vectors within a dataset share the same length; a beer may have none.
pub type SpectralVector = Vec<f64>;

/// Sparse yeast community profile: species name to abundance.
///
/// Values may be raw read counts or relative abundances; consumers that need
/// relative abundances normalize internally. Species with zero abundance are
/// simply omitted.
pub type YeastProfile = BTreeMap<String, f64>;

/// Side data consulted when scoring beer pairs.
///
/// Both maps are keyed by [`BeerId`] and may be sparse; the species names
/// used in profiles share a namespace with the leaf names of `tree`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Raman spectra indexed by beer.
    pub vectors: BTreeMap<BeerId, SpectralVector>,
    /// Yeast community profiles indexed by beer.
    pub profiles: BTreeMap<BeerId, YeastProfile>,
    /// Phylogenetic tree over the recognized yeast species.
    pub tree: PhyloTree,
}

impl Dataset {
    /// Creates a dataset with no vectors or profiles over the given tree.
    pub fn with_tree(tree: PhyloTree) -> Self {
        Self {
            vectors: BTreeMap::new(),
            profiles: BTreeMap::new(),
            tree,
        }
    }
}

/// Per-call session context supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Seconds elapsed since the user started picking beers.
    pub elapsed_seconds: f64,
}

impl SessionContext {
    /// Creates a context for a session that has run for `elapsed_seconds`.
    pub fn new(elapsed_seconds: f64) -> Self {
        Self { elapsed_seconds }
    }
}
