use std::collections::BTreeMap;

use barman_core::{BarmanError, Beer, BeerId, Dataset, PhyloTree, YeastProfile};
use barman_engine::SimilarityStrategy;

/// Strategy returning fixed values for both metrics.
pub struct FixedStrategy {
    pub spectral: f64,
    pub phylo: f64,
}

impl SimilarityStrategy for FixedStrategy {
    fn spectral(&self, _a: &[f64], _b: &[f64]) -> Result<f64, BarmanError> {
        Ok(self.spectral)
    }

    fn phylogenetic(&self, _tree: &PhyloTree, _a: &YeastProfile, _b: &YeastProfile) -> f64 {
        self.phylo
    }
}

/// Strategy scoring a pair by the second vector's first element, so tests
/// can assign each candidate a known rank through its spectral vector.
pub struct RankBySecond;

impl SimilarityStrategy for RankBySecond {
    fn spectral(&self, _a: &[f64], b: &[f64]) -> Result<f64, BarmanError> {
        Ok(b[0])
    }

    fn phylogenetic(&self, _tree: &PhyloTree, _a: &YeastProfile, _b: &YeastProfile) -> f64 {
        0.0
    }
}

pub fn beer(id: u64, has_yeast_data: bool) -> Beer {
    Beer {
        id: BeerId::from_raw(id),
        name: format!("Beer {id}"),
        brewery: format!("Brewery {id}"),
        has_yeast_data,
    }
}

/// Dataset where every beer has the same vector and a single-species profile.
pub fn uniform_dataset(beers: &[Beer]) -> Dataset {
    let mut tree = PhyloTree::new();
    tree.add_child(tree.root(), "Saccharomyces cerevisiae", 0.3)
        .expect("leaf");
    let mut dataset = Dataset::with_tree(tree);
    for beer in beers {
        dataset.vectors.insert(beer.id, vec![1.0, 2.0, 3.0]);
        if beer.has_yeast_data {
            dataset.profiles.insert(
                beer.id,
                BTreeMap::from([("Saccharomyces cerevisiae".to_string(), 1.0)]),
            );
        }
    }
    dataset
}
