//! Index-arena representation of the yeast phylogenetic tree.
//!
//! Nodes live in a flat `Vec` and refer to their children by index, so the
//! post-order mass computation in `barman-metrics` walks the tree without
//! allocating per-node state or chasing references. The root always sits at
//! index 0 and carries branch length 0; its own length is excluded from
//! distance accumulation by the metric (only strictly positive lengths
//! contribute).

use serde::{Deserialize, Serialize};

use crate::errors::{BarmanError, ErrorInfo};

/// A single node of a [`PhyloTree`].
///
/// Leaf names are the species namespace shared with yeast profiles; internal
/// nodes may be unnamed (empty string). `length` is the branch length to the
/// parent node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhyloNode {
    name: String,
    length: f64,
    children: Vec<usize>,
}

impl PhyloNode {
    /// Returns the node name (empty for unnamed internal nodes).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the branch length connecting this node to its parent.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the arena indices of this node's children, in input order.
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    /// Returns true when the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Rooted phylogenetic tree stored as an index arena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhyloTree {
    nodes: Vec<PhyloNode>,
}

/// Arena index of the root node.
const ROOT: usize = 0;

impl PhyloTree {
    /// Creates a tree holding only an unnamed root with branch length 0.
    pub fn new() -> Self {
        Self {
            nodes: vec![PhyloNode {
                name: String::new(),
                length: 0.0,
                children: Vec::new(),
            }],
        }
    }

    /// Returns the arena index of the root node.
    pub fn root(&self) -> usize {
        ROOT
    }

    /// Returns the total number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the node stored at `idx`.
    ///
    /// Panics if `idx` is outside the arena; indices obtained from
    /// [`PhyloNode::children`] or [`PhyloTree::add_child`] are always valid.
    pub fn node(&self, idx: usize) -> &PhyloNode {
        &self.nodes[idx]
    }

    /// Appends a child under `parent` and returns the new node's index.
    ///
    /// Fails with `InvalidInput` when `parent` is outside the arena or the
    /// branch length is negative or non-finite.
    pub fn add_child(
        &mut self,
        parent: usize,
        name: impl Into<String>,
        length: f64,
    ) -> Result<usize, BarmanError> {
        if parent >= self.nodes.len() {
            return Err(BarmanError::InvalidInput(
                ErrorInfo::new("tree-bad-parent", "parent index is outside the arena")
                    .with_context("parent", parent.to_string())
                    .with_context("node_count", self.nodes.len().to_string()),
            ));
        }
        if !(length >= 0.0) {
            return Err(BarmanError::InvalidInput(
                ErrorInfo::new("tree-bad-length", "branch length must be finite and non-negative")
                    .with_context("length", length.to_string()),
            ));
        }
        let idx = self.nodes.len();
        self.nodes.push(PhyloNode {
            name: name.into(),
            length,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(idx);
        Ok(idx)
    }
}

impl Default for PhyloTree {
    fn default() -> Self {
        Self::new()
    }
}
