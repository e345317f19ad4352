//! Weighted UniFrac-style similarity over the phylogenetic tree arena.

use barman_core::{PhyloTree, YeastProfile};

/// Normalizes a profile to relative abundances summing to 1.
///
/// An empty profile, or one whose values sum to zero, normalizes to an empty
/// profile so absent mass never divides by zero downstream.
pub fn normalize_profile(profile: &YeastProfile) -> YeastProfile {
    let total: f64 = profile.values().sum();
    if total <= 0.0 {
        return YeastProfile::new();
    }
    profile
        .iter()
        .map(|(species, value)| (species.clone(), value / total))
        .collect()
}

/// Computes the weighted phylogenetic similarity between two yeast samples.
///
/// This is the weighted UniFrac metric: each branch with strictly positive
/// length contributes `length * |mass_a - mass_b|` to the distance numerator
/// and `length * max(mass_a, mass_b)` to the denominator, where a node's mass
/// for a sample is the relative abundance of its species (leaves) or the sum
/// over its subtree (internal nodes). The result is `clamp(1 - num/den, 0, 1)`.
///
/// Samples are normalized internally, so raw read counts and relative
/// abundances are equally acceptable. Species absent from the tree's leaf
/// namespace carry no mass and are silently ignored. The root's own length
/// is conventionally 0 and therefore never contributes.
///
/// When no positive-length branch carries mass for either sample (both
/// samples empty, or nothing matches a tree leaf), the denominator is 0 and
/// the function returns 1. That convention equates "no information" with
/// "identical" and is kept for compatibility with the original metric; see
/// DESIGN.md before relying on it.
pub fn weighted_phylogenetic_similarity(
    tree: &PhyloTree,
    sample_a: &YeastProfile,
    sample_b: &YeastProfile,
) -> f64 {
    let norm_a = normalize_profile(sample_a);
    let norm_b = normalize_profile(sample_b);

    let mut masses = vec![(0.0_f64, 0.0_f64); tree.node_count()];
    let mut numerator = 0.0;
    let mut denominator = 0.0;

    // Explicit-stack post-order walk: a node is expanded on first visit and
    // scored once all of its children have been scored.
    let mut stack = vec![(tree.root(), false)];
    while let Some((idx, expanded)) = stack.pop() {
        let node = tree.node(idx);
        if !expanded && !node.is_leaf() {
            stack.push((idx, true));
            for &child in node.children() {
                stack.push((child, false));
            }
            continue;
        }

        let (mass_a, mass_b) = if node.is_leaf() {
            if node.name().is_empty() {
                (0.0, 0.0)
            } else {
                (
                    norm_a.get(node.name()).copied().unwrap_or(0.0),
                    norm_b.get(node.name()).copied().unwrap_or(0.0),
                )
            }
        } else {
            node.children()
                .iter()
                .fold((0.0, 0.0), |(acc_a, acc_b), &child| {
                    let (child_a, child_b) = masses[child];
                    (acc_a + child_a, acc_b + child_b)
                })
        };
        masses[idx] = (mass_a, mass_b);

        if node.length() > 0.0 {
            numerator += node.length() * (mass_a - mass_b).abs();
            denominator += node.length() * mass_a.max(mass_b);
        }
    }

    if denominator == 0.0 {
        return 1.0;
    }

    let distance = numerator / denominator;
    (1.0 - distance).clamp(0.0, 1.0)
}
