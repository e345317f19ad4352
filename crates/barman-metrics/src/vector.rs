//! Similarity metrics over fixed-length real vectors.

use barman_core::errors::{BarmanError, ErrorInfo};

fn length_mismatch(len_a: usize, len_b: usize) -> BarmanError {
    BarmanError::InvalidInput(
        ErrorInfo::new("vec-length-mismatch", "vectors must have the same length")
            .with_context("len_a", len_a.to_string())
            .with_context("len_b", len_b.to_string()),
    )
}

/// Computes the cosine similarity between two equal-length vectors.
///
/// Returns a value in `[-1, 1]`. Fails with `InvalidInput` when the lengths
/// differ, either vector is empty, or either vector has zero magnitude (the
/// direction is undefined).
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, BarmanError> {
    if a.len() != b.len() {
        return Err(length_mismatch(a.len(), b.len()));
    }
    if a.is_empty() {
        return Err(BarmanError::InvalidInput(ErrorInfo::new(
            "vec-empty",
            "vectors cannot be empty",
        )));
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(BarmanError::InvalidInput(
            ErrorInfo::new("vec-zero-magnitude", "vectors cannot be zero vectors")
                .with_context("norm_a", norm_a.to_string())
                .with_context("norm_b", norm_b.to_string()),
        ));
    }

    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// Computes the spectral-shape (SFEC) similarity between two spectra.
///
/// Both vectors are first differentiated (`v'[i] = v[i+1] - v[i]`) and the
/// cosine similarity of the difference sequences is returned. Differencing
/// removes baseline intensity offsets, so peak shape dominates the score.
///
/// Fails with `InvalidInput` when the lengths differ or either vector has
/// fewer than 2 elements. A flat input differentiates to a zero vector; that
/// case returns 0 ("no detectable shape") instead of propagating the inner
/// cosine failure.
pub fn spectral_shape_similarity(a: &[f64], b: &[f64]) -> Result<f64, BarmanError> {
    if a.len() != b.len() {
        return Err(length_mismatch(a.len(), b.len()));
    }
    if a.len() < 2 {
        return Err(BarmanError::InvalidInput(
            ErrorInfo::new(
                "vec-too-short",
                "vectors must have at least 2 elements for differentiation",
            )
            .with_context("len", a.len().to_string()),
        ));
    }

    let diff_a: Vec<f64> = a.windows(2).map(|w| w[1] - w[0]).collect();
    let diff_b: Vec<f64> = b.windows(2).map(|w| w[1] - w[0]).collect();

    match cosine_similarity(&diff_a, &diff_b) {
        Ok(value) => Ok(value),
        // Zero difference vector: constant input, no shape to compare.
        Err(_) => Ok(0.0),
    }
}
