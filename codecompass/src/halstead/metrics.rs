use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
/// Metrics calculated using Halstead's Complexity Measures.
pub struct HalsteadMetrics {
    /// N1: Total number of operators.
    pub h1: usize,
    /// N2: Total number of operands.
    pub h2: usize,
    /// n1: Number of distinct operators.
    pub n1: usize,
    /// n2: Number of distinct operands.
    pub n2: usize,
    /// Program vocabulary (n1 + n2).
    pub vocabulary: f64,
    /// Program length (N1 + N2).
    pub length: f64,
    /// Volume (length * log2(vocabulary)).
    pub volume: f64,
    /// Difficulty ((n1 / 2) * (N2 / n2)).
    pub difficulty: f64,
    /// Effort (volume * difficulty).
    pub effort: f64,
}
