//! The single aggregation primitive shared by every metric level.

use serde::{Deserialize, Serialize};

/// Total, arithmetic mean and median of a metric sequence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateStat {
    /// Arithmetic sum of the values.
    pub total: f64,
    /// Mean; 0 for an empty sequence.
    pub avg: f64,
    /// Median; mean of the two middle values for even counts, 0 when empty.
    pub median: f64,
}

/// Aggregates a sequence of metric values.
///
/// The empty sequence is a defined input: every field is 0, never NaN.
/// Function-to-file and file-to-directory rollups both go through this
/// one function, so the levels cannot drift apart.
#[must_use]
pub fn aggregate(values: &[f64]) -> AggregateStat {
    if values.is_empty() {
        return AggregateStat::default();
    }

    let total: f64 = values.iter().sum();
    let avg = total / values.len() as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let middle = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[middle - 1] + sorted[middle]) / 2.0
    } else {
        sorted[middle]
    };

    AggregateStat { total, avg, median }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_is_all_zero() {
        let stat = aggregate(&[]);
        assert_eq!(stat.total, 0.0);
        assert_eq!(stat.avg, 0.0);
        assert_eq!(stat.median, 0.0);
    }

    #[test]
    fn singleton() {
        let stat = aggregate(&[7.5]);
        assert_eq!(stat.total, 7.5);
        assert_eq!(stat.avg, 7.5);
        assert_eq!(stat.median, 7.5);
    }

    #[test]
    fn even_count_averages_the_middle_pair() {
        let stat = aggregate(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(stat.total, 10.0);
        assert_eq!(stat.avg, 2.5);
        assert_eq!(stat.median, 2.5);
    }

    #[test]
    fn odd_count_takes_the_middle_value() {
        let stat = aggregate(&[3.0, 1.0, 2.0]);
        assert_eq!(stat.total, 6.0);
        assert_eq!(stat.avg, 2.0);
        assert_eq!(stat.median, 2.0);
    }
}
