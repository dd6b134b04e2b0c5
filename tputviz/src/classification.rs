//! Measurement stability classification.
//!
//! Each bar is colored by how large its standard deviation is relative to its
//! mean. The buckets are fixed and ties go to the noisier bucket:
//!
//! | Bucket   | Condition              |
//! |----------|------------------------|
//! | `Black`  | `std >= 0.5 * mean`    |
//! | `Red`    | `std >= 0.20 * mean`   |
//! | `Yellow` | `std >= 0.10 * mean`   |
//! | `Green`  | `std < 0.10 * mean`    |

use serde::Serialize;

const BLACK_RATIO: f64 = 0.5;
const RED_RATIO: f64 = 0.20;
const YELLOW_RATIO: f64 = 0.10;

/// Variance bucket of a measurement, noisiest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variance {
    /// Too noisy to trust
    Black,
    Red,
    Yellow,
    /// Stable
    Green,
}

impl Variance {
    /// All buckets in legend order
    pub const ALL: [Variance; 4] = [Variance::Black, Variance::Red, Variance::Yellow, Variance::Green];

    /// Legend text describing the bucket's threshold.
    #[must_use]
    pub fn legend_label(self) -> &'static str {
        match self {
            Variance::Black => "std >= 0.5 * mean",
            Variance::Red => "std >= 0.20 * mean",
            Variance::Yellow => "std >= 0.10 * mean",
            Variance::Green => "std < 0.10 * mean",
        }
    }
}

/// Classify a `(mean, std)` pair.
///
/// A zero mean lands in `Black`, since any deviation is at least half of it.
#[must_use]
pub fn classify(mean: f64, std: f64) -> Variance {
    if std >= BLACK_RATIO * mean {
        Variance::Black
    } else if std >= RED_RATIO * mean {
        Variance::Red
    } else if std >= YELLOW_RATIO * mean {
        Variance::Yellow
    } else {
        Variance::Green
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_buckets() {
        assert_eq!(classify(100.0, 60.0), Variance::Black);
        assert_eq!(classify(100.0, 25.0), Variance::Red);
        assert_eq!(classify(100.0, 15.0), Variance::Yellow);
        assert_eq!(classify(100.0, 5.0), Variance::Green);
    }

    #[test]
    fn test_classify_ties_go_to_noisier_bucket() {
        assert_eq!(classify(100.0, 50.0), Variance::Black);
        assert_eq!(classify(100.0, 20.0), Variance::Red);
        assert_eq!(classify(100.0, 10.0), Variance::Yellow);
        assert_eq!(classify(100.0, 9.0), Variance::Green);
    }

    #[test]
    fn test_classify_zero_mean() {
        assert_eq!(classify(0.0, 0.0), Variance::Black);
    }

    #[test]
    fn test_legend_order_and_labels() {
        let labels: Vec<&str> = Variance::ALL.iter().map(|v| v.legend_label()).collect();
        assert_eq!(
            labels,
            vec!["std >= 0.5 * mean", "std >= 0.20 * mean", "std >= 0.10 * mean", "std < 0.10 * mean"]
        );
    }

    #[test]
    fn test_serialized_names_are_lowercase() {
        let names = serde_json::to_value(Variance::ALL).unwrap();
        assert_eq!(names, serde_json::json!(["black", "red", "yellow", "green"]));
    }
}
