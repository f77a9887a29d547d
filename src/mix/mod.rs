//! Color mixing strategies
//!
//! Two blending algorithms over (color, weight) pairs:
//!
//! - `weighted` - order-independent weighted average of RGB channels
//! - `sequential` - order-sensitive fold toward the accumulator, which
//!   approximates how paint pigments combine
//!
//! Both share the same selection rules: colors zip with weights by
//! position up to the shorter input, a pair participates only if its color
//! matches the strict `#RRGGBB` pattern and its weight is finite and
//! strictly positive, and inputs with nothing left to mix produce the
//! white sentinel. Selection is joint, so a malformed color can never
//! shift a neighbor onto the wrong weight.

mod sequential;
mod weighted;

pub use sequential::mix_sequential_subtractive;
pub use weighted::mix_weighted_average;

use crate::color::Rgb;

/// Sentinel returned whenever no (valid color, positive weight) pair exists.
pub const WHITE_HEX: &str = "#FFFFFF";

/// Zip colors with weights by position and keep the pairs that can
/// participate in mixing. Extra elements on either side are ignored.
pub(crate) fn select_pairs(colors: &[&str], weights: &[f64]) -> Vec<(Rgb, f64)> {
    colors
        .iter()
        .zip(weights)
        .filter(|(_, weight)| weight.is_finite() && **weight > 0.0)
        .filter_map(|(color, weight)| Rgb::from_hex(color).ok().map(|rgb| (rgb, *weight)))
        .collect()
}

/// Sum of the weights that would participate in a mix: the finite,
/// strictly positive ones.
pub fn total_weight(weights: &[f64]) -> f64 {
    weights
        .iter()
        .filter(|weight| weight.is_finite() && **weight > 0.0)
        .sum()
}

/// Blending algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MixStrategy {
    /// Linear weighted average of channels; order-independent.
    #[default]
    WeightedAverage,
    /// Sequential fold with a running weight ratio; order-sensitive.
    SequentialSubtractive,
}

impl MixStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::WeightedAverage => "weighted-average",
            Self::SequentialSubtractive => "sequential-subtractive",
        }
    }

    /// Parse a strategy selector as the CLI spells it.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "weighted-average" | "weighted" | "average" => Some(Self::WeightedAverage),
            "sequential-subtractive" | "sequential" | "subtractive" => {
                Some(Self::SequentialSubtractive)
            }
            _ => None,
        }
    }

    /// Blend `colors` by `weights` using this strategy.
    pub fn mix(&self, colors: &[&str], weights: &[f64]) -> String {
        match self {
            Self::WeightedAverage => mix_weighted_average(colors, weights),
            Self::SequentialSubtractive => mix_sequential_subtractive(colors, weights),
        }
    }
}

impl std::fmt::Display for MixStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_pairs_zips_to_shorter_input() {
        let pairs = select_pairs(&["#FF0000", "#00FF00", "#0000FF"], &[1.0, 2.0]);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1], (Rgb::new(0, 255, 0), 2.0));

        let pairs = select_pairs(&["#FF0000"], &[1.0, 2.0, 3.0]);
        assert_eq!(pairs, vec![(Rgb::new(255, 0, 0), 1.0)]);
    }

    #[test]
    fn test_select_pairs_drops_non_positive_and_non_finite_weights() {
        let pairs = select_pairs(
            &["#FF0000", "#00FF00", "#0000FF", "#FFFFFF"],
            &[0.0, -2.0, f64::NAN, f64::INFINITY],
        );
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_pairing_survives_invalid_neighbor() {
        // The weight stays attached to its own color when an earlier entry
        // is malformed; green keeps 5.0, it does not inherit red's 1.0.
        let pairs = select_pairs(&["red", "#00FF00"], &[1.0, 5.0]);
        assert_eq!(pairs, vec![(Rgb::new(0, 255, 0), 5.0)]);
    }

    #[test]
    fn test_total_weight_counts_only_participating_weights() {
        assert_eq!(total_weight(&[1.5, 0.0, -3.0, f64::NAN, 2.5]), 4.0);
        assert_eq!(total_weight(&[]), 0.0);
    }

    #[test]
    fn test_strategy_names_round_trip() {
        for strategy in [MixStrategy::WeightedAverage, MixStrategy::SequentialSubtractive] {
            assert_eq!(MixStrategy::from_name(strategy.name()), Some(strategy));
            assert_eq!(format!("{}", strategy), strategy.name());
        }
        assert_eq!(MixStrategy::from_name("weighted"), Some(MixStrategy::WeightedAverage));
        assert_eq!(MixStrategy::from_name("SUBTRACTIVE"), Some(MixStrategy::SequentialSubtractive));
        assert_eq!(MixStrategy::from_name("spectral"), None);
    }

    #[test]
    fn test_strategy_default() {
        assert_eq!(MixStrategy::default(), MixStrategy::WeightedAverage);
    }

    #[test]
    fn test_strategy_dispatch_matches_free_functions() {
        let colors = ["#FF0000", "#0000FF", "#22C55E"];
        let weights = [1.0, 2.0, 3.0];
        assert_eq!(
            MixStrategy::WeightedAverage.mix(&colors, &weights),
            mix_weighted_average(&colors, &weights)
        );
        assert_eq!(
            MixStrategy::SequentialSubtractive.mix(&colors, &weights),
            mix_sequential_subtractive(&colors, &weights)
        );
    }
}
