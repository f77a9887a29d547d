//! Weighted-average additive mixing

use super::{select_pairs, WHITE_HEX};
use crate::color::Rgb;

/// Blend colors by the weighted average of their RGB channels.
///
/// Pairs are selected positionally (see the module docs); if nothing
/// survives selection the white sentinel is returned. Each output channel
/// is `round(sum(channel * weight) / sum(weight))`, clamped to `[0, 255]`.
/// The result is invariant under reordering pairs and under scaling every
/// weight by the same positive factor.
///
/// # Example
/// ```
/// use huemix::mix_weighted_average;
///
/// let hex = mix_weighted_average(&["#2563EB", "#EF4444"], &[2.0, 2.0]);
/// assert_eq!(hex, "#8a5498");
/// ```
pub fn mix_weighted_average(colors: &[&str], weights: &[f64]) -> String {
    let pairs = select_pairs(colors, weights);
    if pairs.is_empty() {
        return WHITE_HEX.to_string();
    }

    let mut sums = [0.0f64; 3];
    let mut total = 0.0f64;
    for (rgb, weight) in &pairs {
        sums[0] += f64::from(rgb.r) * weight;
        sums[1] += f64::from(rgb.g) * weight;
        sums[2] += f64::from(rgb.b) * weight;
        total += weight;
    }

    let channel = |sum: f64| (sum / total).round().clamp(0.0, 255.0) as u8;
    Rgb::new(channel(sums[0]), channel(sums[1]), channel(sums[2])).to_hex()
}
