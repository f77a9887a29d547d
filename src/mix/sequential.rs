//! Sequential subtractive mixing
//!
//! Approximates pigment mixing without a spectral model: the accumulator
//! starts at white and each color is folded in with a ratio of its weight
//! to the running total, rounding to whole channel values at every step.
//! Later colors therefore enter against an ever-larger total, and the
//! outcome depends on input order.

use super::{select_pairs, WHITE_HEX};
use crate::color::Rgb;

/// Blend colors by folding each one into a white-initialized accumulator.
///
/// For each selected pair, in positional order:
/// `total += weight`, `ratio = weight / total`, then per channel
/// `acc = round(acc * (1 - ratio) + channel * ratio)`. The first pair has
/// `ratio == 1`, so it replaces the white start exactly. Selection and the
/// white fallback match [`mix_weighted_average`](super::mix_weighted_average).
pub fn mix_sequential_subtractive(colors: &[&str], weights: &[f64]) -> String {
    let pairs = select_pairs(colors, weights);
    if pairs.is_empty() {
        return WHITE_HEX.to_string();
    }

    let mut acc = [255.0f64; 3];
    let mut total = 0.0f64;
    for (rgb, weight) in &pairs {
        total += weight;
        let ratio = weight / total;
        let channels = [f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b)];
        for (value, channel) in acc.iter_mut().zip(channels) {
            *value = (*value * (1.0 - ratio) + channel * ratio).round();
        }
    }

    let channel = |value: f64| value.clamp(0.0, 255.0) as u8;
    Rgb::new(channel(acc[0]), channel(acc[1]), channel(acc[2])).to_hex()
}
