/*!
huemix - weighted color blending

Blends small sets of hex colors by physical weight into a single output
color. Two strategies are available: an order-independent weighted average
of RGB channels, and an order-sensitive sequential fold that approximates
how paints combine. A fixed table maps well-known colors to display names.

The mixing functions are total: malformed colors and non-positive weights
drop out of the blend together, and inputs with nothing left to mix
produce white rather than an error.

# Example

```
use huemix::{color_name, mix_weighted_average};

let mixed = mix_weighted_average(&["#2563EB", "#EF4444"], &[2.0, 2.0]);
assert_eq!(mixed, "#8a5498");
assert_eq!(color_name("#2563EB"), "Blue");
```
*/

use thiserror::Error;

pub mod color;
pub mod mix;
pub mod names;

pub use color::Rgb;
pub use mix::{mix_sequential_subtractive, mix_weighted_average, total_weight, MixStrategy};
pub use names::color_name;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors produced by the strict parsing surface.
///
/// The mixing functions never return these; degenerate mixing input
/// normalizes to the white sentinel instead.
#[derive(Error, Debug)]
pub enum HuemixError {
    /// The literal does not match the `#RRGGBB` pattern.
    #[error("Invalid color '{0}': expected '#' followed by six hex digits")]
    InvalidColor(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, HuemixError>;
