//! Color value types for huemix
//!
//! This module defines the `Rgb` channel triple and its strict hex codec.
//! Only exact `#RRGGBB` literals are accepted; everything else is rejected
//! whole, so callers can drop malformed entries without partial parses.

mod types;

pub use types::{is_valid_hex, Rgb};
