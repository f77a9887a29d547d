//! RGB channel triple with strict hex parsing and encoding

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::{HuemixError, Result};

/// Pattern a color literal must match exactly to participate in mixing:
/// `#` followed by six hex digits, nothing more.
static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^#[0-9A-Fa-f]{6}$").expect("hex pattern compiles"));

/// A 24-bit RGB color, one byte per channel. No alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Check a color literal against the strict `#RRGGBB` pattern.
pub fn is_valid_hex(value: &str) -> bool {
    HEX_PATTERN.is_match(value)
}

impl Rgb {
    /// White, the sentinel result for degenerate mixing input.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a strict `#RRGGBB` literal.
    ///
    /// Shorthand (`#FFF`), alpha digits, named colors, and missing `#`
    /// prefixes are all rejected.
    ///
    /// # Example
    /// ```
    /// use huemix::color::Rgb;
    ///
    /// let blue = Rgb::from_hex("#2563EB").unwrap();
    /// assert_eq!((blue.r, blue.g, blue.b), (37, 99, 235));
    /// assert!(Rgb::from_hex("#FFF").is_err());
    /// ```
    pub fn from_hex(value: &str) -> Result<Self> {
        if !is_valid_hex(value) {
            return Err(HuemixError::InvalidColor(value.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&value[range], 16)
                .map_err(|_| HuemixError::InvalidColor(value.to_string()))
        };

        Ok(Self {
            r: channel(1..3)?,
            g: channel(3..5)?,
            b: channel(5..7)?,
        })
    }

    /// Encode as a lowercase `#rrggbb` string, two digits per channel.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = HuemixError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}
