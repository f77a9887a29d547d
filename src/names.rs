//! Display names for known colors
//!
//! A fixed table mapping canonical uppercase `#RRGGBB` keys to
//! human-readable names, plus the preset swatch palette for callers that
//! present a picker. Lookup is exact and case-sensitive; anything not in
//! the table is "Custom". No nearest-color matching.

// =============================================================================
// Named Colors
// =============================================================================

/// Canonical color names, keyed by uppercase hex. Several keys share a
/// display name (`#0000FF` and `#2563EB` are both "Blue").
pub const NAMED_COLORS: &[(&str, &str)] = &[
    ("#FF0000", "Red"),
    ("#FF4500", "Orange Red"),
    ("#FF8C00", "Dark Orange"),
    ("#FFD700", "Gold"),
    ("#FFFF00", "Yellow"),
    ("#ADFF2F", "Green Yellow"),
    ("#00FF00", "Lime"),
    ("#00FA9A", "Medium Spring Green"),
    ("#00FFFF", "Cyan"),
    ("#00BFFF", "Deep Sky Blue"),
    ("#0000FF", "Blue"),
    ("#8A2BE2", "Blue Violet"),
    ("#FF00FF", "Magenta"),
    ("#FF1493", "Deep Pink"),
    ("#FF69B4", "Hot Pink"),
    ("#FFB6C1", "Light Pink"),
    ("#FFE4E1", "Misty Rose"),
    ("#F5F5DC", "Beige"),
    ("#DEB887", "Burly Wood"),
    ("#D2691E", "Chocolate"),
    ("#8B4513", "Saddle Brown"),
    ("#654321", "Dark Brown"),
    ("#2F4F4F", "Dark Slate Gray"),
    ("#000000", "Black"),
    ("#FFFFFF", "White"),
    ("#C0C0C0", "Silver"),
    ("#808080", "Gray"),
    ("#404040", "Dark Gray"),
    ("#202020", "Very Dark Gray"),
    ("#101010", "Almost Black"),
    ("#080808", "Near Black"),
    ("#2563EB", "Blue"),
    ("#EF4444", "Red"),
    ("#22C55E", "Green"),
];

/// Fallback name for anything not in the table.
pub const CUSTOM_NAME: &str = "Custom";

// =============================================================================
// Swatch Palette
// =============================================================================

/// Preset swatches in picker order; black appears twice to pad the grid
/// to 32 entries.
pub const SWATCHES: &[&str] = &[
    "#FF0000", "#FF4500", "#FF8C00", "#FFD700", "#FFFF00", "#ADFF2F", "#00FF00", "#00FA9A",
    "#00FFFF", "#00BFFF", "#0000FF", "#8A2BE2", "#FF00FF", "#FF1493", "#FF69B4", "#FFB6C1",
    "#FFE4E1", "#F5F5DC", "#DEB887", "#D2691E", "#8B4513", "#654321", "#2F4F4F", "#000000",
    "#FFFFFF", "#C0C0C0", "#808080", "#404040", "#202020", "#101010", "#080808", "#000000",
];

// =============================================================================
// Lookup Functions
// =============================================================================

/// Look up the display name for a color.
///
/// Matching is exact and case-sensitive against the canonical uppercase
/// keys, so lowercase spellings and unlisted colors both fall back to
/// "Custom".
///
/// # Example
/// ```
/// use huemix::names::color_name;
///
/// assert_eq!(color_name("#2563EB"), "Blue");
/// assert_eq!(color_name("#123456"), "Custom");
/// ```
pub fn color_name(hex: &str) -> &'static str {
    NAMED_COLORS
        .iter()
        .find(|(key, _)| *key == hex)
        .map(|(_, name)| *name)
        .unwrap_or(CUSTOM_NAME)
}

/// Get the default swatch palette.
pub fn default_swatches() -> &'static [&'static str] {
    SWATCHES
}
