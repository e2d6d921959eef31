// Test fixtures - reusable test data
// Provides consistent color values across all test files

/// Sample colors in the textual forms the engine accepts
pub mod colors {
    /// Dark indigo brand background (canonical wire form)
    pub const DARK_INDIGO: &str = "249 67% 24%";

    /// Near-black text that fails hard against the indigo background
    pub const NEAR_BLACK: &str = "0 0% 20%";

    /// Pure white in the canonical form
    pub const WHITE: &str = "0 0% 100%";

    /// Pure black in the canonical form
    pub const BLACK: &str = "0 0% 0%";

    /// Mid gray that sits almost exactly on the AA boundary against white
    pub const BOUNDARY_GRAY_HEX: &str = "#767676";
}

/// Token sets for validation and audit tests
pub mod tokens {
    use contrast_kit::models::compliance::CompanionHint;
    use contrast_kit::models::token::ColorToken;

    /// A well-formed brand token
    pub fn brand_primary() -> ColorToken {
        ColorToken::with_companion(
            "Primary",
            "brand",
            super::colors::DARK_INDIGO,
            CompanionHint::LightText,
        )
    }

    /// A token whose stored value no longer parses
    pub fn corrupted() -> ColorToken {
        ColorToken::new("Legacy", "brand", "banana")
    }
}
