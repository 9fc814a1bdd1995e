//! Database template lookup keys.
//!
//! Presets offer databases by display name ("MySQL 8.0"), while the template
//! bundle names them by key ("mysql80"). The mapping is a strategy so that new
//! display-name conventions can be handled without special cases.

/// Converts a database display name into a template lookup key.
pub trait DatabaseKeyNormalizer {
    fn normalize(&self, display_name: &str) -> String;
}

/// Strips every character in [`StripSpacesAndPeriods::STRIPPED`] and lower-cases the rest.
///
/// No other punctuation is touched: "PostgreSQL-13" normalizes to "postgresql-13".
#[derive(Debug, Clone, Copy, Default)]
pub struct StripSpacesAndPeriods;

impl StripSpacesAndPeriods {
    /// Characters removed from display names.
    pub const STRIPPED: [char; 2] = [' ', '.'];
}

impl DatabaseKeyNormalizer for StripSpacesAndPeriods {
    fn normalize(&self, display_name: &str) -> String {
        display_name.chars().filter(|c| !Self::STRIPPED.contains(c)).collect::<String>().to_lowercase()
    }
}
