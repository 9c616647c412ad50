/// Names of the three sheets joined into one record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetNames {
    /// Base sheet, one row per catalog entry.
    pub spells: String,
    /// Stat text and positional flag columns, keyed by the base row id.
    pub transients: String,
    /// Localized description text, keyed by the linked action id.
    pub descriptions: String,
}

impl SheetNames {
    pub const DEFAULT_SPELLS: &'static str = "AozAction";
    pub const DEFAULT_TRANSIENTS: &'static str = "AozActionTransient";
    pub const DEFAULT_DESCRIPTIONS: &'static str = "ActionTransient";
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            spells: Self::DEFAULT_SPELLS.to_owned(),
            transients: Self::DEFAULT_TRANSIENTS.to_owned(),
            descriptions: Self::DEFAULT_DESCRIPTIONS.to_owned(),
        }
    }
}

/// Catalog ingestion and display configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CatalogConfig {
    pub sheets: SheetNames,

    /// Glyph repeated once per rank in the stats text.
    pub rank_glyph: char,

    /// Drop locked spells from the visible subset.
    pub hide_locked: bool,
}

impl CatalogConfig {
    pub const DEFAULT_RANK_GLYPH: char = '★';

    pub fn new() -> Self {
        Self {
            sheets: SheetNames::default(),
            rank_glyph: Self::DEFAULT_RANK_GLYPH,
            hide_locked: false,
        }
    }

    pub fn with_hide_locked(mut self, hide_locked: bool) -> Self {
        self.hide_locked = hide_locked;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new()
    }
}
