//! Spell catalog types and the category filter engine.
//!
//! `grimoire-core` defines the closed category vocabulary, the normalized
//! [`ActionRecord`], the display-ordered [`Catalog`] and the filter engine
//! that decides which records are visible. It performs no I/O: raw game data
//! reaches it through the oracle traits in [`env`], and ingestion lives in
//! `grimoire-content`.
pub mod catalog;
pub mod category;
pub mod config;
pub mod env;
pub mod error;
pub mod filter;
pub mod grimoire;
pub mod record;

pub use catalog::{Catalog, CatalogError};
pub use category::{
    Aspect, Aspects, CLEAR_FILTER_ICON, CastTime, Category, CategoryValue, IconId, MISSING_ICON,
    RecastTime, Shortcut, SpellEffect, SpellRank, SpellType, Target, Targets, UnknownTiming,
    ValueInfo,
};
pub use config::{CatalogConfig, SheetNames};
pub use env::{Cell, RichTextDecoder, Row, RowError, RowId, RowStore, TextError, UnlockOracle};
pub use error::{DexError, ErrorSeverity};
pub use filter::{
    FilterButton, FilterEngine, FilterKey, FilterRow, FilterState, LookupError, filter_panel,
    matches,
};
pub use grimoire::Grimoire;
pub use record::{ActionId, ActionRecord, EffectSet};
