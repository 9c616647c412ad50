//! Joins the three sheets that describe one spell.
use grimoire_core::{ActionId, DexError, ErrorSeverity, Row, RowId, RowStore, SheetNames};

use super::IngestError;

/// Column names of the spell sheets.
pub mod columns {
    // base sheet
    pub const ACTION: &str = "action";
    pub const NAME: &str = "name";
    pub const ICON: &str = "icon";
    pub const CAST: &str = "cast_100ms";
    pub const RECAST: &str = "recast_100ms";
    pub const UNLOCK_LINK: &str = "unlock_link";

    // transient sheet
    pub const NUMBER: &str = "number";
    pub const STATS: &str = "stats";
    pub const FLAVOR: &str = "description";
    pub const TARGETS_ENEMY: &str = "targets_enemy";
    pub const TARGETS_SELF_OR_ALLY: &str = "targets_self_or_ally";
    /// Effect columns in `SpellEffect` declaration order.
    pub const EFFECTS: [&str; grimoire_core::SpellEffect::COUNT] = [
        "causes_slow",
        "causes_petrify",
        "causes_paralysis",
        "causes_interrupt",
        "causes_blind",
        "causes_stun",
        "causes_sleep",
        "causes_bind",
        "causes_heavy",
        "causes_death",
    ];

    // description sheet
    pub const DESCRIPTION: &str = "description";
}

/// A secondary row a spell depends on could not be found.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum JoinError {
    #[error("spell {primary}: row {id} missing from sheet '{sheet}'")]
    MissingRow {
        sheet: String,
        id: RowId,
        primary: RowId,
    },

    #[error("spell {primary}: base row does not link to an action")]
    NullLink { primary: RowId },
}

impl DexError for JoinError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            JoinError::MissingRow { .. } => "JOIN_MISSING_ROW",
            JoinError::NullLink { .. } => "JOIN_NULL_LINK",
        }
    }
}

/// The three rows of one spell.
#[derive(Clone, Copy, Debug)]
pub struct JoinedRows<'s> {
    pub primary: RowId,
    pub action_id: ActionId,
    pub base: &'s Row,
    pub transient: &'s Row,
    pub description: &'s Row,
}

/// Looks up and joins spell rows in a [`RowStore`].
pub struct RowJoiner<'s, S: RowStore + ?Sized> {
    store: &'s S,
    sheets: &'s SheetNames,
}

impl<'s, S: RowStore + ?Sized> RowJoiner<'s, S> {
    pub fn new(store: &'s S, sheets: &'s SheetNames) -> Self {
        Self { store, sheets }
    }

    /// Primary ids of the base sheet, without the reserved id 0.
    pub fn primary_ids(&self) -> Vec<RowId> {
        let mut ids = self.store.primary_ids(&self.sheets.spells);
        ids.retain(|&id| id != 0);
        ids
    }

    /// Joins the base, transient and description rows of one spell.
    pub fn join(&self, primary: RowId) -> Result<JoinedRows<'s>, IngestError> {
        let base = self.lookup(&self.sheets.spells, primary, primary)?;
        let transient = self.lookup(&self.sheets.transients, primary, primary)?;

        let action = base
            .int_as::<u32>(columns::ACTION)
            .map_err(|source| IngestError::Row {
                sheet: self.sheets.spells.clone(),
                id: primary,
                source,
            })?;
        if action == 0 {
            return Err(JoinError::NullLink { primary }.into());
        }
        let description = self.lookup(&self.sheets.descriptions, action, primary)?;

        Ok(JoinedRows {
            primary,
            action_id: ActionId(action),
            base,
            transient,
            description,
        })
    }

    fn lookup(&self, sheet: &str, id: RowId, primary: RowId) -> Result<&'s Row, JoinError> {
        let store: &'s S = self.store;
        store.row(sheet, id).ok_or_else(|| JoinError::MissingRow {
            sheet: sheet.to_owned(),
            id,
            primary,
        })
    }
}
