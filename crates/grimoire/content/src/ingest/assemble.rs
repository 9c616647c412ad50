//! Assembly of one [`ActionRecord`] from its joined rows.
use grimoire_core::{
    ActionRecord, CastTime, CatalogConfig, IconId, RecastTime, RichTextDecoder, Row, RowError,
    SpellEffect,
};

use super::IngestError;
use super::flags::{compose_effects, compose_targets};
use super::join::{JoinedRows, columns};
use super::stats::{ParseError, StatLine};

/// Typed reads against one named sheet row, tagging failures with their
/// origin.
struct SheetRow<'r> {
    sheet: &'r str,
    id: u32,
    row: &'r Row,
}

impl<'r> SheetRow<'r> {
    fn read<T>(&self, read: impl FnOnce(&'r Row) -> Result<T, RowError>) -> Result<T, IngestError> {
        read(self.row).map_err(|source| IngestError::Row {
            sheet: self.sheet.to_owned(),
            id: self.id,
            source,
        })
    }
}

/// Builds the record for one joined spell.
///
/// The unlock flag starts cleared; the host resolves it later.
pub fn assemble(
    joined: &JoinedRows<'_>,
    decoder: &dyn RichTextDecoder,
    config: &CatalogConfig,
) -> Result<ActionRecord, IngestError> {
    let primary = joined.primary;
    let parse = |source: ParseError| IngestError::Parse { primary, source };
    let text = |raw: &[u8]| decoder.plain_text(raw).map_err(|e| parse(e.into()));

    let base = SheetRow {
        sheet: &config.sheets.spells,
        id: primary,
        row: joined.base,
    };
    let transient = SheetRow {
        sheet: &config.sheets.transients,
        id: primary,
        row: joined.transient,
    };
    let description = SheetRow {
        sheet: &config.sheets.descriptions,
        id: joined.action_id.0,
        row: joined.description,
    };

    let stats = StatLine::decode(
        transient.read(|row| row.bytes(columns::STATS))?,
        decoder,
        config.rank_glyph,
    )
    .map_err(parse)?;

    let cast_time = CastTime::try_from(base.read(|row| row.int_as::<u32>(columns::CAST))?)
        .map_err(|e| parse(e.into()))?;
    let recast_time = RecastTime::try_from(base.read(|row| row.int_as::<u32>(columns::RECAST))?)
        .map_err(|e| parse(e.into()))?;

    let mut effect_columns = [false; SpellEffect::COUNT];
    for (flag, column) in effect_columns.iter_mut().zip(columns::EFFECTS) {
        *flag = transient.read(|row| row.bool(column))?;
    }

    Ok(ActionRecord {
        action_id: joined.action_id,
        display_number: transient.read(|row| row.int_as::<u32>(columns::NUMBER))?,
        icon: IconId(base.read(|row| row.int_as::<i32>(columns::ICON))?),
        name: text(base.read(|row| row.bytes(columns::NAME))?)?,
        description: text(description.read(|row| row.bytes(columns::DESCRIPTION))?)?,
        flavor_text: text(transient.read(|row| row.bytes(columns::FLAVOR))?)?,
        rank: stats.rank,
        spell_type: stats.spell_type,
        target: compose_targets(
            transient.read(|row| row.bool(columns::TARGETS_ENEMY))?,
            transient.read(|row| row.bool(columns::TARGETS_SELF_OR_ALLY))?,
        ),
        aspects: stats.aspects,
        effects: compose_effects(effect_columns),
        cast_time,
        recast_time,
        unlock_key: base.read(|row| row.int_as::<u32>(columns::UNLOCK_LINK))?,
        is_unlocked: false,
    })
}
