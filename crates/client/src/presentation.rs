//! Text rendering of catalog entries and the filter panel.
use std::fmt::Write;

use grimoire_core::{
    ActionRecord, CLEAR_FILTER_ICON, CategoryValue, FilterButton, FilterRow, IconId, MISSING_ICON,
};

/// Icon reference as the display layer would resolve it.
///
/// Records without an icon fall back to the missing-icon glyph; synthetic
/// ids are never resolved against the game icon table.
pub fn icon_ref(icon: IconId) -> String {
    if icon.is_synthetic() {
        return format!("glyph:{}", icon.0.unsigned_abs());
    }
    let id = icon.game_icon().unwrap_or(MISSING_ICON.0.unsigned_abs());
    format!("icon:{id}")
}

/// `#{number}: {name}` headline.
pub fn headline(record: &ActionRecord) -> String {
    format!("#{}: {}", record.display_number, record.name)
}

fn labels<V: CategoryValue>(values: impl Iterator<Item = V>) -> String {
    values
        .map(|value| value.info().label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One list entry: headline, rank, and the category summary line.
pub fn entry(record: &ActionRecord) -> String {
    let lock = if record.is_unlocked { "" } else { " (locked)" };
    let mut out = format!(
        "{:<28} {:<6} [{}]{lock}\n",
        headline(record),
        record.rank.info().label,
        icon_ref(record.icon),
    );
    let _ = write!(
        out,
        "    {} | {} | {}",
        record.spell_type.info().label,
        labels(record.target.values()),
        labels(record.aspects.values()),
    );
    if !record.effects.is_empty() {
        let _ = write!(out, " | {}", labels(record.effects.iter().copied()));
    }
    if !record.description.is_empty() {
        let _ = write!(out, "\n    {}", record.description);
    }
    out
}

/// Every field of one record.
pub fn detail(record: &ActionRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", headline(record));
    let _ = writeln!(out, "  action id:   {}", record.action_id);
    let _ = writeln!(out, "  icon:        {}", icon_ref(record.icon));
    let _ = writeln!(out, "  rank:        {}", record.rank.info().label);
    let _ = writeln!(out, "  type:        {}", record.spell_type.info().label);
    let _ = writeln!(out, "  target:      {}", labels(record.target.values()));
    let _ = writeln!(out, "  aspect:      {}", labels(record.aspects.values()));
    let effects = if record.effects.is_empty() {
        "-".to_owned()
    } else {
        labels(record.effects.iter().copied())
    };
    let _ = writeln!(out, "  effects:     {effects}");
    let _ = writeln!(out, "  cast:        {}", record.cast_time.info().label);
    let _ = writeln!(out, "  recast:      {}", record.recast_time.info().label);
    let _ = writeln!(
        out,
        "  unlocked:    {}",
        if record.is_unlocked { "yes" } else { "no" }
    );
    let _ = writeln!(out, "\n  {}", record.description);
    if !record.flavor_text.is_empty() {
        let _ = writeln!(out, "\n  {}", record.flavor_text);
    }
    out
}

fn button(button: &FilterButton) -> String {
    let mark = if button.enabled() { "x" } else { " " };
    match button {
        FilterButton::Value {
            key, info, tooltip, ..
        } => {
            let icon = if info.icon.is_none() {
                String::new()
            } else {
                format!(" {}", icon_ref(info.icon))
            };
            format!("[{mark}] {:<22} {tooltip}{icon}", key.name())
        }
        FilterButton::Shortcut { shortcut, info, .. } => format!(
            "[{mark}] {:<22} {} {} (shortcut)",
            shortcut.to_string(),
            info.label,
            icon_ref(info.icon)
        ),
    }
}

/// The filter panel, one category per block.
pub fn panel(rows: &[FilterRow]) -> String {
    let mut out = format!("Clear all filters {}\n", icon_ref(CLEAR_FILTER_ICON));
    for row in rows {
        let _ = writeln!(out, "\n{}:", row.category);
        for item in &row.buttons {
            let _ = writeln!(out, "  {}", button(item));
        }
    }
    out
}
