//! Filter panel description consumed by the display layer.
use strum::IntoEnumIterator;

use super::{FilterKey, FilterState};
use crate::category::{Category, Shortcut, ValueInfo};

/// A button on the filter panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterButton {
    Value {
        key: FilterKey,
        info: ValueInfo,
        enabled: bool,
        tooltip: String,
    },
    Shortcut {
        shortcut: Shortcut,
        info: ValueInfo,
        enabled: bool,
    },
}

impl FilterButton {
    pub fn info(&self) -> &ValueInfo {
        match self {
            FilterButton::Value { info, .. } | FilterButton::Shortcut { info, .. } => info,
        }
    }

    pub fn enabled(&self) -> bool {
        match self {
            FilterButton::Value { enabled, .. } | FilterButton::Shortcut { enabled, .. } => {
                *enabled
            }
        }
    }
}

/// One row of the filter panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterRow {
    pub category: Category,
    /// Text rows are drawn as labelled buttons instead of icons.
    pub text: bool,
    pub buttons: Vec<FilterButton>,
}

/// Builds the filter panel rows from the current state, in drawing order.
pub fn filter_panel(state: &FilterState) -> Vec<FilterRow> {
    Category::iter()
        .map(|category| {
            let values = category.keys().into_iter().map(|key| {
                let info = key.info();
                FilterButton::Value {
                    key,
                    info,
                    enabled: state.is_enabled(key).unwrap_or(false),
                    tooltip: category.tooltip(&info),
                }
            });
            let shortcuts = category
                .shortcuts()
                .filter(|shortcut| shortcut.has_button())
                .map(|shortcut| FilterButton::Shortcut {
                    shortcut,
                    info: shortcut.info(),
                    enabled: state.shortcut_enabled(shortcut),
                });
            FilterRow {
                category,
                text: category.is_text(),
                buttons: values.chain(shortcuts).collect(),
            }
        })
        .collect()
}
