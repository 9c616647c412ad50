//! Row-store oracle.
//!
//! Game data arrives as named sheets of rows keyed by integer id. Each row is
//! a bag of typed scalar cells addressed by column name.
use std::collections::BTreeMap;

use crate::error::{DexError, ErrorSeverity};

/// Integer key of a row within its sheet.
pub type RowId = u32;

/// A single scalar cell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl Cell {
    const fn kind(&self) -> &'static str {
        match self {
            Cell::Str(_) => "string",
            Cell::Int(_) => "integer",
            Cell::Bool(_) => "boolean",
        }
    }
}

/// Typed column access failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("column '{column}' is missing")]
    MissingColumn { column: String },

    #[error("column '{column}' holds a {found}, expected a {expected}")]
    TypeMismatch {
        column: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("column '{column}' value {value} is out of range")]
    OutOfRange { column: String, value: i64 },
}

impl DexError for RowError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            RowError::MissingColumn { .. } => "ROW_MISSING_COLUMN",
            RowError::TypeMismatch { .. } => "ROW_TYPE_MISMATCH",
            RowError::OutOfRange { .. } => "ROW_OUT_OF_RANGE",
        }
    }
}

/// One raw row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Row {
    columns: BTreeMap<String, Cell>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cell (builder pattern).
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, cell: Cell) -> Self {
        self.insert(column, cell);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, cell: Cell) {
        self.columns.insert(column.into(), cell);
    }

    fn cell(&self, column: &str) -> Result<&Cell, RowError> {
        self.columns
            .get(column)
            .ok_or_else(|| RowError::MissingColumn {
                column: column.to_owned(),
            })
    }

    fn mismatch(column: &str, expected: &'static str, found: &Cell) -> RowError {
        RowError::TypeMismatch {
            column: column.to_owned(),
            expected,
            found: found.kind(),
        }
    }

    pub fn string(&self, column: &str) -> Result<&str, RowError> {
        match self.cell(column)? {
            Cell::Str(value) => Ok(value),
            other => Err(Self::mismatch(column, "string", other)),
        }
    }

    /// Raw bytes of a string cell, markup included.
    pub fn bytes(&self, column: &str) -> Result<&[u8], RowError> {
        self.string(column).map(str::as_bytes)
    }

    pub fn int(&self, column: &str) -> Result<i64, RowError> {
        match self.cell(column)? {
            Cell::Int(value) => Ok(*value),
            other => Err(Self::mismatch(column, "integer", other)),
        }
    }

    /// Integer cell narrowed to `T`.
    pub fn int_as<T: TryFrom<i64>>(&self, column: &str) -> Result<T, RowError> {
        let value = self.int(column)?;
        T::try_from(value).map_err(|_| RowError::OutOfRange {
            column: column.to_owned(),
            value,
        })
    }

    pub fn bool(&self, column: &str) -> Result<bool, RowError> {
        match self.cell(column)? {
            Cell::Bool(value) => Ok(*value),
            other => Err(Self::mismatch(column, "boolean", other)),
        }
    }
}

/// Read-only access to the raw game data sheets.
pub trait RowStore {
    /// Looks up one row of a sheet.
    fn row(&self, sheet: &str, id: RowId) -> Option<&Row>;

    /// All row ids of a sheet in ascending order. Unknown sheets are empty.
    fn primary_ids(&self, sheet: &str) -> Vec<RowId>;
}
