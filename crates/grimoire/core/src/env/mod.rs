//! Traits describing the collaborators the catalog is built from.
//!
//! Oracles expose the raw game data sheets, rich text decoding, and the
//! host's unlock state. Concrete implementations live in `grimoire-content`
//! (file-backed rows, markup decoding) and in the host binary (unlocks).
mod rows;
mod text;
mod unlock;

pub use rows::{Cell, Row, RowError, RowId, RowStore};
pub use text::{RichTextDecoder, TextError};
pub use unlock::UnlockOracle;
