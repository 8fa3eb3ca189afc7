//! Types, configuration et traits partagés de glyphdex.
//!
//! This crate holds the character model shared across the workspace:
//! blocks, resolved character records, the ordered lookup table, and the
//! matcher contract used for fuzzy search.

pub mod block;
pub mod config;
pub mod error;
pub mod record;
pub mod search;
pub mod table;
pub mod traits;

pub use block::Block;
pub use config::GlyphdexConfig;
pub use error::CoreError;
pub use record::CharacterRecord;
pub use table::CharacterTable;
