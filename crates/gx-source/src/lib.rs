//! Lecture du document UCD XML (`ucd.all.flat.xml`) en entrées brutes.

pub mod error;
pub mod raw;
pub mod xml;

pub use error::SourceError;
pub use raw::{RawAlias, RawBlock, RawChar, RawEntry, UcdDocument};
pub use xml::{parse_document, read_document};
