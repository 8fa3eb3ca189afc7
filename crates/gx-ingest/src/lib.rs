//! Pipeline d'ingestion UCD : index des blocs, résolution des noms, alias,
//! construction des records, pilote et validation.
//!
//! Data flows one way: raw blocks → [`BlockIndex`], then for each raw
//! `<char>` entry → [`CharacterRecord`](gx_core::CharacterRecord) → table →
//! [`validate`].

pub mod aliases;
pub mod blocks;
pub mod builder;
pub mod error;
pub mod names;
pub mod pipeline;
pub mod validate;

pub use blocks::BlockIndex;
pub use builder::RecordOutcome;
pub use error::{IngestError, ValidationError};
pub use pipeline::{PipelineOptions, PipelineOutput, run};
pub use validate::validate;
