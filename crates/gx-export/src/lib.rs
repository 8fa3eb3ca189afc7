//! Artefact JSON : sérialisation, persistance conditionnée à la validation,
//! et chargement côté consommateur.

pub mod error;
pub mod json;
pub mod store;

pub use error::ExportError;
pub use json::{OutputStyle, deserialize, serialize};
pub use store::{load, persist};
