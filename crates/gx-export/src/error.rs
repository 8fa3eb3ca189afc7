use std::path::PathBuf;

use gx_core::CoreError;
use gx_ingest::ValidationError;
use thiserror::Error;

/// Errors originating from the export module.
#[derive(Error, Debug)]
pub enum ExportError {
    /// JSON encoding or decoding failed.
    #[error("JSON invalide : {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing the artifact failed.
    #[error("Erreur d'E/S sur {path}")]
    Io {
        /// Artifact path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An artifact entry violates the record invariants.
    #[error("Entrée n°{index} invalide : {source}")]
    InvalidRecord {
        /// Position in the JSON array.
        index: usize,
        /// Rejection reason.
        #[source]
        source: CoreError,
    },

    /// The pipeline run was halted early; its output is never persisted.
    #[error("Traitement incomplet : l'artefact n'est pas écrit")]
    Incomplete,

    /// Canary validation failed; nothing is persisted.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
