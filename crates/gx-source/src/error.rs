use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from the source module.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The XML file could not be read.
    #[error("Impossible de lire {path}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Document is not well-formed XML.
    #[error("XML invalide : {0}")]
    Xml(#[from] roxmltree::Error),

    /// A required top-level section (`repertoire`, `blocks`) is absent.
    #[error("Section UCD manquante : <{0}>")]
    MissingSection(&'static str),

    /// A `<block>` entry lacks a required attribute.
    #[error("Attribut `{attribute}` manquant sur le bloc n°{index}")]
    MissingBlockAttribute {
        /// Attribute name.
        attribute: &'static str,
        /// Position of the block entry in the section.
        index: usize,
    },
}
