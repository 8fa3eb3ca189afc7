use gx_core::CoreError;
use thiserror::Error;

/// Fatal pipeline errors. Any of these aborts the run before persistence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// The blocks section produced no block at all.
    #[error("Index des blocs vide : section <blocks> absente ou vide")]
    EmptyBlockIndex,

    /// A block bound is not a hex code point.
    #[error("Borne de bloc invalide `{value}` pour `{name}`")]
    InvalidBlockBound {
        /// Block name.
        name: String,
        /// Raw attribute value.
        value: String,
    },

    /// No block contains the code point.
    #[error("Aucun bloc ne contient U+{code_point:04X}")]
    BlockNotFound {
        /// Numeric code point.
        code_point: u32,
    },

    /// No rule of the name fallback chain applies.
    #[error("Nom de caractère non géré : U+{code_point}")]
    UnhandledName {
        /// Bare code point.
        code_point: String,
    },

    /// A required `<char>` attribute is absent outside the private-use areas.
    #[error("Attribut `{attribute}` manquant (cp: {})", .code_point.as_deref().unwrap_or("?"))]
    MissingAttribute {
        /// Attribute name.
        attribute: &'static str,
        /// Code point, when the `cp` attribute itself was readable.
        code_point: Option<String>,
    },

    /// Record construction rejected the resolved values.
    #[error(transparent)]
    Record(#[from] CoreError),
}

/// Canary mismatch. Carries actual and expected values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Validation : U+{code_point} absent des données")]
    MissingRecord { code_point: String },

    #[error("Validation du nom : U+{code_point} - réel '{actual}', attendu '{expected}'")]
    NameMismatch {
        code_point: String,
        actual: String,
        expected: String,
    },

    #[error("Validation du bloc : U+{code_point} - réel '{actual}', attendu '{expected}'")]
    BlockMismatch {
        code_point: String,
        actual: String,
        expected: String,
    },

    #[error("Validation des alias : U+{code_point} - '{expected}' absent de {actual:?}")]
    AliasMissing {
        code_point: String,
        expected: String,
        actual: Vec<String>,
    },
}
