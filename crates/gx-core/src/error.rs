use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Code point string is not 4 to 6 uppercase hex digits, or is out of range.
    #[error("Code point invalide : `{0}`")]
    InvalidCodePoint(String),

    /// A required record field is empty.
    #[error("Champ vide `{field}` pour U+{code_point}")]
    EmptyField {
        /// Field name (`code_point`, `name`, `block_name`).
        field: &'static str,
        /// Code point of the offending record, possibly empty.
        code_point: String,
    },

    /// Block range whose first code point is after its last one.
    #[error("Bloc invalide `{name}` : U+{first:04X} > U+{last:04X}")]
    InvalidBlockRange {
        /// Block name.
        name: String,
        /// First code point.
        first: u32,
        /// Last code point.
        last: u32,
    },

    /// Requested code point or character is not present in the table.
    #[error("Caractère introuvable : {key}")]
    NotFound {
        /// The key as requested by the caller.
        key: String,
    },
}
