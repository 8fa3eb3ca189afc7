use gx_core::{CharacterRecord, CharacterTable};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::ExportError;

/// Forme d'écriture de l'artefact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// Aucun espace superflu.
    #[default]
    Compact,
    /// Une clé par ligne, indentation de `indent` espaces.
    Pretty {
        /// Spaces per nesting level.
        indent: usize,
    },
}

/// Wire form of one record. Keys are kept short, the artifact holds
/// around 150k entries.
#[derive(Serialize)]
struct EntryRef<'a> {
    cp: &'a str,
    na: &'a str,
    blk: &'a str,
    #[serde(skip_serializing_if = "no_aliases")]
    als: &'a [String],
}

#[derive(Deserialize)]
struct Entry {
    cp: String,
    na: String,
    blk: String,
    #[serde(default)]
    als: Vec<String>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn no_aliases(als: &&[String]) -> bool {
    als.is_empty()
}

impl<'a> From<&'a CharacterRecord> for EntryRef<'a> {
    fn from(record: &'a CharacterRecord) -> Self {
        Self {
            cp: record.code_point(),
            na: record.name(),
            blk: record.block_name(),
            als: record.aliases(),
        }
    }
}

/// Encode les records en tableau JSON, dans l'ordre donné.
///
/// `als` est omis quand la liste d'alias est vide.
///
/// # Example
/// ```
/// use gx_core::CharacterRecord;
/// use gx_export::{serialize, OutputStyle};
///
/// let rec = CharacterRecord::new("0041", "LATIN CAPITAL LETTER A", "Basic Latin", vec![]).unwrap();
/// let bytes = serialize(&[rec], OutputStyle::Compact).unwrap();
/// assert_eq!(
///     String::from_utf8(bytes).unwrap(),
///     r#"[{"cp":"0041","na":"LATIN CAPITAL LETTER A","blk":"Basic Latin"}]"#
/// );
/// ```
pub fn serialize(records: &[CharacterRecord], style: OutputStyle) -> Result<Vec<u8>, ExportError> {
    let entries: Vec<EntryRef<'_>> = records.iter().map(EntryRef::from).collect();
    match style {
        OutputStyle::Compact => Ok(serde_json::to_vec(&entries)?),
        OutputStyle::Pretty { indent } => {
            let pad = vec![b' '; indent];
            let mut buf = Vec::new();
            let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&pad));
            entries.serialize(&mut ser)?;
            Ok(buf)
        }
    }
}

/// Décode un artefact JSON en table ordonnée.
///
/// Missing `als` means no aliases. Unknown keys are ignored. A later entry
/// for an already-seen code point replaces the earlier one.
///
/// # Errors
/// `ExportError::Json` on malformed JSON or a missing `cp`/`na`/`blk` key,
/// `ExportError::InvalidRecord` when an entry breaks a record invariant.
pub fn deserialize(bytes: &[u8]) -> Result<CharacterTable, ExportError> {
    let entries: Vec<Entry> = serde_json::from_slice(bytes)?;
    let mut table = CharacterTable::new();
    for (index, entry) in entries.into_iter().enumerate() {
        let record = CharacterRecord::new(entry.cp, entry.na, entry.blk, entry.als)
            .map_err(|source| ExportError::InvalidRecord { index, source })?;
        if let Some(old) = table.insert(record) {
            log::warn!("Entrée dupliquée {} (n°{index})", old.prefixed_code_point());
        }
    }
    Ok(table)
}
