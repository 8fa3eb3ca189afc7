use gx_core::{CharacterRecord, CharacterTable};
use gx_source::{RawEntry, UcdDocument};

use crate::blocks::BlockIndex;
use crate::builder::{RecordOutcome, build_record};
use crate::error::IngestError;

/// Options du pilote.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Debug truncation: stop at the first code point greater than this one.
    /// A halted run reports `completed == false` and must not be persisted.
    pub halt_after: Option<u32>,
}

/// Result of one pipeline run.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    /// Texte `<description>` du document, ex. `"Unicode 15.0.0"`.
    pub description: Option<String>,
    /// Index des blocs, trié.
    pub blocks: BlockIndex,
    /// Records in file order, indexed by code point.
    pub table: CharacterTable,
    /// `false` only when the truncation hook stopped the run.
    pub completed: bool,
    /// Entrées à usage privé ignorées.
    pub skipped: usize,
}

impl PipelineOutput {
    /// Records in the order first encountered in the source.
    #[must_use]
    pub fn records_in_order(&self) -> &[CharacterRecord] {
        self.table.records()
    }

    /// Lookup view keyed by code point.
    #[must_use]
    pub fn records_by_code_point(&self) -> &CharacterTable {
        &self.table
    }
}

/// Exécute le pipeline sur un document UCD.
///
/// Construit l'index des blocs d'abord, puis parcourt les entrées du
/// répertoire dans l'ordre du fichier. Seules les entrées `<char>` sont
/// traitées.
///
/// # Errors
/// `IngestError::EmptyBlockIndex` if the document has no block, or the first
/// fatal [`IngestError`] raised by a character entry.
///
/// # Example
/// ```
/// use gx_ingest::{run, PipelineOptions};
/// use gx_source::parse_document;
///
/// let doc = parse_document(r#"<ucd xmlns="http://www.unicode.org/ns/2003/ucd/1.0">
///   <repertoire>
///     <char cp="0041" age="1.1" na="LATIN CAPITAL LETTER A" na1="" blk="ASCII"/>
///   </repertoire>
///   <blocks><block first-cp="0000" last-cp="007F" name="Basic Latin"/></blocks>
/// </ucd>"#).unwrap();
///
/// let output = run(&doc, &PipelineOptions::default()).unwrap();
/// assert!(output.completed);
/// assert_eq!(output.table.get("U+0041").unwrap().block_name(), "Basic Latin");
/// ```
pub fn run(doc: &UcdDocument, options: &PipelineOptions) -> Result<PipelineOutput, IngestError> {
    let blocks = BlockIndex::build(&doc.blocks)?;
    if blocks.is_empty() {
        return Err(IngestError::EmptyBlockIndex);
    }
    log::info!("Nombre de blocs : {}", blocks.len());

    let mut table = CharacterTable::new();
    let mut completed = true;
    let mut skipped = 0usize;

    for entry in &doc.entries {
        let RawEntry::Char(raw) = entry else {
            continue;
        };

        match build_record(raw, &blocks, options.halt_after)? {
            RecordOutcome::Record(record) => {
                log::debug!("Caractère : {record}");
                if let Some(previous) = table.insert(record) {
                    log::warn!(
                        "{} présent deux fois, la dernière entrée remplace la première",
                        previous.prefixed_code_point()
                    );
                }
            }
            RecordOutcome::SkipPrivateUse => skipped += 1,
            RecordOutcome::Halt(value) => {
                log::warn!("Traitement interrompu à U+{value:04X} (halt_after)");
                completed = false;
                break;
            }
        }
    }

    log::info!(
        "Traitement terminé : {} caractères, {} entrées à usage privé ignorées",
        table.len(),
        skipped
    );

    Ok(PipelineOutput {
        description: doc.description.clone(),
        blocks,
        table,
        completed,
        skipped,
    })
}
