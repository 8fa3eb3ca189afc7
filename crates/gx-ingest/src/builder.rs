use gx_core::CharacterRecord;
use gx_core::record::parse_code_point;
use gx_source::RawChar;

use crate::aliases::collect_aliases;
use crate::blocks::BlockIndex;
use crate::error::IngestError;
use crate::names::{NameAttributes, SPECIAL_NAMES, resolve_name};

/// Substring of the `blk` attribute marking private-use areas
/// (`PUA`, `Sup_PUA_A`, `Sup_PUA_B`).
pub const PRIVATE_USE_MARKER: &str = "PUA";

/// Issue non fatale du traitement d'une entrée `<char>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Record complet.
    Record(CharacterRecord),
    /// Attribut absent dans une zone à usage privé : entrée ignorée.
    SkipPrivateUse,
    /// Le code point dépasse la borne de troncature : arrêt demandé.
    Halt(u32),
}

/// Build the record of one `<char>` entry.
///
/// A missing attribute on an entry whose `blk` contains `"PUA"` yields
/// [`RecordOutcome::SkipPrivateUse`]; anywhere else it is fatal.
///
/// # Errors
/// Any [`IngestError`]: unresolvable name, no containing block, missing
/// attribute outside private use, malformed code point.
///
/// # Example
/// ```
/// use gx_core::Block;
/// use gx_ingest::builder::{build_record, RecordOutcome};
/// use gx_ingest::BlockIndex;
/// use gx_source::RawChar;
///
/// let index = BlockIndex::from_blocks(vec![Block::new(0, 0x7F, "Basic Latin").unwrap()]);
/// let raw = RawChar {
///     cp: Some("0041".into()),
///     na: Some("LATIN CAPITAL LETTER A".into()),
///     blk: Some("ASCII".into()),
///     ..Default::default()
/// };
/// let RecordOutcome::Record(rec) = build_record(&raw, &index, None).unwrap() else { panic!() };
/// assert_eq!(rec.block_name(), "Basic Latin");
/// ```
pub fn build_record(
    raw: &RawChar,
    index: &BlockIndex,
    halt_after: Option<u32>,
) -> Result<RecordOutcome, IngestError> {
    match try_build(raw, index, halt_after) {
        Err(err @ IngestError::MissingAttribute { .. }) => {
            if raw
                .blk
                .as_deref()
                .is_some_and(|blk| blk.contains(PRIVATE_USE_MARKER))
            {
                log::trace!("Entrée à usage privé ignorée : {err}");
                Ok(RecordOutcome::SkipPrivateUse)
            } else {
                Err(err)
            }
        }
        other => other,
    }
}

fn try_build(
    raw: &RawChar,
    index: &BlockIndex,
    halt_after: Option<u32>,
) -> Result<RecordOutcome, IngestError> {
    let code_point = raw.cp.as_deref().ok_or(IngestError::MissingAttribute {
        attribute: "cp",
        code_point: None,
    })?;
    let value = parse_code_point(code_point)?;

    if halt_after.is_some_and(|limit| value > limit) {
        return Ok(RecordOutcome::Halt(value));
    }

    let attrs = NameAttributes {
        primary: raw.na.as_deref(),
        legacy: raw.na1.as_deref(),
        age: raw.age.as_deref(),
    };
    let name = resolve_name(code_point, &attrs, SPECIAL_NAMES)?;
    let block = index.lookup(value)?;
    let aliases = collect_aliases(code_point, &raw.aliases)?;

    let record = CharacterRecord::new(code_point, name, block.name(), aliases)?;
    Ok(RecordOutcome::Record(record))
}
