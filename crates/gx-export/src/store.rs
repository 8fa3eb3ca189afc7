use std::io::Write;
use std::path::Path;

use gx_core::{CharacterRecord, CharacterTable};
use gx_ingest::PipelineOutput;
use tempfile::NamedTempFile;

use crate::error::ExportError;
use crate::json::{OutputStyle, deserialize, serialize};

/// Persiste la sortie du pipeline.
///
/// Refuse une exécution interrompue, valide les canaris, puis écrit de
/// façon atomique : fichier temporaire dans le répertoire cible, puis
/// renommage. Le répertoire parent est créé au besoin. Un fichier existant
/// n'est jamais laissé à moitié écrit.
///
/// # Errors
/// `ExportError::Incomplete` if the run was halted, `ExportError::Validation`
/// on a canary failure, `ExportError::Io` on any filesystem error.
pub fn persist(path: &Path, output: &PipelineOutput, style: OutputStyle) -> Result<(), ExportError> {
    if !output.completed {
        return Err(ExportError::Incomplete);
    }
    gx_ingest::validate(&output.table)?;
    write_atomic(path, output.records_in_order(), style)?;
    log::info!("{} caractères écrits dans {}", output.table.len(), path.display());
    Ok(())
}

/// Charge un artefact depuis le disque.
///
/// # Errors
/// `ExportError::Io` if the file cannot be read, otherwise see
/// [`deserialize`].
pub fn load(path: &Path) -> Result<CharacterTable, ExportError> {
    let bytes = std::fs::read(path).map_err(|source| io_error(path, source))?;
    let table = deserialize(&bytes)?;
    log::debug!("{} caractères chargés depuis {}", table.len(), path.display());
    Ok(table)
}

fn write_atomic(path: &Path, records: &[CharacterRecord], style: OutputStyle) -> Result<(), ExportError> {
    let bytes = serialize(records, style)?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|source| io_error(dir, source))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| io_error(dir, source))?;
    tmp.write_all(&bytes).map_err(|source| io_error(tmp.path(), source))?;
    tmp.as_file().sync_all().map_err(|source| io_error(tmp.path(), source))?;
    tmp.persist(path).map_err(|e| io_error(path, e.error))?;
    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.to_path_buf(),
        source,
    }
}
