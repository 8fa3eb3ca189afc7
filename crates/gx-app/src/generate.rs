use std::fmt::Write as _;

use anyhow::{Context, Result};
use gx_core::GlyphdexConfig;
use gx_export::OutputStyle;
use gx_ingest::{PipelineOptions, PipelineOutput};

/// Lire le UCD, exécuter le pipeline, afficher le rapport puis persister.
///
/// A halted run prints its report but writes nothing.
pub fn run_generate(config: &GlyphdexConfig, halt_after: Option<u32>) -> Result<()> {
    let doc = gx_source::read_document(&config.input)
        .with_context(|| format!("Lecture du UCD impossible : {}", config.input.display()))?;
    let output = gx_ingest::run(&doc, &PipelineOptions { halt_after })
        .with_context(|| format!("Échec du traitement de {}", config.input.display()))?;

    print!("{}", report(&output));

    if !output.completed {
        log::warn!("Exécution tronquée, {} n'est pas modifié.", config.output.display());
        println!("Traitement interrompu : artefact non écrit.");
        return Ok(());
    }

    gx_export::persist(&config.output, &output, output_style(config))
        .with_context(|| format!("Écriture de {} impossible", config.output.display()))?;
    println!("Artefact écrit : {}", config.output.display());
    Ok(())
}

fn output_style(config: &GlyphdexConfig) -> OutputStyle {
    if config.pretty {
        OutputStyle::Pretty {
            indent: config.indent,
        }
    } else {
        OutputStyle::Compact
    }
}

/// Rapport de fin d'exécution.
#[must_use]
pub fn report(output: &PipelineOutput) -> String {
    let mut s = String::new();
    if let Some(ref description) = output.description {
        let _ = writeln!(s, "{description}");
    }
    let blocks = output.blocks.blocks();
    let _ = writeln!(s, "Nombre de blocs : {}", blocks.len());
    if let (Some(first), Some(last)) = (blocks.first(), blocks.last()) {
        let _ = writeln!(s, "Premier bloc : {first}");
        let _ = writeln!(s, "Dernier bloc : {last}");
    }
    let count = output.table.len();
    let _ = writeln!(s, "Nombre de caractères : {count} (0x{count:X})");
    if let (Some(first), Some(last)) = (output.table.first(), output.table.last()) {
        let _ = writeln!(s, "Premier caractère : {first}");
        let _ = writeln!(s, "Dernier caractère : {last}");
    }
    if output.skipped > 0 {
        let _ = writeln!(s, "Entrées à usage privé ignorées : {}", output.skipped);
    }
    s
}
