use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use gx_core::CharacterTable;
use gx_core::search::search;
use gx_core::traits::Matcher;

/// Charger l'artefact JSON.
pub fn load_table(path: &Path) -> Result<CharacterTable> {
    gx_export::load(path).with_context(|| {
        format!(
            "Artefact illisible : {}. Lancez d'abord `glyphdex generate`.",
            path.display()
        )
    })
}

/// Charger puis valider un artefact existant.
pub fn run_validate(path: &Path) -> Result<String> {
    let table = load_table(path)?;
    gx_ingest::validate(&table).with_context(|| format!("Validation échouée : {}", path.display()))?;
    Ok(format!("{} : {} caractères, canaris OK", path.display(), table.len()))
}

/// Fiche d'un caractère. `query` is a code point key or a single character.
pub fn lookup(table: &CharacterTable, query: &str) -> Result<String> {
    let mut chars = query.chars();
    let record = match (chars.next(), chars.next()) {
        (Some(c), None) => table.get_char(c)?,
        _ => table.get(query.trim())?,
    };

    let mut s = format!("{record}\n");
    if let Some(c) = record.character().filter(|c| !c.is_control()) {
        let _ = writeln!(s, "  Caractère : {c}");
    }
    if !record.aliases().is_empty() {
        let _ = writeln!(s, "  Alias : {}", record.aliases().join(", "));
    }
    Ok(s)
}

/// `U+XXXX` list followed by the annotated form.
pub fn convert(table: &CharacterTable, text: &str) -> Result<String> {
    let description = table.describe_text(text)?;
    Ok(format!("{}\n{}\n", description.code_points(), description.annotated()))
}

/// Resultats de recherche, un par ligne, meilleur score d'abord.
#[must_use]
pub fn run_search(
    table: &CharacterTable,
    query: &str,
    matcher: &dyn Matcher,
    limit: usize,
    cutoff: u8,
) -> String {
    let hits = search(table, query, matcher, limit, cutoff);
    if hits.is_empty() {
        return format!("Aucun résultat pour '{query}'\n");
    }
    hits.iter().fold(String::new(), |mut s, hit| {
        let _ = writeln!(s, "{:>3}  {}", hit.score, hit.record);
        s
    })
}
