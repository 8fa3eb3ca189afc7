use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default number of search hits.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Configuration complète de glyphdex.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use gx_core::config::GlyphdexConfig;
/// let config = GlyphdexConfig::default();
/// assert_eq!(config.search_limit, 10);
/// assert!(!config.pretty);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct GlyphdexConfig {
    // === Ingestion ===
    /// Fichier UCD XML source (`ucd.all.flat.xml`).
    pub input: PathBuf,
    /// Artefact JSON produit puis chargé.
    pub output: PathBuf,
    /// Sortie indentée plutôt que compacte.
    pub pretty: bool,
    /// Indentation de la sortie indentée [1, 8].
    pub indent: usize,

    // === Recherche ===
    /// Nombre maximal de résultats. 0 est permis.
    pub search_limit: usize,
    /// Score minimal retenu [0, 100].
    pub score_cutoff: u8,
}

impl Default for GlyphdexConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("original_data/ucd.all.flat.xml"),
            output: PathBuf::from("data/unicode_data.json"),
            pretty: false,
            indent: 2,
            search_limit: DEFAULT_SEARCH_LIMIT,
            score_cutoff: 1,
        }
    }
}

impl GlyphdexConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.indent = self.indent.clamp(1, 8);
        self.score_cutoff = self.score_cutoff.min(100);
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    ingest: Option<IngestSection>,
    search: Option<SearchSection>,
}

/// Ingest section, all fields optional for partial override.
#[derive(Deserialize)]
struct IngestSection {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    pretty: Option<bool>,
    indent: Option<usize>,
}

/// Search section. `limit` stays loosely typed: hand-edited files carry
/// strings or negative numbers, both of which fall back to the default.
#[derive(Deserialize)]
struct SearchSection {
    limit: Option<toml::Value>,
    score_cutoff: Option<u8>,
}

/// Interprète une limite de recherche saisie à la main.
///
/// Négatif ou non numérique → [`DEFAULT_SEARCH_LIMIT`]. Zéro est accepté.
///
/// # Example
/// ```
/// use gx_core::config::parse_search_limit;
/// assert_eq!(parse_search_limit("20"), 20);
/// assert_eq!(parse_search_limit("0"), 0);
/// assert_eq!(parse_search_limit("-1"), 10);
/// assert_eq!(parse_search_limit("asdf"), 10);
/// ```
#[must_use]
pub fn parse_search_limit(raw: &str) -> usize {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
}

fn search_limit_from_value(value: &toml::Value) -> usize {
    match value {
        toml::Value::Integer(v) => usize::try_from(*v).unwrap_or(DEFAULT_SEARCH_LIMIT),
        toml::Value::String(s) => parse_search_limit(s),
        other => {
            log::warn!("search.limit invalide ({other}), utilisation du défaut.");
            DEFAULT_SEARCH_LIMIT
        }
    }
}

/// Parse a TOML document and merge it over the defaults.
///
/// # Errors
/// Returns an error if the document is not valid TOML for this schema.
pub fn parse_config(content: &str) -> Result<GlyphdexConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = GlyphdexConfig::default();

    if let Some(i) = file.ingest {
        if let Some(v) = i.input {
            config.input = v;
        }
        if let Some(v) = i.output {
            config.output = v;
        }
        if let Some(v) = i.pretty {
            config.pretty = v;
        }
        if let Some(v) = i.indent {
            config.indent = v;
        }
    }

    if let Some(s) = file.search {
        if let Some(ref v) = s.limit {
            config.search_limit = search_limit_from_value(v);
        }
        if let Some(v) = s.score_cutoff {
            config.score_cutoff = v;
        }
    }

    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use gx_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("glyphdex.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<GlyphdexConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Configuration invalide : {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(parse_config("").unwrap(), GlyphdexConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = parse_config(
            r#"
            [ingest]
            output = "out/chars.json"
            pretty = true
            "#,
        )
        .unwrap();
        assert_eq!(config.output, PathBuf::from("out/chars.json"));
        assert!(config.pretty);
        assert_eq!(config.input, GlyphdexConfig::default().input);
        assert_eq!(config.indent, 2);
    }

    #[test]
    fn weird_search_limits_fall_back() {
        let limit = |doc: &str| parse_config(doc).unwrap().search_limit;
        assert_eq!(limit("[search]\nlimit = \"asdf\""), DEFAULT_SEARCH_LIMIT);
        assert_eq!(limit("[search]\nlimit = -1"), DEFAULT_SEARCH_LIMIT);
        assert_eq!(limit("[search]\nlimit = \"-1\""), DEFAULT_SEARCH_LIMIT);
        assert_eq!(limit("[search]\nlimit = true"), DEFAULT_SEARCH_LIMIT);
        assert_eq!(limit("[search]\nlimit = 0"), 0);
        assert_eq!(limit("[search]\nlimit = \"20\""), 20);
    }

    #[test]
    fn clamps_out_of_range() {
        let config = parse_config("[ingest]\nindent = 40\n[search]\nscore_cutoff = 250").unwrap();
        assert_eq!(config.indent, 8);
        assert_eq!(config.score_cutoff, 100);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_config("[ingest\npretty = ").is_err());
        assert!(parse_config("[ingest]\npretty = \"yes\"").is_err());
    }

    #[test]
    fn load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ingest]\ninput = \"ucd.xml\"").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.input, PathBuf::from("ucd.xml"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_config(Path::new("/nonexistent/glyphdex.toml")).is_err());
    }
}
