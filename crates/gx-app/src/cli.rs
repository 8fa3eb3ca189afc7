use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// glyphdex : ingestion et recherche dans l'Unicode Character Database.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fichier de configuration TOML. Défaut : glyphdex.toml.
    #[arg(short, long, default_value = "glyphdex.toml", global = true)]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lire le UCD XML, valider et écrire l'artefact JSON.
    Generate {
        /// UCD XML source (remplace `ingest.input`).
        #[arg(long)]
        input: Option<PathBuf>,

        /// Artefact JSON (remplace `ingest.output`).
        #[arg(long)]
        output: Option<PathBuf>,

        /// Sortie indentée.
        #[arg(long, default_value_t = false)]
        pretty: bool,

        /// Debug : s'arrêter après ce code point (hex, ex. 2FFF). Rien n'est écrit.
        #[arg(long, value_parser = parse_hex_code_point)]
        halt_after: Option<u32>,
    },

    /// Valider un artefact existant contre les canaris.
    Validate {
        /// Artefact à contrôler. Défaut : `ingest.output`.
        artifact: Option<PathBuf>,
    },

    /// Afficher un caractère : `0041`, `U+0041` ou le caractère lui-même.
    Lookup {
        query: String,
    },

    /// Convertir un texte en liste de code points.
    Convert {
        text: String,
    },

    /// Recherche floue par nom, alias ou code point.
    Search {
        query: String,

        /// Nombre maximal de résultats (remplace `search.limit`).
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Parse `2FFF`, `0x2FFF` or `U+2FFF`.
fn parse_hex_code_point(raw: &str) -> Result<u32, String> {
    let digits = raw
        .strip_prefix("U+")
        .or_else(|| raw.strip_prefix("u+"))
        .or_else(|| raw.strip_prefix("0x"))
        .unwrap_or(raw);
    u32::from_str_radix(digits, 16).map_err(|e| format!("code point hexadécimal invalide '{raw}' : {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms() {
        assert_eq!(parse_hex_code_point("2FFF"), Ok(0x2FFF));
        assert_eq!(parse_hex_code_point("U+00b7"), Ok(0xB7));
        assert_eq!(parse_hex_code_point("0x41"), Ok(0x41));
        assert!(parse_hex_code_point("zz").is_err());
    }

    #[test]
    fn generate_flags() {
        let cli = Cli::parse_from(["glyphdex", "generate", "--pretty", "--halt-after", "7F"]);
        match cli.command {
            Command::Generate {
                pretty, halt_after, ..
            } => {
                assert!(pretty);
                assert_eq!(halt_after, Some(0x7F));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn global_config_after_subcommand() {
        let cli = Cli::parse_from(["glyphdex", "search", "em dash", "--config", "x.toml", "-l", "3"]);
        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert!(matches!(cli.command, Command::Search { limit: Some(3), .. }));
    }
}
