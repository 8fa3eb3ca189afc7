use anyhow::Result;
use clap::Parser;
use gx_core::GlyphdexConfig;

pub mod cli;
pub mod generate;
pub mod matcher;
pub mod query;

use cli::Command;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config
    let mut config = resolve_config(&cli)?;

    // 4. Dispatcher
    match cli.command {
        Command::Generate {
            input,
            output,
            pretty,
            halt_after,
        } => {
            if let Some(path) = input {
                config.input = path;
            }
            if let Some(path) = output {
                config.output = path;
            }
            if pretty {
                config.pretty = true;
            }
            generate::run_generate(&config, halt_after)
        }
        Command::Validate { artifact } => {
            let path = artifact.unwrap_or(config.output);
            println!("{}", query::run_validate(&path)?);
            Ok(())
        }
        Command::Lookup { query: key } => {
            let table = query::load_table(&config.output)?;
            print!("{}", query::lookup(&table, &key)?);
            Ok(())
        }
        Command::Convert { text } => {
            let table = query::load_table(&config.output)?;
            print!("{}", query::convert(&table, &text)?);
            Ok(())
        }
        Command::Search { query: text, limit } => {
            let table = query::load_table(&config.output)?;
            let limit = limit.unwrap_or(config.search_limit);
            print!(
                "{}",
                query::run_search(&table, &text, &matcher::TokenMatcher, limit, config.score_cutoff)
            );
            Ok(())
        }
    }
}

/// Resolve config: a missing file means defaults.
fn resolve_config(cli: &cli::Cli) -> Result<GlyphdexConfig> {
    if cli.config.exists() {
        gx_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(GlyphdexConfig::default())
    }
}
