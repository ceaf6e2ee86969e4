use std::path::PathBuf;

use clap::ArgMatches;
use colored::*;
use crate::cli_context::CliContext;
use crate::config::{config_path, load_config};
use crate::constants::EXPORT_DIR_ENV;
use crate::error::{ErrorContext, SmelResult};

pub fn handle_config(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_config_impl(matches).map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

fn handle_config_impl(matches: &ArgMatches) -> SmelResult<()> {
    let mut context = CliContext::new();

    if let Some(dir) = matches.get_one::<String>("export-dir") {
        context
            .set_export_dir(PathBuf::from(dir))
            .context("Failed to save export directory")?;
        println!("{} {}", "✅".green(), "Diretório de exportação salvo!".green().bold());
        println!("{}: {}", "Destino".bold(), dir);
    } else if matches.get_flag("show") {
        let config = load_config();
        println!("{}: {}", "Arquivo".bold(), config_path()?.display());
        match config.export_dir {
            Some(dir) => println!("{}: {}", "export_dir".bold(), dir),
            None => println!("{}: {}", "export_dir".bold(), "(não definido)".dimmed()),
        }
        if std::env::var(EXPORT_DIR_ENV).is_ok() {
            println!("{}", format!("{} está definido e tem precedência.", EXPORT_DIR_ENV).yellow());
        }
        println!("{}: {}", "Em uso".bold(), context.export_dir().display());
    } else {
        println!("Uso: smel config --export-dir <DIR> ou smel config --show");
    }

    Ok(())
}
