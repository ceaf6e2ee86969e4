use std::process;

use clap::{Arg, ArgMatches, Command};

use smel_conectada::cli_context::CliContext;
use smel_conectada::commands::{handle_capabilities, handle_config, handle_events};
use smel_conectada::interactive::handlers::install_panic_hook;
use smel_conectada::interactive::run_interactive_mode;
use smel_conectada::logging::{get_log_file_path, init_logging, log_error};

fn build_cli() -> Command {
    Command::new("smel")
        .about("SMEL Conectada - eventos, inscrições e exportação no terminal")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(
            Command::new("interactive")
                .about("Open the interactive interface (default)")
        )
        .subcommand(
            Command::new("events")
                .about("List the events a new session starts with")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: simple, json")
                        .value_parser(["simple", "json"])
                        .default_value("simple")
                )
        )
        .subcommand(
            Command::new("capabilities")
                .about("Show which export formats this build supports")
        )
        .subcommand(
            Command::new("config")
                .about("Configure where exports are written")
                .arg(
                    Arg::new("export-dir")
                        .long("export-dir")
                        .value_name("DIR")
                        .help("Save the export directory")
                        .required(false)
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the current configuration")
                        .action(clap::ArgAction::SetTrue)
                )
        )
}

fn handle_interactive(_matches: Option<&ArgMatches>) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load();
    install_panic_hook();
    run_interactive_mode(&mut context)?;
    Ok(())
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        None => handle_interactive(None),
        Some(("interactive", sub_matches)) => handle_interactive(Some(sub_matches)),
        Some(("events", sub_matches)) => handle_events(sub_matches),
        Some(("capabilities", sub_matches)) => handle_capabilities(sub_matches),
        Some(("config", sub_matches)) => handle_config(sub_matches),
        _ => {
            eprintln!("Unknown command. Use 'smel --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&e.to_string());
        eprintln!("Error: {}", e);
        if let Some(path) = get_log_file_path() {
            eprintln!("Log: {}", path.display());
        }
        process::exit(1);
    }
}
