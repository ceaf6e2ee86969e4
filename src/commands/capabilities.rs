use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::formatting::print_capabilities;

pub fn handle_capabilities(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load();
    print_capabilities(&context.capabilities());
    println!("\nDestino das exportações: {}", context.export_dir().display());
    Ok(())
}
