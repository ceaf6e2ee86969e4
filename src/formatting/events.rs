use colored::*;

use crate::constants::{CSV_FILE_NAME, CSV_MIME_TYPE, XLSX_FILE_NAME, XLSX_MIME_TYPE};
use crate::error::SmelResult;
use crate::export::ExportCapabilities;
use crate::models::{Category, Event};
use super::utils::pad;

pub fn format_category(category: Category) -> ColoredString {
    match category {
        Category::General => category.label().normal(),
        Category::School => category.label().cyan(),
        Category::Adult => category.label().yellow(),
        Category::Child => category.label().green(),
        Category::Popular => category.label().magenta(),
    }
}

pub fn print_events(events: &[Event], format: &str) -> SmelResult<()> {
    if events.is_empty() {
        println!("{}", "Nenhum evento cadastrado.".dimmed());
        return Ok(());
    }

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(events)?);
        }
        _ => {
            println!("{}", "─".repeat(96).dimmed());
            println!(
                "{} {} {} {} {}",
                pad("Id", 4).bold(),
                pad("Nome", 36).bold(),
                pad("Local", 24).bold(),
                pad("Data", 12).bold(),
                "Categoria".bold()
            );
            println!("{}", "─".repeat(96).dimmed());

            for event in events {
                println!(
                    "{} {} {} {} {}",
                    pad(&event.id.to_string(), 4).blue(),
                    pad(&event.name, 36),
                    pad(&event.venue, 24).dimmed(),
                    pad(&event.date, 12),
                    format_category(event.category)
                );
            }
            println!("{}", "─".repeat(96).dimmed());
        }
    }

    Ok(())
}

pub fn print_capabilities(capabilities: &ExportCapabilities) {
    let status = |available: bool| {
        if available {
            "disponível".green().bold()
        } else {
            "indisponível".red()
        }
    };

    println!("{}", "Formatos de exportação".bold());
    println!("  {}  {} {} ({})", status(capabilities.csv), "CSV ".bold(), CSV_FILE_NAME, CSV_MIME_TYPE.dimmed());
    println!("  {}  {} {} ({})", status(capabilities.spreadsheet), "XLSX".bold(), XLSX_FILE_NAME, XLSX_MIME_TYPE.dimmed());

    if !capabilities.spreadsheet {
        println!("\n{}", "Compile com a feature 'xlsx' se quiser exportar XLSX (opcional).".dimmed());
    }
}
