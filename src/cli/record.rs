//! Saved record commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_projection_list, format_record_details, format_record_list};
use crate::error::TrueWageResult;
use crate::services::RecordService;
use crate::storage::Storage;

/// Record subcommands
#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// List saved records
    List,
    /// Show a record and its projections
    Show {
        /// Record name or ID
        record: String,
    },
    /// Delete a record and its projections
    Delete {
        /// Record name or ID
        record: String,
    },
    /// List the projections saved against a record
    Projections {
        /// Record name or ID
        record: String,
    },
}

/// Handle a record command
pub fn handle_record_command(
    storage: &Storage,
    settings: &Settings,
    cmd: RecordCommands,
) -> TrueWageResult<()> {
    let service = RecordService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        RecordCommands::List => {
            let records = service.list()?;
            println!("{}", format_record_list(&records, symbol));
        }

        RecordCommands::Show { record } => {
            let found = service.require(&record)?;
            let projections = service.projections_for(found.id)?;
            print!("{}", format_record_details(&found, &projections, symbol));
        }

        RecordCommands::Delete { record } => {
            let found = service.require(&record)?;
            let deleted = service.delete(found.id)?;
            println!("Deleted record: {} ({})", deleted.name, deleted.id);
        }

        RecordCommands::Projections { record } => {
            let found = service.require(&record)?;
            let projections = service.projections_for(found.id)?;
            println!("Projections for {}:", found.name);
            println!("{}", format_projection_list(&projections, symbol));
        }
    }

    Ok(())
}
