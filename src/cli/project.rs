//! Affordability projection command

use clap::{ArgGroup, Args};

use crate::config::Settings;
use crate::display::{format_advisories, format_projection};
use crate::engine::Calculator;
use crate::error::{TrueWageError, TrueWageResult};
use crate::models::Cadence;
use crate::services::RecordService;
use crate::storage::Storage;

use super::parse_money;

/// Arguments for the project command
#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("rate").required(true).args(["wage", "record"])))]
pub struct ProjectArgs {
    /// What the expense is
    pub name: String,

    /// What it costs
    #[arg(long)]
    pub cost: String,

    /// Hourly wage to measure the cost in
    #[arg(long)]
    pub wage: Option<f64>,

    /// Use the true wage of a saved record (name or ID)
    #[arg(long)]
    pub record: Option<String>,

    /// How often the cost recurs: one-time, monthly, annual
    #[arg(long, default_value = "one-time")]
    pub cadence: String,

    /// Save the projection against the record
    #[arg(long, requires = "record")]
    pub save: bool,
}

/// Handle the project command
pub fn handle_project_command(
    storage: &Storage,
    settings: &Settings,
    args: ProjectArgs,
) -> TrueWageResult<()> {
    let service = RecordService::new(storage);
    let cost = parse_money(&args.cost, "cost")?;
    if cost.is_negative() {
        return Err(TrueWageError::Validation("Cost cannot be negative".into()));
    }
    let cadence = Cadence::from_tag(&args.cadence).ok_or_else(|| {
        TrueWageError::Validation(format!(
            "Invalid cadence: '{}'. Valid cadences: one-time, monthly, annual",
            args.cadence
        ))
    })?;

    let record = match args.record.as_deref() {
        Some(identifier) => Some(service.require(identifier)?),
        None => None,
    };
    let wage = match (&record, args.wage) {
        (Some(record), _) => record.true_wage,
        (None, Some(wage)) => wage,
        (None, None) => {
            return Err(TrueWageError::Validation(
                "Either --wage or --record is required".into(),
            ))
        }
    };

    let projected = Calculator::new(&settings.engine).project(args.name.trim(), wage, cost, cadence);

    print!(
        "{}",
        format_projection(&projected.projection, &settings.currency_symbol)
    );
    print!("{}", format_advisories(&projected.advisories));

    if args.save {
        if let Some(record) = record {
            let stored = service.add_projection(record.id, projected.projection)?;
            println!();
            println!("Saved projection {} to record: {}", stored.id, record.name);
        }
    }

    Ok(())
}
