//! Quick bi-weekly calculator command
//!
//! Assumes a car commute and estimates maintenance with a flat per-mile rate
//! from the engine config.

use clap::Args;

use crate::config::Settings;
use crate::display::format_quick_summary;
use crate::engine::{Calculator, WageInputs};
use crate::error::TrueWageResult;
use crate::models::{CommuteProfile, PayFrequency, PayInfo, TransportMode, WorkSchedule};
use crate::services::RecordService;
use crate::storage::Storage;

use super::parse_money;

/// Arguments for the quick calculator
#[derive(Args, Debug, Clone)]
pub struct QuickArgs {
    /// Bi-weekly take-home paycheck
    #[arg(long)]
    pub pay: String,

    /// One-way commute time in minutes
    #[arg(long)]
    pub minutes: f64,

    /// One-way commute distance in miles
    #[arg(long)]
    pub distance: f64,

    /// Car fuel economy (miles per gallon)
    #[arg(long)]
    pub mpg: f64,

    /// Gas price per gallon
    #[arg(long)]
    pub gas_price: f64,

    /// Paid work hours per day
    #[arg(long, default_value_t = 8.0)]
    pub hours: f64,

    /// Work days per week
    #[arg(long, default_value_t = 5)]
    pub days: u8,

    /// Name shown in the summary
    #[arg(long, default_value = "you")]
    pub name: String,

    /// Save the calculation under this name
    #[arg(long)]
    pub save: Option<String>,
}

/// Build the inputs a quick calculation uses
pub fn quick_inputs(args: &QuickArgs, maintenance_per_mile: f64) -> TrueWageResult<WageInputs> {
    let inputs = WageInputs {
        pay: PayInfo::new(parse_money(&args.pay, "pay amount")?, PayFrequency::Biweekly),
        schedule: WorkSchedule::new(args.hours, args.days),
        commute: CommuteProfile::new(
            args.minutes,
            args.distance,
            TransportMode::Car {
                mpg: args.mpg,
                gas_price_per_gallon: args.gas_price,
                maintenance_per_mile,
            },
        ),
    };
    inputs.validate()?;
    Ok(inputs)
}

/// Handle the quick command
pub fn handle_quick_command(storage: &Storage, settings: &Settings, args: QuickArgs) -> TrueWageResult<()> {
    let config = &settings.engine;
    let inputs = quick_inputs(&args, config.quick_maintenance_per_mile)?;
    let calculation = Calculator::new(config).calculate(&inputs)?;

    println!(
        "Using fuel + {}{:.2}/mile for maintenance/depreciation",
        settings.currency_symbol, config.quick_maintenance_per_mile
    );
    println!();
    print!(
        "{}",
        format_quick_summary(&args.name, &calculation, &settings.currency_symbol)
    );

    if let Some(name) = args.save.as_deref() {
        let record = RecordService::new(storage).save_calculation(name, &inputs, &calculation, None)?;
        println!();
        println!("Saved record: {} ({})", record.name, record.id);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::models::Money;

    fn args() -> QuickArgs {
        QuickArgs {
            pay: "2000".into(),
            minutes: 30.0,
            distance: 10.0,
            mpg: 25.0,
            gas_price: 3.5,
            hours: 8.0,
            days: 5,
            name: "you".into(),
            save: None,
        }
    }

    #[test]
    fn test_quick_uses_flat_maintenance() {
        let config = EngineConfig::default();
        let inputs = quick_inputs(&args(), config.quick_maintenance_per_mile).unwrap();
        let calc = Calculator::new(&config).calculate(&inputs).unwrap();

        // fuel 2.80 + 20 miles * 0.30 = 8.80 per day
        assert_eq!(calc.daily.commute_cost, Money::from_cents(880));
        assert_eq!(calc.paycheck.commute_cost, Money::from_dollars(88));
        assert_eq!(inputs.pay.frequency, PayFrequency::Biweekly);
    }

    #[test]
    fn test_quick_rejects_zero_pay() {
        let mut bad = args();
        bad.pay = "0".into();
        assert!(quick_inputs(&bad, 0.30).unwrap_err().is_validation());
    }
}
