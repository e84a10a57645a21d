//! Full calculator command
//!
//! Every input is given as a flag; the report goes to stdout.

use clap::{Args, ValueEnum};

use crate::config::{EngineConfig, Settings};
use crate::display::format_calculation;
use crate::engine::{irs_maintenance_rate, Calculator, WageInputs};
use crate::error::{TrueWageError, TrueWageResult};
use crate::models::{CommuteProfile, Money, PayFrequency, PayInfo, TransportMode, WorkSchedule};
use crate::services::RecordService;
use crate::storage::Storage;

use super::{parse_money, required};

/// Transport mode on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Gasoline car
    Car,
    /// Electric vehicle
    Ev,
    /// Bus, train or subway
    Transit,
    /// Bicycle
    Bike,
    /// On foot
    Walk,
}

/// Commute flags shared by the calculators
#[derive(Args, Debug, Clone)]
pub struct CommuteArgs {
    /// One-way commute time in minutes
    #[arg(long, default_value_t = 0.0)]
    pub minutes: f64,

    /// One-way commute distance in miles
    #[arg(long, default_value_t = 0.0)]
    pub distance: f64,

    /// How you get to work
    #[arg(long, value_enum, default_value = "car")]
    pub mode: ModeArg,

    /// Car fuel economy (miles per gallon)
    #[arg(long)]
    pub mpg: Option<f64>,

    /// Gas price per gallon
    #[arg(long)]
    pub gas_price: Option<f64>,

    /// EV efficiency (miles per kWh)
    #[arg(long)]
    pub miles_per_kwh: Option<f64>,

    /// Electricity price per kWh
    #[arg(long)]
    pub kwh_price: Option<f64>,

    /// Maintenance and depreciation per mile (car or EV)
    #[arg(long)]
    pub maintenance: Option<f64>,

    /// Derive car maintenance from the IRS standard mileage rate
    #[arg(long, conflicts_with = "maintenance")]
    pub irs_rate: bool,

    /// Transit fare per day, or the monthly pass price with --monthly-pass
    #[arg(long)]
    pub fare: Option<String>,

    /// The transit fare is a monthly pass
    #[arg(long)]
    pub monthly_pass: bool,

    /// One-way walking minutes to and from transit stops
    #[arg(long, default_value_t = 0.0)]
    pub walking: f64,

    /// Extra daily cost (tolls/parking, or gear for bikes and walking)
    #[arg(long)]
    pub extra: Option<String>,
}

impl CommuteArgs {
    /// Build the commute profile these flags describe
    pub fn to_profile(&self, config: &EngineConfig) -> TrueWageResult<CommuteProfile> {
        let mode = match self.mode {
            ModeArg::Car => {
                let mpg = required(self.mpg, "--mpg", "car")?;
                let gas_price = required(self.gas_price, "--gas-price", "car")?;
                let maintenance_per_mile = if self.irs_rate {
                    irs_maintenance_rate(gas_price, mpg, config)?
                } else {
                    self.maintenance.unwrap_or(0.0)
                };
                TransportMode::Car {
                    mpg,
                    gas_price_per_gallon: gas_price,
                    maintenance_per_mile,
                }
            }
            ModeArg::Ev => {
                if self.irs_rate {
                    return Err(TrueWageError::Validation(
                        "--irs-rate only applies to car commutes".into(),
                    ));
                }
                TransportMode::ElectricVehicle {
                    miles_per_kwh: required(self.miles_per_kwh, "--miles-per-kwh", "EV")?,
                    price_per_kwh: required(self.kwh_price, "--kwh-price", "EV")?,
                    maintenance_per_mile: self.maintenance.unwrap_or(0.0),
                }
            }
            ModeArg::Transit => {
                let fare = required(self.fare.as_deref(), "--fare", "transit")?;
                TransportMode::PublicTransit {
                    fare: parse_money(fare, "fare")?,
                    is_monthly_pass: self.monthly_pass,
                    walking_minutes: self.walking,
                }
            }
            ModeArg::Bike => TransportMode::Biking,
            ModeArg::Walk => TransportMode::Walking,
        };

        let extra = match self.extra.as_deref() {
            Some(extra) => parse_money(extra, "extra daily cost")?,
            None => Money::zero(),
        };

        Ok(CommuteProfile::new(self.minutes, self.distance, mode).with_extra_daily_cost(extra))
    }
}

/// Arguments for the full calculator
#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    /// Take-home paycheck amount
    #[arg(long)]
    pub pay: String,

    /// Pay frequency: daily, weekly, biweekly, semimonthly, monthly (or 1-5)
    #[arg(short, long)]
    pub frequency: Option<String>,

    /// Paid work hours per day, excluding lunch
    #[arg(long, default_value_t = 8.0)]
    pub hours: f64,

    /// Work days per week
    #[arg(long, default_value_t = 5)]
    pub days: u8,

    #[command(flatten)]
    pub commute: CommuteArgs,

    /// Save the calculation under this name
    #[arg(long)]
    pub save: Option<String>,

    /// Notes stored with a saved calculation
    #[arg(long, requires = "save")]
    pub notes: Option<String>,

    /// Print the calculation as JSON instead of a report
    #[arg(long)]
    pub json: bool,
}

/// Handle the calc command
pub fn handle_calc_command(storage: &Storage, settings: &Settings, args: CalcArgs) -> TrueWageResult<()> {
    let config = &settings.engine;
    let amount = parse_money(&args.pay, "pay amount")?;
    let tag = args
        .frequency
        .clone()
        .unwrap_or_else(|| settings.default_frequency.menu_number().to_string());

    let schedule = WorkSchedule::new(args.hours, args.days);
    let commute = args.commute.to_profile(config)?;

    let frequency = PayFrequency::from_tag(&tag).unwrap_or(PayFrequency::Biweekly);
    WageInputs {
        pay: PayInfo::new(amount, frequency),
        schedule,
        commute,
    }
    .validate()?;

    let calculation = Calculator::new(config).calculate_with_tag(amount, &tag, schedule, commute)?;

    if args.json {
        let json = serde_json::to_string_pretty(&calculation)?;
        println!("{}", json);
    } else {
        print!(
            "{}",
            format_calculation(args.save.as_deref(), &calculation, config, &settings.currency_symbol)
        );
    }

    if let Some(name) = args.save.as_deref() {
        let record = RecordService::new(storage).save_calculation(
            name,
            &calculation.inputs,
            &calculation,
            args.notes.as_deref(),
        )?;
        println!();
        println!("Saved record: {} ({})", record.name, record.id);
    }

    Ok(())
}
