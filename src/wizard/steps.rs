//! Wizard steps
//!
//! Each step asks one group of questions and hands back validated values.

use std::io::{BufRead, Write};

use crate::config::EngineConfig;
use crate::engine::{irs_maintenance_rate, WageInputs};
use crate::error::TrueWageResult;
use crate::models::{
    Cadence, CommuteProfile, Money, PayFrequency, PayInfo, TransportMode, WorkSchedule,
};

use super::prompt::Prompter;

const PAY_REQUIREMENT: &str = "an amount greater than zero and at most $1,000,000,000";

fn paycheck_in_range(amount: Money) -> bool {
    amount.is_positive() && amount <= PayInfo::MAX_AMOUNT
}

/// Pay step result
pub struct PayAnswers {
    pub name: String,
    /// Raw menu answer; unknown answers fall back to bi-weekly in the engine
    pub frequency_tag: String,
    pub amount: Money,
}

/// Who is being calculated for and how they are paid
pub struct PayStep;

impl PayStep {
    pub fn run<R: BufRead, W: Write>(
        p: &mut Prompter<R, W>,
        default_frequency: PayFrequency,
    ) -> TrueWageResult<PayAnswers> {
        let name = p.ask("Enter your name: ")?;
        let name = if name.is_empty() { "you".to_string() } else { name };

        p.say("")?;
        p.say("--- Pay Information ---")?;
        p.say("How often do you get paid?")?;
        for frequency in PayFrequency::ALL {
            p.say(format!("  {}. {}", frequency.menu_number(), frequency.description()))?;
        }
        let default_tag = default_frequency.menu_number().to_string();
        let answer = p.ask(&format!("Enter choice (1-5) [{}]: ", default_tag))?;
        let frequency_tag = if answer.is_empty() { default_tag } else { answer };

        let amount = p.ask_money(
            "Enter your take-home paycheck amount: $",
            PAY_REQUIREMENT,
            paycheck_in_range,
        )?;

        Ok(PayAnswers {
            name,
            frequency_tag,
            amount,
        })
    }
}

/// Paid hours and days
pub struct ScheduleStep;

impl ScheduleStep {
    pub fn run<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> TrueWageResult<WorkSchedule> {
        let hours = p.ask_f64_where(
            "Enter your daily work hours (excluding lunch): ",
            "hours greater than 0 and at most 24",
            |h| h > 0.0 && h <= 24.0,
        )?;
        let days = ask_days(p, "How many days per week do you work? (e.g., 5): ")?;
        Ok(WorkSchedule::new(hours, days))
    }
}

fn ask_days<R: BufRead, W: Write>(p: &mut Prompter<R, W>, prompt: &str) -> TrueWageResult<u8> {
    let days = p.ask_f64_where(prompt, "a whole number of days from 1 to 7", |d| {
        d.fract() == 0.0 && (1.0..=7.0).contains(&d)
    })?;
    Ok(days as u8)
}

const MODE_MENU: [&str; 5] = [
    "Car",
    "Electric vehicle",
    "Public transit",
    "Biking",
    "Walking",
];

/// How the user gets to work and what it costs
pub struct CommuteStep;

impl CommuteStep {
    pub fn run<R: BufRead, W: Write>(
        p: &mut Prompter<R, W>,
        config: &EngineConfig,
    ) -> TrueWageResult<CommuteProfile> {
        p.say("")?;
        p.say("--- Commute ---")?;
        let minutes = p.ask_f64_where(
            "Enter your one-way commute time in minutes: ",
            "zero or more minutes",
            |m| m >= 0.0,
        )?;

        p.say("How do you get to work?")?;
        for (i, label) in MODE_MENU.iter().enumerate() {
            p.say(format!("  {}. {}", i + 1, label))?;
        }
        let choice = p.ask_choice("Enter choice (1-5): ", MODE_MENU.len())?;

        let mode = match choice {
            1 => Self::car(p, config)?,
            2 => Self::electric(p)?,
            3 => Self::transit(p)?,
            4 => TransportMode::Biking,
            _ => TransportMode::Walking,
        };

        let distance = if mode.uses_distance() {
            p.ask_f64_where(
                "Enter your one-way commute distance in miles: ",
                "zero or more miles",
                |d| d >= 0.0,
            )?
        } else {
            0.0
        };

        p.say("")?;
        p.say("--- Additional Cost Factors ---")?;
        let label = mode.extra_cost_label().to_lowercase();
        let extra = if p.confirm(&format!("Any daily {} costs? (yes/no): ", label))? {
            p.ask_money(
                &format!("Enter daily {} costs: $", label),
                "zero or a positive amount",
                |m| !m.is_negative(),
            )?
        } else {
            Money::zero()
        };

        Ok(CommuteProfile::new(minutes, distance, mode).with_extra_daily_cost(extra))
    }

    fn car<R: BufRead, W: Write>(
        p: &mut Prompter<R, W>,
        config: &EngineConfig,
    ) -> TrueWageResult<TransportMode> {
        let mpg = p.ask_f64_where(
            "Enter your car's gas mileage (miles per gallon): ",
            "a mileage greater than zero",
            |v| v > 0.0,
        )?;
        let gas_price = p.ask_f64_where(
            "Enter current gas price per gallon: $",
            "a price greater than zero",
            |v| v > 0.0,
        )?;

        p.say(format!(
            "The IRS standard mileage rate (${:.2}/mile) covers fuel, maintenance and depreciation.",
            config.irs_mileage_rate
        ))?;
        let maintenance_per_mile = if p.confirm("Use the IRS rate for full cost? (yes/no): ")? {
            p.say(format!("Using full cost of ${:.2} per mile", config.irs_mileage_rate))?;
            irs_maintenance_rate(gas_price, mpg, config)?
        } else {
            p.ask_f64_where(
                "Enter estimated maintenance/depreciation cost per mile (e.g., 0.15): $",
                "zero or a positive amount",
                |v| v >= 0.0,
            )?
        };

        Ok(TransportMode::Car {
            mpg,
            gas_price_per_gallon: gas_price,
            maintenance_per_mile,
        })
    }

    fn electric<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> TrueWageResult<TransportMode> {
        let miles_per_kwh = p.ask_f64_where(
            "Enter your vehicle's efficiency (miles per kWh): ",
            "an efficiency greater than zero",
            |v| v > 0.0,
        )?;
        let price_per_kwh = p.ask_f64_where(
            "Enter electricity price per kWh: $",
            "a price greater than zero",
            |v| v > 0.0,
        )?;
        let maintenance_per_mile = p.ask_f64_where(
            "Enter estimated maintenance/depreciation cost per mile: $",
            "zero or a positive amount",
            |v| v >= 0.0,
        )?;

        Ok(TransportMode::ElectricVehicle {
            miles_per_kwh,
            price_per_kwh,
            maintenance_per_mile,
        })
    }

    fn transit<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> TrueWageResult<TransportMode> {
        let is_monthly_pass = p.confirm("Do you buy a monthly pass? (yes/no): ")?;
        let prompt = if is_monthly_pass {
            "Enter the monthly pass price: $"
        } else {
            "Enter your daily round-trip fare: $"
        };
        let fare = p.ask_money(prompt, "zero or a positive amount", |m| !m.is_negative())?;
        let walking_minutes = p.ask_f64_where(
            "Enter walking time to and from stops in minutes, one way: ",
            "zero or more minutes",
            |m| m >= 0.0,
        )?;

        Ok(TransportMode::PublicTransit {
            fare,
            is_monthly_pass,
            walking_minutes,
        })
    }
}

/// An expense to measure in working time
pub struct ExpenseAnswers {
    pub name: String,
    pub cost: Money,
    pub cadence: Cadence,
}

/// Optional affordability question after a calculation
pub struct ExpenseStep;

impl ExpenseStep {
    pub fn run<R: BufRead, W: Write>(
        p: &mut Prompter<R, W>,
    ) -> TrueWageResult<Option<ExpenseAnswers>> {
        p.say("")?;
        if !p.confirm("See what an expense costs in work time? (yes/no): ")? {
            return Ok(None);
        }

        let name = loop {
            let name = p.ask("What is it? ")?;
            if !name.is_empty() {
                break name;
            }
            p.say("Please enter a name.")?;
        };
        let cost = p.ask_money("What does it cost? $", "zero or a positive amount", |m| {
            !m.is_negative()
        })?;

        p.say("How often do you pay it?")?;
        p.say("  1. One time")?;
        p.say("  2. Monthly")?;
        p.say("  3. Annually")?;
        let cadence = match p.ask_choice("Enter choice (1-3): ", 3)? {
            1 => Cadence::OneTime,
            2 => Cadence::Monthly,
            _ => Cadence::Annual,
        };

        Ok(Some(ExpenseAnswers { name, cost, cadence }))
    }
}

/// Quick bi-weekly calculator questions
pub struct QuickStep;

impl QuickStep {
    pub fn run<R: BufRead, W: Write>(
        p: &mut Prompter<R, W>,
        config: &EngineConfig,
    ) -> TrueWageResult<(String, WageInputs)> {
        p.say("")?;
        p.say("=== Quick Calculator (Bi-weekly Focus) ===")?;
        let name = p.ask("Your name: ")?;
        let name = if name.is_empty() { "you".to_string() } else { name };

        let pay = p.ask_money(
            "Bi-weekly take-home pay: $",
            PAY_REQUIREMENT,
            paycheck_in_range,
        )?;
        let hours = p.ask_f64_where(
            "Daily work hours: ",
            "hours greater than 0 and at most 24",
            |h| h > 0.0 && h <= 24.0,
        )?;
        let days = ask_days(p, "Days per week (e.g., 5): ")?;
        let minutes =
            p.ask_f64_where("One-way commute minutes: ", "zero or more minutes", |m| m >= 0.0)?;
        let distance =
            p.ask_f64_where("One-way commute miles: ", "zero or more miles", |d| d >= 0.0)?;
        let mpg = p.ask_f64_where("Car MPG: ", "a mileage greater than zero", |v| v > 0.0)?;
        let gas_price =
            p.ask_f64_where("Gas price per gallon: $", "a price greater than zero", |v| v > 0.0)?;

        p.say(format!(
            "Using fuel + ${:.2}/mile for maintenance/depreciation",
            config.quick_maintenance_per_mile
        ))?;

        let inputs = WageInputs {
            pay: PayInfo::new(pay, PayFrequency::Biweekly),
            schedule: WorkSchedule::new(hours, days),
            commute: CommuteProfile::new(
                minutes,
                distance,
                TransportMode::Car {
                    mpg,
                    gas_price_per_gallon: gas_price,
                    maintenance_per_mile: config.quick_maintenance_per_mile,
                },
            ),
        };

        Ok((name, inputs))
    }
}
