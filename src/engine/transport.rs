//! Transport cost model
//!
//! Turns a commute into what one working day's round trip costs in money and
//! in hours. Every parameter the formulas divide by or price with is checked
//! up front; a bad one aborts the calculation with `InvalidModeParameter`.

use crate::config::EngineConfig;
use crate::error::{TrueWageError, TrueWageResult};
use crate::models::{CommuteProfile, DailyCostBreakdown, DerivedDailyFigures, Money, TransportMode, WorkSchedule};

fn require_positive(parameter: &'static str, value: f64) -> TrueWageResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrueWageError::invalid_mode_parameter(parameter, value))
    }
}

fn require_non_negative(parameter: &'static str, value: f64) -> TrueWageResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(TrueWageError::invalid_mode_parameter(parameter, value))
    }
}

/// Cost of energy plus per-mile maintenance for distance-priced modes
fn distance_cost(
    round_trip_distance: f64,
    efficiency: f64,
    unit_price: f64,
    maintenance_per_mile: f64,
) -> (Money, Money) {
    let energy = (round_trip_distance / efficiency) * unit_price;
    let maintenance = round_trip_distance * maintenance_per_mile;
    (
        Money::from_dollars_f64(energy),
        Money::from_dollars_f64(maintenance),
    )
}

/// Daily monetary cost of a mode, itemized
///
/// `extra_daily_cost` is added for every mode: tolls and parking for vehicles
/// and transit, gear and upkeep for biking and walking.
pub fn daily_cost(
    mode: &TransportMode,
    round_trip_distance: f64,
    days_per_week: u8,
    extra_daily_cost: Money,
    config: &EngineConfig,
) -> TrueWageResult<DailyCostBreakdown> {
    if extra_daily_cost.is_negative() {
        return Err(TrueWageError::invalid_mode_parameter(
            "extra_daily_cost",
            extra_daily_cost.as_dollars(),
        ));
    }

    let (energy, maintenance) = match *mode {
        TransportMode::Car {
            mpg,
            gas_price_per_gallon,
            maintenance_per_mile,
        } => {
            let distance = require_non_negative("distance", round_trip_distance)?;
            let mpg = require_positive("mpg", mpg)?;
            let price = require_positive("gas_price_per_gallon", gas_price_per_gallon)?;
            let maintenance = require_non_negative("maintenance_per_mile", maintenance_per_mile)?;
            distance_cost(distance, mpg, price, maintenance)
        }
        TransportMode::ElectricVehicle {
            miles_per_kwh,
            price_per_kwh,
            maintenance_per_mile,
        } => {
            let distance = require_non_negative("distance", round_trip_distance)?;
            let efficiency = require_positive("miles_per_kwh", miles_per_kwh)?;
            let price = require_positive("price_per_kwh", price_per_kwh)?;
            let maintenance = require_non_negative("maintenance_per_mile", maintenance_per_mile)?;
            distance_cost(distance, efficiency, price, maintenance)
        }
        TransportMode::PublicTransit {
            fare,
            is_monthly_pass,
            walking_minutes,
        } => {
            require_non_negative("walking_minutes", walking_minutes)?;
            if fare.is_negative() {
                return Err(TrueWageError::invalid_mode_parameter("fare", fare.as_dollars()));
            }
            let per_day = if !is_monthly_pass {
                fare
            } else if days_per_week == 0 {
                // A pass spread over zero commuting days costs nothing per day
                Money::zero()
            } else {
                let commuting_days_per_month = f64::from(days_per_week) * config.weeks_per_month;
                Money::from_dollars_f64(fare.as_dollars() / commuting_days_per_month)
            };
            (per_day, Money::zero())
        }
        TransportMode::Biking | TransportMode::Walking => (Money::zero(), Money::zero()),
    };

    Ok(DailyCostBreakdown {
        energy,
        maintenance,
        extra: extra_daily_cost,
    })
}

/// Round-trip commute time in hours
///
/// Walking minutes are the one-way walk to and from transit stops.
pub fn daily_time(one_way_minutes: f64, walking_minutes: f64) -> f64 {
    (one_way_minutes * 2.0) / 60.0 + (walking_minutes * 2.0) / 60.0
}

/// Daily cost and time for a full commute profile
pub fn daily_figures(
    profile: &CommuteProfile,
    schedule: &WorkSchedule,
    config: &EngineConfig,
) -> TrueWageResult<DerivedDailyFigures> {
    let breakdown = daily_cost(
        &profile.mode,
        profile.round_trip_distance(),
        schedule.days_per_week,
        profile.extra_daily_cost,
        config,
    )?;
    let commute_hours = daily_time(profile.one_way_minutes, profile.mode.walking_minutes());

    tracing::debug!(
        mode = %profile.mode,
        cost = %breakdown.total(),
        hours = commute_hours,
        "computed daily commute figures"
    );

    Ok(DerivedDailyFigures {
        commute_cost: breakdown.total(),
        commute_hours,
        breakdown,
    })
}

/// Maintenance per mile implied by the IRS standard mileage rate
///
/// The IRS rate covers all vehicle costs, so fuel per mile is subtracted to
/// avoid counting it twice. Never negative.
pub fn irs_maintenance_rate(
    gas_price_per_gallon: f64,
    mpg: f64,
    config: &EngineConfig,
) -> TrueWageResult<f64> {
    let mpg = require_positive("mpg", mpg)?;
    let price = require_positive("gas_price_per_gallon", gas_price_per_gallon)?;
    Ok((config.irs_mileage_rate - price / mpg).max(0.0))
}
