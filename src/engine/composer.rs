//! Wage composition
//!
//! Scales daily commute figures to a year and derives the nominal,
//! cost-adjusted and true hourly wages.
//!
//! When the year has no paid hours every wage is the sentinel 0 and a
//! `ZeroWorkHours` advisory is attached. Negative net income is passed
//! through unchanged: a commute that costs more than the job pays is a real
//! answer, not an error.

use crate::config::EngineConfig;
use crate::models::{DerivedDailyFigures, ImpactRatios, Money, PayFrequency, PayInfo, PaycheckImpact, WageResult, WorkSchedule};

use super::advisory::Advisory;
use super::frequency::periods_per_year;

/// A wage result with any advisories raised while computing it
#[derive(Debug, Clone, PartialEq)]
pub struct Composed {
    pub result: WageResult,
    pub advisories: Vec<Advisory>,
}

/// Combine annual income with daily commute figures
pub fn compose(
    annual_income: Money,
    daily_commute_cost: Money,
    daily_commute_hours: f64,
    schedule: &WorkSchedule,
    config: &EngineConfig,
) -> Composed {
    let weeks = config.work_weeks();
    let commute_days_per_year = i64::from(schedule.days_per_week) * i64::from(config.work_weeks_per_year);

    let annual_work_hours = schedule.weekly_hours() * weeks;
    let annual_commute_hours = daily_commute_hours * schedule.days() * weeks;
    let annual_commute_cost = daily_commute_cost.times(commute_days_per_year);

    let income = annual_income.as_dollars();
    let net_income = (annual_income - annual_commute_cost).as_dollars();

    let mut advisories = Vec::new();
    let (nominal_wage, cost_adjusted_wage, true_wage) = if annual_work_hours > 0.0 {
        let committed_hours = annual_work_hours + annual_commute_hours;
        (
            income / annual_work_hours,
            net_income / annual_work_hours,
            net_income / committed_hours,
        )
    } else {
        advisories.push(Advisory::ZeroWorkHours);
        (0.0, 0.0, 0.0)
    };

    tracing::debug!(
        annual_income = %annual_income,
        annual_commute_cost = %annual_commute_cost,
        annual_work_hours,
        annual_commute_hours,
        nominal_wage,
        true_wage,
        "composed wage result"
    );

    Composed {
        result: WageResult {
            annual_income,
            annual_commute_cost,
            annual_work_hours,
            annual_commute_hours,
            nominal_wage,
            cost_adjusted_wage,
            true_wage,
        },
        advisories,
    }
}

fn reduction_pct(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 {
        None
    } else {
        Some((from - to) / from * 100.0)
    }
}

/// Percentage impact of commute cost and commute time on the wage
pub fn impact(result: &WageResult) -> ImpactRatios {
    ImpactRatios {
        cost_impact_pct: reduction_pct(result.nominal_wage, result.cost_adjusted_wage),
        time_impact_pct: reduction_pct(result.cost_adjusted_wage, result.true_wage),
        total_impact_pct: reduction_pct(result.nominal_wage, result.true_wage),
    }
}

/// The commute's share of a single paycheck
///
/// Daily, weekly and bi-weekly periods are counted in work days. Semi-monthly
/// and monthly periods don't align with weeks, so they take an even share of
/// the yearly totals.
pub fn paycheck_impact(
    pay: &PayInfo,
    daily: &DerivedDailyFigures,
    schedule: &WorkSchedule,
    config: &EngineConfig,
) -> PaycheckImpact {
    let days_in_period = match pay.frequency {
        PayFrequency::Daily => Some(1),
        PayFrequency::Weekly => Some(i64::from(schedule.days_per_week)),
        PayFrequency::Biweekly => Some(2 * i64::from(schedule.days_per_week)),
        PayFrequency::SemiMonthly | PayFrequency::Monthly => None,
    };

    let (commute_cost, commute_hours, work_hours) = match days_in_period {
        Some(days) => (
            daily.commute_cost.times(days),
            daily.commute_hours * days as f64,
            schedule.daily_hours * days as f64,
        ),
        None => {
            let periods = periods_per_year(pay.frequency, schedule.days_per_week, config) as f64;
            let commute_days = schedule.days() * config.work_weeks();
            (
                Money::from_dollars_f64(daily.commute_cost.as_dollars() * commute_days / periods),
                daily.commute_hours * commute_days / periods,
                schedule.daily_hours * commute_days / periods,
            )
        }
    };

    let share_of_paycheck_pct = if pay.amount.is_zero() {
        None
    } else {
        Some(commute_cost.as_dollars() / pay.amount.as_dollars() * 100.0)
    };

    PaycheckImpact {
        paycheck: pay.amount,
        commute_cost,
        commute_hours,
        work_hours,
        effective_pay: pay.amount - commute_cost,
        share_of_paycheck_pct,
    }
}

/// Hours of paid work each day that go to covering the commute's cost
pub fn hours_to_cover_daily_commute(daily_commute_cost: Money, nominal_wage: f64) -> Option<f64> {
    if nominal_wage > 0.0 {
        Some(daily_commute_cost.as_dollars() / nominal_wage)
    } else {
        None
    }
}
