//! Derived wage figures
//!
//! None of these are inputs. They are recomputed from pay, schedule and
//! commute on every calculation and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Where a day's commute money goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DailyCostBreakdown {
    /// Fuel, electricity or fare
    pub energy: Money,
    /// Per-mile maintenance and depreciation
    pub maintenance: Money,
    /// Tolls/parking or gear/maintenance
    pub extra: Money,
}

impl DailyCostBreakdown {
    pub fn total(&self) -> Money {
        self.energy + self.maintenance + self.extra
    }
}

/// Cost and time of one working day's round trip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedDailyFigures {
    pub commute_cost: Money,
    pub commute_hours: f64,
    pub breakdown: DailyCostBreakdown,
}

/// The three comparable wage figures and the yearly totals behind them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WageResult {
    pub annual_income: Money,
    pub annual_commute_cost: Money,
    pub annual_work_hours: f64,
    pub annual_commute_hours: f64,
    /// Income over paid hours, commute ignored
    pub nominal_wage: f64,
    /// Income net of commute cost over paid hours
    pub cost_adjusted_wage: f64,
    /// Income net of commute cost over paid plus commute hours
    pub true_wage: f64,
}

impl WageResult {
    /// Income left after commute costs; negative when the commute costs more
    /// than the job pays
    pub fn net_income(&self) -> Money {
        self.annual_income - self.annual_commute_cost
    }

    /// Paid hours plus commute hours
    pub fn total_hours(&self) -> f64 {
        self.annual_work_hours + self.annual_commute_hours
    }

    /// Hourly loss between the nominal and true wage
    pub fn wage_gap(&self) -> f64 {
        self.nominal_wage - self.true_wage
    }
}

/// Percentage reductions between the wage figures
///
/// `None` means the ratio is undefined because its base wage is zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ImpactRatios {
    /// (nominal - cost_adjusted) / nominal
    pub cost_impact_pct: Option<f64>,
    /// (cost_adjusted - true) / cost_adjusted
    pub time_impact_pct: Option<f64>,
    /// (nominal - true) / nominal
    pub total_impact_pct: Option<f64>,
}

/// The commute seen from one paycheck
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaycheckImpact {
    pub paycheck: Money,
    pub commute_cost: Money,
    pub commute_hours: f64,
    pub work_hours: f64,
    /// Paycheck minus commute cost
    pub effective_pay: Money,
    /// Share of the paycheck spent on commuting; `None` for a zero paycheck
    pub share_of_paycheck_pct: Option<f64>,
}
