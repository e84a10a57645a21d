//! Wage/cost normalization engine
//!
//! Pure functions that turn pay, schedule and commute inputs into comparable
//! hourly wage figures. Nothing in here touches the terminal or the disk.
//!
//! # Architecture
//!
//! - `frequency`: paycheck + pay frequency -> annual income
//! - `transport`: commute profile -> daily cost and daily hours
//! - `composer`: annual income + daily figures -> `WageResult`
//! - `affordability`: expense + hourly wage -> hours/days/weeks of labor
//! - `Calculator`: runs the whole pipeline against one `EngineConfig`
//!
//! # Example
//!
//! ```
//! use truewage_cli::config::EngineConfig;
//! use truewage_cli::engine::{Calculator, WageInputs};
//! use truewage_cli::models::{CommuteProfile, Money, PayFrequency, PayInfo, TransportMode, WorkSchedule};
//!
//! let config = EngineConfig::default();
//! let inputs = WageInputs {
//!     pay: PayInfo::new(Money::from_dollars(2000), PayFrequency::Biweekly),
//!     schedule: WorkSchedule::new(8.0, 5),
//!     commute: CommuteProfile::new(30.0, 10.0, TransportMode::car(25.0, 3.50)),
//! };
//!
//! let calculation = Calculator::new(&config).calculate(&inputs).unwrap();
//! assert!((calculation.result.true_wage - 22.80).abs() < 0.005);
//! ```

pub mod advisory;
pub mod affordability;
pub mod composer;
pub mod frequency;
pub mod transport;

pub use advisory::Advisory;
pub use affordability::{labor_cost, project, Projected};
pub use composer::{compose, hours_to_cover_daily_commute, impact, paycheck_impact, Composed};
pub use frequency::{annualize, annualize_tag, periods_per_year, Normalized};
pub use transport::{daily_cost, daily_figures, daily_time, irs_maintenance_rate};

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::{TrueWageError, TrueWageResult};
use crate::models::{
    Cadence, CommuteProfile, DerivedDailyFigures, ImpactRatios, Money, PayInfo, PaycheckImpact,
    WageResult, WorkSchedule,
};

/// Everything a wage calculation needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WageInputs {
    pub pay: PayInfo,
    pub schedule: WorkSchedule,
    pub commute: CommuteProfile,
}

impl WageInputs {
    /// Check the inputs an input layer collected
    ///
    /// Transport parameters are checked by the cost model itself.
    pub fn validate(&self) -> TrueWageResult<()> {
        self.pay
            .validate()
            .map_err(|e| TrueWageError::Validation(e.to_string()))?;
        self.schedule
            .validate()
            .map_err(|e| TrueWageError::Validation(e.to_string()))?;

        let minutes = self.commute.one_way_minutes;
        if !(minutes.is_finite() && minutes >= 0.0) {
            return Err(TrueWageError::Validation(format!(
                "Commute time must be zero or more minutes, got {}",
                minutes
            )));
        }
        Ok(())
    }
}

/// The outcome of one full calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub inputs: WageInputs,
    pub daily: DerivedDailyFigures,
    pub result: WageResult,
    pub impact: ImpactRatios,
    pub paycheck: PaycheckImpact,
    /// Paid hours per day that go to covering commute costs
    pub hours_to_cover_commute: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advisories: Vec<Advisory>,
}

/// Runs the engine pipeline against a fixed set of constants
pub struct Calculator<'a> {
    config: &'a EngineConfig,
}

impl<'a> Calculator<'a> {
    /// Create a new calculator
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Run a full calculation
    ///
    /// Fails only on an invalid transport parameter. Degenerate schedules
    /// produce sentinel figures and advisories.
    pub fn calculate(&self, inputs: &WageInputs) -> TrueWageResult<Calculation> {
        let annual_income = annualize(
            inputs.pay.amount,
            inputs.pay.frequency,
            inputs.schedule.days_per_week,
            self.config,
        );
        self.finish(*inputs, annual_income, Vec::new())
    }

    /// Run a full calculation from a raw pay frequency tag
    ///
    /// An unrecognized tag falls back to bi-weekly; the returned inputs carry
    /// the frequency actually used.
    pub fn calculate_with_tag(
        &self,
        amount: Money,
        frequency_tag: &str,
        schedule: WorkSchedule,
        commute: CommuteProfile,
    ) -> TrueWageResult<Calculation> {
        let normalized = annualize_tag(amount, frequency_tag, schedule.days_per_week, self.config);
        let inputs = WageInputs {
            pay: PayInfo::new(amount, normalized.frequency),
            schedule,
            commute,
        };
        let advisories = normalized.advisory.into_iter().collect();
        self.finish(inputs, normalized.annual_income, advisories)
    }

    fn finish(
        &self,
        inputs: WageInputs,
        annual_income: Money,
        mut advisories: Vec<Advisory>,
    ) -> TrueWageResult<Calculation> {
        tracing::debug!(annual_income = annual_income.cents(), "normalized pay");
        let daily = daily_figures(&inputs.commute, &inputs.schedule, self.config)?;
        tracing::debug!(
            commute_cost = daily.commute_cost.cents(),
            commute_hours = daily.commute_hours,
            mode = %inputs.commute.mode,
            "derived daily commute figures"
        );
        let composed = compose(
            annual_income,
            daily.commute_cost,
            daily.commute_hours,
            &inputs.schedule,
            self.config,
        );
        tracing::debug!(
            nominal = composed.result.nominal_wage,
            cost_adjusted = composed.result.cost_adjusted_wage,
            true_wage = composed.result.true_wage,
            "composed wages"
        );
        advisories.extend(composed.advisories);

        for advisory in &advisories {
            advisory.log();
        }

        let result = composed.result;
        Ok(Calculation {
            inputs,
            daily,
            impact: impact(&result),
            paycheck: paycheck_impact(&inputs.pay, &daily, &inputs.schedule, self.config),
            hours_to_cover_commute: hours_to_cover_daily_commute(daily.commute_cost, result.nominal_wage),
            result,
            advisories,
        })
    }

    /// Project an expense onto working time at `hourly_wage`
    pub fn project(
        &self,
        name: impl Into<String>,
        hourly_wage: f64,
        cost: Money,
        cadence: Cadence,
    ) -> Projected {
        let projected = project(name, hourly_wage, cost, cadence, self.config);
        for advisory in &projected.advisories {
            advisory.log();
        }
        projected
    }
}
