//! Item affordability projection
//!
//! Converts the price of something into the labor it takes to pay for it at
//! a given hourly wage, using fixed conventions for the length of a working
//! day and week (8 hours, 5 days by default).

use crate::config::EngineConfig;
use crate::models::{Cadence, ExpenseProjection, LaborCost, Money};

use super::advisory::Advisory;

/// A projection with any advisories raised while computing it
#[derive(Debug, Clone, PartialEq)]
pub struct Projected {
    pub projection: ExpenseProjection,
    pub advisories: Vec<Advisory>,
}

/// Labor needed to pay `cost` at `hourly_wage`; zero hours when the wage
/// isn't positive
pub fn labor_cost(cost: Money, hourly_wage: f64, config: &EngineConfig) -> LaborCost {
    labor_for_dollars(cost, cost.as_dollars(), hourly_wage, config)
}

/// `labor_cost` with the time figures taken from an unrounded dollar amount;
/// `cost` is only the displayed price
fn labor_for_dollars(cost: Money, dollars: f64, hourly_wage: f64, config: &EngineConfig) -> LaborCost {
    let hours = if hourly_wage > 0.0 {
        dollars / hourly_wage
    } else {
        0.0
    };
    let days = hours / config.affordability_hours_per_day;
    let weeks = days / config.affordability_days_per_week;

    LaborCost {
        cost,
        hours,
        days,
        weeks,
    }
}

/// Project an expense onto working time
///
/// Monthly expenses also get their yearly total projected; annual expenses
/// get their per-month share.
pub fn project(
    name: impl Into<String>,
    hourly_wage: f64,
    cost: Money,
    cadence: Cadence,
    config: &EngineConfig,
) -> Projected {
    let mut advisories = Vec::new();
    if !(hourly_wage > 0.0) {
        advisories.push(Advisory::NonPositiveWage { wage: hourly_wage });
    }

    let base = labor_cost(cost, hourly_wage, config);
    let (annualized, monthly_equivalent) = match cadence {
        Cadence::OneTime => (None, None),
        Cadence::Monthly => (Some(labor_cost(cost.times(12), hourly_wage, config)), None),
        Cadence::Annual => {
            let per_month = cost.as_dollars() / 12.0;
            let shown = Money::from_dollars_f64(per_month);
            (None, Some(labor_for_dollars(shown, per_month, hourly_wage, config)))
        }
    };

    Projected {
        projection: ExpenseProjection {
            name: name.into(),
            cost,
            cadence,
            hourly_wage,
            hours_required: base.hours,
            days_required: base.days,
            weeks_required: base.weeks,
            annualized,
            monthly_equivalent,
        },
        advisories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance
    }

    #[test]
    fn test_annual_expense_at_true_wage() {
        let projected = project(
            "Car insurance",
            22.80,
            Money::from_dollars(1200),
            Cadence::Annual,
            &EngineConfig::default(),
        );
        let p = projected.projection;

        assert!(projected.advisories.is_empty());
        assert!(approx(p.hours_required, 52.63, 0.01));
        assert!(approx(p.days_required, 6.58, 0.01));
        assert!(approx(p.weeks_required, 1.32, 0.01));
        assert!(p.annualized.is_none());

        let monthly = p.monthly_equivalent.unwrap();
        assert_eq!(monthly.cost, Money::from_dollars(100));
        assert!(approx(monthly.hours, 4.386, 0.001));
    }

    #[test]
    fn test_annual_monthly_share_uses_unrounded_cost() {
        let projected = project(
            "Tires",
            20.0,
            Money::from_dollars(1000),
            Cadence::Annual,
            &EngineConfig::default(),
        );
        let monthly = projected.projection.monthly_equivalent.unwrap();

        assert_eq!(monthly.cost, Money::from_cents(8333));
        assert!(approx(monthly.hours, 1000.0 / 12.0 / 20.0, 1e-12));
        assert!(approx(monthly.hours * 12.0, projected.projection.hours_required, 1e-9));
    }

    #[test]
    fn test_monthly_expense_is_annualized() {
        let projected = project(
            "Streaming",
            20.0,
            Money::from_dollars(15),
            Cadence::Monthly,
            &EngineConfig::default(),
        );
        let p = projected.projection;

        assert_eq!(p.hours_required, 0.75);
        assert!(p.monthly_equivalent.is_none());
        let yearly = p.annualized.unwrap();
        assert_eq!(yearly.cost, Money::from_dollars(180));
        assert_eq!(yearly.hours, 9.0);
    }

    #[test]
    fn test_one_time_has_single_projection() {
        let p = project("Bike", 25.0, Money::from_dollars(500), Cadence::OneTime, &EngineConfig::default())
            .projection;
        assert_eq!(p.hours_required, 20.0);
        assert_eq!(p.days_required, 2.5);
        assert_eq!(p.weeks_required, 0.5);
        assert!(p.annualized.is_none());
        assert!(p.monthly_equivalent.is_none());
    }

    #[test]
    fn test_non_positive_wage_is_advisory() {
        for wage in [0.0, -3.5] {
            let projected = project(
                "Anything",
                wage,
                Money::from_dollars(100),
                Cadence::Monthly,
                &EngineConfig::default(),
            );
            assert_eq!(projected.advisories, vec![Advisory::NonPositiveWage { wage }]);
            assert_eq!(projected.projection.hours_required, 0.0);
            assert_eq!(projected.projection.annualized.unwrap().hours, 0.0);
        }
    }

    #[test]
    fn test_conventions_come_from_config() {
        let config = EngineConfig {
            affordability_hours_per_day: 10.0,
            affordability_days_per_week: 4.0,
            ..EngineConfig::default()
        };
        let p = project("Trip", 10.0, Money::from_dollars(800), Cadence::OneTime, &config).projection;
        assert_eq!(p.days_required, 8.0);
        assert_eq!(p.weeks_required, 2.0);
    }

    proptest! {
        #[test]
        fn doubling_cost_doubles_labor(
            cents in 1i64..10_000_000,
            wage in 0.5f64..500.0,
        ) {
            let config = EngineConfig::default();
            let single = project("x", wage, Money::from_cents(cents), Cadence::OneTime, &config).projection;
            let double = project("x", wage, Money::from_cents(cents * 2), Cadence::OneTime, &config).projection;

            let tol = |v: f64| 1e-9 * v.abs().max(1.0);
            prop_assert!((double.hours_required - 2.0 * single.hours_required).abs() <= tol(double.hours_required));
            prop_assert!((double.days_required - 2.0 * single.days_required).abs() <= tol(double.days_required));
            prop_assert!((double.weeks_required - 2.0 * single.weeks_required).abs() <= tol(double.weeks_required));
        }
    }
}
