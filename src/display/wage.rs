//! Calculation report formatting
//!
//! Turns a `Calculation` into the full multi-section report, or the short
//! quick-calculator summary.

use crate::config::EngineConfig;
use crate::engine::{Advisory, Calculation};
use crate::models::Money;

use super::report::{format_optional_percentage, format_rate, section};

/// Format the full report for a calculation
pub fn format_calculation(
    name: Option<&str>,
    calc: &Calculation,
    config: &EngineConfig,
    symbol: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&format_results(name, calc, symbol));
    output.push('\n');
    output.push_str(&format_cost_breakdown(calc, config, symbol));
    output.push('\n');
    output.push_str(&format_time_breakdown(calc, config));
    output.push('\n');
    output.push_str(&format_impact(calc, symbol));
    output.push('\n');
    output.push_str(&format_paycheck(calc, symbol));
    output.push_str(&format_advisories(&calc.advisories));
    output
}

fn format_results(name: Option<&str>, calc: &Calculation, symbol: &str) -> String {
    let result = &calc.result;
    let pay = &calc.inputs.pay;

    let mut output = section("RESULTS");
    if let Some(name) = name {
        output.push_str(&format!("For {}:\n", name));
    }
    output.push_str(&format!(
        "  Pay:                    {} {}\n",
        pay.amount.format_with_separators(symbol),
        pay.frequency
    ));
    output.push_str(&format!(
        "  Annual income:          {}\n",
        result.annual_income.format_with_separators(symbol)
    ));
    output.push_str(&format!(
        "  Nominal hourly wage:    {}\n",
        format_rate(symbol, result.nominal_wage)
    ));
    output.push_str(&format!(
        "  After commute costs:    {}\n",
        format_rate(symbol, result.cost_adjusted_wage)
    ));
    output.push_str(&format!(
        "  TRUE hourly wage:       {}\n",
        format_rate(symbol, result.true_wage)
    ));
    output
}

fn format_cost_breakdown(calc: &Calculation, config: &EngineConfig, symbol: &str) -> String {
    let commute = &calc.inputs.commute;
    let breakdown = &calc.daily.breakdown;
    let days = calc.inputs.schedule.days_per_week;
    let yearly_days = i64::from(days) * i64::from(config.work_weeks_per_year);
    let money = |m: Money| m.format_with_separators(symbol);

    let mut output = section("COST BREAKDOWN");
    output.push_str(&format!("Daily costs ({}):\n", commute.mode));
    if commute.mode.uses_distance() {
        output.push_str(&format!(
            "  Round trip:             {:.1} miles\n",
            commute.round_trip_distance()
        ));
    }
    output.push_str(&format!(
        "  {:<24}{}\n",
        format!("{}:", commute.mode.energy_label()),
        money(breakdown.energy)
    ));
    if commute.mode.uses_distance() {
        output.push_str(&format!(
            "  Maintenance/Depreciation: {}\n",
            money(breakdown.maintenance)
        ));
    }
    if !breakdown.extra.is_zero() {
        output.push_str(&format!(
            "  {:<24}{}\n",
            format!("{}:", commute.mode.extra_cost_label()),
            money(breakdown.extra)
        ));
    }
    output.push_str(&format!(
        "  TOTAL daily:            {}\n",
        money(calc.daily.commute_cost)
    ));

    output.push_str(&format!(
        "\nYearly costs ({} weeks x {} days/week):\n",
        config.work_weeks_per_year, days
    ));
    output.push_str(&format!(
        "  {:<24}{}\n",
        format!("{}:", commute.mode.energy_label()),
        money(breakdown.energy.times(yearly_days))
    ));
    if commute.mode.uses_distance() {
        output.push_str(&format!(
            "  Maintenance/Depreciation: {}\n",
            money(breakdown.maintenance.times(yearly_days))
        ));
    }
    if !breakdown.extra.is_zero() {
        output.push_str(&format!(
            "  {:<24}{}\n",
            format!("{}:", commute.mode.extra_cost_label()),
            money(breakdown.extra.times(yearly_days))
        ));
    }
    output.push_str(&format!(
        "  TOTAL yearly:           {}\n",
        money(calc.result.annual_commute_cost)
    ));
    output
}

fn format_time_breakdown(calc: &Calculation, config: &EngineConfig) -> String {
    let schedule = &calc.inputs.schedule;
    let daily_commute = calc.daily.commute_hours;
    let weekly_work = schedule.weekly_hours();
    let weekly_commute = daily_commute * schedule.days();
    let result = &calc.result;

    let mut output = section("TIME BREAKDOWN");
    output.push_str("Daily:\n");
    output.push_str(&format!("  Work:     {:.1} hours\n", schedule.daily_hours));
    output.push_str(&format!(
        "  Commute:  {:.1} hours ({:.0} min each way)\n",
        daily_commute, calc.inputs.commute.one_way_minutes
    ));
    output.push_str(&format!(
        "  Total:    {:.1} hours\n",
        schedule.daily_hours + daily_commute
    ));

    output.push_str(&format!("\nWeekly ({} days):\n", schedule.days_per_week));
    output.push_str(&format!("  Work:     {:.1} hours\n", weekly_work));
    output.push_str(&format!("  Commute:  {:.1} hours\n", weekly_commute));
    output.push_str(&format!("  Total:    {:.1} hours\n", weekly_work + weekly_commute));

    output.push_str(&format!("\nYearly ({} weeks):\n", config.work_weeks_per_year));
    output.push_str(&format!("  Work:     {:.0} hours\n", result.annual_work_hours));
    output.push_str(&format!("  Commute:  {:.0} hours\n", result.annual_commute_hours));
    output.push_str(&format!("  Total committed time: {:.0} hours\n", result.total_hours()));
    output
}

fn format_impact(calc: &Calculation, symbol: &str) -> String {
    let result = &calc.result;
    let impact = &calc.impact;

    let mut output = section("IMPACT ANALYSIS");
    output.push_str(&format!(
        "  Impact of costs alone:  {} ({})\n",
        format_rate(symbol, -(result.nominal_wage - result.cost_adjusted_wage)),
        format_optional_percentage(impact.cost_impact_pct)
    ));
    output.push_str(&format!(
        "  Impact of commute time: {} ({})\n",
        format_rate(symbol, -(result.cost_adjusted_wage - result.true_wage)),
        format_optional_percentage(impact.time_impact_pct)
    ));
    output.push_str(&format!(
        "  Total impact:           {} ({})\n",
        format_rate(symbol, -result.wage_gap()),
        format_optional_percentage(impact.total_impact_pct)
    ));
    if let Some(hours) = calc.hours_to_cover_commute {
        output.push_str(&format!(
            "\nYou work {:.2} hours each day just to pay for your commute\n",
            hours
        ));
    }
    output
}

fn format_paycheck(calc: &Calculation, symbol: &str) -> String {
    let paycheck = &calc.paycheck;
    let money = |m: Money| m.format_with_separators(symbol);

    let mut output = section(&format!("PER PAYCHECK ({})", calc.inputs.pay.frequency));
    output.push_str(&format!("  Take-home pay:  {}\n", money(paycheck.paycheck)));
    output.push_str(&format!("  Commute costs:  -{}\n", money(paycheck.commute_cost)));
    output.push_str(&format!("  Effective pay:  {}\n", money(paycheck.effective_pay)));
    output.push_str(&format!(
        "  Work time:      {:.1} hours\n  Commute time:   {:.1} hours\n",
        paycheck.work_hours, paycheck.commute_hours
    ));
    output.push_str(&format!(
        "  Commute eats {} of your paycheck\n",
        format_optional_percentage(paycheck.share_of_paycheck_pct)
    ));
    output
}

/// Format advisories as trailing notes; empty when there are none
pub fn format_advisories(advisories: &[Advisory]) -> String {
    if advisories.is_empty() {
        return String::new();
    }

    let mut output = String::from("\nNotes:\n");
    for advisory in advisories {
        output.push_str(&format!("  * {}\n", advisory));
    }
    output
}

/// Format the short quick-calculator summary
pub fn format_quick_summary(name: &str, calc: &Calculation, symbol: &str) -> String {
    let result = &calc.result;
    let paycheck = &calc.paycheck;
    let money = |m: Money| m.format_with_separators(symbol);

    let mut output = format!("=== Results for {} ===\n", name);
    output.push_str(&format!("Annual income:    {}\n", money(result.annual_income)));
    output.push_str(&format!("Nominal wage:     {}\n", format_rate(symbol, result.nominal_wage)));
    output.push_str(&format!("True wage:        {}\n", format_rate(symbol, result.true_wage)));
    output.push_str(&format!("Difference:       {}\n", format_rate(symbol, result.wage_gap())));
    output.push_str(&format!("\nPer {} paycheck:\n", calc.inputs.pay.frequency));
    output.push_str(&format!("  Commute costs:       {}\n", money(paycheck.commute_cost)));
    output.push_str(&format!("  Commute time:        {:.1} hours\n", paycheck.commute_hours));
    output.push_str(&format!("  Effective take-home: {}\n", money(paycheck.effective_pay)));
    output.push_str(&format_advisories(&calc.advisories));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Calculator, WageInputs};
    use crate::models::{CommuteProfile, PayFrequency, PayInfo, TransportMode, WorkSchedule};

    fn calculate(inputs: WageInputs) -> Calculation {
        Calculator::new(&EngineConfig::default()).calculate(&inputs).unwrap()
    }

    fn car_commuter() -> WageInputs {
        WageInputs {
            pay: PayInfo::new(Money::from_dollars(2000), PayFrequency::Biweekly),
            schedule: WorkSchedule::new(8.0, 5),
            commute: CommuteProfile::new(30.0, 10.0, TransportMode::car(25.0, 3.50)),
        }
    }

    #[test]
    fn test_full_report_sections() {
        let report = format_calculation(
            Some("Downtown"),
            &calculate(car_commuter()),
            &EngineConfig::default(),
            "$",
        );

        assert!(report.contains("For Downtown:"));
        assert!(report.contains("$52,000.00"));
        assert!(report.contains("$26.00/hr"));
        assert!(report.contains("$25.65/hr"));
        assert!(report.contains("$22.80/hr"));
        assert!(report.contains("Round trip:             20.0 miles"));
        assert!(report.contains("TOTAL yearly:           $700.00"));
        assert!(report.contains("Total committed time: 2250 hours"));
        assert!(report.contains("(12.3%)"));
        assert!(report.contains("PER PAYCHECK (bi-weekly)"));
        assert!(report.contains("Commute costs:  -$28.00"));
        assert!(!report.contains("Notes:"));
    }

    #[test]
    fn test_zero_hours_report_shows_na_and_note() {
        let mut inputs = car_commuter();
        inputs.schedule = WorkSchedule::new(0.0, 5);
        let report = format_calculation(None, &calculate(inputs), &EngineConfig::default(), "$");

        assert!(report.contains("(N/A)"));
        assert!(report.contains("Notes:"));
        assert!(report.contains("No paid work hours"));
        assert!(!report.contains("just to pay for your commute"));
    }

    #[test]
    fn test_walking_report_has_no_distance_lines() {
        let mut inputs = car_commuter();
        inputs.commute = CommuteProfile::new(20.0, 0.0, TransportMode::Walking);
        let report = format_calculation(None, &calculate(inputs), &EngineConfig::default(), "$");

        assert!(!report.contains("Round trip"));
        assert!(!report.contains("Maintenance/Depreciation"));
        assert!(report.contains("Daily costs (Walking)"));
    }

    #[test]
    fn test_quick_summary() {
        let summary = format_quick_summary("Test", &calculate(car_commuter()), "$");
        assert!(summary.starts_with("=== Results for Test ==="));
        assert!(summary.contains("Difference:       $3.20/hr"));
        assert!(summary.contains("Effective take-home: $1,972.00"));
    }
}
