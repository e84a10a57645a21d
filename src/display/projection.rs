//! Expense projection display formatting

use crate::models::{ExpenseProjection, LaborCost};

use super::report::{format_rate, section};

fn labor_line(label: &str, labor: &LaborCost, symbol: &str) -> String {
    format!(
        "  {:<18}{:>12}  = {:.2} hours ({:.2} work days, {:.2} work weeks)\n",
        label,
        labor.cost.format_with_separators(symbol),
        labor.hours,
        labor.days,
        labor.weeks
    )
}

/// Format a single projection
pub fn format_projection(projection: &ExpenseProjection, symbol: &str) -> String {
    let mut output = section(&format!("WHAT IT COSTS: {}", projection.name));
    output.push_str(&format!(
        "At {} ({} expense):\n",
        format_rate(symbol, projection.hourly_wage),
        projection.cadence
    ));
    output.push_str(&labor_line("Cost:", &projection.labor(), symbol));

    if let Some(yearly) = &projection.annualized {
        output.push_str(&labor_line("Per year:", yearly, symbol));
    }
    if let Some(monthly) = &projection.monthly_equivalent {
        output.push_str(&labor_line("Per month:", monthly, symbol));
    }
    output
}
