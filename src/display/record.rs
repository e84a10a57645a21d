//! Saved record display formatting
//!
//! Record and projection lists are rendered with `tabled`; a single record
//! gets a detail view.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{ProjectionRecord, WageRecord};

use super::report::{format_rate, truncate};

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Pay")]
    pay: String,
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "True wage")]
    true_wage: String,
    #[tabled(rename = "Saved")]
    saved: String,
}

#[derive(Tabled)]
struct ProjectionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Expense")]
    name: String,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Cadence")]
    cadence: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Days")]
    days: String,
    #[tabled(rename = "Weeks")]
    weeks: String,
}

/// Format a list of records as a table
pub fn format_record_list(records: &[WageRecord], symbol: &str) -> String {
    if records.is_empty() {
        return "No saved records.".to_string();
    }

    let rows = records.iter().map(|r| RecordRow {
        id: r.id.to_string(),
        name: truncate(&r.name, 30),
        pay: format!(
            "{} {}",
            r.pay.amount.format_with_separators(symbol),
            r.pay.frequency
        ),
        mode: r.commute.mode.to_string(),
        true_wage: format_rate(symbol, r.true_wage),
        saved: r.created_at.format("%Y-%m-%d").to_string(),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Format a single record's details
pub fn format_record_details(record: &WageRecord, projections: &[ProjectionRecord], symbol: &str) -> String {
    let commute = &record.commute;
    let mut output = String::new();

    output.push_str(&format!("Record: {}\n", record.name));
    output.push_str(&format!("  ID:             {}\n", record.id));
    output.push_str(&format!(
        "  Saved:          {}\n",
        record.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Pay:            {} {}\n",
        record.pay.amount.format_with_separators(symbol),
        record.pay.frequency
    ));
    output.push_str(&format!(
        "  Schedule:       {:.1} hours/day, {} days/week\n",
        record.schedule.daily_hours, record.schedule.days_per_week
    ));
    output.push_str(&format!("  Mode:           {}\n", commute.mode));
    output.push_str(&format!(
        "  Commute:        {:.0} min each way",
        commute.one_way_minutes
    ));
    if commute.mode.uses_distance() {
        output.push_str(&format!(", {:.1} miles each way", commute.one_way_distance));
    }
    output.push('\n');
    if !commute.extra_daily_cost.is_zero() {
        output.push_str(&format!(
            "  {:<16}{}\n",
            format!("{}:", commute.mode.extra_cost_label()),
            commute.extra_daily_cost.format_with_separators(symbol)
        ));
    }
    output.push_str(&format!(
        "  True wage:      {}\n",
        format_rate(symbol, record.true_wage)
    ));
    if !record.notes.is_empty() {
        output.push_str(&format!("  Notes:          {}\n", record.notes));
    }

    if !projections.is_empty() {
        output.push_str("\nProjections:\n");
        output.push_str(&format_projection_list(projections, symbol));
        output.push('\n');
    }

    output
}

/// Format projections as a table
pub fn format_projection_list(projections: &[ProjectionRecord], symbol: &str) -> String {
    if projections.is_empty() {
        return "No saved projections.".to_string();
    }

    let rows = projections.iter().map(|p| {
        let e = &p.projection;
        ProjectionRow {
            id: p.id.to_string(),
            name: truncate(&e.name, 30),
            cost: e.cost.format_with_separators(symbol),
            cadence: e.cadence.to_string(),
            hours: format!("{:.2}", e.hours_required),
            days: format!("{:.2}", e.days_required),
            weeks: format!("{:.2}", e.weeks_required),
        }
    });

    Table::new(rows).with(Style::psql()).to_string()
}
