//! CSV Export functionality
//!
//! Flattens records and projections into spreadsheet-friendly rows.

use crate::error::{TrueWageError, TrueWageResult};
use crate::models::{PayFrequency, TransportMode};
use crate::storage::Storage;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct RecordRow<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Pay")]
    pay: f64,
    #[serde(rename = "Frequency")]
    frequency: PayFrequency,
    #[serde(rename = "Hours Per Day")]
    daily_hours: f64,
    #[serde(rename = "Days Per Week")]
    days_per_week: u8,
    #[serde(rename = "Mode")]
    mode: String,
    #[serde(rename = "One Way Minutes")]
    one_way_minutes: f64,
    #[serde(rename = "One Way Miles")]
    one_way_distance: f64,
    #[serde(rename = "Extra Daily Cost")]
    extra_daily_cost: f64,
    #[serde(rename = "True Wage")]
    true_wage: String,
    #[serde(rename = "Notes")]
    notes: &'a str,
    #[serde(rename = "Saved At")]
    created_at: String,
}

#[derive(Serialize)]
struct ProjectionRow<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Record ID")]
    record_id: String,
    #[serde(rename = "Expense")]
    name: &'a str,
    #[serde(rename = "Cost")]
    cost: f64,
    #[serde(rename = "Cadence")]
    cadence: String,
    #[serde(rename = "Hourly Wage")]
    hourly_wage: String,
    #[serde(rename = "Hours")]
    hours: String,
    #[serde(rename = "Days")]
    days: String,
    #[serde(rename = "Weeks")]
    weeks: String,
}

fn mode_tag(mode: &TransportMode) -> &'static str {
    match mode {
        TransportMode::Car { .. } => "car",
        TransportMode::ElectricVehicle { .. } => "ev",
        TransportMode::PublicTransit { .. } => "transit",
        TransportMode::Biking => "bike",
        TransportMode::Walking => "walk",
    }
}

fn csv_err(e: csv::Error) -> TrueWageError {
    TrueWageError::Export(e.to_string())
}

/// Export all records to CSV
pub fn export_records_csv<W: Write>(storage: &Storage, writer: &mut W) -> TrueWageResult<()> {
    let records = storage.records.get_all()?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    for record in &records {
        csv_writer
            .serialize(RecordRow {
                id: record.id.to_string(),
                name: &record.name,
                pay: record.pay.amount.as_dollars(),
                frequency: record.pay.frequency,
                daily_hours: record.schedule.daily_hours,
                days_per_week: record.schedule.days_per_week,
                mode: mode_tag(&record.commute.mode).to_string(),
                one_way_minutes: record.commute.one_way_minutes,
                one_way_distance: record.commute.one_way_distance,
                extra_daily_cost: record.commute.extra_daily_cost.as_dollars(),
                true_wage: format!("{:.2}", record.true_wage),
                notes: &record.notes,
                created_at: record.created_at.to_rfc3339(),
            })
            .map_err(csv_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrueWageError::Export(e.to_string()))?;
    Ok(())
}

/// Export all projections to CSV
pub fn export_projections_csv<W: Write>(storage: &Storage, writer: &mut W) -> TrueWageResult<()> {
    let projections = storage.projections.get_all()?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    for stored in &projections {
        let p = &stored.projection;
        csv_writer
            .serialize(ProjectionRow {
                id: stored.id.to_string(),
                record_id: stored.record_id.to_string(),
                name: &p.name,
                cost: p.cost.as_dollars(),
                cadence: p.cadence.to_string(),
                hourly_wage: format!("{:.2}", p.hourly_wage),
                hours: format!("{:.2}", p.hours_required),
                days: format!("{:.2}", p.days_required),
                weeks: format!("{:.2}", p.weeks_required),
            })
            .map_err(csv_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrueWageError::Export(e.to_string()))?;
    Ok(())
}
