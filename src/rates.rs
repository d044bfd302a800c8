//! Historical annual interest rates: dataset loading and a text chart.
//!
//! The dataset is a static JSON array of year/rate pairs, the same shape the
//! original rates feed uses. Loading it is a one-shot operation with no
//! retry; callers treat a failure as a warning, never as a reason to drop
//! the calculation output.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Width of the longest bar in the chart, in characters.
const CHART_WIDTH: u32 = 50;

/// One year of the historical series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    pub year: i32,
    /// Annual rate as a percentage.
    pub rate: Decimal,
}

/// Loads the rates dataset from a JSON file.
///
/// # Errors
///
/// [`ScheduleError::EmptyDataset`] when the file parses but holds no points;
/// I/O and JSON errors otherwise.
pub fn load(path: &Path) -> Result<Vec<RatePoint>> {
    let json = fs::read_to_string(path)?;
    let points: Vec<RatePoint> = serde_json::from_str(&json)?;
    if points.is_empty() {
        return Err(ScheduleError::EmptyDataset);
    }
    Ok(points)
}

/// Renders the series as a horizontal bar chart, one row per year, bars
/// scaled against the highest rate in the series.
pub fn chart(points: &[RatePoint]) -> String {
    let max_rate = points
        .iter()
        .map(|p| p.rate)
        .max()
        .unwrap_or(Decimal::ZERO);

    let mut out = String::from("Annual interest rate (%)\n");
    for point in points {
        let width = bar_width(point.rate, max_rate);
        let bar = "#".repeat(width as usize);
        out.push_str(&format!(
            "{:>5} | {:<chart_width$} {}\n",
            point.year,
            bar,
            point.rate,
            chart_width = CHART_WIDTH as usize,
        ));
    }
    out
}

fn bar_width(rate: Decimal, max_rate: Decimal) -> u32 {
    if max_rate <= Decimal::ZERO || rate <= Decimal::ZERO {
        return 0;
    }
    let scaled = rate / max_rate * Decimal::from(CHART_WIDTH);
    scaled.round().to_u32().unwrap_or(0).min(CHART_WIDTH)
}
