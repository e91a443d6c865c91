use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ColumnId, Task};

/// One entry of the burndown series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BurndownPoint {
    /// Sprint day, 0 = sprint start.
    pub day: u32,
    /// Committed points not yet completed, from the current snapshot.
    pub remaining: u32,
    /// Linear ideal line, rounded to one decimal and floored at 0.
    pub ideal: f64,
}

/// Compute the day-by-day burndown series for a sprint.
///
/// `remaining` is derived from the current column of each task, not from a
/// completion history: every day carries the same value until tasks move.
/// The series always has `duration + 1` entries with contiguous `day`
/// values; a sprint whose end does not come after its start degenerates to
/// the single day-0 entry.
pub fn series(tasks: &[Task], start: NaiveDate, end: NaiveDate) -> Vec<BurndownPoint> {
    let duration = (end - start).num_days().max(0) as u32;

    // Backlog tasks are not part of the sprint commitment.
    let total: u32 = tasks
        .iter()
        .filter(|t| t.column != ColumnId::Backlog)
        .filter_map(|t| t.points)
        .sum();
    let completed: u32 = tasks
        .iter()
        .filter(|t| t.column == ColumnId::Done)
        .filter_map(|t| t.points)
        .sum();

    let points_per_day = if total > 0 && duration > 0 {
        f64::from(total) / f64::from(duration)
    } else {
        0.0
    };

    let mut points = Vec::with_capacity(duration as usize + 1);
    points.push(BurndownPoint {
        day: 0,
        remaining: total,
        ideal: f64::from(total),
    });

    for day in 1..=duration {
        let ideal = f64::from(total) - points_per_day * f64::from(day);
        points.push(BurndownPoint {
            day,
            remaining: total - completed,
            ideal: (round_1dp(ideal)).max(0.0),
        });
    }

    points
}

fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
