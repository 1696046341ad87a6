use crate::models::{DerivedRow, GrowthPercent, KpiSummary};

/// Reduce a windowed, filtered row sequence to scalar KPIs.
///
/// An empty window produces [`KpiSummary::zeroed`], not an error. The
/// conversion and revenue averages come from the rows' carried-over record
/// values, so they are unaffected by the segment selection.
pub fn summarize(rows: &[DerivedRow]) -> KpiSummary {
    let (first, last) = match (rows.first(), rows.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return KpiSummary::zeroed(),
    };

    let count = rows.len() as f64;
    let conversion_sum: f64 = rows.iter().map(|row| row.conversion_rate).sum();
    let revenue_sum: f64 = rows.iter().map(|row| row.revenue_per_user).sum();

    KpiSummary {
        current_total: last.selected_total,
        growth_percent: growth_between(first.selected_total, last.selected_total),
        average_conversion: conversion_sum / count,
        average_revenue_per_user: revenue_sum / count,
    }
}

/// Percent change with the zero-baseline pitfall handled explicitly:
/// flat-at-zero is zero growth, growth from zero has no finite percentage.
fn growth_between(first: f64, last: f64) -> GrowthPercent {
    if first == 0.0 {
        if last == 0.0 {
            GrowthPercent::ZERO
        } else {
            GrowthPercent::Undefined
        }
    } else {
        GrowthPercent::Percent((last - first) / first * 100.0)
    }
}
