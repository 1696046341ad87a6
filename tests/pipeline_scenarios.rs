//! End-to-end scenarios: the full history → window → filter → summary
//! pipeline driven through the controller, plus the wire shape the
//! dashboard client consumes.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde_json::json;

use pulseboard_engine::{
    DailyMetricRecord, DashboardController, GrowthPercent, MetricHistory, Segment, SegmentSet,
    WindowToken,
};

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .checked_add_days(Days::new(offset))
        .unwrap()
}

fn record(offset: u64, retail: f64, sme: f64, enterprise: f64) -> DailyMetricRecord {
    DailyMetricRecord {
        date: day(offset),
        segment_values: BTreeMap::from([
            (Segment::Retail, retail),
            (Segment::Sme, sme),
            (Segment::Enterprise, enterprise),
        ]),
        conversion_rate: 0.3,
        revenue_per_user: 6.0,
    }
}

fn walk(days: u64) -> MetricHistory {
    let records = (0..days)
        .map(|offset| {
            record(
                offset,
                100.0 + offset as f64,
                70.0 + (offset % 5) as f64,
                30.0,
            )
        })
        .collect();
    MetricHistory::new(records).unwrap()
}

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn compound_growth_over_full_segment_set() {
    init_logs();
    // selectedTotal sequence 100, 110, 121 -> 21% growth.
    let history = MetricHistory::new(vec![
        record(0, 50.0, 30.0, 20.0),
        record(1, 55.0, 33.0, 22.0),
        record(2, 60.5, 36.3, 24.2),
    ])
    .unwrap();

    let controller = DashboardController::new(history);
    let summary = controller.current_summary();
    assert!((summary.current_total - 121.0).abs() < 1e-9);
    let growth = summary.growth_percent.as_percent().unwrap();
    assert!((growth - 21.0).abs() < 1e-9);
}

#[test]
fn oversized_window_returns_whole_history() {
    let mut controller = DashboardController::new(walk(30));
    controller.set_window("90d").unwrap();
    assert_eq!(controller.current_rows().len(), 30);
    assert_eq!(controller.current_rows()[0].date, day(0));
}

#[test]
fn row_dates_match_windowed_slice_dates() {
    let controller = DashboardController::new(walk(200));
    let window = pulseboard_engine::resolve_window(controller.history(), WindowToken::Days90);
    let rows = controller.current_rows();
    assert_eq!(rows.len(), window.len());
    for (row, rec) in rows.iter().zip(window) {
        assert_eq!(row.date, rec.date);
    }
}

#[test]
fn pipeline_is_deterministic_across_runs() {
    let segments = SegmentSet::from_labels(["Retail", "SME"]).unwrap();

    let run = |history: &MetricHistory| {
        pulseboard_engine::pipeline::run(history, WindowToken::Days180, &segments)
    };

    let history = walk(365);
    let (rows_a, summary_a) = run(&history);
    let (rows_b, summary_b) = run(&history);
    assert_eq!(rows_a, rows_b);
    assert_eq!(summary_a, summary_b);
}

#[test]
fn full_set_law_matches_record_totals() {
    let history = walk(60);
    let rows = pulseboard_engine::apply_filter(history.records(), &SegmentSet::all());
    for (row, rec) in rows.iter().zip(history.records()) {
        assert_eq!(row.selected_total, rec.total());
    }
}

#[test]
fn snapshot_serializes_camel_case_for_the_client() {
    let history = MetricHistory::new(vec![record(0, 100.0, 70.0, 30.0)]).unwrap();
    let mut controller = DashboardController::new(history);
    controller.set_window("30d").unwrap();
    controller.set_segments(["SME"]).unwrap();

    let value = serde_json::to_value(controller.snapshot()).unwrap();

    assert_eq!(value["selection"]["window"], json!("30d"));
    assert_eq!(value["selection"]["segments"], json!(["SME"]));
    assert_eq!(value["rows"][0]["date"], json!("2025-01-01"));
    assert_eq!(value["rows"][0]["selectedTotal"], json!(70.0));
    assert_eq!(value["rows"][0]["segmentValues"], json!({ "SME": 70.0 }));
    assert_eq!(value["summary"]["currentTotal"], json!(70.0));
    assert_eq!(
        value["summary"]["growthPercent"],
        json!({ "kind": "percent", "value": 0.0 })
    );
    assert_eq!(value["summary"]["averageRevenuePerUser"], json!(6.0));
}

#[test]
fn undefined_growth_serializes_as_sentinel_not_infinity() {
    let history = MetricHistory::new(vec![
        record(0, 0.0, 0.0, 0.0),
        record(1, 50.0, 0.0, 0.0),
    ])
    .unwrap();
    let controller = DashboardController::new(history);

    assert_eq!(
        controller.current_summary().growth_percent,
        GrowthPercent::Undefined
    );

    let value = serde_json::to_value(controller.current_summary()).unwrap();
    assert_eq!(value["growthPercent"], json!({ "kind": "undefined" }));
}
