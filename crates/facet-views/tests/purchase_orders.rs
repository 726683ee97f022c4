mod common;
use common::at_midnight;

use facet_engine::ListEngine;
use facet_query::{DateWindow, SortDirection};
use facet_views::purchase_orders::{PurchaseOrder, engine_config, sample_records};

fn engine() -> ListEngine<PurchaseOrder> {
    ListEngine::with_records(engine_config(), sample_records()).unwrap()
}

// Fixture orders were created 2024-01-15 through 2024-01-25.
const NOW: &str = "2024-02-01";

#[test]
fn tiles_match_the_dashboard() {
    let engine = engine();
    let snap = engine.evaluate_at(at_midnight(NOW)).unwrap();
    assert_eq!(snap.stats["total"], 5.0);
    assert_eq!(snap.stats["draft"], 1.0);
    assert_eq!(snap.stats["pending"], 1.0);
    assert_eq!(snap.stats["active"], 2.0);
    assert_eq!(snap.stats["delivered"], 1.0);
    assert_eq!(snap.stats["total_value"], 491_250.0);
}

#[test]
fn vendor_facet_keys_on_vendor_code() {
    let mut engine = engine();
    engine.set_facet("vendor", "VEND-001");
    let snap = engine.evaluate_at(at_midnight(NOW)).unwrap();
    assert_eq!(snap.records.len(), 2);
    assert!(snap.records.iter().all(|r| r.vendor_code == "VEND-001"));
}

#[test]
fn sort_by_amount_descending() {
    let mut engine = engine();
    engine.set_sort("amount", SortDirection::Desc);
    let amounts: Vec<f64> = engine
        .evaluate_at(at_midnight(NOW))
        .unwrap()
        .records
        .iter()
        .map(|r| r.total_amount)
        .collect();
    assert_eq!(
        amounts,
        vec![210_000.0, 125_000.0, 98_500.0, 45_000.0, 12_750.0]
    );
}

#[test]
fn vendor_sort_is_caseless_and_stable_on_ties() {
    let mut engine = engine();
    engine.set_sort("vendor", SortDirection::Asc);
    let ids: Vec<&str> = engine
        .evaluate_at(at_midnight(NOW))
        .unwrap()
        .records
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    // The two VEND-001 orders share a vendor name and keep insertion order.
    assert_eq!(ids, vec!["5", "3", "1", "4", "2"]);
}

#[test]
fn quarter_window_holds_the_january_orders() {
    let mut engine = engine();
    engine.set_date_range(DateWindow::Last90Days);
    assert_eq!(engine.evaluate_at(at_midnight(NOW)).unwrap().records.len(), 5);

    // 2024-01-25 is exactly seven days old, so the inclusive boundary
    // keeps that one order.
    engine.set_date_range(DateWindow::Last7Days);
    let snap = engine.evaluate_at(at_midnight(NOW)).unwrap();
    assert_eq!(snap.records.len(), 1);
    assert_eq!(snap.records[0].po_number, "PO-2024-005");
}

#[test]
fn today_window_matches_the_calendar_day() {
    let mut engine = engine();
    engine.set_date_range(DateWindow::Today);
    let snap = engine.evaluate_at(at_midnight("2024-01-15")).unwrap();
    assert_eq!(snap.records.len(), 1);
    assert_eq!(snap.records[0].po_number, "PO-2024-001");
}

#[test]
fn search_hits_optional_requisition_numbers() {
    let mut engine = engine();
    engine.set_search_text("req-2024-051");
    let snap = engine.evaluate_at(at_midnight(NOW)).unwrap();
    assert_eq!(snap.records.len(), 1);
    assert_eq!(snap.records[0].po_number, "PO-2024-003");
}
