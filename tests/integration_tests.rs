//! Integration tests for impuestos-core

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use impuestos_core::{
    aggregate_expense_vat_credit, aggregate_revenue, calendar, compute_monthly_vat,
    DocumentType, ExpenseBreakdown, ExpenseItem, RateConfig, RateUpdate, RevenueBreakdown,
    RevenueItem, SettlementStatus, TaxRates,
};

#[test]
fn test_complete_monthly_workflow() {
    let config = RateConfig::default();
    let rates = config.snapshot();

    // One month of agency activity: two documented sales, one cash job,
    // two invoiced expenses (one still pending) and a receipt expense.
    let revenue = vec![
        RevenueItem::new(319_000, DocumentType::Invoice),
        RevenueItem::new(119_000, DocumentType::Receipt),
        RevenueItem::new(50_000, DocumentType::None),
    ];

    let expenses = vec![
        ExpenseItem::new(119_000, DocumentType::Invoice, SettlementStatus::Paid),
        ExpenseItem::new(59_500, DocumentType::Invoice, SettlementStatus::Pending),
        ExpenseItem::new(30_000, DocumentType::Receipt, SettlementStatus::Paid),
    ];

    let totals = aggregate_revenue(&revenue, &rates).unwrap();
    assert_eq!(totals.gross, 488_000);
    assert_eq!(totals.vat, 69_933);
    assert_eq!(totals.invoice_count, 1);
    assert_eq!(totals.receipt_count, 1);
    assert_eq!(totals.undocumented_count, 1);

    // The host only hands settled expenses to the VAT credit aggregation
    let settled: Vec<ExpenseItem> = expenses
        .iter()
        .filter(|e| e.is_settled())
        .cloned()
        .collect();

    let credit = aggregate_expense_vat_credit(&settled, &rates).unwrap();
    assert_eq!(credit.total_vat_credit, 19_000);
    assert_eq!(credit.total_net_purchases, 100_000);
    assert_eq!(credit.count_with_invoice, 1);

    let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    let summary = compute_monthly_vat(2024, 5, &revenue, &settled, &rates, today).unwrap();

    assert_eq!(summary.vat_debit, 69_933);
    assert_eq!(summary.vat_credit, 19_000);
    assert_eq!(summary.vat_due, 50_933);
    assert_eq!(
        summary.due_date,
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    );
    assert_eq!(summary.days_remaining, 9);
    assert_eq!(calendar::month_name(summary.month).unwrap(), "Mayo");
}

#[test]
fn test_rate_change_applies_only_to_later_breakdowns() {
    let config = RateConfig::default();

    let before = config.snapshot();
    let old_breakdown =
        RevenueBreakdown::decompose(119_000, DocumentType::Invoice, &before).unwrap();

    config
        .set_rates(RateUpdate {
            vat: Some(BigDecimal::from(10)),
            ..RateUpdate::default()
        })
        .unwrap();

    let after = config.snapshot();
    let new_breakdown =
        RevenueBreakdown::decompose(110_000, DocumentType::Invoice, &after).unwrap();

    // Breakdown held by the caller keeps the rates it was computed under
    assert_eq!(old_breakdown.net, 100_000);
    assert_eq!(old_breakdown.rates_used.vat, BigDecimal::from(19));
    assert_eq!(new_breakdown.net, 100_000);
    assert_eq!(new_breakdown.rates_used.vat, BigDecimal::from(10));
}

#[test]
fn test_round_trip_and_credit_invariants() {
    let rates = TaxRates::default();

    for gross in [1, 13, 119, 5_000, 84_034, 100_000, 319_000, 7_654_321] {
        for document_type in [DocumentType::Invoice, DocumentType::Receipt] {
            let revenue = RevenueBreakdown::decompose(gross, document_type, &rates).unwrap();
            assert_eq!(revenue.net + revenue.vat, gross);
            assert_eq!(
                revenue.net_profit,
                revenue.net - revenue.provisional - revenue.income_tax
            );
        }

        let no_doc = RevenueBreakdown::decompose(gross, DocumentType::None, &rates).unwrap();
        assert_eq!(no_doc.net_profit, gross);
        assert_eq!(no_doc.vat, 0);
        assert_eq!(no_doc.provisional, 0);
        assert_eq!(no_doc.income_tax, 0);

        let invoiced = ExpenseBreakdown::decompose(gross, DocumentType::Invoice, &rates).unwrap();
        assert_eq!(invoiced.net + invoiced.vat_credit, gross);

        for document_type in [DocumentType::Receipt, DocumentType::None] {
            let expense = ExpenseBreakdown::decompose(gross, document_type, &rates).unwrap();
            assert_eq!(expense.vat_credit, 0);
            assert_eq!(expense.net, gross);
        }
    }
}

#[test]
fn test_vat_due_never_negative() {
    let rates = TaxRates::default();
    let today = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();

    // Credit far in excess of debit
    let revenue = [RevenueItem::new(11_900, DocumentType::Invoice)];
    let expenses = [
        ExpenseItem::new(595_000, DocumentType::Invoice, SettlementStatus::Paid),
        ExpenseItem::new(238_000, DocumentType::Invoice, SettlementStatus::Paid),
    ];

    let summary = compute_monthly_vat(2024, 7, &revenue, &expenses, &rates, today).unwrap();
    assert_eq!(summary.vat_debit, 1_900);
    assert_eq!(summary.vat_credit, 133_000);
    assert_eq!(summary.vat_due, 0);
}

#[test]
fn test_overdue_month_reports_negative_days() {
    let rates = TaxRates::default();
    let today = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();

    let summary = compute_monthly_vat(2024, 5, &[], &[], &rates, today).unwrap();
    assert_eq!(summary.days_remaining, -8);
}

#[test]
fn test_breakdown_serialization_uses_wire_tags() {
    let rates = TaxRates::default();
    let breakdown = RevenueBreakdown::decompose(119_000, DocumentType::Invoice, &rates).unwrap();

    let json = serde_json::to_value(&breakdown).unwrap();
    assert_eq!(json["gross"], 119_000);
    assert_eq!(json["net"], 100_000);
    assert_eq!(json["vat"], 19_000);
    assert_eq!(json["document_type"], "factura");

    let parsed: RevenueBreakdown = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, breakdown);
}

#[test]
fn test_expense_items_deserialize_from_host_records() {
    let raw = r#"[
        {"amount": 119000, "document_type": "factura", "status": "pagado"},
        {"amount": 45000, "document_type": "boleta", "status": "pendiente"}
    ]"#;

    let items: Vec<ExpenseItem> = serde_json::from_str(raw).unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_settled());
    assert_eq!(items[0].document_type, DocumentType::Invoice);
    assert!(!items[1].is_settled());
    assert_eq!(items[1].document_type, DocumentType::Receipt);
}
