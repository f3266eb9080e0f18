//! Monthly VAT-due summary example

use chrono::NaiveDate;
use impuestos_core::{
    calendar, compute_monthly_vat, DocumentType, ExpenseItem, RevenueItem, SettlementStatus,
    TaxRates,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Impuestos Core - Monthly VAT Example\n");

    let rates = TaxRates::default();

    // May activity as the host's data layer would hand it over
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

    // Only settled expenses count toward the credit
    let settled: Vec<ExpenseItem> = expenses
        .into_iter()
        .filter(|e| e.is_settled())
        .collect();

    let today = NaiveDate::from_ymd_opt(2024, 6, 3).ok_or("bad date")?;
    let summary = compute_monthly_vat(2024, 5, &revenue, &settled, &rates, today)?;

    println!(
        "📅 {} {} VAT position:",
        calendar::month_name(summary.month)?,
        summary.year
    );
    println!("  IVA débito:  ${}", summary.vat_debit);
    println!("  IVA crédito: ${}", summary.vat_credit);
    println!("  IVA a pagar: ${}", summary.vat_due);
    println!("  Vence:       {}", summary.due_date);
    println!("  Quedan:      {} días", summary.days_remaining);

    Ok(())
}
