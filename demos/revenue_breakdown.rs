//! Revenue and expense decomposition examples

use impuestos_core::{
    DocumentType, ExpenseBreakdown, RateConfig, RateUpdate, RevenueBreakdown,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Impuestos Core - Breakdown Examples\n");

    let config = RateConfig::default();
    let rates = config.snapshot();

    println!("📊 Current rates:");
    println!("  IVA:   {}%", rates.vat);
    println!("  PPM:   {}%", rates.provisional);
    println!("  Renta: {}%", rates.income_tax);
    println!();

    // 1. Invoiced sale: gross is VAT-inclusive
    println!("💰 Invoiced sale of $319.000:");
    let sale = RevenueBreakdown::decompose(319_000, DocumentType::Invoice, &rates)?;
    println!("  Gross:      ${}", sale.gross);
    println!("  Net:        ${}", sale.net);
    println!("  IVA:        ${}", sale.vat);
    println!("  PPM:        ${}", sale.provisional);
    println!("  Renta:      ${}", sale.income_tax);
    println!("  Net profit: ${}", sale.net_profit);
    println!();

    // 2. Undocumented cash job: no computed tax
    println!("💵 Cash job of $50.000 (sin documento):");
    let cash = RevenueBreakdown::decompose(50_000, DocumentType::None, &rates)?;
    println!("  Gross:      ${}", cash.gross);
    println!("  Net profit: ${}", cash.net_profit);
    println!();

    // 3. Invoiced purchase: VAT credit is reclaimable
    println!("🛒 Invoiced purchase of $119.000:");
    let purchase = ExpenseBreakdown::decompose(119_000, DocumentType::Invoice, &rates)?;
    println!("  Total:      ${}", purchase.total);
    println!("  Net:        ${}", purchase.net);
    println!("  IVA credit: ${}", purchase.vat_credit);
    println!();

    // 4. Receipt purchase: no credit right
    println!("🛒 Receipt purchase of $30.000:");
    let receipt = ExpenseBreakdown::decompose(30_000, DocumentType::Receipt, &rates)?;
    println!("  Total:      ${}", receipt.total);
    println!("  IVA credit: ${}", receipt.vat_credit);
    println!();

    // 5. Rates can change at runtime; held breakdowns keep their snapshot
    config.set_rates(RateUpdate::parse(Some("19"), Some("0.25"), None)?)?;
    let updated = config.snapshot();
    println!("🔧 After raising PPM to {}%:", updated.provisional);
    let resale = RevenueBreakdown::decompose(319_000, DocumentType::Invoice, &updated)?;
    println!("  PPM:        ${}", resale.provisional);
    println!("  Net profit: ${}", resale.net_profit);

    Ok(())
}
