//! Statement rendering and parsing tests

use core_kernel::Money;
use domain_rating::breakdown::labels;
use domain_rating::{NcbTier, PremiumCalculator, QuoteStatement, Section};
use rust_decimal_macros::dec;
use test_utils::{DateFixtures, QuoteFixtures, QuoteRequestBuilder};

fn plain_statement() -> String {
    let breakdown = PremiumCalculator::default()
        .quote(&QuoteFixtures::plain_vehicle(), DateFixtures::today())
        .unwrap();
    QuoteStatement::render(&breakdown, None).to_string()
}

#[test]
fn test_plain_vehicle_statement() {
    let text = plain_statement();

    assert!(text.contains("[Own Damage (OD) Premium]\n  Basic OD: Rs 8,755.00"));
    assert!(text.contains("  Basic TP: Rs 27,186.00"));
    assert!(text.contains("  OD GST @ 18%: Rs 1,575.90"));
    assert!(text.contains("  TP GST @ 12% (Basic TP): Rs 3,262.32"));
    assert!(text.contains("  GST (OD + TP): Rs 4,838.22"));
    assert!(text.contains("  Grand Total: Rs 40,779.22"));
}

#[test]
fn test_zero_lines_hidden_except_pinned() {
    let text = plain_statement();

    assert!(!text.contains(labels::GVW_LOADING));
    assert!(!text.contains(labels::ANTI_THEFT));
    assert!(!text.contains(labels::TP_GST_ADDONS));
    assert!(text.contains("  NCB Discount: Rs 0.00"));
}

#[test]
fn test_discounts_render_negative() {
    let request = QuoteRequestBuilder::new().with_ncb(NcbTier::Twenty).build();
    let breakdown = PremiumCalculator::default()
        .quote(&request, DateFixtures::today())
        .unwrap();
    let text = QuoteStatement::render(&breakdown, None).to_string();

    assert!(text.contains("  NCB Discount: -Rs 2,188.75"));
}

#[test]
fn test_parse_reproduces_rendered_totals() {
    let statement = QuoteStatement::parse(&plain_statement()).unwrap();

    assert_eq!(
        statement.amount(Section::Summary, labels::GRAND_TOTAL),
        Some(Money::new(dec!(40779.22)))
    );
    assert_eq!(
        statement.amount(Section::Summary, labels::TOTAL_OD),
        Some(Money::from_rupees(8755))
    );
    assert_eq!(statement.amount(Section::OwnDamage, labels::GVW_LOADING), None);
}

#[test]
fn test_amounts_rounded_to_paise_only_on_statement() {
    let request = QuoteRequestBuilder::new().with_anti_theft().build();
    let breakdown = PremiumCalculator::default()
        .quote(&request, DateFixtures::today())
        .unwrap();
    let statement = QuoteStatement::render(&breakdown, None);

    assert_eq!(breakdown.discounts.anti_theft, Money::new(dec!(-218.875)));
    assert_eq!(
        statement.amount(Section::Discounts, labels::ANTI_THEFT),
        Some(Money::new(dec!(-218.88)))
    );
}

#[test]
fn test_policy_details_header_round_trip() {
    let breakdown = PremiumCalculator::default()
        .quote(&QuoteFixtures::plain_vehicle(), DateFixtures::today())
        .unwrap();
    let details = QuoteFixtures::policy_details();
    let statement = QuoteStatement::render(&breakdown, Some(&details));
    let text = statement.to_string();

    assert!(text.contains("[Policy Details]\n  Insured Name: Ravi Transport Co"));
    assert!(text.contains("  Registration No.: MH-12-AB-1234"));
    assert_eq!(QuoteStatement::parse(&text).unwrap(), statement);
}

#[test]
fn test_summary_banner() {
    let statement = QuoteStatement::parse(&plain_statement()).unwrap();
    assert_eq!(statement.summary_banner(), "Grand Total: Rs 40,779");
}
