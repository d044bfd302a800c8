//! Tabular rendering of an amortization result.
//!
//! Amounts are rounded to two decimal places for display only; the schedule
//! itself keeps full precision.

use rust_decimal::Decimal;
use tabled::{Table, builder::Builder};

use crate::schedule::{AmortizationResult, LoanTerms};

fn money(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

/// Renders the month-by-month schedule, one row per payment.
pub fn schedule_table(result: &AmortizationResult) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Period", "Payment", "Principal", "Interest", "Balance"]);

    for (index, period) in result.schedule.iter().enumerate() {
        builder.push_record([
            (index + 1).to_string(),
            money(period.payment_amount),
            money(period.principal_portion),
            money(period.interest_portion),
            money(period.remaining_balance),
        ]);
    }

    Table::from(builder).to_string()
}

/// Renders the loan totals: borrowed capital, fixed payment, total interest
/// and total paid over the life of the loan.
pub fn summary_table(terms: &LoanTerms, result: &AmortizationResult) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    builder.push_record(["Principal", &money(terms.principal())]);
    builder.push_record(["Monthly payment", &money(result.periodic_payment)]);
    builder.push_record(["Total interest", &money(result.total_interest)]);
    builder.push_record(["Total paid", &money(result.total_paid)]);

    Table::from(builder).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{LoanTerms, amortize};
    use rust_decimal_macros::dec;

    #[test]
    fn schedule_table_has_one_row_per_period() {
        let terms = LoanTerms::new(dec!(100000), dec!(6), 1).unwrap();
        let result = amortize(&terms);
        let table = schedule_table(&result);

        // The fixed payment shows up once in each of the 12 rows.
        assert_eq!(table.matches("8606.64").count(), 12);
        assert!(table.contains("Period"));
        assert!(table.contains("91893.36"));
    }

    #[test]
    fn summary_shows_totals() {
        let terms = LoanTerms::new(dec!(1200), dec!(0), 1).unwrap();
        let result = amortize(&terms);
        let table = summary_table(&terms, &result);

        assert!(table.contains("Total interest"));
        assert!(table.contains("1200.00"));
        assert!(table.contains("100.00"));
    }

    #[test]
    fn amounts_always_show_two_decimals() {
        // Zero-rate amounts are whole numbers; they still render as x.00.
        let terms = LoanTerms::new(dec!(1200), dec!(0), 1).unwrap();
        let result = amortize(&terms);
        let table = schedule_table(&result);

        assert!(table.contains("100.00"));
        assert!(table.contains("0.00"));
        // No cell renders a bare whole number.
        assert!(!table.contains(" 100 "));
        assert!(!table.contains(" 0 "));
    }
}
