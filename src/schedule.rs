//! Fixed-payment amortization of a fixed-rate, fixed-term loan.
//!
//! The payment comes from the standard annuity formula
//! `PMT = P * r * (1 + r)^n / ((1 + r)^n - 1)` where `r` is the monthly rate
//! and `n` the number of monthly payments. A zero rate degenerates the formula
//! (division by zero), so that case is handled as straight-line repayment
//! `P / n` instead.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Longest accepted loan term. Keeps `period_count` far away from `u32`
/// overflow and the compound term within `Decimal` range.
pub const MAX_TERM_YEARS: u32 = 1000;

/// Validated input for a loan calculation.
///
/// Construct through [`LoanTerms::new`]; the calculator itself assumes the
/// preconditions hold and does not re-check them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// The borrowed capital.
    principal: Decimal,
    /// Nominal annual interest rate as a percentage (5.5 means 5.5%).
    annual_rate_percent: Decimal,
    /// Loan duration in whole years.
    term_years: u32,
}

impl LoanTerms {
    /// Validates and builds loan terms.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidInput`] when `principal` is not a
    /// positive number, `annual_rate_percent` is negative, or `term_years`
    /// is zero or above [`MAX_TERM_YEARS`]. A zero rate is accepted and
    /// handled as an interest-free loan.
    pub fn new(principal: Decimal, annual_rate_percent: Decimal, term_years: u32) -> Result<Self> {
        if principal <= Decimal::ZERO {
            return Err(ScheduleError::InvalidInput {
                field: "principal",
                reason: format!("must be positive, got {principal}"),
            });
        }
        if annual_rate_percent < Decimal::ZERO {
            return Err(ScheduleError::InvalidInput {
                field: "annual_rate_percent",
                reason: format!("must not be negative, got {annual_rate_percent}"),
            });
        }
        if term_years == 0 {
            return Err(ScheduleError::InvalidInput {
                field: "term_years",
                reason: "must be at least 1".into(),
            });
        }
        if term_years > MAX_TERM_YEARS {
            return Err(ScheduleError::InvalidInput {
                field: "term_years",
                reason: format!("must be at most {MAX_TERM_YEARS}, got {term_years}"),
            });
        }
        Ok(LoanTerms {
            principal,
            annual_rate_percent,
            term_years,
        })
    }

    pub fn principal(&self) -> Decimal {
        self.principal
    }

    pub fn annual_rate_percent(&self) -> Decimal {
        self.annual_rate_percent
    }

    pub fn term_years(&self) -> u32 {
        self.term_years
    }

    /// Number of monthly payments over the life of the loan.
    pub fn period_count(&self) -> u32 {
        self.term_years * 12
    }

    /// Monthly rate as a fraction: the nominal annual percentage divided by
    /// twelve and by one hundred.
    pub fn periodic_rate(&self) -> Decimal {
        self.annual_rate_percent / dec!(12) / dec!(100)
    }
}

/// One month of the repayment schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPeriod {
    /// The fixed monthly payment.
    pub payment_amount: Decimal,
    /// Capital repaid this month.
    pub principal_portion: Decimal,
    /// Interest charged this month.
    pub interest_portion: Decimal,
    /// Outstanding principal after this month's payment. Never negative;
    /// exactly zero on the final period.
    pub remaining_balance: Decimal,
}

/// Full result of an amortization: the fixed payment, the month-by-month
/// schedule, and the lifetime totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// The fixed monthly payment.
    pub periodic_payment: Decimal,
    /// One entry per month, in payment order.
    pub schedule: Vec<PaymentPeriod>,
    /// Sum of the interest portions of every period.
    pub total_interest: Decimal,
    /// Sum of the fixed payment over every period.
    pub total_paid: Decimal,
}

/// Computes the fixed monthly payment for the given terms.
///
/// Uses the annuity formula, or straight-line division when the rate is
/// zero, where the formula would divide by zero.
pub fn periodic_payment(terms: &LoanTerms) -> Decimal {
    let r = terms.periodic_rate();
    let n = terms.period_count();

    if r.is_zero() {
        return terms.principal() / Decimal::from(n);
    }

    let one_plus_r_pow_n = (Decimal::ONE + r).powu(n.into());
    terms.principal() * r * one_plus_r_pow_n / (one_plus_r_pow_n - Decimal::ONE)
}

/// Generates the complete repayment schedule for the given terms.
///
/// Pure function of its input: the same terms always produce the identical
/// result. The final period's principal portion is the entire remaining
/// balance, so the schedule always terminates at exactly zero regardless of
/// rounding drift accumulated over earlier periods.
pub fn amortize(terms: &LoanTerms) -> AmortizationResult {
    let payment = periodic_payment(terms);
    let rate = terms.periodic_rate();
    let period_count = terms.period_count();

    let mut balance = terms.principal();
    let mut total_interest = Decimal::ZERO;
    let mut total_paid = Decimal::ZERO;
    let mut schedule = Vec::with_capacity(period_count as usize);

    for period in 1..=period_count {
        let interest_portion = balance * rate;
        // The last period absorbs all residual error: it repays the balance
        // itself rather than payment minus interest.
        let principal_portion = if period == period_count {
            balance
        } else {
            payment - interest_portion
        };

        balance -= principal_portion;
        balance = balance.max(Decimal::ZERO);

        total_interest += interest_portion;
        total_paid += payment;

        schedule.push(PaymentPeriod {
            payment_amount: payment,
            principal_portion,
            interest_portion,
            remaining_balance: balance,
        });
    }

    AmortizationResult {
        periodic_payment: payment,
        schedule,
        total_interest,
        total_paid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn terms(principal: Decimal, rate: Decimal, years: u32) -> LoanTerms {
        LoanTerms::new(principal, rate, years).unwrap()
    }

    #[test]
    fn worked_example_one_year_at_six_percent() {
        let t = terms(dec!(100000), dec!(6), 1);
        assert_eq!(t.period_count(), 12);
        assert_eq!(t.periodic_rate(), dec!(0.005));

        let result = amortize(&t);
        assert_eq!(result.periodic_payment.round_dp(2), dec!(8606.64));

        let first = &result.schedule[0];
        assert_eq!(first.interest_portion.round_dp(2), dec!(500.00));
        assert_eq!(first.principal_portion.round_dp(2), dec!(8106.64));
        assert_eq!(first.remaining_balance.round_dp(2), dec!(91893.36));

        let last = result.schedule.last().unwrap();
        assert_eq!(last.remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn zero_rate_is_straight_line() {
        let t = terms(dec!(1200), dec!(0), 1);
        let result = amortize(&t);

        assert_eq!(result.periodic_payment, dec!(100));
        assert_eq!(result.total_interest, Decimal::ZERO);
        for period in &result.schedule {
            assert_eq!(period.interest_portion, Decimal::ZERO);
            assert_eq!(period.principal_portion, dec!(100));
        }
        assert_eq!(result.schedule.last().unwrap().remaining_balance, Decimal::ZERO);
    }

    #[rstest]
    #[case(dec!(100000), dec!(6), 1)]
    #[case(dec!(360000), dec!(10.5), 35)]
    #[case(dec!(250000), dec!(3.75), 30)]
    #[case(dec!(1200), dec!(0), 1)]
    #[case(dec!(5000), dec!(19.9), 2)]
    fn schedule_invariants(
        #[case] principal: Decimal,
        #[case] rate: Decimal,
        #[case] years: u32,
    ) {
        let t = terms(principal, rate, years);
        let result = amortize(&t);

        assert_eq!(result.schedule.len(), t.period_count() as usize);
        assert_eq!(result.schedule.last().unwrap().remaining_balance, Decimal::ZERO);

        // Balance never increases and never goes negative.
        let mut previous = t.principal();
        for period in &result.schedule {
            assert!(period.remaining_balance <= previous);
            assert!(period.remaining_balance >= Decimal::ZERO);
            previous = period.remaining_balance;
        }

        // Totals are exactly what the schedule says they are.
        let interest_sum: Decimal = result.schedule.iter().map(|p| p.interest_portion).sum();
        assert_eq!(interest_sum, result.total_interest);
        assert_eq!(
            result.total_paid,
            result.periodic_payment * Decimal::from(t.period_count()),
        );

        // Principal portions add back up to the borrowed capital.
        let principal_sum: Decimal = result.schedule.iter().map(|p| p.principal_portion).sum();
        assert!((principal_sum - t.principal()).abs() < dec!(0.000001));
    }

    #[test]
    fn longest_term_never_overflows() {
        let t = terms(dec!(100000), dec!(5), MAX_TERM_YEARS);
        assert_eq!(t.period_count(), MAX_TERM_YEARS * 12);

        let result = amortize(&t);
        assert_eq!(result.schedule.len(), t.period_count() as usize);
        assert_eq!(result.schedule.last().unwrap().remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn amortize_is_idempotent() {
        let t = terms(dec!(180000), dec!(4.25), 20);
        assert_eq!(amortize(&t), amortize(&t));
    }

    #[rstest]
    #[case(dec!(0), dec!(5), 10)]
    #[case(dec!(-1000), dec!(5), 10)]
    #[case(dec!(100000), dec!(-0.5), 10)]
    #[case(dec!(100000), dec!(5), 0)]
    #[case(dec!(100000), dec!(5), MAX_TERM_YEARS + 1)]
    // Large enough that term_years * 12 would overflow u32 if it got past
    // validation.
    #[case(dec!(100000), dec!(5), 400_000_000)]
    fn invalid_terms_are_rejected(
        #[case] principal: Decimal,
        #[case] rate: Decimal,
        #[case] years: u32,
    ) {
        let result = LoanTerms::new(principal, rate, years);
        assert!(matches!(result, Err(ScheduleError::InvalidInput { .. })));
    }
}
