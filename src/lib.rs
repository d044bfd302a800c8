//! `loan_schedule` computes fixed-rate, fixed-term loan amortization
//! schedules.
//!
//! Given a principal, a nominal annual rate and a term in years, it derives
//! the constant monthly payment from the annuity formula and produces the
//! month-by-month split between interest, repaid capital and remaining
//! balance, together with the lifetime totals. All math uses
//! `rust_decimal::Decimal`.
//!
//! ## Usage
//!
//! ```rust
//! use loan_schedule::{LoanTerms, amortize};
//! use rust_decimal_macros::dec;
//!
//! let terms = LoanTerms::new(dec!(100_000), dec!(6), 1).unwrap();
//! let result = amortize(&terms);
//!
//! println!("Monthly payment: {:.2}", result.periodic_payment);
//! println!("Total interest:  {:.2}", result.total_interest);
//! assert_eq!(result.schedule.len(), 12);
//! ```
//!
//! The calculation is a pure function of its input: no clocks, no globals,
//! no side effects. Rendering ([`render`]), session persistence ([`store`])
//! and the historical-rates chart ([`rates`]) are thin layers on top of it.

pub mod error;
pub mod rates;
pub mod render;
pub mod schedule;
pub mod store;

pub use error::{Result, ScheduleError};
pub use schedule::{
    AmortizationResult, LoanTerms, MAX_TERM_YEARS, PaymentPeriod, amortize, periodic_payment,
};
