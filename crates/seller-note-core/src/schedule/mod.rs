//! Payment schedules for the three seller-note structures.
//!
//! One builder per structure behind a common `PaymentLine`/`Schedule`
//! representation, dispatched on the `LoanType` tagged variant so the
//! shared invariants (zero final balance, balance held constant through
//! interest-only lines) stay uniformly testable.

pub mod hybrid;
pub mod interest_only;
pub mod standard;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::terms::{LoanTerms, LoanType};
use crate::types::Money;
use crate::SellerNoteResult;

/// A single scheduled payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentLine {
    /// 1-based sequence index.
    pub index: u32,
    /// Whole months between the first payment and this one's due date.
    pub due_month_offset: u32,
    /// Amount collected, servicing fee included on regular lines.
    pub payment_amount: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    /// Balance outstanding after this payment.
    pub remaining_balance: Money,
    pub is_balloon: bool,
}

/// Ordered payment schedule. Produced fresh per calculation and never
/// mutated afterwards; the final line carries a remaining balance of
/// exactly zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub lines: Vec<PaymentLine>,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of every payment, balloon included.
    pub fn total_of_payments(&self) -> Money {
        self.lines.iter().map(|line| line.payment_amount).sum()
    }

    /// Amount of the first regular payment.
    pub fn first_payment_amount(&self) -> Money {
        self.lines
            .first()
            .map(|line| line.payment_amount)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn balloon_line(&self) -> Option<&PaymentLine> {
        self.lines.iter().find(|line| line.is_balloon)
    }

    pub fn final_balance(&self) -> Money {
        self.lines
            .last()
            .map(|line| line.remaining_balance)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Build the complete payment schedule for the given terms.
///
/// Validates every `LoanTerms` invariant first; violations surface as
/// `InvalidTerms`, never as corrected values. Pure: identical terms yield
/// an identical schedule.
pub fn compute_schedule(terms: &LoanTerms) -> SellerNoteResult<Schedule> {
    terms.validate()?;

    let lines = match terms.loan_type {
        LoanType::Standard => standard::build_lines(terms)?,
        LoanType::InterestOnlyBalloon => interest_only::build_lines(terms)?,
        LoanType::Hybrid => hybrid::build_lines(terms)?,
    };

    Ok(Schedule { lines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn terms(loan_type: LoanType) -> LoanTerms {
        LoanTerms {
            purchase_price: dec!(300000),
            down_payment: dec!(60000),
            annual_rate: dec!(0.08),
            term_years: 30,
            loan_type,
            interest_only_years: Some(3),
            monthly_servicing_fee: Decimal::ZERO,
            closing_costs: Decimal::ZERO,
        }
    }

    // -----------------------------------------------------------------------
    // 1. Schedule lengths per structure
    // -----------------------------------------------------------------------
    #[test]
    fn test_schedule_lengths() {
        let standard = compute_schedule(&terms(LoanType::Standard)).unwrap();
        assert_eq!(standard.len(), 360);

        let io = compute_schedule(&terms(LoanType::InterestOnlyBalloon)).unwrap();
        assert_eq!(io.len(), 361);

        let hybrid = compute_schedule(&terms(LoanType::Hybrid)).unwrap();
        assert_eq!(hybrid.len(), 360);
    }

    // -----------------------------------------------------------------------
    // 2. Indices and due offsets are monotone across every structure
    // -----------------------------------------------------------------------
    #[test]
    fn test_indices_and_offsets_monotone() {
        for loan_type in [
            LoanType::Standard,
            LoanType::InterestOnlyBalloon,
            LoanType::Hybrid,
        ] {
            let schedule = compute_schedule(&terms(loan_type)).unwrap();
            for (i, line) in schedule.lines.iter().enumerate() {
                assert_eq!(line.index, i as u32 + 1, "{loan_type:?} index at {i}");
            }
            for pair in schedule.lines.windows(2) {
                assert!(
                    pair[1].due_month_offset >= pair[0].due_month_offset,
                    "{loan_type:?} offsets must not decrease"
                );
            }
        }
    }

    // -----------------------------------------------------------------------
    // 3. Every structure terminates at exactly zero balance
    // -----------------------------------------------------------------------
    #[test]
    fn test_final_balance_exactly_zero() {
        for loan_type in [
            LoanType::Standard,
            LoanType::InterestOnlyBalloon,
            LoanType::Hybrid,
        ] {
            let schedule = compute_schedule(&terms(loan_type)).unwrap();
            assert_eq!(
                schedule.final_balance(),
                Decimal::ZERO,
                "{loan_type:?} must end at zero"
            );
        }
    }

    // -----------------------------------------------------------------------
    // 4. Invalid terms are rejected before any schedule is built
    // -----------------------------------------------------------------------
    #[test]
    fn test_invalid_terms_rejected() {
        let bad = LoanTerms {
            down_payment: dec!(300000),
            ..terms(LoanType::Standard)
        };
        assert!(compute_schedule(&bad).is_err());

        let bad_hybrid = LoanTerms {
            interest_only_years: Some(30),
            ..terms(LoanType::Hybrid)
        };
        assert!(compute_schedule(&bad_hybrid).is_err());
    }

    // -----------------------------------------------------------------------
    // 5. Recomputation is bit-identical
    // -----------------------------------------------------------------------
    #[test]
    fn test_deterministic_recomputation() {
        let input = terms(LoanType::Hybrid);
        let first = compute_schedule(&input).unwrap();
        let second = compute_schedule(&input).unwrap();
        for (a, b) in first.lines.iter().zip(second.lines.iter()) {
            assert_eq!(a.payment_amount, b.payment_amount);
            assert_eq!(a.interest_portion, b.interest_portion);
            assert_eq!(a.principal_portion, b.principal_portion);
            assert_eq!(a.remaining_balance, b.remaining_balance);
        }
    }
}
