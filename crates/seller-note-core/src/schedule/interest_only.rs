//! Interest-only schedule with the full principal due as a balloon.
//!
//! The balloon shares the final interest-only line's due date but is kept
//! as a distinct line; schedule consumers decide whether to display the
//! two combined.

use rust_decimal::Decimal;

use crate::terms::LoanTerms;
use crate::types::{Money, Rate};
use crate::SellerNoteResult;

use super::PaymentLine;

pub(super) fn build_lines(terms: &LoanTerms) -> SellerNoteResult<Vec<PaymentLine>> {
    let principal = terms.amount_financed();
    let months = terms.total_months();

    let mut lines = interest_only_lines(
        principal,
        terms.monthly_rate(),
        months,
        terms.monthly_servicing_fee,
        1,
    );

    lines.push(PaymentLine {
        index: months + 1,
        due_month_offset: months - 1,
        payment_amount: principal,
        interest_portion: Decimal::ZERO,
        principal_portion: principal,
        remaining_balance: Decimal::ZERO,
        is_balloon: true,
    });

    Ok(lines)
}

/// Build `months` interest-only lines holding the balance at `principal`,
/// starting at sequence index `first_index`. Shared with the interest-only
/// phase of the hybrid structure.
pub(super) fn interest_only_lines(
    principal: Money,
    monthly_rate: Rate,
    months: u32,
    fee: Money,
    first_index: u32,
) -> Vec<PaymentLine> {
    let interest = principal * monthly_rate;

    (0..months)
        .map(|k| {
            let index = first_index + k;
            PaymentLine {
                index,
                due_month_offset: index - 1,
                payment_amount: interest + fee,
                interest_portion: interest,
                principal_portion: Decimal::ZERO,
                remaining_balance: principal,
                is_balloon: false,
            }
        })
        .collect()
}
