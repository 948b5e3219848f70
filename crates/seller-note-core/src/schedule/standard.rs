//! Standard fully-amortizing schedule: level payments, declining balance.

use rust_decimal::Decimal;

use crate::terms::LoanTerms;
use crate::time_value::level_payment;
use crate::types::{Money, Rate};
use crate::SellerNoteResult;

use super::PaymentLine;

pub(super) fn build_lines(terms: &LoanTerms) -> SellerNoteResult<Vec<PaymentLine>> {
    amortize(
        terms.amount_financed(),
        terms.monthly_rate(),
        terms.total_months(),
        terms.monthly_servicing_fee,
        1,
    )
}

/// Amortize `principal` over `months` level payments, starting at sequence
/// index `first_index`.
///
/// The last line's principal portion absorbs any residual so the ending
/// balance is exactly zero; the payment amount itself is never recomputed.
/// Shared with the amortizing phase of the hybrid structure.
pub(super) fn amortize(
    principal: Money,
    monthly_rate: Rate,
    months: u32,
    fee: Money,
    first_index: u32,
) -> SellerNoteResult<Vec<PaymentLine>> {
    let payment = level_payment(principal, monthly_rate, months)?;

    let mut lines = Vec::with_capacity(months as usize);
    let mut balance = principal;

    for k in 0..months {
        let index = first_index + k;
        let interest = balance * monthly_rate;
        let mut principal_portion = payment - interest;
        balance -= principal_portion;

        if k == months - 1 && !balance.is_zero() {
            principal_portion += balance;
            balance = Decimal::ZERO;
        }

        lines.push(PaymentLine {
            index,
            due_month_offset: index - 1,
            payment_amount: payment + fee,
            interest_portion: interest,
            principal_portion,
            remaining_balance: balance,
            is_balloon: false,
        });
    }

    Ok(lines)
}
