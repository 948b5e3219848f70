//! Hybrid schedule: interest-only phase, then full amortization of the
//! principal over the remaining months. Indices and due offsets continue
//! monotonically across the phase boundary.

use crate::terms::LoanTerms;
use crate::SellerNoteResult;

use super::{interest_only, standard, PaymentLine};

pub(super) fn build_lines(terms: &LoanTerms) -> SellerNoteResult<Vec<PaymentLine>> {
    let io_months = terms.interest_only_months();

    // A zero-length interest-only period collapses to plain amortization.
    if io_months == 0 {
        return standard::build_lines(terms);
    }

    let principal = terms.amount_financed();
    let rate = terms.monthly_rate();
    let fee = terms.monthly_servicing_fee;
    let amort_months = terms.total_months() - io_months;

    let mut lines = interest_only::interest_only_lines(principal, rate, io_months, fee, 1);
    lines.extend(standard::amortize(
        principal,
        rate,
        amort_months,
        fee,
        io_months + 1,
    )?);

    Ok(lines)
}
