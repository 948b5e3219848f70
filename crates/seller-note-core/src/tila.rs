//! TILA aggregate figures: the four Reg Z headline values.

use serde::{Deserialize, Serialize};

use crate::schedule::Schedule;
use crate::terms::LoanTerms;
use crate::types::{Money, Rate};

/// The four headline figures of a Reg Z disclosure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TilaSummary {
    /// Annual percentage rate as a decimal.
    ///
    /// With no points or prepaid finance charges beyond stated interest,
    /// the APR equals the note rate exactly and this closed form is
    /// authoritative. Supporting prepaid charges means solving an internal
    /// rate of return over the actual cash-flow stream (amount financed
    /// net of prepaid charges against the scheduled payments); that solve
    /// is an extension point of `summarize` and is deliberately not
    /// implemented here — it must never replace the closed form in the
    /// no-charge case.
    pub apr: Rate,
    /// Total cost of credit in dollars: total of payments less amount
    /// financed.
    pub finance_charge: Money,
    /// Purchase price less down payment. Closing costs are excluded.
    pub amount_financed: Money,
    /// Sum of every scheduled payment, balloon included.
    pub total_of_payments: Money,
}

/// Derive the TILA summary from a schedule and the terms that produced it.
/// Pure; identical inputs yield identical figures.
pub fn summarize(schedule: &Schedule, terms: &LoanTerms) -> TilaSummary {
    let amount_financed = terms.amount_financed();
    let total_of_payments = schedule.total_of_payments();

    TilaSummary {
        apr: terms.annual_rate,
        finance_charge: total_of_payments - amount_financed,
        amount_financed,
        total_of_payments,
    }
}
