//! Reg Z disclosure figures: the four headline boxes plus the grouped
//! payment-schedule table rows a disclosure renderer consumes.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::schedule::{compute_schedule, Schedule};
use crate::terms::{LoanTerms, LoanType};
use crate::tila::{summarize, TilaSummary};
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::SellerNoteResult;

/// Disclosure request: terms plus an optional first-payment date from
/// which calendar due dates are derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisclosureInput {
    pub terms: LoanTerms,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_due_date: Option<NaiveDate>,
}

/// One row of the Reg Z payment-schedule table: a run of consecutive
/// equal payments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentStream {
    pub count: u32,
    pub amount: Money,
    /// Months between the first payment and this stream's first due date.
    pub first_due_offset: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_due_date: Option<NaiveDate>,
    pub is_balloon: bool,
}

/// Everything the four-box disclosure layout and payment-schedule table
/// need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisclosureFigures {
    pub loan_type: LoanType,
    pub summary: TilaSummary,
    /// Amount of the first regular payment.
    pub first_payment_amount: Money,
    pub payment_streams: Vec<PaymentStream>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balloon_amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balloon_due_offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balloon_due_date: Option<NaiveDate>,
    /// Transaction details carried through for the rendered disclosure.
    pub down_payment: Money,
    pub closing_costs: Money,
}

/// Compute the disclosure figures for one set of terms.
pub fn prepare_disclosure(
    input: &DisclosureInput,
) -> SellerNoteResult<ComputationOutput<DisclosureFigures>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let schedule = compute_schedule(&input.terms)?;
    let summary = summarize(&schedule, &input.terms);
    let streams = group_streams(&schedule, input.first_due_date);

    let balloon = schedule.balloon_line();
    if let Some(line) = balloon {
        warnings.push(format!(
            "Schedule ends in a balloon payment of {} due {} months after the first payment",
            line.payment_amount, line.due_month_offset
        ));
    }

    let figures = DisclosureFigures {
        loan_type: input.terms.loan_type,
        first_payment_amount: schedule.first_payment_amount(),
        balloon_amount: balloon.map(|line| line.payment_amount),
        balloon_due_offset: balloon.map(|line| line.due_month_offset),
        balloon_due_date: balloon.and_then(|line| {
            input
                .first_due_date
                .and_then(|date| add_months(date, line.due_month_offset))
        }),
        down_payment: input.terms.down_payment,
        closing_costs: input.terms.closing_costs,
        payment_streams: streams,
        summary,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "TILA Reg Z Disclosure Figures (closed-form APR)",
        input,
        warnings,
        elapsed,
        figures,
    ))
}

/// Group consecutive lines with equal payment amount into table rows. The
/// balloon always gets its own row, even when it shares the last regular
/// line's due date.
fn group_streams(schedule: &Schedule, first_due: Option<NaiveDate>) -> Vec<PaymentStream> {
    let mut streams: Vec<PaymentStream> = Vec::new();

    for line in &schedule.lines {
        match streams.last_mut() {
            Some(stream)
                if !stream.is_balloon
                    && !line.is_balloon
                    && stream.amount == line.payment_amount =>
            {
                stream.count += 1;
            }
            _ => streams.push(PaymentStream {
                count: 1,
                amount: line.payment_amount,
                first_due_offset: line.due_month_offset,
                first_due_date: first_due.and_then(|date| add_months(date, line.due_month_offset)),
                is_balloon: line.is_balloon,
            }),
        }
    }

    streams
}

fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn input(loan_type: LoanType) -> DisclosureInput {
        DisclosureInput {
            terms: LoanTerms {
                purchase_price: dec!(300000),
                down_payment: dec!(60000),
                annual_rate: dec!(0.08),
                term_years: 5,
                loan_type,
                interest_only_years: Some(2),
                monthly_servicing_fee: Decimal::ZERO,
                closing_costs: dec!(4500),
            },
            first_due_date: NaiveDate::from_ymd_opt(2026, 9, 1),
        }
    }

    // -----------------------------------------------------------------------
    // 1. Standard structure groups to a single stream
    // -----------------------------------------------------------------------
    #[test]
    fn test_standard_single_stream() {
        let out = prepare_disclosure(&input(LoanType::Standard)).unwrap();
        let figures = out.result;

        assert_eq!(figures.payment_streams.len(), 1);
        assert_eq!(figures.payment_streams[0].count, 60);
        assert_eq!(figures.payment_streams[0].first_due_offset, 0);
        assert!(figures.balloon_amount.is_none());
        assert!(out.warnings.is_empty());
    }

    // -----------------------------------------------------------------------
    // 2. Interest-only balloon groups to a regular stream plus a balloon row
    // -----------------------------------------------------------------------
    #[test]
    fn test_interest_only_streams() {
        let out = prepare_disclosure(&input(LoanType::InterestOnlyBalloon)).unwrap();
        let figures = out.result;

        assert_eq!(figures.payment_streams.len(), 2);
        assert_eq!(figures.payment_streams[0].count, 60);
        assert!(!figures.payment_streams[0].is_balloon);
        assert_eq!(figures.payment_streams[1].count, 1);
        assert!(figures.payment_streams[1].is_balloon);

        assert_eq!(figures.balloon_amount, Some(dec!(240000)));
        assert_eq!(figures.balloon_due_offset, Some(59));
        assert_eq!(out.warnings.len(), 1);
    }

    // -----------------------------------------------------------------------
    // 3. Hybrid groups to two regular streams
    // -----------------------------------------------------------------------
    #[test]
    fn test_hybrid_two_streams() {
        let out = prepare_disclosure(&input(LoanType::Hybrid)).unwrap();
        let figures = out.result;

        assert_eq!(figures.payment_streams.len(), 2);
        assert_eq!(figures.payment_streams[0].count, 24);
        assert_eq!(figures.payment_streams[1].count, 36);
        assert_eq!(figures.payment_streams[1].first_due_offset, 24);
        assert!(figures.payment_streams.iter().all(|s| !s.is_balloon));
    }

    // -----------------------------------------------------------------------
    // 4. Calendar due dates derive from the first-payment date
    // -----------------------------------------------------------------------
    #[test]
    fn test_due_dates() {
        let out = prepare_disclosure(&input(LoanType::InterestOnlyBalloon)).unwrap();
        let figures = out.result;

        assert_eq!(
            figures.payment_streams[0].first_due_date,
            NaiveDate::from_ymd_opt(2026, 9, 1)
        );
        // Balloon due with the 60th payment: 59 months after the first.
        assert_eq!(
            figures.balloon_due_date,
            NaiveDate::from_ymd_opt(2031, 8, 1)
        );
    }

    // -----------------------------------------------------------------------
    // 5. Dates are omitted when no first-payment date is supplied
    // -----------------------------------------------------------------------
    #[test]
    fn test_dates_optional() {
        let request = DisclosureInput {
            first_due_date: None,
            ..input(LoanType::InterestOnlyBalloon)
        };
        let out = prepare_disclosure(&request).unwrap();

        assert!(out.result.balloon_due_date.is_none());
        assert!(out
            .result
            .payment_streams
            .iter()
            .all(|s| s.first_due_date.is_none()));
    }

    // -----------------------------------------------------------------------
    // 6. Transaction details pass through for the rendered layout
    // -----------------------------------------------------------------------
    #[test]
    fn test_transaction_details() {
        let out = prepare_disclosure(&input(LoanType::Standard)).unwrap();
        assert_eq!(out.result.down_payment, dec!(60000));
        assert_eq!(out.result.closing_costs, dec!(4500));
        assert_eq!(out.result.summary.amount_financed, dec!(240000));
    }
}
