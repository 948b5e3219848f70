//! Side-by-side comparison of the three payment structures computed from
//! one set of terms.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::schedule::{compute_schedule, Schedule};
use crate::terms::{LoanTerms, LoanType};
use crate::tila::{summarize, TilaSummary};
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::SellerNoteResult;

/// Interest-only period assumed for the hybrid leg when the terms do not
/// name one.
pub const DEFAULT_IO_YEARS: u32 = 3;

/// One structure's results within a comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub loan_type: LoanType,
    /// Amount of the first regular payment.
    pub monthly_payment: Money,
    /// Payment during the amortizing phase, when it differs from the
    /// first (hybrid only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amortizing_payment: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balloon_amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balloon_due_offset: Option<u32>,
    pub summary: TilaSummary,
    pub schedule: Schedule,
}

/// All three structures from the same terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonOutput {
    pub standard: ScenarioResult,
    pub interest_only: ScenarioResult,
    pub hybrid: ScenarioResult,
}

/// Compute Standard, Interest-Only Balloon, and Hybrid schedules from the
/// same terms, overriding only the loan type per variant.
///
/// When no interest-only period is supplied, the hybrid leg assumes
/// `DEFAULT_IO_YEARS` (reduced for short terms) and records a warning. An
/// explicitly supplied out-of-range period is still an error; it is never
/// adjusted.
pub fn compare_structures(
    terms: &LoanTerms,
) -> SellerNoteResult<ComputationOutput<ComparisonOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let standard = scenario(&terms.with_loan_type(LoanType::Standard))?;
    let interest_only = scenario(&terms.with_loan_type(LoanType::InterestOnlyBalloon))?;

    let hybrid_terms = match terms.interest_only_years {
        Some(_) => terms.with_loan_type(LoanType::Hybrid),
        None => {
            let io_years = DEFAULT_IO_YEARS.min(terms.term_years.saturating_sub(1));
            warnings.push(format!(
                "No interest-only period supplied; comparing the hybrid structure at {io_years} year(s)"
            ));
            LoanTerms {
                interest_only_years: Some(io_years),
                ..terms.with_loan_type(LoanType::Hybrid)
            }
        }
    };
    let hybrid = scenario(&hybrid_terms)?;

    let output = ComparisonOutput {
        standard,
        interest_only,
        hybrid,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Three-Structure Payment Comparison",
        terms,
        warnings,
        elapsed,
        output,
    ))
}

fn scenario(terms: &LoanTerms) -> SellerNoteResult<ScenarioResult> {
    let schedule = compute_schedule(terms)?;
    let summary = summarize(&schedule, terms);

    let monthly_payment = schedule.first_payment_amount();
    let amortizing_payment = match terms.loan_type {
        LoanType::Hybrid => schedule
            .lines
            .get(terms.interest_only_months() as usize)
            .map(|line| line.payment_amount)
            .filter(|payment| *payment != monthly_payment),
        _ => None,
    };
    let balloon = schedule.balloon_line();

    Ok(ScenarioResult {
        loan_type: terms.loan_type,
        monthly_payment,
        amortizing_payment,
        balloon_amount: balloon.map(|line| line.payment_amount),
        balloon_due_offset: balloon.map(|line| line.due_month_offset),
        summary,
        schedule,
    })
}
