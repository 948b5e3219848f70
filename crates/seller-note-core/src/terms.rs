//! Loan terms for a seller-financed real-estate note.
//!
//! `LoanTerms` is constructed from validated user input and read-only
//! thereafter; every schedule and summary is a pure function of it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SellerNoteError;
use crate::types::{Money, Rate};
use crate::SellerNoteResult;

const MONTHS_PER_YEAR: u32 = 12;

/// Payment structure of the note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanType {
    /// Level payments fully amortizing over the term.
    Standard,
    /// Interest-only payments with the full principal due as a balloon.
    InterestOnlyBalloon,
    /// Interest-only period followed by full amortization of the principal
    /// over the remaining months.
    Hybrid,
}

impl LoanType {
    pub fn label(&self) -> &'static str {
        match self {
            LoanType::Standard => "Standard Amortization",
            LoanType::InterestOnlyBalloon => "Interest-Only with Balloon",
            LoanType::Hybrid => "Hybrid (Interest-Only + Amortizing)",
        }
    }
}

/// Terms of a seller-financed note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Total property purchase price.
    pub purchase_price: Money,
    /// Amount the buyer pays at closing.
    pub down_payment: Money,
    /// Annual note rate as a decimal (0.08 = 8%).
    pub annual_rate: Rate,
    /// Loan term in whole years.
    pub term_years: u32,
    /// Payment structure.
    pub loan_type: LoanType,
    /// Interest-only period in whole years; meaningful only for Hybrid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_only_years: Option<u32>,
    /// Flat monthly servicing fee collected with each regular payment.
    #[serde(default)]
    pub monthly_servicing_fee: Money,
    /// Closing costs, informational only; never enter the amount financed.
    #[serde(default)]
    pub closing_costs: Money,
}

impl LoanTerms {
    /// Principal base for interest accrual: purchase price less down payment.
    pub fn amount_financed(&self) -> Money {
        self.purchase_price - self.down_payment
    }

    /// Note rate per month.
    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate / Decimal::from(MONTHS_PER_YEAR)
    }

    /// Total number of monthly periods in the term.
    pub fn total_months(&self) -> u32 {
        self.term_years * MONTHS_PER_YEAR
    }

    /// Interest-only months for a Hybrid note (0 when unset).
    pub fn interest_only_months(&self) -> u32 {
        self.interest_only_years.unwrap_or(0) * MONTHS_PER_YEAR
    }

    /// Same terms with the payment structure swapped, for side-by-side
    /// scenario comparison.
    pub fn with_loan_type(&self, loan_type: LoanType) -> LoanTerms {
        LoanTerms {
            loan_type,
            ..self.clone()
        }
    }

    /// Check every invariant. Violations surface as errors, never as
    /// silently corrected values.
    pub fn validate(&self) -> SellerNoteResult<()> {
        if self.purchase_price <= Decimal::ZERO {
            return Err(SellerNoteError::InvalidTerms {
                field: "purchase_price".into(),
                reason: "Purchase price must be positive".into(),
            });
        }
        if self.down_payment < Decimal::ZERO {
            return Err(SellerNoteError::InvalidTerms {
                field: "down_payment".into(),
                reason: "Down payment cannot be negative".into(),
            });
        }
        if self.down_payment >= self.purchase_price {
            return Err(SellerNoteError::InvalidTerms {
                field: "down_payment".into(),
                reason: "Down payment must be less than the purchase price".into(),
            });
        }
        if self.annual_rate < Decimal::ZERO {
            return Err(SellerNoteError::InvalidTerms {
                field: "annual_rate".into(),
                reason: "Note rate cannot be negative".into(),
            });
        }
        if self.term_years == 0 {
            return Err(SellerNoteError::InvalidTerms {
                field: "term_years".into(),
                reason: "Term must be at least one year".into(),
            });
        }
        if self.monthly_servicing_fee < Decimal::ZERO {
            return Err(SellerNoteError::InvalidTerms {
                field: "monthly_servicing_fee".into(),
                reason: "Servicing fee cannot be negative".into(),
            });
        }
        if self.closing_costs < Decimal::ZERO {
            return Err(SellerNoteError::InvalidTerms {
                field: "closing_costs".into(),
                reason: "Closing costs cannot be negative".into(),
            });
        }

        if self.loan_type == LoanType::Hybrid {
            match self.interest_only_years {
                None => {
                    return Err(SellerNoteError::InvalidTerms {
                        field: "interest_only_years".into(),
                        reason: "Hybrid notes require an interest-only period".into(),
                    });
                }
                Some(io) if io >= self.term_years => {
                    return Err(SellerNoteError::InvalidTerms {
                        field: "interest_only_years".into(),
                        reason: "Interest-only period must be shorter than the term".into(),
                    });
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}
