pub mod compare;
pub mod disclose;
pub mod note_sale;
pub mod schedule;

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;

use seller_note_core::terms::{LoanTerms, LoanType};

use crate::input;

/// Payment structure selector.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LoanTypeArg {
    Standard,
    InterestOnly,
    Hybrid,
}

impl From<LoanTypeArg> for LoanType {
    fn from(arg: LoanTypeArg) -> Self {
        match arg {
            LoanTypeArg::Standard => LoanType::Standard,
            LoanTypeArg::InterestOnly => LoanType::InterestOnlyBalloon,
            LoanTypeArg::Hybrid => LoanType::Hybrid,
        }
    }
}

/// Note terms shared by every subcommand.
#[derive(Args)]
pub struct TermsArgs {
    /// Total property purchase price
    #[arg(long)]
    pub purchase_price: Option<Decimal>,

    /// Down payment made at closing
    #[arg(long)]
    pub down_payment: Option<Decimal>,

    /// Annual note rate as a decimal (e.g. 0.08 for 8%)
    #[arg(long, alias = "rate")]
    pub annual_rate: Option<Decimal>,

    /// Loan term in whole years
    #[arg(long)]
    pub term_years: Option<u32>,

    /// Payment structure
    #[arg(long, value_enum)]
    pub loan_type: Option<LoanTypeArg>,

    /// Interest-only period in whole years (hybrid only)
    #[arg(long)]
    pub interest_only_years: Option<u32>,

    /// Flat monthly servicing fee
    #[arg(long, default_value = "0")]
    pub servicing_fee: Decimal,

    /// Closing costs (informational; excluded from the amount financed)
    #[arg(long, default_value = "0")]
    pub closing_costs: Decimal,

    /// Path to a JSON terms document (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

impl TermsArgs {
    /// Resolve terms from `--input`, piped stdin, or individual flags.
    pub fn resolve(&self) -> Result<LoanTerms, Box<dyn std::error::Error>> {
        self.resolve_with(None)
    }

    /// Like `resolve`, but with a fallback structure for commands that
    /// compute every structure anyway (comparison).
    pub fn resolve_with(
        &self,
        fallback_type: Option<LoanType>,
    ) -> Result<LoanTerms, Box<dyn std::error::Error>> {
        if let Some(ref path) = self.input {
            return input::file::read_json(path);
        }
        if let Some(data) = input::stdin::read_stdin()? {
            return Ok(serde_json::from_value(data)?);
        }

        Ok(LoanTerms {
            purchase_price: self
                .purchase_price
                .ok_or("--purchase-price is required (or provide --input)")?,
            down_payment: self
                .down_payment
                .ok_or("--down-payment is required (or provide --input)")?,
            annual_rate: self
                .annual_rate
                .ok_or("--annual-rate is required (or provide --input)")?,
            term_years: self
                .term_years
                .ok_or("--term-years is required (or provide --input)")?,
            loan_type: self
                .loan_type
                .map(Into::into)
                .or(fallback_type)
                .ok_or("--loan-type is required (or provide --input)")?,
            interest_only_years: self.interest_only_years,
            monthly_servicing_fee: self.servicing_fee,
            closing_costs: self.closing_costs,
        })
    }
}
