//! Note-sale analysis: what an investor would pay for the payment stream
//! at a given required yield, and the implied discount to face.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::SellerNoteError;
use crate::schedule::{compute_schedule, Schedule};
use crate::terms::LoanTerms;
use crate::time_value::discount_factor;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::SellerNoteResult;

/// Buyer yields assumed when the input names none.
const DEFAULT_BUYER_YIELDS: [Decimal; 4] = [dec!(0.10), dec!(0.12), dec!(0.14), dec!(0.16)];

/// Note-sale request: the note's terms plus the yields to price at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteSaleInput {
    pub terms: LoanTerms,
    /// Annual buyer yields as decimals; empty selects the default grid.
    #[serde(default)]
    pub buyer_yields: Vec<Rate>,
}

/// Sale economics at one buyer yield.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteSaleAnalysis {
    pub buyer_yield: Rate,
    /// Present value of the P&I stream at the buyer's yield.
    pub sale_price: Money,
    /// Amount financed less sale price.
    pub discount_amount: Money,
    /// Discount as a percentage of the amount financed.
    pub discount_percent: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteSaleOutput {
    pub amount_financed: Money,
    pub analyses: Vec<NoteSaleAnalysis>,
}

/// Price the note at each requested buyer yield.
pub fn analyze_note_sale(
    input: &NoteSaleInput,
) -> SellerNoteResult<ComputationOutput<NoteSaleOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let yields: Vec<Rate> = if input.buyer_yields.is_empty() {
        warnings.push("No buyer yields supplied; using the 10/12/14/16% grid".into());
        DEFAULT_BUYER_YIELDS.to_vec()
    } else {
        input.buyer_yields.clone()
    };

    for yield_rate in &yields {
        if *yield_rate <= dec!(-1) {
            return Err(SellerNoteError::InvalidInput {
                field: "buyer_yields".into(),
                reason: "Buyer yield must be greater than -100%".into(),
            });
        }
    }

    let schedule = compute_schedule(&input.terms)?;
    let amount_financed = input.terms.amount_financed();
    let fee = input.terms.monthly_servicing_fee;

    let analyses = yields
        .iter()
        .map(|yield_rate| price_at_yield(&schedule, amount_financed, fee, *yield_rate))
        .collect();

    let output = NoteSaleOutput {
        amount_financed,
        analyses,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Note Sale Pricing (PV of P&I at Buyer Yield)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

/// The buyer receives principal and interest only; the servicing fee stays
/// with the servicer, and the balloon line carries no fee to strip.
fn price_at_yield(
    schedule: &Schedule,
    amount_financed: Money,
    fee: Money,
    buyer_yield: Rate,
) -> NoteSaleAnalysis {
    let monthly_yield = buyer_yield / dec!(12);

    let mut sale_price = Decimal::ZERO;
    for line in &schedule.lines {
        let cash = if line.is_balloon {
            line.payment_amount
        } else {
            line.payment_amount - fee
        };
        // Payments land one month after their due offset's start.
        sale_price += cash * discount_factor(monthly_yield, line.due_month_offset + 1);
    }

    let discount_amount = amount_financed - sale_price;
    let discount_percent = if amount_financed > Decimal::ZERO {
        discount_amount / amount_financed * dec!(100)
    } else {
        Decimal::ZERO
    };

    NoteSaleAnalysis {
        buyer_yield,
        sale_price,
        discount_amount,
        discount_percent,
    }
}
