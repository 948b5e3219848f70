//! Level-payment and present-value primitives for monthly note streams.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::SellerNoteError;
use crate::types::{Money, Rate};
use crate::SellerNoteResult;

/// Level monthly payment that fully amortizes `principal` over `months`
/// at monthly rate `rate`.
///
/// Zero-rate notes split the principal evenly across the term.
pub fn level_payment(principal: Money, rate: Rate, months: u32) -> SellerNoteResult<Money> {
    if months == 0 {
        return Err(SellerNoteError::InvalidTerms {
            field: "months".into(),
            reason: "Amortization period must be at least one month".into(),
        });
    }

    if rate.is_zero() {
        return Ok(principal / Decimal::from(months));
    }

    let factor = (Decimal::ONE + rate).powd(Decimal::from(months));
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return Err(SellerNoteError::DivisionByZero {
            context: "level payment annuity factor".into(),
        });
    }

    Ok(principal * rate * factor / denominator)
}

/// Present value of a level monthly annuity of `payment` for `months`
/// at monthly discount rate `rate`.
pub fn pv_annuity(payment: Money, rate: Rate, months: u32) -> SellerNoteResult<Money> {
    if rate.is_zero() {
        return Ok(payment * Decimal::from(months));
    }

    let factor = (Decimal::ONE + rate).powd(Decimal::from(months));
    if factor.is_zero() {
        return Err(SellerNoteError::DivisionByZero {
            context: "annuity discount factor".into(),
        });
    }

    Ok(payment * (Decimal::ONE - Decimal::ONE / factor) / rate)
}

/// Discount factor 1 / (1 + rate)^months for a payment due `months` out.
pub fn discount_factor(rate: Rate, months: u32) -> Decimal {
    if rate.is_zero() {
        return Decimal::ONE;
    }
    let factor = (Decimal::ONE + rate).powd(Decimal::from(months));
    if factor.is_zero() {
        Decimal::ZERO
    } else {
        Decimal::ONE / factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_level_payment_zero_rate() {
        let payment = level_payment(dec!(120000), Decimal::ZERO, 120).unwrap();
        assert_eq!(payment, dec!(1000));
    }

    #[test]
    fn test_level_payment_thirty_year() {
        // 240,000 at 8%/12 over 360 months: standard tables give ~1761.03.
        let payment = level_payment(dec!(240000), dec!(0.08) / dec!(12), 360).unwrap();
        assert!((payment - dec!(1761.03)).abs() < dec!(0.02), "payment = {payment}");
    }

    #[test]
    fn test_level_payment_single_month() {
        // One payment: principal plus one month of interest.
        let rate = dec!(0.12) / dec!(12);
        let payment = level_payment(dec!(10000), rate, 1).unwrap();
        assert_eq!(payment, dec!(10000) * (Decimal::ONE + rate));
    }

    #[test]
    fn test_level_payment_zero_months() {
        assert!(level_payment(dec!(1000), dec!(0.01), 0).is_err());
    }

    #[test]
    fn test_pv_annuity_recovers_principal() {
        // Discounting the level payment at the note rate returns the principal.
        let rate = dec!(0.08) / dec!(12);
        let payment = level_payment(dec!(240000), rate, 360).unwrap();
        let pv = pv_annuity(payment, rate, 360).unwrap();
        assert!((pv - dec!(240000)).abs() < dec!(0.05), "pv = {pv}");
    }

    #[test]
    fn test_discount_factor_zero_rate() {
        assert_eq!(discount_factor(Decimal::ZERO, 60), Decimal::ONE);
    }
}
