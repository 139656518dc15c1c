//! VAT-inclusive price derivation.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::SkipOffering;

/// Total price in whole pounds including VAT, rounded half up.
///
/// Computed as `round(price_before_vat * (1 + vat / 100))`, so 278 at 20%
/// gives 334 (333.6 rounded).
#[must_use]
pub fn total_price(offering: &SkipOffering) -> Decimal {
    gross_amount(offering.price_before_vat, offering.vat)
}

/// Gross amount for a net amount and a VAT percentage, rounded half up to
/// whole units. Saturates at [`Decimal::MAX`] instead of overflowing.
#[must_use]
pub fn gross_amount(net: Decimal, vat_percent: Decimal) -> Decimal {
    vat_percent
        .checked_div(Decimal::ONE_HUNDRED)
        .and_then(|rate| Decimal::ONE.checked_add(rate))
        .and_then(|factor| net.checked_mul(factor))
        .map_or(Decimal::MAX, |gross| {
            gross.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(units: u32) -> Decimal {
        Decimal::from(units)
    }

    #[test]
    fn rounds_up_from_half() {
        assert_eq!(gross_amount(amount(278), amount(20)), amount(334));
        assert_eq!(gross_amount(amount(992), amount(20)), amount(1190));
        assert_eq!(gross_amount(amount(305), amount(20)), amount(366));
        // 2.5 -> 3
        assert_eq!(gross_amount(amount(5), amount(50)), amount(8));
        assert_eq!(gross_amount(amount(1), amount(50)), amount(2));
    }

    #[test]
    fn zero_vat_is_identity() {
        assert_eq!(gross_amount(amount(439), Decimal::ZERO), amount(439));
        assert_eq!(gross_amount(Decimal::ZERO, amount(20)), Decimal::ZERO);
    }

    #[test]
    fn fractional_rate_and_price() {
        let rate = Decimal::new(175, 1);
        // 278 * 1.175 = 326.65
        assert_eq!(gross_amount(amount(278), rate), amount(327));
        // 278.50 * 1.2 = 334.2
        assert_eq!(gross_amount(Decimal::new(27850, 2), amount(20)), amount(334));
        // 12.50 * 1.2 = 15.0, 12.95 * 1.2 = 15.54
        assert_eq!(gross_amount(Decimal::new(1250, 2), amount(20)), amount(15));
        assert_eq!(gross_amount(Decimal::new(1295, 2), amount(20)), amount(16));
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        let max = amount(u32::MAX);
        // 4294967295 * 42949673.95 = 184467444946163465.25
        assert_eq!(
            gross_amount(max, max),
            Decimal::from(184_467_444_946_163_465_u64)
        );
        assert_eq!(gross_amount(Decimal::MAX, Decimal::MAX), Decimal::MAX);
        assert_eq!(gross_amount(Decimal::MAX, amount(20)), Decimal::MAX);
    }
}
