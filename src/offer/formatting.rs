use crate::domain::{Benefit, BenefitType};
use rust_decimal::{Decimal, RoundingStrategy};

/// Render a benefit the way it is shown to learners: `35%` for percentage discounts, `$90.00` for
/// fixed-amount ones.
pub fn format_benefit_value(benefit: &Benefit) -> String {
    match benefit.kind() {
        BenefitType::Percentage => {
            format!("{}%", remove_exponent_and_trailing_zeros(benefit.value()))
        }
        BenefitType::Fixed => format!("${}", add_currency(benefit.value())),
    }
}

/// Drop trailing fractional zeros while keeping every significant digit: `5000.40000` becomes
/// `5000.4` and `5000.0` becomes `5000`, never `5E+3`.
pub fn remove_exponent_and_trailing_zeros(value: Decimal) -> Decimal {
    value.normalize()
}

/// Render a monetary amount using the `#,##0.00` pattern. The currency symbol is left to the
/// caller.
pub fn add_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let plain = format!("{:.2}", rounded.abs());
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut rendered = String::with_capacity(plain.len() + integer.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        rendered.push('-');
    }
    for (position, digit) in integer.chars().enumerate() {
        if position > 0 && (integer.len() - position) % 3 == 0 {
            rendered.push(',');
        }
        rendered.push(digit);
    }
    rendered.push('.');
    rendered.push_str(fraction);
    rendered
}
