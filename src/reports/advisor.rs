//! Budget advisor
//!
//! Derives a qualitative feedback message from the ratio of total expenses
//! to income. Four fixed bands, plus a distinct message when no income has
//! been recorded at all.

use crate::models::Money;

/// Shown when income is zero, whatever the expenses are
pub const INCOME_MISSING: &str = "🤔 Income missing! Are you living on air and good vibes? 🌬️✨";

/// Ratio below 0.5
pub const WELL_WITHIN: &str =
    "💸 Money Maestro! Your budget’s tighter than a drum! Keep stacking those coins! 💰🐖";

/// Ratio in [0.5, 0.75)
pub const COMFORTABLE: &str =
    "🧠 Budget Boss! You're spending smart, leaving room for a splurge here and there. Treat yo'self! 🍰🎈";

/// Ratio in [0.75, 1.0)
pub const NEAR_LIMIT: &str =
    "🫣 Walking the Line! Just a few coins away from 'Uh-oh'... Maybe rethink that daily latte ☕️💸";

/// Ratio 1.0 or above
pub const OVERSPENT: &str =
    "🛑 Danger Zone! You’re in 'Champagne dreams on a lemonade budget' territory! 🍾➡️🥤";

/// Pick the feedback message for this expense total and income
///
/// Boundary values belong to the band they are "less than" from above:
/// a ratio of exactly 0.5 lands in the second band, not the first.
pub fn feedback(total_expenses: Money, income: Money) -> &'static str {
    if income.is_zero() {
        return INCOME_MISSING;
    }

    let ratio = total_expenses.cents() as f64 / income.cents() as f64;
    if ratio < 0.5 {
        WELL_WITHIN
    } else if ratio < 0.75 {
        COMFORTABLE
    } else if ratio < 1.0 {
        NEAR_LIMIT
    } else {
        OVERSPENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(n: i64) -> Money {
        Money::from_cents(n * 100)
    }

    #[test]
    fn test_zero_income_wins_even_with_zero_expenses() {
        assert_eq!(feedback(units(0), units(0)), INCOME_MISSING);
        assert_eq!(feedback(units(500), units(0)), INCOME_MISSING);
    }

    #[test]
    fn test_band_below_half() {
        assert_eq!(feedback(units(0), units(100)), WELL_WITHIN);
        assert_eq!(feedback(Money::from_cents(4999), units(100)), WELL_WITHIN);
    }

    #[test]
    fn test_half_is_second_band() {
        // ratio exactly 0.5
        assert_eq!(feedback(units(50), units(100)), COMFORTABLE);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(feedback(units(74), units(100)), COMFORTABLE);
        assert_eq!(feedback(units(75), units(100)), NEAR_LIMIT);
        assert_eq!(feedback(units(99), units(100)), NEAR_LIMIT);
        assert_eq!(feedback(units(100), units(100)), OVERSPENT);
        assert_eq!(feedback(units(250), units(100)), OVERSPENT);
    }

    #[test]
    fn test_alice_scenario_is_well_within() {
        // 92.50 spent out of 2000
        assert_eq!(feedback(Money::from_cents(9250), units(2000)), WELL_WITHIN);
    }
}
