//! Display formatting of amounts and countdowns.
//!
//! Rounding is decimal half-up, performed on the digit string of the exact
//! amount at its own scale, so formatted balances never pick up binary
//! floating point noise nor lose magnitude.

use std::time::Duration;

use fastnum::UD256;
use itertools::Itertools;

use crate::num::Amount;

/// Separator used between thousands groups of the integer part.
pub const GROUP_SEPARATOR: &str = ",";

/// Formats the amount rounded half-up to the given number of significant digits.
///
/// Trailing fractional zeros are dropped, integer digits past the precision
/// are zeroed: `123456789` with 4 digits renders as `123,500,000`.
pub fn to_significant(amount: Amount, significant_digits: usize, separator: &str) -> String {
    let mut digits = Digits::of(amount);
    let Some(first) = digits.digits.iter().position(|d| *d != 0) else {
        return "0".to_string();
    };
    digits.round(first + significant_digits.max(1));
    digits.render(separator)
}

/// Formats the amount rounded half-up to the given number of decimal places.
pub fn to_fixed(amount: Amount, decimal_places: usize, separator: &str) -> String {
    let mut digits = Digits::of(amount);
    digits.round(digits.point + decimal_places);
    digits.render(separator)
}

/// Formats a ratio as a percentage with 4 significant digits.
pub fn percent(ratio: Amount) -> String {
    format!(
        "{}%",
        to_significant(ratio * UD256::from(100u64), 4, GROUP_SEPARATOR)
    )
}

/// Formats a best-effort countdown, e.g. `2d 3h 0m 12s`.
pub fn duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let units = [
        (secs / 86_400, "d"),
        ((secs % 86_400) / 3_600, "h"),
        ((secs % 3_600) / 60, "m"),
        (secs % 60, "s"),
    ];
    let rendered = units
        .iter()
        .skip_while(|(value, _)| *value == 0)
        .map(|(value, unit)| format!("{value}{unit}"))
        .join(" ");
    if rendered.is_empty() {
        "0s".to_string()
    } else {
        rendered
    }
}

/// Decimal digits of an amount with the position of the decimal point.
struct Digits {
    digits: Vec<u8>,
    point: usize,
}

impl Digits {
    fn of(amount: Amount) -> Self {
        let mut digits: Vec<u8> = amount
            .digits()
            .to_string()
            .bytes()
            .map(|b| b - b'0')
            .collect();
        let scale = amount.fractional_digits_count();
        if scale < 0 {
            digits.resize(digits.len() + usize::from(scale.unsigned_abs()), 0);
        }
        let scale = usize::try_from(scale).unwrap_or(0);
        // At least one integer digit
        if digits.len() <= scale {
            let mut padded = vec![0; scale + 1 - digits.len()];
            padded.append(&mut digits);
            digits = padded;
        }
        let point = digits.len() - scale;
        Self { digits, point }
    }

    /// Keeps `keep` leading digits rounded half-up, zeroing the rest.
    fn round(&mut self, keep: usize) {
        if keep >= self.digits.len() {
            return;
        }
        let round_up = self.digits[keep] >= 5;
        self.digits[keep..].iter_mut().for_each(|d| *d = 0);
        if !round_up {
            return;
        }
        let mut idx = keep;
        loop {
            if idx == 0 {
                self.digits.insert(0, 1);
                self.point += 1;
                return;
            }
            idx -= 1;
            if self.digits[idx] == 9 {
                self.digits[idx] = 0;
            } else {
                self.digits[idx] += 1;
                return;
            }
        }
    }

    fn render(&self, separator: &str) -> String {
        let (int, frac) = self.digits.split_at(self.point);
        let int: Vec<u8> = int.iter().copied().skip_while(|d| *d == 0).collect();
        let int = if int.is_empty() {
            "0".to_string()
        } else {
            int.rchunks(3)
                .rev()
                .map(|group| group.iter().map(|d| char::from(b'0' + d)).collect::<String>())
                .join(separator)
        };
        match frac.iter().rposition(|d| *d != 0) {
            Some(last) => format!(
                "{int}.{}",
                frac[..=last]
                    .iter()
                    .map(|d| char::from(b'0' + d))
                    .collect::<String>()
            ),
            None => int,
        }
    }
}
