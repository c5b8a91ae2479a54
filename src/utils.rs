//! Display formatting helpers shared by the summary and views

/// Enough fractional digits to print any finite `f64` exactly
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Format `value` with `digits` decimals, rounding exact ties away from zero
///
/// Matches JavaScript's `Number.prototype.toFixed`: `0.125` becomes
/// `"0.13"`, where `format!("{:.2}")` would give `"0.12"`. Only values that
/// sit exactly on a tie differ from standard formatting.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let rounded = format!("{:.*}", digits, value);
    if !value.is_finite() || digits >= EXACT_FRACTION_DIGITS {
        return rounded;
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let Some((int_part, fraction)) = exact.split_once('.') else {
        return rounded;
    };
    let (kept, tail) = fraction.split_at(digits);
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return rounded;
    }

    let mut magnitude: Vec<u8> = format!("{}{}", int_part, kept).into_bytes();
    increment_decimal(&mut magnitude);

    let point = magnitude.len() - digits;
    let mut out = String::with_capacity(magnitude.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(std::str::from_utf8(&magnitude[..point]).unwrap_or("0"));
    if digits > 0 {
        out.push('.');
        out.push_str(std::str::from_utf8(&magnitude[point..]).unwrap_or("0"));
    }
    out
}

/// Add one to an ASCII decimal digit string, growing it on carry-out
fn increment_decimal(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_round_up() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.625, 2), "0.63");
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.96875, 4), "0.9688");
    }

    #[test]
    fn test_ties_carry_into_integer_part() {
        assert_eq!(to_fixed(9.5, 0), "10");
        assert_eq!(to_fixed(99.5, 0), "100");
    }

    #[test]
    fn test_negative_ties_round_away_from_zero() {
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
    }

    #[test]
    fn test_non_ties_match_standard_formatting() {
        assert_eq!(to_fixed(1.3, 2), "1.30");
        assert_eq!(to_fixed(0.38, 2), "0.38");
        // 1.005 is stored slightly below the tie
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(3.157894736842105, 1), "3.2");
        assert_eq!(to_fixed(2.0, 1), "2.0");
    }
}
