use super::transaction::LedgerError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a user-entered amount.
///
/// Accepts plain unsigned decimal notation only: ASCII digits with at most one
/// `.` and at least one digit (`"12"`, `"12.50"`, `".5"`, `"5."`). Signs,
/// exponents, separators and whitespace are rejected rather than coerced.
pub fn parse_amount(raw: &str) -> Result<Decimal, LedgerError> {
    let invalid = || LedgerError::InvalidAmount(raw.to_string());

    let mut dots = 0;
    let mut digits = 0;
    for c in raw.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return Err(invalid()),
        }
    }
    if digits == 0 || dots > 1 {
        return Err(invalid());
    }

    let (normalized, frac_digits) = match raw.split_once('.') {
        Some((int, frac)) => {
            let int = if int.is_empty() { "0" } else { int };
            if frac.is_empty() {
                (int.to_string(), 0)
            } else {
                (format!("{int}.{frac}"), frac.len())
            }
        }
        None => (raw.to_string(), 0),
    };

    let amount = Decimal::from_str(&normalized).map_err(|_| invalid())?;
    // from_str rounds digits beyond Decimal's precision instead of failing
    if amount.scale() as usize != frac_digits {
        return Err(invalid());
    }
    Ok(amount)
}

/// Trim a label, rejecting it if nothing is left.
pub fn parse_label(raw: &str) -> Result<String, LedgerError> {
    let label = raw.trim();
    if label.is_empty() {
        return Err(LedgerError::InvalidLabel);
    }
    Ok(label.to_string())
}
