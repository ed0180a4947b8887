//! Display formatting for numeric results.

use super::CalcError;

/// Format a result for the calculator display.
///
/// Whole numbers are shown without a fractional part, everything else uses
/// the shortest decimal text that round-trips to the same `f64`. Rust's
/// float `Display` never switches to exponent notation, so very large or
/// very small values are written out in full.
pub fn normalize(value: f64) -> Result<String, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::NonFiniteResult);
    }

    if value == 0.0 {
        // Covers -0.0 as well.
        return Ok("0".to_string());
    }

    if value.fract() == 0.0 {
        // Display for an integral f64 already omits ".0".
        Ok(format!("{:.0}", value))
    } else {
        Ok(value.to_string())
    }
}

/// Parse operand text the way the keypad produces it.
///
/// Accepts forms such as `"12"`, `"0.5"` and `"3."`. Anything that is not a
/// plain finite decimal (signs, exponents, `inf`, `NaN`) is rejected.
pub fn parse_operand(text: &str) -> Result<f64, CalcError> {
    let invalid = || CalcError::InvalidInput {
        input: text.to_string(),
    };

    let plain = !text.is_empty()
        && text.chars().all(|c| c.is_ascii_digit() || c == '.')
        && text.chars().filter(|&c| c == '.').count() <= 1
        && text != ".";
    if !plain {
        return Err(invalid());
    }

    let value = text.parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() {
        // Too many digits for an f64.
        return Err(invalid());
    }
    Ok(value)
}
