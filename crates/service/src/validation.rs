//! Field-level checks used by `validator` derives on service inputs.
use rust_decimal::Decimal;
use validator::ValidationError;

pub fn non_negative(v: &Decimal) -> Result<(), ValidationError> {
    if v.is_sign_negative() && !v.is_zero() {
        return Err(ValidationError::new("non_negative"));
    }
    Ok(())
}

/// ISO-4217 style code: exactly three upper-case ASCII letters.
pub fn currency_code(v: &str) -> Result<(), ValidationError> {
    if v.len() == 3 && v.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(ValidationError::new("currency_code"))
    }
}

/// `HH:mm`, two digits each side.
pub fn clock_time(v: &str) -> Result<(), ValidationError> {
    let b = v.as_bytes();
    let ok = b.len() == 5 && b[2] == b':' && [0, 1, 3, 4].iter().all(|&i| b[i].is_ascii_digit());
    if ok { Ok(()) } else { Err(ValidationError::new("clock_time")) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn currency_codes() {
        assert!(currency_code("USD").is_ok());
        assert!(currency_code("usd").is_err());
        assert!(currency_code("USDT").is_err());
    }

    #[test]
    fn clock_times() {
        assert!(clock_time("19:30").is_ok());
        assert!(clock_time("9:30").is_err());
        assert!(clock_time("19-30").is_err());
    }

    #[test]
    fn money_sign() {
        assert!(non_negative(&Decimal::ZERO).is_ok());
        assert!(non_negative(&Decimal::from_str("12.50").unwrap()).is_ok());
        assert!(non_negative(&Decimal::from_str("-0.01").unwrap()).is_err());
    }
}
