use crate::error;
use crate::lang::{token::Literal, Error};
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime values
///
/// Level I has integers and single precision floats for numbers, plus
/// strings. There is no implicit conversion between numbers and strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i32),
    Float(f32),
    String(Rc<str>),
}

impl Val {
    pub fn is_string(&self) -> bool {
        matches!(self, Val::String(_))
    }

    /// Condition value for `IF`. Strings are not conditions.
    pub fn is_true(&self) -> Result<bool> {
        match self {
            Val::Integer(n) => Ok(*n != 0),
            Val::Float(n) => Ok(*n != 0.0),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }

    /// Float results must be finite.
    pub fn from_f32(n: f32) -> Result<Val> {
        if !n.is_finite() {
            return Err(error!(Overflow));
        }
        Ok(Val::Float(n))
    }
}

impl From<&Literal> for Val {
    fn from(literal: &Literal) -> Val {
        match literal {
            Literal::Integer(n) => Val::Integer(*n),
            Literal::Float(n) => Val::Float(*n),
            Literal::String(s) => Val::String(s.clone()),
        }
    }
}

impl TryFrom<Val> for f32 {
    type Error = Error;
    fn try_from(val: Val) -> Result<f32> {
        match val {
            Val::Integer(n) => Ok(n as f32),
            Val::Float(n) => Ok(n),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }
}

impl TryFrom<Val> for i32 {
    type Error = Error;
    /// Truncates toward zero.
    fn try_from(val: Val) -> Result<i32> {
        match val {
            Val::Integer(n) => Ok(n),
            Val::Float(n) => {
                let n = n.trunc();
                if n >= i32::min_value() as f32 && n <= i32::max_value() as f32 {
                    Ok(n as i32)
                } else {
                    Err(error!(Overflow))
                }
            }
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }
}

impl TryFrom<Val> for u16 {
    type Error = Error;
    fn try_from(val: Val) -> Result<u16> {
        let n = i32::try_from(val)?;
        if n >= 0 && n <= u16::max_value() as i32 {
            Ok(n as u16)
        } else {
            Err(error!(Overflow))
        }
    }
}

impl TryFrom<Val> for Rc<str> {
    type Error = Error;
    fn try_from(val: Val) -> Result<Rc<str>> {
        match val {
            Val::String(s) => Ok(s),
            _ => Err(error!(TypeMismatch)),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::String(s) => write!(f, "{}", s),
            Val::Integer(n) => {
                if (*n as i64).abs() < 1_000_000 {
                    write!(f, "{}{}", if *n < 0 { "" } else { " " }, n)
                } else {
                    write!(f, "{}", format_float(*n as f32))
                }
            }
            Val::Float(n) => write!(f, "{}", format_float(*n)),
        }
    }
}

const SIGNIFICANT_DIGITS: usize = 6;

/// Six significant digits with a leading space for the sign position.
fn format_float(n: f32) -> String {
    if n == 0.0 {
        return " 0".to_string();
    }
    let sign = if n < 0.0 { "-" } else { " " };
    let abs = n.abs();
    if abs >= 0.01 && abs < 1_000_000.0 {
        let magnitude = abs.log10().floor() as i32 + 1;
        let decimals = (SIGNIFICANT_DIGITS as i32 - magnitude).max(0) as usize;
        let s = format!("{:.*}", decimals, abs);
        let rounded: f64 = s.parse().unwrap_or(0.0);
        if rounded < 1_000_000.0 {
            let mut s = s;
            if s.contains('.') {
                s = s.trim_end_matches('0').trim_end_matches('.').to_string();
            }
            if s.starts_with("0.") {
                s.remove(0);
            }
            return format!("{}{}", sign, s);
        }
    }
    let s = format!("{:.*E}", SIGNIFICANT_DIGITS - 1, abs);
    let (mantissa, exponent) = match s.find('E') {
        Some(idx) => (&s[..idx], &s[idx + 1..]),
        None => (s.as_str(), "0"),
    };
    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    format!(
        "{}{}E{}{:02}",
        sign,
        mantissa,
        if exponent < 0 { '-' } else { '+' },
        exponent.abs()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_display() {
        assert_eq!(Val::Integer(6).to_string(), " 6");
        assert_eq!(Val::Integer(-6).to_string(), "-6");
        assert_eq!(Val::Integer(0).to_string(), " 0");
        assert_eq!(Val::Integer(999999).to_string(), " 999999");
        assert_eq!(Val::Integer(1000000).to_string(), " 1E+06");
    }

    #[test]
    fn test_float_display() {
        assert_eq!(Val::Float(0.5).to_string(), " .5");
        assert_eq!(Val::Float(-0.5).to_string(), "-.5");
        assert_eq!(Val::Float(2.5).to_string(), " 2.5");
        assert_eq!(Val::Float(1.0 / 3.0).to_string(), " .333333");
        assert_eq!(Val::Float(123456.7).to_string(), " 123457");
        assert_eq!(Val::Float(0.001).to_string(), " 1E-03");
        assert_eq!(Val::Float(1234567.0).to_string(), " 1.23457E+06");
        assert_eq!(Val::Float(-2.0e10).to_string(), "-2E+10");
    }

    #[test]
    fn test_conversions() {
        assert_eq!(i32::try_from(Val::Float(-2.7)), Ok(-2));
        assert_eq!(u16::try_from(Val::Integer(100)), Ok(100));
        assert!(u16::try_from(Val::Integer(-1)).is_err());
        assert!(f32::try_from(Val::String("A".into())).is_err());
        assert_eq!(Val::from_f32(f32::INFINITY).unwrap_err().code(), crate::lang::ErrorCode::Overflow);
    }
}
