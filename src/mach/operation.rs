use super::Val;
use crate::error;
use crate::lang::{token::Operator, Error};
use std::cmp::Ordering;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Arithmetic and comparison on [`Val`]. Integer results that overflow
/// are promoted to floats; float results must stay finite.
pub struct Operation {}

impl Operation {
    pub fn binary(op: Operator, lhs: Val, rhs: Val) -> Result<Val> {
        use Operator::*;
        match op {
            Plus => Operation::sum(lhs, rhs),
            Minus => Operation::subtract(lhs, rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
            Equal => Operation::compare(lhs, rhs, |o| o == Ordering::Equal),
            NotEqual => Operation::compare(lhs, rhs, |o| o != Ordering::Equal),
            Less => Operation::compare(lhs, rhs, |o| o == Ordering::Less),
            LessEqual => Operation::compare(lhs, rhs, |o| o != Ordering::Greater),
            Greater => Operation::compare(lhs, rhs, |o| o == Ordering::Greater),
            GreaterEqual => Operation::compare(lhs, rhs, |o| o != Ordering::Less),
        }
    }

    pub fn negate(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Integer(n) => match n.checked_neg() {
                Some(n) => Ok(Integer(n)),
                None => Ok(Float(-(n as f32))),
            },
            Float(n) => Ok(Float(-n)),
            String(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_add(r) {
                Some(i) => Ok(Integer(i)),
                None => Val::from_f32(l as f32 + r as f32),
            },
            (Integer(l), Float(r)) => Val::from_f32(l as f32 + r),
            (Float(l), Integer(r)) => Val::from_f32(l + r as f32),
            (Float(l), Float(r)) => Val::from_f32(l + r),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_sub(r) {
                Some(i) => Ok(Integer(i)),
                None => Val::from_f32(l as f32 - r as f32),
            },
            (Integer(l), Float(r)) => Val::from_f32(l as f32 - r),
            (Float(l), Integer(r)) => Val::from_f32(l - r as f32),
            (Float(l), Float(r)) => Val::from_f32(l - r),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_mul(r) {
                Some(i) => Ok(Integer(i)),
                None => Val::from_f32(l as f32 * r as f32),
            },
            (Integer(l), Float(r)) => Val::from_f32(l as f32 * r),
            (Float(l), Integer(r)) => Val::from_f32(l * r as f32),
            (Float(l), Float(r)) => Val::from_f32(l * r),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(_), Integer(0)) => Err(error!(DivisionByZero)),
            (Integer(l), Integer(r)) => {
                if l.checked_rem(r) == Some(0) {
                    if let Some(i) = l.checked_div(r) {
                        return Ok(Integer(i));
                    }
                }
                Val::from_f32(l as f32 / r as f32)
            }
            (String(_), _) | (_, String(_)) => Err(error!(TypeMismatch)),
            (l, r) => {
                let r = f32::try_from(r)?;
                if r == 0.0 {
                    return Err(error!(DivisionByZero));
                }
                let l = f32::try_from(l)?;
                Val::from_f32(l / r)
            }
        }
    }

    /// Relational operators yield 1 for true and 0 for false.
    fn compare<F: Fn(Ordering) -> bool>(lhs: Val, rhs: Val, test: F) -> Result<Val> {
        let ordering = Operation::ordering(&lhs, &rhs)?;
        Ok(Val::Integer(if test(ordering) { 1 } else { 0 }))
    }

    fn ordering(lhs: &Val, rhs: &Val) -> Result<Ordering> {
        use Val::*;
        let ordering = match (lhs, rhs) {
            (Integer(l), Integer(r)) => Some(l.cmp(r)),
            (Integer(l), Float(r)) => (*l as f32).partial_cmp(r),
            (Float(l), Integer(r)) => l.partial_cmp(&(*r as f32)),
            (Float(l), Float(r)) => l.partial_cmp(r),
            (String(l), String(r)) => Some(l.cmp(r)),
            _ => return Err(error!(TypeMismatch)),
        };
        match ordering {
            Some(ordering) => Ok(ordering),
            None => Err(error!(Overflow)),
        }
    }
}
