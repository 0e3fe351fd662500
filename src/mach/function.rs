use super::Val;
use crate::error;
use crate::lang::Error;
use rand::Rng;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Built-in functions. `TAB` only exists inside `PRINT` and is handled there.
pub struct Function {}

impl Function {
    pub fn abs(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Integer(n) => match n.checked_abs() {
                Some(n) => Ok(Integer(n)),
                None => Ok(Float((n as f32).abs())),
            },
            Float(n) => Ok(Float(n.abs())),
            String(_) => Err(error!(TypeMismatch)),
        }
    }

    /// Largest whole number not greater than the argument.
    pub fn int(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Integer(n) => Ok(Integer(n)),
            Float(n) => {
                let n = n.floor();
                if n >= i32::min_value() as f32 && n < i32::max_value() as f32 {
                    Ok(Integer(n as i32))
                } else {
                    Ok(Float(n))
                }
            }
            String(_) => Err(error!(TypeMismatch)),
        }
    }

    /// `RND(0)` is a float in `[0,1)`; `RND(n)` is a whole number in `1..=n`.
    pub fn rnd(val: Val) -> Result<Val> {
        let n = i32::try_from(val)?;
        let mut rng = rand::thread_rng();
        match n {
            0 => Ok(Val::Float(rng.gen::<f32>())),
            n if n > 0 => Ok(Val::Integer(rng.gen_range(1..=n))),
            _ => Err(error!(IllegalFunctionCall; "RND OF NEGATIVE")),
        }
    }

    pub fn mem(free: usize) -> Val {
        Val::Integer(free as i32)
    }
}
