use super::{Val, MAX_ARRAY_INDEX};
use crate::error;
use crate::lang::{Error, Ident};
use std::collections::HashMap;
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Scalars and arrays live in separate name spaces, so `A` and `A(1)`
/// do not collide. Arrays have one dimension and grow on demand.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
    arrays: HashMap<Rc<str>, Vec<Val>>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
        self.arrays.clear();
    }

    fn default_for(ident: &Ident) -> Val {
        if ident.is_string() {
            Val::String("".into())
        } else {
            Val::Integer(0)
        }
    }

    fn type_check(ident: &Ident, value: &Val) -> Result<()> {
        if ident.is_string() == value.is_string() {
            Ok(())
        } else {
            Err(error!(TypeMismatch))
        }
    }

    fn index(index: Val) -> Result<usize> {
        let index = i32::try_from(index)?;
        if index < 0 || index as usize > MAX_ARRAY_INDEX {
            return Err(error!(SubscriptOutOfRange));
        }
        Ok(index as usize)
    }

    pub fn fetch(&self, ident: &Ident) -> Val {
        match self.vars.get(ident.name()) {
            Some(val) => val.clone(),
            None => Var::default_for(ident),
        }
    }

    pub fn store(&mut self, ident: &Ident, value: Val) -> Result<()> {
        Var::type_check(ident, &value)?;
        match self.vars.get_mut(ident.name()) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(ident.name().clone(), value);
            }
        }
        Ok(())
    }

    pub fn fetch_array(&self, ident: &Ident, index: Val) -> Result<Val> {
        let index = Var::index(index)?;
        Ok(self
            .arrays
            .get(ident.name())
            .and_then(|v| v.get(index))
            .cloned()
            .unwrap_or_else(|| Var::default_for(ident)))
    }

    pub fn store_array(&mut self, ident: &Ident, index: Val, value: Val) -> Result<()> {
        Var::type_check(ident, &value)?;
        let index = Var::index(index)?;
        let array = self
            .arrays
            .entry(ident.name().clone())
            .or_insert_with(Vec::new);
        if array.len() <= index {
            array.resize(index + 1, Var::default_for(ident));
        }
        array[index] = value;
        Ok(())
    }
}
