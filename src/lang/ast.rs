use super::token::{Literal, Operator};
use super::{Column, Ident};
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Cls(Column),
    Cont(Column),
    Data(Column, Vec<Literal>),
    Delete(Column, u16),
    End(Column),
    For(Column, Ident, Expression, Expression, Expression),
    Gosub(Column, Expression),
    Goto(Column, Expression),
    If(Column, Expression, Vec<Statement>),
    Input(Column, Vec<Expression>, bool),
    Let(Column, Variable, Expression),
    List(Column, Option<u16>),
    Load(Column, Rc<str>),
    Merge(Column, Rc<str>),
    New(Column),
    Next(Column, Option<Ident>),
    On(Column, Expression, Vec<Expression>, bool),
    Print(Column, Option<Expression>, Vec<PrintItem>, bool),
    Read(Column, Vec<Variable>),
    Rem(Column, Rc<str>),
    Restore(Column),
    Return(Column),
    Run(Column, Option<u16>),
    Save(Column, Rc<str>),
    Expression(Column, Expression),
    Stop(Column),
}

impl Statement {
    pub fn column(&self) -> Column {
        use Statement::*;
        match self {
            Cls(col) | Cont(col) | Data(col, ..) | Delete(col, ..) | End(col) | For(col, ..)
            | Gosub(col, ..) | Goto(col, ..) | If(col, ..) | Input(col, ..) | Let(col, ..)
            | List(col, ..) | Load(col, ..) | Merge(col, ..) | New(col) | Next(col, ..)
            | On(col, ..) | Print(col, ..) | Read(col, ..) | Rem(col, ..) | Restore(col)
            | Return(col) | Run(col, ..) | Save(col, ..) | Expression(col, ..) | Stop(col) => {
                col.clone()
            }
        }
    }
}

/// Element of a `PRINT` list. A comma advances to the next print zone;
/// semicolons only separate and leave nothing behind.
#[derive(Debug, PartialEq, Clone)]
pub enum PrintItem {
    Expression(Expression),
    Comma(Column),
}

/// Assignment target.
#[derive(Debug, PartialEq, Clone)]
pub enum Variable {
    Unary(Column, Ident),
    Array(Column, Ident, Box<Expression>),
}

impl Variable {
    pub fn ident(&self) -> &Ident {
        match self {
            Variable::Unary(_, ident) | Variable::Array(_, ident, _) => ident,
        }
    }

    pub fn column(&self) -> Column {
        match self {
            Variable::Unary(col, _) | Variable::Array(col, ..) => col.clone(),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Literal(Column, Literal),
    Identifier(Column, Ident),
    Array(Column, Ident, Box<Expression>),
    Assign(Column, Variable, Box<Expression>),
    Binary(Column, Box<Expression>, Operator, Box<Expression>),
    Unary(Column, Operator, Box<Expression>),
    Grouping(Column, Box<Expression>),
    Call(Column, Rc<str>, Vec<Expression>),
}

impl Expression {
    pub fn column(&self) -> Column {
        use Expression::*;
        match self {
            Literal(col, ..) | Identifier(col, ..) | Array(col, ..) | Assign(col, ..)
            | Binary(col, ..) | Unary(col, ..) | Grouping(col, ..) | Call(col, ..) => col.clone(),
        }
    }

    /// The variable this expression names, if it is one.
    pub fn as_variable(&self) -> Option<Variable> {
        match self {
            Expression::Identifier(col, ident) => Some(Variable::Unary(col.clone(), ident.clone())),
            Expression::Array(col, ident, index) => {
                Some(Variable::Array(col.clone(), ident.clone(), index.clone()))
            }
            _ => None,
        }
    }
}
