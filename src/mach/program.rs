use crate::error;
use crate::lang::{ast::Statement, token::Literal, Error, Line};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Program store
///
/// Numbered lines kept in ascending order. Every mutation goes through a
/// binary search so the vector never needs sorting.
#[derive(Debug, Default, Clone)]
pub struct Program {
    lines: Vec<Rc<Line>>,
}

/// Bytes of machine memory a stored line takes beyond its text.
const LINE_OVERHEAD: usize = 3;

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    fn search(&self, number: u16) -> std::result::Result<usize, usize> {
        self.lines
            .binary_search_by_key(&number, |line| line.number().unwrap_or(0))
    }

    /// Adds a numbered line, replacing any line with the same number.
    pub fn insert(&mut self, line: Line) -> Result<()> {
        let number = match line.number() {
            Some(number) => number,
            None => return Err(error!(InternalError; "DIRECT LINE IN PROGRAM")),
        };
        match self.search(number) {
            Ok(index) => self.lines[index] = Rc::new(line),
            Err(index) => self.lines.insert(index, Rc::new(line)),
        }
        Ok(())
    }

    /// Lines of `other` are added, replacing lines with the same number.
    pub fn merge(&mut self, other: Program) {
        for line in other.lines {
            if let Some(number) = line.number() {
                match self.search(number) {
                    Ok(index) => self.lines[index] = line,
                    Err(index) => self.lines.insert(index, line),
                }
            }
        }
    }

    /// Removing a line that isn't there does nothing.
    pub fn remove(&mut self, number: u16) -> Option<Rc<Line>> {
        match self.search(number) {
            Ok(index) => Some(self.lines.remove(index)),
            Err(_) => None,
        }
    }

    pub fn get(&self, number: u16) -> Option<Rc<Line>> {
        match self.search(number) {
            Ok(index) => Some(self.lines[index].clone()),
            Err(_) => None,
        }
    }

    pub fn first(&self) -> Option<u16> {
        self.lines.first().and_then(|line| line.number())
    }

    /// First line number strictly greater than `number`.
    pub fn successor(&self, number: u16) -> Option<u16> {
        let index = match self.search(number) {
            Ok(index) => index + 1,
            Err(index) => index,
        };
        self.lines.get(index).and_then(|line| line.number())
    }

    pub fn lines(&self) -> impl Iterator<Item = &Rc<Line>> {
        self.lines.iter()
    }

    /// Line numbers and listing text, ascending from `from`.
    pub fn list(&self, from: u16) -> impl Iterator<Item = (u16, String)> + '_ {
        let start = match self.search(from) {
            Ok(index) | Err(index) => index,
        };
        self.lines[start..]
            .iter()
            .filter_map(|line| line.number().map(|n| (n, line.to_string())))
    }

    /// Adds one line of a program file. A bare line number deletes.
    pub fn load_str(&mut self, s: &str) -> Result<()> {
        let line = Line::new(s)?;
        match line.number() {
            None if line.is_empty() => Ok(()),
            None => Err(error!(DirectStatementInFile)),
            Some(number) if line.is_empty() => {
                self.remove(number);
                Ok(())
            }
            Some(_) => self.insert(line),
        }
    }

    /// Emulated memory the program occupies.
    pub fn size(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.source().len() + LINE_OVERHEAD)
            .sum()
    }

    /// Every `DATA` element of the program in execution order.
    pub fn data(&self) -> Vec<Literal> {
        let mut v = vec![];
        for line in self.lines.iter() {
            for index in 0..line.len() {
                if let Some(Statement::Data(_, literals)) = line.statement(index) {
                    v.extend(literals.iter().cloned());
                }
            }
        }
        v
    }
}
