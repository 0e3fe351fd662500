use super::ast::*;
use super::{lex, parse, Error, LineNumber};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// One line of source: an optional line number and its statements.
///
/// Statements are addressed by a flat index in execution order. The
/// statements of an `IF` branch follow the `IF` itself.
#[derive(Debug, PartialEq)]
pub struct Line {
    number: LineNumber,
    source: Rc<str>,
    statements: Vec<Statement>,
}

impl Line {
    pub fn new(s: &str) -> Result<Line> {
        let source: Rc<str> = s.trim_end_matches(|c| c == '\r' || c == '\n').into();
        let tokens = lex(&source).map_err(|e| e.in_source(&source))?;
        let (number, statements) = parse(&tokens).map_err(|e| e.in_source(&source))?;
        Ok(Line {
            number,
            source,
            statements,
        })
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn source(&self) -> &Rc<str> {
        &self.source
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Number of addressable statements.
    pub fn len(&self) -> usize {
        fn count(v: &[Statement]) -> usize {
            v.iter()
                .map(|s| match s {
                    Statement::If(_, _, then) => 1 + count(then),
                    _ => 1,
                })
                .sum()
        }
        count(&self.statements)
    }

    /// Nothing to store: a bare line number deletes the line.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn statement(&self, index: usize) -> Option<&Statement> {
        fn find<'a>(v: &'a [Statement], index: &mut usize) -> Option<&'a Statement> {
            for s in v {
                if *index == 0 {
                    return Some(s);
                }
                *index -= 1;
                if let Statement::If(_, _, then) = s {
                    if let Some(found) = find(then, index) {
                        return Some(found);
                    }
                }
            }
            None
        }
        let mut index = index;
        find(&self.statements, &mut index)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(number) => {
                let body = self
                    .source
                    .trim_start()
                    .trim_start_matches(|c: char| c.is_ascii_digit())
                    .trim_start();
                write!(f, "{} {}", number, body)
            }
            None => write!(f, "{}", self.source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_index() {
        let line = Line::new("10 A=1:IF A THEN B=2:C=3").unwrap();
        assert_eq!(line.len(), 4);
        assert!(matches!(line.statement(1), Some(Statement::If(..))));
        assert!(matches!(line.statement(3), Some(Statement::Expression(..))));
        assert_eq!(line.statement(4), None);
    }
}
