use super::token::*;
use super::{Column, Error};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Scan one line of source into tokens ending with `EndOfLine`.
pub fn lex(s: &str) -> Result<Vec<Token>> {
    BasicLexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Integer when there is no decimal point or exponent and it fits.
fn numeric_literal(s: &str) -> Option<Literal> {
    if s.is_empty()
        || !s
            .chars()
            .all(|c| is_basic_digit(c) || c == '.' || c == 'E' || c == '+' || c == '-')
    {
        return None;
    }
    if !s.contains('.') && !s.contains('E') {
        if let Ok(n) = s.parse::<i32>() {
            return Some(Literal::Integer(n));
        }
    }
    let mut s = s.to_string();
    if s.ends_with('.') {
        s.push('0');
    }
    if let Some(idx) = s.find('.') {
        if idx == 0 || !s[..idx].ends_with(|c: char| is_basic_digit(c)) {
            s.insert(idx, '0');
        }
    }
    match s.parse::<f32>() {
        Ok(n) => Some(Literal::Float(n)),
        Err(_) => None,
    }
}

struct BasicLexer {
    source: Rc<str>,
    original: Vec<char>,
    upper: Vec<char>,
    pos: usize,
    tokens: Vec<Token>,
}

impl BasicLexer {
    fn lex(s: &str) -> Result<Vec<Token>> {
        let s = s.trim_end_matches(|c| c == '\r' || c == '\n');
        let original: Vec<char> = s.chars().collect();
        let mut lexer = BasicLexer {
            source: s.into(),
            upper: original.iter().map(|c| c.to_ascii_uppercase()).collect(),
            original,
            pos: 0,
            tokens: vec![],
        };
        lexer.scan()?;
        Ok(lexer.tokens)
    }

    fn scan(&mut self) -> Result<()> {
        loop {
            while self.peek().map_or(false, is_basic_whitespace) {
                self.pos += 1;
            }
            let ch = match self.peek() {
                Some(ch) => ch,
                None => break,
            };
            if is_basic_digit(ch) || (ch == '.' && self.peek_at(1).map_or(false, is_basic_digit))
            {
                self.number()?;
            } else if ch == '"' {
                self.string()?;
            } else if is_basic_alphabetic(ch) {
                self.alphabetic()?;
            } else {
                self.minutia()?;
            }
        }
        let end = self.upper.len();
        self.push(TokenKind::EndOfLine, String::new(), None, end);
        Ok(())
    }

    fn peek(&self) -> Option<char> {
        self.upper.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.upper.get(self.pos + offset).copied()
    }

    fn upper_text(&self, range: Column) -> String {
        self.upper[range].iter().collect()
    }

    fn original_text(&self, range: Column) -> String {
        self.original[range].iter().collect()
    }

    fn push(&mut self, kind: TokenKind, lexeme: String, literal: Option<Literal>, position: usize) {
        self.tokens.push(Token {
            kind,
            lexeme,
            literal,
            source: self.source.clone(),
            position,
        });
    }

    fn push_upper(&mut self, kind: TokenKind, range: Column, literal: Option<Literal>) {
        let lexeme = self.upper_text(range.clone());
        self.push(kind, lexeme, literal, range.start);
    }

    fn number(&mut self) -> Result<()> {
        let start = self.pos;
        while self.peek().map_or(false, is_basic_digit) {
            self.pos += 1;
        }
        if self.peek() == Some('.') {
            self.pos += 1;
            while self.peek().map_or(false, is_basic_digit) {
                self.pos += 1;
            }
        }
        if self.peek() == Some('E') {
            let exp_digits = match self.peek_at(1) {
                Some('+') | Some('-') => self.peek_at(2).map_or(false, is_basic_digit),
                Some(c) => is_basic_digit(c),
                None => false,
            };
            if exp_digits {
                self.pos += 2;
                while self.peek().map_or(false, is_basic_digit) {
                    self.pos += 1;
                }
            }
        }
        let range = start..self.pos;
        let text = self.upper_text(range.clone());
        match numeric_literal(&text) {
            Some(Literal::Float(n)) if !n.is_finite() => Err(error!(Overflow, ..&range)),
            Some(literal) => {
                self.push_upper(TokenKind::Number, range, Some(literal));
                Ok(())
            }
            None => Err(error!(UnexpectedCharacter, ..&range)),
        }
    }

    fn string(&mut self) -> Result<()> {
        let start = self.pos;
        let close = self.upper[start + 1..]
            .iter()
            .position(|c| *c == '"')
            .map(|p| start + 1 + p);
        match close {
            None => Err(error!(UnterminatedString, ..&(start..self.upper.len()))),
            Some(close) => {
                self.pos = close + 1;
                let text = self.original_text(start + 1..close);
                let lexeme = self.original_text(start..close + 1);
                self.push(
                    TokenKind::String,
                    lexeme,
                    Some(Literal::String(text.into())),
                    start,
                );
                Ok(())
            }
        }
    }

    fn alphabetic(&mut self) -> Result<()> {
        let start = self.pos;
        let run_end = self.run_end(start);

        if self.upper.get(run_end) == Some(&'.') {
            let letters = self.upper_text(start..run_end);
            let candidates = Word::abbreviation(&letters);
            if let Some(word) = self.resolve(&candidates, run_end + 1) {
                self.pos = run_end + 1;
                self.push_upper(TokenKind::Word(word), start..self.pos, None);
                return self.after_word(word);
            }
        }

        if let Some((len, word)) = self.longest_keyword(start, run_end) {
            // A shorter keyword inside a longer run backs up here and the
            // remainder is scanned as a token of its own.
            self.pos = start + len;
            self.push_upper(TokenKind::Word(word), start..self.pos, None);
            return self.after_word(word);
        }

        let mut end = start + 1;
        while end < run_end && !self.keyword_starts_at(end, run_end) {
            end += 1;
        }
        if end == run_end && self.upper.get(end) == Some(&'$') {
            end += 1;
        }
        self.pos = end;
        self.push_upper(TokenKind::Ident, start..end, None);
        Ok(())
    }

    fn run_end(&self, start: usize) -> usize {
        let mut end = start;
        while self.upper.get(end).map_or(false, |c| is_basic_alphabetic(*c)) {
            end += 1;
        }
        end
    }

    fn longest_keyword(&self, start: usize, run_end: usize) -> Option<(usize, Word)> {
        let max = (run_end - start).min(Word::max_len());
        let mut best = None;
        for len in 2..=max {
            if let Some(word) = Word::from_string(&self.upper_text(start..start + len)) {
                best = Some((len, word));
            }
        }
        best
    }

    fn keyword_starts_at(&self, at: usize, run_end: usize) -> bool {
        if self.longest_keyword(at, run_end).is_some() {
            return true;
        }
        self.upper.get(run_end) == Some(&'.')
            && !Word::abbreviation(&self.upper_text(at..run_end)).is_empty()
    }

    fn at_statement_start(&self) -> bool {
        match self.tokens.last() {
            None => true,
            Some(t) => match t.kind {
                TokenKind::Colon | TokenKind::Word(Word::Then) => true,
                TokenKind::Number => self.tokens.len() == 1,
                _ => false,
            },
        }
    }

    /// Picks one keyword when an abbreviation is shared.
    fn resolve(&self, candidates: &[Word], after: usize) -> Option<Word> {
        if candidates.len() < 2 {
            return candidates.first().copied();
        }
        let paren_follows = self.upper[after.min(self.upper.len())..]
            .iter()
            .find(|c| !is_basic_whitespace(**c))
            == Some(&'(');
        let after_print = self
            .tokens
            .last()
            .map_or(false, |t| t.is_word(Word::Print));
        if self.at_statement_start() {
            if let Some(word) = candidates.iter().find(|w| w.is_statement()) {
                return Some(*word);
            }
        }
        if candidates.contains(&Word::Tab) && candidates.contains(&Word::Then) {
            return Some(if paren_follows { Word::Tab } else { Word::Then });
        }
        if candidates.contains(&Word::At) && candidates.contains(&Word::Abs) {
            return Some(if after_print && !paren_follows {
                Word::At
            } else {
                Word::Abs
            });
        }
        candidates
            .iter()
            .find(|w| !w.is_statement())
            .or_else(|| candidates.first())
            .copied()
    }

    fn after_word(&mut self, word: Word) -> Result<()> {
        match word {
            Word::Rem => {
                self.remark();
                Ok(())
            }
            Word::Data => self.data(),
            _ => Ok(()),
        }
    }

    fn remark(&mut self) {
        let range = self.pos..self.upper.len();
        let text = self.original_text(range.clone());
        self.push(
            TokenKind::Remark,
            text.clone(),
            Some(Literal::String(text.into())),
            range.start,
        );
        self.pos = range.end;
    }

    fn data(&mut self) -> Result<()> {
        loop {
            while self.peek().map_or(false, is_basic_whitespace) {
                self.pos += 1;
            }
            let start = self.pos;
            if self.peek() == Some('"') {
                self.string()?;
                while self.peek().map_or(false, is_basic_whitespace) {
                    self.pos += 1;
                }
            } else {
                let end = self.upper[start..]
                    .iter()
                    .position(|c| *c == ',')
                    .map_or(self.upper.len(), |p| start + p);
                let text = self.original_text(start..end);
                let trimmed = text.trim_end();
                let range = start..start + trimmed.chars().count();
                match numeric_literal(&trimmed.to_ascii_uppercase()) {
                    Some(literal) => self.push_upper(TokenKind::Number, range, Some(literal)),
                    None => self.push(
                        TokenKind::String,
                        trimmed.to_string(),
                        Some(Literal::String(trimmed.into())),
                        start,
                    ),
                }
                self.pos = end;
            }
            match self.peek() {
                None => return Ok(()),
                Some(',') => {
                    self.push_upper(TokenKind::Comma, self.pos..self.pos + 1, None);
                    self.pos += 1;
                }
                Some(_) => return Err(error!(SyntaxError, ..&(self.pos..self.pos + 1); "EXPECTED COMMA")),
            }
        }
    }

    fn minutia(&mut self) -> Result<()> {
        let start = self.pos;
        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Ok(()),
        };
        let next = self.peek_at(1);
        let (kind, len) = match (ch, next) {
            ('<', Some('=')) | ('=', Some('<')) => (TokenKind::Operator(Operator::LessEqual), 2),
            ('>', Some('=')) | ('=', Some('>')) => {
                (TokenKind::Operator(Operator::GreaterEqual), 2)
            }
            ('<', Some('>')) | ('>', Some('<')) => (TokenKind::Operator(Operator::NotEqual), 2),
            ('<', _) => (TokenKind::Operator(Operator::Less), 1),
            ('>', _) => (TokenKind::Operator(Operator::Greater), 1),
            ('=', _) => (TokenKind::Operator(Operator::Equal), 1),
            ('+', _) => (TokenKind::Operator(Operator::Plus), 1),
            ('-', _) => (TokenKind::Operator(Operator::Minus), 1),
            ('*', _) => (TokenKind::Operator(Operator::Multiply), 1),
            ('/', _) => (TokenKind::Operator(Operator::Divide), 1),
            ('(', _) => (TokenKind::LParen, 1),
            (')', _) => (TokenKind::RParen, 1),
            (',', _) => (TokenKind::Comma, 1),
            (':', _) => (TokenKind::Colon, 1),
            (';', _) => (TokenKind::Semicolon, 1),
            _ => return Err(error!(UnexpectedCharacter, ..&(start..start + 1))),
        };
        self.pos += len;
        self.push_upper(kind, start..self.pos, None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(s: &str) -> Vec<TokenKind> {
        lex(s).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_numeric_literal() {
        assert_eq!(numeric_literal("12"), Some(Literal::Integer(12)));
        assert_eq!(numeric_literal("-3"), Some(Literal::Integer(-3)));
        assert_eq!(numeric_literal(".5"), Some(Literal::Float(0.5)));
        assert_eq!(numeric_literal("-.5"), Some(Literal::Float(-0.5)));
        assert_eq!(numeric_literal("2."), Some(Literal::Float(2.0)));
        assert_eq!(numeric_literal("1E3"), Some(Literal::Float(1000.0)));
        assert_eq!(numeric_literal("INF"), None);
        assert_eq!(numeric_literal("HELLO"), None);
        assert_eq!(
            numeric_literal("99999999999"),
            Some(Literal::Float(99999999999.0))
        );
    }

    #[test]
    fn test_statement_start_context() {
        use TokenKind::*;
        assert_eq!(kinds("R."), vec![Word(super::Word::Run), EndOfLine]);
        assert_eq!(
            kinds("X=R.(6)"),
            vec![
                Ident,
                Operator(super::Operator::Equal),
                Word(super::Word::Rnd),
                LParen,
                Number,
                RParen,
                EndOfLine
            ]
        );
    }
}
