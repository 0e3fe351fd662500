use super::Column;
use std::collections::HashMap;
use std::rc::Rc;

thread_local!(
    static KEYWORDS: HashMap<usize, HashMap<&'static str, Word>> = {
        let mut table: HashMap<usize, HashMap<&'static str, Word>> = HashMap::new();
        for (s, word) in Word::ALL
            .iter()
            .map(|w| (w.as_str(), *w))
            .chain(Word::ALIASES.iter().cloned())
        {
            table.entry(s.len()).or_default().insert(s, word);
        }
        table
    };
);

/// One lexical unit of a source line.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub source: Rc<str>,
    pub position: usize,
}

impl Token {
    pub fn column(&self) -> Column {
        self.position..self.position + self.lexeme.chars().count()
    }

    pub fn is_word(&self, word: Word) -> bool {
        self.kind == TokenKind::Word(word)
    }

    /// True for tokens that may end a statement.
    pub fn is_separator(&self) -> bool {
        matches!(self.kind, TokenKind::Colon | TokenKind::EndOfLine)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TokenKind {
    Word(Word),
    Operator(Operator),
    Number,
    String,
    Ident,
    Remark,
    LParen,
    RParen,
    Comma,
    Colon,
    Semicolon,
    EndOfLine,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Integer(i32),
    Float(f32),
    String(Rc<str>),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            Float(n) => write!(f, "{}", n),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Word {
    Abs,
    At,
    Cls,
    Cont,
    Data,
    Delete,
    End,
    For,
    Gosub,
    Goto,
    If,
    Input,
    Int,
    Let,
    List,
    Load,
    Mem,
    Merge,
    New,
    Next,
    On,
    Print,
    Read,
    Rem,
    Restore,
    Return,
    Rnd,
    Run,
    Save,
    Step,
    Stop,
    Tab,
    Then,
    To,
}

impl Word {
    pub const ALL: [Word; 34] = [
        Word::Abs,
        Word::At,
        Word::Cls,
        Word::Cont,
        Word::Data,
        Word::Delete,
        Word::End,
        Word::For,
        Word::Gosub,
        Word::Goto,
        Word::If,
        Word::Input,
        Word::Int,
        Word::Let,
        Word::List,
        Word::Load,
        Word::Mem,
        Word::Merge,
        Word::New,
        Word::Next,
        Word::On,
        Word::Print,
        Word::Read,
        Word::Rem,
        Word::Restore,
        Word::Return,
        Word::Rnd,
        Word::Run,
        Word::Save,
        Word::Step,
        Word::Stop,
        Word::Tab,
        Word::Then,
        Word::To,
    ];

    /// Cassette commands of the original machine map to the file commands.
    const ALIASES: [(&'static str, Word); 2] = [("CLOAD", Word::Load), ("CSAVE", Word::Save)];

    /// Abbreviations from the Level I manual. Where two keywords share
    /// an abbreviation the scanner decides between them by context.
    const ABBREVIATIONS: [(&'static str, &'static [Word]); 20] = [
        ("A", &[Word::Abs, Word::At]),
        ("C", &[Word::Cont]),
        ("D", &[Word::Data]),
        ("E", &[Word::End]),
        ("F", &[Word::For]),
        ("G", &[Word::Goto]),
        ("GOS", &[Word::Gosub]),
        ("I", &[Word::Int]),
        ("IN", &[Word::Input]),
        ("L", &[Word::List]),
        ("M", &[Word::Mem]),
        ("N", &[Word::Next]),
        ("P", &[Word::Print]),
        ("R", &[Word::Run, Word::Rnd]),
        ("REA", &[Word::Read]),
        ("REST", &[Word::Restore]),
        ("RET", &[Word::Return]),
        ("S", &[Word::Step]),
        ("ST", &[Word::Stop]),
        ("T", &[Word::Then, Word::Tab]),
    ];

    pub fn as_str(&self) -> &'static str {
        use Word::*;
        match self {
            Abs => "ABS",
            At => "AT",
            Cls => "CLS",
            Cont => "CONT",
            Data => "DATA",
            Delete => "DELETE",
            End => "END",
            For => "FOR",
            Gosub => "GOSUB",
            Goto => "GOTO",
            If => "IF",
            Input => "INPUT",
            Int => "INT",
            Let => "LET",
            List => "LIST",
            Load => "LOAD",
            Mem => "MEM",
            Merge => "MERGE",
            New => "NEW",
            Next => "NEXT",
            On => "ON",
            Print => "PRINT",
            Read => "READ",
            Rem => "REM",
            Restore => "RESTORE",
            Return => "RETURN",
            Rnd => "RND",
            Run => "RUN",
            Save => "SAVE",
            Step => "STEP",
            Stop => "STOP",
            Tab => "TAB",
            Then => "THEN",
            To => "TO",
        }
    }

    /// Full keyword lookup in the length-keyed table.
    pub fn from_string(s: &str) -> Option<Word> {
        KEYWORDS.with(|kw| kw.get(&s.len()).and_then(|words| words.get(s).copied()))
    }

    /// Longest keyword length in the table.
    pub fn max_len() -> usize {
        KEYWORDS.with(|kw| kw.keys().copied().max().unwrap_or(0))
    }

    /// Candidate keywords for an abbreviation (the letters before the `.`).
    /// Falls back to any keyword the letters are an unambiguous prefix of.
    pub fn abbreviation(s: &str) -> Vec<Word> {
        if let Some((_, words)) = Word::ABBREVIATIONS.iter().find(|(a, _)| *a == s) {
            return words.to_vec();
        }
        let found: Vec<Word> = Word::ALL
            .iter()
            .filter(|w| w.as_str().len() > s.len() && w.as_str().starts_with(s))
            .copied()
            .collect();
        if found.len() == 1 {
            found
        } else {
            vec![]
        }
    }

    /// Words that begin a statement.
    pub fn is_statement(&self) -> bool {
        use Word::*;
        !matches!(self, Abs | At | Int | Mem | Rnd | Step | Tab | Then | To)
    }

    /// Argument count of a built-in function. `MEM` takes no argument list.
    pub fn arity(&self) -> Option<usize> {
        use Word::*;
        match self {
            Abs | Int | Rnd | Tab => Some(1),
            Mem => Some(0),
            _ => None,
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Operator {
    pub fn is_relational(&self) -> bool {
        use Operator::*;
        matches!(self, Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Word::from_string("REM"), Some(Word::Rem));
        assert_eq!(Word::from_string("CLOAD"), Some(Word::Load));
        assert_eq!(Word::from_string("PICKLES"), None);
        assert_eq!(Word::max_len(), 7);
    }

    #[test]
    fn test_abbreviation() {
        assert_eq!(Word::abbreviation("P"), vec![Word::Print]);
        assert_eq!(Word::abbreviation("GOS"), vec![Word::Gosub]);
        assert_eq!(Word::abbreviation("R"), vec![Word::Run, Word::Rnd]);
        assert_eq!(Word::abbreviation("PRI"), vec![Word::Print]);
        assert_eq!(Word::abbreviation("GO"), vec![]);
        assert_eq!(Word::abbreviation("X"), vec![]);
    }
}
