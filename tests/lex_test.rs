use trs80::lang::{lex, token::*};

fn words(s: &str) -> Vec<TokenKind> {
    lex(s).unwrap().into_iter().map(|t| t.kind).collect()
}

fn lexemes(s: &str) -> Vec<String> {
    lex(s).unwrap().into_iter().map(|t| t.lexeme).collect()
}

#[test]
fn test_relational_operators() {
    use Operator::*;
    assert_eq!(
        words("1=<>=<>><2"),
        vec![
            TokenKind::Number,
            TokenKind::Operator(LessEqual),
            TokenKind::Operator(GreaterEqual),
            TokenKind::Operator(NotEqual),
            TokenKind::Operator(NotEqual),
            TokenKind::Number,
            TokenKind::EndOfLine,
        ]
    );
}

#[test]
fn test_lexemes_rebuild_line() {
    let s = "10 FORI=1TO9:P.I;:N.I";
    let joined: String = lexemes(s).concat();
    assert_eq!(joined, "10FORI=1TO9:P.I;:N.I");
    let s = "A=B*(C-D)/E";
    assert_eq!(lexemes(s).concat(), s);
}

#[test]
fn test_keyword_inside_run() {
    assert_eq!(lexemes("FORI"), vec!["FOR", "I", ""]);
    assert_eq!(lexemes("TOTAL"), vec!["TO", "TAL", ""]);
    assert_eq!(lexemes("IFBTHENC"), vec!["IF", "B", "THEN", "C", ""]);
    assert_eq!(lexemes("count"), vec!["COUNT", ""]);
}

#[test]
fn test_abbreviations_match_keywords() {
    let pairs = [
        ("P.A", "PRINT A"),
        ("IN.A", "INPUT A"),
        ("GOS.10", "GOSUB 10"),
        ("RET.", "RETURN"),
        ("REST.", "RESTORE"),
        ("N.I", "NEXT I"),
        ("G.10", "GOTO 10"),
        ("F.I=1TO3S.2", "FOR I=1 TO 3 STEP 2"),
        ("P.A.5,1", "PRINT AT 5,1"),
        ("P.A.(-1)", "PRINT ABS(-1)"),
        ("P.T.(3)", "PRINT TAB(3)"),
        ("IF A T.10", "IF A THEN 10"),
    ];
    for (short, long) in pairs.iter() {
        assert_eq!(words(short), words(long), "{}", short);
    }
}

#[test]
fn test_identifiers() {
    let tokens = lex("a$=b").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].lexeme, "A$");
    assert_eq!(tokens[0].column(), 0..2);
    assert_eq!(tokens[2].lexeme, "B");
}

#[test]
fn test_numbers() {
    let tokens = lex("12 1.5 .25 1E3 2E").unwrap();
    let literals: Vec<Option<Literal>> = tokens.iter().map(|t| t.literal.clone()).collect();
    assert_eq!(literals[0], Some(Literal::Integer(12)));
    assert_eq!(literals[1], Some(Literal::Float(1.5)));
    assert_eq!(literals[2], Some(Literal::Float(0.25)));
    assert_eq!(literals[3], Some(Literal::Float(1000.0)));
    assert_eq!(literals[4], Some(Literal::Integer(2)));
    assert_eq!(tokens[5].kind, TokenKind::Ident);
}

#[test]
fn test_strings_keep_case() {
    let tokens = lex("print \"Hello, World\"").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Word(Word::Print));
    assert_eq!(
        tokens[1].literal,
        Some(Literal::String("Hello, World".into()))
    );
}

#[test]
fn test_remark_payload() {
    let tokens = lex("10 REM Don't: PRINT").unwrap();
    assert_eq!(tokens[2].kind, TokenKind::Remark);
    assert_eq!(
        tokens[2].literal,
        Some(Literal::String(" Don't: PRINT".into()))
    );
    assert_eq!(tokens[3].kind, TokenKind::EndOfLine);
}

#[test]
fn test_data_payload() {
    let tokens = lex("DATA 1, two words ,\"A,B\", -2.5").unwrap();
    let literals: Vec<Literal> = tokens.iter().filter_map(|t| t.literal.clone()).collect();
    assert_eq!(
        literals,
        vec![
            Literal::Integer(1),
            Literal::String("two words".into()),
            Literal::String("A,B".into()),
            Literal::Float(-2.5),
        ]
    );
}

#[test]
fn test_scan_errors() {
    let e = lex("PRINT \"OOPS").unwrap_err();
    assert_eq!(e.to_string(), "WHAT?\nUNTERMINATED STRING");
    assert_eq!(e.column(), 6..11);
    let e = lex("A=1&2").unwrap_err();
    assert_eq!(e.to_string(), "WHAT?\nUNEXPECTED CHARACTER");
    assert_eq!(e.column(), 3..4);
}
