use super::*;

fn parse_str(s: &str) -> Option<Statement> {
    let tokens = lex(s).ok()?;
    match parse(&tokens) {
        Ok((_, mut v)) => v.pop(),
        Err(_) => None,
    }
}

fn parse_err(s: &str) -> Error {
    let tokens = lex(s).unwrap();
    parse(&tokens).unwrap_err()
}

fn plain(col: Column, name: &str) -> Variable {
    Variable::Unary(col, Ident::Plain(name.into()))
}

#[test]
fn test_implicit_let() {
    let answer = Statement::Expression(
        0..4,
        Expression::Assign(
            0..4,
            plain(0..1, "A"),
            Box::new(Expression::Literal(2..4, Literal::Integer(12))),
        ),
    );
    assert_eq!(parse_str("A=12"), Some(answer));
}

#[test]
fn test_let_string() {
    let answer = Statement::Let(
        0..3,
        Variable::Unary(4..6, Ident::String("A$".into())),
        Expression::Literal(7..13, Literal::String("food".into())),
    );
    assert_eq!(parse_str("LET A$=\"food\""), Some(answer));
}

#[test]
fn test_unary() {
    let answer = Statement::Expression(
        0..9,
        Expression::Assign(
            0..9,
            plain(0..1, "A"),
            Box::new(Expression::Unary(
                2..9,
                Operator::Minus,
                Box::new(Expression::Grouping(
                    3..9,
                    Box::new(Expression::Binary(
                        4..8,
                        Box::new(Expression::Literal(4..5, Literal::Integer(1))),
                        Operator::Plus,
                        Box::new(Expression::Unary(
                            6..8,
                            Operator::Plus,
                            Box::new(Expression::Literal(7..8, Literal::Integer(1))),
                        )),
                    )),
                )),
            )),
        ),
    );
    assert_eq!(parse_str("A=-(1++1)"), Some(answer));
}

#[test]
fn test_precedence() {
    let stmt = parse_str("A=1+2*3").unwrap();
    match stmt {
        Statement::Expression(_, Expression::Assign(_, _, expr)) => match *expr {
            Expression::Binary(_, lhs, Operator::Plus, rhs) => {
                assert_eq!(*lhs, Expression::Literal(2..3, Literal::Integer(1)));
                assert!(matches!(*rhs, Expression::Binary(_, _, Operator::Multiply, _)));
            }
            _ => panic!(),
        },
        _ => panic!(),
    }
}

#[test]
fn test_left_associative() {
    let stmt = parse_str("A=8-4-2").unwrap();
    match stmt {
        Statement::Expression(_, Expression::Assign(_, _, expr)) => match *expr {
            Expression::Binary(_, lhs, Operator::Minus, rhs) => {
                assert!(matches!(*lhs, Expression::Binary(_, _, Operator::Minus, _)));
                assert_eq!(*rhs, Expression::Literal(6..7, Literal::Integer(2)));
            }
            _ => panic!(),
        },
        _ => panic!(),
    }
}

#[test]
fn test_equal_in_condition_compares() {
    let stmt = parse_str("IF X=1 THEN 100").unwrap();
    let answer = Statement::If(
        0..2,
        Expression::Binary(
            3..6,
            Box::new(Expression::Identifier(3..4, Ident::Plain("X".into()))),
            Operator::Equal,
            Box::new(Expression::Literal(5..6, Literal::Integer(1))),
        ),
        vec![Statement::Goto(
            12..15,
            Expression::Literal(12..15, Literal::Integer(100)),
        )],
    );
    assert_eq!(stmt, answer);
}

#[test]
fn test_if_without_then() {
    match parse_str("IF A>1 PRINT A:END").unwrap() {
        Statement::If(_, _, then) => {
            assert_eq!(then.len(), 2);
            assert!(matches!(then[1], Statement::End(..)));
        }
        _ => panic!(),
    }
}

#[test]
fn test_for_default_step() {
    let answer = Statement::For(
        0..3,
        Ident::Plain("I".into()),
        Expression::Literal(6..7, Literal::Integer(1)),
        Expression::Literal(11..12, Literal::Integer(3)),
        Expression::Literal(12..12, Literal::Integer(1)),
    );
    assert_eq!(parse_str("FOR I=1 TO 3"), Some(answer));
}

#[test]
fn test_print_items() {
    match parse_str("PRINT A;B,").unwrap() {
        Statement::Print(_, None, items, newline) => {
            assert_eq!(items.len(), 3);
            assert!(matches!(items[2], PrintItem::Comma(..)));
            assert!(!newline);
        }
        _ => panic!(),
    }
    match parse_str("PRINT AT 64,\"X\"").unwrap() {
        Statement::Print(_, Some(_), items, newline) => {
            assert_eq!(items.len(), 1);
            assert!(newline);
        }
        _ => panic!(),
    }
}

#[test]
fn test_on_gosub() {
    match parse_str("ON X GOSUB 100,200").unwrap() {
        Statement::On(_, _, locations, is_gosub) => {
            assert_eq!(locations.len(), 2);
            assert!(is_gosub);
        }
        _ => panic!(),
    }
}

#[test]
fn test_data_elements() {
    let answer = Statement::Data(
        0..4,
        vec![
            Literal::Integer(1),
            Literal::String("HELLO".into()),
            Literal::String("A, B".into()),
        ],
    );
    assert_eq!(parse_str("DATA 1,HELLO,\"A, B\""), Some(answer));
}

#[test]
fn test_functions() {
    assert!(parse_str("A=ABS(-1)+INT(2.5)+RND(0)+MEM").is_some());
    assert!(parse_str("PRINT TAB(5);\"X\"").is_some());
    let e = parse_err("A=ABS(1,2)");
    assert_eq!(e.code(), ErrorCode::SyntaxError);
}

#[test]
fn test_errors() {
    assert_eq!(parse_err("PRINT (").code(), ErrorCode::SyntaxError);
    assert_eq!(parse_err("X").code(), ErrorCode::SyntaxError);
    assert_eq!(parse_err("THEN").code(), ErrorCode::SyntaxError);
    assert_eq!(parse_err("FOR A(1)=1 TO 2").code(), ErrorCode::SyntaxError);
    let e = parse_err("10 GOTO 10 20");
    assert_eq!(e.line_number(), Some(10));
    assert_eq!(e.column(), 11..13);
}

#[test]
fn test_line_number_range() {
    let tokens = lex("32767 END").unwrap();
    assert_eq!(parse(&tokens).unwrap().0, Some(32767));
    let tokens = lex("32768 END").unwrap();
    assert!(parse(&tokens).is_err());
}
