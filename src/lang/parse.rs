use super::{ast::*, token::*, Column, Error, Ident, LineNumber, MaxValue};

type Result<T> = std::result::Result<T, Error>;

/// Parse the tokens of one line into its line number and statements.
pub fn parse(tokens: &[Token]) -> Result<(LineNumber, Vec<Statement>)> {
    let mut parse = Parser {
        tokens,
        index: 0,
        col: 0..0,
    };
    let line_number = parse.line_number()?;
    match parse.statements() {
        Ok(statements) => Ok((line_number, statements)),
        Err(e) => Err(e.in_column(&parse.col).in_line_number(line_number)),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    index: usize,
    col: Column,
}

impl<'a> Parser<'a> {
    fn line_number(&mut self) -> Result<LineNumber> {
        let token = match self.tokens.first() {
            Some(token) if token.kind == TokenKind::Number => token,
            _ => return Ok(None),
        };
        match token.literal {
            Some(Literal::Integer(n)) if n >= 0 && n <= LineNumber::max_value() as i32 => {
                self.next();
                Ok(Some(n as u16))
            }
            Some(Literal::Integer(_)) => {
                Err(error!(Overflow, ..&token.column(); "INVALID LINE NUMBER"))
            }
            _ => Err(error!(SyntaxError, ..&token.column(); "INVALID LINE NUMBER")),
        }
    }

    fn statements(&mut self) -> Result<Vec<Statement>> {
        let mut r: Vec<Statement> = vec![];
        loop {
            match self.peek().kind {
                TokenKind::EndOfLine => return Ok(r),
                TokenKind::Colon => {
                    self.next();
                    continue;
                }
                _ => {}
            }
            let statement = self.statement()?;
            let is_if = matches!(statement, Statement::If(..));
            r.push(statement);
            if is_if {
                return Ok(r);
            }
            self.expect_separator()?;
        }
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn peek(&self) -> &'a Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.index.min(last)]
    }

    fn next(&mut self) -> &'a Token {
        let token = self.peek();
        if token.kind != TokenKind::EndOfLine {
            self.index += 1;
        }
        self.col = token.column();
        token
    }

    fn peek_kind(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn statement(&mut self) -> Result<Statement> {
        let token = self.peek();
        match token.kind {
            TokenKind::Ident => {
                let expr = self.assignment()?;
                Ok(Statement::Expression(expr.column(), expr))
            }
            TokenKind::Word(word) if word.is_statement() => {
                self.next();
                Statement::for_word(self, word)
            }
            _ => Err(error!(SyntaxError, ..&token.column(); "EXPECTED STATEMENT")),
        }
    }

    fn expect_separator(&mut self) -> Result<()> {
        let token = self.peek();
        if token.is_separator() {
            Ok(())
        } else {
            Err(error!(SyntaxError, ..&token.column(); "UNEXPECTED TOKEN"))
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Column> {
        let token = self.peek();
        if token.kind == kind {
            self.next();
            return Ok(token.column());
        }
        let message = match kind {
            TokenKind::Word(Word::To) => "EXPECTED TO",
            TokenKind::Word(_) => "EXPECTED RESERVED WORD",
            TokenKind::Operator(Operator::Equal) => "EXPECTED =",
            TokenKind::Operator(_) => "EXPECTED OPERATOR",
            TokenKind::Number => "EXPECTED NUMBER",
            TokenKind::String => "EXPECTED STRING",
            TokenKind::Ident => "EXPECTED VARIABLE",
            TokenKind::LParen => "EXPECTED LEFT PARENTHESIS",
            TokenKind::RParen => "EXPECTED RIGHT PARENTHESIS",
            TokenKind::Comma => "EXPECTED COMMA",
            TokenKind::Colon | TokenKind::EndOfLine => "EXPECTED END OF STATEMENT",
            TokenKind::Semicolon => "EXPECTED SEMICOLON",
            TokenKind::Remark => "UNEXPECTED TOKEN",
        };
        Err(error!(SyntaxError, ..&token.column(); message))
    }

    /// Assignment is only recognized at the start of a statement.
    fn assignment(&mut self) -> Result<Expression> {
        let var = self.variable()?;
        self.expect(TokenKind::Operator(Operator::Equal))?;
        let value = self.expression()?;
        let column = var.column().start..value.column().end;
        Ok(Expression::Assign(column, var, Box::new(value)))
    }

    fn expression(&mut self) -> Result<Expression> {
        fn parse(this: &mut Parser, precedence: usize) -> Result<Expression> {
            let mut lhs = this.unary()?;
            loop {
                let op = match this.peek().kind {
                    TokenKind::Operator(op) => op,
                    _ => break,
                };
                let op_precedence = Expression::op_precedence(&op);
                if op_precedence < precedence {
                    break;
                }
                this.next();
                let rhs = parse(this, op_precedence + 1)?;
                let column = lhs.column().start..rhs.column().end;
                lhs = Expression::Binary(column, Box::new(lhs), op, Box::new(rhs));
            }
            Ok(lhs)
        }
        parse(self, 0)
    }

    fn unary(&mut self) -> Result<Expression> {
        match self.peek().kind {
            TokenKind::Operator(op @ Operator::Minus) | TokenKind::Operator(op @ Operator::Plus) => {
                let start = self.next().position;
                let expr = self.unary()?;
                let column = start..expr.column().end;
                Ok(Expression::Unary(column, op, Box::new(expr)))
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Expression> {
        let token = self.peek();
        match token.kind {
            TokenKind::Number | TokenKind::String => {
                self.next();
                match &token.literal {
                    Some(literal) => Ok(Expression::Literal(token.column(), literal.clone())),
                    None => Err(error!(InternalError, ..&token.column(); "LITERAL WITHOUT VALUE")),
                }
            }
            TokenKind::LParen => {
                self.next();
                let expr = self.expression()?;
                let close = self.expect(TokenKind::RParen)?;
                Ok(Expression::Grouping(
                    token.position..close.end,
                    Box::new(expr),
                ))
            }
            TokenKind::Ident => match self.variable()? {
                Variable::Unary(col, ident) => Ok(Expression::Identifier(col, ident)),
                Variable::Array(col, ident, index) => Ok(Expression::Array(col, ident, index)),
            },
            TokenKind::Word(word) if word.arity().is_some() => self.call(word),
            _ => Err(error!(SyntaxError, ..&token.column(); "EXPECTED EXPRESSION")),
        }
    }

    fn call(&mut self, word: Word) -> Result<Expression> {
        let start = self.next().position;
        let arity = word.arity().unwrap_or(0);
        let mut args: Vec<Expression> = vec![];
        let mut end = self.column().end;
        if arity > 0 || self.peek_kind(TokenKind::LParen) {
            self.expect(TokenKind::LParen)?;
            if !self.peek_kind(TokenKind::RParen) {
                loop {
                    args.push(self.expression()?);
                    if self.peek_kind(TokenKind::Comma) {
                        self.next();
                        continue;
                    }
                    break;
                }
            }
            end = self.expect(TokenKind::RParen)?.end;
        }
        let column = start..end;
        if args.len() != arity {
            return Err(error!(SyntaxError, ..&column; "WRONG NUMBER OF ARGUMENTS"));
        }
        Ok(Expression::Call(column, word.as_str().into(), args))
    }

    fn variable(&mut self) -> Result<Variable> {
        let token = self.peek();
        if token.kind != TokenKind::Ident {
            return Err(error!(SyntaxError, ..&token.column(); "EXPECTED VARIABLE"));
        }
        self.next();
        let ident = Ident::new(&token.lexeme);
        if self.peek_kind(TokenKind::LParen) {
            self.next();
            let index = self.expression()?;
            let close = self.expect(TokenKind::RParen)?;
            return Ok(Variable::Array(
                token.position..close.end,
                ident,
                Box::new(index),
            ));
        }
        Ok(Variable::Unary(token.column(), ident))
    }

    fn variable_list(&mut self) -> Result<Vec<Variable>> {
        let mut v = vec![self.variable()?];
        while self.peek_kind(TokenKind::Comma) {
            self.next();
            v.push(self.variable()?);
        }
        Ok(v)
    }

    fn line_number_literal(&mut self) -> Result<u16> {
        let token = self.peek();
        if let (TokenKind::Number, Some(Literal::Integer(n))) = (token.kind, &token.literal) {
            if *n >= 0 && *n <= LineNumber::max_value() as i32 {
                self.next();
                return Ok(*n as u16);
            }
        }
        Err(error!(SyntaxError, ..&token.column(); "INVALID LINE NUMBER"))
    }

    fn optional_line_number(&mut self) -> Result<Option<u16>> {
        if self.peek().is_separator() {
            Ok(None)
        } else {
            Ok(Some(self.line_number_literal()?))
        }
    }

    fn path(&mut self) -> Result<std::rc::Rc<str>> {
        let token = self.peek();
        match (&token.kind, &token.literal) {
            (TokenKind::String, Some(Literal::String(s))) => {
                self.next();
                Ok(s.clone())
            }
            _ => Err(error!(SyntaxError, ..&token.column(); "EXPECTED FILE NAME")),
        }
    }
}

impl Expression {
    fn op_precedence(op: &Operator) -> usize {
        use Operator::*;
        match op {
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => 1,
            Plus | Minus => 2,
            Multiply | Divide => 3,
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: Word) -> Result<Statement> {
        let column = parse.column();
        use Word::*;
        match word {
            Cls => Ok(Statement::Cls(column)),
            Cont => Ok(Statement::Cont(column)),
            Data => Self::r#data(parse, column),
            Delete => Ok(Statement::Delete(column, parse.line_number_literal()?)),
            End => Ok(Statement::End(column)),
            For => Self::r#for(parse, column),
            Gosub => Ok(Statement::Gosub(column, parse.expression()?)),
            Goto => Ok(Statement::Goto(column, parse.expression()?)),
            If => Self::r#if(parse, column),
            Input => Self::r#input(parse, column),
            Let => Self::r#let(parse, column),
            List => Ok(Statement::List(column, parse.optional_line_number()?)),
            Load => Ok(Statement::Load(column, parse.path()?)),
            Merge => Ok(Statement::Merge(column, parse.path()?)),
            New => Ok(Statement::New(column)),
            Next => Self::r#next(parse, column),
            On => Self::r#on(parse, column),
            Print => Self::r#print(parse, column),
            Read => Ok(Statement::Read(column, parse.variable_list()?)),
            Rem => Self::r#rem(parse, column),
            Restore => Ok(Statement::Restore(column)),
            Return => Ok(Statement::Return(column)),
            Run => Ok(Statement::Run(column, parse.optional_line_number()?)),
            Save => Ok(Statement::Save(column, parse.path()?)),
            Stop => Ok(Statement::Stop(column)),
            Abs | At | Int | Mem | Rnd | Step | Tab | Then | To => {
                Err(error!(SyntaxError, ..&column; "EXPECTED STATEMENT"))
            }
        }
    }

    fn r#data(parse: &mut Parser, column: Column) -> Result<Statement> {
        let mut v: Vec<Literal> = vec![];
        loop {
            let token = parse.peek();
            match token.kind {
                TokenKind::EndOfLine => return Ok(Statement::Data(column, v)),
                TokenKind::Comma => {}
                TokenKind::Number | TokenKind::String => {
                    if let Some(literal) = &token.literal {
                        v.push(literal.clone());
                    }
                }
                _ => return Err(error!(SyntaxError, ..&token.column(); "EXPECTED LITERAL")),
            }
            parse.next();
        }
    }

    fn r#for(parse: &mut Parser, column: Column) -> Result<Statement> {
        let ident = match parse.variable()? {
            Variable::Unary(_, ident) => ident,
            Variable::Array(col, ..) => {
                return Err(error!(SyntaxError, ..&col; "EXPECTED SIMPLE VARIABLE"))
            }
        };
        parse.expect(TokenKind::Operator(Operator::Equal))?;
        let from = parse.expression()?;
        parse.expect(TokenKind::Word(Word::To))?;
        let to = parse.expression()?;
        let step = if parse.peek().is_word(Word::Step) {
            parse.next();
            parse.expression()?
        } else {
            let end = to.column().end;
            Expression::Literal(end..end, Literal::Integer(1))
        };
        Ok(Statement::For(column, ident, from, to, step))
    }

    fn r#if(parse: &mut Parser, column: Column) -> Result<Statement> {
        let predicate = parse.expression()?;
        if parse.peek().is_word(Word::Then) {
            parse.next();
            if parse.peek_kind(TokenKind::Number) {
                let token = parse.peek();
                let line = parse.line_number_literal()?;
                let goto = Statement::Goto(
                    token.column(),
                    Expression::Literal(token.column(), Literal::Integer(line as i32)),
                );
                parse.expect_separator()?;
                if !parse.peek_kind(TokenKind::EndOfLine) {
                    let mut then = vec![goto];
                    then.append(&mut parse.statements()?);
                    return Ok(Statement::If(column, predicate, then));
                }
                return Ok(Statement::If(column, predicate, vec![goto]));
            }
        }
        let then = parse.statements()?;
        if then.is_empty() {
            let token = parse.peek();
            return Err(error!(SyntaxError, ..&token.column(); "EXPECTED STATEMENT"));
        }
        Ok(Statement::If(column, predicate, then))
    }

    fn r#input(parse: &mut Parser, column: Column) -> Result<Statement> {
        let mut v: Vec<Expression> = vec![];
        let mut linefeed = true;
        let mut has_variable = false;
        loop {
            let token = parse.peek();
            match token.kind {
                TokenKind::Colon | TokenKind::EndOfLine => break,
                TokenKind::Comma | TokenKind::Semicolon => {
                    parse.next();
                    linefeed = false;
                    continue;
                }
                TokenKind::String => v.push(parse.primary()?),
                TokenKind::Ident => {
                    has_variable = true;
                    v.push(parse.primary()?);
                }
                _ => return Err(error!(SyntaxError, ..&token.column(); "EXPECTED VARIABLE")),
            }
            linefeed = true;
        }
        if !has_variable {
            return Err(error!(SyntaxError, ..&column; "EXPECTED VARIABLE"));
        }
        Ok(Statement::Input(column, v, linefeed))
    }

    fn r#let(parse: &mut Parser, column: Column) -> Result<Statement> {
        let var = parse.variable()?;
        parse.expect(TokenKind::Operator(Operator::Equal))?;
        let expr = parse.expression()?;
        Ok(Statement::Let(column, var, expr))
    }

    fn r#next(parse: &mut Parser, column: Column) -> Result<Statement> {
        if parse.peek().is_separator() {
            return Ok(Statement::Next(column, None));
        }
        match parse.variable()? {
            Variable::Unary(_, ident) => Ok(Statement::Next(column, Some(ident))),
            Variable::Array(col, ..) => Err(error!(SyntaxError, ..&col; "EXPECTED SIMPLE VARIABLE")),
        }
    }

    fn r#on(parse: &mut Parser, column: Column) -> Result<Statement> {
        let selector = parse.expression()?;
        let token = parse.peek();
        let is_gosub = match token.kind {
            TokenKind::Word(Word::Goto) => false,
            TokenKind::Word(Word::Gosub) => true,
            _ => return Err(error!(SyntaxError, ..&token.column(); "EXPECTED GOTO OR GOSUB")),
        };
        parse.next();
        let mut locations = vec![parse.expression()?];
        while parse.peek_kind(TokenKind::Comma) {
            parse.next();
            locations.push(parse.expression()?);
        }
        Ok(Statement::On(column, selector, locations, is_gosub))
    }

    fn r#print(parse: &mut Parser, column: Column) -> Result<Statement> {
        let mut at = None;
        if parse.peek().is_word(Word::At) {
            parse.next();
            at = Some(parse.expression()?);
            match parse.peek().kind {
                TokenKind::Comma | TokenKind::Semicolon => {
                    parse.next();
                }
                _ => {}
            }
        }
        let mut v: Vec<PrintItem> = vec![];
        let mut linefeed = true;
        loop {
            let token = parse.peek();
            match token.kind {
                TokenKind::Colon | TokenKind::EndOfLine => break,
                TokenKind::Semicolon => {
                    parse.next();
                    linefeed = false;
                }
                TokenKind::Comma => {
                    parse.next();
                    linefeed = false;
                    v.push(PrintItem::Comma(token.column()));
                }
                _ => {
                    linefeed = true;
                    v.push(PrintItem::Expression(parse.expression()?));
                }
            }
        }
        Ok(Statement::Print(column, at, v, linefeed))
    }

    fn r#rem(parse: &mut Parser, column: Column) -> Result<Statement> {
        let token = parse.peek();
        match (&token.kind, &token.literal) {
            (TokenKind::Remark, Some(Literal::String(s))) => {
                parse.next();
                Ok(Statement::Rem(column, s.clone()))
            }
            _ => Ok(Statement::Rem(column, "".into())),
        }
    }
}
