use super::*;
use crate::error;
use crate::lang::ast::{Expression, PrintItem, Statement, Variable};
use crate::lang::token::{Literal, Operator};
use crate::lang::{Column, Ident, Line, MAX_LINE_NUMBER};
use log::{debug, trace};
use std::collections::VecDeque;
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime
///
/// Lines typed without a number run at once; numbered lines are stored in
/// the program. `execute` runs a bounded slice of statements and returns
/// the next [`Event`] for the host.
pub struct Runtime {
    program: Program,
    direct: Option<Rc<Line>>,
    env: Environment,
    state: State,
    events: VecDeque<Event>,
    list: Option<u16>,
    input: Option<Input>,
    cont: Option<Continuation>,
    queued: VecDeque<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Idle,
    Running,
    Terminated,
}

/// How a statement hands control back to the execution loop.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Flow {
    Continue,
    JumpTo(u16),
    JumpToSuccessorOf(Address),
    Resume(Address),
    SkipLine,
    Wait,
    Terminate,
}

#[derive(Debug)]
struct ForFrame {
    ident: Ident,
    end: Val,
    step: Val,
    address: Address,
}

/// Where `CONT` picks up. Addresses without a line number, here and on the
/// GOSUB stack, belong to the direct line that was running at the time.
#[derive(Debug)]
struct Continuation {
    address: Address,
    direct: Option<Rc<Line>>,
}

/// A suspended `INPUT` waiting for its answer.
#[derive(Debug)]
struct Input {
    address: Address,
    prompt: String,
    vars: VecDeque<Variable>,
}

struct Environment {
    vars: Var,
    for_stack: Stack<ForFrame>,
    gosub_stack: Stack<Address>,
    pc: Address,
    data: Vec<Literal>,
    data_pos: usize,
    data_stale: bool,
    print_col: usize,
}

impl Default for Environment {
    fn default() -> Environment {
        Environment {
            vars: Var::new(),
            for_stack: Stack::new("FOR STACK", MAX_FOR_DEPTH),
            gosub_stack: Stack::new("GOSUB STACK", MAX_GOSUB_DEPTH),
            pc: Address {
                line: None,
                index: 0,
            },
            data: vec![],
            data_pos: 0,
            data_stale: true,
            print_col: 0,
        }
    }
}

impl Environment {
    /// Everything `RUN` starts fresh with. The cursor column survives.
    fn reset(&mut self) {
        self.vars.clear();
        self.for_stack.clear();
        self.gosub_stack.clear();
        self.data_pos = 0;
        self.data_stale = true;
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime {
            program: Program::new(),
            direct: None,
            env: Environment::default(),
            state: State::Idle,
            events: VecDeque::new(),
            list: None,
            input: None,
            cont: None,
            queued: VecDeque::new(),
        }
    }
}

impl Runtime {
    /// Accepts a line from the console. Returns false for lines not worth
    /// keeping in history. Lines arriving while another one runs wait
    /// their turn.
    pub fn enter(&mut self, s: &str) -> bool {
        if self.input.is_some() {
            self.answer(s);
            return true;
        }
        if s.trim().is_empty() {
            return false;
        }
        if self.state == State::Running {
            self.queued.push_back(s.to_string());
            return true;
        }
        let line = match Line::new(s) {
            Ok(line) => line,
            Err(error) => {
                debug!("rejected line: {:?}", error);
                self.events.push_back(Event::Error(error));
                return true;
            }
        };
        match line.number() {
            Some(number) => {
                if line.is_empty() {
                    debug!("delete line {}", number);
                    self.program.remove(number);
                } else {
                    debug!("store line {}", number);
                    if let Err(error) = self.program.insert(line) {
                        self.events.push_back(Event::Error(error));
                    }
                }
                self.program_changed();
            }
            None => {
                if line.is_empty() {
                    return false;
                }
                self.direct = Some(Rc::new(line));
                self.env.pc = Address {
                    line: None,
                    index: 0,
                };
                self.state = State::Running;
            }
        }
        true
    }

    /// Ctrl-C. Stops a listing, an `INPUT`, or a running program.
    pub fn interrupt(&mut self) {
        self.list = None;
        self.queued.clear();
        let waiting = self.input.take();
        if self.state == State::Running {
            let pc = match waiting {
                Some(input) => input.address,
                None => self.env.pc,
            };
            self.break_at(pc);
            self.save_continuation(pc);
            self.state = State::Terminated;
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Replaces the program, as `LOAD` does.
    pub fn set_program(&mut self, program: Program) {
        debug!("program replaced with {} lines", program.len());
        self.program = program;
        self.env.reset();
        self.program_changed();
    }

    /// Adds lines to the program, as `MERGE` does.
    pub fn merge_program(&mut self, program: Program) {
        debug!("merging {} lines", program.len());
        self.program.merge(program);
        self.program_changed();
    }

    fn program_changed(&mut self) {
        self.cont = None;
        self.env.data_stale = true;
    }

    /// Runs at most `cycles` statements and returns what happened.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if let Some(event) = self.pending_event() {
                return event;
            }
            if self.input.is_some() {
                break;
            }
            if self.state != State::Running {
                match self.queued.pop_front() {
                    Some(s) => {
                        self.enter(&s);
                        continue;
                    }
                    None => break,
                }
            }
            if let Err(error) = self.step() {
                self.report(error);
            }
        }
        if let Some(event) = self.pending_event() {
            return event;
        }
        if let Some(event) = self.events.pop_front() {
            return event;
        }
        if let Some(input) = &self.input {
            return Event::Input(input.prompt.clone());
        }
        match self.state {
            State::Running => Event::Running,
            _ => Event::Stopped,
        }
    }

    /// Print events collect until something else happens.
    fn pending_event(&mut self) -> Option<Event> {
        if self.events.len() > 1 || !matches!(self.events.front(), Some(Event::Print(_)) | None)
        {
            return self.events.pop_front();
        }
        if let Some(from) = self.list {
            if let Some(event) = self.events.pop_front() {
                return Some(event);
            }
            return match self.program.list(from).next() {
                Some((number, text)) => {
                    self.list = number.checked_add(1);
                    Some(Event::List(text))
                }
                None => {
                    self.list = None;
                    None
                }
            };
        }
        if self.state != State::Running || self.input.is_some() {
            return self.events.pop_front();
        }
        None
    }

    fn report(&mut self, error: Error) {
        let pc = self.env.pc;
        let mut error = error.in_line_number(pc.line);
        if let Some(line) = self.line(pc.line) {
            error = error.in_source(line.source());
        }
        debug!("{:?}", error);
        if self.env.print_col > 0 {
            self.output("\n");
        }
        self.events.push_back(Event::Error(error));
        self.input = None;
        self.list = None;
        self.cont = None;
        self.state = State::Terminated;
    }

    fn line(&self, number: Option<u16>) -> Option<Rc<Line>> {
        match number {
            Some(number) => self.program.get(number),
            None => self.direct.clone(),
        }
    }

    fn output(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        match s.rfind('\n') {
            Some(idx) => self.env.print_col = s[idx + 1..].chars().count(),
            None => self.env.print_col += s.chars().count(),
        }
        if let Some(Event::Print(p)) = self.events.back_mut() {
            p.push_str(s);
        } else {
            self.events.push_back(Event::Print(s.to_string()));
        }
    }

    fn break_at(&mut self, pc: Address) {
        let mut s = String::new();
        if self.env.print_col > 0 {
            s.push('\n');
        }
        match pc.line {
            Some(number) => s.push_str(&format!("BREAK AT {}\n", number)),
            None => s.push_str("BREAK\n"),
        }
        self.output(&s);
    }

    fn step(&mut self) -> Result<()> {
        let pc = self.env.pc;
        let line = match self.line(pc.line) {
            Some(line) => line,
            None => return self.next_line(),
        };
        let statement = match line.statement(pc.index) {
            Some(statement) => statement,
            None => return self.next_line(),
        };
        let flow = self
            .statement(statement, pc)
            .map_err(|e| e.in_column(&statement.column()))?;
        self.apply(flow)
    }

    /// Moves to the first statement of the line after the current one.
    fn next_line(&mut self) -> Result<()> {
        match self.env.pc.line {
            None => {
                self.state = State::Idle;
            }
            Some(number) => match self.program.successor(number) {
                Some(next) => {
                    self.env.pc = Address {
                        line: Some(next),
                        index: 0,
                    }
                }
                None => {
                    debug!("end of program");
                    self.cont = None;
                    self.state = State::Terminated;
                }
            },
        }
        Ok(())
    }

    fn apply(&mut self, flow: Flow) -> Result<()> {
        match flow {
            Flow::Continue => self.env.pc = self.env.pc.successor(),
            Flow::JumpTo(number) => {
                if self.program.get(number).is_none() {
                    return Err(error!(UndefinedLine; &number.to_string()));
                }
                trace!("jump to {}", number);
                self.env.pc = Address {
                    line: Some(number),
                    index: 0,
                };
            }
            Flow::JumpToSuccessorOf(address) => {
                trace!("jump after {:?}", address);
                self.env.pc = address.successor();
            }
            Flow::Resume(address) => {
                trace!("resume at {:?}", address);
                self.env.pc = address;
                self.state = State::Running;
            }
            Flow::SkipLine => return self.next_line(),
            Flow::Wait => {}
            Flow::Terminate => {
                self.state = State::Terminated;
            }
        }
        Ok(())
    }

    fn statement(&mut self, statement: &Statement, pc: Address) -> Result<Flow> {
        use Statement::*;
        match statement {
            Cls(_) => {
                self.events.push_back(Event::Cls);
                self.env.print_col = 0;
                Ok(Flow::Continue)
            }
            Cont(_) => self.r#cont(),
            Data(..) | Rem(..) => Ok(Flow::Continue),
            Delete(_, number) => {
                debug!("delete line {}", number);
                self.program.remove(*number);
                self.program_changed();
                Ok(Flow::Continue)
            }
            End(_) => {
                self.cont = None;
                Ok(Flow::Terminate)
            }
            Expression(_, expr) => {
                self.eval(expr)?;
                Ok(Flow::Continue)
            }
            For(_, ident, from, to, step) => self.r#for(ident, from, to, step, pc),
            Gosub(_, expr) => {
                let number = self.line_number(expr)?;
                self.env.gosub_stack.push(pc)?;
                Ok(Flow::JumpTo(number))
            }
            Goto(_, expr) => Ok(Flow::JumpTo(self.line_number(expr)?)),
            If(_, predicate, _) => {
                if self.eval(predicate)?.is_true()? {
                    Ok(Flow::Continue)
                } else {
                    Ok(Flow::SkipLine)
                }
            }
            Input(_, items, _) => self.r#input(items, pc),
            Let(_, var, expr) => {
                let value = self.eval(expr)?;
                self.assign(var, value)?;
                Ok(Flow::Continue)
            }
            List(_, from) => {
                self.list = Some(from.unwrap_or(0));
                Ok(Flow::Continue)
            }
            Load(_, path) => {
                self.events.push_back(Event::Load(path.to_string()));
                self.cont = None;
                Ok(Flow::Terminate)
            }
            Merge(_, path) => {
                self.events.push_back(Event::Merge(path.to_string()));
                self.cont = None;
                Ok(Flow::Terminate)
            }
            New(_) => {
                debug!("new");
                self.program.clear();
                self.env.reset();
                self.program_changed();
                Ok(Flow::Terminate)
            }
            Next(_, ident) => self.r#next(ident.as_ref()),
            On(_, selector, locations, is_gosub) => {
                self.r#on(selector, locations, *is_gosub, pc)
            }
            Print(_, at, items, newline) => self.r#print(at.as_ref(), items, *newline),
            Read(_, vars) => self.r#read(vars),
            Restore(_) => {
                self.env.data_pos = 0;
                Ok(Flow::Continue)
            }
            Return(_) => match self.env.gosub_stack.pop() {
                Some(address) => Ok(Flow::JumpToSuccessorOf(address)),
                None => Err(error!(ReturnWithoutGosub)),
            },
            Run(_, from) => self.r#run(*from),
            Save(_, path) => {
                self.events.push_back(Event::Save(path.to_string()));
                Ok(Flow::Continue)
            }
            Stop(_) => {
                self.break_at(pc);
                self.save_continuation(pc.successor());
                Ok(Flow::Terminate)
            }
        }
    }

    fn save_continuation(&mut self, address: Address) {
        self.cont = Some(Continuation {
            address,
            direct: self.direct.clone(),
        });
    }

    fn r#cont(&mut self) -> Result<Flow> {
        match self.cont.take() {
            Some(cont) => {
                self.direct = cont.direct;
                Ok(Flow::Resume(cont.address))
            }
            None => Err(error!(CantContinue)),
        }
    }

    fn r#run(&mut self, from: Option<u16>) -> Result<Flow> {
        debug!("run {:?}", from);
        self.env.reset();
        self.cont = None;
        match from.or_else(|| self.program.first()) {
            Some(number) => Ok(Flow::JumpTo(number)),
            None => Ok(Flow::Terminate),
        }
    }

    fn r#for(
        &mut self,
        ident: &Ident,
        from: &Expression,
        to: &Expression,
        step: &Expression,
        pc: Address,
    ) -> Result<Flow> {
        let from = self.eval_number(from)?;
        let end = self.eval_number(to)?;
        let step = self.eval_number(step)?;
        self.env.vars.store(ident, from)?;
        if let Some(pos) = self.env.for_stack.rposition(|f| &f.ident == ident) {
            self.env.for_stack.truncate(pos);
        }
        self.env.for_stack.push(ForFrame {
            ident: ident.clone(),
            end,
            step,
            address: pc,
        })?;
        Ok(Flow::Continue)
    }

    fn r#next(&mut self, ident: Option<&Ident>) -> Result<Flow> {
        let pos = match ident {
            None => self.env.for_stack.len().checked_sub(1),
            Some(ident) => self.env.for_stack.rposition(|f| &f.ident == ident),
        };
        let pos = match pos {
            Some(pos) => pos,
            None => return Err(error!(NextWithoutFor)),
        };
        self.env.for_stack.truncate(pos + 1);
        let (ident, end, step, address) = match self.env.for_stack.last() {
            Some(f) => (f.ident.clone(), f.end.clone(), f.step.clone(), f.address),
            None => return Err(error!(NextWithoutFor)),
        };
        let value = Operation::sum(self.env.vars.fetch(&ident), step.clone())?;
        self.env.vars.store(&ident, value.clone())?;
        let descending = f32::try_from(step)? < 0.0;
        let op = if descending {
            Operator::GreaterEqual
        } else {
            Operator::LessEqual
        };
        if Operation::binary(op, value, end)?.is_true()? {
            Ok(Flow::JumpToSuccessorOf(address))
        } else {
            self.env.for_stack.pop();
            Ok(Flow::Continue)
        }
    }

    fn r#on(
        &mut self,
        selector: &Expression,
        locations: &[Expression],
        is_gosub: bool,
        pc: Address,
    ) -> Result<Flow> {
        let n = i32::try_from(self.eval(selector)?).map_err(|e| e.in_column(&selector.column()))?;
        if n < 0 {
            return Err(error!(IllegalFunctionCall, ..&selector.column()));
        }
        if n == 0 || n as usize > locations.len() {
            return Ok(Flow::Continue);
        }
        let number = self.line_number(&locations[n as usize - 1])?;
        if is_gosub {
            self.env.gosub_stack.push(pc)?;
        }
        Ok(Flow::JumpTo(number))
    }

    fn r#print(
        &mut self,
        at: Option<&Expression>,
        items: &[PrintItem],
        newline: bool,
    ) -> Result<Flow> {
        if let Some(expr) = at {
            let position = i32::try_from(self.eval(expr)?)?;
            if position < 0 || position as usize >= SCREEN_COLUMNS * SCREEN_ROWS {
                return Err(error!(IllegalFunctionCall, ..&expr.column()));
            }
            let position = position as usize;
            let (row, col) = (position / SCREEN_COLUMNS, position % SCREEN_COLUMNS);
            self.events.push_back(Event::Locate(row, col));
            self.env.print_col = col;
        }
        for item in items {
            match item {
                PrintItem::Comma(_) => {
                    let next = (self.env.print_col / PRINT_ZONE + 1) * PRINT_ZONE;
                    if next >= SCREEN_COLUMNS {
                        self.output("\n");
                    } else {
                        let pad = " ".repeat(next - self.env.print_col);
                        self.output(&pad);
                    }
                }
                PrintItem::Expression(Expression::Call(col, name, args))
                    if &**name == "TAB" =>
                {
                    let tab = self.tab(col, args)?;
                    if tab > self.env.print_col {
                        let pad = " ".repeat(tab - self.env.print_col);
                        self.output(&pad);
                    }
                }
                PrintItem::Expression(expr) => {
                    let s = self.eval(expr)?.to_string();
                    self.output(&s);
                }
            }
        }
        if newline {
            self.output("\n");
        }
        Ok(Flow::Continue)
    }

    fn tab(&mut self, col: &Column, args: &[Expression]) -> Result<usize> {
        let arg = match args.first() {
            Some(arg) => arg,
            None => return Err(error!(SyntaxError, ..col)),
        };
        let n = i32::try_from(self.eval(arg)?).map_err(|e| e.in_column(col))?;
        if n < 0 {
            return Err(error!(IllegalFunctionCall, ..col));
        }
        Ok(n as usize % SCREEN_COLUMNS)
    }

    fn r#input(&mut self, items: &[Expression], pc: Address) -> Result<Flow> {
        let mut prompt = String::new();
        let mut vars = VecDeque::new();
        for item in items {
            match item {
                Expression::Literal(_, Literal::String(s)) => prompt.push_str(s),
                _ => match item.as_variable() {
                    Some(var) => vars.push_back(var),
                    None => return Err(error!(SyntaxError, ..&item.column())),
                },
            }
        }
        prompt.push_str("? ");
        self.request_input(Input {
            address: pc,
            prompt,
            vars,
        });
        Ok(Flow::Wait)
    }

    fn request_input(&mut self, input: Input) {
        self.events.push_back(Event::Input(input.prompt.clone()));
        self.input = Some(input);
    }

    /// Assigns an answer to the variables a suspended `INPUT` is waiting on.
    fn answer(&mut self, s: &str) {
        let mut input = match self.input.take() {
            Some(input) => input,
            None => return,
        };
        self.env.print_col = 0;
        let fields: Vec<&str> = if s.trim().is_empty() {
            vec![]
        } else {
            s.split(',').collect()
        };
        for field in fields {
            let var = match input.vars.pop_front() {
                Some(var) => var,
                None => break,
            };
            let value = match input_value(field, var.ident()) {
                Some(value) => value,
                None => {
                    input.vars.push_front(var);
                    self.output("WHAT?\n");
                    input.prompt = "? ".to_string();
                    self.request_input(input);
                    return;
                }
            };
            if let Err(error) = self.assign(&var, value) {
                self.env.pc = input.address;
                self.report(error.in_column(&var.column()));
                return;
            }
        }
        if input.vars.is_empty() {
            self.env.pc = input.address.successor();
        } else {
            input.prompt = "?? ".to_string();
            self.request_input(input);
        }
    }

    fn r#read(&mut self, vars: &[Variable]) -> Result<Flow> {
        if self.env.data_stale {
            self.env.data = self.program.data();
            self.env.data_stale = false;
            if self.env.data_pos > self.env.data.len() {
                self.env.data_pos = 0;
            }
        }
        for var in vars {
            let value = match self.env.data.get(self.env.data_pos) {
                Some(literal) => Val::from(literal),
                None => return Err(error!(OutOfData, ..&var.column())),
            };
            self.env.data_pos += 1;
            self.assign(var, value)
                .map_err(|e| e.in_column(&var.column()))?;
        }
        Ok(Flow::Continue)
    }

    fn assign(&mut self, var: &Variable, value: Val) -> Result<()> {
        match var {
            Variable::Unary(col, ident) => self
                .env
                .vars
                .store(ident, value)
                .map_err(|e| e.in_column(col)),
            Variable::Array(col, ident, index) => {
                let index = self.eval(index)?;
                self.env
                    .vars
                    .store_array(ident, index, value)
                    .map_err(|e| e.in_column(col))
            }
        }
    }

    fn line_number(&mut self, expr: &Expression) -> Result<u16> {
        let n = i32::try_from(self.eval(expr)?).map_err(|e| e.in_column(&expr.column()))?;
        if n < 0 || n > i32::from(MAX_LINE_NUMBER) {
            return Err(error!(UndefinedLine, ..&expr.column(); &n.to_string()));
        }
        Ok(n as u16)
    }

    fn eval_number(&mut self, expr: &Expression) -> Result<Val> {
        let val = self.eval(expr)?;
        if val.is_string() {
            return Err(error!(TypeMismatch, ..&expr.column()));
        }
        Ok(val)
    }

    fn eval(&mut self, expr: &Expression) -> Result<Val> {
        match expr {
            Expression::Literal(_, literal) => Ok(Val::from(literal)),
            Expression::Identifier(_, ident) => Ok(self.env.vars.fetch(ident)),
            Expression::Array(col, ident, index) => {
                let index = self.eval(index)?;
                self.env
                    .vars
                    .fetch_array(ident, index)
                    .map_err(|e| e.in_column(col))
            }
            Expression::Assign(_, var, value) => {
                let value = self.eval(value)?;
                self.assign(var, value.clone())?;
                Ok(value)
            }
            Expression::Binary(col, lhs, op, rhs) => {
                let lhs = self.eval(lhs)?;
                let rhs = self.eval(rhs)?;
                Operation::binary(*op, lhs, rhs).map_err(|e| e.in_column(col))
            }
            Expression::Unary(col, op, expr) => {
                let val = self.eval(expr)?;
                match op {
                    Operator::Minus => Operation::negate(val).map_err(|e| e.in_column(col)),
                    _ if val.is_string() => Err(error!(TypeMismatch, ..col)),
                    _ => Ok(val),
                }
            }
            Expression::Grouping(_, expr) => self.eval(expr),
            Expression::Call(col, name, args) => self.call(col, name, args),
        }
    }

    fn call(&mut self, col: &Column, name: &str, args: &[Expression]) -> Result<Val> {
        let mut vals = Vec::with_capacity(args.len());
        for arg in args {
            vals.push(self.eval(arg)?);
        }
        let arg = vals.pop();
        let result = match (name, arg) {
            ("ABS", Some(val)) => Function::abs(val),
            ("INT", Some(val)) => Function::int(val),
            ("RND", Some(val)) => Function::rnd(val),
            ("MEM", None) => Ok(Function::mem(
                MEMORY_SIZE.saturating_sub(self.program.size()),
            )),
            ("TAB", _) => Err(error!(IllegalFunctionCall; "TAB OUTSIDE PRINT")),
            _ => Err(error!(InternalError; "UNKNOWN FUNCTION")),
        };
        result.map_err(|e| e.in_column(col))
    }
}

/// A console answer as a value for `ident`.
fn input_value(field: &str, ident: &Ident) -> Option<Val> {
    let field = field.trim();
    if ident.is_string() {
        let field = field
            .strip_prefix('"')
            .and_then(|f| f.strip_suffix('"'))
            .unwrap_or(field);
        return Some(Val::String(field.into()));
    }
    if field.is_empty()
        || !field
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'E' | 'e'))
    {
        return None;
    }
    if let Ok(n) = field.parse::<i32>() {
        return Some(Val::Integer(n));
    }
    match field.parse::<f32>() {
        Ok(n) if n.is_finite() => Some(Val::Float(n)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_value() {
        let a = Ident::new("A");
        let s = Ident::new("S$");
        assert_eq!(input_value(" 12 ", &a), Some(Val::Integer(12)));
        assert_eq!(input_value("-1.5", &a), Some(Val::Float(-1.5)));
        assert_eq!(input_value("1E3", &a), Some(Val::Float(1000.0)));
        assert_eq!(input_value("X", &a), None);
        assert_eq!(input_value("", &a), None);
        assert_eq!(input_value(" HELLO ", &s), Some(Val::String("HELLO".into())));
        assert_eq!(input_value("\"A B\"", &s), Some(Val::String("A B".into())));
    }
}
