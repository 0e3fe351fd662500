/*!
## Rust Terminal Module

Everything between the [`Runtime`](crate::mach::Runtime) and a person at a
keyboard: the read-eval-print loop, program files, and the screen.

The loop only talks to a [`Console`], so it can be driven by a real
terminal or by a script.

*/

use crate::lang::Error;
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use log::{debug, info};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod file;
mod log_init;
mod terminal;

pub use file::{load, save};
pub use log_init::init_log;
pub use terminal::Terminal;

/// Statements run between checks for Ctrl-C.
const CYCLES: usize = 5000;

/// `LIST` waits for a key after this many lines.
const LIST_PAGE: usize = 12;

const ESCAPE: char = '\x1b';

/// What the shell needs from a screen and keyboard.
pub trait Console {
    fn write(&mut self, s: &str) -> io::Result<()>;

    fn write_line(&mut self, s: &str) -> io::Result<()> {
        self.write(s)?;
        self.write("\n")
    }

    /// `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Waits for a single key press.
    fn read_key(&mut self) -> io::Result<Option<char>>;

    fn clear_screen(&mut self) -> io::Result<()>;

    fn move_cursor(&mut self, row: usize, col: usize) -> io::Result<()>;

    fn add_history(&mut self, _line: String) {}
}

pub fn main(file: Option<&str>) {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
    }
    let console = match Terminal::new(interrupted.clone()) {
        Ok(console) => console,
        Err(error) => {
            eprintln!("{}", error);
            return;
        }
    };
    let mut shell = Shell::new(console, interrupted);
    if let Err(error) = shell.start(file) {
        eprintln!("{}", error);
    }
}

/// ## Read-eval-print loop
pub struct Shell<C: Console> {
    console: C,
    runtime: Runtime,
    interrupted: Arc<AtomicBool>,
}

impl<C: Console> Shell<C> {
    pub fn new(console: C, interrupted: Arc<AtomicBool>) -> Shell<C> {
        Shell {
            console,
            runtime: Runtime::default(),
            interrupted,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Loads and runs `file` when given, then takes over the console.
    pub fn start(&mut self, file: Option<&str>) -> io::Result<()> {
        if let Some(path) = file {
            match load(path) {
                Ok(program) => {
                    info!("loaded {}", path);
                    self.runtime.set_program(program);
                    self.runtime.enter("RUN");
                }
                Err(error) => self.report(&error)?,
            }
        }
        self.main_loop()
    }

    pub fn main_loop(&mut self) -> io::Result<()> {
        let mut ready = true;
        let mut listed = 0;
        loop {
            if self.interrupted.swap(false, Ordering::SeqCst) {
                self.runtime.interrupt();
            }
            match self.runtime.execute(CYCLES) {
                Event::Stopped => {
                    listed = 0;
                    if ready {
                        self.console.write_line("READY")?;
                        ready = false;
                    }
                    let line = match self.console.read_line(">")? {
                        Some(line) => line,
                        None => break,
                    };
                    if line.trim().eq_ignore_ascii_case("EXIT") {
                        break;
                    }
                    if !is_program_line(&line) && !line.trim().is_empty() {
                        ready = true;
                    }
                    if self.runtime.enter(&line) {
                        self.console.add_history(line);
                    }
                }
                Event::Running => {}
                Event::Print(s) => self.console.write(&s)?,
                Event::Input(prompt) => {
                    let answer = self.console.read_line(&prompt)?;
                    if self.interrupted.swap(false, Ordering::SeqCst) {
                        self.runtime.interrupt();
                        continue;
                    }
                    match answer {
                        Some(answer) => {
                            self.runtime.enter(&answer);
                        }
                        None => self.runtime.interrupt(),
                    }
                }
                Event::Cls => self.console.clear_screen()?,
                Event::Locate(row, col) => self.console.move_cursor(row, col)?,
                Event::List(s) => {
                    self.console.write_line(&s)?;
                    listed += 1;
                    if listed % LIST_PAGE == 0 {
                        match self.console.read_key()? {
                            Some(ESCAPE) | None => self.runtime.interrupt(),
                            Some(_) => {}
                        }
                    }
                }
                Event::Error(error) => self.report(&error)?,
                Event::Load(path) => match load(&path) {
                    Ok(program) => self.runtime.set_program(program),
                    Err(error) => self.report(&error)?,
                },
                Event::Merge(path) => match load(&path) {
                    Ok(program) => self.runtime.merge_program(program),
                    Err(error) => self.report(&error)?,
                },
                Event::Save(path) => {
                    if let Err(error) = save(self.runtime.program(), &path) {
                        self.report(&error)?;
                    }
                }
            }
        }
        debug!("console closed");
        Ok(())
    }

    /// Bold error text, then the offending line with a caret under the column.
    fn report(&mut self, error: &Error) -> io::Result<()> {
        let text = Style::new().bold().paint(error.to_string()).to_string();
        self.console.write_line(&text)?;
        if let Some(source) = error.source() {
            let column = error.column();
            self.console.write_line(source)?;
            if column.end > column.start {
                let caret = format!(
                    "{}{}",
                    " ".repeat(column.start),
                    "^".repeat(column.end - column.start)
                );
                self.console.write_line(&caret)?;
            }
        }
        Ok(())
    }
}

fn is_program_line(s: &str) -> bool {
    s.trim_start().starts_with(|c: char| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct Script {
        lines: VecDeque<String>,
        keys: VecDeque<char>,
        output: String,
    }

    impl Script {
        fn new(lines: &[&str]) -> Script {
            Script {
                lines: lines.iter().map(|s| s.to_string()).collect(),
                ..Script::default()
            }
        }
    }

    impl Console for Script {
        fn write(&mut self, s: &str) -> io::Result<()> {
            self.output.push_str(s);
            Ok(())
        }

        fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
            self.output.push_str(prompt);
            let line = self.lines.pop_front();
            if let Some(line) = &line {
                self.output.push_str(line);
                self.output.push('\n');
            }
            Ok(line)
        }

        fn read_key(&mut self) -> io::Result<Option<char>> {
            Ok(self.keys.pop_front())
        }

        fn clear_screen(&mut self) -> io::Result<()> {
            self.output.push_str("<CLS>");
            Ok(())
        }

        fn move_cursor(&mut self, row: usize, col: usize) -> io::Result<()> {
            self.output.push_str(&format!("<{},{}>", row, col));
            Ok(())
        }
    }

    fn shell(lines: &[&str]) -> Shell<Script> {
        Shell::new(Script::new(lines), Arc::new(AtomicBool::new(false)))
    }

    fn bold(s: &str) -> String {
        Style::new().bold().paint(s).to_string()
    }

    #[test]
    fn test_ready_after_direct_lines_only() {
        let mut sh = shell(&["10 PRINT \"HI\"", "RUN", "EXIT", "PRINT 1"]);
        sh.main_loop().unwrap();
        assert_eq!(
            sh.console().output,
            "READY\n>10 PRINT \"HI\"\n>RUN\nHI\nREADY\n>EXIT\n"
        );
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut sh = shell(&[]);
        sh.main_loop().unwrap();
        assert_eq!(sh.console().output, "READY\n>");
    }

    #[test]
    fn test_error_shows_caret() {
        let mut sh = shell(&["PRINT 1+\"A\""]);
        sh.main_loop().unwrap();
        let expected = format!(
            "READY\n>PRINT 1+\"A\"\n{}\nPRINT 1+\"A\"\n      ^^^^^\nREADY\n>",
            bold("HOW?\nTYPE MISMATCH")
        );
        assert_eq!(sh.console().output, expected);
    }

    #[test]
    fn test_input_round_trip() {
        let mut sh = shell(&["INPUT A:PRINT A*2", "21"]);
        sh.main_loop().unwrap();
        assert_eq!(
            sh.console().output,
            "READY\n>INPUT A:PRINT A*2\n? 21\n 42\nREADY\n>"
        );
    }

    #[test]
    fn test_screen_events() {
        let mut sh = shell(&["CLS:PRINT AT 130,\"X\""]);
        sh.main_loop().unwrap();
        assert_eq!(
            sh.console().output,
            "READY\n>CLS:PRINT AT 130,\"X\"\n<CLS><2,2>X\nREADY\n>"
        );
    }

    #[test]
    fn test_list_pages() {
        let mut lines = vec![
            "1 REM", "2 REM", "3 REM", "4 REM", "5 REM", "6 REM", "7 REM", "8 REM", "9 REM",
            "10 REM", "11 REM", "12 REM", "13 REM",
        ];
        lines.push("LIST");
        let mut sh = shell(&lines);
        sh.console.keys.push_back(ESCAPE);
        sh.main_loop().unwrap();
        let output = &sh.console().output;
        assert!(output.contains("12 REM\nBREAK\n"));
        assert!(!output.contains("12 REM\n13 REM"));
    }

    #[test]
    fn test_load_save_merge() {
        let dir = std::env::temp_dir();
        let first = dir.join("trs80_shell_first.bas");
        let second = dir.join("trs80_shell_second.bas");
        std::fs::write(&second, "20 PRINT \"MERGED\"\n").unwrap();
        let save = format!("SAVE \"{}\"", first.display());
        let load = format!("LOAD \"{}\"", first.display());
        let merge = format!("MERGE \"{}\"", second.display());
        let mut sh = shell(&["10 PRINT \"SAVED\"", &save, "NEW", &load, &merge, "RUN"]);
        sh.main_loop().unwrap();
        assert!(sh.console().output.ends_with(">RUN\nSAVED\nMERGED\nREADY\n>"));
        assert_eq!(sh.runtime().program().len(), 2);
        std::fs::remove_file(first).ok();
        std::fs::remove_file(second).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let mut sh = shell(&["LOAD \"/nonexistent/trs80.bas\""]);
        sh.main_loop().unwrap();
        assert!(sh.console().output.contains("HOW?\nFILE NOT FOUND"));
    }
}
