use super::Console;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use mortal::{Event, Key, PrepareConfig};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// ## Interactive console
///
/// Lines are edited with linefeed. Screen control and single key reads go
/// straight to the terminal through mortal. mortal only moves the cursor
/// relative to where it is, so the position is tracked from the last
/// clear screen.
pub struct Terminal {
    interface: Interface<DefaultTerminal>,
    screen: mortal::Terminal,
    interrupted: Arc<AtomicBool>,
    cursor: Option<(usize, usize)>,
}

impl Terminal {
    pub fn new(interrupted: Arc<AtomicBool>) -> io::Result<Terminal> {
        let interface = Interface::new("TRS-80")?;
        interface.set_report_signal(Signal::Interrupt, true);
        Ok(Terminal {
            interface,
            screen: mortal::Terminal::new()?,
            interrupted,
            cursor: None,
        })
    }
}

/// Cursor position after writing `s` from `(row, col)`.
fn advance((row, col): (usize, usize), s: &str) -> (usize, usize) {
    s.chars().fold((row, col), |(row, col), c| match c {
        '\n' => (row + 1, 0),
        '\r' => (row, 0),
        _ => (row, col + 1),
    })
}

impl Console for Terminal {
    fn write(&mut self, s: &str) -> io::Result<()> {
        self.cursor = self.cursor.map(|at| advance(at, s));
        self.interface.write_fmt(format_args!("{}", s))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.cursor = self.cursor.map(|(row, _)| (row + 1, 0));
        self.interface.set_prompt(prompt)?;
        match self.interface.read_line()? {
            ReadResult::Input(s) => Ok(Some(s)),
            ReadResult::Signal(Signal::Interrupt) => {
                // Ctrl-C is a key while linefeed owns the terminal.
                self.interface.set_buffer("")?;
                self.interface.lock_reader().cancel_read_line()?;
                self.interrupted.store(true, Ordering::SeqCst);
                Ok(Some(String::new()))
            }
            ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
        }
    }

    fn read_key(&mut self) -> io::Result<Option<char>> {
        let state = self.screen.prepare(PrepareConfig::default())?;
        let key = loop {
            match self.screen.read_event(None) {
                Ok(Some(Event::Key(Key::Char(c)))) => break Ok(Some(c)),
                Ok(Some(Event::Key(Key::Enter))) => break Ok(Some('\n')),
                Ok(Some(Event::Key(Key::Escape))) => break Ok(Some(super::ESCAPE)),
                Ok(Some(Event::Key(Key::Ctrl('c')))) => break Ok(None),
                Ok(Some(_)) => continue,
                Ok(None) => break Ok(None),
                Err(error) => break Err(error),
            }
        };
        self.screen.restore(state)?;
        key
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.screen.clear_screen()?;
        self.cursor = Some((0, 0));
        Ok(())
    }

    fn move_cursor(&mut self, row: usize, col: usize) -> io::Result<()> {
        let (at_row, _) = match self.cursor {
            Some(at) => at,
            None => {
                self.clear_screen()?;
                (0, 0)
            }
        };
        self.screen.move_to_first_column()?;
        if row < at_row {
            self.screen.move_up(at_row - row)?;
        } else {
            self.screen.move_down(row - at_row)?;
        }
        self.screen.move_right(col)?;
        self.cursor = Some((row, col));
        Ok(())
    }

    fn add_history(&mut self, line: String) {
        self.interface.add_history_unique(line);
    }
}
