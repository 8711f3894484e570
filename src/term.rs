use crate::TermInt;
use std::{io::{Stdout, Write, stdout}, time::Instant};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        self.set_raw_mode(true)?;
        self.set_cursor_visibility(false)?;
        self.set_cursor_blink(false)
    }

    /// Undoes `setup`, including a partial one. Every step runs even when an
    /// earlier one fails; the first error is returned.
    pub fn restore(&mut self) -> crossterm::Result<()> {
        let steps = vec![
            self.set_raw_mode(false),
            self.set_cursor_visibility(true),
            self.set_cursor_blink(true),
            execute!(self.stdout, LeaveAlternateScreen),
        ];

        first_error(steps)
    }

    pub fn get_terminal_size(&self) -> crossterm::Result<(TermInt, TermInt)> {
        terminal::size()
    }

    pub fn read_key_blocking(&self) -> crossterm::Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    /// Waits for a key press until `deadline`. Returns `None` once the
    /// deadline passes; other terminal events are swallowed.
    pub fn read_key_until(&self, deadline: Instant) -> crossterm::Result<Option<KeyEvent>> {
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());

            if !poll(timeout)? {
                return Ok(None);
            }

            if let Event::Key(ev) = read()? {
                return Ok(Some(ev));
            }
        }
    }

    /// Prints `lines` from the top left corner, one per terminal row.
    pub fn draw_lines(&mut self, lines: &[String]) -> crossterm::Result<()> {
        for (y, line) in lines.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as TermInt), style::Print(line))?;
        }

        self.flush()
    }

    /// Boxed message centered on `area`, which is measured from the top left.
    pub fn show_message(&mut self, area: (TermInt, TermInt), lines: &[&str]) -> crossterm::Result<()> {
        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as TermInt;
        let center = (area.0 / 2, area.1 / 2);
        let top_left = (
            center.0.saturating_sub(msg_width / 2),
            center.1.saturating_sub(msg_height / 2),
        );

        // Print the top and bottom empty lines
        let empty = " ".repeat(msg_width as usize);
        for y in [top_left.1, top_left.1 + msg_height - 1].iter() {
            queue!(self.stdout, cursor::MoveTo(top_left.0, *y), style::Print(&empty))?;
        }

        // Print the message lines
        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            queue!(self.stdout, cursor::MoveTo(top_left.0, y), style::Print(padded_line))?;
        }

        self.flush()
    }

    pub fn clear(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))
    }

    pub fn flush(&mut self) -> crossterm::Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn set_raw_mode(&self, option: bool) -> crossterm::Result<()> {
        if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        }
    }

    fn set_cursor_blink(&mut self, option: bool) -> crossterm::Result<()> {
        if option {
            execute!(self.stdout, cursor::EnableBlinking)
        } else {
            execute!(self.stdout, cursor::DisableBlinking)
        }
    }

    fn set_cursor_visibility(&mut self, option: bool) -> crossterm::Result<()> {
        if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        }
    }
}

fn first_error(steps: Vec<crossterm::Result<()>>) -> crossterm::Result<()> {
    steps.into_iter().find(|step| step.is_err()).unwrap_or(Ok(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::ErrorKind;
    use std::io;

    fn failed(msg: &str) -> crossterm::Result<()> {
        Err(ErrorKind::IoError(io::Error::new(io::ErrorKind::Other, msg.to_string())))
    }

    #[test]
    fn first_error_is_ok_when_every_step_is() {
        assert!(first_error(vec![Ok(()), Ok(()), Ok(())]).is_ok());
    }

    #[test]
    fn first_error_keeps_earliest_failure() {
        let res = first_error(vec![Ok(()), failed("raw mode"), Ok(()), failed("leave screen")]);

        match res {
            Err(ErrorKind::IoError(err)) => assert_eq!(err.to_string(), "raw mode"),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
