//! Line-oriented interactive menu over a [`Session`].
//!
//! The console reads from any [`BufRead`] and writes to any [`Write`], so the same loop serves
//! stdin/stdout in the `flora` binary and in-memory buffers in tests. Errors from loading,
//! selecting, sorting or saving are printed and the loop moves on to the next pass; end of input
//! ends the loop.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::error::TableError;
use crate::export::{format_display_row, validate_file_name};
use crate::session::{Action, Session};
use crate::types::SortOrder;

const MENU: &str = "
Menu:
1. Select by LandscapingZone.
2. Select by LocationPlace.
3. Select by LandscapingZone and ProsperityPeriod.
4. Sort the table by LatinName (ascending).
5. Sort the table by LatinName (descending).
6. Exit.

Enter the number of the chosen item: ";

/// What a menu pass decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Why a pass stopped early.
#[derive(Debug)]
enum Interrupt {
    /// The input stream is exhausted.
    EndOfInput,
    /// Reading or writing the console itself failed.
    Console(io::Error),
    /// A table operation failed; reported to the user.
    Table(TableError),
}

impl From<io::Error> for Interrupt {
    fn from(e: io::Error) -> Self {
        Self::Console(e)
    }
}

impl From<TableError> for Interrupt {
    fn from(e: TableError) -> Self {
        Self::Table(e)
    }
}

/// Interactive menu loop.
pub struct Console<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    /// Give back the session (with whatever table the last pass left loaded).
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Run passes until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Only console I/O failures are returned; table errors are printed and the loop continues.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.pass() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(Interrupt::EndOfInput) => return Ok(()),
                Err(Interrupt::Console(e)) => return Err(e),
                Err(Interrupt::Table(e)) => writeln!(self.output, "\nError: {e}")?,
            }
            if !self.ask_continue()? {
                return Ok(());
            }
        }
    }

    fn pass(&mut self) -> Result<Flow, Interrupt> {
        let path = match self.session.options().input.clone() {
            Some(path) => path,
            None => self.read_path()?,
        };
        self.session.load(&path)?;

        self.prompt(MENU)?;
        let choice = loop {
            match self.read_line()?.trim().parse::<u8>() {
                Ok(n @ 1..=6) => break n,
                _ => self.prompt("\nNo such menu item. Try again: ")?,
            }
        };

        let action = match choice {
            1 => Action::SelectByLandscapingZone(self.read_filter_value(None)?),
            2 => Action::SelectByLocationPlace(self.read_filter_value(None)?),
            3 => Action::SelectByZoneAndPeriod {
                zone: self.read_filter_value(Some("LandscapingZone"))?,
                period: self.read_filter_value(Some("ProsperityPeriod"))?,
            },
            4 => Action::Sort(SortOrder::Ascending),
            5 => Action::Sort(SortOrder::Descending),
            _ => return Ok(Flow::Exit),
        };

        let outcome = self.session.run(&action)?;
        writeln!(self.output)?;
        for row in outcome.emitted_rows() {
            writeln!(self.output, "{}", format_display_row(row))?;
        }

        if self.ask_save()? {
            let name = self.read_file_name()?;
            let saved = self.session.save(&outcome, &name)?;
            writeln!(self.output, "Saved to {}", saved.display())?;
        }
        Ok(Flow::Continue)
    }

    fn read_path(&mut self) -> Result<PathBuf, Interrupt> {
        self.prompt("Enter the path to the file:\n")?;
        let line = self.read_line()?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Err(TableError::invalid_argument("file path is empty").into());
        }
        Ok(PathBuf::from(trimmed))
    }

    fn read_filter_value(&mut self, column: Option<&str>) -> Result<String, Interrupt> {
        match column {
            Some(name) => self.prompt(&format!("\nEnter the value to select by {name}: "))?,
            None => self.prompt("\nEnter the value to select by: ")?,
        }
        loop {
            let value = self.read_line()?;
            if !value.is_empty() {
                return Ok(value);
            }
            self.prompt("\nThe value is empty. Try again: ")?;
        }
    }

    fn ask_save(&mut self) -> Result<bool, Interrupt> {
        self.prompt("\nDo you want to save the result?\nEnter: yes/no\n")?;
        loop {
            match self.read_line()?.trim() {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                _ => self.prompt("Invalid answer. Try again: ")?,
            }
        }
    }

    fn read_file_name(&mut self) -> Result<String, Interrupt> {
        self.prompt("\nEnter the file name: ")?;
        loop {
            let name = self.read_line()?;
            match validate_file_name(&name) {
                Ok(()) => return Ok(name),
                Err(e) => self.prompt(&format!("\n{e}\nTry again: "))?,
            }
        }
    }

    fn ask_continue(&mut self) -> io::Result<bool> {
        self.prompt("\nPress Enter to continue, or type q to quit... ")?;
        match self.read_line() {
            Ok(line) => Ok(!matches!(
                line.trim().to_ascii_lowercase().as_str(),
                "q" | "quit" | "exit"
            )),
            Err(Interrupt::Console(e)) => Err(e),
            Err(_) => Ok(false),
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    fn read_line(&mut self) -> Result<String, Interrupt> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(Interrupt::EndOfInput);
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionOptions;

    fn run_console(session: Session, input: &str) -> String {
        let mut out = Vec::new();
        let mut console = Console::new(session, input.as_bytes(), &mut out);
        console.run().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_path_is_reported_and_loop_continues_until_quit() {
        let out = run_console(Session::default(), "\n\n\nq\n");
        assert_eq!(out.matches("Error: invalid argument: file path is empty").count(), 2);
    }

    #[test]
    fn missing_file_reports_io_error() {
        let session = Session::new(SessionOptions {
            input: Some(PathBuf::from("definitely/not/here.csv")),
            ..Default::default()
        });
        let out = run_console(session, "q\n");
        assert!(out.contains("Error: io error"));
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let out = run_console(Session::default(), "");
        assert!(out.starts_with("Enter the path to the file:"));
    }
}
