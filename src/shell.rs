//! Line based console front end.
//!
//! Reads menu choices and booking fields from any `BufRead` and renders
//! results to any `Write`, so it runs against stdin/stdout as well as
//! scripted input in tests. End of input ends the session.

use crate::{backend::BookingBackend, error::BookingError};
use std::io::{self, BufRead, Write};
use tracing::debug;

const TIME_FORMAT_HINT: &str =
    "Invalid time format. Please use 'HH:MM [AM/PM] to HH:MM [AM/PM]' format.";

pub struct Shell<T: BookingBackend, R: BufRead, W: Write> {
    backend: T,
    sections: Vec<String>,
    input: R,
    output: W,
}

impl<T: BookingBackend, R: BufRead, W: Write> Shell<T, R, W> {
    pub fn new(backend: T, sections: Vec<String>, input: R, output: W) -> Self {
        Self {
            backend,
            sections,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\nRoom Booking System")?;
            writeln!(self.output, "1. Create Booking")?;
            writeln!(self.output, "2. View Bookings")?;
            writeln!(self.output, "3. Update Booking")?;
            writeln!(self.output, "4. Delete Booking")?;
            writeln!(self.output, "5. Exit")?;
            write!(self.output, "Choose an option: ")?;
            self.output.flush()?;

            let Some(choice) = self.read_int()? else {
                debug!("Input closed");
                writeln!(self.output, "\nExiting...")?;
                return Ok(());
            };

            match choice {
                1 => self.create_booking()?,
                2 => self.view_bookings()?,
                3 => self.update_booking()?,
                4 => self.delete_booking()?,
                5 => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Asks again until an integer is entered. `None` once input is exhausted.
    fn read_int(&mut self) -> io::Result<Option<i64>> {
        while let Some(line) = self.read_line()? {
            match line.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    write!(self.output, "Invalid input. Please enter a valid integer: ")?;
                    self.output.flush()?;
                }
            }
        }
        Ok(None)
    }

    /// Reads an index and checks it against the current listing.
    fn read_index(&mut self, text: &str, action: &str) -> io::Result<Option<usize>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let Some(index) = self.read_int()? else {
            return Ok(None);
        };

        let len = self.backend.bookings().len();
        match usize::try_from(index) {
            Ok(index) if index < len => Ok(Some(index)),
            _ => {
                writeln!(self.output, "Invalid index. Booking not {action}.")?;
                Ok(None)
            }
        }
    }

    fn read_fields(&mut self, new: &str) -> io::Result<Option<(String, String, String)>> {
        let section_prompt = format!("Enter {new}section ({}): ", self.sections.join(", "));
        let Some(section) = self.prompt(&section_prompt)? else {
            return Ok(None);
        };
        let Some(date) = self.prompt(&format!("Enter {new}date (YYYY-MM-DD): "))? else {
            return Ok(None);
        };
        let Some(time) = self.prompt(&format!(
            "Enter {new}time (HH:MM [AM/PM] to HH:MM [AM/PM]): "
        ))?
        else {
            return Ok(None);
        };
        Ok(Some((section, date, time)))
    }

    fn create_booking(&mut self) -> io::Result<()> {
        let Some((section, date, time)) = self.read_fields("")? else {
            return Ok(());
        };
        match self.backend.create_booking(section, date, time) {
            Ok(()) => writeln!(self.output, "Booking created successfully."),
            Err(err) => self.report(&err, "created"),
        }
    }

    fn view_bookings(&mut self) -> io::Result<()> {
        let bookings = self.backend.bookings();
        if bookings.is_empty() {
            return writeln!(self.output, "No bookings available.");
        }
        for (index, booking) in bookings.iter().enumerate() {
            writeln!(self.output, "{index}: {booking}")?;
        }
        Ok(())
    }

    fn update_booking(&mut self) -> io::Result<()> {
        let Some(index) =
            self.read_index("Enter the index of the booking to update: ", "updated")?
        else {
            return Ok(());
        };
        let Some((section, date, time)) = self.read_fields("new ")? else {
            return Ok(());
        };
        match self.backend.update_booking(index, section, date, time) {
            Ok(()) => writeln!(self.output, "Booking updated successfully."),
            Err(err) => self.report(&err, "updated"),
        }
    }

    fn delete_booking(&mut self) -> io::Result<()> {
        let Some(index) =
            self.read_index("Enter the index of the booking to delete: ", "deleted")?
        else {
            return Ok(());
        };
        match self.backend.delete_booking(index) {
            Ok(()) => writeln!(self.output, "Booking deleted successfully."),
            Err(err) => self.report(&err, "deleted"),
        }
    }

    fn report(&mut self, err: &BookingError, action: &str) -> io::Result<()> {
        match err {
            BookingError::InvalidSection(_) => {
                writeln!(self.output, "Invalid section. Booking not {action}.")
            }
            BookingError::InvalidYear(_) => {
                writeln!(self.output, "Invalid Year. Booking not {action}.")
            }
            BookingError::InvalidTimeFormat(reason) => {
                writeln!(self.output, "{reason}.")?;
                writeln!(self.output, "{TIME_FORMAT_HINT}")
            }
            BookingError::Conflict(existing) => {
                writeln!(
                    self.output,
                    "Conflict detected with existing booking: {existing}"
                )?;
                writeln!(self.output, "Booking not {action}.")
            }
            BookingError::IndexOutOfRange { .. } => {
                writeln!(self.output, "Invalid index. Booking not {action}.")
            }
        }
    }
}
