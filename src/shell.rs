//! Interactive menu loop.

use crate::error::Result;
use crate::inventory::{self, Inventory};
use crate::render;
use crate::types::{parse_date, DEFAULT_WARNING_DAYS};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

const CHOICE_PROMPT: &str = "Choose an option: ";

/// Whether the loop keeps going after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Menu-driven front end over an [`Inventory`].
///
/// Reads one line per prompt from `input` and writes everything to `output`.
/// Store and date errors are not caught here; they end the session.
pub struct Shell<R, W> {
    inventory: Inventory,
    input: R,
    output: W,
    warning_days: i64,
    today: fn() -> NaiveDate,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(inventory: Inventory, input: R, output: W) -> Self {
        Self {
            inventory,
            input,
            output,
            warning_days: DEFAULT_WARNING_DAYS,
            today: inventory::today,
        }
    }

    /// Window used by the expiry check.
    pub fn with_warning_days(mut self, days: i64) -> Self {
        self.warning_days = days;
        self
    }

    /// Source of "today" for the expiry check.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.say(render::BANNER)?;
        loop {
            writeln!(self.output)?;
            self.say(render::MENU)?;

            let flow = match self.prompt(CHOICE_PROMPT)? {
                Some(choice) => self.dispatch(&choice)?,
                None => Flow::Quit,
            };

            if flow == Flow::Quit {
                self.say(render::FAREWELL)?;
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => self.add(),
            "2" => self.delete(),
            "3" => self.list(),
            "4" => self.check_expiry(),
            "5" => Ok(Flow::Quit),
            _ => {
                tracing::debug!(choice, "unrecognized menu choice");
                self.say(render::INVALID_CHOICE)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Item name: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(purchase_date) = self.prompt("Purchase date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(expiry_date) = self.prompt("Expiry date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Quit);
        };

        for (field, value) in [("purchase_date", &purchase_date), ("expiry_date", &expiry_date)] {
            if parse_date(field, value).is_err() {
                self.say(&render::invalid_date(value))?;
                return Ok(Flow::Continue);
            }
        }

        self.inventory.add(&name, &purchase_date, &expiry_date)?;
        self.say(&render::added(&name))?;
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Name of item to delete: ")? else {
            return Ok(Flow::Quit);
        };

        self.inventory.delete(&name)?;
        self.say(&render::deleted(&name))?;
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> Result<Flow> {
        let records = self.inventory.list_all()?;
        self.say_all(&render::listing(&records))?;
        Ok(Flow::Continue)
    }

    fn check_expiry(&mut self) -> Result<Flow> {
        let report = self
            .inventory
            .check_expiry((self.today)(), self.warning_days)?;
        self.say_all(&render::expiry_report(&report))?;
        Ok(Flow::Continue)
    }

    /// Print `label`, then read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn say_all(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }
}
