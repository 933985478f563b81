use crate::{
    error::BikeshareError,
    model::{City, DayFilter, FilterSelection, MonthFilter},
    report::SECTION_RULE,
};
use std::{
    io::{BufRead, Write},
    str::FromStr,
};

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const CITY_PROMPT: &str =
    "Enter the city that you would like to collect data for (Chicago, New York City, Washington): ";
pub const MONTH_PROMPT: &str =
    "Enter the month that you would like to collect data for (January through December, or all): ";
pub const DAY_PROMPT: &str =
    "Enter the day of the week that you would like to collect data for (Monday through Sunday, or all): ";

/// reads answers to prompts from some line-oriented input, writing the
/// prompts and any session output to `output`.
pub struct InputCollector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InputCollector<R, W> {
    pub fn new(input: R, output: W) -> InputCollector<R, W> {
        InputCollector { input, output }
    }

    /// the stream that prompts are written to, shared with the reports.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// asks for city, month and day in turn, re-prompting each until the
    /// answer names an allowed value.
    pub fn collect_filters(&mut self) -> Result<FilterSelection, BikeshareError> {
        writeln!(self.output, "{GREETING}")?;
        let city: City = self.ask_until_valid(CITY_PROMPT, "city")?;
        let month: MonthFilter = self.ask_until_valid(MONTH_PROMPT, "month")?;
        let day: DayFilter = self.ask_until_valid(DAY_PROMPT, "day")?;
        writeln!(self.output, "{SECTION_RULE}")?;
        let selection = FilterSelection::new(city, month, day);
        log::debug!("collected filters {selection}");
        Ok(selection)
    }

    /// repeats a prompt until the answer parses. there is no retry limit;
    /// only a closed input ends the loop.
    pub fn ask_until_valid<T: FromStr>(
        &mut self,
        prompt: &str,
        field: &str,
    ) -> Result<T, BikeshareError> {
        loop {
            let answer = self.ask(prompt, field)?;
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => log::debug!("rejected {field} answer '{answer}'"),
            }
        }
    }

    /// writes a prompt and reads one line, returned without its line terminator.
    pub fn ask(&mut self, prompt: &str, field: &str) -> Result<String, BikeshareError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        let bytes_read = self.input.read_line(&mut line)?;
        if bytes_read == 0 {
            return Err(BikeshareError::InputClosed(field.to_string()));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
