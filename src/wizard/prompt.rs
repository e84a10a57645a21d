//! Line-oriented prompting
//!
//! Generic over the reader and writer so the wizard can be driven from a
//! script in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{TrueWageError, TrueWageResult};
use crate::models::Money;

/// Asks questions on `output` and reads answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line
    pub fn say(&mut self, line: impl Display) -> TrueWageResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print text as-is
    pub fn write(&mut self, text: &str) -> TrueWageResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Ask for a line of input, trimmed
    ///
    /// Running out of input is an error so a closed stdin can't spin forever.
    pub fn ask(&mut self, prompt: &str) -> TrueWageResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Err(TrueWageError::Io("Input ended before the question was answered".into()));
        }

        Ok(input.trim().to_string())
    }

    /// Ask for a number until one satisfies `valid`
    pub fn ask_f64_where(
        &mut self,
        prompt: &str,
        requirement: &str,
        valid: impl Fn(f64) -> bool,
    ) -> TrueWageResult<f64> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<f64>() {
                Ok(value) if value.is_finite() && valid(value) => return Ok(value),
                _ => self.say(format!("Please enter {}.", requirement))?,
            }
        }
    }

    /// Ask for a dollar amount until one parses and satisfies `valid`
    pub fn ask_money(
        &mut self,
        prompt: &str,
        requirement: &str,
        valid: impl Fn(Money) -> bool,
    ) -> TrueWageResult<Money> {
        loop {
            let answer = self.ask(prompt)?;
            match Money::parse(&answer) {
                Ok(amount) if valid(amount) => return Ok(amount),
                _ => self.say(format!("Please enter {}.", requirement))?,
            }
        }
    }

    /// Ask for one of the numbered menu entries `1..=count`
    pub fn ask_choice(&mut self, prompt: &str, count: usize) -> TrueWageResult<usize> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<usize>() {
                Ok(choice) if (1..=count).contains(&choice) => return Ok(choice),
                _ => self.say(format!("Please enter a number from 1 to {}.", count))?,
            }
        }
    }

    /// Ask a yes/no question until it gets a yes or a no
    pub fn confirm(&mut self, prompt: &str) -> TrueWageResult<bool> {
        loop {
            let answer = self.ask(prompt)?.to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please enter 'yes' or 'no'")?,
            }
        }
    }
}
