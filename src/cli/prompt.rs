//! Interactive prompts
//!
//! Two questions are asked per run: which half of the month is being
//! budgeted, and whether the computed income is right. Prompts are written to
//! a separate stream from the report so the report can be piped.

use std::io::{BufRead, Write};

use crate::error::PaydayResult;
use crate::models::{HalfMonth, Money};
use crate::services::resolve_income;

/// Asks the operator questions over a line-based input
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a new prompter
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line on the prompt stream
    pub fn say(&mut self, message: &str) -> PaydayResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Confirm the suggested half, flipping it if the answer starts with 'n'
    pub fn confirm_half_month(&mut self, suggested: HalfMonth) -> PaydayResult<HalfMonth> {
        writeln!(
            self.output,
            "It seems like you're preparing the budget for the {} of the month. Is that right? Type 'y' or 'n'",
            suggested
        )?;
        self.output.flush()?;

        let response = self.read_line()?;
        let half = if declines(&response) {
            suggested.other()
        } else {
            suggested
        };

        tracing::debug!(suggested = %suggested, chosen = %half, "half-month confirmed");
        Ok(half)
    }

    /// Confirm the computed income or take a replacement amount
    ///
    /// A blank line accepts `computed`. An unparseable amount is an error;
    /// the operator is not asked again.
    pub fn confirm_income(&mut self, computed: Money) -> PaydayResult<Money> {
        writeln!(
            self.output,
            "We expect your total income to put toward this budget is {}.",
            computed
        )?;
        writeln!(
            self.output,
            "Provide a different amount if necessary. Press enter to accept."
        )?;
        self.output.flush()?;

        let response = self.read_line()?;
        resolve_income(computed, &response)
    }

    /// Read one line; end of input reads as an empty line
    fn read_line(&mut self) -> PaydayResult<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Check if a yes/no answer means "no"
pub fn declines(response: &str) -> bool {
    response.trim().to_lowercase().starts_with('n')
}
