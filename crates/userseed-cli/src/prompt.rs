use std::io::{self, BufRead, Write};

use thiserror::Error;
use userseed_core::{CountError, UserCount};

use crate::terminal::clear_screen;

const RULE: &str = "------------------------------------";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("input closed before a user count was entered")]
    InputClosed,
}

/// Asks for a user count until a positive integer is entered.
pub fn prompt_user_count<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    clear: bool,
) -> Result<UserCount, PromptError> {
    let mut rejection: Option<&'static str> = None;
    let mut rejected = 0_u32;
    let mut line = String::new();

    loop {
        if clear {
            clear_screen(&mut output)?;
        }
        if let Some(message) = rejection.take() {
            writeln!(output, "{message}")?;
        }
        writeln!(output, "{RULE}")?;
        writeln!(output, "How many users do you want generated")?;
        writeln!(output, "and put into the database?")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }

        match UserCount::parse(&line) {
            Ok(count) => {
                writeln!(output, "{RULE}")?;
                output.flush()?;
                tracing::info!(event = "count_accepted", count = count.get(), rejected = rejected);
                return Ok(count);
            }
            Err(err) => {
                rejected += 1;
                tracing::debug!(event = "count_rejected", error = %err);
                rejection = Some(rejection_message(&err));
            }
        }
    }
}

fn rejection_message(err: &CountError) -> &'static str {
    match err {
        CountError::NotANumber(_) | CountError::TooLarge(_) => "Please enter a number!",
        CountError::NotPositive(_) => "Please enter a number greater than zero!",
    }
}
