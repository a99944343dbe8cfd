//! Interactive prompt primitives
//!
//! Small stdin helpers shared by the menu loops. Amount and kind
//! prompts re-ask until the input parses; the caller never sees a
//! half-validated value.

use std::io::{self, Write};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{ExpenseKind, Money};

/// Prompt for a line of input, trimmed
pub fn prompt_string(prompt: &str) -> FintrackResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Err(FintrackError::Io("Unexpected end of input".into()));
    }

    Ok(input.trim().to_string())
}

/// Prompt for a password without echoing it to the terminal
pub fn prompt_password(prompt: &str) -> FintrackResult<String> {
    Ok(rpassword::prompt_password(prompt)?)
}

/// Prompt for a non-negative amount, re-asking until one parses
pub fn prompt_money(prompt: &str) -> FintrackResult<Money> {
    loop {
        let input = prompt_string(prompt)?;
        match Money::parse(&input) {
            Ok(amount) if amount.is_negative() => {
                println!("Please enter a positive amount.");
            }
            Ok(amount) => return Ok(amount),
            Err(_) => {
                println!("Invalid input. Please enter a number for the amount.");
            }
        }
    }
}

/// Prompt for the expense kind as an E/N choice
pub fn prompt_kind() -> FintrackResult<ExpenseKind> {
    loop {
        let input = prompt_string(
            "Is this expense essential or non-essential? Enter 'E' for essential, 'N' for non-essential: ",
        )?;
        match input.to_uppercase().as_str() {
            "E" => return Ok(ExpenseKind::Essential),
            "N" => return Ok(ExpenseKind::NonEssential),
            _ => {
                println!("Invalid choice. Please enter 'E' for essential or 'N' for non-essential.");
            }
        }
    }
}
