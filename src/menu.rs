//! Interactive menu
//!
//! This module renders the textual menu and parses the user's choice.
//! Invalid input is recovered locally by re-prompting; everything else the
//! menu does is a trivial match.

use crate::reading::Quantity;
use std::io::{BufRead, Write};

/// A resolved menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Run a monitoring session for a quantity
    Monitor(Quantity),
    /// Leave the menu loop
    Quit,
}

/// Prompt until the user enters a valid choice
///
/// Renders the menu, reads one line, and re-prompts on anything that is not
/// `1`, `2`, or `q`/`Q`. End of input counts as quitting so a closed stdin
/// never spins the loop.
pub fn prompt_choice<R, W>(input: &mut R, output: &mut W) -> std::io::Result<MenuChoice>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "[1] Monitor Temperature")?;
        writeln!(output, "[2] Monitor Humidity")?;
        writeln!(output, "[Q] Quit")?;
        write!(output, "Enter choice: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(MenuChoice::Quit);
        }

        match line.trim() {
            "1" => return Ok(MenuChoice::Monitor(Quantity::Temperature)),
            "2" => return Ok(MenuChoice::Monitor(Quantity::Humidity)),
            "q" | "Q" => return Ok(MenuChoice::Quit),
            other => {
                writeln!(output, "Invalid choice {other:?}! Please enter 1, 2 or Q.")?;
            }
        }
    }
}
