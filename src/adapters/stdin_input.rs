//! Interactive stdin adapter.

use std::io::{self, Write};

use colored::Colorize;

use crate::error::CompareError;
use crate::ports::InputSource;

/// Reads prompted lines from standard input.
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self, prompt: &str) -> Result<String, CompareError> {
        print!("{}", prompt.yellow());
        io::stdout().flush().map_err(CompareError::Input)?;

        let mut buffer = String::new();
        let read = io::stdin().read_line(&mut buffer).map_err(CompareError::Input)?;
        if read == 0 {
            return Err(CompareError::InputClosed);
        }
        Ok(buffer.trim().to_string())
    }
}
