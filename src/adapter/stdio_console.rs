//! stdin/stdout による Console 実装

use std::io::{self, BufRead, Write};

use crate::error::Error;
use crate::ports::outbound::Console;

/// 標準入出力で対話する Console
pub struct StdioConsole;

impl StdioConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdioConsole {
    fn read_line(&self, prompt: &str) -> Result<Option<String>, Error> {
        let mut out = io::stdout();
        out.write_all(prompt.as_bytes())
            .map_err(|e| Error::io_msg(e.to_string()))?;
        out.flush().map_err(|e| Error::io_msg(e.to_string()))?;

        let mut line = String::new();
        let n = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(e.to_string()))?;
        if n == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn print(&self, text: &str) -> Result<(), Error> {
        let mut out = io::stdout();
        out.write_all(text.as_bytes())
            .map_err(|e| Error::io_msg(e.to_string()))?;
        out.write_all(b"\n")
            .map_err(|e| Error::io_msg(e.to_string()))?;
        out.flush().map_err(|e| Error::io_msg(e.to_string()))?;
        Ok(())
    }
}
