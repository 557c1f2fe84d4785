use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::time::Duration;

/// How a printer holds the terminal open before the process exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Block until the operator sends one line. The line itself is thrown away.
    Enter,
    /// Close on our own after the delay.
    Timeout(Duration),
}

impl Gate {
    pub fn wait(&self) -> Result<(), String> {
        match self {
            Gate::Enter => wait_for_line(),
            Gate::Timeout(delay) => {
                std::thread::sleep(*delay);
                Ok(())
            }
        }
    }
}

fn wait_for_line() -> Result<(), String> {
    let mut rl = DefaultEditor::new().map_err(|e| format!("cannot open terminal: {}", e))?;
    match rl.readline("") {
        Ok(_) => Ok(()),
        // Ctrl+C / Ctrl+D on the gate still means "done reading".
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(()),
        Err(e) => Err(format!("read error: {}", e)),
    }
}
