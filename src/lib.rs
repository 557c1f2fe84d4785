pub mod flags;
pub mod gate;
pub mod printers;
pub mod runtime;

use std::io::{self, Write};
use std::process::ExitCode;
use printers::{find_printer, PrinterInfo};
use runtime::Invocation;

/// Entry point shared by every `argecho-*` binary.
pub fn launch(name: &str) -> ExitCode {
    let Some(info) = find_printer(name) else {
        eprintln!("argecho: unknown printer: {}", name);
        return ExitCode::from(127);
    };

    let inv = Invocation::from_env(&format!("argecho-{}", info.name));
    match run(info, &inv) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("argecho: {}: {}", info.name, e);
            ExitCode::FAILURE
        }
    }
}

/// Print the report for `inv`, then hold the terminal open according to the printer's gate.
pub fn run(info: &PrinterInfo, inv: &Invocation) -> Result<(), String> {
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        (info.run)(inv, &mut out).map_err(|e| format!("write error: {}", e))?;
        out.flush().map_err(|e| format!("write error: {}", e))?;
    }
    info.gate.wait()
}
