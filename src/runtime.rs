use std::path::{Path, PathBuf};
use sysinfo::System;

/// Everything a printer needs to know about the current process, gathered once at start.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Program path as shown to the operator (`~` abbreviated).
    pub program: String,
    /// Runtime identity line, e.g. `argecho 0.1.0 (Linux 6.1 Debian, x86_64)`.
    pub version: String,
    /// Arguments excluding the program name, in the order received.
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, version: impl Into<String>, args: Vec<String>) -> Self {
        Invocation {
            program: program.into(),
            version: version.into(),
            args,
        }
    }

    /// Build the invocation from the real process: argv, executable path and host OS.
    pub fn from_env(fallback_name: &str) -> Self {
        let mut argv = std::env::args_os().map(|a| a.to_string_lossy().into_owned());
        let argv0 = argv.next();
        let args: Vec<String> = argv.collect();

        let program = match std::env::current_exe() {
            Ok(path) => display_path(&path),
            Err(_) => argv0.unwrap_or_else(|| fallback_name.to_string()),
        };

        Invocation::new(program, runtime_version(), args)
    }
}

/// `<crate> <version> (<os>, <arch>)`
pub fn runtime_version() -> String {
    let os = System::long_os_version().unwrap_or_else(|| std::env::consts::OS.to_string());
    format!(
        "{} {} ({}, {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        os,
        std::env::consts::ARCH
    )
}

/// Abbreviate the home directory to `~`, like a shell prompt does.
pub fn display_path(path: &Path) -> String {
    abbreviate_home(path, dirs::home_dir().as_deref())
}

fn abbreviate_home(path: &Path, home: Option<&Path>) -> String {
    let Some(home) = home else {
        return path.display().to_string();
    };
    match path.strip_prefix(home) {
        Ok(relative) if relative.as_os_str().is_empty() => "~".to_string(),
        Ok(relative) => {
            let mut shown = PathBuf::from("~");
            shown.push(relative);
            shown.display().to_string()
        }
        Err(_) => path.display().to_string(),
    }
}
