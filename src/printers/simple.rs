use std::io::{self, Write};
use std::time::Duration;
use crate::gate::Gate;
use crate::printers::registry::PrinterInfo;
use crate::runtime::Invocation;

pub const CLOSE_DELAY: Duration = Duration::from_secs(3);

pub const PRINTER_INFO: PrinterInfo = PrinterInfo {
    name: "simple",
    run,
    gate: Gate::Timeout(CLOSE_DELAY),
};

/// Only proves the terminal opened; closes on its own, no input needed.
pub fn run(inv: &Invocation, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Hello from {}!", env!("CARGO_PKG_NAME"))?;
    writeln!(out, "如果你看到这条消息，说明终端已经成功打开。")?;
    writeln!(out)?;
    writeln!(out, "程序信息:")?;
    writeln!(out, "  程序路径: {}", inv.program)?;
    writeln!(out, "  运行版本: {}", inv.version)?;
    writeln!(out, "  参数数量: {}", inv.args.len())?;

    if !inv.args.is_empty() {
        writeln!(out)?;
        writeln!(out, "传递的参数:")?;
        for (i, arg) in inv.args.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, arg)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{} 秒后自动关闭...", CLOSE_DELAY.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(args: &[&str]) -> String {
        let inv = Invocation::new(
            "~/argecho-simple",
            "argecho 0.1.0 (Linux, aarch64)",
            args.iter().map(|s| s.to_string()).collect(),
        );
        let mut out = Vec::new();
        run(&inv, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_greeting_and_info() {
        let output = render(&[]);
        assert!(output.starts_with("Hello from argecho!\n"));
        assert!(output.contains("  程序路径: ~/argecho-simple\n"));
        assert!(output.contains("  运行版本: argecho 0.1.0 (Linux, aarch64)\n"));
        assert!(output.contains("  参数数量: 0\n"));
        assert!(output.ends_with("3 秒后自动关闭...\n"));
    }

    #[test]
    fn test_no_argument_list_when_empty() {
        let output = render(&[]);
        assert!(!output.contains("传递的参数:"));
    }

    #[test]
    fn test_lists_arguments_one_based() {
        let output = render(&["--flag", "value with space"]);
        assert!(output.contains("  参数数量: 2\n"));
        assert!(output.contains("传递的参数:\n  1. --flag\n  2. value with space\n"));
    }
}
