use std::io::{self, Write};
use crate::gate::Gate;
use crate::printers::registry::PrinterInfo;
use crate::printers::PRESS_ENTER;
use crate::runtime::Invocation;

pub const PRINTER_INFO: PrinterInfo = PrinterInfo {
    name: "basic",
    run,
    gate: Gate::Enter,
};

/// Banner, identity, then every argument numbered from 1 and the total.
pub fn run(inv: &Invocation, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "=== 参数回显测试 ===")?;
    writeln!(out, "程序路径: {}", inv.program)?;
    writeln!(out, "运行版本: {}", inv.version)?;
    writeln!(out)?;
    writeln!(out, "接收到的参数:")?;

    if inv.args.is_empty() {
        writeln!(out, "  没有传递任何参数")?;
    } else {
        for (i, arg) in inv.args.iter().enumerate() {
            writeln!(out, "  参数 {}: {}", i + 1, arg)?;
        }
        writeln!(out)?;
        writeln!(out, "总共接收到 {} 个参数", inv.args.len())?;
    }

    writeln!(out)?;
    writeln!(out, "{}", PRESS_ENTER)
}
