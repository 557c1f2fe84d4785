use std::io::{self, Write};
use crate::flags::{self, FlagKind};
use crate::gate::Gate;
use crate::printers::registry::PrinterInfo;
use crate::printers::PRESS_ENTER;
use crate::runtime::Invocation;

pub const PRINTER_INFO: PrinterInfo = PrinterInfo {
    name: "annotated",
    run,
    gate: Gate::Enter,
};

/// Like the basic printer (numbered from 0), plus a confirmation block for
/// every recognized flag that was passed.
pub fn run(inv: &Invocation, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "=== 参数检测测试 ===")?;
    writeln!(out, "程序路径: {}", inv.program)?;
    writeln!(out, "运行版本: {}", inv.version)?;
    writeln!(out)?;
    writeln!(out, "接收到的所有参数:")?;
    for (i, arg) in inv.args.iter().enumerate() {
        writeln!(out, "  [{}]: {}", i, arg)?;
    }

    for kind in flags::detect(&inv.args) {
        writeln!(out)?;
        match kind {
            FlagKind::Version => {
                writeln!(out, "✓ 检测到版本参数")?;
                writeln!(out, "版本信息: {}", inv.version)?;
            }
            FlagKind::Help => {
                writeln!(out, "✓ 检测到帮助参数")?;
                writeln!(out, "这是一个测试程序，用于验证参数传递")?;
            }
            FlagKind::Test => {
                writeln!(out, "✓ 检测到测试参数")?;
                writeln!(out, "参数传递功能正常！")?;
            }
            FlagKind::Verbose => {
                writeln!(out, "✓ 检测到详细输出参数")?;
                writeln!(out, "详细模式已启用")?;
            }
        }
    }

    if inv.args.is_empty() {
        writeln!(out)?;
        writeln!(out, "⚠ 警告: 没有接收到任何参数")?;
        writeln!(out, "如果规则配置了 args，应该能看到参数列表")?;
    }

    writeln!(out)?;
    writeln!(out, "{}", PRESS_ENTER)
}
