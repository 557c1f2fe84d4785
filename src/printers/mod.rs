pub mod annotated;
pub mod basic;
pub mod simple;
pub mod registry;

pub use registry::{find_printer, PrinterInfo, PRINTERS};

/// Shown by every Enter-gated printer just before it blocks.
pub(crate) const PRESS_ENTER: &str = "按 Enter 键退出...";
