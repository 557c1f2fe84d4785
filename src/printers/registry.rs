use std::io::{self, Write};
use crate::gate::Gate;
use crate::printers;
use crate::runtime::Invocation;

pub type PrinterRunner = fn(&Invocation, &mut dyn Write) -> io::Result<()>;

pub struct PrinterInfo {
    pub name: &'static str,
    pub run: PrinterRunner,
    pub gate: Gate,
}

pub const PRINTERS: &[PrinterInfo] = &[
    printers::annotated::PRINTER_INFO,
    printers::basic::PRINTER_INFO,
    printers::simple::PRINTER_INFO,
];

pub fn find_printer(name: &str) -> Option<&'static PrinterInfo> {
    PRINTERS.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_printers() {
        for name in ["basic", "annotated", "simple"] {
            let info = find_printer(name).unwrap();
            assert_eq!(info.name, name);
        }
    }

    #[test]
    fn test_find_unknown_printer() {
        assert!(find_printer("fancy").is_none());
        assert!(find_printer("").is_none());
    }

    #[test]
    fn test_gates() {
        assert_eq!(find_printer("basic").unwrap().gate, Gate::Enter);
        assert_eq!(find_printer("annotated").unwrap().gate, Gate::Enter);
        assert!(matches!(find_printer("simple").unwrap().gate, Gate::Timeout(_)));
    }
}
