/// A flag the annotated printer reports on when it appears among the arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Version,
    Help,
    Test,
    Verbose,
}

pub struct RecognizedFlag {
    pub kind: FlagKind,
    pub tokens: &'static [&'static str],
}

/// Checked in this order; each entry is independent of the others.
pub const RECOGNIZED_FLAGS: &[RecognizedFlag] = &[
    RecognizedFlag { kind: FlagKind::Version, tokens: &["--version", "-v"] },
    RecognizedFlag { kind: FlagKind::Help, tokens: &["--help", "-h"] },
    RecognizedFlag { kind: FlagKind::Test, tokens: &["--test"] },
    RecognizedFlag { kind: FlagKind::Verbose, tokens: &["--verbose", "-V"] },
];

impl RecognizedFlag {
    /// Exact token match against any accepted spelling.
    pub fn is_present(&self, args: &[String]) -> bool {
        args.iter().any(|arg| self.tokens.contains(&arg.as_str()))
    }
}

/// The recognized flags present in `args`, in table order, each at most once.
pub fn detect(args: &[String]) -> Vec<FlagKind> {
    RECOGNIZED_FLAGS
        .iter()
        .filter(|flag| flag.is_present(args))
        .map(|flag| flag.kind)
        .collect()
}
