use std::process::ExitCode;

fn main() -> ExitCode {
    argecho::launch("simple")
}
