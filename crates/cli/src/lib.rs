use std::ffi::OsString;

pub mod commands;

/// Exit status for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status for help, usage errors, and fatal runtime errors.
pub const EXIT_FAILURE: i32 = 1;

/// True when the first argument after the program name is `-h` or `--help`.
///
/// Only the first argument is inspected, so `decode kboot.elf --help` is an
/// ordinary (invalid) invocation rather than a help request.
pub fn is_help_request(args: &[OsString]) -> bool {
    matches!(args.get(1).and_then(|a| a.to_str()), Some("-h" | "--help"))
}

/// Program name for messages, taken from `argv[0]` when available.
pub fn program_name(args: &[OsString]) -> String {
    args.first()
        .map(std::path::Path::new)
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "decode".to_string())
}

/// One-line invocation synopsis.
pub fn usage_line(program: &str) -> String {
    format!("Usage: {program} [<path to kboot.elf> [<path to addr2line>]] < <output>")
}

/// Full help text printed for `-h` / `--help`.
pub fn usage_text(program: &str) -> String {
    let mut text = String::new();
    text.push_str(&usage_line(program));
    text.push_str("\n\n");
    text.push_str("Input the backtrace output from KBoot (after the 'Backtrace' line) on\n");
    text.push_str("standard input. Each resolved frame is printed as\n");
    text.push_str("'<address> - <function> @ <file:line>'.\n\n");
    text.push_str("If no arguments are specified, this assumes it is run from the root of the\n");
    text.push_str("source directory, with .options.cache matching the configuration the\n");
    text.push_str("backtrace came from and the build tree containing the kboot.elf it came\n");
    text.push_str("from. If the addr2line path is omitted, 'addr2line' is looked up on PATH.\n\n");
    text.push_str(&format!("decode-core v{}\n", decode_core::version()));
    text
}
