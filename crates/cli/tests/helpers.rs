use std::ffi::OsString;

use decodetrace::{is_help_request, program_name, usage_line, usage_text};

fn args(list: &[&str]) -> Vec<OsString> {
    list.iter().map(OsString::from).collect()
}

#[test]
fn help_is_detected_only_as_first_argument() {
    assert!(is_help_request(&args(&["decode", "-h"])));
    assert!(is_help_request(&args(&["decode", "--help"])));
    assert!(is_help_request(&args(&["decode", "--help", "kboot.elf", "addr2line", "extra"])));
    assert!(!is_help_request(&args(&["decode", "kboot.elf", "--help"])));
    assert!(!is_help_request(&args(&["decode"])));
    assert!(!is_help_request(&args(&[])));
}

#[test]
fn program_name_uses_file_name_of_argv0() {
    assert_eq!(program_name(&args(&["/usr/local/bin/decode"])), "decode");
    assert_eq!(program_name(&args(&[])), "decode");
}

#[test]
fn usage_mentions_both_invocation_shapes() {
    let line = usage_line("decode");
    assert!(line.starts_with("Usage: decode"));
    assert!(line.contains("kboot.elf"));
    assert!(line.contains("addr2line"));

    let text = usage_text("decode");
    assert!(text.starts_with(&line));
    assert!(text.contains(".options.cache"));
}
