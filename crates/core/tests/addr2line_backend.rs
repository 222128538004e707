use std::path::{Path, PathBuf};

use decode_core::model::{AddressToken, Resolution, ResolutionRequest, Symbol};
use decode_core::services::backends::Addr2LineResolver;
use decode_core::services::{ResolveError, SymbolResolver};

fn request(resolver: impl Into<PathBuf>, artifact: &Path, address: &str) -> ResolutionRequest {
    ResolutionRequest {
        artifact: artifact.to_path_buf(),
        resolver: resolver.into(),
        address: AddressToken::parse(address).unwrap(),
    }
}

#[test]
fn missing_resolver_program_is_a_launch_error() {
    let temp = tempfile::tempdir().unwrap();
    let missing = temp.path().join("no-such-addr2line");
    let err = Addr2LineResolver
        .resolve(&request(&missing, Path::new("kboot.elf"), "0x1000"))
        .unwrap_err();
    let ResolveError::Launch { program, .. } = err;
    assert_eq!(program, missing);
}

#[cfg(unix)]
mod with_fake_addr2line {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    use super::*;

    /// Write a shell script standing in for addr2line. It logs its arguments
    /// next to itself and answers from a small fixed table.
    fn fake_addr2line(dir: &Path) -> PathBuf {
        let script = dir.join("fake-addr2line");
        fs::write(
            &script,
            r#"#!/bin/sh
echo "$@" >> "$(dirname "$0")/calls.log"
case "$4" in
  0x1000) printf 'main\nmain.c:10\n' ;;
  0x2000) echo "addr2line: not found" >&2; exit 1 ;;
  0x3000) printf 'oneline' ;;
  *) printf '??\n??:0\n' ;;
esac
"#,
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    #[test]
    fn resolves_and_passes_expected_arguments() {
        let temp = tempfile::tempdir().unwrap();
        let script = fake_addr2line(temp.path());
        let artifact = temp.path().join("kboot.elf");

        let resolution = Addr2LineResolver.resolve(&request(&script, &artifact, "0x1000")).unwrap();
        assert_eq!(resolution, Resolution::Resolved(Symbol::new("main", "main.c:10")));

        let calls = fs::read_to_string(temp.path().join("calls.log")).unwrap();
        assert_eq!(calls.trim_end(), format!("-f -e {} 0x1000", artifact.display()));
    }

    #[test]
    fn non_zero_exit_is_unresolved() {
        let temp = tempfile::tempdir().unwrap();
        let script = fake_addr2line(temp.path());
        let resolution =
            Addr2LineResolver.resolve(&request(&script, Path::new("kboot.elf"), "0x2000")).unwrap();
        assert_eq!(resolution, Resolution::Unresolved);
    }

    #[test]
    fn short_output_is_unresolved() {
        let temp = tempfile::tempdir().unwrap();
        let script = fake_addr2line(temp.path());
        let resolution =
            Addr2LineResolver.resolve(&request(&script, Path::new("kboot.elf"), "0x3000")).unwrap();
        assert!(!resolution.is_resolved());
    }

    #[test]
    fn placeholder_names_pass_through() {
        let temp = tempfile::tempdir().unwrap();
        let script = fake_addr2line(temp.path());
        let resolution = Addr2LineResolver
            .resolve(&request(&script, Path::new("kboot.elf"), "0xffff"))
            .unwrap()
            .into_symbol()
            .expect("resolved");
        assert_eq!(resolution, Symbol::new("??", "??:0"));
    }
}
