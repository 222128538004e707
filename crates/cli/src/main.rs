use std::env;
use std::ffi::OsString;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use decodetrace::commands::{decode_command, resolve_run_config};
use decodetrace::{
    is_help_request, program_name, usage_line, usage_text, EXIT_FAILURE, EXIT_SUCCESS,
};

/// Symbolize an address-only KBoot backtrace read from standard input.
///
/// Help and version flags are handled outside clap: `-h`/`--help` must win
/// when it is the first argument, and exits with status 1.
#[derive(Parser, Debug)]
#[command(name = "decode", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Path to the kboot.elf the trace came from.
    artifact: Option<PathBuf>,

    /// Path to the addr2line to use. Defaults to `addr2line` on PATH.
    resolver: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let args: Vec<OsString> = env::args_os().collect();
    let program = program_name(&args);

    if is_help_request(&args) {
        print!("{}", usage_text(&program));
        std::process::exit(EXIT_FAILURE);
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => {
            log::debug!("argument parsing failed: {err}");
            eprintln!("Invalid arguments");
            eprintln!("{}", usage_line(&program));
            std::process::exit(EXIT_FAILURE);
        }
    };

    std::process::exit(match run(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            EXIT_FAILURE
        }
    });
}

fn run(cli: Cli) -> Result<()> {
    // Configuration is settled before stdin is touched.
    let root = env::current_dir().context("Failed to get current directory")?;
    let config = resolve_run_config(&root, cli.artifact, cli.resolver)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    decode_command(&config, stdin.lock(), BufWriter::new(stdout.lock()))?;
    Ok(())
}
