//! Test helpers for running commands against in-memory streams.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use fishcast_core::{EvaluationHour, FixedClock};
use tempfile::TempDir;

/// Clock pinned to midday, outside the dawn window.
pub(super) fn midday_clock() -> FixedClock {
    FixedClock::at_hour(EvaluationHour::new(12).expect("valid hour"))
}

/// Parse `argv` and run the command with `stdin` as input.
pub(super) fn run_argv(
    argv: &[&str],
    clock: &dyn Clock,
    stdin: &str,
) -> (Result<(), CliError>, String) {
    let mut output = Vec::new();
    let result = Cli::try_parse_from(argv.iter().copied())
        .map_err(CliError::from)
        .and_then(|cli| run_command(cli.command, clock, &mut stdin.as_bytes(), &mut output));
    let stdout = String::from_utf8(output).expect("stdout utf-8");
    (result, stdout)
}

/// Parse the single JSON line written by a command.
pub(super) fn parse_output(stdout: &str) -> serde_json::Value {
    assert!(stdout.ends_with('\n'), "response should end with a newline");
    assert_eq!(stdout.lines().count(), 1, "response should be one line");
    serde_json::from_str(stdout.trim_end()).expect("stdout should be JSON")
}

/// Temporary workspace for request files.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        write_utf8(&path, contents.as_bytes());
        path
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write request file");
}
