//! Runs the roster binaries for the integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::path::Path;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;

use regex::Regex;
use wait_timeout::ChildExt;

const TEST_TIMEOUT: Duration = Duration::from_secs(60);
/// The timeout of runs which enumerate every roster of the default instance.
pub(crate) const EXHAUSTIVE_TEST_TIMEOUT: Duration = Duration::from_secs(600);

/// The captured result of one run of a binary.
#[derive(Debug)]
pub(crate) struct Run {
    pub(crate) exit_code: Option<i32>,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

impl Run {
    pub(crate) fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// The lines of stdout which match `pattern` completely.
    pub(crate) fn matching_lines(&self, pattern: &str) -> Vec<&str> {
        let regex = Regex::new(&format!("^{pattern}$")).expect("valid pattern");
        self.stdout
            .lines()
            .filter(|line| regex.is_match(line))
            .collect()
    }
}

pub(crate) fn run_line_roster<'a>(args: impl IntoIterator<Item = &'a str>) -> Run {
    run_binary(env!("CARGO_BIN_EXE_line-roster"), args, TEST_TIMEOUT)
}

pub(crate) fn run_shift_roster<'a>(args: impl IntoIterator<Item = &'a str>) -> Run {
    run_binary(env!("CARGO_BIN_EXE_shift-roster"), args, TEST_TIMEOUT)
}

pub(crate) fn run_shift_roster_with_timeout<'a>(
    args: impl IntoIterator<Item = &'a str>,
    timeout: Duration,
) -> Run {
    run_binary(env!("CARGO_BIN_EXE_shift-roster"), args, timeout)
}

fn run_binary<'a>(
    binary: impl AsRef<Path>,
    args: impl IntoIterator<Item = &'a str>,
    timeout: Duration,
) -> Run {
    let mut child = Command::new(binary.as_ref())
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run the roster binary.");

    match child.wait_timeout(timeout) {
        Ok(None) => {
            let _ = child.kill();
            panic!("roster binary took more than {} seconds", timeout.as_secs())
        }
        Ok(Some(_)) => {}
        Err(e) => panic!("error waiting for the roster binary: {e}"),
    }

    let output = child
        .wait_with_output()
        .expect("Failed to collect the output of the roster binary.");

    Run {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
