use std::process::Command;

use anyhow::{Context, Result, bail};

/// Runs `git diff --no-prefix` with whitespace-separated extra arguments and
/// returns its output.
pub fn load_diff(args: &str) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.arg("diff").arg("--no-prefix");

    if !args.is_empty() {
        for arg in args.split_whitespace() {
            cmd.arg(arg);
        }
    }

    log::debug!("running {cmd:?}");
    let output = cmd.output().context("failed to run git")?;
    if !output.status.success() {
        bail!(
            "git diff exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
