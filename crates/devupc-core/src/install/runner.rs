//! Command execution with log capture
//!
//! Runs one external command at a time while streaming its output into
//! the log: stdout lines at debug level, stderr lines at warn level.

use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

use crate::{Error, Result};

/// Run a command to completion, streaming its output into the log. A
/// non-zero exit status is mapped to a build error naming the step.
pub async fn run_logged(command: &mut Command, step: &str) -> Result<()> {
    command.stdout(Stdio::piped()).stderr(Stdio::piped());

    tracing::debug!("Running command: {:?}", command);

    let mut child = command.spawn().map_err(|e| {
        Error::build(format!("{} failed to start", step), e.to_string())
    })?;

    let stdout = child.stdout.take().expect("stdout is piped");
    let stderr = child.stderr.take().expect("stderr is piped");

    let step_stdout = step.to_string();
    let stdout_handle = tokio::spawn(async move {
        let mut lines = BufReader::new(stdout).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            tracing::debug!(target: "install_output", step = %step_stdout, "{}", line);
        }
    });

    let step_stderr = step.to_string();
    let stderr_handle = tokio::spawn(async move {
        let mut lines = BufReader::new(stderr).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            tracing::warn!(target: "install_output", step = %step_stderr, "{}", line);
        }
    });

    let status = child.wait().await.map_err(|e| {
        Error::build(format!("{} failed", step), e.to_string())
    })?;

    let _ = stdout_handle.await;
    let _ = stderr_handle.await;

    if !status.success() {
        return Err(Error::build(
            format!("{} exited with {}", step, status),
            "Check the command output for errors",
        ));
    }

    Ok(())
}
