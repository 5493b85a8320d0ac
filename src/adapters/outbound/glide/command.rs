use crate::shared::error::LockError;
use crate::shared::Result;
use std::io;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

fn command_error(program: &str, args: &[&str], details: impl Into<String>) -> anyhow::Error {
    LockError::ExternalCommand {
        command: display_command(program, args),
        details: details.into(),
    }
    .into()
}

fn check_output(program: &str, args: &[&str], output: io::Result<Output>) -> Result<Output> {
    let output = output.map_err(|e| command_error(program, args, e.to_string()))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let details = match stderr.trim() {
            "" => output.status.to_string(),
            stderr => format!("{}: {}", output.status, stderr),
        };
        return Err(command_error(program, args, details));
    }
    Ok(output)
}

/// Runs `program` in `dir` and returns its stdout
pub fn capture(program: &str, args: &[&str], dir: &Path) -> Result<String> {
    let output = check_output(
        program,
        args,
        Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .output(),
    )?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Runs `program` in `dir`, showing its output on stderr
///
/// stdin is inherited when `interactive`, so the program can prompt.
pub fn run_visible(program: &str, args: &[&str], dir: &Path, interactive: bool) -> Result<()> {
    let stdin = if interactive {
        Stdio::inherit()
    } else {
        Stdio::null()
    };

    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(stdin)
        .stdout(Stdio::from(io::stderr()))
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| command_error(program, args, e.to_string()))?;

    if !status.success() {
        return Err(command_error(program, args, status.to_string()));
    }
    Ok(())
}
