//! Time-limited external command execution

use lcd_sens_core::CollectionError;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Run `program` with `args` and return its stdout as UTF-8 text
///
/// The child is killed if it does not finish within `timeout`. A non-zero
/// exit status is an error; stderr is discarded.
pub async fn run_command(
    program: &str,
    args: &[String],
    timeout: Duration,
) -> Result<String, CollectionError> {
    log::trace!("Running {} {:?}", program, args);

    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| CollectionError::Spawn {
            program: program.to_string(),
            source,
        })?;

    // Dropping the wait future on timeout drops the child, which kills it
    let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(result) => result.map_err(|source| CollectionError::Spawn {
            program: program.to_string(),
            source,
        })?,
        Err(_) => {
            return Err(CollectionError::Timeout {
                program: program.to_string(),
                timeout,
            })
        }
    };

    if !output.status.success() {
        return Err(CollectionError::CommandFailed {
            program: program.to_string(),
            status: output.status.to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
