use std::process::ExitStatus;

/// Name of the file searched for when `--file` is not given
pub const ENV_FILE: &str = ".env";

/// Exit code used whenever the child's own status can't be determined
pub const DEFAULT_ERROR_EXIT_STATUS: i32 = 1;

pub enum Error {
    Message(String),
    Code(i32),
}

pub trait IntoResult<T> {
    fn into_result(self) -> Result<T, Error>;
}

impl IntoResult<()> for anyhow::Result<ExitStatus> {
    fn into_result(self) -> Result<(), Error> {
        match self {
            Ok(status) => {
                if status.success() {
                    Ok(())
                } else {
                    Err(Error::Code(exit_code(&status)))
                }
            }
            Err(err) => Err(Error::Message(format!("{:#}", err))),
        }
    }
}

/// Translate the child's termination into the exit code we hand back to our caller.
pub fn exit_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            tracing::debug!(signal, "child terminated by signal");
        }
    }

    DEFAULT_ERROR_EXIT_STATUS
}
