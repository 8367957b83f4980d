use std::ffi::OsStr;
use std::process::Command;

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(windows)] {
        /// On Windows, go through `cmd.exe /C` so `.cmd` and `.bat` shims on the PATH resolve.
        pub fn create_command<E: AsRef<OsStr>>(exe: E) -> Command {
            let mut command = Command::new("cmd.exe");
            command.arg("/C");
            command.arg(exe);
            command
        }
    } else {
        pub fn create_command<E: AsRef<OsStr>>(exe: E) -> Command {
            Command::new(exe)
        }
    }
}
