//! Optional wait for a debugger before startup.
//!
//! Enabled with `DEBUG=1`. The process logs its pid and blocks until a tracer
//! attaches, which it detects through the `TracerPid` line of
//! `/proc/self/status`. Where that file does not exist the wait is skipped.

use std::time::Duration;

/// Environment variable that enables the wait.
pub const DEBUG_ENV: &str = "DEBUG";

const STATUS_PATH: &str = "/proc/self/status";
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Whether `DEBUG=1` is set.
pub fn requested() -> bool {
    std::env::var(DEBUG_ENV).is_ok_and(|value| value == "1")
}

/// Extracts the tracer pid from the contents of a `/proc/<pid>/status` file.
///
/// Returns `Some(0)` when the process is not traced and `None` when the field
/// is missing or malformed.
pub fn tracer_pid(status: &str) -> Option<u32> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("TracerPid:"))
        .and_then(|value| value.trim().parse().ok())
}

/// Blocks until a debugger is attached.
pub fn wait_for_attach() -> crate::error::Result<()> {
    let pid = std::process::id();
    if std::fs::metadata(STATUS_PATH).is_err() {
        log::warn!("Cannot detect debugger attach on this platform (pid {pid}); continuing");
        return Ok(());
    }

    log::info!("Waiting for debugger attach (pid {pid})...");
    loop {
        let status = std::fs::read_to_string(STATUS_PATH)?;
        if let Some(tracer) = tracer_pid(&status).filter(|&tracer| tracer != 0) {
            log::info!("Debugger attached (tracer pid {tracer}).");
            return Ok(());
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}
