//! Host messages arriving on stdin, one JSON document per line.

use std::io::{self, BufRead};
use std::thread;

use nova_overlay::OverlayHandle;
use serde_json::Value;

/// What to do once the host closes stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EofAction {
    /// Keep the overlay running; the window decides when to quit.
    Keep,
    Shutdown,
}

/// Forward each JSON line from `reader` to the controller.
///
/// Blank and malformed lines are skipped. Returns how many messages were
/// forwarded; stops early if the controller has gone away.
pub fn forward_host_messages<R: BufRead>(reader: R, handle: &OverlayHandle) -> usize {
    let mut forwarded = 0;
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "host input read failed");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(message) => {
                if !handle.host_message(message) {
                    tracing::debug!("overlay controller gone, host input stopped");
                    break;
                }
                forwarded += 1;
            }
            Err(e) => tracing::warn!(error = %e, "host message is not JSON, skipped"),
        }
    }
    forwarded
}

/// Read stdin on a background thread for the life of the process.
pub fn spawn_stdin_reader(
    handle: OverlayHandle,
    on_eof: EofAction,
) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("nova-host-input".into())
        .spawn(move || {
            let stdin = io::stdin();
            let forwarded = forward_host_messages(stdin.lock(), &handle);
            tracing::info!(forwarded, "host input closed");
            if on_eof == EofAction::Shutdown {
                handle.shutdown();
            }
        })
}
