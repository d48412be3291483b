//! System clipboard utilities

use std::io::Write;
use std::process::{Command, Stdio};

/// Copy text to the system clipboard. Failures are logged, not surfaced;
/// the hex chips show their own copied indicator.
pub fn copy_to_clipboard(text: &str) {
    let mut child = match Command::new("pbcopy").stdin(Stdio::piped()).spawn() {
        Ok(child) => child,
        Err(err) => {
            tracing::warn!("clipboard unavailable: {err}");
            return;
        }
    };
    if let Some(stdin) = child.stdin.as_mut() {
        if let Err(err) = stdin.write_all(text.as_bytes()) {
            tracing::warn!("clipboard write failed: {err}");
        }
    }
    let _ = child.wait();
}
