use std::sync::{Mutex, MutexGuard};

static BUFFER: Mutex<Option<Vec<String>>> = Mutex::new(None);

fn lock() -> MutexGuard<'static, Option<Vec<String>>> {
    BUFFER.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Start holding diagnostics instead of printing them, so they don't land on
/// top of the TUI.
pub fn activate() {
    *lock() = Some(Vec::new());
}

/// Stop buffering and return everything collected since [`activate`].
pub fn drain() -> Vec<String> {
    lock().take().unwrap_or_default()
}

/// Write a diagnostic line: buffered while the TUI is up, straight to stderr otherwise.
pub fn warn(msg: String) {
    let mut guard = lock();
    if let Some(buf) = guard.as_mut() {
        buf.push(msg);
    } else {
        drop(guard);
        eprintln!("{}", msg);
    }
}

/// Like `eprintln!`, but routed through the stderr buffer when it is active.
#[macro_export]
macro_rules! buffered_eprintln {
    ($($arg:tt)*) => {
        $crate::stderr_buffer::warn(format!($($arg)*))
    };
}
