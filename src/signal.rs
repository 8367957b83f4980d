use std::process::exit;
use std::sync::atomic::{AtomicBool, Ordering};

static CHILD_HAS_CONTROL: AtomicBool = AtomicBool::new(false);
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Called right before spawning: from here on the child decides what Ctrl+C means.
pub fn pass_control_to_child() {
    CHILD_HAS_CONTROL.store(true, Ordering::SeqCst);
}

pub fn child_has_control() -> bool {
    CHILD_HAS_CONTROL.load(Ordering::SeqCst)
}

pub fn setup_signal_handler() {
    let result = ctrlc::set_handler(|| {
        if !child_has_control() {
            exit(INTERRUPTED_EXIT_CODE);
        }
    });

    if let Err(err) = result {
        tracing::warn!(
            error = %err,
            "Unable to set Ctrl+C handler, SIGINT will not be handled correctly"
        );
    }
}
