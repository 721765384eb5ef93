use colored::*;

use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);

pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

pub fn is_debug() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

pub fn debug(msg: String) {
    if is_debug() {
        eprintln!("{}", format!("DEBUG: {}", msg).dimmed());
    }
}

pub fn warn(msg: String) {
    eprintln!("{}", format!("WARNING: {}", msg).yellow());
}

pub fn error(msg: String) {
    eprintln!("{}", msg.red());
}

#[macro_export]
macro_rules! log_debug {
    ($msg:expr) => ($crate::log::debug(format!($msg)));
    ($fmt:expr, $($arg:tt)*) => {
        $crate::log::debug(format!($fmt, $($arg)*));
    }
}

#[macro_export]
macro_rules! log_warn {
    ($msg:expr) => ($crate::log::warn(format!($msg)));
    ($fmt:expr, $($arg:tt)*) => {
        $crate::log::warn(format!($fmt, $($arg)*));
    }
}

#[macro_export]
macro_rules! log_error {
    ($msg:expr) => ($crate::log::error(format!($msg)));
    ($fmt:expr, $($arg:tt)*) => {
        $crate::log::error(format!($fmt, $($arg)*));
    }
}

#[test]
fn test_debug_toggle() {
    set_debug(true);
    assert!(is_debug());
    set_debug(false);
    assert!(!is_debug());
}
