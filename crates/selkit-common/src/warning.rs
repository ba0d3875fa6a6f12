//! Diagnostic warnings with colored terminal output.
//!
//! Provides deduplication so a caller that repeats the same questionable
//! input does not flood stderr with identical lines.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A poisoned set is still a valid set.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Warn about questionable input (prints once per unique message)
///
/// # Example
/// ```
/// use selkit_common::warning::warn_once;
///
/// warn_once("selector", "non-canonical combinator '>>'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = warned().get_or_insert_with(HashSet::new).insert(key);

    if should_print {
        eprintln!("{YELLOW}[selkit {component}] ⚠ {message}{RESET}");
    }
}

/// Snapshot of every warning recorded since the last [`clear_warnings`],
/// formatted as `[component] message` and sorted.
#[must_use]
pub fn recorded_warnings() -> Vec<String> {
    let mut all: Vec<String> = warned()
        .as_ref()
        .map(|set| set.iter().cloned().collect())
        .unwrap_or_default();
    all.sort();
    all
}

/// Clear all recorded warnings
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
