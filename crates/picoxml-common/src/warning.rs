//! Parser warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the lexer and parser to report tolerated oddities (duplicate
//! attribute names, skipped processing instructions) that do not fail the
//! parse.

use std::collections::HashSet;
use std::sync::Mutex;

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Records a warning key; `true` when it has not been seen before.
fn record(key: String) -> bool {
    WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about a tolerated oddity (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Parser", "duplicate attribute name 'id' kept in source order");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    if record(format!("[{component}] {message}")) {
        eprintln!("{YELLOW}[picoxml {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call when starting a new document)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
