//! Browser console logging for the `log` macros.

use log::Level;

/// Installs the console logger. Safe to call more than once: later calls are
/// ignored and keep the first level.
pub fn init(level: Level) {
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}
