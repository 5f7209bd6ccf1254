use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use lazy_static::lazy_static;
use chrono::Local;

lazy_static! {
    static ref LOG_FILE: Mutex<Option<File>> = Mutex::new(None);
}

static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Initialize the log file at the default location
pub fn init_logger() -> anyhow::Result<PathBuf> {
    let log_path = get_log_path();
    init_logger_at(&log_path)?;
    Ok(log_path)
}

/// Initialize the log file at an explicit path
pub fn init_logger_at(log_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let mut log_file = LOG_FILE
        .lock()
        .map_err(|_| anyhow::anyhow!("log file lock poisoned"))?;
    *log_file = Some(file);

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    if let Some(ref mut f) = *log_file {
        let _ = writeln!(f, "\n=== Motorspec Session Started at {} ===\n", timestamp);
    }

    Ok(())
}

/// Mirror file log lines to stderr
pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::Relaxed);
}

pub fn is_debug_mode() -> bool {
    DEBUG_MODE.load(Ordering::Relaxed)
}

/// Get the log file path
fn get_log_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("motorspec").join("motorspec.log")
    } else {
        PathBuf::from("motorspec.log")
    }
}

/// Log a message to file
pub fn log(level: &str, message: &str) {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let formatted = format!("[{}] {}: {}", timestamp, level, message);

    if is_debug_mode() {
        eprintln!("{}", formatted);
    }

    if let Ok(mut log_file) = LOG_FILE.lock() {
        if let Some(ref mut f) = *log_file {
            let _ = writeln!(f, "{}", formatted);
            let _ = f.flush();
        }
    }
}

/// Macros for easier logging
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::log("INFO", &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logging::log("WARN", &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::log("ERROR", &format!($($arg)*));
    };
}
