// pocketcalc platform paths
// Resolves where the preference database lives on each operating system.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "pocketcalc";

/// Returns the platform-specific data directory for pocketcalc.
///
/// - **Linux**: `$XDG_DATA_HOME/pocketcalc` or `~/.local/share/pocketcalc`
/// - **macOS**: `~/Library/Application Support/pocketcalc`
/// - **Windows**: `%APPDATA%/pocketcalc`
/// - elsewhere: `./pocketcalc`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join(APP_DIR);
        }
        home_dir().join(".local").join("share").join(APP_DIR)
    }
    #[cfg(target_os = "macos")]
    {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join(APP_DIR)
    }
    #[cfg(target_os = "windows")]
    {
        let appdata = env::var("APPDATA")
            .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
        PathBuf::from(appdata).join(APP_DIR)
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from(".").join(APP_DIR)
    }
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}
