use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{MoodlogError, Result};

/// Tick rate for the event loop.
///
/// Ticks only drive the midnight rollover check, so a coarse rate is enough.
pub const TICK_RATE: Duration = Duration::from_millis(500);

/// How many days back the stats view aggregates moods
pub const STATS_WINDOW_DAYS: i64 = 30;

/// How many recent entries the stats view lists
pub const RECENT_ENTRIES_LIMIT: usize = 8;

/// Get the path to the database file.
///
/// Returns the path to `moodlog.db` in the appropriate data directory:
/// - Linux: `~/.local/share/moodlog/moodlog.db`
/// - macOS: `~/Library/Application Support/moodlog/moodlog.db`
/// - Windows: `C:\Users\<User>\AppData\Roaming\moodlog\moodlog.db`
pub fn get_db_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "moodlog").ok_or(MoodlogError::NoDataDirectory)?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("moodlog.db"))
}

/// Get the path to the log file.
///
/// Returns the path to `moodlog.log` in the same data directory as the database.
pub fn get_log_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "moodlog").ok_or(MoodlogError::NoDataDirectory)?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("moodlog.log"))
}
