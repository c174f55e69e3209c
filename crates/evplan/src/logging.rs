use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the output directory
pub const LOG_FILE: &str = "evplan.log";

/// Maximum log file size before rotation (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Size to keep after rotation (1 MB of most recent logs)
const KEEP_SIZE: u64 = 1024 * 1024;

/// Trim the log file to its most recent `KEEP_SIZE` bytes once it grows past
/// `MAX_LOG_SIZE`.
fn rotate_log_if_needed(log_path: &Path) -> std::io::Result<()> {
    let Ok(metadata) = fs::metadata(log_path) else {
        return Ok(());
    };
    if metadata.len() <= MAX_LOG_SIZE {
        return Ok(());
    }

    let mut tail = Vec::new();
    {
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(metadata.len().saturating_sub(KEEP_SIZE)))?;
        file.read_to_end(&mut tail)?;
    }

    // Drop the partial first line
    let skip = tail.iter().position(|&b| b == b'\n').map_or(0, |i| i + 1);

    let mut file = File::create(log_path)?;
    file.write_all(b"--- Log rotated (older entries removed) ---\n")?;
    file.write_all(&tail[skip..])?;
    Ok(())
}

/// Default filter directives for a `--log-level` value
pub fn default_filter(level: &str) -> String {
    format!("evplan={level},evplan_core=warn")
}

/// Open `{log_dir}/evplan.log` for appending behind a non-blocking writer.
///
/// `None` means stderr only; nothing is created on disk.
fn file_writer(log_dir: Option<&Path>) -> std::io::Result<Option<(NonBlocking, WorkerGuard)>> {
    let Some(log_dir) = log_dir else {
        return Ok(None);
    };
    fs::create_dir_all(log_dir)?;

    let log_path = log_dir.join(LOG_FILE);
    if let Err(e) = rotate_log_if_needed(&log_path) {
        eprintln!("Warning: Failed to rotate log file: {}", e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    Ok(Some(tracing_appender::non_blocking(file)))
}

/// Initialize logging to stderr and, when `log_dir` is given, to
/// `{log_dir}/evplan.log`.
///
/// The file layer goes through a non-blocking writer; keep the returned guard
/// alive until the run ends so buffered lines are flushed. `RUST_LOG`
/// overrides the level passed in.
pub fn init_logging(log_dir: Option<&Path>, level: &str) -> color_eyre::Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match file_writer(log_dir)? {
        Some((writer, guard)) => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .with(file_layer)
        .try_init()?;

    match log_dir {
        Some(dir) => {
            tracing::info!(log_path = %dir.join(LOG_FILE).display(), "evplan logging initialized")
        }
        None => tracing::info!("evplan logging initialized (stderr only)"),
    }
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter("debug"), "evplan=debug,evplan_core=warn");
    }

    #[test]
    fn test_stderr_only_creates_nothing() {
        let dir = tempdir().unwrap();
        let log_dir = dir.path().join("results");
        assert!(file_writer(None).unwrap().is_none());
        assert!(!log_dir.exists());
    }

    #[test]
    fn test_file_writer_creates_log() {
        let dir = tempdir().unwrap();
        let log_dir = dir.path().join("results");
        let writer = file_writer(Some(&log_dir)).unwrap();
        assert!(writer.is_some());
        assert!(log_dir.join(LOG_FILE).is_file());
    }

    #[test]
    fn test_rotation_keeps_recent_tail() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOG_FILE);

        let line = "x".repeat(99) + "\n";
        let lines = (MAX_LOG_SIZE as usize / line.len()) + 10;
        fs::write(&path, line.repeat(lines)).unwrap();

        rotate_log_if_needed(&path).unwrap();

        let rotated = fs::read_to_string(&path).unwrap();
        assert!(rotated.starts_with("--- Log rotated"));
        assert!(rotated.len() as u64 <= KEEP_SIZE + 64);
        assert!(rotated.ends_with('\n'));
    }

    #[test]
    fn test_rotation_ignores_missing_and_small_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOG_FILE);
        rotate_log_if_needed(&path).unwrap();

        fs::write(&path, "small\n").unwrap();
        rotate_log_if_needed(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "small\n");
    }
}
