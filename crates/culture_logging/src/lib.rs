//! Logging setup for the culture site tools.
//!
//! Everything at the configured level goes to a size-rotated file under
//! `$CULTURE_SITE_HOME/logs`; stderr only shows warnings unless `--verbose`,
//! so JSON written to stdout stays machine-readable.

use anyhow::{anyhow, Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const DEFAULT_LOG_FILTER: &str = "culture_site=info,culture_content=info,culture_form=info";
pub const HOME_ENV: &str = "CULTURE_SITE_HOME";

const KEEP_FILES: usize = 5;
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;

pub struct LogConfig<'a> {
    /// Base name of the log file (`<app_name>.log`)
    pub app_name: &'a str,
    /// Mirror the file filter on stderr instead of warnings only
    pub verbose: bool,
    /// Log directory; defaults to [`logs_dir`]
    pub log_dir: Option<PathBuf>,
}

/// Install the global subscriber. Call once, early in `main`.
pub fn init_logging(config: LogConfig<'_>) -> Result<()> {
    let dir = match config.log_dir {
        Some(dir) => dir,
        None => logs_dir()?,
    };
    let sink = LogSink::open(&dir, config.app_name)
        .with_context(|| format!("Failed to open log file in {}", dir.display()))?;

    let file_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let stderr_filter = if config.verbose {
        file_filter.clone()
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(sink)
                .with_ansi(false)
                .with_filter(file_filter),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(stderr_filter),
        )
        .try_init()
        .map_err(|err| anyhow!("Failed to install log subscriber: {}", err))?;

    Ok(())
}

/// The tool's home directory: `$CULTURE_SITE_HOME`, else `~/.culture_site`.
pub fn site_home() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(HOME_ENV) {
        return Ok(PathBuf::from(path));
    }
    dirs::home_dir()
        .map(|home| home.join(".culture_site"))
        .context("Could not determine home directory; set CULTURE_SITE_HOME")
}

pub fn logs_dir() -> Result<PathBuf> {
    Ok(site_home()?.join("logs"))
}

/// Append-only log file that starts over once it reaches `limit` bytes,
/// keeping `keep - 1` numbered archives (`name.log.1` is the newest).
struct RotatingLog {
    dir: PathBuf,
    stem: String,
    keep: usize,
    limit: u64,
    file: Option<File>,
    written: u64,
}

impl RotatingLog {
    fn open(dir: &Path, name: &str, keep: usize, limit: u64) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let mut log = Self {
            dir: dir.to_path_buf(),
            stem: file_stem(name),
            keep: keep.max(1),
            limit,
            file: None,
            written: 0,
        };
        log.reopen()?;
        if log.written > log.limit {
            log.roll()?;
        }
        Ok(log)
    }

    fn live_path(&self) -> PathBuf {
        self.dir.join(format!("{}.log", self.stem))
    }

    fn archive_path(&self, n: usize) -> PathBuf {
        self.dir.join(format!("{}.log.{}", self.stem, n))
    }

    fn reopen(&mut self) -> io::Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.live_path())?;
        self.written = file.metadata()?.len();
        self.file = Some(file);
        Ok(())
    }

    fn roll(&mut self) -> io::Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush()?;
        }

        let archives = self.keep - 1;
        if archives > 0 {
            // Drop the oldest, then shift name.log.N -> name.log.N+1
            let oldest = self.archive_path(archives);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for n in (1..archives).rev() {
                let from = self.archive_path(n);
                if from.exists() {
                    fs::rename(&from, self.archive_path(n + 1))?;
                }
            }
            let live = self.live_path();
            if live.exists() {
                fs::rename(&live, self.archive_path(1))?;
            }
        } else {
            fs::remove_file(self.live_path())?;
        }

        self.reopen()
    }
}

impl Write for RotatingLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.limit {
            self.roll()?;
        }
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| io::Error::other("log file is closed"))?;
        let n = file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

/// Cloneable handle to the shared log file, usable as a `MakeWriter`.
#[derive(Clone)]
struct LogSink(Arc<Mutex<RotatingLog>>);

impl LogSink {
    fn open(dir: &Path, name: &str) -> io::Result<Self> {
        let log = RotatingLog::open(dir, name, KEEP_FILES, ROTATE_AT_BYTES)?;
        Ok(Self(Arc::new(Mutex::new(log))))
    }

    fn with_log<T>(&self, f: impl FnOnce(&mut RotatingLog) -> io::Result<T>) -> io::Result<T> {
        let mut log = self
            .0
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        f(&mut log)
    }
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_log(|log| log.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.with_log(|log| log.flush())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogSink {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn file_stem(name: &str) -> String {
    name.chars()
        .map(|ch| match ch {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => ch,
            _ => '_',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_stem_replaces_separators() {
        assert_eq!(file_stem("culture_site"), "culture_site");
        assert_eq!(file_stem("../evil name"), "___evil_name");
    }

    #[test]
    fn test_rotation_keeps_bounded_archives() {
        let dir = TempDir::new().unwrap();
        let mut log = RotatingLog::open(dir.path(), "site", 3, 16).unwrap();

        for i in 0..6 {
            writeln!(log, "line number {:02}", i).unwrap();
        }
        log.flush().unwrap();

        assert!(dir.path().join("site.log").exists());
        assert!(dir.path().join("site.log.1").exists());
        assert!(dir.path().join("site.log.2").exists());
        assert!(!dir.path().join("site.log.3").exists());

        let live = fs::read_to_string(dir.path().join("site.log")).unwrap();
        assert_eq!(live, "line number 05\n");
        let newest = fs::read_to_string(dir.path().join("site.log.1")).unwrap();
        assert_eq!(newest, "line number 04\n");
    }

    #[test]
    fn test_reopen_appends_to_existing_file() {
        let dir = TempDir::new().unwrap();
        {
            let mut log = RotatingLog::open(dir.path(), "site", 5, 1024).unwrap();
            log.write_all(b"first\n").unwrap();
        }
        let mut log = RotatingLog::open(dir.path(), "site", 5, 1024).unwrap();
        log.write_all(b"second\n").unwrap();
        log.flush().unwrap();

        let live = fs::read_to_string(dir.path().join("site.log")).unwrap();
        assert_eq!(live, "first\nsecond\n");
    }

    #[test]
    fn test_sink_shares_one_file() {
        let dir = TempDir::new().unwrap();
        let sink = LogSink::open(dir.path(), "shared").unwrap();
        let mut a = sink.clone();
        let mut b = sink;
        a.write_all(b"a\n").unwrap();
        b.write_all(b"b\n").unwrap();
        b.flush().unwrap();

        let live = fs::read_to_string(dir.path().join("shared.log")).unwrap();
        assert_eq!(live, "a\nb\n");
    }
}
