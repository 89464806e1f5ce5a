//! Rotating file writer
//!
//! An append-mode file behind `io::Write` that rotates on size, keeps a
//! bounded set of numbered backups (`app.log.1`, `app.log.2`, ...), optionally
//! gzips rotated files, and prunes backups past a retention age.
//!
//! Callers must hand one complete record per `write` call; rotation only
//! happens between calls, so records are never split across files.

use crate::config::FileConfig;
use crate::core::error::{LoggerError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// When and what to keep across rotations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Rotate once the file reaches this many bytes
    pub max_bytes: u64,
    /// Number of rotated files kept on disk
    pub max_backups: usize,
    /// Prune rotated files older than this; `None` keeps them forever
    pub max_age: Option<Duration>,
    /// Gzip rotated files
    pub compress: bool,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: crate::config::DEFAULT_MAX_SIZE_MB * 1024 * 1024,
            max_backups: crate::config::DEFAULT_MAX_BACKUPS,
            max_age: Some(Duration::from_secs(
                crate::config::DEFAULT_MAX_AGE_DAYS * 24 * 3600,
            )),
            compress: true,
        }
    }
}

impl RotationPolicy {
    pub fn from_config(config: &FileConfig) -> Self {
        Self {
            max_bytes: config.max_size_mb * 1024 * 1024,
            max_backups: config.max_backups,
            max_age: (config.max_age_days > 0)
                .then(|| Duration::from_secs(config.max_age_days * 24 * 3600)),
            compress: config.compress,
        }
    }
}

#[derive(Debug)]
pub struct RotatingFileWriter {
    base_path: PathBuf,
    policy: RotationPolicy,
    writer: Option<BufWriter<File>>,
    current_size: u64,
}

impl RotatingFileWriter {
    /// Open (creating parent directories as needed) the log file for append.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its parent directory cannot be
    /// created or opened.
    pub fn new<P: AsRef<Path>>(path: P, policy: RotationPolicy) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();

        if let Some(parent) = base_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    LoggerError::io_operation(
                        "create log directory",
                        format!("failed to create directory '{}'", parent.display()),
                        e,
                    )
                })?;
            }
        }

        let file = Self::open_append(&base_path)?;
        let current_size = file
            .metadata()
            .map_err(|e| {
                LoggerError::file_sink(
                    base_path.display().to_string(),
                    format!("cannot access file metadata: {}", e),
                )
            })?
            .len();

        Ok(Self {
            base_path,
            policy,
            writer: Some(BufWriter::new(file)),
            current_size,
        })
    }

    fn open_append(path: &Path) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::file_sink(
                    path.display().to_string(),
                    format!("failed to open: {}", e),
                )
            })
    }

    #[must_use]
    pub fn current_size(&self) -> u64 {
        self.current_size
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.base_path
    }

    #[must_use]
    pub fn policy(&self) -> &RotationPolicy {
        &self.policy
    }

    /// Backup file path for the given index
    fn backup_path(&self, index: usize) -> PathBuf {
        let mut path = self.base_path.clone();
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("app.log");
        path.set_file_name(format!("{}.{}", filename, index));
        path
    }

    /// Compressed variant of a backup path (`app.log.1` -> `app.log.1.gz`)
    fn compressed_path(backup: &Path) -> PathBuf {
        let mut name = backup.as_os_str().to_os_string();
        name.push(".gz");
        PathBuf::from(name)
    }

    /// Perform log rotation: shift backups up, move the current file to
    /// `.1`, compress it if configured, prune expired backups, open a fresh
    /// file.
    fn rotate(&mut self) -> Result<()> {
        // Flush and drop the writer so the file handle is released before
        // renames.
        if let Some(mut writer) = self.writer.take() {
            writer.flush().map_err(|e| {
                LoggerError::rotation(
                    self.base_path.display().to_string(),
                    format!("failed to flush before rotation: {}", e),
                )
            })?;
        }

        // The backup at max_backups falls off the end.
        let oldest = self.backup_path(self.policy.max_backups);
        for path in [Self::compressed_path(&oldest), oldest] {
            if path.exists() {
                if let Err(e) = fs::remove_file(&path) {
                    eprintln!(
                        "[logfacade] failed to remove oldest backup {}: {}",
                        path.display(),
                        e
                    );
                }
            }
        }

        // Shift the remaining backups up by one, compressed variant first.
        for i in (1..self.policy.max_backups).rev() {
            let old_path = self.backup_path(i);
            let new_path = self.backup_path(i + 1);

            let old_compressed = Self::compressed_path(&old_path);
            let new_compressed = Self::compressed_path(&new_path);

            if old_compressed.exists() {
                Self::rename_replacing(&old_compressed, &new_compressed)?;
            } else if old_path.exists() {
                Self::rename_replacing(&old_path, &new_path)?;
            }
        }

        // Move the current file to .1 and compress if configured.
        if self.base_path.exists() {
            let backup = self.backup_path(1);
            fs::rename(&self.base_path, &backup).map_err(|e| {
                LoggerError::rotation(
                    self.base_path.display().to_string(),
                    format!("failed to rotate current log file: {}", e),
                )
            })?;

            if self.policy.compress {
                self.compress_file(&backup)?;
            }
        }

        self.prune_expired_backups();

        let file = Self::open_append(&self.base_path)?;
        self.writer = Some(BufWriter::new(file));
        self.current_size = 0;

        Ok(())
    }

    /// Rename, tolerating platforms where rename fails when the destination
    /// exists.
    fn rename_replacing(from: &Path, to: &Path) -> Result<()> {
        if fs::rename(from, to).is_err() {
            if to.exists() {
                let _ = fs::remove_file(to);
            }
            fs::rename(from, to).map_err(|e| {
                LoggerError::rotation(
                    from.display().to_string(),
                    format!("failed to shift backup files: {}", e),
                )
            })?;
        }
        Ok(())
    }

    /// Remove backups whose modification time exceeds the retention age.
    /// Best effort: failures are reported and skipped.
    fn prune_expired_backups(&self) {
        let Some(max_age) = self.policy.max_age else {
            return;
        };
        let now = SystemTime::now();

        for i in 1..=self.policy.max_backups {
            let backup = self.backup_path(i);
            for path in [Self::compressed_path(&backup), backup] {
                let Ok(metadata) = fs::metadata(&path) else {
                    continue;
                };
                let Ok(modified) = metadata.modified() else {
                    continue;
                };
                if now.duration_since(modified).map_or(false, |age| age > max_age) {
                    if let Err(e) = fs::remove_file(&path) {
                        eprintln!(
                            "[logfacade] failed to prune expired backup {}: {}",
                            path.display(),
                            e
                        );
                    }
                }
            }
        }
    }

    /// Gzip a rotated file in place, streaming through a temporary file so
    /// the original is only removed after compression fully succeeded.
    fn compress_file(&self, path: &Path) -> Result<()> {
        let gz_path = Self::compressed_path(path);
        let tmp_path = {
            let mut name = gz_path.as_os_str().to_os_string();
            name.push(".tmp");
            PathBuf::from(name)
        };

        let result = (|| -> Result<()> {
            let input = File::open(path).map_err(|e| {
                LoggerError::io_operation(
                    "compress log file",
                    format!("failed to open '{}' for compression", path.display()),
                    e,
                )
            })?;
            let mut reader = BufReader::new(input);

            let output = File::create(&tmp_path).map_err(|e| {
                LoggerError::io_operation(
                    "compress log file",
                    format!("failed to create '{}'", tmp_path.display()),
                    e,
                )
            })?;
            let mut encoder = flate2::write::GzEncoder::new(
                BufWriter::new(output),
                flate2::Compression::default(),
            );

            io::copy(&mut reader, &mut encoder).map_err(|e| {
                LoggerError::io_operation("compress log file", "failed to compress data", e)
            })?;
            encoder.finish().map_err(|e| {
                LoggerError::io_operation("compress log file", "failed to finish compression", e)
            })?;

            fs::rename(&tmp_path, &gz_path).map_err(|e| {
                LoggerError::io_operation(
                    "compress log file",
                    format!("failed to rename compressed file to '{}'", gz_path.display()),
                    e,
                )
            })
        })();

        if let Err(e) = result {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        // Only remove the original after the compressed copy is in place.
        if let Err(e) = fs::remove_file(path) {
            eprintln!(
                "[logfacade] compression succeeded but failed to remove original {}: {}",
                path.display(),
                e
            );
        }

        Ok(())
    }

    /// Reopen the log file after a failed rotation so records keep flowing.
    fn recover_writer(&mut self) {
        if self.writer.is_some() {
            return;
        }
        match Self::open_append(&self.base_path) {
            Ok(file) => {
                self.current_size = file.metadata().map(|m| m.len()).unwrap_or(0);
                self.writer = Some(BufWriter::new(file));
            }
            Err(e) => {
                eprintln!(
                    "[logfacade] failed to reopen log file after rotation failure: {}",
                    e
                );
            }
        }
    }
}

impl Write for RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.current_size >= self.policy.max_bytes {
            if let Err(e) = self.rotate() {
                // Rotation failure must not lose records; keep writing to the
                // current file and reset size tracking so rotation is not
                // retried on every record.
                eprintln!(
                    "[logfacade] rotation failed for {}: {}; continuing on current file",
                    self.base_path.display(),
                    e
                );
                self.recover_writer();
                self.current_size = 0;
            }
        }

        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| io::Error::other("log file writer not initialized"))?;
        writer.write_all(buf)?;
        self.current_size += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for RotatingFileWriter {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }
    }
}
