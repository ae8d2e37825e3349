//! # File I/O Module
//!
//! Disk operations around the design engine:
//! - **History files**: JSON history log with schema version validation
//! - **Script export**: write every generated CAD script under its fixed name
//! - **Atomic writes**: write to `.tmp`, fsync, rename, so an interrupted save
//!   never leaves a truncated file
//! - **File locking**: one writer per history file, visible to other users via
//!   a `.lock` file
//!
//! ## Example
//!
//! ```rust,no_run
//! use fan_core::file_io::{load_or_create_history, save_history, FileLock};
//! use fan_core::{design, FanInput};
//! use std::path::Path;
//!
//! let path = Path::new("fan_history.json");
//! let lock = FileLock::acquire(path, "designer@company.com").unwrap();
//!
//! let mut log = load_or_create_history(path).unwrap();
//! let input = FanInput::default();
//! log.record(&input, &design(&input));
//! save_history(&log, path).unwrap();
//!
//! // Lock is released when dropped
//! drop(lock);
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{CalcError, CalcResult};
use crate::history::{HistoryLog, SCHEMA_VERSION};
use crate::scripts::ScriptSet;

/// Lock file metadata stored next to the locked file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    /// Machine name where lock was acquired
    pub machine: String,
    /// Process ID that holds the lock
    pub pid: u32,
    /// When the lock was acquired
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Create new lock info for the current process
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }
}

fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        // HOSTNAME is usually not exported to child processes
        ["/proc/sys/kernel/hostname", "/etc/hostname"]
            .iter()
            .filter_map(|p| fs::read_to_string(p).ok())
            .map(|s| s.trim().to_string())
            .find(|s| !s.is_empty())
            .or_else(|| std::env::var("HOSTNAME").ok())
            .or_else(|| std::env::var("HOST").ok())
    }
}

/// File lock guard that releases the lock when dropped.
///
/// Holds an OS-level lock (via fs2) on the `.lock` file and records who owns
/// it inside that file.
pub struct FileLock {
    target_path: PathBuf,
    lock_path: PathBuf,
    /// Keeps the OS lock alive
    _lock_file: File,
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on `path`.
    ///
    /// Fails with [`CalcError::FileLocked`] when a live process already holds
    /// it. Stale locks (dead process, or older than 24 hours) are taken over.
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> CalcResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(user_id);

        if lock_path.exists() {
            if let Ok(existing) = read_lock_info(&lock_path) {
                if !is_lock_stale(&existing) {
                    return Err(CalcError::file_locked(
                        path.display().to_string(),
                        format!("{} ({})", existing.user_id, existing.machine),
                        existing.locked_at.to_rfc3339(),
                    ));
                }
                warn!(path = %lock_path.display(), holder = %existing.user_id, "taking over stale lock");
            }
        }

        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| CalcError::file_error("create lock", lock_path.display().to_string(), e.to_string()))?;

        lock_file.try_lock_exclusive().map_err(|_| {
            CalcError::file_locked(
                path.display().to_string(),
                "another process".to_string(),
                "unknown".to_string(),
            )
        })?;

        // Only the holder may replace the previous owner's metadata
        lock_file
            .set_len(0)
            .map_err(|e| CalcError::file_error("truncate lock", lock_path.display().to_string(), e.to_string()))?;

        let lock_json = serde_json::to_string_pretty(&info).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })?;

        lock_file
            .write_all(lock_json.as_bytes())
            .map_err(|e| CalcError::file_error("write lock", lock_path.display().to_string(), e.to_string()))?;

        lock_file
            .sync_all()
            .map_err(|e| CalcError::file_error("sync lock", lock_path.display().to_string(), e.to_string()))?;

        debug!(path = %path.display(), user = %info.user_id, "lock acquired");

        Ok(FileLock {
            target_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Current holder of the lock on `path`, if any live process holds it
    pub fn check(path: &Path) -> Option<LockInfo> {
        let lock_path = lock_path_for(path);
        if lock_path.exists() {
            if let Ok(info) = read_lock_info(&lock_path) {
                if !is_lock_stale(&info) {
                    return Some(info);
                }
            }
        }
        None
    }

    /// Path of the locked file
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}

/// `history.json` -> `history.json.lock`
fn lock_path_for(path: &Path) -> PathBuf {
    let mut lock_path = path.to_path_buf();
    let extension = lock_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

/// `history.json` -> `history.json.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp_path = path.to_path_buf();
    let extension = tmp_path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    tmp_path.set_extension(extension);
    tmp_path
}

fn read_to_string(path: &Path, operation: &str) -> CalcResult<String> {
    let mut file =
        File::open(path).map_err(|e| CalcError::file_error(operation, path.display().to_string(), e.to_string()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error(operation, path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

fn read_lock_info(lock_path: &Path) -> CalcResult<LockInfo> {
    let contents = read_to_string(lock_path, "read lock")?;
    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })
}

/// A lock is stale when its process is gone (same machine) or it is older
/// than 24 hours.
fn is_lock_stale(info: &LockInfo) -> bool {
    if let Some(our_machine) = hostname() {
        if info.machine == our_machine {
            #[cfg(windows)]
            {
                use std::process::Command;
                let output = Command::new("tasklist")
                    .args(["/FI", &format!("PID eq {}", info.pid), "/NH"])
                    .output();
                if let Ok(output) = output {
                    let stdout = String::from_utf8_lossy(&output.stdout);
                    if stdout.contains("No tasks") || !stdout.contains(&info.pid.to_string()) {
                        return true;
                    }
                }
            }
            #[cfg(unix)]
            {
                if fs::metadata(format!("/proc/{}", info.pid)).is_err() {
                    return true;
                }
            }
        }
    }

    let age = Utc::now() - info.locked_at;
    age.num_hours() > 24
}

/// Write `contents` to `path` atomically: temp file, fsync, rename.
pub fn write_atomic(path: &Path, contents: &[u8]) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path)
        .map_err(|e| CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string()))?;

    tmp_file
        .write_all(contents)
        .map_err(|e| CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()))?;

    tmp_file
        .sync_all()
        .map_err(|e| CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string()))?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Save a history log as pretty JSON with atomic write semantics.
///
/// # Example
///
/// ```rust,no_run
/// use fan_core::file_io::save_history;
/// use fan_core::history::HistoryLog;
/// use std::path::Path;
///
/// save_history(&HistoryLog::new(), Path::new("fan_history.json"))?;
/// # Ok::<(), fan_core::errors::CalcError>(())
/// ```
pub fn save_history(log: &HistoryLog, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(log).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;
    write_atomic(path, json.as_bytes())?;
    debug!(path = %path.display(), records = log.len(), "history saved");
    Ok(())
}

/// Load a history log.
///
/// # Returns
///
/// * `Ok(HistoryLog)` - Successfully loaded
/// * `Err(CalcError::VersionMismatch)` - File schema is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_history(path: &Path) -> CalcResult<HistoryLog> {
    let contents = read_to_string(path, "read")?;

    let log: HistoryLog = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    validate_version(&log.meta.version)?;

    Ok(log)
}

/// Load a history log, or start an empty one when the file does not exist yet
pub fn load_or_create_history(path: &Path) -> CalcResult<HistoryLog> {
    if path.exists() {
        load_history(path)
    } else {
        debug!(path = %path.display(), "no history file, starting empty log");
        Ok(HistoryLog::new())
    }
}

/// Load a history log and report who, if anyone, holds its lock
pub fn load_history_with_lock_check(path: &Path) -> CalcResult<(HistoryLog, Option<LockInfo>)> {
    let log = load_or_create_history(path)?;
    let lock_info = FileLock::check(path);
    Ok((log, lock_info))
}

/// Write every script in `scripts` into `dir` under its fixed file name.
///
/// Creates `dir` if needed. Returns the written paths in generation order.
pub fn write_scripts(scripts: &ScriptSet, dir: &Path) -> CalcResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .map_err(|e| CalcError::file_error("create directory", dir.display().to_string(), e.to_string()))?;

    scripts
        .iter()
        .map(|(kind, text)| {
            let path = dir.join(kind.file_name());
            write_atomic(&path, text.as_bytes())?;
            debug!(path = %path.display(), kind = %kind, "script written");
            Ok(path)
        })
        .collect()
}

/// Major version must match; for 0.x files the minor may not be newer.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version.split('.').filter_map(|p| p.parse().ok()).collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION.split('.').filter_map(|p| p.parse().ok()).collect();

    if file_parts.is_empty() || current_parts.is_empty() || file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::design;
    use crate::inputs::FanInput;
    use crate::scripts::ScriptKind;
    use std::env::temp_dir;

    fn temp_history_path(name: &str) -> PathBuf {
        temp_dir().join(format!("fandesign_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_lock_path_generation() {
        let lock_path = lock_path_for(Path::new("/path/to/history.json"));
        assert_eq!(lock_path, Path::new("/path/to/history.json.lock"));
        assert_eq!(tmp_path_for(Path::new("/a/b.json")), Path::new("/a/b.json.tmp"));
        assert_eq!(lock_path_for(Path::new("/a/noext")), Path::new("/a/noext.lock"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_history_path("roundtrip");

        let mut log = HistoryLog::new();
        let input = FanInput::default();
        let id = log.record(&input, &design(&input));
        save_history(&log, &path).unwrap();

        let loaded = load_history(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.records[0].id, id);
        assert_eq!(loaded.records[0].inputs, input);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let path = temp_history_path("atomic");
        save_history(&HistoryLog::new(), &path).unwrap();
        assert!(!tmp_path_for(&path).exists());
        assert!(path.exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_history_starts_empty() {
        let path = temp_history_path("missing");
        let _ = fs::remove_file(&path);
        assert!(load_or_create_history(&path).unwrap().is_empty());
        assert!(matches!(load_history(&path), Err(CalcError::FileError { .. })));
    }

    #[test]
    fn test_rejects_newer_schema() {
        let path = temp_history_path("newer");
        let mut log = HistoryLog::new();
        log.meta.version = "0.9.0".to_string();
        save_history(&log, &path).unwrap();
        assert!(matches!(load_history(&path), Err(CalcError::VersionMismatch { .. })));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_lock_acquire_and_release() {
        let path = temp_history_path("lock");
        File::create(&path).unwrap();

        let lock = FileLock::acquire(&path, "test@example.com").unwrap();
        assert_eq!(lock.info.user_id, "test@example.com");
        assert_eq!(lock.target_path(), path.as_path());

        let lock_path = lock_path_for(&path);
        assert!(lock_path.exists());

        drop(lock);
        assert!(!lock_path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_failed_acquire_keeps_holder_metadata() {
        let path = temp_history_path("contended");
        let lock_path = lock_path_for(&path);

        // Holder whose metadata looks stale (old timestamp) but still holds the OS lock
        let holder_info = LockInfo {
            locked_at: Utc::now() - chrono::Duration::hours(48),
            ..LockInfo::new("holder@example.com")
        };
        let mut holder = File::create(&lock_path).unwrap();
        holder
            .write_all(serde_json::to_string_pretty(&holder_info).unwrap().as_bytes())
            .unwrap();
        holder.sync_all().unwrap();
        holder.try_lock_exclusive().unwrap();

        let result = FileLock::acquire(&path, "intruder@example.com");
        assert!(matches!(result, Err(CalcError::FileLocked { .. })));

        let still_there = read_lock_info(&lock_path).unwrap();
        assert_eq!(still_there.user_id, "holder@example.com");

        drop(holder);
        let _ = fs::remove_file(&lock_path);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_hostname_without_env() {
        assert!(hostname().is_some_and(|h| !h.is_empty()));
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_write_scripts() {
        let dir = temp_dir().join(format!("fandesign_scripts_{}", std::process::id()));
        let result = design(&FanInput::default());

        let written = write_scripts(&result.scripts, &dir).unwrap();
        assert_eq!(written.len(), ScriptKind::ALL.len());
        let drafting = fs::read_to_string(dir.join("fan_design.scr")).unwrap();
        assert_eq!(drafting, result.scripts.drafting);
        assert!(dir.join("Create_Casing.vbs").exists());

        let _ = fs::remove_dir_all(&dir);
    }
}
