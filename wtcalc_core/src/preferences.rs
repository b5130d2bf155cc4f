//! # Preferences
//!
//! The one piece of persisted state: the calculator menu the user picked
//! last. Stored as a small JSON file.
//!
//! - **Atomic saves**: write to a per-save `.<pid>.<n>.tmp` file, fsync,
//!   rename over the target
//! - **Locking**: an exclusive OS lock on a `.lock` sidecar while saving.
//!   The sidecar is never removed, so every saver locks the same inode
//! - **Forgiving loads**: a missing file means defaults, and a file without
//!   `updated` is stamped with the load time
//!
//! ## Example
//!
//! ```rust,no_run
//! use wtcalc_core::preferences::{load_preferences, save_preferences};
//! use wtcalc_core::report::Mode;
//! use std::path::Path;
//!
//! let path = Path::new("wtcalcs-prefs.json");
//! let prefs = load_preferences(path)?.with_mode(Mode::Wilks);
//! save_preferences(&prefs, path)?;
//! # Ok::<(), wtcalc_core::errors::CalcError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::report::Mode;

/// Default preferences file name
pub const PREFERENCES_FILE: &str = "wtcalcs-prefs.json";

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Last selected calculator menu
    #[serde(default)]
    pub main_menu_option: Mode,

    /// When the preferences were last changed
    #[serde(default = "Utc::now")]
    pub updated: DateTime<Utc>,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            main_menu_option: Mode::default(),
            updated: Utc::now(),
        }
    }
}

impl Preferences {
    /// Select a mode, touching `updated` only when it changes.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        if self.main_menu_option != mode {
            self.main_menu_option = mode;
            self.updated = Utc::now();
        }
        self
    }
}

/// Load preferences, falling back to defaults when the file does not exist.
pub fn load_preferences(path: &Path) -> CalcResult<Preferences> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("no preferences at {}, using defaults", path.display());
            return Ok(Preferences::default());
        }
        Err(e) => {
            return Err(CalcError::file_error("read", path.display().to_string(), e.to_string()));
        }
    };

    serde_json::from_str(&contents).map_err(|e| {
        CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })
}

/// Save preferences with atomic write semantics.
///
/// Concurrent saves to the same path serialize on the `.lock` sidecar; the
/// last one to take the lock wins.
pub fn save_preferences(prefs: &Preferences, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(prefs).map_err(|e| CalcError::serialization(e.to_string()))?;

    let lock_path = sidecar_path(path, "lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .map_err(|e| CalcError::file_error("create lock", lock_path.display().to_string(), e.to_string()))?;

    lock_file
        .lock_exclusive()
        .map_err(|e| CalcError::file_error("lock", lock_path.display().to_string(), e.to_string()))?;

    let result = write_atomic(path, json.as_bytes());

    if let Err(e) = FileExt::unlock(&lock_file) {
        log::warn!("failed to unlock {}: {}", lock_path.display(), e);
    }

    result
}

fn write_atomic(path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let tmp_path = unique_tmp_path(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    log::debug!("saved preferences to {}", path.display());
    Ok(())
}

/// `prefs.json` -> `prefs.json.<suffix>`
fn sidecar_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// `prefs.json` -> `prefs.json.<pid>.<n>.tmp`, unique within this process
fn unique_tmp_path(path: &Path) -> PathBuf {
    let n = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    sidecar_path(path, &format!("{}.{}.tmp", process::id(), n))
}
