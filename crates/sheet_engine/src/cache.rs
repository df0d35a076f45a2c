use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::types::NormalizedSheet;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache directory missing or not writable: {0}")]
    CacheDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Disk-backed memoization of normalized sheets, one JSON file per sheet
/// identifier. Reads return `None` on miss or error; writes are
/// best-effort and never surface failures to the caller.
#[derive(Debug, Clone)]
pub struct SheetCache {
    dir: PathBuf,
}

impl SheetCache {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn load(&self, sheet_id: &str) -> Option<NormalizedSheet> {
        let path = self.entry_path(sheet_id);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                log::warn!("cache miss for {sheet_id}: {err}");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(sheet) => {
                log::info!("loaded {sheet_id} from cache");
                Some(sheet)
            }
            Err(err) => {
                log::warn!("cache entry for {sheet_id} is unreadable: {err}");
                None
            }
        }
    }

    pub fn store(&self, sheet_id: &str, sheet: &NormalizedSheet) {
        match self.try_store(sheet_id, sheet) {
            Ok(path) => log::info!("saved {sheet_id} to {}", path.display()),
            Err(err) => log::error!("failed to cache {sheet_id}: {err}"),
        }
    }

    fn try_store(&self, sheet_id: &str, sheet: &NormalizedSheet) -> Result<PathBuf, CacheError> {
        ensure_cache_dir(&self.dir)?;
        let content = serde_json::to_string_pretty(sheet)?;

        // Write a temp file then rename so a crashed write never leaves a
        // truncated entry behind.
        let target = self.entry_path(sheet_id);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| CacheError::Io(e.error))?;
        Ok(target)
    }

    fn entry_path(&self, sheet_id: &str) -> PathBuf {
        self.dir.join(format!("{sheet_id}.json"))
    }
}

/// Ensure the cache directory exists; create it if missing.
fn ensure_cache_dir(dir: &Path) -> Result<(), CacheError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| CacheError::CacheDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(CacheError::CacheDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| CacheError::CacheDir(e.to_string()))?;
    }
    Ok(())
}
