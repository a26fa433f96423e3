use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::models::resume::{Resume, StoredResume};
use crate::random::RandomSource;

/// Suffixes are drawn from `0..ID_SUFFIX_SPACE` and zero-padded to 8 digits.
const ID_SUFFIX_SPACE: u64 = 100_000_000;
const MAX_ID_ATTEMPTS: usize = 16;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("resume {0} not found")]
    NotFound(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not encode resume: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("no free resume id after {MAX_ID_ATTEMPTS} attempts")]
    IdExhausted,
}

/// Saved resumes, keyed by generated id.
///
/// The directory is authoritative: a record is only cached after its file
/// has been written, and a delete removes the file before the cache entry.
pub struct ResumeStore {
    dir: PathBuf,
    records: RwLock<HashMap<String, StoredResume>>,
    rng: Arc<dyn RandomSource>,
}

impl ResumeStore {
    /// Creates `dir` if needed and loads every `<id>.json` already in it.
    pub async fn open(
        dir: impl Into<PathBuf>,
        rng: Arc<dyn RandomSource>,
    ) -> Result<Self, StoreError> {
        let dir = dir.into();
        create_dir(&dir).await?;

        let records = load_dir(&dir).await?;
        info!("Loaded {} saved resumes from {}", records.len(), dir.display());

        Ok(Self {
            dir,
            records: RwLock::new(records),
            rng,
        })
    }

    pub async fn save(&self, resume: Resume) -> Result<StoredResume, StoreError> {
        let timestamp = Utc::now().trunc_subsecs(6);
        let mut records = self.records.write().await;

        create_dir(&self.dir).await?;
        let (resume_id, path) = self.free_id(&records, timestamp).await?;

        let stored = StoredResume {
            resume_id: resume_id.clone(),
            timestamp,
            data: resume,
        };

        let body = serde_json::to_vec_pretty(&stored)?;
        tokio::fs::write(&path, body)
            .await
            .map_err(|source| StoreError::Io { path, source })?;

        records.insert(resume_id.clone(), stored.clone());
        info!("Saved resume {resume_id}");
        Ok(stored)
    }

    pub async fn get(&self, resume_id: &str) -> Result<StoredResume, StoreError> {
        self.records
            .read()
            .await
            .get(resume_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(resume_id.to_string()))
    }

    /// All ids, ascending. Ids start with their save time, so this is
    /// oldest first to one-second resolution.
    pub async fn list(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.records.read().await.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub async fn delete(&self, resume_id: &str) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        if !records.contains_key(resume_id) {
            return Err(StoreError::NotFound(resume_id.to_string()));
        }

        let path = self.path_for(resume_id);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No file for resume {resume_id}; removing cached copy only");
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        }

        records.remove(resume_id);
        info!("Deleted resume {resume_id}");
        Ok(())
    }

    /// Draws ids until one is neither cached nor present on disk. Files
    /// skipped on load still occupy their id.
    async fn free_id(
        &self,
        records: &HashMap<String, StoredResume>,
        at: DateTime<Utc>,
    ) -> Result<(String, PathBuf), StoreError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.generate_id(at);
            if records.contains_key(&id) {
                continue;
            }
            let path = self.path_for(&id);
            let taken = tokio::fs::try_exists(&path)
                .await
                .map_err(|source| StoreError::Io {
                    path: path.clone(),
                    source,
                })?;
            if !taken {
                return Ok((id, path));
            }
            debug!("Resume id {id} already has a file; drawing another");
        }
        Err(StoreError::IdExhausted)
    }

    fn generate_id(&self, at: DateTime<Utc>) -> String {
        let suffix = self.rng.next_u64() % ID_SUFFIX_SPACE;
        format!("resume_{}_{suffix:08}", at.format("%Y%m%d_%H%M%S"))
    }

    fn path_for(&self, resume_id: &str) -> PathBuf {
        self.dir.join(format!("{resume_id}.json"))
    }
}

async fn create_dir(dir: &Path) -> Result<(), StoreError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })
}

async fn load_dir(dir: &Path) -> Result<HashMap<String, StoredResume>, StoreError> {
    let io_err = |source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut records = HashMap::new();
    let mut entries = tokio::fs::read_dir(dir).await.map_err(io_err)?;
    while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()).map(str::to_owned) else {
            continue;
        };

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Skipping unreadable resume file {}: {e}", path.display());
                continue;
            }
        };
        match serde_json::from_slice::<StoredResume>(&bytes) {
            Ok(stored) if stored.resume_id == stem => {
                records.insert(stem, stored);
            }
            Ok(stored) => warn!(
                "Skipping {}: file name does not match resume_id {}",
                path.display(),
                stored.resume_id
            ),
            Err(e) => warn!("Skipping malformed resume file {}: {e}", path.display()),
        }
    }
    Ok(records)
}
